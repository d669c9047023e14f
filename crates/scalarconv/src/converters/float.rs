//! IEEE 754 floating point
//!
//! Accepts decimal and exponential notation plus `inf`, `infinity` and `nan`
//! in any ASCII case. Magnitudes beyond the type's range parse to infinity.

use crate::error::ParseResult;
use crate::{ParseError, Scalar};
use std::num::ParseFloatError;
use std::str::FromStr;

fn parse_float<T>(input: &str) -> ParseResult<T>
where
    T: Scalar + FromStr<Err = ParseFloatError>,
{
    input
        .parse::<T>()
        .map_err(|e| ParseError::malformed(T::SCALAR_TYPE, input).with_cause(e))
}

pub fn parse_float32(input: &str) -> ParseResult<f32> {
    parse_float(input)
}

pub fn parse_float64(input: &str) -> ParseResult<f64> {
    parse_float(input)
}
