//! Fixed-width signed integers

use crate::error::ParseResult;
use crate::{ParseError, Scalar};
use std::num::{IntErrorKind, ParseIntError};
use std::str::FromStr;

/// Parse decimal text into a fixed-width integer, reporting overflow as a range error
fn parse_int<T>(input: &str) -> ParseResult<T>
where
    T: Scalar + FromStr<Err = ParseIntError>,
{
    input.parse::<T>().map_err(|e| {
        let err = match e.kind() {
            IntErrorKind::PosOverflow | IntErrorKind::NegOverflow => {
                ParseError::out_of_range(T::SCALAR_TYPE, input)
            }
            _ => ParseError::malformed(T::SCALAR_TYPE, input),
        };
        err.with_cause(e)
    })
}

pub fn parse_int8(input: &str) -> ParseResult<i8> {
    parse_int(input)
}

pub fn parse_int16(input: &str) -> ParseResult<i16> {
    parse_int(input)
}

pub fn parse_int32(input: &str) -> ParseResult<i32> {
    parse_int(input)
}

pub fn parse_int64(input: &str) -> ParseResult<i64> {
    parse_int(input)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ParseErrorKind;

    #[test]
    fn test_parse_int8() {
        assert_eq!(parse_int8("5").unwrap(), 5);
        assert_eq!(parse_int8("-128").unwrap(), i8::MIN);
        assert_eq!(parse_int8("+127").unwrap(), i8::MAX);
    }

    #[test]
    fn test_range_violation() {
        let err = parse_int8("300").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::OutOfRange);
        assert!(err.cause().is_some());

        let err = parse_int16("-32769").unwrap_err();
        assert_eq!(err.kind(), ParseErrorKind::OutOfRange);

        assert_eq!(parse_int32("2147483648").unwrap_err().kind(), ParseErrorKind::OutOfRange);
        assert_eq!(parse_int64("9223372036854775807").unwrap(), i64::MAX);
    }

    #[test]
    fn test_malformed() {
        for input in ["", "abc", "1.0", " 1", "1 ", "0x10", "--1", "1e3"] {
            let err = parse_int32(input).unwrap_err();
            assert_eq!(err.kind(), ParseErrorKind::Malformed, "input {:?}", input);
            assert_eq!(err.raw_input(), input);
        }
    }
}
