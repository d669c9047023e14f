//! Built-in converters
//!
//! Implements parse/format pairs for: Int8, Int16, Int32, Int64, Float32,
//! Float64, BigInteger, BigDecimal, Decimal, Char, Boolean, Uuid

pub mod decimal;
pub mod float;
pub mod integer;
pub mod text;

pub use decimal::*;
pub use float::*;
pub use integer::*;
pub use text::*;

use crate::{BigDecimal, BigInt, Converter, Decimal, RegistryBuilder, Uuid};
use std::fmt;

/// Format any value through its `Display` implementation
pub fn format_display<T: fmt::Display>(value: &T) -> String {
    value.to_string()
}

pub const INT8: Converter<i8> = Converter::new(parse_int8, format_display::<i8>);
pub const INT16: Converter<i16> = Converter::new(parse_int16, format_display::<i16>);
pub const INT32: Converter<i32> = Converter::new(parse_int32, format_display::<i32>);
pub const INT64: Converter<i64> = Converter::new(parse_int64, format_display::<i64>);
pub const FLOAT32: Converter<f32> = Converter::new(parse_float32, format_display::<f32>);
pub const FLOAT64: Converter<f64> = Converter::new(parse_float64, format_display::<f64>);
pub const BIG_INTEGER: Converter<BigInt> = Converter::new(parse_big_integer, format_display::<BigInt>);
pub const BIG_DECIMAL: Converter<BigDecimal> = Converter::new(parse_big_decimal, format_display::<BigDecimal>);
pub const DECIMAL: Converter<Decimal> = Converter::new(parse_decimal, format_display::<Decimal>);
pub const CHAR: Converter<char> = Converter::new(parse_char, format_display::<char>);
pub const BOOLEAN: Converter<bool> = Converter::new(parse_boolean, format_display::<bool>);
pub const UUID: Converter<Uuid> = Converter::new(parse_uuid, format_uuid);

/// Register every built-in converter
pub(crate) fn register_builtins(builder: RegistryBuilder) -> RegistryBuilder {
    builder
        .register(INT8)
        .register(INT16)
        .register(INT32)
        .register(INT64)
        .register(FLOAT32)
        .register(FLOAT64)
        .register(BIG_INTEGER)
        .register(BIG_DECIMAL)
        .register(DECIMAL)
        .register(CHAR)
        .register(BOOLEAN)
        .register(UUID)
}

/// Strip one leading sign character
fn unsigned_part(input: &str) -> &str {
    input.strip_prefix(|c: char| c == '+' || c == '-').unwrap_or(input)
}

/// Non-empty run of ASCII digits
fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
