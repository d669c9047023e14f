//! Property tests: parse(format(x)) == x for every registered type
//!
//! Floats are checked over finite values only; NaN never compares equal.

use proptest::prelude::*;
use scalarconv::{BigDecimal, BigInt, ConverterRegistry, Decimal, Scalar, Uuid};
use std::fmt::Debug;

fn roundtrip<T: Scalar + PartialEq + Debug>(value: T) -> Result<(), TestCaseError> {
    let converter = ConverterRegistry::shared()
        .converter::<T>()
        .expect("built-in converter");
    let text = converter.format(&value);
    let parsed = converter
        .parse(&text)
        .map_err(|e| TestCaseError::fail(format!("{:?} formatted as {:?}: {}", value, text, e)))?;
    prop_assert_eq!(parsed, value, "text was {:?}", text);
    Ok(())
}

proptest! {
    #[test]
    fn int8_roundtrip(v in any::<i8>()) {
        roundtrip(v)?;
    }

    #[test]
    fn int16_roundtrip(v in any::<i16>()) {
        roundtrip(v)?;
    }

    #[test]
    fn int32_roundtrip(v in any::<i32>()) {
        roundtrip(v)?;
    }

    #[test]
    fn int64_roundtrip(v in any::<i64>()) {
        roundtrip(v)?;
    }

    #[test]
    fn float32_roundtrip(v in any::<f32>().prop_filter("finite", |v| v.is_finite())) {
        roundtrip(v)?;
    }

    #[test]
    fn float64_roundtrip(v in any::<f64>().prop_filter("finite", |v| v.is_finite())) {
        roundtrip(v)?;
    }

    #[test]
    fn big_integer_roundtrip(digits in "-?[1-9][0-9]{0,80}") {
        let value: BigInt = digits.parse().unwrap();
        roundtrip(value)?;
    }

    #[test]
    fn big_decimal_roundtrip(mantissa in any::<i128>(), scale in -40i64..60) {
        roundtrip(BigDecimal::new(BigInt::from(mantissa), scale))?;
    }

    #[test]
    fn decimal_roundtrip(lo in any::<u32>(), mid in any::<u32>(), hi in any::<u32>(),
                         negative in any::<bool>(), scale in 0u32..=28) {
        roundtrip(Decimal::from_parts(lo, mid, hi, negative, scale))?;
    }

    #[test]
    fn char_roundtrip(c in any::<char>()) {
        roundtrip(c)?;
    }

    #[test]
    fn boolean_roundtrip(b in any::<bool>()) {
        roundtrip(b)?;
    }

    #[test]
    fn uuid_roundtrip(bytes in any::<[u8; 16]>()) {
        roundtrip(Uuid::from_bytes(bytes))?;
    }
}

#[test]
fn float_extremes_roundtrip() {
    for v in [f64::MAX, f64::MIN, f64::MIN_POSITIVE, f64::EPSILON, -0.0, 5e-324] {
        roundtrip(v).unwrap();
    }
    for v in [f32::MAX, f32::MIN, f32::MIN_POSITIVE, 1e-45f32] {
        roundtrip(v).unwrap();
    }
}

#[test]
fn float_infinities_roundtrip() {
    roundtrip(f64::INFINITY).unwrap();
    roundtrip(f64::NEG_INFINITY).unwrap();
    roundtrip(f32::INFINITY).unwrap();
}
