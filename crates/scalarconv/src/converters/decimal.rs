//! Exact-precision numbers
//!
//! BigInteger and BigDecimal are unbounded; Decimal is the fixed 96-bit
//! mantissa type and rejects anything it cannot hold exactly. Input is checked
//! against a plain decimal grammar before it reaches the value crates, which
//! are more lenient (digit separators, radix prefixes).

use super::{is_digits, unsigned_part};
use crate::error::ParseResult;
use crate::{BigDecimal, BigInt, Decimal, ParseError, ScalarType};
use std::str::FromStr;

/// `[+-]?[0-9]+`
fn is_integer_literal(input: &str) -> bool {
    is_digits(unsigned_part(input))
}

/// `[+-]?([0-9]+(\.[0-9]*)?|\.[0-9]+)([eE][+-]?[0-9]+)?`
fn is_decimal_literal(input: &str) -> bool {
    let unsigned = unsigned_part(input);
    let (mantissa, exponent) = match unsigned.split_once(|c: char| c == 'e' || c == 'E') {
        Some((m, e)) => (m, Some(e)),
        None => (unsigned, None),
    };

    let mantissa_ok = match mantissa.split_once('.') {
        Some((int, frac)) => {
            (int.is_empty() || is_digits(int))
                && (frac.is_empty() || is_digits(frac))
                && !(int.is_empty() && frac.is_empty())
        }
        None => is_digits(mantissa),
    };

    mantissa_ok && exponent.is_none_or(|e| is_digits(unsigned_part(e)))
}

pub fn parse_big_integer(input: &str) -> ParseResult<BigInt> {
    if !is_integer_literal(input) {
        return Err(ParseError::malformed(ScalarType::BigInteger, input));
    }
    BigInt::from_str(input)
        .map_err(|e| ParseError::malformed(ScalarType::BigInteger, input).with_cause(e))
}

pub fn parse_big_decimal(input: &str) -> ParseResult<BigDecimal> {
    if !is_decimal_literal(input) {
        return Err(ParseError::malformed(ScalarType::BigDecimal, input));
    }
    // Exponents beyond i64 are rejected by the parser itself
    BigDecimal::from_str(input)
        .map_err(|e| ParseError::out_of_range(ScalarType::BigDecimal, input).with_cause(e))
}

/// Parse into a fixed-precision decimal without rounding
///
/// Scientific literals are rewritten in plain notation first, so both
/// spellings of a value are accepted or rejected alike.
pub fn parse_decimal(input: &str) -> ParseResult<Decimal> {
    if !is_decimal_literal(input) {
        return Err(ParseError::malformed(ScalarType::Decimal, input));
    }
    let parsed = if input.contains(|c: char| c == 'e' || c == 'E') {
        to_plain_notation(input).and_then(|plain| Decimal::from_str_exact(&plain))
    } else {
        Decimal::from_str_exact(input)
    };
    parsed.map_err(|e| ParseError::out_of_range(ScalarType::Decimal, input).with_cause(e))
}

/// Zero padding beyond this cannot land inside the Decimal range
const MAX_EXPONENT_PADDING: usize = 64;

/// Apply the exponent of a literal that passed [`is_decimal_literal`]
///
/// `Decimal::from_scientific` rounds surplus mantissa digits away, so the
/// digits are shifted textually and left to the exact parser.
fn to_plain_notation(input: &str) -> Result<String, rust_decimal::Error> {
    let (sign, unsigned) = match input.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", input.strip_prefix('+').unwrap_or(input)),
    };
    let (mantissa, exponent) = unsigned
        .split_once(|c: char| c == 'e' || c == 'E')
        .unwrap_or((unsigned, "0"));
    let (int, frac) = mantissa.split_once('.').unwrap_or((mantissa, ""));

    let negative_exponent = exponent.starts_with('-');
    let exponent: i64 = exponent.parse().map_err(|_| {
        if negative_exponent {
            rust_decimal::Error::Underflow
        } else {
            rust_decimal::Error::ExceedsMaximumPossibleValue
        }
    })?;

    let digits = format!("{}{}", int, frac);
    let significant = digits.trim_start_matches('0');
    if significant.is_empty() {
        // Zero keeps its scale, capped at what Decimal can carry
        let scale = i64::try_from(frac.len())
            .unwrap_or(i64::MAX)
            .saturating_sub(exponent)
            .clamp(0, i64::from(Decimal::MAX_SCALE));
        let zeros = "0".repeat(usize::try_from(scale).unwrap_or(0));
        return Ok(if zeros.is_empty() {
            format!("{}0", sign)
        } else {
            format!("{}0.{}", sign, zeros)
        });
    }

    // Position of the decimal point relative to the first significant digit
    let skipped = digits.len() - significant.len();
    let point = i64::try_from(int.len())
        .unwrap_or(i64::MAX)
        .saturating_sub(i64::try_from(skipped).unwrap_or(i64::MAX))
        .saturating_add(exponent);
    let len = i64::try_from(significant.len()).unwrap_or(i64::MAX);

    let padding = |count: i64, err: rust_decimal::Error| {
        usize::try_from(count)
            .ok()
            .filter(|&n| n <= MAX_EXPONENT_PADDING)
            .map(|n| "0".repeat(n))
            .ok_or(err)
    };

    if point <= 0 {
        let zeros = padding(point.saturating_neg(), rust_decimal::Error::Underflow)?;
        Ok(format!("{}0.{}{}", sign, zeros, significant))
    } else if point >= len {
        let zeros = padding(point - len, rust_decimal::Error::ExceedsMaximumPossibleValue)?;
        Ok(format!("{}{}{}", sign, significant, zeros))
    } else {
        let (whole, fraction) = significant.split_at(usize::try_from(point).unwrap_or(0));
        Ok(format!("{}{}.{}", sign, whole, fraction))
    }
}
