//! Char, Boolean and Uuid

use crate::error::ParseResult;
use crate::{ParseError, ParseErrorKind, ScalarType, Uuid};
use thiserror::Error;

/// Parse text consisting of exactly one Unicode scalar value
pub fn parse_char(input: &str) -> ParseResult<char> {
    let mut chars = input.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(ParseError::new(
            ScalarType::Char,
            input,
            ParseErrorKind::InvalidLength,
        )),
    }
}

/// Parse `true`/`t` or `false`/`f`, ignoring ASCII case
pub fn parse_boolean(input: &str) -> ParseResult<bool> {
    if input.eq_ignore_ascii_case("true") || input.eq_ignore_ascii_case("t") {
        Ok(true)
    } else if input.eq_ignore_ascii_case("false") || input.eq_ignore_ascii_case("f") {
        Ok(false)
    } else {
        Err(ParseError::malformed(ScalarType::Boolean, input))
    }
}

/// Parse the hyphenated 8-4-4-4-12 form
///
/// The simple, braced and URN forms name valid UUIDs too but are rejected as
/// not canonical.
pub fn parse_uuid(input: &str) -> ParseResult<Uuid> {
    let uuid = Uuid::parse_str(input)
        .map_err(|e| ParseError::malformed(ScalarType::Uuid, input).with_cause(e))?;
    if !is_hyphenated(input) {
        return Err(
            ParseError::new(ScalarType::Uuid, input, ParseErrorKind::NotCanonical)
                .with_cause(UuidFormError::of(input)),
        );
    }
    Ok(uuid)
}

/// Alternate UUID spelling found where the hyphenated form was expected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UuidFormError {
    #[error("simple form without hyphens, expected 8-4-4-4-12 grouping")]
    Simple,

    #[error("braced form, expected bare 8-4-4-4-12 grouping")]
    Braced,

    #[error("URN form, expected bare 8-4-4-4-12 grouping")]
    Urn,
}

impl UuidFormError {
    /// Classify text that the `uuid` crate accepted but is not hyphenated
    fn of(input: &str) -> Self {
        if input.starts_with('{') {
            Self::Braced
        } else if input.len() == 32 {
            Self::Simple
        } else {
            Self::Urn
        }
    }
}

/// Lowercase hyphenated form
pub fn format_uuid(value: &Uuid) -> String {
    value.hyphenated().to_string()
}

fn is_hyphenated(input: &str) -> bool {
    input.len() == 36
        && input.bytes().enumerate().all(|(i, b)| match i {
            8 | 13 | 18 | 23 => b == b'-',
            _ => b.is_ascii_hexdigit(),
        })
}
