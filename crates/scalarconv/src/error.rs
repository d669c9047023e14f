//! Parse errors raised by converters

use crate::ScalarType;
use std::error::Error as StdError;
use thiserror::Error;

/// Result type for parse operations
pub type ParseResult<T> = Result<T, ParseError>;

/// Underlying cause attached to a [`ParseError`]
pub type BoxedCause = Box<dyn StdError + Send + Sync + 'static>;

/// Why an input was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum ParseErrorKind {
    /// Text is not in the grammar of the target type
    #[error("malformed input")]
    Malformed,

    /// Text is well formed but the value does not fit the target type
    #[error("value out of range")]
    OutOfRange,

    /// Text has the wrong number of characters
    #[error("expected exactly one character")]
    InvalidLength,

    /// Text names a valid value but not in its canonical textual form
    #[error("not in canonical form")]
    NotCanonical,
}

/// Error raised when text cannot be converted to the requested scalar type
#[derive(Debug, Error)]
#[error("cannot parse {raw_input:?} as {target_type}: {kind}")]
pub struct ParseError {
    target_type: ScalarType,
    raw_input: String,
    kind: ParseErrorKind,
    #[source]
    cause: Option<BoxedCause>,
}

impl ParseError {
    /// Create a new parse error without an underlying cause
    pub fn new(target_type: ScalarType, raw_input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            target_type,
            raw_input: raw_input.into(),
            kind,
            cause: None,
        }
    }

    /// Shorthand for a [`ParseErrorKind::Malformed`] error
    pub fn malformed(target_type: ScalarType, raw_input: impl Into<String>) -> Self {
        Self::new(target_type, raw_input, ParseErrorKind::Malformed)
    }

    /// Shorthand for a [`ParseErrorKind::OutOfRange`] error
    pub fn out_of_range(target_type: ScalarType, raw_input: impl Into<String>) -> Self {
        Self::new(target_type, raw_input, ParseErrorKind::OutOfRange)
    }

    /// Attach the lower level error that caused this one
    pub fn with_cause(mut self, cause: impl Into<BoxedCause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Type the input was meant to convert to
    pub fn target_type(&self) -> ScalarType {
        self.target_type
    }

    /// Text that failed to convert, unmodified
    pub fn raw_input(&self) -> &str {
        &self.raw_input
    }

    pub fn kind(&self) -> ParseErrorKind {
        self.kind
    }

    /// Lower level error reported by the value crate, if any
    pub fn cause(&self) -> Option<&(dyn StdError + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_includes_type_and_input() {
        let err = ParseError::malformed(ScalarType::Boolean, "yes");
        assert_eq!(err.to_string(), "cannot parse \"yes\" as boolean: malformed input");
    }

    #[test]
    fn test_source_is_cause() {
        let cause = "abc".parse::<i32>().unwrap_err();
        let err = ParseError::malformed(ScalarType::Int32, "abc").with_cause(cause);
        assert!(err.source().is_some());
        assert!(err.cause().is_some());

        let bare = ParseError::new(ScalarType::Char, "ab", ParseErrorKind::InvalidLength);
        assert!(bare.source().is_none());
    }

    #[test]
    fn test_accessors() {
        let err = ParseError::out_of_range(ScalarType::Int8, "300");
        assert_eq!(err.target_type(), ScalarType::Int8);
        assert_eq!(err.raw_input(), "300");
        assert_eq!(err.kind(), ParseErrorKind::OutOfRange);
    }
}
