//! The converter contract
//!
//! A [`Converter<T>`] is a pair of plain functions: `parse` turns text into a
//! `T` or fails with a [`ParseError`], and `format` turns a `T` back into its
//! canonical text. [`DynConverter`] is the type-erased view the registry
//! hands out when the caller only has a [`ScalarType`] at hand.

use crate::error::ParseResult;
use crate::{ScalarType, ScalarValue};
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use rust_decimal::Decimal;
use std::any::Any;
use std::fmt;
use uuid::Uuid;

/// Parse function of a converter
pub type ParseFn<T> = fn(&str) -> ParseResult<T>;

/// Format function of a converter
pub type FormatFn<T> = fn(&T) -> String;

/// Rust types that have a scalar identifier and a [`ScalarValue`] variant
pub trait Scalar: Sized + Send + Sync + 'static {
    /// Identifier this type is registered under
    const SCALAR_TYPE: ScalarType;

    /// Wrap into a dynamic value
    fn into_value(self) -> ScalarValue;

    /// Borrow out of a dynamic value of the matching variant
    fn from_value_ref(value: &ScalarValue) -> Option<&Self>;

    /// Take out of a dynamic value of the matching variant
    fn from_value(value: ScalarValue) -> Option<Self>;
}

macro_rules! impl_scalar {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl Scalar for $ty {
                const SCALAR_TYPE: ScalarType = ScalarType::$variant;

                fn into_value(self) -> ScalarValue {
                    ScalarValue::$variant(self)
                }

                fn from_value_ref(value: &ScalarValue) -> Option<&Self> {
                    match value {
                        ScalarValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }

                fn from_value(value: ScalarValue) -> Option<Self> {
                    match value {
                        ScalarValue::$variant(v) => Some(v),
                        _ => None,
                    }
                }
            }
        )*
    };
}

impl_scalar! {
    i8 => Int8,
    i16 => Int16,
    i32 => Int32,
    i64 => Int64,
    f32 => Float32,
    f64 => Float64,
    BigInt => BigInteger,
    BigDecimal => BigDecimal,
    Decimal => Decimal,
    char => Char,
    bool => Boolean,
    Uuid => Uuid,
}

/// Paired parse/format functions for one scalar type
pub struct Converter<T> {
    parse: ParseFn<T>,
    format: FormatFn<T>,
}

impl<T: Scalar> Converter<T> {
    /// Create a converter from a parse and a format function
    pub const fn new(parse: ParseFn<T>, format: FormatFn<T>) -> Self {
        Self { parse, format }
    }

    /// Identifier of the type this converter produces
    pub const fn target_type(&self) -> ScalarType {
        T::SCALAR_TYPE
    }

    /// Parse text into a value
    pub fn parse(&self, input: &str) -> ParseResult<T> {
        (self.parse)(input)
    }

    /// Format a value as canonical text
    pub fn format(&self, value: &T) -> String {
        (self.format)(value)
    }

    /// Check whether `input` would parse
    pub fn converts(&self, input: &str) -> bool {
        self.parse(input).is_ok()
    }
}

impl<T> Clone for Converter<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Converter<T> {}

impl<T: Scalar> fmt::Debug for Converter<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Converter")
            .field("target_type", &T::SCALAR_TYPE)
            .finish()
    }
}

/// Type-erased converter over [`ScalarValue`]
pub trait DynConverter: Send + Sync + fmt::Debug {
    /// Identifier of the type this converter produces
    fn target_type(&self) -> ScalarType;

    /// Parse text into a dynamic value
    fn parse_value(&self, input: &str) -> ParseResult<ScalarValue>;

    /// Format a dynamic value; `None` when the value is of another type
    fn format_value(&self, value: &ScalarValue) -> Option<String>;

    /// Check whether `input` would parse
    fn converts(&self, input: &str) -> bool {
        self.parse_value(input).is_ok()
    }

    /// Access the concrete converter for downcasting
    fn as_any(&self) -> &dyn Any;
}

impl<T: Scalar> DynConverter for Converter<T> {
    fn target_type(&self) -> ScalarType {
        T::SCALAR_TYPE
    }

    fn parse_value(&self, input: &str) -> ParseResult<ScalarValue> {
        self.parse(input).map(Scalar::into_value)
    }

    fn format_value(&self, value: &ScalarValue) -> Option<String> {
        T::from_value_ref(value).map(|v| self.format(v))
    }

    fn converts(&self, input: &str) -> bool {
        Converter::converts(self, input)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
