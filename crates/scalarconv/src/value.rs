//! Dynamic scalar values
//!
//! `ScalarValue` carries one value of any registered scalar type together
//! with its identifier. It is what the type-erased converter surface
//! produces and consumes.

use crate::ScalarType;
use bigdecimal::BigDecimal;
use num_bigint::BigInt;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// A single scalar value tagged with its type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum ScalarValue {
    Int8(i8),
    Int16(i16),
    Int32(i32),
    Int64(i64),
    #[serde(with = "float_repr")]
    Float32(f32),
    #[serde(with = "float_repr")]
    Float64(f64),
    BigInteger(BigInt),
    BigDecimal(BigDecimal),
    Decimal(Decimal),
    Char(char),
    Boolean(bool),
    Uuid(Uuid),
}

impl ScalarValue {
    /// Get the identifier of this value's type
    pub const fn scalar_type(&self) -> ScalarType {
        match self {
            Self::Int8(_) => ScalarType::Int8,
            Self::Int16(_) => ScalarType::Int16,
            Self::Int32(_) => ScalarType::Int32,
            Self::Int64(_) => ScalarType::Int64,
            Self::Float32(_) => ScalarType::Float32,
            Self::Float64(_) => ScalarType::Float64,
            Self::BigInteger(_) => ScalarType::BigInteger,
            Self::BigDecimal(_) => ScalarType::BigDecimal,
            Self::Decimal(_) => ScalarType::Decimal,
            Self::Char(_) => ScalarType::Char,
            Self::Boolean(_) => ScalarType::Boolean,
            Self::Uuid(_) => ScalarType::Uuid,
        }
    }

    /// Get the value as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    /// Get any fixed-width integer widened to i64
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Self::Int8(v) => Some(i64::from(*v)),
            Self::Int16(v) => Some(i64::from(*v)),
            Self::Int32(v) => Some(i64::from(*v)),
            Self::Int64(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for ScalarValue {
    /// Canonical textual form, identical to what the built-in converters format
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int8(v) => write!(f, "{}", v),
            Self::Int16(v) => write!(f, "{}", v),
            Self::Int32(v) => write!(f, "{}", v),
            Self::Int64(v) => write!(f, "{}", v),
            Self::Float32(v) => write!(f, "{}", v),
            Self::Float64(v) => write!(f, "{}", v),
            Self::BigInteger(v) => write!(f, "{}", v),
            Self::BigDecimal(v) => write!(f, "{}", v),
            Self::Decimal(v) => write!(f, "{}", v),
            Self::Char(v) => write!(f, "{}", v),
            Self::Boolean(v) => write!(f, "{}", v),
            Self::Uuid(v) => write!(f, "{}", v.hyphenated()),
        }
    }
}

/// JSON has no NaN or infinity, so non-finite floats travel as their text
mod float_repr {
    use serde::de::{self, DeserializeOwned};
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::fmt::Display;
    use std::str::FromStr;

    pub trait Float: Copy + Display + FromStr + Serialize + DeserializeOwned {
        fn is_finite(self) -> bool;
    }

    impl Float for f32 {
        fn is_finite(self) -> bool {
            f32::is_finite(self)
        }
    }

    impl Float for f64 {
        fn is_finite(self) -> bool {
            f64::is_finite(self)
        }
    }

    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Repr<F> {
        Number(F),
        Text(String),
    }

    pub fn serialize<F: Float, S: Serializer>(value: &F, serializer: S) -> Result<S::Ok, S::Error> {
        if value.is_finite() {
            value.serialize(serializer)
        } else {
            serializer.collect_str(value)
        }
    }

    pub fn deserialize<'de, F: Float, D: Deserializer<'de>>(deserializer: D) -> Result<F, D::Error> {
        match Repr::<F>::deserialize(deserializer)? {
            Repr::Number(value) => Ok(value),
            Repr::Text(text) => text
                .parse()
                .map_err(|_| de::Error::custom(format!("invalid float {:?}", text))),
        }
    }
}
