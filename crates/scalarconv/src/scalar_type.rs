//! Scalar type identifiers

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Canonical identifier of a scalar kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScalarType {
    /// 8-bit signed integer
    Int8,
    /// 16-bit signed integer
    Int16,
    /// 32-bit signed integer
    Int32,
    /// 64-bit signed integer
    Int64,
    /// 32-bit IEEE 754 float
    Float32,
    /// 64-bit IEEE 754 float
    Float64,
    /// Arbitrary precision integer
    BigInteger,
    /// Arbitrary precision decimal
    BigDecimal,
    /// Fixed precision decimal (96-bit mantissa, scale up to 28)
    Decimal,
    /// Single Unicode scalar value
    Char,
    /// Boolean
    Boolean,
    /// RFC 4122 UUID
    Uuid,
}

impl ScalarType {
    /// Every identifier, in declaration order
    pub const ALL: [ScalarType; 12] = [
        Self::Int8,
        Self::Int16,
        Self::Int32,
        Self::Int64,
        Self::Float32,
        Self::Float64,
        Self::BigInteger,
        Self::BigDecimal,
        Self::Decimal,
        Self::Char,
        Self::Boolean,
        Self::Uuid,
    ];

    /// Get the canonical name
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Int8 => "int8",
            Self::Int16 => "int16",
            Self::Int32 => "int32",
            Self::Int64 => "int64",
            Self::Float32 => "float32",
            Self::Float64 => "float64",
            Self::BigInteger => "biginteger",
            Self::BigDecimal => "bigdecimal",
            Self::Decimal => "decimal",
            Self::Char => "char",
            Self::Boolean => "boolean",
            Self::Uuid => "uuid",
        }
    }

    /// Check if this type is numeric
    pub const fn is_numeric(&self) -> bool {
        matches!(
            self,
            Self::Int8
                | Self::Int16
                | Self::Int32
                | Self::Int64
                | Self::Float32
                | Self::Float64
                | Self::BigInteger
                | Self::BigDecimal
                | Self::Decimal
        )
    }

    /// Check if values of this type have a fixed bit width
    pub const fn is_fixed_width(&self) -> bool {
        matches!(
            self,
            Self::Int8 | Self::Int16 | Self::Int32 | Self::Int64 | Self::Float32 | Self::Float64
        )
    }

    /// Check if formatting never loses precision
    pub const fn is_exact(&self) -> bool {
        !matches!(self, Self::Float32 | Self::Float64)
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Returned when a name does not identify a scalar type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown scalar type: {name}")]
pub struct UnknownScalarType {
    pub name: String,
}

impl FromStr for ScalarType {
    type Err = UnknownScalarType;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|ty| ty.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| UnknownScalarType { name: s.to_string() })
    }
}
