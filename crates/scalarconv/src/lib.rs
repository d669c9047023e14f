//! Text converters for scalar types
//!
//! This crate maps scalar types to paired parse/format functions:
//! - Scalar type identifiers (int8 .. int64, float32, float64, biginteger,
//!   bigdecimal, decimal, char, boolean, uuid)
//! - The typed `Converter<T>` contract and its type-erased `DynConverter` view
//! - Built-in converters for every identifier
//! - An immutable `ConverterRegistry` built once and queried thereafter
//!
//! # Example
//!
//! ```
//! use scalarconv::{ConverterRegistry, ScalarType};
//!
//! let registry = ConverterRegistry::build();
//! let int8 = registry.converter::<i8>().unwrap();
//! assert_eq!(int8.parse("5").unwrap(), 5);
//! assert!(int8.parse("300").is_err());
//!
//! let uuid = registry.get(ScalarType::Uuid).unwrap();
//! let value = uuid.parse_value("123e4567-e89b-12d3-a456-426614174000").unwrap();
//! assert_eq!(value.to_string(), "123e4567-e89b-12d3-a456-426614174000");
//!
//! assert!(registry.get_by_name("timestamp").is_none());
//! ```

pub mod converter;
pub mod converters;
pub mod error;
pub mod registry;
pub mod scalar_type;
pub mod value;

pub use converter::{Converter, DynConverter, Scalar};
pub use error::{ParseError, ParseErrorKind, ParseResult};
pub use registry::{ConverterRegistry, RegistryBuilder};
pub use scalar_type::{ScalarType, UnknownScalarType};
pub use value::ScalarValue;

// Re-export the value crates so callers name the same versions we convert to
pub use bigdecimal::BigDecimal;
pub use num_bigint::BigInt;
pub use rust_decimal::Decimal;
pub use uuid::Uuid;
