//! Converter registry
//!
//! Maps scalar type identifiers to their converters. A registry is assembled
//! once through [`RegistryBuilder`] and is read-only afterwards, so a single
//! instance can be shared freely between threads.

use crate::converter::{Converter, DynConverter, Scalar};
use crate::converters;
use crate::error::ParseResult;
use crate::ScalarType;
use once_cell::sync::Lazy;
use std::any::TypeId;
use std::collections::HashMap;
use std::str::FromStr;
use std::sync::Arc;

/// Shared converter handle
pub type ConverterRef = Arc<dyn DynConverter>;

static SHARED: Lazy<ConverterRegistry> = Lazy::new(ConverterRegistry::build);

/// Immutable mapping from scalar type to converter
#[derive(Clone, Debug)]
pub struct ConverterRegistry {
    converters: HashMap<ScalarType, ConverterRef>,
    by_rust_type: HashMap<TypeId, ScalarType>,
}

impl ConverterRegistry {
    /// Create a registry holding every built-in converter
    pub fn build() -> Self {
        Self::builder().with_builtins().build()
    }

    /// Start assembling a registry
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Process-wide registry of the built-in converters, built on first use
    pub fn shared() -> &'static ConverterRegistry {
        &SHARED
    }

    /// Get the converter for a scalar type
    pub fn get(&self, scalar_type: ScalarType) -> Option<&dyn DynConverter> {
        self.converters.get(&scalar_type).map(Arc::as_ref)
    }

    /// Get the converter for a type name; `None` for unknown names
    pub fn get_by_name(&self, name: &str) -> Option<&dyn DynConverter> {
        ScalarType::from_str(name)
            .ok()
            .and_then(|scalar_type| self.get(scalar_type))
    }

    /// Get the typed converter for a Rust type
    ///
    /// Returns `None` for types without a registered converter, such as
    /// `String` or `u32`.
    pub fn converter<T: 'static>(&self) -> Option<&Converter<T>> {
        let scalar_type = self.by_rust_type.get(&TypeId::of::<T>())?;
        self.converters
            .get(scalar_type)?
            .as_any()
            .downcast_ref::<Converter<T>>()
    }

    /// Parse text with the converter registered for `T`
    ///
    /// Returns `None` if no converter is registered for `T`.
    pub fn parse<T: Scalar>(&self, input: &str) -> Option<ParseResult<T>> {
        self.converter::<T>().map(|c| c.parse(input))
    }

    /// Format a value with the converter registered for `T`
    pub fn format<T: Scalar>(&self, value: &T) -> Option<String> {
        self.converter::<T>().map(|c| c.format(value))
    }

    /// Check whether `input` converts to `scalar_type`
    ///
    /// Unregistered types never convert.
    pub fn converts(&self, scalar_type: ScalarType, input: &str) -> bool {
        self.get(scalar_type).is_some_and(|c| c.converts(input))
    }

    /// Check if a converter is registered for a scalar type
    pub fn contains(&self, scalar_type: ScalarType) -> bool {
        self.converters.contains_key(&scalar_type)
    }

    /// Registered scalar types in declaration order
    pub fn types(&self) -> Vec<ScalarType> {
        let mut types: Vec<_> = self.converters.keys().copied().collect();
        types.sort();
        types
    }

    pub fn len(&self) -> usize {
        self.converters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.converters.is_empty()
    }
}

impl Default for ConverterRegistry {
    fn default() -> Self {
        Self::build()
    }
}

/// Assembles a [`ConverterRegistry`]
///
/// Registering a second converter for the same scalar type replaces the
/// first, so built-ins can be overridden before the registry is sealed.
#[derive(Default)]
pub struct RegistryBuilder {
    converters: HashMap<ScalarType, ConverterRef>,
    by_rust_type: HashMap<TypeId, ScalarType>,
}

impl RegistryBuilder {
    /// Create an empty builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Add every built-in converter
    pub fn with_builtins(self) -> Self {
        converters::register_builtins(self)
    }

    /// Add or replace the converter for `T`
    pub fn register<T: Scalar>(mut self, converter: Converter<T>) -> Self {
        let scalar_type = T::SCALAR_TYPE;
        if self
            .converters
            .insert(scalar_type, Arc::new(converter))
            .is_some()
        {
            log::debug!("replacing converter for {}", scalar_type);
        }
        self.by_rust_type.insert(TypeId::of::<T>(), scalar_type);
        self
    }

    /// Seal the registry
    pub fn build(self) -> ConverterRegistry {
        log::debug!("built converter registry with {} converters", self.converters.len());
        ConverterRegistry {
            converters: self.converters,
            by_rust_type: self.by_rust_type,
        }
    }
}
