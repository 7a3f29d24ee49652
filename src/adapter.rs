#![deny(missing_docs)]

//! # Property Adapter
//!
//! Facade over a single schema node: type resolution, example
//! synthesis, and read-through constraint/metadata accessors, with the
//! collaborators injected per call. The adapter holds nothing but a
//! borrow of the node, so every query is an independent pure function
//! and safe to issue concurrently.

use crate::example::{example_value, DocumentContext};
use crate::resolver::{resolve_type, DefinitionResolver};
use crate::schema::SchemaNode;
use crate::types::Type;
use rust_decimal::Decimal;
use serde_json::Value;

/// Adapter over one schema node.
#[derive(Debug, Clone, Copy)]
pub struct PropertyAdapter<'a> {
    property: &'a SchemaNode,
}

impl<'a> PropertyAdapter<'a> {
    /// Wraps a schema node. The node stays owned by the caller and is
    /// never mutated.
    pub fn new(property: &'a SchemaNode) -> Self {
        Self { property }
    }

    /// Retrieves the type descriptor of the property.
    pub fn resolved_type(&self, resolver: &dyn DefinitionResolver) -> Type {
        resolve_type(self.property, resolver)
    }

    /// Returns the example display value for the property.
    ///
    /// `generate_missing` controls whether a canonical stand-in is
    /// synthesized when the document carries no example.
    pub fn example(&self, generate_missing: bool, context: &dyn DocumentContext) -> Option<Value> {
        example_value(self.property, generate_missing, context)
    }

    /// Retrieves the default value of the property.
    pub fn default_value(&self) -> Option<&Value> {
        self.property.default.as_ref()
    }

    /// Retrieves the minLength of the property.
    pub fn min_length(&self) -> Option<usize> {
        self.property.min_length
    }

    /// Retrieves the maxLength of the property.
    pub fn max_length(&self) -> Option<usize> {
        self.property.max_length
    }

    /// Retrieves the pattern of the property.
    pub fn pattern(&self) -> Option<&str> {
        self.property.pattern.as_deref()
    }

    /// Retrieves the minimum value of the property.
    pub fn minimum(&self) -> Option<Decimal> {
        self.property.minimum
    }

    /// Retrieves the maximum value of the property.
    pub fn maximum(&self) -> Option<Decimal> {
        self.property.maximum
    }

    /// Whether the minimum bound is exclusive.
    pub fn exclusive_minimum(&self) -> bool {
        self.property.exclusive_minimum.unwrap_or(false)
    }

    /// Whether the maximum bound is exclusive.
    pub fn exclusive_maximum(&self) -> bool {
        self.property.exclusive_maximum.unwrap_or(false)
    }

    /// Checks if the property is read-only.
    pub fn read_only(&self) -> bool {
        self.property.read_only.unwrap_or(false)
    }

    /// Retrieves the description of the property.
    pub fn description(&self) -> Option<&str> {
        self.property.description.as_deref()
    }
}
