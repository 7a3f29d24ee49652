#![deny(missing_docs)]

//! # Schema Shims
//!
//! Intermediate deserialization layer for OpenAPI Schema Objects.
//! A [`SchemaNode`] maps one `schema`/`property` node of a document to a
//! lenient owned tree: every field is optional, unknown keys and `x-`
//! vendor extensions are captured instead of rejected, and nothing is
//! validated. Upstream documents are frequently imperfect; rejection
//! happens nowhere in this layer.

use crate::error::{AppError, AppResult};
use indexmap::IndexMap;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// A single OpenAPI Schema Object.
///
/// Callers own the node; this crate only ever borrows it.
#[derive(Deserialize, Serialize, Clone, Debug, Default, PartialEq)]
pub struct SchemaNode {
    /// Reference to a schema defined elsewhere (`$ref`).
    #[serde(rename = "$ref")]
    pub ref_path: Option<String>,

    /// The raw type tag (e.g. "string", "integer", "object").
    #[serde(rename = "type")]
    pub schema_type: Option<String>,

    /// Human-readable title.
    pub title: Option<String>,

    /// Type format qualifier (e.g. "date-time", "int64").
    pub format: Option<String>,

    /// Description of the schema.
    pub description: Option<String>,

    /// Closed set of admissible values.
    #[serde(rename = "enum")]
    pub enum_values: Option<Vec<Value>>,

    /// Item schema for arrays.
    pub items: Option<Box<SchemaNode>>,

    /// Value schema (or boolean switch) for dictionary-shaped objects.
    #[serde(rename = "additionalProperties")]
    pub additional_properties: Option<Box<AdditionalProperties>>,

    /// Named property schemas, in document order.
    pub properties: Option<IndexMap<String, SchemaNode>>,

    /// Default value.
    pub default: Option<Value>,

    /// Author-supplied example value.
    pub example: Option<Value>,

    /// Whether the value may only appear in responses.
    #[serde(rename = "readOnly")]
    pub read_only: Option<bool>,

    /// Minimum string length.
    #[serde(rename = "minLength")]
    pub min_length: Option<usize>,

    /// Maximum string length.
    #[serde(rename = "maxLength")]
    pub max_length: Option<usize>,

    /// Regular expression constraint, passed through uncompiled.
    pub pattern: Option<String>,

    /// Lower numeric bound.
    pub minimum: Option<Decimal>,

    /// Upper numeric bound.
    pub maximum: Option<Decimal>,

    /// Whether `minimum` is exclusive.
    #[serde(rename = "exclusiveMinimum")]
    pub exclusive_minimum: Option<bool>,

    /// Whether `maximum` is exclusive.
    #[serde(rename = "exclusiveMaximum")]
    pub exclusive_maximum: Option<bool>,

    /// Specification Extensions (x-...) and unmodeled keys.
    #[serde(flatten)]
    pub extensions: BTreeMap<String, Value>,
}

/// The `additionalProperties` keyword: either a boolean switch or a
/// shared schema describing every value in the dictionary.
#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
#[serde(untagged)]
pub enum AdditionalProperties {
    /// Blanket allow/deny without a value schema.
    Flag(bool),
    /// Shared value schema.
    Schema(SchemaNode),
}

/// Structural classification of a schema node.
///
/// Several document shapes satisfy more than one structural test at the
/// same time (a `$ref` next to a type tag, `additionalProperties` next
/// to `properties`); [`SchemaNode::kind`] checks them in a fixed
/// priority order and the first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaKind {
    /// A `$ref` pointer to a named schema.
    Reference,
    /// A homogeneous sequence.
    Array,
    /// A string-keyed dictionary.
    Map,
    /// A plain string, possibly enumerated or formatted.
    String,
    /// A structured record with named properties.
    Object,
    /// Any residual primitive (integer, number, boolean, unknown).
    Other,
}

impl SchemaNode {
    /// Parses a schema fragment from YAML text.
    pub fn from_yaml(content: &str) -> AppResult<Self> {
        serde_yaml::from_str(content)
            .map_err(|e| AppError::General(format!("Failed to parse schema YAML: {}", e)))
    }

    /// Parses a schema fragment from an in-memory JSON value.
    pub fn from_json(value: Value) -> AppResult<Self> {
        serde_json::from_value(value)
            .map_err(|e| AppError::General(format!("Failed to parse schema JSON: {}", e)))
    }

    /// Structural classification, checked in priority order.
    pub fn kind(&self) -> SchemaKind {
        if self.ref_path.is_some() {
            SchemaKind::Reference
        } else if self.schema_type.as_deref() == Some("array") {
            SchemaKind::Array
        } else if self.is_dictionary() {
            SchemaKind::Map
        } else if self.schema_type.as_deref() == Some("string") {
            SchemaKind::String
        } else if self.schema_type.as_deref() == Some("object") || self.properties.is_some() {
            SchemaKind::Object
        } else {
            SchemaKind::Other
        }
    }

    /// Returns the shared value schema for dictionary-shaped nodes.
    ///
    /// `additionalProperties: true` admits arbitrary values but carries
    /// no schema, so this returns `None` for it.
    pub fn value_schema(&self) -> Option<&SchemaNode> {
        match self.additional_properties.as_deref() {
            Some(AdditionalProperties::Schema(schema)) => Some(schema),
            _ => None,
        }
    }

    /// True when the node admits arbitrary string keys sharing one value
    /// schema. `additionalProperties: false` marks a strict record, not
    /// a dictionary.
    fn is_dictionary(&self) -> bool {
        matches!(
            self.additional_properties.as_deref(),
            Some(AdditionalProperties::Schema(_)) | Some(AdditionalProperties::Flag(true))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_basic_fields_parsing() {
        let yaml = r#"
type: string
format: date-time
title: Timestamp
description: Creation time
"#;
        let node = SchemaNode::from_yaml(yaml).unwrap();
        assert_eq!(node.schema_type.as_deref(), Some("string"));
        assert_eq!(node.format.as_deref(), Some("date-time"));
        assert_eq!(node.title.as_deref(), Some("Timestamp"));
        assert_eq!(node.description.as_deref(), Some("Creation time"));
        assert_eq!(node.kind(), SchemaKind::String);
    }

    #[test]
    fn test_ref_takes_priority_over_type_tag() {
        let yaml = r#"
$ref: '#/components/schemas/Pet'
type: object
"#;
        let node = SchemaNode::from_yaml(yaml).unwrap();
        assert_eq!(node.ref_path.as_deref(), Some("#/components/schemas/Pet"));
        assert_eq!(node.kind(), SchemaKind::Reference);
    }

    #[test]
    fn test_array_kind_with_items() {
        let yaml = r#"
type: array
items:
  type: integer
  format: int64
"#;
        let node = SchemaNode::from_yaml(yaml).unwrap();
        assert_eq!(node.kind(), SchemaKind::Array);
        let items = node.items.as_deref().unwrap();
        assert_eq!(items.schema_type.as_deref(), Some("integer"));
        assert_eq!(items.format.as_deref(), Some("int64"));
    }

    #[test]
    fn test_dictionary_with_value_schema() {
        let yaml = r#"
type: object
additionalProperties:
  type: boolean
"#;
        let node = SchemaNode::from_yaml(yaml).unwrap();
        assert_eq!(node.kind(), SchemaKind::Map);
        let value_schema = node.value_schema().unwrap();
        assert_eq!(value_schema.schema_type.as_deref(), Some("boolean"));
    }

    #[test]
    fn test_dictionary_boolean_switch() {
        let open = SchemaNode::from_yaml("additionalProperties: true").unwrap();
        assert_eq!(open.kind(), SchemaKind::Map);
        assert!(open.value_schema().is_none());

        // A strict record stays an object even with properties alongside
        let yaml = r#"
type: object
additionalProperties: false
properties:
  name:
    type: string
"#;
        let strict = SchemaNode::from_yaml(yaml).unwrap();
        assert_eq!(strict.kind(), SchemaKind::Object);
    }

    #[test]
    fn test_object_kind_inferred_from_properties() {
        let yaml = r#"
properties:
  id:
    type: integer
"#;
        let node = SchemaNode::from_yaml(yaml).unwrap();
        assert_eq!(node.kind(), SchemaKind::Object);
    }

    #[test]
    fn test_untyped_node_is_residual() {
        let node = SchemaNode::from_yaml("title: Mystery").unwrap();
        assert_eq!(node.kind(), SchemaKind::Other);
        assert!(node.schema_type.is_none());
    }

    #[test]
    fn test_enum_values_preserved_in_order() {
        let yaml = r#"
type: string
enum:
  - available
  - pending
  - sold
"#;
        let node = SchemaNode::from_yaml(yaml).unwrap();
        let values = node.enum_values.as_deref().unwrap();
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], Value::String("available".into()));
        assert_eq!(values[2], Value::String("sold".into()));
    }

    #[test]
    fn test_constraints_parsing() {
        let yaml = r#"
type: integer
minimum: 0
maximum: 10
exclusiveMaximum: true
minLength: 1
maxLength: 64
pattern: '^[a-z]+$'
readOnly: true
default: 5
"#;
        let node = SchemaNode::from_yaml(yaml).unwrap();
        assert_eq!(node.minimum, Some(Decimal::ZERO));
        assert_eq!(node.maximum, Some(Decimal::from(10)));
        assert_eq!(node.exclusive_maximum, Some(true));
        assert_eq!(node.exclusive_minimum, None);
        assert_eq!(node.min_length, Some(1));
        assert_eq!(node.max_length, Some(64));
        assert_eq!(node.pattern.as_deref(), Some("^[a-z]+$"));
        assert_eq!(node.read_only, Some(true));
        assert_eq!(node.default, Some(Value::from(5)));
    }

    #[test]
    fn test_extensions_captured() {
        let yaml = r#"
type: string
x-internal: true
nullable: true
"#;
        let node = SchemaNode::from_yaml(yaml).unwrap();
        assert_eq!(node.extensions.get("x-internal"), Some(&Value::Bool(true)));
        // Unmodeled standard keys land in the same capture map
        assert_eq!(node.extensions.get("nullable"), Some(&Value::Bool(true)));
    }

    #[test]
    fn test_from_json_roundtrip() {
        let node = SchemaNode::from_json(serde_json::json!({
            "type": "array",
            "items": {"$ref": "#/components/schemas/Tag"}
        }))
        .unwrap();
        assert_eq!(node.kind(), SchemaKind::Array);
        assert_eq!(
            node.items.as_deref().unwrap().ref_path.as_deref(),
            Some("#/components/schemas/Tag")
        );
    }

    #[test]
    fn test_from_yaml_failure_is_general_error() {
        let err = SchemaNode::from_yaml("minimum: [not, a, number]").unwrap_err();
        assert!(format!("{}", err).starts_with("General Error:"));
    }
}
