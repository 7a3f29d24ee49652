#![deny(missing_docs)]

//! # Example Synthesis
//!
//! Supplies display examples for schema nodes: the author-supplied
//! example always wins, otherwise a canonical stand-in value is
//! generated on request. Also hosts the raw-string coercion helper used
//! when example literals arrive as unstructured text.

use crate::error::{AppError, AppResult};
use crate::schema::{SchemaKind, SchemaNode};
use serde_json::{Map, Value};

/// Renders cross-reference placeholders for referenced definitions.
///
/// The single capability this crate needs from the surrounding document
/// builder: producing an inline cross-reference string for a `$ref`
/// target. The output format is the implementor's concern.
pub trait DocumentContext {
    /// Renders an inline cross-reference to the given reference target.
    fn cross_reference(&self, target: &str) -> String;
}

impl<F> DocumentContext for F
where
    F: Fn(&str) -> String,
{
    fn cross_reference(&self, target: &str) -> String {
        self(target)
    }
}

/// Returns the example display value for a schema node.
///
/// An explicit example on the node wins for every kind. Dictionaries
/// fall back to their value schema's example, then to a generated
/// single-entry map; arrays to a generated one-element sequence;
/// everything else to [`generate_example`]. Generation only happens when
/// `generate_missing` is set.
pub fn example_value(
    node: &SchemaNode,
    generate_missing: bool,
    context: &dyn DocumentContext,
) -> Option<Value> {
    if node.example.is_some() {
        return node.example.clone();
    }

    match node.kind() {
        SchemaKind::Map => {
            let value_schema = node.value_schema();
            if let Some(example) = value_schema.and_then(|schema| schema.example.clone()) {
                return Some(example);
            }
            if generate_missing {
                let mut entries = Map::new();
                let value = value_schema
                    .map(|schema| generate_example(schema, context))
                    .unwrap_or(Value::Null);
                entries.insert("string".to_string(), value);
                return Some(Value::Object(entries));
            }
        }
        SchemaKind::Array => {
            if generate_missing {
                let item = node
                    .items
                    .as_deref()
                    .map(|items| generate_example(items, context))
                    .unwrap_or(Value::Null);
                return Some(Value::Array(vec![item]));
            }
        }
        _ => {
            if generate_missing {
                return Some(generate_example(node, context));
            }
        }
    }

    // Mirrors the node's own (absent) example on every non-generating path
    node.example.clone()
}

/// Generates a canonical placeholder example for a schema node.
///
/// Total: every branch has a concrete fallback, down to surfacing the
/// raw type tag itself for unrecognized kinds.
pub fn generate_example(node: &SchemaNode, context: &dyn DocumentContext) -> Value {
    if let Some(ref_path) = node.ref_path.as_deref() {
        log::debug!("generating cross-reference example for {}", ref_path);
        return Value::String(context.cross_reference(ref_path));
    }

    match node.schema_type.as_deref() {
        Some("integer") => Value::from(0),
        Some("number") => Value::from(0.0),
        Some("boolean") => Value::Bool(true),
        Some("string") => Value::String("string".to_string()),
        Some("array") => {
            let item = node
                .items
                .as_deref()
                .map(|items| generate_example(items, context))
                .unwrap_or(Value::Null);
            Value::Array(vec![item])
        }
        Some(other) => Value::String(other.to_string()),
        None => Value::Null,
    }
}

/// Converts a raw string example to the given target type.
///
/// A missing value stays null. `boolean` compares against the literal
/// `true` case-insensitively and never fails; `string` and unrecognized
/// targets pass through unchanged. Unparseable `integer`/`number` values
/// propagate as [`AppError::Conversion`].
pub fn convert_example(value: Option<&str>, target_type: &str) -> AppResult<Value> {
    let Some(value) = value else {
        return Ok(Value::Null);
    };

    match target_type {
        "integer" => value
            .parse::<i64>()
            .map(Value::from)
            .map_err(|_| conversion_error(value, target_type)),
        "number" => value
            .parse::<f64>()
            .map(Value::from)
            .map_err(|_| conversion_error(value, target_type)),
        "boolean" => Ok(Value::Bool(value.eq_ignore_ascii_case("true"))),
        _ => Ok(Value::String(value.to_string())),
    }
}

fn conversion_error(value: &str, target_type: &str) -> AppError {
    AppError::Conversion {
        value: value.to_string(),
        target_type: target_type.to_string(),
    }
}
