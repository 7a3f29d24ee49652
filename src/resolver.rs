#![deny(missing_docs)]

//! # Type Resolution
//!
//! Classifies a single schema node into a normalized [`Type`]
//! descriptor, recursing into array items and dictionary value schemas.
//! A `$ref` is a recursion-stopping leaf: the resolver reports the
//! reference and a named placeholder but never follows it into the
//! target document, which bounds recursion depth for reference cycles.

use crate::schema::{SchemaKind, SchemaNode};
use crate::types::{ArrayType, BasicType, EnumType, MapType, ObjectType, RefType, Type};
use percent_encoding::percent_decode_str;
use serde_json::Value;

/// Resolves the cross-document location of a named schema definition.
///
/// Implementors map a simple definition name (e.g. "Pet") to the
/// document that renders it. Returning `None` marks the definition as
/// local or unknown; the reference is surfaced either way.
pub trait DefinitionResolver {
    /// Maps a simple schema name to an optional document location.
    fn resolve(&self, name: &str) -> Option<String>;
}

impl<F> DefinitionResolver for F
where
    F: Fn(&str) -> Option<String>,
{
    fn resolve(&self, name: &str) -> Option<String> {
        self(name)
    }
}

/// Retrieves the type descriptor of a schema node.
///
/// Classification follows a fixed priority order: reference, array,
/// dictionary, string (enumerated, formatted, plain), object, residual
/// primitive. Arrays and dictionaries missing their child schema degrade
/// to an untyped object placeholder instead of failing; unknown or
/// missing type tags surface as-is in a [`BasicType`]. The resolver
/// never fails.
pub fn resolve_type(node: &SchemaNode, resolver: &dyn DefinitionResolver) -> Type {
    match node.kind() {
        SchemaKind::Reference => {
            let ref_path = node.ref_path.as_deref().unwrap_or_default();
            let name = simple_ref_name(ref_path);
            let location = resolver.resolve(&name);
            Type::Ref(RefType {
                location,
                placeholder: ObjectType::placeholder(Some(name)),
            })
        }
        SchemaKind::Array => {
            let item_type = match node.items.as_deref() {
                Some(items) => resolve_type(items, resolver),
                None => {
                    // Workaround for documents that omit the item schema
                    // (seen with composed models coming out of upstream parsers)
                    log::debug!("array schema without items; using an untyped object placeholder");
                    Type::Object(ObjectType::placeholder(None))
                }
            };
            Type::Array(ArrayType {
                title: node.title.clone(),
                item_type: Box::new(item_type),
            })
        }
        SchemaKind::Map => {
            let value_type = match node.value_schema() {
                Some(value_schema) => resolve_type(value_schema, resolver),
                None => {
                    log::debug!(
                        "dictionary schema without a value schema; using an untyped object placeholder"
                    );
                    Type::Object(ObjectType::placeholder(None))
                }
            };
            Type::Map(MapType {
                title: node.title.clone(),
                value_type: Box::new(value_type),
            })
        }
        SchemaKind::String => {
            match node.enum_values.as_deref().filter(|values| !values.is_empty()) {
                Some(values) => Type::Enum(EnumType {
                    title: node.title.clone(),
                    values: values.iter().map(enum_literal).collect(),
                }),
                None => basic_type(node),
            }
        }
        SchemaKind::Object => Type::Object(ObjectType {
            name: node.title.clone(),
            properties: node.properties.clone(),
        }),
        SchemaKind::Other => basic_type(node),
    }
}

/// Scalar descriptor carrying the raw type tag and a non-blank format.
fn basic_type(node: &SchemaNode) -> Type {
    let format = node
        .format
        .as_deref()
        .filter(|format| !format.trim().is_empty())
        .map(str::to_string);
    Type::Basic(BasicType {
        name: node.schema_type.clone(),
        title: node.title.clone(),
        format,
    })
}

/// Renders an enum literal for display. String literals pass through
/// unquoted; anything else keeps its compact JSON form.
fn enum_literal(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Simple name of a reference: the final pointer segment, decoded.
/// e.g. `#/components/schemas/User` -> `User`
pub(crate) fn simple_ref_name(ref_path: &str) -> String {
    let segment = ref_path.split('/').next_back().unwrap_or(ref_path);
    // JSON Pointer escapes first (`~1` before `~0`), then percent-encoding
    let decoded = segment.replace("~1", "/").replace("~0", "~");
    percent_decode_str(&decoded)
        .decode_utf8_lossy()
        .into_owned()
}
