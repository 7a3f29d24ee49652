#![deny(missing_docs)]

//! # oas2markup Core
//!
//! Schema-to-type resolution and example synthesis for OpenAPI
//! documentation rendering.
//!
//! Given one node of an OpenAPI/Swagger schema document, this crate
//! classifies it into a normalized [`Type`] descriptor and supplies a
//! representative example value, generating a canonical stand-in when
//! the document omits one. Document assembly, markup emission, and file
//! output live outside this crate and consume the plain data it
//! produces; the two collaborators they inject ([`DefinitionResolver`],
//! [`DocumentContext`]) are the only seams.

/// Shared error types.
pub mod error;

/// Schema node deserialization shims.
pub mod schema;

/// Normalized type descriptors.
pub mod types;

/// Type resolution logic.
pub mod resolver;

/// Example synthesis and value coercion.
pub mod example;

/// Property adapter facade.
pub mod adapter;

pub use adapter::PropertyAdapter;
pub use error::{AppError, AppResult};
pub use example::{convert_example, example_value, generate_example, DocumentContext};
pub use resolver::{resolve_type, DefinitionResolver};
pub use schema::{AdditionalProperties, SchemaKind, SchemaNode};
pub use types::{ArrayType, BasicType, EnumType, MapType, ObjectType, RefType, Type};
