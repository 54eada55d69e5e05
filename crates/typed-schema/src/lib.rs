//! Declarative type descriptors to JSON Schema.
//!
//! Describe a data model once, as named object types with annotated fields,
//! and derive the rest from it:
//!
//! - [`create_schema`] synthesizes a JSON Schema node tree from a
//!   [`TypeRef`], consulting a [`MetadataProvider`] (usually a
//!   [`TypeRegistry`]) for object- and field-level options.
//! - [`insert_alternative`] edits a document by segmented property path,
//!   creating missing intermediates and promoting plain properties into
//!   polymorphic `oneOf` lists.
//! - [`validate`] compiles the document and checks one instance against it,
//!   returning a verdict with the engine's structured violations.
//!
//! Synthesis is deterministic: descriptor field order is `properties` order,
//! and union alternatives keep their declared order.
//!
//! # Example
//!
//! ```
//! use serde_json::json;
//! use typed_schema::{
//!     create_schema, insert_alternative, validate, FieldDescriptor, TypeDescriptor, TypeRef,
//!     TypeRegistry,
//! };
//!
//! # fn main() -> Result<(), typed_schema::SchemaError> {
//! let mut registry = TypeRegistry::new();
//! registry.register(
//!     "User",
//!     TypeDescriptor::new()
//!         .description("A sample user object")
//!         .field(
//!             "name",
//!             FieldDescriptor::of(TypeRef::String)
//!                 .required()
//!                 .description("User name"),
//!         )
//!         .field(
//!             "age",
//!             FieldDescriptor::of(TypeRef::Number)
//!                 .required()
//!                 .description("User age"),
//!         ),
//! );
//!
//! let mut schema = create_schema(&registry, &TypeRef::named("User"))?;
//! assert_eq!(
//!     schema.to_value(),
//!     json!({
//!         "type": "object",
//!         "description": "A sample user object",
//!         "properties": {
//!             "name": {"type": "string", "description": "User name"},
//!             "age": {"type": "number", "description": "User age"},
//!         },
//!         "required": ["name", "age"],
//!     })
//! );
//!
//! let outcome = validate(&schema, &json!({"name": "John Doe", "age": 30}))?;
//! assert!(outcome.valid);
//!
//! // "age" already exists, so it becomes a oneOf and gains an alternative.
//! insert_alternative(&registry, &mut schema, &["age"], &TypeRef::String)?;
//! assert!(schema.property("age").is_some_and(|p| p.is_one_of()));
//! # Ok(())
//! # }
//! ```

pub mod descriptor;
pub mod edit;
pub mod error;
pub mod schema;
pub mod synth;
pub mod validate;

pub use descriptor::{
    FieldDescriptor, FieldKind, FieldOptions, MetadataProvider, ObjectOptions, TypeDescriptor,
    TypeRef, TypeRegistry,
};
pub use edit::insert_alternative;
pub use error::SchemaError;
pub use schema::{SchemaNode, SchemaType};
pub use synth::create_schema;
pub use validate::{validate, Validation, Violation};
