//! Type references and the descriptor metadata attached to them.
//!
//! A [`TypeRef`] names what a value is; a [`TypeDescriptor`] says what a
//! structured type looks like. Descriptors are plain data built through the
//! consuming setters here or loaded from a declarative JSON document, then
//! handed to a [`TypeRegistry`] for synthesis to consult.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub mod registry;

pub use registry::{MetadataProvider, TypeRegistry};

/// Reference to a describable type: a primitive marker, a named structured
/// type, or an ordered union of alternatives.
///
/// References are plain data. They are created by the caller, read during
/// synthesis, and never mutated by this crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TypeRef {
    String,
    Number,
    Boolean,
    Array,
    /// A structured type registered under this name.
    Named(String),
    /// Ordered alternatives; synthesizes to a `oneOf` node.
    Union(Vec<TypeRef>),
}

impl TypeRef {
    /// Reference to the structured type registered under `name`.
    pub fn named(name: impl Into<String>) -> Self {
        Self::Named(name.into())
    }

    /// Ordered union of the given alternatives.
    pub fn union(types: Vec<TypeRef>) -> Self {
        Self::Union(types)
    }
}

impl fmt::Display for TypeRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Number => f.write_str("number"),
            Self::Boolean => f.write_str("boolean"),
            Self::Array => f.write_str("array"),
            Self::Named(name) => f.write_str(name),
            Self::Union(types) => {
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(" | ")?;
                    }
                    write!(f, "{ty}")?;
                }
                Ok(())
            }
        }
    }
}

/// Object-level options of a structured type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ObjectOptions {
    /// `description` carried onto the synthesized object node.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Discriminated shape of a field's schema contribution.
///
/// Exactly one of the three applies to any field, so "array of X" and
/// "one of X or Y" cannot be combined on a single field.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    /// The base node comes from the field's declared type alone.
    #[default]
    Scalar,
    /// Attach an `items` sub-schema synthesized from the element type. The
    /// base node is still whatever the declared type produces; nothing
    /// checks that it is an `"array"` node.
    Array { item: TypeRef },
    /// Synthesize a `oneOf` node from the alternatives. The declared type
    /// is ignored.
    Union { alternatives: Vec<TypeRef> },
}

/// Per-field options layered onto the base node during property insertion.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FieldOptions {
    /// Whether validated data must carry the field.
    #[serde(default)]
    pub required: bool,

    /// Property-level `description`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Allowed literal values, attached verbatim and never checked against
    /// the declared type.
    #[serde(default, rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_: Option<Vec<Value>>,

    /// Scalar, array, or union discrimination.
    #[serde(default)]
    pub kind: FieldKind,
}

/// A field's declared type together with its options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldDescriptor {
    /// Declared type, recursed on for the base node unless the field's kind
    /// is [`FieldKind::Union`].
    #[serde(rename = "type")]
    pub ty: TypeRef,

    /// Options layered onto the base node.
    #[serde(flatten)]
    pub options: FieldOptions,
}

impl FieldDescriptor {
    /// Descriptor for a field of the given declared type, with default
    /// options.
    pub fn of(ty: TypeRef) -> Self {
        Self {
            ty,
            options: FieldOptions::default(),
        }
    }

    /// Mark the field as mandatory in validated data.
    pub fn required(mut self) -> Self {
        self.options.required = true;
        self
    }

    /// Attach a property-level description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.options.description = Some(text.into());
        self
    }

    /// Restrict the field to a fixed set of literal values.
    pub fn enum_values(mut self, values: Vec<Value>) -> Self {
        self.options.enum_ = Some(values);
        self
    }

    /// Treat the field as an array with `item` elements.
    pub fn item_type(mut self, item: TypeRef) -> Self {
        self.options.kind = FieldKind::Array { item };
        self
    }

    /// Treat the field as a union of the given alternatives.
    pub fn one_of(mut self, alternatives: Vec<TypeRef>) -> Self {
        self.options.kind = FieldKind::Union { alternatives };
        self
    }
}

/// Declarative description of a structured type: object-level options plus
/// an ordered field map.
///
/// Field insertion order is authoritative; synthesized `properties` keys
/// come out in exactly this order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    /// Object-level options.
    #[serde(flatten)]
    pub options: ObjectOptions,

    /// Fields by name, in declaration order.
    #[serde(default)]
    pub fields: IndexMap<String, FieldDescriptor>,
}

impl TypeDescriptor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach an object-level description.
    pub fn description(mut self, text: impl Into<String>) -> Self {
        self.options.description = Some(text.into());
        self
    }

    /// Add a field, or replace one already declared under `name` without
    /// moving it.
    pub fn field(mut self, name: impl Into<String>, field: FieldDescriptor) -> Self {
        self.fields.insert(name.into(), field);
        self
    }
}
