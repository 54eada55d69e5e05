//! The schema node document model.
//!
//! A [`SchemaNode`] is both the in-memory working representation and the
//! wire document: serializing one yields standard JSON Schema with the
//! recognized key set and nothing else.

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// JSON Schema `type` names produced by synthesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaType {
    String,
    Number,
    Boolean,
    Array,
    Object,
}

impl SchemaType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::String => "string",
            Self::Number => "number",
            Self::Boolean => "boolean",
            Self::Array => "array",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for SchemaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One JSON Schema object node or sub-schema.
///
/// Every key is optional and omitted from serialization while unset; the
/// containers behind `properties` and `required` materialize lazily through
/// [`properties_mut`](Self::properties_mut) and
/// [`required_mut`](Self::required_mut), so a freshly synthesized object
/// with no fields serializes as just `{"type":"object"}`.
///
/// `properties` preserves insertion order, and re-inserting an existing key
/// replaces the value without moving the key.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SchemaNode {
    /// The `type` keyword. Mutually exclusive with `one_of` on nodes this
    /// crate produces: promotion moves `type` into the alternative list.
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub type_: Option<SchemaType>,

    /// Human-readable `description`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    /// Named sub-schemas of an object node, in insertion order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, SchemaNode>>,

    /// Property names that validated data must carry, in append order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<Vec<String>>,

    /// Allowed literal values, carried verbatim.
    #[serde(rename = "enum", skip_serializing_if = "Option::is_none")]
    pub enum_: Option<Vec<Value>>,

    /// Element sub-schema of an array node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub items: Option<Box<SchemaNode>>,

    /// Ordered alternative list of a polymorphic node.
    #[serde(rename = "oneOf", skip_serializing_if = "Option::is_none")]
    pub one_of: Option<Vec<SchemaNode>>,
}

impl SchemaNode {
    /// Leaf node `{"type": ...}`.
    pub fn of(type_: SchemaType) -> Self {
        Self {
            type_: Some(type_),
            ..Self::default()
        }
    }

    /// Object node with a materialized empty `properties` map, as created
    /// for missing intermediate path segments.
    pub fn empty_object() -> Self {
        Self {
            type_: Some(SchemaType::Object),
            properties: Some(IndexMap::new()),
            ..Self::default()
        }
    }

    /// Look up a property node by name.
    pub fn property(&self, name: &str) -> Option<&SchemaNode> {
        self.properties.as_ref().and_then(|p| p.get(name))
    }

    /// Mutable lookup of a property node by name.
    pub fn property_mut(&mut self, name: &str) -> Option<&mut SchemaNode> {
        self.properties.as_mut().and_then(|p| p.get_mut(name))
    }

    /// The `properties` map, created empty on first access.
    pub fn properties_mut(&mut self) -> &mut IndexMap<String, SchemaNode> {
        self.properties.get_or_insert_with(IndexMap::new)
    }

    /// The `required` list, created empty on first access.
    pub fn required_mut(&mut self) -> &mut Vec<String> {
        self.required.get_or_insert_with(Vec::new)
    }

    /// Whether this node carries a `oneOf` alternative list.
    pub fn is_one_of(&self) -> bool {
        self.one_of.is_some()
    }

    /// Convert a plain node into a `oneOf` node in place and return the
    /// alternative list.
    ///
    /// The node's `type`, when present, moves into the list as its seed
    /// entry `{"type": ...}`; a typeless node seeds an empty list. All other
    /// keys stay on the node. Nodes already carrying `oneOf` are left as
    /// they are. The conversion is one-way.
    pub fn promote_to_one_of(&mut self) -> &mut Vec<SchemaNode> {
        if self.one_of.is_none() {
            let seed = self
                .type_
                .take()
                .map(|t| vec![SchemaNode::of(t)])
                .unwrap_or_default();
            self.one_of = Some(seed);
        }
        self.one_of.get_or_insert_with(Vec::new)
    }

    /// Serialize to a `serde_json::Value` document.
    pub fn to_value(&self) -> Value {
        serde_json::to_value(self).unwrap_or(Value::Null)
    }
}

impl fmt::Display for SchemaNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match serde_json::to_string(self) {
            Ok(json) => f.write_str(&json),
            Err(_) => Err(fmt::Error),
        }
    }
}
