//! Schema synthesis: recursive traversal from a type reference to a node
//! tree.

use crate::descriptor::{FieldKind, FieldOptions, MetadataProvider, TypeRef};
use crate::error::SchemaError;
use crate::schema::{SchemaNode, SchemaType};

/// Synthesize a JSON Schema node for `ty`.
///
/// Primitive markers map to fixed leaf nodes. A [`TypeRef::Union`] produces
/// a `oneOf` node with one synthesized alternative per entry, in order and
/// with no deduplication. A [`TypeRef::Named`] type produces an `object`
/// node carrying the provider's object-level description and one property
/// per field, in the provider's field order; a type with no fields stays a
/// bare `object` node with no `properties` key.
///
/// # Errors
///
/// [`SchemaError::MetadataMissing`] when a named type, at any depth, has no
/// descriptor in the provider. Primitive and union-of-primitive references
/// never fail.
pub fn create_schema<P: MetadataProvider>(
    provider: &P,
    ty: &TypeRef,
) -> Result<SchemaNode, SchemaError> {
    match ty {
        TypeRef::String => Ok(SchemaNode::of(SchemaType::String)),
        TypeRef::Number => Ok(SchemaNode::of(SchemaType::Number)),
        TypeRef::Boolean => Ok(SchemaNode::of(SchemaType::Boolean)),
        TypeRef::Array => Ok(SchemaNode::of(SchemaType::Array)),
        TypeRef::Union(types) => union_node(provider, types),
        TypeRef::Named(name) => {
            let fields = provider
                .fields(ty)
                .ok_or_else(|| SchemaError::MetadataMissing {
                    type_name: name.clone(),
                })?;

            let mut node = SchemaNode::of(SchemaType::Object);
            if let Some(options) = provider.object_options(ty) {
                node.description = options.description.clone();
            }
            for (field_name, field) in fields {
                insert_property(provider, &mut node, field_name, &field.ty, &field.options)?;
            }
            Ok(node)
        }
    }
}

/// `oneOf` node with one synthesized alternative per entry of `types`.
fn union_node<P: MetadataProvider>(
    provider: &P,
    types: &[TypeRef],
) -> Result<SchemaNode, SchemaError> {
    let mut alternatives = Vec::with_capacity(types.len());
    for ty in types {
        alternatives.push(create_schema(provider, ty)?);
    }
    Ok(SchemaNode {
        one_of: Some(alternatives),
        ..SchemaNode::default()
    })
}

/// Build one property node and store it on `node` under `name`.
///
/// The base comes from the field's kind: a union kind synthesizes a `oneOf`
/// node and ignores the declared type, anything else recurses on the
/// declared type. The description, `enum` list, and `items` sub-schema are
/// then layered on, the required flag appends `name` to the object's
/// `required` list, and the finished node lands in `properties`.
fn insert_property<P: MetadataProvider>(
    provider: &P,
    node: &mut SchemaNode,
    name: &str,
    declared: &TypeRef,
    options: &FieldOptions,
) -> Result<(), SchemaError> {
    let mut property = match &options.kind {
        FieldKind::Union { alternatives } => union_node(provider, alternatives)?,
        FieldKind::Scalar | FieldKind::Array { .. } => create_schema(provider, declared)?,
    };

    if let Some(description) = &options.description {
        property.description = Some(description.clone());
    }
    if let Some(values) = &options.enum_ {
        property.enum_ = Some(values.clone());
    }
    if let FieldKind::Array { item } = &options.kind {
        property.items = Some(Box::new(create_schema(provider, item)?));
    }
    if options.required {
        node.required_mut().push(name.to_string());
    }
    node.properties_mut().insert(name.to_string(), property);
    Ok(())
}
