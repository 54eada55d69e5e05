//! Path-based schema editing: walk to a nested property and add a
//! polymorphic alternative in place.

use crate::descriptor::{MetadataProvider, TypeRef};
use crate::error::SchemaError;
use crate::schema::SchemaNode;
use crate::synth::create_schema;

/// Insert `ty` as an alternative at `path` inside `schema`.
///
/// All but the last segment are navigation. A node missing its `properties`
/// map gets an empty one, and a missing segment gets a fresh
/// `{"type": "object", "properties": {}}` node, so navigation itself never
/// fails, whatever the nodes along the way claim to be.
///
/// At the terminal segment a vacant slot receives the plain synthesized
/// node. An occupied slot is promoted to a `oneOf` list, seeded from its
/// previous `type` when it had one, and the synthesized node is appended.
/// Calling this twice with the same arguments appends the alternative
/// twice; nothing deduplicates, and promotion is never undone.
///
/// # Errors
///
/// [`SchemaError::InvalidPath`] when `path` is empty, before `schema` is
/// touched. [`SchemaError::MetadataMissing`] when `ty` (at any depth) names
/// an unregistered type; navigation nodes created before that failure are
/// left in place.
pub fn insert_alternative<P, S>(
    provider: &P,
    schema: &mut SchemaNode,
    path: &[S],
    ty: &TypeRef,
) -> Result<(), SchemaError>
where
    P: MetadataProvider,
    S: AsRef<str>,
{
    let (last, parents) = path.split_last().ok_or(SchemaError::InvalidPath)?;

    let mut current = schema;
    for segment in parents {
        current = current
            .properties_mut()
            .entry(segment.as_ref().to_string())
            .or_insert_with(SchemaNode::empty_object);
    }

    let slot = current.properties_mut();
    match slot.get_mut(last.as_ref()) {
        None => {
            let node = create_schema(provider, ty)?;
            slot.insert(last.as_ref().to_string(), node);
        }
        Some(existing) => {
            let alternative = create_schema(provider, ty)?;
            existing.promote_to_one_of().push(alternative);
        }
    }
    Ok(())
}
