//! Metadata lookup: the provider contract and the descriptor registry.

use indexmap::IndexMap;
use log::debug;

use super::{FieldDescriptor, ObjectOptions, TypeDescriptor, TypeRef};

/// Lookup contract consumed by the synthesizer.
///
/// Implementations answer three questions about a structured type: its
/// object-level options, its ordered field map, and the declared type of a
/// single field. Iteration order of the field map decides the order of
/// synthesized `properties` keys.
///
/// Primitive and union references carry no metadata; every method returns
/// `None` for them.
pub trait MetadataProvider {
    /// Object-level options of a structured type, when any are attached.
    fn object_options(&self, ty: &TypeRef) -> Option<&ObjectOptions>;

    /// The ordered field map of a structured type. `None` means the type is
    /// unknown to the provider, which synthesis reports as
    /// [`MetadataMissing`](crate::SchemaError::MetadataMissing).
    fn fields(&self, ty: &TypeRef) -> Option<&IndexMap<String, FieldDescriptor>>;

    /// Declared type of one field of a structured type.
    fn field_type(&self, ty: &TypeRef, field: &str) -> Option<&TypeRef> {
        self.fields(ty)
            .and_then(|fields| fields.get(field))
            .map(|descriptor| &descriptor.ty)
    }
}

/// The standard [`MetadataProvider`]: an explicit name-to-descriptor map.
///
/// Nothing is implicit; a type the registry was never told about is simply
/// unknown, and synthesizing it fails. Registration order is preserved for
/// [`names`](Self::names), and re-registering a name replaces its descriptor
/// in place.
#[derive(Debug, Clone, Default)]
pub struct TypeRegistry {
    descriptors: IndexMap<String, TypeDescriptor>,
}

impl TypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Load a registry from a declarative JSON document mapping type names
    /// to descriptors.
    pub fn from_json_str(document: &str) -> Result<Self, serde_json::Error> {
        let descriptors: IndexMap<String, TypeDescriptor> = serde_json::from_str(document)?;
        debug!("loaded {} type descriptors from document", descriptors.len());
        Ok(Self { descriptors })
    }

    /// Register `descriptor` under `name`, replacing any previous one.
    pub fn register(
        &mut self,
        name: impl Into<String>,
        descriptor: TypeDescriptor,
    ) -> &mut Self {
        let name = name.into();
        debug!(
            "registered type descriptor '{}' ({} fields)",
            name,
            descriptor.fields.len()
        );
        self.descriptors.insert(name, descriptor);
        self
    }

    /// Look up a descriptor by type name.
    pub fn descriptor(&self, name: &str) -> Option<&TypeDescriptor> {
        self.descriptors.get(name)
    }

    /// Whether `name` has a registered descriptor.
    pub fn contains(&self, name: &str) -> bool {
        self.descriptors.contains_key(name)
    }

    /// Registered type names, in registration order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.descriptors.keys().map(String::as_str)
    }

    /// Number of registered descriptors.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }
}

impl MetadataProvider for TypeRegistry {
    fn object_options(&self, ty: &TypeRef) -> Option<&ObjectOptions> {
        match ty {
            TypeRef::Named(name) => self.descriptors.get(name).map(|d| &d.options),
            _ => None,
        }
    }

    fn fields(&self, ty: &TypeRef) -> Option<&IndexMap<String, FieldDescriptor>> {
        match ty {
            TypeRef::Named(name) => self.descriptors.get(name).map(|d| &d.fields),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user_registry() -> TypeRegistry {
        let mut registry = TypeRegistry::new();
        registry.register(
            "User",
            TypeDescriptor::new()
                .description("A sample user object")
                .field("name", FieldDescriptor::of(TypeRef::String).required())
                .field("age", FieldDescriptor::of(TypeRef::Number)),
        );
        registry
    }

    #[test]
    fn lookup_answers_for_registered_names_only() {
        let registry = user_registry();

        assert!(registry.contains("User"));
        assert!(!registry.contains("Ghost"));
        assert!(registry.fields(&TypeRef::named("User")).is_some());
        assert!(registry.fields(&TypeRef::named("Ghost")).is_none());
    }

    #[test]
    fn primitives_carry_no_metadata() {
        let registry = user_registry();

        assert!(registry.object_options(&TypeRef::String).is_none());
        assert!(registry.fields(&TypeRef::Number).is_none());
        assert!(registry
            .fields(&TypeRef::union(vec![TypeRef::String]))
            .is_none());
    }

    #[test]
    fn field_type_resolves_through_the_field_map() {
        let registry = user_registry();
        let user = TypeRef::named("User");

        assert_eq!(registry.field_type(&user, "name"), Some(&TypeRef::String));
        assert_eq!(registry.field_type(&user, "age"), Some(&TypeRef::Number));
        assert_eq!(registry.field_type(&user, "missing"), None);
    }

    #[test]
    fn reregistering_replaces_the_descriptor() {
        let mut registry = user_registry();
        registry.register(
            "User",
            TypeDescriptor::new().field("id", FieldDescriptor::of(TypeRef::Number)),
        );

        let descriptor = registry.descriptor("User").unwrap();
        assert_eq!(descriptor.fields.len(), 1);
        assert!(descriptor.fields.contains_key("id"));
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn loads_from_a_declarative_document() {
        let registry = TypeRegistry::from_json_str(
            r#"{
                "User": {
                    "description": "A sample user object",
                    "fields": {
                        "name": {"type": "string", "required": true},
                        "age": {"type": "number", "required": true}
                    }
                }
            }"#,
        )
        .unwrap();

        assert_eq!(registry.names().collect::<Vec<_>>(), ["User"]);
        let user = TypeRef::named("User");
        assert_eq!(registry.field_type(&user, "name"), Some(&TypeRef::String));
        assert!(
            registry
                .object_options(&user)
                .and_then(|o| o.description.as_deref())
                == Some("A sample user object")
        );
    }
}
