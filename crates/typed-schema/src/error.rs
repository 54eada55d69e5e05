//! Error taxonomy for synthesis, path editing, and validator compilation.

use thiserror::Error;

/// Failures of the programmer-error class: bad paths, unregistered type
/// references, and schema documents the engine refuses to compile.
///
/// A failed data check is never a `SchemaError`:
/// [`validate`](crate::validate::validate) reports mismatches as an ordinary
/// [`Validation`](crate::validate::Validation) value with `valid: false`.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// The property path given to the editor was empty.
    #[error("path cannot be empty")]
    InvalidPath,

    /// A structured type reference has no descriptor in the provider.
    #[error("no type descriptor registered for '{type_name}'")]
    MetadataMissing {
        /// Name carried by the unresolvable [`TypeRef::Named`](crate::TypeRef::Named).
        type_name: String,
    },

    /// The validation engine rejected the schema document at compile time.
    /// The reason text is the engine's own, passed through unchanged.
    #[error("schema failed to compile: {reason}")]
    Compile {
        /// Engine-reported reason.
        reason: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_texts_carry_the_fault_details() {
        assert_eq!(SchemaError::InvalidPath.to_string(), "path cannot be empty");
        assert_eq!(
            SchemaError::MetadataMissing {
                type_name: "Ghost".to_string()
            }
            .to_string(),
            "no type descriptor registered for 'Ghost'"
        );
        assert_eq!(
            SchemaError::Compile {
                reason: "bad document".to_string()
            }
            .to_string(),
            "schema failed to compile: bad document"
        );
    }
}
