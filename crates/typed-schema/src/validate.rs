//! Validation boundary: compile a schema document and check one instance
//! against it.

use std::fmt;

use log::debug;
use serde_json::Value;

use crate::error::SchemaError;
use crate::schema::SchemaNode;

/// A single structural violation reported by the validation engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// JSON Pointer to the violating location in the instance.
    pub instance_path: String,
    /// JSON Pointer to the schema keyword that was violated.
    pub schema_path: String,
    /// The engine's human-readable message.
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.instance_path.is_empty() {
            write!(f, "(root): {}", self.message)
        } else {
            write!(f, "{}: {}", self.instance_path, self.message)
        }
    }
}

/// Outcome of checking one instance against a schema.
///
/// A failed check is a normal value, not an error: `valid` is `false` and
/// `errors` holds every violation the engine found.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validation {
    pub valid: bool,
    /// Violations in engine order; empty exactly when `valid`.
    pub errors: Vec<Violation>,
}

/// Compile `schema` under JSON Schema draft 2020-12 and check `instance`.
///
/// Every call compiles afresh; nothing is cached between calls. Callers
/// validating many instances against one schema should serialize the node
/// once and hold their own compiled validator.
///
/// # Errors
///
/// [`SchemaError::Compile`] when the engine rejects the schema document
/// itself. Instance mismatches are reported through the returned
/// [`Validation`], never as an error.
pub fn validate(schema: &SchemaNode, instance: &Value) -> Result<Validation, SchemaError> {
    let document = schema.to_value();

    let mut options = jsonschema::options();
    options.with_draft(jsonschema::Draft::Draft202012);
    let validator = options
        .build(&document)
        .map_err(|e| SchemaError::Compile {
            reason: e.to_string(),
        })?;

    let errors: Vec<Violation> = validator
        .iter_errors(instance)
        .map(|error| Violation {
            instance_path: error.instance_path.to_string(),
            schema_path: error.schema_path.to_string(),
            message: error.to_string(),
        })
        .collect();

    let valid = errors.is_empty();
    debug!("validated instance: valid={valid} ({} violations)", errors.len());

    Ok(Validation { valid, errors })
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::schema::SchemaType;

    #[test]
    fn a_matching_instance_passes_with_no_violations() {
        let schema = SchemaNode::of(SchemaType::String);
        let outcome = validate(&schema, &json!("hello")).unwrap();

        assert!(outcome.valid);
        assert!(outcome.errors.is_empty());
    }

    #[test]
    fn a_mismatching_instance_fails_with_violations() {
        let schema = SchemaNode::of(SchemaType::String);
        let outcome = validate(&schema, &json!(42)).unwrap();

        assert!(!outcome.valid);
        assert!(!outcome.errors.is_empty());
    }

    #[test]
    fn root_violations_render_with_a_root_marker() {
        let violation = Violation {
            instance_path: String::new(),
            schema_path: "/type".to_string(),
            message: "42 is not of type \"string\"".to_string(),
        };
        assert_eq!(violation.to_string(), "(root): 42 is not of type \"string\"");
    }

    #[test]
    fn nested_violations_render_with_their_pointer() {
        let violation = Violation {
            instance_path: "/age".to_string(),
            schema_path: "/properties/age/type".to_string(),
            message: "\"x\" is not of type \"number\"".to_string(),
        };
        assert_eq!(violation.to_string(), "/age: \"x\" is not of type \"number\"");
    }
}
