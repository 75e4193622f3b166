//! Schema conformance checking for loaded descriptors.
//!
//! A failed check is a normal return value, not an exception path: the
//! batch loop records [`SchemaViolation`]s per file and keeps going.

use serde_json::Value;

use crate::load::SchemaLoadError;

/// The first/primary schema violation found in one descriptor.
///
/// Carries the JSON Pointer path to the violating field and a
/// human-readable description of the constraint that failed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchemaViolation {
    /// JSON Pointer path to the violating field ("/" for the document root).
    pub instance_path: String,
    /// Human-readable description of the violated constraint.
    pub message: String,
}

impl std::fmt::Display for SchemaViolation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "at {}: {}", self.instance_path, self.message)
    }
}

/// A compiled schema plus the conformance check over descriptor trees.
///
/// Compile once per run, check many descriptors. The validator holds no
/// per-document state and checking has no side effects.
#[derive(Debug)]
pub struct SchemaValidator {
    validator: jsonschema::Validator,
}

impl SchemaValidator {
    /// Compile a loaded schema document.
    ///
    /// A schema that parses as JSON but is not a usable JSON Schema is a
    /// [`SchemaLoadError::Compile`] — fatal, like every other schema
    /// loading failure.
    pub fn new(schema: &Value) -> Result<Self, SchemaLoadError> {
        let validator = jsonschema::validator_for(schema)
            .map_err(|e| SchemaLoadError::Compile(e.to_string()))?;
        Ok(Self { validator })
    }

    /// Check one descriptor against the compiled schema.
    ///
    /// Returns `Ok(())` for conforming documents and the first violation
    /// otherwise. Structurally arbitrary input (including `null` from an
    /// empty file) is always accepted as input and judged by the schema.
    pub fn check(&self, doc: &Value) -> Result<(), SchemaViolation> {
        match self.validator.validate(doc) {
            Ok(()) => Ok(()),
            Err(error) => {
                let path = error.instance_path.to_string();
                Err(SchemaViolation {
                    instance_path: if path.is_empty() { "/".to_string() } else { path },
                    message: error.to_string(),
                })
            }
        }
    }

    /// Convenience predicate for callers that only need the boolean.
    pub fn is_valid(&self, doc: &Value) -> bool {
        self.validator.is_valid(doc)
    }
}
