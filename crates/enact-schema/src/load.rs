//! File loading for schemas and candidate descriptors.
//!
//! Two loaders with two different failure postures: a schema that cannot
//! be loaded aborts the whole run ([`SchemaLoadError`] is fatal), while a
//! descriptor that cannot be loaded is a per-file result the batch loop
//! records and moves past ([`DocumentLoadError`] is local).

use std::path::Path;

use serde_json::Value;

/// Errors while loading or compiling the schema document.
///
/// All variants are fatal: callers must terminate the run with a non-zero
/// status and no partial report.
#[derive(Debug, thiserror::Error)]
pub enum SchemaLoadError {
    /// The schema file could not be read.
    #[error("failed to read schema {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The schema file is not valid JSON.
    #[error("failed to parse schema {path}: {source}")]
    Parse {
        path: String,
        source: serde_json::Error,
    },
    /// The schema parsed but is not itself a valid JSON Schema.
    #[error("invalid schema document: {0}")]
    Compile(String),
}

/// Errors while loading one candidate descriptor.
///
/// Local to the one file: batch callers record an invalid outcome for the
/// path and continue with the next candidate.
#[derive(Debug, thiserror::Error)]
pub enum DocumentLoadError {
    /// The descriptor file could not be read.
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    /// The descriptor is not well-formed YAML.
    #[error("failed to parse {path}: {source}")]
    Parse {
        path: String,
        source: serde_yaml::Error,
    },
}

/// Load a JSON Schema document from `path`.
///
/// Returns the raw schema tree; compilation happens in
/// [`SchemaValidator::new`](crate::SchemaValidator::new) so that the same
/// loaded value can also be inspected or logged by callers.
pub fn load_schema(path: &Path) -> Result<Value, SchemaLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| SchemaLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SchemaLoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}

/// Load one YAML descriptor from `path` into a loosely-typed JSON tree.
///
/// An empty file parses to `Value::Null`. That is deliberately forwarded
/// to schema validation rather than reported here — a null document is a
/// schema problem, not a loader problem.
pub fn load_document(path: &Path) -> Result<Value, DocumentLoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| DocumentLoadError::Io {
        path: path.display().to_string(),
        source,
    })?;
    serde_yaml::from_str(&content).map_err(|source| DocumentLoadError::Parse {
        path: path.display().to_string(),
        source,
    })
}
