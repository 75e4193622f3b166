//! # enact-schema — Descriptor Loading & Schema Conformance
//!
//! This crate provides the schema-conformance half of the Enact descriptor
//! validator: loading a JSON Schema document, loading candidate YAML
//! descriptors, and checking one descriptor against the compiled schema.
//!
//! ## Responsibilities
//!
//! - **Schema loading:** Read and parse one JSON Schema file. Any failure
//!   here ([`SchemaLoadError`]) is fatal for a validation run — there is
//!   nothing meaningful to validate without a schema.
//!
//! - **Document loading:** Read and parse one YAML descriptor into a
//!   loosely-typed [`serde_json::Value`] tree. Failures
//!   ([`DocumentLoadError`]) are local to the one file; batch callers
//!   record them and continue.
//!
//! - **Conformance checking:** [`SchemaValidator`] compiles the schema
//!   once and checks descriptors against it, reporting the first
//!   violation as a plain [`SchemaViolation`] value with the JSON Pointer
//!   path to the offending field and a human-readable message.
//!
//! ## Design
//!
//! Descriptors stay untyped on purpose. The two descriptor families
//! (capability and tool) share one `Value` representation; the schema —
//! not the Rust type system — decides structure, and downstream advisory
//! rules probe fields optionally. A schema mismatch is a normal return
//! value, never an `Err` that crosses the call boundary: only loader I/O
//! and schema-compilation problems are surfaced as errors.

pub mod load;
pub mod validate;

// Re-export primary types for ergonomic imports.
pub use load::{load_document, load_schema, DocumentLoadError, SchemaLoadError};
pub use validate::{SchemaValidator, SchemaViolation};
