//! # enact-lint — Advisory Quality Rules
//!
//! Heuristic quality checks that run on descriptors which already passed
//! schema validation. Every finding is a plain warning string: advisory,
//! non-fatal, and never capable of making a document invalid.
//!
//! ## Rule model
//!
//! Each rule is an independent pure function over the loosely-typed
//! document tree (`serde_json::Value`), sometimes also given the
//! descriptor's directory. Rules never mutate the document, never
//! short-circuit each other, and run in a fixed order per family:
//!
//! - [`capability_warnings`] — 4 rules for workflow-style capability
//!   descriptors (companion README, step shape, `run` presence, language
//!   entrypoint heuristics).
//! - [`tool_warnings`] — 11 rules for tool descriptors (naming, version
//!   pinning, timeout/license formats, image hygiene, schema hints,
//!   signature/author/example structure, env documentation, README).
//!
//! A single malformed field can fire several warnings at once; that is a
//! union of independent checks, not a first-match chain.

pub mod capability;
pub mod tool;

use std::path::Path;

use serde_json::Value;

pub use capability::capability_warnings;
pub use tool::{tool_warnings, SPDX_LICENSES};

/// Probe a string-valued field, treating wrong-typed values as absent.
///
/// Structure enforcement belongs to the schema; the linter only inspects
/// fields that look the way the rule expects.
pub(crate) fn str_field<'a>(doc: &'a Value, key: &str) -> Option<&'a str> {
    doc.get(key).and_then(Value::as_str)
}

/// Shared sibling-documentation rule: both families expect a README.md
/// next to the descriptor.
pub(crate) fn missing_readme(dir: &Path) -> Option<String> {
    if dir.join("README.md").exists() {
        None
    } else {
        Some(format!("Missing README.md in {}", dir.display()))
    }
}
