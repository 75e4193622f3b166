//! # enact-cli — Descriptor Validation CLI
//!
//! Provides the `enact-validate` command: a CI gate and local developer
//! tool that checks Enact capability and tool descriptors against their
//! JSON schemas and then runs the advisory lint rules from `enact-lint`.
//!
//! ## Subcommands
//!
//! - `enact-validate capability [DIR]` — Validate every `capability.yaml`
//!   under a directory tree (or one file with `--file`).
//! - `enact-validate tool [DIR]` — Validate every `*.yaml`/`*.yml` tool
//!   descriptor under a directory tree (or one file with `--file`).
//!
//! ## Exit status
//!
//! `0` when every processed file is schema-valid (advisory warnings do
//! not affect the status); `1` when any file is invalid or fails to load,
//! when no candidate files are found, or when the schema itself cannot be
//! loaded. A schema load failure aborts before any file is processed.
//!
//! ```bash
//! enact-validate capability capabilities/
//! enact-validate tool tools/ --schema schemas/enact-tool-schema.json
//! enact-validate tool --file tools/acme/build.yaml -v
//! ```

pub mod capability;
pub mod locate;
pub mod report;
pub mod runner;
pub mod tool;

pub use runner::{BatchReport, Family, OutcomeStatus, RunSummary, ValidationOutcome};
