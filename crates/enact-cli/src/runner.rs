//! Batch orchestration: drive locate → load → validate → lint across a
//! directory tree and aggregate per-file outcomes.
//!
//! This is the only component with cross-file state (the append-only
//! outcome list and its derived counts). Each per-file step is pure, so
//! one bad file never disturbs the rest of the run; only a schema that
//! fails to load aborts everything.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde_json::Value;

use enact_schema::{load_document, load_schema, SchemaValidator};

use crate::locate;
use crate::report::Reporter;

/// The two descriptor families, selecting the locator policy and the
/// advisory rule set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Family {
    /// Workflow-style `capability.yaml` descriptors.
    Capability,
    /// Freely named `*.yaml`/`*.yml` tool descriptors.
    Tool,
}

impl Family {
    /// Human label used in report text ("capability" / "tool").
    pub fn label(self) -> &'static str {
        match self {
            Self::Capability => "capability",
            Self::Tool => "tool",
        }
    }

    /// Collect candidate files under `root` with this family's policy.
    pub fn locate(self, root: &Path) -> Vec<PathBuf> {
        match self {
            Self::Capability => locate::find_capability_files(root),
            Self::Tool => locate::find_tool_files(root),
        }
    }

    /// Run this family's advisory rule pipeline.
    pub fn lint(self, doc: &Value, dir: &Path) -> Vec<String> {
        match self {
            Self::Capability => enact_lint::capability_warnings(doc, dir),
            Self::Tool => enact_lint::tool_warnings(doc, dir),
        }
    }
}

/// Terminal state of one candidate file.
///
/// The shape encodes the outcome invariants: an error message exists
/// exactly when the file is invalid, and warnings only ever attach to
/// valid files (advisory rules never run on schema-invalid documents).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutcomeStatus {
    /// Schema-valid; `warnings` holds advisory findings in rule order.
    Valid { warnings: Vec<String> },
    /// Failed to load or violated the schema.
    Invalid { error: String },
}

/// One candidate file's result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    pub path: PathBuf,
    pub status: OutcomeStatus,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        matches!(self.status, OutcomeStatus::Valid { .. })
    }
}

/// Aggregate counts, computed once after every file has been processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Schema-valid files (including those with warnings).
    pub valid: usize,
    /// Schema-valid files that drew at least one advisory warning.
    pub valid_with_warnings: usize,
    /// Files that failed to load or violated the schema.
    pub invalid: usize,
}

impl RunSummary {
    pub fn from_outcomes(outcomes: &[ValidationOutcome]) -> Self {
        let mut summary = Self {
            valid: 0,
            valid_with_warnings: 0,
            invalid: 0,
        };
        for outcome in outcomes {
            match &outcome.status {
                OutcomeStatus::Valid { warnings } => {
                    summary.valid += 1;
                    if !warnings.is_empty() {
                        summary.valid_with_warnings += 1;
                    }
                }
                OutcomeStatus::Invalid { .. } => summary.invalid += 1,
            }
        }
        summary
    }

    /// Warnings never affect success; only invalid files do.
    pub fn all_valid(&self) -> bool {
        self.invalid == 0
    }
}

/// All outcomes of one batch run plus the derived summary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BatchReport {
    pub outcomes: Vec<ValidationOutcome>,
    pub summary: RunSummary,
}

impl BatchReport {
    /// True when the locator found no candidate files at all.
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// A run succeeds when it processed at least one file and none were
    /// invalid. An empty directory is a failure signal, not a vacuous
    /// pass.
    pub fn succeeded(&self) -> bool {
        !self.is_empty() && self.summary.all_valid()
    }
}

/// Validate one candidate file: load, schema-check, lint.
///
/// Load failures and schema violations come back as recorded outcomes,
/// never as errors; the batch loop moves on to the next file either way.
pub fn validate_file(validator: &SchemaValidator, family: Family, path: &Path) -> ValidationOutcome {
    let doc = match load_document(path) {
        Ok(doc) => doc,
        Err(e) => {
            tracing::debug!("{e}");
            return ValidationOutcome {
                path: path.to_path_buf(),
                status: OutcomeStatus::Invalid {
                    error: format!("Failed to load {}", path.display()),
                },
            };
        }
    };

    if let Err(violation) = validator.check(&doc) {
        return ValidationOutcome {
            path: path.to_path_buf(),
            status: OutcomeStatus::Invalid {
                error: violation.to_string(),
            },
        };
    }

    let dir = path.parent().unwrap_or_else(|| Path::new("."));
    ValidationOutcome {
        path: path.to_path_buf(),
        status: OutcomeStatus::Valid {
            warnings: family.lint(&doc, dir),
        },
    }
}

/// Validate every candidate file under `root` sequentially.
///
/// An empty report (see [`BatchReport::is_empty`]) means the locator
/// found nothing; callers must treat that as an unsuccessful run.
pub fn validate_tree(validator: &SchemaValidator, family: Family, root: &Path) -> BatchReport {
    let files = family.locate(root);
    let outcomes: Vec<ValidationOutcome> = files
        .iter()
        .map(|path| validate_file(validator, family, path))
        .collect();
    let summary = RunSummary::from_outcomes(&outcomes);
    BatchReport { outcomes, summary }
}

/// Shared driver behind both subcommands.
///
/// Loads and compiles the schema (fatal on failure, before any file is
/// touched), then runs either single-file or whole-tree validation and
/// renders through the reporter. Returns the process exit code.
pub fn run_family(
    family: Family,
    schema_path: &Path,
    target: &Path,
    single_file: Option<&Path>,
    reporter: &Reporter,
) -> Result<u8> {
    let schema = load_schema(schema_path)
        .with_context(|| format!("cannot validate {} files", family.label()))?;
    let validator = SchemaValidator::new(&schema)
        .with_context(|| format!("cannot validate {} files", family.label()))?;

    if let Some(file) = single_file {
        let outcome = validate_file(&validator, family, file);
        reporter.print_single(&outcome);
        return Ok(if outcome.is_valid() { 0 } else { 1 });
    }

    let report = validate_tree(&validator, family, target);
    if report.is_empty() {
        reporter.print_no_files(family, target);
        return Ok(1);
    }

    reporter.print_banner(report.outcomes.len(), family);
    for outcome in &report.outcomes {
        reporter.print_outcome(outcome);
    }
    reporter.print_summary(&report.summary);

    Ok(if report.succeeded() { 0 } else { 1 })
}
