//! Console rendering of validation outcomes.
//!
//! All presentation state (color, symbols, verbosity) lives here and
//! nowhere else. Each file lands in exactly one of three visual states:
//! pass (silent unless verbose), pass-with-warnings (one line per
//! warning), or fail (with the error message); the summary block then
//! reports the three counts.

use std::io::IsTerminal;
use std::path::Path;

use clap::ValueEnum;
use owo_colors::OwoColorize;

use crate::runner::{Family, OutcomeStatus, RunSummary, ValidationOutcome};

/// When to emit ANSI color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum ColorMode {
    /// Color when stdout is a terminal and `NO_COLOR` is unset.
    #[default]
    Auto,
    Always,
    Never,
}

impl ColorMode {
    fn enabled(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => {
                std::io::stdout().is_terminal() && std::env::var_os("NO_COLOR").is_none()
            }
        }
    }
}

/// Renders per-file outcomes and the run summary to stdout.
pub struct Reporter {
    color: bool,
    verbose: bool,
}

impl Reporter {
    pub fn new(mode: ColorMode, verbose: bool) -> Self {
        Self {
            color: mode.enabled(),
            verbose,
        }
    }

    /// "Found N <family> files to validate" banner before per-file lines.
    pub fn print_banner(&self, count: usize, family: Family) {
        let line = format!("Found {count} {} files to validate", family.label());
        if self.color {
            println!("{}", line.blue());
        } else {
            println!("{line}");
        }
    }

    /// The zero-candidates signal; the run counts as unsuccessful.
    pub fn print_no_files(&self, family: Family, root: &Path) {
        let line = format!("No {} files found in {}", family.label(), root.display());
        if self.color {
            println!("{}", line.yellow());
        } else {
            println!("{line}");
        }
    }

    /// One file, one of three mutually exclusive states.
    pub fn print_outcome(&self, outcome: &ValidationOutcome) {
        let path = display_path(&outcome.path);
        match &outcome.status {
            OutcomeStatus::Valid { warnings } if warnings.is_empty() => {
                if self.verbose {
                    if self.color {
                        println!("{}", format!("✓ {path}").green());
                    } else {
                        println!("✓ {path}");
                    }
                }
            }
            OutcomeStatus::Valid { warnings } => {
                if self.color {
                    println!("{}", format!("⚠ {path} (warnings)").yellow());
                    for warning in warnings {
                        println!("  {}", format!("- {warning}").yellow());
                    }
                } else {
                    println!("⚠ {path} (warnings)");
                    for warning in warnings {
                        println!("  - {warning}");
                    }
                }
            }
            OutcomeStatus::Invalid { error } => {
                if self.color {
                    println!("{}", format!("✗ {path}").red());
                    println!("  {}", format!("Error: {error}").red());
                } else {
                    println!("✗ {path}");
                    println!("  Error: {error}");
                }
            }
        }
    }

    /// Single-file mode: always echo the result, skip the summary block.
    pub fn print_single(&self, outcome: &ValidationOutcome) {
        match &outcome.status {
            OutcomeStatus::Valid { warnings } if warnings.is_empty() => {
                let line = format!("✓ {} is valid", display_path(&outcome.path));
                if self.color {
                    println!("{}", line.green());
                } else {
                    println!("{line}");
                }
            }
            _ => self.print_outcome(outcome),
        }
    }

    /// The three summary counts.
    pub fn print_summary(&self, summary: &RunSummary) {
        if self.color {
            println!("\n{}", "Validation Summary:".blue());
            println!("  {}", format!("Valid: {}", summary.valid).green());
            println!(
                "  {}",
                format!("Valid with warnings: {}", summary.valid_with_warnings).yellow()
            );
            println!("  {}", format!("Invalid: {}", summary.invalid).red());
        } else {
            println!("\nValidation Summary:");
            println!("  Valid: {}", summary.valid);
            println!("  Valid with warnings: {}", summary.valid_with_warnings);
            println!("  Invalid: {}", summary.invalid);
        }
    }
}

/// Show paths relative to the current directory when possible.
fn display_path(path: &Path) -> String {
    std::env::current_dir()
        .ok()
        .and_then(|cwd| path.strip_prefix(&cwd).ok())
        .unwrap_or(path)
        .display()
        .to_string()
}
