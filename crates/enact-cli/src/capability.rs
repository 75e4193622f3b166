//! # Capability Subcommand
//!
//! Validates workflow-style capability descriptors. The locator selects
//! files named exactly `capability.yaml`; the advisory rules check the
//! companion README, workflow step shape, `run` presence, and language
//! entrypoint conventions.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::report::{ColorMode, Reporter};
use crate::runner::{run_family, Family};

/// Arguments for the `capability` subcommand.
#[derive(Args, Debug)]
pub struct CapabilityArgs {
    /// Path to the capability schema file.
    #[arg(long, default_value = "schemas/enact-capability-schema.json")]
    pub schema: PathBuf,

    /// Directory containing capability descriptors to validate.
    #[arg(default_value = "capabilities")]
    pub dir: PathBuf,

    /// Validate a single capability file instead of a directory.
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

/// Execute the capability subcommand. Returns the process exit code.
pub fn run_capability(args: &CapabilityArgs, verbose: bool, color: ColorMode) -> Result<u8> {
    let reporter = Reporter::new(color, verbose || args.file.is_some());
    run_family(
        Family::Capability,
        &args.schema,
        &args.dir,
        args.file.as_deref(),
        &reporter,
    )
}
