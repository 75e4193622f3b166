//! # Tool Subcommand
//!
//! Validates tool descriptors. The locator matches any `*.yaml`/`*.yml`
//! file under the target tree; the advisory rules cover naming, command
//! version pinning, timeout/license formats, container image hygiene,
//! schema hints, and signature/author/example structure.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;

use crate::report::{ColorMode, Reporter};
use crate::runner::{run_family, Family};

/// Arguments for the `tool` subcommand.
#[derive(Args, Debug)]
pub struct ToolArgs {
    /// Path to the tool schema file.
    #[arg(long, default_value = "schemas/enact-tool-schema.json")]
    pub schema: PathBuf,

    /// Directory containing tool descriptors to validate.
    #[arg(default_value = "tools")]
    pub dir: PathBuf,

    /// Validate a single tool file instead of a directory.
    #[arg(long, short)]
    pub file: Option<PathBuf>,
}

/// Execute the tool subcommand. Returns the process exit code.
pub fn run_tool(args: &ToolArgs, verbose: bool, color: ColorMode) -> Result<u8> {
    let reporter = Reporter::new(color, verbose || args.file.is_some());
    run_family(
        Family::Tool,
        &args.schema,
        &args.dir,
        args.file.as_deref(),
        &reporter,
    )
}
