//! # enact-validate entry point
//!
//! Parses command-line arguments and dispatches to the per-family
//! handlers. Uses clap derive macros; exit status is 0 only when every
//! processed descriptor is schema-valid (advisory warnings never change
//! the exit status).

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use enact_cli::capability::{run_capability, CapabilityArgs};
use enact_cli::report::ColorMode;
use enact_cli::tool::{run_tool, ToolArgs};

/// Validate Enact descriptor files against their schemas.
///
/// Two-phase validation: JSON Schema conformance first, then a set of
/// advisory quality checks (naming, version pinning, licensing,
/// signature structure) on everything that passed. Meant to run both as
/// a CI gate and locally before publishing.
#[derive(Parser, Debug)]
#[command(name = "enact-validate", version, about, long_about = None)]
struct Cli {
    /// Verbose output: echo valid files that drew no warnings. Repeat
    /// for more diagnostic logging (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// When to use colored output.
    #[arg(long, value_enum, default_value = "auto", global = true)]
    color: ColorMode,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Validate capability descriptors (capability.yaml files).
    Capability(CapabilityArgs),

    /// Validate tool descriptors (*.yaml / *.yml files).
    Tool(ToolArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Diagnostic logging rides above the first verbosity level; -v alone
    // only widens the reporter output.
    let filter = match cli.verbose {
        0 | 1 => EnvFilter::new("warn"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let verbose = cli.verbose > 0;
    let result = match cli.command {
        Commands::Capability(args) => run_capability(&args, verbose, cli.color),
        Commands::Tool(args) => run_tool(&args, verbose, cli.color),
    };

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn cli_parse_capability_defaults() {
        let cli = Cli::try_parse_from(["enact-validate", "capability"]).unwrap();
        if let Commands::Capability(args) = cli.command {
            assert_eq!(
                args.schema,
                PathBuf::from("schemas/enact-capability-schema.json")
            );
            assert_eq!(args.dir, PathBuf::from("capabilities"));
            assert!(args.file.is_none());
        } else {
            panic!("expected capability subcommand");
        }
    }

    #[test]
    fn cli_parse_tool_defaults() {
        let cli = Cli::try_parse_from(["enact-validate", "tool"]).unwrap();
        if let Commands::Tool(args) = cli.command {
            assert_eq!(args.schema, PathBuf::from("schemas/enact-tool-schema.json"));
            assert_eq!(args.dir, PathBuf::from("tools"));
        } else {
            panic!("expected tool subcommand");
        }
    }

    #[test]
    fn cli_parse_tool_with_directory() {
        let cli = Cli::try_parse_from(["enact-validate", "tool", "registry/tools"]).unwrap();
        if let Commands::Tool(args) = cli.command {
            assert_eq!(args.dir, PathBuf::from("registry/tools"));
        }
    }

    #[test]
    fn cli_parse_single_file_override() {
        let cli =
            Cli::try_parse_from(["enact-validate", "tool", "--file", "tools/build.yaml"]).unwrap();
        if let Commands::Tool(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("tools/build.yaml")));
        }
    }

    #[test]
    fn cli_parse_short_file_flag() {
        let cli = Cli::try_parse_from(["enact-validate", "capability", "-f", "c/capability.yaml"])
            .unwrap();
        if let Commands::Capability(args) = cli.command {
            assert_eq!(args.file, Some(PathBuf::from("c/capability.yaml")));
        }
    }

    #[test]
    fn cli_parse_custom_schema_path() {
        let cli = Cli::try_parse_from([
            "enact-validate",
            "capability",
            "--schema",
            "alt/schema.json",
        ])
        .unwrap();
        if let Commands::Capability(args) = cli.command {
            assert_eq!(args.schema, PathBuf::from("alt/schema.json"));
        }
    }

    #[test]
    fn cli_parse_verbose_levels() {
        let cli0 = Cli::try_parse_from(["enact-validate", "tool"]).unwrap();
        assert_eq!(cli0.verbose, 0);

        let cli1 = Cli::try_parse_from(["enact-validate", "-v", "tool"]).unwrap();
        assert_eq!(cli1.verbose, 1);

        let cli2 = Cli::try_parse_from(["enact-validate", "-vv", "tool"]).unwrap();
        assert_eq!(cli2.verbose, 2);
    }

    #[test]
    fn cli_parse_color_modes() {
        let cli = Cli::try_parse_from(["enact-validate", "--color", "never", "tool"]).unwrap();
        assert_eq!(cli.color, ColorMode::Never);

        let cli = Cli::try_parse_from(["enact-validate", "tool", "--color", "always"]).unwrap();
        assert_eq!(cli.color, ColorMode::Always);
    }

    #[test]
    fn cli_parse_no_subcommand_errors() {
        assert!(Cli::try_parse_from(["enact-validate"]).is_err());
    }

    #[test]
    fn cli_parse_invalid_subcommand_errors() {
        assert!(Cli::try_parse_from(["enact-validate", "profile"]).is_err());
    }
}
