//! Command line arguments for calnix-validate.

use crate::checks::all_check_ids;
use crate::logging::LogLevel;
use crate::{DEFAULT_NIX, DEFAULT_NIX_INSTANTIATE};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Command to execute
#[derive(Debug, Clone, PartialEq, Eq, Default, Subcommand)]
pub enum Command {
    /// Run validation checks (default)
    #[default]
    Check,
    /// List all available checks
    List,
    /// Print version information
    Version,
}

/// Output format selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable report with status glyphs
    #[default]
    Text,
    /// Machine-readable JSON
    Json,
}

/// Validate the structure, syntax, and host policies of a calnix checkout.
#[derive(Debug, Clone, Parser)]
#[command(name = "calnix-validate", version, about)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Repository root (default: inferred from the working directory)
    #[arg(long, global = true, env = "CALNIX_ROOT", value_name = "PATH")]
    pub root: Option<PathBuf>,

    /// Syntax checker invoked as `<PROGRAM> --parse <file>`
    #[arg(
        long,
        global = true,
        env = "CALNIX_NIX_INSTANTIATE",
        value_name = "PROGRAM",
        default_value = DEFAULT_NIX_INSTANTIATE
    )]
    pub nix_instantiate: String,

    /// Flake tool invoked as `<PROGRAM> flake show --json`
    #[arg(
        long,
        global = true,
        env = "CALNIX_NIX",
        value_name = "PROGRAM",
        default_value = DEFAULT_NIX
    )]
    pub nix: String,

    /// Run only this check (repeatable)
    #[arg(long, global = true, value_name = "ID", value_parser = parse_check_id)]
    pub only: Vec<String>,

    /// Skip this check (repeatable)
    #[arg(long, global = true, value_name = "ID", value_parser = parse_check_id)]
    pub skip: Vec<String>,

    /// Report format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Do not print passing checks while running
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Tag every listed finding with the check that produced it
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true, env = "NO_COLOR", value_parser = clap::builder::FalseyValueParser::new())]
    pub no_color: bool,

    /// Diagnostic log level written to stderr (error, warn, info, debug, trace)
    #[arg(short = 'l', long, global = true, env = "CALNIX_LOG", value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,
}

impl Args {
    /// Command to run, defaulting to `check`
    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or_default()
    }
}

/// Accept a registered check ID in any case, normalised to upper case.
fn parse_check_id(value: &str) -> Result<String, String> {
    let ids = all_check_ids();
    ids.iter()
        .find(|id| id.eq_ignore_ascii_case(value))
        .map(|id| id.to_string())
        .ok_or_else(|| {
            format!(
                "unknown check '{}'. Valid checks: {}",
                value,
                ids.join(", ")
            )
        })
}
