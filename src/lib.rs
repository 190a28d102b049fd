//! calnix-validate library
//!
//! Structural and policy validation for the calnix NixOS configuration
//! repository.
//!
//! The validator runs a fixed, ordered list of independent checks:
//! - Required files are present
//! - Every `.nix` file parses (`nix-instantiate --parse`)
//! - The flake exports the expected `nixosConfigurations`
//! - The work profile stays free of the gaming bundle
//! - Every host imports the shared base module
//! - The rebuild script is executable and defines `detect_host()`
//!
//! Problems become [`Finding`]s rather than Rust errors. The run fails when at
//! least one ERROR was recorded; warnings never fail it.
//!
//! # Example
//!
//! ```no_run
//! use calnix_validate::platform::SystemRunner;
//! use calnix_validate::{run_validation, ValidatorConfig};
//!
//! let config = ValidatorConfig::with_root("/etc/nixos");
//! let report = run_validation(&config, &SystemRunner, &mut std::io::stdout());
//! println!("errors: {}", report.summary().errors);
//! std::process::exit(report.exit_code().into());
//! ```

pub mod checks;
pub mod cli;
pub mod data;
pub mod engine;
pub mod logging;
pub mod platform;
pub mod version;

use cli::args::Args;
use engine::result::ValidationReport;
use platform::CommandRunner;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::io::{self, Write};
use std::path::PathBuf;

// Re-exports for public API
pub use engine::result::ResultSummary;
pub use engine::validator::Validator;

/// Default syntax checker program.
pub const DEFAULT_NIX_INSTANTIATE: &str = "nix-instantiate";

/// Default flake introspection program.
pub const DEFAULT_NIX: &str = "nix";

/// Classification of a diagnostic.
///
/// `Success` only ever appears on progress lines; it is never recorded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Error,
    Warning,
    Success,
}

impl Severity {
    /// Status glyph used in the terminal report
    pub fn glyph(self) -> &'static str {
        match self {
            Severity::Error => "❌",
            Severity::Warning => "⚠️ ",
            Severity::Success => "✅",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Error => write!(f, "ERROR"),
            Severity::Warning => write!(f, "WARNING"),
            Severity::Success => write!(f, "SUCCESS"),
        }
    }
}

/// One recorded diagnostic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    /// Check that produced this finding (e.g., "FS-001")
    pub check_id: String,
    pub severity: Severity,
    pub message: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.severity {
            Severity::Success => write!(f, "{} {}", self.severity.glyph(), self.message),
            _ => write!(f, "{} {}: {}", self.severity.glyph(), self.severity, self.message),
        }
    }
}

/// Errors that stop the tool itself, as opposed to findings about the repo.
#[derive(Debug, thiserror::Error)]
pub enum ValidateError {
    #[error("I/O error in {context}: {source}")]
    Io {
        context: String,
        #[source]
        source: io::Error,
    },

    #[error("could not render JSON report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration for a validation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Repository root every check resolves paths against
    pub root: PathBuf,
    /// Program used for `--parse` syntax checks
    pub nix_instantiate: String,
    /// Program used for `flake show --json`
    pub nix: String,
    /// Run only these check IDs (empty = all)
    pub only: Vec<String>,
    /// Skip these check IDs
    pub skip: Vec<String>,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        ValidatorConfig::with_root(platform::fs::discover_root(&cwd))
    }
}

impl ValidatorConfig {
    /// Configuration with default tools and all checks for a known root
    pub fn with_root(root: impl Into<PathBuf>) -> Self {
        ValidatorConfig {
            root: root.into(),
            nix_instantiate: DEFAULT_NIX_INSTANTIATE.to_string(),
            nix: DEFAULT_NIX.to_string(),
            only: Vec::new(),
            skip: Vec::new(),
        }
    }

    /// Create configuration from command line arguments
    pub fn from_args(args: &Args) -> Result<Self, ValidateError> {
        let cwd = std::env::current_dir().map_err(|source| ValidateError::Io {
            context: "current_dir".to_string(),
            source,
        })?;

        let root = match args.root {
            Some(ref explicit) => platform::fs::resolve_root(explicit, &cwd),
            None => platform::fs::discover_root(&cwd),
        };

        Ok(ValidatorConfig {
            root,
            nix_instantiate: args.nix_instantiate.clone(),
            nix: args.nix.clone(),
            only: args.only.clone(),
            skip: args.skip.clone(),
        })
    }
}

/// Run validation checks.
///
/// This is the main entry point. Checks are selected from the registry using
/// `config.only` and `config.skip`, run in registry order, and their progress
/// lines are written to `progress`. The returned report carries every ERROR
/// and WARNING in the order they were recorded.
pub fn run_validation(
    config: &ValidatorConfig,
    runner: &dyn CommandRunner,
    progress: &mut dyn Write,
) -> ValidationReport {
    let selected = checks::select_checks(checks::create_all_checks(), &config.only, &config.skip);

    tracing::debug!(
        root = %config.root.display(),
        checks = selected.len(),
        "starting validation"
    );

    let validator = Validator::new(config, runner, progress);
    validator.run_checks(&selected)
}
