//! Validation check modules.
//!
//! Six independent checks, always run in this order:
//! - FS-001: required files exist
//! - SYN-001: every `.nix` file parses
//! - FLK-001: the flake exports the expected hosts
//! - POL-001: the work profile stays free of the gaming bundle
//! - POL-002: every host imports the base module
//! - RB-001: the rebuild script is usable
//!
//! # Graceful Degradation
//!
//! Checks never panic and never return errors. Missing files, unreadable
//! files, failed tools, and unparseable tool output all become findings on
//! the [`Validator`](crate::engine::validator::Validator).

pub mod flake;
pub mod policy;
pub mod rebuild;
pub mod structure;
pub mod syntax;

use crate::engine::validator::RegisteredCheck;

pub const FILE_STRUCTURE: &str = "FS-001";
pub const NIX_SYNTAX: &str = "SYN-001";
pub const FLAKE_OUTPUTS: &str = "FLK-001";
pub const GAMING_SEPARATION: &str = "POL-001";
pub const BASE_IMPORTS: &str = "POL-002";
pub const REBUILD_SCRIPT: &str = "RB-001";

/// Every check, in execution order
pub fn create_all_checks() -> Vec<RegisteredCheck> {
    vec![
        RegisteredCheck {
            id: FILE_STRUCTURE,
            name: "File Structure",
            description: "Required files exist under the repository root",
            run: structure::check_file_structure,
        },
        RegisteredCheck {
            id: NIX_SYNTAX,
            name: "Nix Syntax",
            description: "Every .nix file parses with nix-instantiate --parse",
            run: syntax::check_nix_syntax,
        },
        RegisteredCheck {
            id: FLAKE_OUTPUTS,
            name: "Flake Outputs",
            description: "The flake exports a nixosConfiguration for every host",
            run: flake::check_flake_outputs,
        },
        RegisteredCheck {
            id: GAMING_SEPARATION,
            name: "Gaming Separation",
            description: "The work-wsl host does not pull in the gaming bundle",
            run: policy::check_gaming_separation,
        },
        RegisteredCheck {
            id: BASE_IMPORTS,
            name: "Base Module Imports",
            description: "Every host configuration imports modules/base.nix",
            run: policy::check_base_imports,
        },
        RegisteredCheck {
            id: REBUILD_SCRIPT,
            name: "Rebuild Script",
            description: "rebuild.sh exists, is executable, and defines detect_host()",
            run: rebuild::check_rebuild_script,
        },
    ]
}

/// IDs of every registered check
pub fn all_check_ids() -> Vec<&'static str> {
    create_all_checks().iter().map(|c| c.id).collect()
}

/// Apply `--only` and `--skip` filters, preserving registry order.
pub fn select_checks(
    checks: Vec<RegisteredCheck>,
    only: &[String],
    skip: &[String],
) -> Vec<RegisteredCheck> {
    checks
        .into_iter()
        .filter(|c| only.is_empty() || only.iter().any(|id| id.eq_ignore_ascii_case(c.id)))
        .filter(|c| !skip.iter().any(|id| id.eq_ignore_ascii_case(c.id)))
        .collect()
}
