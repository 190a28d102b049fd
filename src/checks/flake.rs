//! Flake output check (FLK-001).
//!
//! Runs `nix flake show --json` and confirms every host has a
//! `nixosConfigurations` entry. Only key presence matters; the values are
//! never inspected.
//!
//! # Graceful Degradation
//!
//! - Tool missing: one WARNING, check ends
//! - Non-zero exit: one ERROR carrying stderr, check ends
//! - Spawn failure or unparseable stdout: one ERROR, check ends
//! - `nixosConfigurations` absent or not an object: treated as empty

use crate::data::layout::{NIXOS_CONFIGURATIONS, NIXOS_CONFIGURATIONS_KEY};
use crate::engine::validator::Validator;
use crate::platform::RunError;
use serde_json::Value;
use std::collections::BTreeSet;
use std::ffi::OsStr;

/// Why `flake show` output could not be used.
#[derive(Debug, thiserror::Error)]
pub enum FlakeShowError {
    #[error("invalid JSON from flake show: {0}")]
    Json(#[from] serde_json::Error),

    #[error("expected a JSON object at the top level of flake show output")]
    NotAnObject,
}

/// Host names listed under `nixosConfigurations` in `flake show --json` output.
pub fn parse_nixos_configurations(stdout: &str) -> Result<BTreeSet<String>, FlakeShowError> {
    let outputs: Value = serde_json::from_str(stdout)?;
    let outputs = outputs.as_object().ok_or(FlakeShowError::NotAnObject)?;

    let hosts = outputs
        .get(NIXOS_CONFIGURATIONS_KEY)
        .and_then(Value::as_object)
        .map(|configs| configs.keys().cloned().collect())
        .unwrap_or_default();

    Ok(hosts)
}

/// Run FLK-001: the flake exports every expected host.
pub fn check_flake_outputs(v: &mut Validator<'_>) {
    let root = v.root();
    let tool = v.config().nix.as_str();
    let args = [OsStr::new("flake"), OsStr::new("show"), OsStr::new("--json")];

    let output = match v.runner().run(tool, &args, root) {
        Ok(output) => output,
        Err(RunError::NotFound { program }) => {
            v.warning(format!("{} not found, skipping flake output validation", program));
            return;
        }
        Err(e) => {
            v.error(format!("Failed to validate flake outputs: {}", e));
            return;
        }
    };

    if !output.success() {
        v.error(format!("Flake validation failed: {}", output.stderr));
        return;
    }

    let hosts = match parse_nixos_configurations(&output.stdout) {
        Ok(hosts) => hosts,
        Err(e) => {
            v.error(format!("Failed to validate flake outputs: {}", e));
            return;
        }
    };

    for name in NIXOS_CONFIGURATIONS {
        if hosts.contains(*name) {
            v.success(format!("Found nixosConfiguration: {}", name));
        } else {
            v.error(format!("Missing nixosConfiguration: {}", name));
        }
    }
}
