//! Nix syntax check (SYN-001).
//!
//! Hands each `.nix` file to `nix-instantiate --parse`. A missing syntax
//! checker is a property of the machine, not of any file, so it yields one
//! warning and ends the check.

use crate::engine::validator::Validator;
use crate::platform::fs::{display_relative, nix_files};
use crate::platform::RunError;
use std::ffi::OsStr;

/// Run SYN-001: every `.nix` file under the root parses.
pub fn check_nix_syntax(v: &mut Validator<'_>) {
    let root = v.root();
    let runner = v.runner();
    let tool = v.config().nix_instantiate.as_str();

    for file in nix_files(root) {
        let rel = display_relative(&file, root);
        let args = [OsStr::new("--parse"), file.as_os_str()];

        match runner.run(tool, &args, root) {
            Ok(output) if output.success() => {
                v.success(format!("Valid syntax: {}", rel));
            }
            Ok(output) => {
                v.error(format!("Syntax error in {}: {}", rel, output.stderr));
            }
            Err(RunError::NotFound { program }) => {
                v.warning(format!("{} not found, skipping syntax validation", program));
                break;
            }
            Err(e) => {
                v.error(format!("Could not check syntax of {}: {}", rel, e));
            }
        }
    }
}
