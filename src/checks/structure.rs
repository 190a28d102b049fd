//! File structure check (FS-001).
//!
//! Existence only; contents are left to the other checks.

use crate::data::layout::REQUIRED_FILES;
use crate::engine::validator::Validator;

/// Run FS-001: every required file exists under the root.
pub fn check_file_structure(v: &mut Validator<'_>) {
    let root = v.root();

    for rel in REQUIRED_FILES {
        if root.join(rel).exists() {
            v.success(format!("Found {}", rel));
        } else {
            v.error(format!("Missing required file: {}", rel));
        }
    }
}
