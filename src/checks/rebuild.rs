//! Rebuild script check (RB-001).

use crate::data::layout::{DETECT_HOST_SIGNATURE, REBUILD_SCRIPT};
use crate::engine::validator::Validator;
use crate::platform::fs::{is_executable, read_text};
use std::io;

/// Run RB-001: `rebuild.sh` exists, is executable, and defines `detect_host()`.
///
/// A missing execute bit is only a warning; `chmod +x` fixes it.
pub fn check_rebuild_script(v: &mut Validator<'_>) {
    let script = v.root().join(REBUILD_SCRIPT);

    if !script.exists() {
        v.error(format!("{} not found", REBUILD_SCRIPT));
        return;
    }

    record_exec_bit(v, is_executable(&script));

    match read_text(&script) {
        Ok(content) if content.contains(DETECT_HOST_SIGNATURE) => {
            v.success(format!("{} has detect_host function", REBUILD_SCRIPT));
        }
        Ok(_) => v.error(format!("{} missing detect_host function", REBUILD_SCRIPT)),
        Err(e) => v.error(format!("Could not read {}: {}", REBUILD_SCRIPT, e)),
    }
}

fn record_exec_bit(v: &mut Validator<'_>, executable: io::Result<bool>) {
    match executable {
        Ok(true) => {}
        Ok(false) => v.warning(format!("{} is not executable", REBUILD_SCRIPT)),
        Err(e) => v.error(format!("Could not read {} permissions: {}", REBUILD_SCRIPT, e)),
    }
}
