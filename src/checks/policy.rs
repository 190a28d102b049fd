//! Host policy checks (POL-001, POL-002).
//!
//! Both are plain substring tests over host configuration files. Nothing is
//! parsed, so a commented-out import still counts.

use crate::data::layout::{
    BASE_MODULE_IMPORT, GAMING_MODULE, GAMING_PACKAGES, HOST_CONFIGS, WORK_HOST_CONFIG,
};
use crate::engine::validator::Validator;
use crate::platform::fs::read_text;

/// Run POL-001: the work profile keeps the gaming bundle out.
///
/// Gaming package names only warn, since a name can show up for unrelated
/// reasons. Importing the gaming module itself is an error.
pub fn check_gaming_separation(v: &mut Validator<'_>) {
    let path = v.root().join(WORK_HOST_CONFIG);
    if !path.exists() {
        return;
    }

    let content = match read_text(&path) {
        Ok(content) => content,
        Err(e) => {
            v.error(format!("Could not read {}: {}", WORK_HOST_CONFIG, e));
            return;
        }
    };

    for package in GAMING_PACKAGES {
        if content.contains(package) {
            v.warning(format!("Gaming package '{}' found in work-wsl config", package));
        }
    }

    if content.contains(GAMING_MODULE) {
        v.error(format!(
            "work-wsl config imports {} - this defeats the purpose!",
            GAMING_MODULE
        ));
    } else {
        v.success("work-wsl properly excludes gaming module");
    }
}

/// Run POL-002: every host imports the shared base module.
pub fn check_base_imports(v: &mut Validator<'_>) {
    let root = v.root();

    for rel in HOST_CONFIGS {
        let path = root.join(rel);
        if !path.exists() {
            continue;
        }

        match read_text(&path) {
            Ok(content) if content.contains(BASE_MODULE_IMPORT) => {
                v.success(format!("{} imports base module", rel));
            }
            Ok(_) => v.error(format!("{} missing base module import", rel)),
            Err(e) => v.error(format!("Could not read {}: {}", rel, e)),
        }
    }
}
