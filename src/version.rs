//! Version and build information.
//!
//! Values are embedded by `build.rs`; anything the build could not determine
//! is simply omitted from the output.

use std::fmt;

/// Build information
#[derive(Debug, Clone)]
pub struct BuildInfo {
    pub version: &'static str,
    pub commit: Option<&'static str>,
    pub build_date: Option<&'static str>,
    pub target: Option<&'static str>,
    pub rustc_version: Option<&'static str>,
}

impl fmt::Display for BuildInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "calnix-validate {}", self.version)?;

        if let Some(commit) = self.commit {
            write!(f, "\nCommit: {}", commit)?;
        }

        if let Some(date) = self.build_date {
            write!(f, "\nBuilt: {}", date)?;
        }

        if let Some(target) = self.target {
            write!(f, "\nTarget: {}", target)?;
        }

        if let Some(rustc) = self.rustc_version {
            write!(f, "\nRustc: {}", rustc)?;
        }

        Ok(())
    }
}

/// Get build information
pub fn get_build_info() -> BuildInfo {
    BuildInfo {
        version: env!("CARGO_PKG_VERSION"),
        commit: option_env!("CALNIX_VALIDATE_GIT_HASH"),
        build_date: option_env!("CALNIX_VALIDATE_BUILD_DATE"),
        target: option_env!("CALNIX_VALIDATE_TARGET"),
        rustc_version: option_env!("CALNIX_VALIDATE_RUSTC_VERSION"),
    }
}
