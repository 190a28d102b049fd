//! Filesystem access for the checks.
//!
//! Everything here is read-only: root discovery, Nix file enumeration,
//! permission inspection, and whole-file text reads.

use crate::data::layout::NIX_EXTENSION;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Directory name that marks a checkout nested inside the working directory.
pub const CHECKOUT_DIR: &str = "calnix";

/// Directory name the validator historically ran from inside a checkout.
pub const TESTS_DIR: &str = "tests";

/// Infer the repository root from the working directory.
///
/// A working directory named `tests` means we are inside the checkout, so its
/// parent is the root. Otherwise a `calnix` subdirectory wins, and failing that
/// the working directory itself is used. Nothing is validated here.
pub fn discover_root(cwd: &Path) -> PathBuf {
    if cwd.file_name().is_some_and(|name| name == TESTS_DIR) {
        if let Some(parent) = cwd.parent() {
            return parent.to_path_buf();
        }
    }

    let nested = cwd.join(CHECKOUT_DIR);
    if nested.exists() {
        return nested;
    }

    cwd.to_path_buf()
}

/// Make an explicit root override absolute.
///
/// Existing paths are canonicalized; a path that does not exist is joined onto
/// `cwd` so the checks can report what is missing under it.
pub fn resolve_root(explicit: &Path, cwd: &Path) -> PathBuf {
    match fs::canonicalize(explicit) {
        Ok(path) => path,
        Err(_) if explicit.is_absolute() => explicit.to_path_buf(),
        Err(_) => cwd.join(explicit),
    }
}

/// All `.nix` files at or below `root`, in traversal order.
///
/// Symlinked directories are not descended into, and every returned path is
/// lexically inside `root`. Each file appears once.
pub fn nix_files(root: &Path) -> Vec<PathBuf> {
    let mut files = Vec::new();

    let walker = WalkDir::new(root)
        .follow_links(false)
        .sort_by_file_name()
        .into_iter();

    for entry in walker {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!(error = %e, "skipping unreadable path");
                continue;
            }
        };

        let path = entry.path();
        let is_file = entry.file_type().is_file()
            || (entry.file_type().is_symlink() && path.is_file());
        let is_nix = path.extension().is_some_and(|ext| ext == NIX_EXTENSION);

        if is_file && is_nix && path.starts_with(root) && path != root {
            files.push(path.to_path_buf());
        }
    }

    files
}

/// True when any execute bit is set on `path`.
#[cfg(unix)]
pub fn is_executable(path: &Path) -> io::Result<bool> {
    use std::os::unix::fs::PermissionsExt;

    let mode = fs::metadata(path)?.permissions().mode();
    Ok(mode & 0o111 != 0)
}

/// Platforms without permission bits treat every file as executable.
#[cfg(not(unix))]
pub fn is_executable(path: &Path) -> io::Result<bool> {
    fs::metadata(path).map(|_| true)
}

/// Read a whole file as text, replacing invalid UTF-8.
pub fn read_text(path: &Path) -> io::Result<String> {
    let bytes = fs::read(path)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Display form of `path` relative to `root`, falling back to the full path.
pub fn display_relative(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .display()
        .to_string()
}
