//! Build script for calnix-validate.
//!
//! Embeds the git commit, build date, and rustc version so the `version`
//! command can report exactly which validator produced a report.

use std::env;
use std::process::Command;

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=.git/HEAD");

    println!(
        "cargo:rustc-env=CALNIX_VALIDATE_TARGET={}",
        env::var("TARGET").unwrap_or_else(|_| "unknown".to_string())
    );

    if let Some(hash) = command_stdout("git", &["rev-parse", "--short", "HEAD"]) {
        println!("cargo:rustc-env=CALNIX_VALIDATE_GIT_HASH={}", hash);
    }

    if let Some(date) = command_stdout("date", &["-u", "+%Y-%m-%dT%H:%M:%SZ"]) {
        println!("cargo:rustc-env=CALNIX_VALIDATE_BUILD_DATE={}", date);
    }

    // "rustc 1.75.0 (82e1608df 2023-12-21)" -> "1.75.0"
    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".to_string());
    if let Some(version) = command_stdout(&rustc, &["--version"])
        .and_then(|s| s.split_whitespace().nth(1).map(|v| v.to_string()))
    {
        println!("cargo:rustc-env=CALNIX_VALIDATE_RUSTC_VERSION={}", version);
    }
}

/// Trimmed stdout of a successful command, or None.
fn command_stdout(program: &str, args: &[&str]) -> Option<String> {
    Command::new(program)
        .args(args)
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}
