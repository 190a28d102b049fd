//! External tool invocation.
//!
//! Checks never spawn processes directly. They go through [`CommandRunner`],
//! so a scripted runner can stand in for `nix` and `nix-instantiate` in tests.
//!
//! # Graceful Degradation
//!
//! - Binary not on PATH: `RunError::NotFound`, so callers can tell an absent
//!   tool apart from a tool that ran and failed
//! - Working directory missing: `RunError::Spawn`, never `NotFound`
//! - Other spawn failures: `RunError::Spawn` with the underlying I/O error
//! - Non-zero exit: not an error at this layer; inspect `CommandOutput`
//! - Non-UTF-8 output: decoded lossily
//!
//! No function in this module will panic.

use std::ffi::OsStr;
use std::io;
use std::path::Path;
use std::process::Command;

/// Captured result of a finished process.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommandOutput {
    /// Exit code, or None when the process was terminated by a signal
    pub status: Option<i32>,
    pub stdout: String,
    pub stderr: String,
}

impl CommandOutput {
    /// True when the process exited with status 0.
    pub fn success(&self) -> bool {
        self.status == Some(0)
    }
}

/// Failure to run a process at all.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error("{program} not found")]
    NotFound { program: String },

    #[error("failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

/// Runs external programs to completion.
pub trait CommandRunner {
    /// Run `program` with `args` from `cwd`, blocking until it exits.
    fn run(&self, program: &str, args: &[&OsStr], cwd: &Path) -> Result<CommandOutput, RunError>;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemRunner;

impl CommandRunner for SystemRunner {
    fn run(&self, program: &str, args: &[&OsStr], cwd: &Path) -> Result<CommandOutput, RunError> {
        tracing::debug!(program, ?args, cwd = %cwd.display(), "spawning");

        // The OS reports a bad cwd as NotFound too
        if !cwd.is_dir() {
            return Err(RunError::Spawn {
                program: program.to_string(),
                source: io::Error::new(
                    io::ErrorKind::NotFound,
                    format!("working directory {} is not a directory", cwd.display()),
                ),
            });
        }

        let output = Command::new(program)
            .args(args)
            .current_dir(cwd)
            .output()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => RunError::NotFound {
                    program: program.to_string(),
                },
                _ => RunError::Spawn {
                    program: program.to_string(),
                    source: e,
                },
            })?;

        let result = CommandOutput {
            status: output.status.code(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        };
        tracing::debug!(program, status = ?result.status, "finished");
        Ok(result)
    }
}
