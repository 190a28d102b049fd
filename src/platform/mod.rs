//! Platform abstraction layer.
//!
//! Provides consistent interfaces for:
//! - Running external tools (`nix`, `nix-instantiate`)
//! - Read-only filesystem inspection of the repository

pub mod command;
pub mod fs;

pub use command::{CommandOutput, CommandRunner, RunError, SystemRunner};
