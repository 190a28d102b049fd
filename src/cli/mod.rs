//! CLI module for argument parsing and output formatting.
//!
//! Arguments are declared with clap; formatters turn a finished
//! `ValidationReport` into the text or JSON written to stdout.

pub mod args;
pub mod output;
