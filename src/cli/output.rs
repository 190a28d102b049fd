//! Output formatting for calnix-validate.
//!
//! Provides the glyph terminal report and a JSON rendering of the same data.
//!
//! # Graceful Degradation
//!
//! - Non-TTY output: color disabled by the caller via `--no-color`/`NO_COLOR`
//!   or terminal detection
//! - Empty reports: render the all-passed message
//! - Multi-line tool stderr inside a finding: printed verbatim
//!
//! Formatters never touch the filesystem or run commands.

use crate::cli::args::OutputFormat;
use crate::engine::result::{ResultSummary, ValidationReport};
use crate::engine::validator::RegisteredCheck;
use crate::{Finding, Severity, ValidateError};
use serde::Serialize;
use std::path::Path;

/// Trait for output formatters
pub trait OutputFormatter {
    /// Format a validation report into a string
    fn format(&self, report: &ValidationReport) -> Result<String, ValidateError>;
}

/// Terminal (human-readable) formatter
pub struct TerminalFormatter {
    color: bool,
    verbose: bool,
}

impl TerminalFormatter {
    pub fn new(color: bool, verbose: bool) -> Self {
        TerminalFormatter { color, verbose }
    }

    fn colorize(&self, text: &str, color_code: &str) -> String {
        if self.color {
            format!("\x1b[{}m{}\x1b[0m", color_code, text)
        } else {
            text.to_string()
        }
    }

    fn green(&self, text: &str) -> String {
        self.colorize(text, "32")
    }

    fn yellow(&self, text: &str) -> String {
        self.colorize(text, "33")
    }

    fn red(&self, text: &str) -> String {
        self.colorize(text, "31")
    }

    fn finding_line(&self, finding: &Finding) -> String {
        let line = if self.verbose {
            format!("{} [{}]", finding, finding.check_id)
        } else {
            finding.to_string()
        };

        match finding.severity {
            Severity::Error => self.red(&line),
            Severity::Warning => self.yellow(&line),
            Severity::Success => self.green(&line),
        }
    }
}

impl OutputFormatter for TerminalFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String, ValidateError> {
        let summary = report.summary();
        let mut output = String::new();

        output.push_str("📊 Validation Summary:\n");
        output.push_str(&format!("Errors: {}\n", summary.errors));
        output.push_str(&format!("Warnings: {}\n", summary.warnings));

        if summary.errors > 0 {
            output.push_str("\n🚨 Errors found:\n");
            for finding in report.errors() {
                output.push_str(&format!("  {}\n", self.finding_line(finding)));
            }
        }

        if summary.warnings > 0 {
            output.push_str("\n⚠️  Warnings:\n");
            for finding in report.warnings() {
                output.push_str(&format!("  {}\n", self.finding_line(finding)));
            }
        }

        output.push('\n');
        if summary.errors > 0 {
            output.push_str(&self.red(&format!("💥 Found {} errors", summary.errors)));
        } else if summary.warnings > 0 {
            output.push_str(&self.yellow("✅ No errors found (warnings only)"));
        } else {
            output.push_str(&self.green("🎉 All validations passed!"));
        }

        Ok(output)
    }
}

/// JSON formatter
pub struct JsonFormatter {
    pretty: bool,
}

/// Serialized shape of a report
#[derive(Serialize)]
struct JsonReport<'a> {
    root: &'a Path,
    checks: &'a [String],
    summary: ResultSummary,
    findings: &'a [Finding],
    total_duration_ms: u64,
    exit_code: u8,
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        JsonFormatter { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, report: &ValidationReport) -> Result<String, ValidateError> {
        let view = JsonReport {
            root: &report.root,
            checks: &report.checks,
            summary: report.summary(),
            findings: &report.findings,
            total_duration_ms: report.total_duration_ms,
            exit_code: report.exit_code(),
        };

        let json = if self.pretty {
            serde_json::to_string_pretty(&view)?
        } else {
            serde_json::to_string(&view)?
        };
        Ok(json)
    }
}

/// Get the appropriate formatter for the output format
pub fn get_formatter(format: OutputFormat, no_color: bool, verbose: bool) -> Box<dyn OutputFormatter> {
    match format {
        OutputFormat::Text => Box::new(TerminalFormatter::new(!no_color, verbose)),
        OutputFormat::Json => Box::new(JsonFormatter::new(true)),
    }
}

/// Render the check registry for the `list` command
pub fn format_check_list(checks: &[RegisteredCheck]) -> String {
    let mut output = String::from("Available checks:\n\n");
    for check in checks {
        output.push_str(&format!("  {:<8} {}\n", check.id, check.name));
        output.push_str(&format!("           {}\n", check.description));
    }
    output
}
