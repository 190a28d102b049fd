//! Check execution.
//!
//! The [`Validator`] owns the findings sequence and exposes the three emission
//! primitives checks use. Checks run strictly in order on the calling thread;
//! none can stop another from running.

use crate::engine::result::ValidationReport;
use crate::platform::CommandRunner;
use crate::{Finding, Severity, ValidatorConfig};
use std::fmt;
use std::io::Write;
use std::path::Path;
use std::time::Instant;

/// Signature every check implements.
pub type CheckFn = fn(&mut Validator<'_>);

/// A registered check with its execution function
#[derive(Clone)]
pub struct RegisteredCheck {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub run: CheckFn,
}

impl fmt::Debug for RegisteredCheck {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredCheck")
            .field("id", &self.id)
            .field("name", &self.name)
            .finish()
    }
}

/// Collector of findings for one validation run.
pub struct Validator<'a> {
    config: &'a ValidatorConfig,
    runner: &'a dyn CommandRunner,
    progress: &'a mut dyn Write,
    findings: Vec<Finding>,
    current_check: &'static str,
}

impl<'a> Validator<'a> {
    /// Create a validator and announce the root on the progress stream.
    pub fn new(
        config: &'a ValidatorConfig,
        runner: &'a dyn CommandRunner,
        progress: &'a mut dyn Write,
    ) -> Self {
        let mut validator = Validator {
            config,
            runner,
            progress,
            findings: Vec::new(),
            current_check: "",
        };
        validator.emit(format_args!(
            "🔍 Validating configuration in: {}",
            config.root.display()
        ));
        validator
    }

    /// Repository root under validation
    pub fn root(&self) -> &'a Path {
        &self.config.root
    }

    pub fn config(&self) -> &'a ValidatorConfig {
        self.config
    }

    pub fn runner(&self) -> &'a dyn CommandRunner {
        self.runner
    }

    /// Record a blocking problem.
    pub fn error(&mut self, msg: impl Into<String>) {
        self.record(Severity::Error, msg.into());
    }

    /// Record an advisory problem. Never fails the run.
    pub fn warning(&mut self, msg: impl Into<String>) {
        self.record(Severity::Warning, msg.into());
    }

    /// Print a passing assertion. Not retained.
    pub fn success(&mut self, msg: impl fmt::Display) {
        self.emit(format_args!("{} {}", Severity::Success.glyph(), msg));
    }

    /// Findings recorded so far, in order
    pub fn findings(&self) -> &[Finding] {
        &self.findings
    }

    /// Run one check, tagging everything it records with its ID.
    pub fn run_check(&mut self, check: &RegisteredCheck) {
        let before = self.findings.len();
        self.current_check = check.id;
        tracing::debug!(check = check.id, "running {}", check.name);

        (check.run)(self);

        tracing::debug!(
            check = check.id,
            findings = self.findings.len() - before,
            "finished {}",
            check.name
        );
        self.emit(format_args!(""));
    }

    /// Run `checks` in order and produce the final report.
    pub fn run_checks(mut self, checks: &[RegisteredCheck]) -> ValidationReport {
        let start = Instant::now();
        self.emit(format_args!("🔍 Starting configuration validation...\n"));

        for check in checks {
            self.run_check(check);
        }

        let mut report = ValidationReport::new(self.config.root.clone());
        report.checks = checks.iter().map(|c| c.id.to_string()).collect();
        report.findings = self.findings;
        report.total_duration_ms = start.elapsed().as_millis() as u64;
        report
    }

    fn record(&mut self, severity: Severity, message: String) {
        tracing::debug!(check = self.current_check, %severity, %message, "finding");
        self.findings.push(Finding {
            check_id: self.current_check.to_string(),
            severity,
            message,
        });
    }

    fn emit(&mut self, line: fmt::Arguments<'_>) {
        if let Err(e) = writeln!(self.progress, "{}", line) {
            tracing::debug!(error = %e, "progress output unavailable");
        }
    }
}
