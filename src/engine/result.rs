//! Result aggregation and reporting.
//!
//! A [`ValidationReport`] is the frozen outcome of one run. Its verdict is a
//! pure function of the recorded severities.

use crate::{Finding, Severity};
use serde::Serialize;
use std::path::PathBuf;

/// Exit code when no ERROR was recorded
pub const EXIT_OK: u8 = 0;

/// Exit code when at least one ERROR was recorded
pub const EXIT_ERRORS: u8 = 1;

/// Result summary statistics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ResultSummary {
    pub errors: u32,
    pub warnings: u32,
}

/// Validation report containing all recorded findings
#[derive(Debug, Clone, Serialize)]
pub struct ValidationReport {
    pub root: PathBuf,
    /// IDs of the checks that ran, in order
    pub checks: Vec<String>,
    pub findings: Vec<Finding>,
    pub total_duration_ms: u64,
}

impl ValidationReport {
    /// Create a new empty report
    pub fn new(root: impl Into<PathBuf>) -> Self {
        ValidationReport {
            root: root.into(),
            checks: Vec::new(),
            findings: Vec::new(),
            total_duration_ms: 0,
        }
    }

    /// Calculate summary statistics
    pub fn summary(&self) -> ResultSummary {
        let mut summary = ResultSummary::default();

        for finding in &self.findings {
            match finding.severity {
                Severity::Error => summary.errors += 1,
                Severity::Warning => summary.warnings += 1,
                Severity::Success => {}
            }
        }

        summary
    }

    /// ERROR findings in recording order
    pub fn errors(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Error)
    }

    /// WARNING findings in recording order
    pub fn warnings(&self) -> impl Iterator<Item = &Finding> {
        self.findings
            .iter()
            .filter(|f| f.severity == Severity::Warning)
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    /// Findings produced by one check
    pub fn for_check<'a>(&'a self, check_id: &'a str) -> impl Iterator<Item = &'a Finding> {
        self.findings.iter().filter(move |f| f.check_id == check_id)
    }

    /// Process exit status: warnings alone never fail the run.
    pub fn exit_code(&self) -> u8 {
        if self.has_errors() {
            EXIT_ERRORS
        } else {
            EXIT_OK
        }
    }
}
