//! Batch result types

use std::path::PathBuf;

use crate::application::convert::{ConvertReport, RenderFailure};

/// Summary of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchReport {
    /// Number of source files found
    pub files: usize,
    /// Outputs written
    pub generated: Vec<PathBuf>,
    /// Outputs that could not be produced
    pub failures: Vec<RenderFailure>,
    /// Outputs that would be written (dry run only)
    pub planned: Vec<PathBuf>,
}

impl BatchReport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if every (file, density) pair was rendered
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn absorb(&mut self, report: ConvertReport) {
        self.generated
            .extend(report.generated.into_iter().map(|r| r.output));
        self.failures.extend(report.failures);
    }

    /// Record a source that failed before any density was attempted
    pub fn add_failure(&mut self, failure: RenderFailure) {
        self.failures.push(failure);
    }
}
