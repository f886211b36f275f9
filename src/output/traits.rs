//! Report sink trait and output errors
//!
//! This module defines the trait interface for report sinks and the errors
//! they can return.

use crate::output::AuditReport;
use thiserror::Error;

/// Errors that can occur during output operations
#[derive(Debug, Error)]
pub enum OutputError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for output operations
pub type OutputResult<T> = Result<T, OutputError>;

/// Destination for an assembled audit report
///
/// A sink consumes the whole report at once; the report is complete before
/// any sink runs.
pub trait ReportSink {
    /// Writes the report
    ///
    /// # Arguments
    ///
    /// * `report` - The assembled rows and summary
    fn write_report(&mut self, report: &AuditReport) -> OutputResult<()>;
}
