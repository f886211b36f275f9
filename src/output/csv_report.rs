//! CSV maintenance log writer

use crate::output::traits::{OutputResult, ReportSink};
use crate::output::{AuditReport, ReportRow};
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Header of the maintenance log, in column order
pub const REPORT_COLUMNS: [&str; 17] = [
    "Page URL",
    "Page Title",
    "Page Type",
    "Template Used",
    "Inbound Links",
    "Outbound Links",
    "Human Identified Issues",
    "Issue Severity",
    "Issue Type",
    "Detected By",
    "Fix Status",
    "PR Link",
    "Last Reviewed Date",
    "Video Embed Working",
    "Audio Embed Working",
    "Image Assets Loaded",
    "Mobile Responsive",
];

/// Writes the header and every row to `writer`
///
/// The header is written even when there are no rows.
pub fn write_csv<W: Write>(writer: W, rows: &[ReportRow]) -> OutputResult<()> {
    let mut writer = csv::Writer::from_writer(writer);
    writer.write_record(REPORT_COLUMNS)?;
    for row in rows {
        writer.write_record(row.record())?;
    }
    writer.flush()?;
    Ok(())
}

/// Writes the maintenance log to a file, replacing any previous log
#[derive(Debug, Clone)]
pub struct CsvReportSink {
    path: PathBuf,
}

impl CsvReportSink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ReportSink for CsvReportSink {
    fn write_report(&mut self, report: &AuditReport) -> OutputResult<()> {
        let file = File::create(&self.path)?;
        write_csv(file, &report.rows)
    }
}
