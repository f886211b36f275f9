//! Output module for the maintenance log and summaries
//!
//! This module handles:
//! - Joining graph metrics with page audits into report rows
//! - Aggregating the audit summary
//! - Writing the CSV maintenance log and the markdown summary
//! - Printing the console summary

mod csv_report;
mod markdown;
pub mod stats;
mod traits;

pub use csv_report::{write_csv, CsvReportSink, REPORT_COLUMNS};
pub use markdown::{format_markdown_summary, MarkdownSummarySink};
pub use stats::{
    format_broken_links, print_broken_links, print_graph_statistics, print_summary, AuditSummary,
};
pub use traits::{OutputError, OutputResult, ReportSink};

use crate::audit::{MediaStatus, PageAudit};
use crate::graph::ParsedGraph;
use chrono::NaiveDate;

/// Value of the "Detected By" column for every automated row
pub const DETECTED_BY: &str = "Automated Scan";

/// One row of the maintenance log
///
/// `issue_severity`, `issue_type`, `fix_status` and `pr_link` are left for
/// people triaging the log and are always empty here. Finding messages are
/// kept as a list and joined with `"; "` only when the record is written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportRow {
    pub page_url: String,
    pub page_title: String,
    pub page_type: String,
    pub template_used: String,
    pub inbound_links: usize,
    pub outbound_links: usize,
    pub human_identified_issues: Vec<String>,
    pub issue_severity: String,
    pub issue_type: String,
    pub detected_by: String,
    pub fix_status: String,
    pub pr_link: String,
    pub last_reviewed_date: String,
    pub video_embed_working: MediaStatus,
    pub audio_embed_working: MediaStatus,
    pub image_assets_loaded: MediaStatus,
    pub mobile_responsive: MediaStatus,
}

impl ReportRow {
    /// Builds the row for one audited page
    pub fn new(audit: &PageAudit, graph: &ParsedGraph, reviewed_on: NaiveDate) -> Self {
        Self {
            page_url: audit.url.clone(),
            page_title: audit.title.clone(),
            page_type: audit.page_type.to_string(),
            template_used: audit.template.to_string(),
            inbound_links: graph.counts.inbound(&audit.url),
            outbound_links: graph.counts.outbound(&audit.url),
            human_identified_issues: audit.issue_messages(),
            issue_severity: String::new(),
            issue_type: String::new(),
            detected_by: DETECTED_BY.to_string(),
            fix_status: String::new(),
            pr_link: String::new(),
            last_reviewed_date: reviewed_on.format("%Y-%m-%d").to_string(),
            video_embed_working: audit.media.video,
            audio_embed_working: audit.media.audio,
            image_assets_loaded: audit.media.images,
            mobile_responsive: audit.media.mobile,
        }
    }

    /// The "Human Identified Issues" column value
    pub fn issues_text(&self) -> String {
        self.human_identified_issues.join("; ")
    }

    /// Field values in [`REPORT_COLUMNS`] order
    pub fn record(&self) -> [String; 17] {
        [
            self.page_url.clone(),
            self.page_title.clone(),
            self.page_type.clone(),
            self.template_used.clone(),
            self.inbound_links.to_string(),
            self.outbound_links.to_string(),
            self.issues_text(),
            self.issue_severity.clone(),
            self.issue_type.clone(),
            self.detected_by.clone(),
            self.fix_status.clone(),
            self.pr_link.clone(),
            self.last_reviewed_date.clone(),
            self.video_embed_working.to_string(),
            self.audio_embed_working.to_string(),
            self.image_assets_loaded.to_string(),
            self.mobile_responsive.to_string(),
        ]
    }
}

/// Rows plus aggregate summary of one audit run
#[derive(Debug, Clone)]
pub struct AuditReport {
    pub rows: Vec<ReportRow>,
    pub summary: AuditSummary,
}

/// Joins link counts with page audits
///
/// Rows follow the order of `audits`, which [`crate::audit::audit_site`]
/// produces in url order.
pub fn assemble_report(
    graph: &ParsedGraph,
    audits: &[PageAudit],
    reviewed_on: NaiveDate,
) -> AuditReport {
    let rows = audits
        .iter()
        .map(|audit| ReportRow::new(audit, graph, reviewed_on))
        .collect();

    AuditReport {
        rows,
        summary: AuditSummary::from_audits(audits, reviewed_on),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::audit_page;
    use crate::graph::parse_graph;
    use crate::site::Cluster;
    use tempfile::TempDir;

    const GRAPH: &str = r##"
subgraph cluster_Entry {
    "index.html" [label="index.html", fillcolor="#FFD700"];
}
"about.html" [label="about.html", fillcolor="#E5E7EB"];
"index.html" -> "about.html";
"index.html" -> "about.html";
"about.html" -> "index.html";
"##;

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 9).unwrap()
    }

    #[test]
    fn test_row_joins_counts_and_audit() {
        let dir = TempDir::new().unwrap();
        let graph = parse_graph(GRAPH);
        let audit = audit_page(
            "index.html",
            Cluster::Entry,
            r#"<title>Home</title><h1>Hi</h1><meta name="viewport"><style>@media x {}</style>"#,
            dir.path(),
        );

        let row = ReportRow::new(&audit, &graph, date());
        assert_eq!(row.inbound_links, 1);
        assert_eq!(row.outbound_links, 2);
        assert_eq!(row.page_type, "Entry Point");
        assert!(row.human_identified_issues.is_empty());
        assert_eq!(row.detected_by, "Automated Scan");
        assert_eq!(row.last_reviewed_date, "2024-03-09");
        assert_eq!(row.mobile_responsive, MediaStatus::Yes);

        let record = row.record();
        assert_eq!(record.len(), REPORT_COLUMNS.len());
        assert_eq!(record[0], "index.html");
        assert_eq!(record[7], "");
        assert_eq!(record[15], "N/A");
    }

    #[test]
    fn test_assemble_keeps_audit_order() {
        let dir = TempDir::new().unwrap();
        let graph = parse_graph(GRAPH);
        let audits = vec![
            audit_page("about.html", Cluster::Other, "", dir.path()),
            audit_page("index.html", Cluster::Entry, "<h1>x</h1>", dir.path()),
        ];

        let report = assemble_report(&graph, &audits, date());
        let urls: Vec<_> = report.rows.iter().map(|r| r.page_url.as_str()).collect();
        assert_eq!(urls, vec!["about.html", "index.html"]);
        assert_eq!(report.summary.total_pages, 2);
        assert_eq!(report.summary.pages_with_issues, 2);
    }
}
