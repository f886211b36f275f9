//! Markdown summary generation
//!
//! This module generates a human-readable markdown version of the audit
//! summary, suitable for committing next to the maintenance log.

use crate::output::stats::AuditSummary;
use crate::output::traits::{OutputResult, ReportSink};
use crate::output::AuditReport;
use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Writes the markdown summary to a file
#[derive(Debug, Clone)]
pub struct MarkdownSummarySink {
    path: PathBuf,
}

impl MarkdownSummarySink {
    pub fn new(path: &Path) -> Self {
        Self {
            path: path.to_path_buf(),
        }
    }
}

impl ReportSink for MarkdownSummarySink {
    fn write_report(&mut self, report: &AuditReport) -> OutputResult<()> {
        let markdown = format_markdown_summary(report);

        let mut file = File::create(&self.path)?;
        file.write_all(markdown.as_bytes())?;

        Ok(())
    }
}

/// Formats an audit report's summary as markdown
///
/// Pages with findings are listed with their issues; clean pages are
/// counted only.
pub fn format_markdown_summary(report: &AuditReport) -> String {
    let summary = &report.summary;
    let mut md = String::new();

    md.push_str("# Site Maintenance Audit\n\n");
    md.push_str(&format!(
        "Reviewed on {}.\n\n",
        summary.reviewed_on.format("%Y-%m-%d")
    ));

    // Overview
    md.push_str("## Overview\n\n");
    md.push_str(&format!("- **Total Pages**: {}\n", summary.total_pages));
    md.push_str(&format!(
        "- **Pages With Issues**: {} ({}%)\n",
        summary.pages_with_issues,
        summary.percent(summary.pages_with_issues)
    ));
    md.push_str(&format!(
        "- **Pages Without Issues**: {} ({}%)\n",
        summary.pages_without_issues(),
        summary.percent(summary.pages_without_issues())
    ));
    md.push_str(&format!(
        "- **Mobile Responsive**: {} ({}%)\n\n",
        summary.mobile_yes,
        summary.percent(summary.mobile_yes)
    ));

    // Issue breakdown
    md.push_str("## Issue Breakdown\n\n");
    let breakdown = summary.issue_breakdown();
    if breakdown.is_empty() {
        md.push_str("No issues found!\n\n");
    } else {
        md.push_str("| Issue | Pages |\n");
        md.push_str("|-------|-------|\n");
        for (category, count) in breakdown {
            md.push_str(&format!("| {} | {} |\n", category.title(), count));
        }
        md.push('\n');
    }

    md.push_str(&format_media_table(summary));

    // High priority
    let high = summary.high_priority();
    if !high.is_empty() {
        md.push_str("## High Priority Issues\n\n");
        for (category, count) in high {
            md.push_str(&format!("- {}: {} pages\n", category.title(), count));
        }
        md.push('\n');
    }

    // Per-page findings
    let flagged: Vec<_> = report
        .rows
        .iter()
        .filter(|r| !r.human_identified_issues.is_empty())
        .collect();
    if !flagged.is_empty() {
        md.push_str("## Pages With Issues\n\n");
        for row in flagged {
            md.push_str(&format!("### `{}`\n\n", row.page_url));
            for issue in &row.human_identified_issues {
                md.push_str(&format!("- {}\n", issue));
            }
            md.push('\n');
        }
    }

    md
}

fn format_media_table(summary: &AuditSummary) -> String {
    let mut md = String::new();
    md.push_str("## Media\n\n");
    md.push_str("| Asset | Yes | No | N/A |\n");
    md.push_str("|-------|-----|----|-----|\n");
    md.push_str(&format!(
        "| Video Embeds | {} | 0 | {} |\n",
        summary.video_yes, summary.video_na
    ));
    md.push_str(&format!(
        "| Audio Embeds | {} | 0 | {} |\n",
        summary.audio_yes, summary.audio_na
    ));
    md.push_str(&format!(
        "| Image Assets | {} | {} | {} |\n\n",
        summary.images_yes, summary.images_no, summary.images_na
    ));
    md
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::IssueCategory;
    use crate::output::ReportRow;
    use chrono::NaiveDate;
    use tempfile::TempDir;

    fn report() -> AuditReport {
        let mut summary = AuditSummary {
            total_pages: 4,
            pages_with_issues: 1,
            mobile_yes: 3,
            mobile_no: 1,
            images_na: 4,
            video_na: 4,
            audio_na: 4,
            reviewed_on: NaiveDate::from_ymd_opt(2024, 6, 30).unwrap(),
            ..Default::default()
        };
        summary.issue_counts.insert(IssueCategory::MissingH1Tag, 1);
        summary.issue_counts.insert(IssueCategory::MissingTitleTag, 1);

        AuditReport {
            rows: vec![ReportRow {
                page_url: "a.html".to_string(),
                page_title: String::new(),
                page_type: "Content Page".to_string(),
                template_used: "Standard Template".to_string(),
                inbound_links: 0,
                outbound_links: 0,
                human_identified_issues: vec![
                    "Missing H1 tag - Critical SEO and accessibility issue".to_string(),
                    "Missing image files: a; b.png".to_string(),
                ],
                issue_severity: String::new(),
                issue_type: String::new(),
                detected_by: "Automated Scan".to_string(),
                fix_status: String::new(),
                pr_link: String::new(),
                last_reviewed_date: "2024-06-30".to_string(),
                video_embed_working: crate::audit::MediaStatus::NotApplicable,
                audio_embed_working: crate::audit::MediaStatus::NotApplicable,
                image_assets_loaded: crate::audit::MediaStatus::NotApplicable,
                mobile_responsive: crate::audit::MediaStatus::No,
            }],
            summary,
        }
    }

    #[test]
    fn test_format_markdown_summary() {
        let md = format_markdown_summary(&report());

        assert!(md.starts_with("# Site Maintenance Audit"));
        assert!(md.contains("Reviewed on 2024-06-30."));
        assert!(md.contains("- **Pages With Issues**: 1 (25%)"));
        assert!(md.contains("- **Mobile Responsive**: 3 (75%)"));
        assert!(md.contains("| Missing H1 Tag | 1 |"));
        assert!(md.contains("- Missing H1 Tag: 1 pages"));
        assert!(md.contains("### `a.html`"));
        assert!(md.contains("- Missing image files: a; b.png\n"));
        assert!(!md.contains("- b.png"));
    }

    #[test]
    fn test_sink_writes_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("summary.md");

        MarkdownSummarySink::new(&path)
            .write_report(&report())
            .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.contains("## Issue Breakdown"));
    }
}
