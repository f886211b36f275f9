//! Audit summary aggregation and console output
//!
//! Percentages are integer floor division (`count * 100 / total`), never
//! rounded, and 0 when there are no pages.

use crate::audit::{IssueCategory, MediaStatus, PageAudit};
use crate::graph::{LinkEdge, ParsedGraph};
use crate::site::Cluster;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Number of pages listed in the most-linked table
const TOP_LINKED: usize = 10;

/// Aggregate figures for one audit run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuditSummary {
    pub total_pages: usize,
    pub pages_with_issues: usize,

    /// Findings per category; categories with no findings are absent
    pub issue_counts: BTreeMap<IssueCategory, usize>,

    pub video_yes: usize,
    pub video_na: usize,
    pub audio_yes: usize,
    pub audio_na: usize,
    pub images_yes: usize,
    pub images_no: usize,
    pub images_na: usize,
    pub mobile_yes: usize,
    pub mobile_no: usize,

    pub reviewed_on: NaiveDate,
}

impl AuditSummary {
    pub fn from_audits(audits: &[PageAudit], reviewed_on: NaiveDate) -> Self {
        let mut summary = Self {
            total_pages: audits.len(),
            reviewed_on,
            ..Self::default()
        };

        for audit in audits {
            if audit.has_issues() {
                summary.pages_with_issues += 1;
            }
            for finding in &audit.findings {
                *summary
                    .issue_counts
                    .entry(finding.kind.category())
                    .or_insert(0) += 1;
            }

            match audit.media.video {
                MediaStatus::Yes => summary.video_yes += 1,
                _ => summary.video_na += 1,
            }
            match audit.media.audio {
                MediaStatus::Yes => summary.audio_yes += 1,
                _ => summary.audio_na += 1,
            }
            match audit.media.images {
                MediaStatus::Yes => summary.images_yes += 1,
                MediaStatus::No => summary.images_no += 1,
                MediaStatus::NotApplicable => summary.images_na += 1,
            }
            match audit.media.mobile {
                MediaStatus::Yes => summary.mobile_yes += 1,
                _ => summary.mobile_no += 1,
            }
        }

        summary
    }

    pub fn pages_without_issues(&self) -> usize {
        self.total_pages - self.pages_with_issues
    }

    /// Floor percentage of `count` over all pages
    pub fn percent(&self, count: usize) -> usize {
        if self.total_pages == 0 {
            0
        } else {
            count * 100 / self.total_pages
        }
    }

    /// Categories with findings, most frequent first
    ///
    /// Ties keep category order.
    pub fn issue_breakdown(&self) -> Vec<(IssueCategory, usize)> {
        let mut breakdown: Vec<_> = IssueCategory::ALL
            .iter()
            .filter_map(|c| self.issue_counts.get(c).map(|n| (*c, *n)))
            .collect();
        breakdown.sort_by(|a, b| b.1.cmp(&a.1));
        breakdown
    }

    /// High-priority categories that have findings
    pub fn high_priority(&self) -> Vec<(IssueCategory, usize)> {
        IssueCategory::HIGH_PRIORITY
            .iter()
            .filter_map(|c| self.issue_counts.get(c).map(|n| (*c, *n)))
            .collect()
    }
}

/// Prints the audit summary to stdout
pub fn print_summary(summary: &AuditSummary) {
    let rule = "=".repeat(60);
    println!("\n{}", rule);
    println!("SITE MAINTENANCE AUDIT COMPLETE");
    println!("{}", rule);

    println!("\nTotal pages: {}", summary.total_pages);
    println!(
        "Pages with issues: {} ({}%)",
        summary.pages_with_issues,
        summary.percent(summary.pages_with_issues)
    );
    println!(
        "Pages without issues: {} ({}%)",
        summary.pages_without_issues(),
        summary.percent(summary.pages_without_issues())
    );

    let breakdown = summary.issue_breakdown();
    if breakdown.is_empty() {
        println!("\nIssue breakdown: No issues found!");
    } else {
        println!("\nIssue breakdown:");
        for (category, count) in breakdown {
            println!("  - {}: {}", category.title(), count);
        }
    }

    println!("\nVideo embeds:");
    println!("  Working: {}", summary.video_yes);
    println!("  N/A: {}", summary.video_na);

    println!("\nAudio embeds:");
    println!("  Working: {}", summary.audio_yes);
    println!("  N/A: {}", summary.audio_na);

    println!("\nImage assets:");
    println!("  Loaded: {}", summary.images_yes);
    println!("  Missing: {}", summary.images_no);
    println!("  N/A: {}", summary.images_na);

    println!("\nMobile responsive:");
    println!(
        "  Yes: {} ({}%)",
        summary.mobile_yes,
        summary.percent(summary.mobile_yes)
    );
    println!(
        "  No: {} ({}%)",
        summary.mobile_no,
        summary.percent(summary.mobile_no)
    );

    println!(
        "\nPages reviewed: {} on {}",
        summary.total_pages,
        summary.reviewed_on.format("%Y-%m-%d")
    );

    let high = summary.high_priority();
    if high.is_empty() {
        println!("\nHigh priority issues: None");
    } else {
        println!("\nHigh priority issues:");
        for (category, count) in high {
            println!("  - {}: {} pages", category.title(), count);
        }
    }

    println!("\n{}", rule);
}

/// Formats links whose target is not a known page, one per line
pub fn format_broken_links(dangling: &[LinkEdge]) -> String {
    if dangling.is_empty() {
        return "Broken internal links: None\n".to_string();
    }

    let mut out = format!("Broken internal links ({}):\n", dangling.len());
    for edge in dangling {
        out.push_str(&format!("  - {} -> {}\n", edge.source, edge.target));
    }
    out
}

/// Prints links whose target is not a known page
pub fn print_broken_links(dangling: &[LinkEdge]) {
    print!("\n{}", format_broken_links(dangling));
}

/// Pages per cluster, in display order, skipping empty clusters
pub fn cluster_sizes(graph: &ParsedGraph) -> Vec<(Cluster, usize)> {
    Cluster::ALL
        .iter()
        .map(|c| (*c, graph.nodes.values().filter(|n| n.cluster == *c).count()))
        .filter(|(_, n)| *n > 0)
        .collect()
}

/// Pages with the most inbound links, ties broken by url
pub fn most_linked(graph: &ParsedGraph, limit: usize) -> Vec<(&str, usize)> {
    let mut pages: Vec<_> = graph
        .nodes
        .keys()
        .map(|url| (url.as_str(), graph.counts.inbound(url)))
        .filter(|(_, n)| *n > 0)
        .collect();
    pages.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    pages.truncate(limit);
    pages
}

/// Prints graph statistics to stdout in a formatted manner
pub fn print_graph_statistics(graph: &ParsedGraph) {
    println!("=== Navigation Graph Statistics ===\n");

    println!("Overview:");
    println!("  Total pages: {}", graph.nodes.len());
    println!("  Total links: {}", graph.edges.len());
    println!("  Broken links: {}", graph.dangling.len());
    println!();

    println!("Pages by Cluster:");
    for (cluster, count) in cluster_sizes(graph) {
        println!("  {}: {}", cluster, count);
    }
    println!();

    let top = most_linked(graph, TOP_LINKED);
    if !top.is_empty() {
        println!("Most Linked Pages:");
        for (url, count) in top {
            println!("  {} ({} inbound)", url, count);
        }
        println!();
    }

    let orphans: Vec<_> = graph
        .nodes
        .keys()
        .filter(|url| graph.counts.inbound(url) == 0)
        .collect();
    if !orphans.is_empty() {
        println!("Pages Without Inbound Links ({}):", orphans.len());
        for url in orphans {
            println!("  - {}", url);
        }
    }
}
