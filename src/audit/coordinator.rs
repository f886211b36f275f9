//! Run coordinator - sequences one audit pass
//!
//! A run is single-threaded and synchronous:
//! 1. Extract the link graph from the site tree
//! 2. Write the graph description
//! 3. Read the graph description back
//! 4. Audit every page it names
//! 5. Assemble the report and hand it to the sinks

use crate::audit::{
    analyze_html, classify_page_type, detect_findings, detect_template, find_missing_images,
    AuditFinding, MediaFlags, PageType,
};
use crate::config::Config;
use crate::graph::{extract_graph, parse_graph_file, write_graph, ParsedGraph, SiteGraph};
use crate::output::{
    assemble_report, print_broken_links, print_summary, AuditReport, CsvReportSink,
    MarkdownSummarySink, ReportSink,
};
use crate::site::Cluster;
use crate::{LedgerError, Result};
use chrono::NaiveDate;
use std::path::Path;

/// Audit record for one page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageAudit {
    pub url: String,
    /// Trimmed `<title>` text, empty when absent
    pub title: String,
    pub page_type: PageType,
    pub template: &'static str,
    /// Findings in rule order
    pub findings: Vec<AuditFinding>,
    pub media: MediaFlags,
}

impl PageAudit {
    pub fn has_issues(&self) -> bool {
        !self.findings.is_empty()
    }

    /// Finding messages in rule order
    pub fn issue_messages(&self) -> Vec<String> {
        self.findings.iter().map(|f| f.message.clone()).collect()
    }
}

/// Audits one page's HTML
///
/// `root` is the site root the page's image references are checked against.
pub fn audit_page(url: &str, cluster: Cluster, html: &str, root: &Path) -> PageAudit {
    let analysis = analyze_html(html);
    let missing = find_missing_images(&analysis.image_sources, url, root);

    PageAudit {
        url: url.to_string(),
        page_type: classify_page_type(url, cluster),
        template: detect_template(html, url),
        findings: detect_findings(&analysis, &missing),
        media: MediaFlags::from_analysis(&analysis, &missing),
        title: analysis.title,
    }
}

/// Audits every page named in the graph, in url order
///
/// A page that no longer exists, or cannot be read, is reported with a
/// warning and produces no record.
pub fn audit_site(graph: &ParsedGraph, root: &Path) -> Vec<PageAudit> {
    let mut audits = Vec::with_capacity(graph.nodes.len());

    for (url, node) in &graph.nodes {
        let path = root.join(url);
        if !path.exists() {
            tracing::warn!("File not found: {}", url);
            continue;
        }

        let html = match std::fs::read_to_string(&path) {
            Ok(html) => html,
            Err(e) => {
                tracing::warn!("Error reading {}: {}", path.display(), e);
                continue;
            }
        };

        let audit = audit_page(url, node.cluster, &html, root);
        tracing::debug!("Audited {} ({} findings)", url, audit.findings.len());
        audits.push(audit);
    }

    tracing::info!("Audited {} of {} pages", audits.len(), graph.nodes.len());
    audits
}

/// Drives the pipeline for one configuration
pub struct Coordinator {
    config: Config,
    reviewed_on: NaiveDate,
}

impl Coordinator {
    /// Creates a coordinator stamping rows with today's local date
    pub fn new(config: Config) -> Self {
        Self::with_review_date(config, chrono::Local::now().date_naive())
    }

    pub fn with_review_date(config: Config, reviewed_on: NaiveDate) -> Self {
        Self {
            config,
            reviewed_on,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Extracts the link graph and writes the graph description
    ///
    /// # Errors
    ///
    /// Fails if the site root is missing or the description cannot be written.
    pub fn build_graph(&self) -> Result<SiteGraph> {
        tracing::info!("Extracting navigation graph from {}", self.config.site.root.display());
        let graph = extract_graph(&self.config)?;

        let dangling = graph.dangling_edges().count();
        if dangling > 0 {
            tracing::debug!("{} links point at pages outside the site tree", dangling);
        }

        write_graph(&graph, &self.config.graph_path())?;
        Ok(graph)
    }

    /// Audits the site against the existing graph description and writes
    /// the report
    ///
    /// # Errors
    ///
    /// Fails if the graph description is missing or a report cannot be
    /// written. Individual unreadable pages are not errors.
    pub fn audit(&self) -> Result<AuditReport> {
        let root = &self.config.site.root;
        if !root.is_dir() {
            return Err(LedgerError::SiteRootNotFound { path: root.clone() });
        }

        let graph = parse_graph_file(&self.config.graph_path())?;
        let audits = audit_site(&graph, root);
        let report = assemble_report(&graph, &audits, self.reviewed_on);

        let report_path = self.config.report_path();
        CsvReportSink::new(&report_path).write_report(&report)?;
        tracing::info!(
            "Maintenance log written to {} ({} rows)",
            report_path.display(),
            report.rows.len()
        );

        if let Some(summary_path) = self.config.summary_path() {
            MarkdownSummarySink::new(&summary_path).write_report(&report)?;
            tracing::info!("Summary written to {}", summary_path.display());
        }

        print_summary(&report.summary);

        if self.config.audit.report_broken_links {
            print_broken_links(&graph.dangling);
        }

        Ok(report)
    }

    /// Runs the full pipeline
    pub fn run(&self) -> Result<AuditReport> {
        self.build_graph()?;
        self.audit()
    }
}

/// Runs the full pipeline with the given configuration
pub fn run_audit(config: Config) -> Result<AuditReport> {
    Coordinator::new(config).run()
}
