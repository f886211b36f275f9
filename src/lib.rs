//! Site-Ledger: a static site navigation mapper and maintenance auditor
//!
//! This crate walks a tree of hand-written HTML pages, extracts the internal
//! navigation graph, writes it as an editable graph description, and audits
//! every page for structural and accessibility problems. The result is a
//! maintenance log (CSV) plus a console summary.

pub mod audit;
pub mod config;
pub mod graph;
pub mod output;
pub mod site;

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for Site-Ledger operations
#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Graph error: {0}")]
    Graph(#[from] GraphError),

    #[error("Output error: {0}")]
    Output(#[from] output::OutputError),

    #[error("Site root not found: {}", path.display())]
    SiteRootNotFound { path: PathBuf },
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Unknown cluster name: {0}")]
    UnknownCluster(String),
}

/// Graph description errors
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Graph description not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to read graph description {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write graph description {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Result type alias for Site-Ledger operations
pub type Result<T> = std::result::Result<T, LedgerError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

/// Result type alias for graph operations
pub type GraphResult<T> = std::result::Result<T, GraphError>;

// Re-export commonly used types
pub use audit::{run_audit, AuditFinding, FindingKind, PageAnalysis};
pub use config::Config;
pub use graph::{extract_graph, parse_graph_file, LinkEdge, PageNode, ParsedGraph, SiteGraph};
pub use output::{AuditReport, AuditSummary, ReportRow};
pub use site::{Cluster, ClusterRules};
