use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Directories skipped while walking the site tree
pub const DEFAULT_IGNORE_DIRS: &[&str] = &[
    "node_modules",
    ".git",
    "__pycache__",
    "prototypes",
    "development-archive",
    "visualizations-archive",
];

/// Main configuration structure for Site-Ledger
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site: SiteConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub audit: AuditConfig,
    /// Extra exact file name rules, checked before the built-in table
    #[serde(default)]
    pub cluster: Vec<ClusterOverride>,
}

/// Site tree configuration
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    /// Root directory of the static site
    #[serde(default = "default_root")]
    pub root: PathBuf,

    /// Directory names pruned from the walk
    #[serde(rename = "ignore-dirs", default = "default_ignore_dirs")]
    pub ignore_dirs: Vec<String>,
}

/// Output configuration
///
/// Relative paths are resolved against the site root.
#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    /// Path to the graph description file
    #[serde(rename = "graph-path", default = "default_graph_path")]
    pub graph_path: PathBuf,

    /// Path to the CSV maintenance log
    #[serde(rename = "report-path", default = "default_report_path")]
    pub report_path: PathBuf,

    /// Optional path to a markdown copy of the audit summary
    #[serde(rename = "summary-path", default)]
    pub summary_path: Option<PathBuf>,
}

/// Audit behaviour configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuditConfig {
    /// Print links whose target page is unknown as a separate diagnostic
    #[serde(rename = "report-broken-links", default)]
    pub report_broken_links: bool,
}

/// Exact file name to cluster mapping supplied by the user
#[derive(Debug, Clone, Deserialize)]
pub struct ClusterOverride {
    /// Bare file name, e.g. "about.html"
    pub filename: String,

    /// Cluster display name, e.g. "Utility" or "Content Hubs"
    pub cluster: String,
}

impl Config {
    /// Resolves a configured path against the site root
    pub fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.site.root.join(path)
        }
    }

    pub fn graph_path(&self) -> PathBuf {
        self.resolve(&self.output.graph_path)
    }

    pub fn report_path(&self) -> PathBuf {
        self.resolve(&self.output.report_path)
    }

    pub fn summary_path(&self) -> Option<PathBuf> {
        self.output.summary_path.as_deref().map(|p| self.resolve(p))
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            root: default_root(),
            ignore_dirs: default_ignore_dirs(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            graph_path: default_graph_path(),
            report_path: default_report_path(),
            summary_path: None,
        }
    }
}

fn default_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_ignore_dirs() -> Vec<String> {
    DEFAULT_IGNORE_DIRS.iter().map(|d| d.to_string()).collect()
}

fn default_graph_path() -> PathBuf {
    PathBuf::from("website-nav.dot")
}

fn default_report_path() -> PathBuf {
    PathBuf::from("site_maintenance_log.csv")
}
