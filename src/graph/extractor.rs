//! Link graph extraction from the site tree
//!
//! Links are found by pattern matching on anchor tags rather than by
//! building a DOM; the site is small, hand-written HTML.

use crate::config::Config;
use crate::graph::{LinkEdge, PageNode, SiteGraph};
use crate::site::{discover_pages, file_name, resolve_href, ClusterRules};
use crate::{LedgerError, Result};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Extracts raw `href` values from every `<a>` tag in the document
///
/// # Example
///
/// ```
/// use site_ledger::graph::extract_hrefs;
///
/// let html = r#"<nav><a class="x" href="about.html">About</a><A HREF='/blog.html'>Blog</A></nav>"#;
/// assert_eq!(extract_hrefs(html), vec!["about.html", "/blog.html"]);
/// ```
pub fn extract_hrefs(html: &str) -> Vec<&str> {
    static ANCHOR_HREF_RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r#"(?i)<a\s+[^>]*href=["']([^"']+)["']"#).expect("valid regex")
    });

    ANCHOR_HREF_RE
        .captures_iter(html)
        .filter_map(|c| c.get(1))
        .map(|m| m.as_str())
        .collect()
}

/// Extracts internal links from a page and resolves them to page urls
///
/// External, fragment-only, `javascript:`, `mailto:` and `tel:` targets are
/// dropped. Duplicates are kept.
pub fn extract_links(page_url: &str, html: &str) -> Vec<String> {
    extract_hrefs(html)
        .into_iter()
        .filter_map(|href| resolve_href(page_url, href))
        .collect()
}

/// Builds a [`SiteGraph`] from a directory of HTML pages
#[derive(Debug, Clone)]
pub struct LinkExtractor {
    rules: ClusterRules,
    ignore_dirs: Vec<String>,
}

impl LinkExtractor {
    pub fn new(rules: ClusterRules, ignore_dirs: Vec<String>) -> Self {
        Self { rules, ignore_dirs }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            ClusterRules::from_config(config),
            config.site.ignore_dirs.clone(),
        )
    }

    /// Walks `root` and extracts every page and internal link
    ///
    /// A page that cannot be read is kept as a node without outbound links
    /// and reported with a warning; extraction continues with the rest.
    ///
    /// # Errors
    ///
    /// Returns [`LedgerError::SiteRootNotFound`] if `root` is not a directory.
    pub fn extract(&self, root: &Path) -> Result<SiteGraph> {
        if !root.is_dir() {
            return Err(LedgerError::SiteRootNotFound {
                path: root.to_path_buf(),
            });
        }

        let mut graph = SiteGraph::default();

        for page in discover_pages(root, &self.ignore_dirs) {
            let class = self.rules.classify(&page.url);
            graph.nodes.insert(
                page.url.clone(),
                PageNode {
                    url: page.url.clone(),
                    cluster: class.cluster,
                    label: file_name(&page.url).to_string(),
                    color: class.color.to_string(),
                },
            );

            let html = match std::fs::read_to_string(&page.path) {
                Ok(html) => html,
                Err(e) => {
                    tracing::warn!("Error processing {}: {}", page.path.display(), e);
                    continue;
                }
            };

            let links = extract_links(&page.url, &html);
            tracing::debug!("{}: {} internal links", page.url, links.len());
            graph
                .edges
                .extend(links.into_iter().map(|target| LinkEdge::new(&page.url, target)));
        }

        tracing::info!(
            "Extracted {} pages with {} links",
            graph.nodes.len(),
            graph.edges.len()
        );

        Ok(graph)
    }
}

/// Extracts the navigation graph of the configured site root
pub fn extract_graph(config: &Config) -> Result<SiteGraph> {
    LinkExtractor::from_config(config).extract(&config.site.root)
}
