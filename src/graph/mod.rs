//! Navigation graph module
//!
//! This module contains:
//! - The link graph extractor (site tree to [`SiteGraph`])
//! - The graph description writer
//! - The graph description parser ([`ParsedGraph`] with link counts)
//!
//! The graph description file is the boundary between extraction and the
//! audit: it can be inspected or edited by hand between runs.

mod dot;
mod extractor;
mod parser;

pub use dot::{render_graph, write_graph};
pub use extractor::{extract_graph, extract_hrefs, extract_links, LinkExtractor};
pub use parser::{parse_graph, parse_graph_file};

use crate::site::Cluster;
use std::collections::{BTreeMap, HashMap};

/// Escapes backslashes and double quotes for a quoted graph description string
pub(crate) fn escape_quoted(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}

/// Reverses [`escape_quoted`]
pub(crate) fn unescape_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c == '\\' {
            if let Some(next) = chars.next() {
                out.push(next);
                continue;
            }
        }
        out.push(c);
    }
    out
}

/// One discovered HTML page
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageNode {
    /// Path relative to the site root; unique key
    pub url: String,
    pub cluster: Cluster,
    /// Short display name, the file name by default
    pub label: String,
    /// Node fill colour in the graph description
    pub color: String,
}

/// Directed link between two page urls
///
/// Edges are raw occurrences: a page linking to the same target twice
/// produces two edges.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct LinkEdge {
    pub source: String,
    pub target: String,
}

impl LinkEdge {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
        }
    }
}

/// Graph produced by the extractor
#[derive(Debug, Clone, Default)]
pub struct SiteGraph {
    /// Pages keyed by url
    pub nodes: BTreeMap<String, PageNode>,
    /// Every internal link found, including links to unknown pages
    pub edges: Vec<LinkEdge>,
}

impl SiteGraph {
    /// Edges whose endpoints are both known pages
    pub fn resolved_edges(&self) -> impl Iterator<Item = &LinkEdge> {
        self.edges
            .iter()
            .filter(|e| self.nodes.contains_key(&e.source) && self.nodes.contains_key(&e.target))
    }

    /// Edges pointing at a page that does not exist in the site tree
    pub fn dangling_edges(&self) -> impl Iterator<Item = &LinkEdge> {
        self.edges
            .iter()
            .filter(|e| !self.nodes.contains_key(&e.target))
    }
}

/// Inbound and outbound link tallies per page url
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkCounts {
    inbound: HashMap<String, usize>,
    outbound: HashMap<String, usize>,
}

impl LinkCounts {
    /// Tallies raw edge occurrences; no weighting, no deduplication
    pub fn from_edges(edges: &[LinkEdge]) -> Self {
        let mut counts = Self::default();
        for edge in edges {
            *counts.outbound.entry(edge.source.clone()).or_insert(0) += 1;
            *counts.inbound.entry(edge.target.clone()).or_insert(0) += 1;
        }
        counts
    }

    pub fn inbound(&self, url: &str) -> usize {
        self.inbound.get(url).copied().unwrap_or(0)
    }

    pub fn outbound(&self, url: &str) -> usize {
        self.outbound.get(url).copied().unwrap_or(0)
    }
}

/// Graph read back from a graph description
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedGraph {
    /// Pages keyed by url
    pub nodes: BTreeMap<String, PageNode>,
    /// Edges whose endpoints were both known when the edge line was read
    pub edges: Vec<LinkEdge>,
    /// Edges discarded because an endpoint was unknown
    pub dangling: Vec<LinkEdge>,
    pub counts: LinkCounts,
}
