//! Graph description parser
//!
//! Line-oriented and tolerant: lines that match none of the patterns below
//! are skipped without comment, so a hand-edited file with stray content
//! still parses.
//!
//! - `subgraph cluster_<ident> {` opens a cluster
//! - `}` closes it
//! - `"<url>" [label="<label>", fillcolor="<color>"]` defines a node
//! - `"<source>" -> "<target>"` defines an edge
//!
//! Patterns are anchored at the start of the trimmed line, so a url that
//! happens to contain `subgraph` or `->` is still read as a node or edge.
//! Quoted strings may contain `\"` and `\\` escapes.

use crate::graph::{unescape_quoted, LinkCounts, LinkEdge, PageNode, ParsedGraph};
use crate::site::Cluster;
use crate::{GraphError, GraphResult};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

// Hyphens are accepted so hand-edited identifiers like `About_Sub-pages` resolve
static CLUSTER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^subgraph\s+cluster_([\w-]+)\s*\{").expect("valid regex"));

static NODE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"((?:[^"\\]|\\.)+)"\s*\[label="((?:[^"\\]|\\.)*)",\s*fillcolor="([^"]+)"\]"#)
        .expect("valid regex")
});

static EDGE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^"((?:[^"\\]|\\.)+)"\s*->\s*"((?:[^"\\]|\\.)+)""#).expect("valid regex")
});

/// Parses a graph description from a string
///
/// Nodes defined outside any cluster block belong to [`Cluster::Other`], as
/// do nodes under an unknown cluster identifier. Edges are kept only when
/// both endpoints were defined earlier in the file; the rest are collected
/// in [`ParsedGraph::dangling`].
pub fn parse_graph(content: &str) -> ParsedGraph {
    let mut graph = ParsedGraph::default();
    let mut current_cluster: Option<Cluster> = None;

    for line in content.lines() {
        let line = line.trim();

        if line.is_empty() || line.starts_with("//") {
            continue;
        }

        if let Some(caps) = CLUSTER_RE.captures(line) {
            current_cluster = Some(Cluster::from_ident(&caps[1]).unwrap_or(Cluster::Other));
        } else if line == "}" {
            current_cluster = None;
        } else if let Some(caps) = NODE_RE.captures(line) {
            let url = unescape_quoted(&caps[1]);
            graph.nodes.insert(
                url.clone(),
                PageNode {
                    url,
                    cluster: current_cluster.unwrap_or(Cluster::Other),
                    label: unescape_quoted(&caps[2]),
                    color: caps[3].to_string(),
                },
            );
        } else if let Some(caps) = EDGE_RE.captures(line) {
            let edge = LinkEdge::new(unescape_quoted(&caps[1]), unescape_quoted(&caps[2]));
            if graph.nodes.contains_key(&edge.source) && graph.nodes.contains_key(&edge.target) {
                graph.edges.push(edge);
            } else {
                graph.dangling.push(edge);
            }
        }
    }

    graph.counts = LinkCounts::from_edges(&graph.edges);
    graph
}

/// Reads and parses a graph description file
///
/// # Errors
///
/// Returns [`GraphError::NotFound`] if the file does not exist, and
/// [`GraphError::Read`] if it exists but cannot be read. Malformed lines
/// are never an error.
pub fn parse_graph_file(path: &Path) -> GraphResult<ParsedGraph> {
    if !path.exists() {
        return Err(GraphError::NotFound {
            path: path.to_path_buf(),
        });
    }

    let content = std::fs::read_to_string(path).map_err(|source| GraphError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let graph = parse_graph(&content);
    tracing::info!(
        "Parsed {} pages and {} links from {}",
        graph.nodes.len(),
        graph.edges.len(),
        path.display()
    );
    Ok(graph)
}
