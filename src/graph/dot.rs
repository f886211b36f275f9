//! Graph description writer
//!
//! The output is Graphviz-compatible: a header of rendering hints, one
//! `subgraph cluster_<ident>` block per non-empty cluster, then every edge.
//! Render it manually with `dot -Tpng website-nav.dot -o website-nav.png`.

use crate::graph::{escape_quoted, LinkEdge, SiteGraph};
use crate::site::Cluster;
use crate::{GraphError, GraphResult};
use std::fmt::Write as _;
use std::path::Path;

const HEADER: &str = r##"digraph WebsiteNavigation {
    rankdir=LR;
    bgcolor="#1a1a2e";
    fontname="Arial";
    fontsize=10;
    splines=curved;
    overlap=false;
    compound=true;
    ranksep=0.2;
    nodesep=0.1;
    newrank=true;

    // Node styles
    node [fontname="Arial", fontsize=8, fontcolor="white", style="rounded,filled", penwidth=1.0];

    // Edge styles
    edge [fontname="Arial", fontsize=7, color="#9CA3AF", penwidth=1.0, arrowsize=0.7];
"##;

/// Visual weight of one edge
struct EdgeStyle {
    dashed: bool,
    color: &'static str,
    penwidth: &'static str,
}

fn edge_style(source: Option<Cluster>, target: Option<Cluster>) -> EdgeStyle {
    let style = |dashed, color, penwidth| EdgeStyle {
        dashed,
        color,
        penwidth,
    };

    match (source, target) {
        (Some(Cluster::Entry), _) => style(false, "#fbbf24", "2.5"),
        (Some(Cluster::PrimaryModes), Some(Cluster::PrimaryModes)) => style(false, "#fbbf24", "2.0"),
        (Some(Cluster::ContentHubs), Some(Cluster::Series)) => style(false, "#9CA3AF", "1.5"),
        (Some(s), Some(t)) if s == t => style(true, "#6B7280", "0.5"),
        _ => style(false, "#9CA3AF", "1.0"),
    }
}

/// Renders a graph as a graph description string
///
/// Nodes are grouped by cluster in [`Cluster::ALL`] order and sorted by url
/// within a cluster. Edges are sorted by `(source, target)`; duplicates and
/// edges to unknown pages are written as-is. Quotes and backslashes in urls
/// and labels are escaped.
pub fn render_graph(graph: &SiteGraph) -> String {
    let mut out = String::from(HEADER);

    for cluster in Cluster::ALL {
        let members: Vec<_> = graph
            .nodes
            .values()
            .filter(|n| n.cluster == cluster)
            .collect();
        if members.is_empty() {
            continue;
        }

        let _ = write!(
            out,
            r##"
    subgraph cluster_{ident} {{
        style=filled;
        color="{color}";
        fillcolor="#2d2d3d";
        penwidth=1.5;
        fontsize=12;
        fontname="Arial Bold";
        fontcolor="white";
        label="{name}";
        rank=same;
"##,
            ident = cluster.ident(),
            color = cluster.color(),
            name = cluster.name(),
        );

        for node in members {
            let _ = writeln!(
                out,
                r#"        "{}" [label="{}", fillcolor="{}"];"#,
                escape_quoted(&node.url),
                escape_quoted(&node.label),
                node.color
            );
        }
        out.push_str("    }\n");
    }

    out.push('\n');

    let mut edges: Vec<&LinkEdge> = graph.edges.iter().collect();
    edges.sort();
    for edge in edges {
        let source = graph.nodes.get(&edge.source).map(|n| n.cluster);
        let target = graph.nodes.get(&edge.target).map(|n| n.cluster);
        let style = edge_style(source, target);
        let (from, to) = (escape_quoted(&edge.source), escape_quoted(&edge.target));

        if style.dashed {
            let _ = writeln!(
                out,
                r#"    "{}" -> "{}" [style=dashed, color="{}", penwidth={}];"#,
                from, to, style.color, style.penwidth
            );
        } else {
            let _ = writeln!(
                out,
                r#"    "{}" -> "{}" [color="{}", penwidth={}];"#,
                from, to, style.color, style.penwidth
            );
        }
    }

    out.push_str("}\n");
    out
}

/// Writes the graph description to `path`
pub fn write_graph(graph: &SiteGraph, path: &Path) -> GraphResult<()> {
    std::fs::write(path, render_graph(graph)).map_err(|source| GraphError::Write {
        path: path.to_path_buf(),
        source,
    })?;

    tracing::info!("Graph description written to {}", path.display());
    Ok(())
}
