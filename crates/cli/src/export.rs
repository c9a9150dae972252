//! Text exports of the dependency graph for external renderers.

use clap::ValueEnum;
use slngraph_core::DependencyGraph;

/// Graph export format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub(crate) enum GraphFormat {
    /// One `FROM -> TO` line per edge
    Edges,
    /// Graphviz digraph
    Dot,
    /// `{ "nodes": [...], "edges": [[from, to], ...] }`
    Json,
}

pub(crate) fn export(graph: &DependencyGraph, format: GraphFormat, title: &str) -> String {
    match format {
        GraphFormat::Edges => to_edge_list(graph),
        GraphFormat::Dot => to_dot(graph, title),
        GraphFormat::Json => serde_json::to_string_pretty(graph)
            .unwrap_or_else(|e| format!("serialization error: {}", e)),
    }
}

pub(crate) fn to_edge_list(graph: &DependencyGraph) -> String {
    graph
        .edges
        .iter()
        .map(|(from, to)| format!("{} -> {}", from, to))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Graphviz source with box-shaped nodes. Every node is declared so that
/// projects without edges still appear.
pub(crate) fn to_dot(graph: &DependencyGraph, title: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!("digraph {} {{\n", quote(title)));
    out.push_str(&format!("    label = {};\n", quote(title)));
    out.push_str("    node [shape = box];\n");
    for node in &graph.nodes {
        out.push_str(&format!("    {};\n", quote(node)));
    }
    for (from, to) in &graph.edges {
        out.push_str(&format!("    {} -> {};\n", quote(from), quote(to)));
    }
    out.push('}');
    out
}

fn quote(s: &str) -> String {
    format!("\"{}\"", s.replace('\\', "\\\\").replace('"', "\\\""))
}
