//! DOT serialization of abstract graphs.
//!
//! Emits Graphviz DOT text with `node_<n>` identifiers and nested
//! `subgraph cluster_<n>` blocks mirroring the cluster forest. Node
//! declarations always precede edge declarations.

use std::fmt::Write;

use crate::graph::{AbstractGraph, ClusterId};

/// Escape special characters for DOT labels.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// Serializes an [`AbstractGraph`] to DOT text.
///
/// The root cluster becomes the top-level graph body; every other cluster
/// is a nested `subgraph cluster_<n>` labeled with its directory. Edges
/// are emitted after the full node/cluster tree. An empty graph serializes
/// to a valid empty digraph.
pub fn to_dot(graph: &AbstractGraph) -> String {
    let mut output = String::with_capacity(4096);
    output.push_str("digraph {\n");

    write_cluster_body(graph, graph.root(), &mut output, 1);

    for (from, to) in graph.edges() {
        write_indent(&mut output, 1);
        let _ = writeln!(output, "node_{} -> node_{};", from.index(), to.index());
    }

    output.push_str("}\n");
    output
}

fn write_cluster_body(graph: &AbstractGraph, id: ClusterId, output: &mut String, indent: usize) {
    let cluster = graph.cluster(id);

    for &node in cluster.nodes() {
        write_indent(output, indent);
        let _ = writeln!(
            output,
            "node_{} [label=\"{}\"];",
            node.index(),
            escape_label(graph.node_label(node))
        );
    }

    for &child in cluster.children() {
        write_indent(output, indent);
        let _ = writeln!(output, "subgraph cluster_{} {{", child.index());
        write_indent(output, indent + 1);
        let _ = writeln!(
            output,
            "label=\"{}\";",
            escape_label(graph.cluster(child).label())
        );
        write_cluster_body(graph, child, output, indent + 1);
        write_indent(output, indent);
        output.push_str("}\n");
    }
}
