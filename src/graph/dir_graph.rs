//! Directory-level graph builder.
//!
//! Collapses the file-level import mapping to one node per unique parent
//! directory and one deduplicated edge per directed directory pair.

use std::collections::{BTreeSet, HashSet};

use petgraph::graph::NodeIndex;
use tracing::debug;

use super::abstract_graph::{AbstractGraph, GraphBuilder};
use super::import_graph::ImportGraph;
use super::path::RelPath;

/// Builds the directory-level dependency graph.
///
/// Nodes are the unique parent directories of every importer and imported
/// file. Edges are directed (importer-dir, imported-dir) pairs,
/// deduplicated on the exact pair: `(a, b)` and `(b, a)` stay distinct,
/// and a directory importing from itself contributes a single self-loop
/// edge. An empty import graph yields an empty result.
pub fn build_dir_graph(import_graph: &ImportGraph) -> AbstractGraph {
    let mut builder = GraphBuilder::new();

    let mut dirs: BTreeSet<RelPath> = BTreeSet::new();
    for (importer, imports) in import_graph.iter() {
        dirs.insert(importer.parent());
        dirs.extend(imports.iter().map(RelPath::parent));
    }

    let root = builder.root();
    for dir in &dirs {
        let idx = builder.intern(dir);
        builder.place(root, idx);
    }

    let mut emitted: HashSet<(NodeIndex, NodeIndex)> = HashSet::new();
    for (importer, imports) in import_graph.iter() {
        let from = builder.intern(&importer.parent());
        for imported in imports {
            let to = builder.intern(&imported.parent());
            if emitted.insert((from, to)) {
                builder.add_edge(from, to);
            }
        }
    }

    let graph = builder.finish();
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "built directory graph"
    );
    graph
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn labels(graph: &AbstractGraph) -> BTreeSet<String> {
        graph.nodes().map(|(_, label)| label.to_string()).collect()
    }

    fn edge_labels(graph: &AbstractGraph) -> Vec<(String, String)> {
        graph
            .edges()
            .map(|(from, to)| {
                (
                    graph.node_label(from).to_string(),
                    graph.node_label(to).to_string(),
                )
            })
            .collect()
    }

    #[test]
    fn test_empty_input_yields_empty_graph() {
        let graph = build_dir_graph(&ImportGraph::default());
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
    }

    #[test]
    fn test_basic_aggregation() {
        // a/x.py -> a/y.py collapses to the self-pair (a, a);
        // b/z.py -> a/x.py collapses to (b, a).
        let import_graph = ImportGraph::from_entries([
            ("a/x.py", vec!["a/y.py"]),
            ("b/z.py", vec!["a/x.py"]),
        ]);
        let graph = build_dir_graph(&import_graph);

        assert_eq!(labels(&graph), BTreeSet::from(["a".into(), "b".into()]));
        let mut edges = edge_labels(&graph);
        edges.sort();
        assert_eq!(
            edges,
            vec![
                ("a".to_string(), "a".to_string()),
                ("b".to_string(), "a".to_string()),
            ]
        );
    }

    #[test]
    fn test_edges_deduplicated_per_directed_pair() {
        // Four file edges, all collapsing to the single pair (a, b).
        let import_graph = ImportGraph::from_entries([
            ("a/x.py", vec!["b/p.py", "b/q.py", "b/p.py"]),
            ("a/y.py", vec!["b/p.py"]),
        ]);
        let graph = build_dir_graph(&import_graph);
        assert_eq!(graph.edge_count(), 1);
    }

    #[test]
    fn test_opposite_directions_stay_distinct() {
        let import_graph = ImportGraph::from_entries([
            ("a/x.py", vec!["b/p.py"]),
            ("b/p.py", vec!["a/x.py"]),
        ]);
        let graph = build_dir_graph(&import_graph);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn test_self_loop_included_and_deduplicated() {
        let import_graph = ImportGraph::from_entries([
            ("a/x.py", vec!["a/y.py"]),
            ("a/y.py", vec!["a/x.py"]),
        ]);
        let graph = build_dir_graph(&import_graph);
        let edges = edge_labels(&graph);
        assert_eq!(edges, vec![("a".to_string(), "a".to_string())]);
    }

    #[test]
    fn test_imported_only_directory_becomes_node() {
        let import_graph = ImportGraph::from_entries([("a/x.py", vec!["lib/util.py"])]);
        let graph = build_dir_graph(&import_graph);
        assert_eq!(labels(&graph), BTreeSet::from(["a".into(), "lib".into()]));
    }

    #[test]
    fn test_root_level_files_map_to_root_directory() {
        let import_graph = ImportGraph::from_entries([("main.py", vec!["a/x.py"])]);
        let graph = build_dir_graph(&import_graph);
        assert_eq!(labels(&graph), BTreeSet::from([".".into(), "a".into()]));
    }

    #[test]
    fn test_determinism() {
        let import_graph = ImportGraph::from_entries([
            ("b/z.py", vec!["a/x.py", "c/w.py"]),
            ("a/x.py", vec!["a/y.py"]),
        ]);
        let first = build_dir_graph(&import_graph);
        let second = build_dir_graph(&import_graph);
        assert_eq!(labels(&first), labels(&second));
        assert_eq!(first.edge_count(), second.edge_count());
        assert_eq!(edge_labels(&first), edge_labels(&second));
    }
}
