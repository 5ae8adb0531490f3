//! File-level graph builder.
//!
//! Builds the file-granularity graph, optionally grouping nodes into
//! nested directory clusters and optionally restricting the output to
//! directory-crossing imports.

use std::collections::BTreeSet;

use tracing::debug;

use super::abstract_graph::{AbstractGraph, GraphBuilder};
use super::import_graph::ImportGraph;
use super::path::RelPath;

/// Flags controlling the shape of the file-level graph.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FileGraphOptions {
    /// Group file nodes into nested subgraphs by containing directory.
    pub show_clusters: bool,
    /// Restrict node and edge emission to directory-crossing imports.
    pub only_crossing: bool,
}

/// Builds the file-level dependency graph.
///
/// Every importer and imported file becomes a node, emitted in sorted path
/// order. With `only_crossing`, an importer whose imports all stay inside
/// its own directory is dropped from node emission (its imported files
/// remain node candidates, and the importer itself reappears if something
/// else imports it), and every same-directory edge is skipped. Edges are
/// *not* deduplicated: repeated imports between the same two files yield
/// repeated edges, unlike the directory graph.
///
/// With `show_clusters`, each node is placed into the cluster of its
/// parent directory and clusters are nested to mirror the directory tree.
pub fn build_file_graph(import_graph: &ImportGraph, options: FileGraphOptions) -> AbstractGraph {
    let mut builder = GraphBuilder::new();

    let mut files: BTreeSet<RelPath> = BTreeSet::new();
    for (importer, imports) in import_graph.iter() {
        let dir = importer.parent();
        let crosses = imports.iter().any(|imported| imported.parent() != dir);
        if !options.only_crossing || crosses {
            files.insert(importer.clone());
        }
        files.extend(imports.iter().cloned());
    }

    for file in &files {
        let idx = builder.intern(file);
        let cluster = if options.show_clusters {
            builder.cluster_for(&file.parent())
        } else {
            builder.root()
        };
        builder.place(cluster, idx);
    }

    for (importer, imports) in import_graph.iter() {
        for imported in imports {
            if options.only_crossing && importer.parent() == imported.parent() {
                continue;
            }
            let (Some(from), Some(to)) = (builder.lookup(importer), builder.lookup(imported))
            else {
                continue;
            };
            builder.add_edge(from, to);
        }
    }

    if options.show_clusters {
        builder.nest_clusters();
    }

    let graph = builder.finish();
    debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        clusters = graph.cluster_count(),
        "built file graph"
    );
    graph
}
