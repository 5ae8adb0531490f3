//! The normalized importer-to-imports mapping.

use std::collections::BTreeMap;

use super::path::RelPath;

/// A normalized file-level import mapping.
///
/// Maps each importer to the sequence of files it imports, with every path
/// relative to the project root. Built once by the normalizer and read-only
/// afterwards; both graph builders consume it independently.
///
/// Iteration order is the sorted path order of the importers, so repeated
/// builds over the same graph are deterministic.
///
/// # Example
///
/// ```rust
/// use modgraph::graph::ImportGraph;
///
/// let graph = ImportGraph::from_entries([
///     ("a/x.py", vec!["a/y.py"]),
///     ("b/z.py", vec!["a/x.py"]),
/// ]);
/// assert_eq!(graph.importer_count(), 2);
/// assert_eq!(graph.edge_count(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportGraph {
    edges: BTreeMap<RelPath, Vec<RelPath>>,
}

impl ImportGraph {
    /// Creates an import graph from an importer-to-imports mapping.
    pub fn new(edges: BTreeMap<RelPath, Vec<RelPath>>) -> Self {
        Self { edges }
    }

    /// Convenience constructor from string paths, mainly for tests and
    /// benchmarks.
    pub fn from_entries<'a>(
        entries: impl IntoIterator<Item = (&'a str, Vec<&'a str>)>,
    ) -> Self {
        let edges = entries
            .into_iter()
            .map(|(importer, imports)| {
                (
                    RelPath::new(importer),
                    imports.into_iter().map(RelPath::new).collect(),
                )
            })
            .collect();
        Self { edges }
    }

    /// Iterates over `(importer, imports)` entries in sorted importer order.
    pub fn iter(&self) -> impl Iterator<Item = (&RelPath, &[RelPath])> {
        self.edges
            .iter()
            .map(|(importer, imports)| (importer, imports.as_slice()))
    }

    /// Returns the number of importer entries.
    pub fn importer_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns the total number of file-level import edges.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }

    /// Returns true if the graph has no importers at all.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns true if `importer` has an entry in the graph.
    pub fn contains_importer(&self, importer: &RelPath) -> bool {
        self.edges.contains_key(importer)
    }
}
