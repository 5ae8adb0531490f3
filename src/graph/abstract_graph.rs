//! Rendering-ready graph structure built on petgraph.
//!
//! Builders accumulate nodes, edges and cluster membership through a
//! [`GraphBuilder`] and freeze the result into an immutable
//! [`AbstractGraph`] handed to the renderer. The two-phase build makes the
//! node-before-edge invariant structural: an edge can only reference a
//! `NodeIndex` obtained by interning the node first.

use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use std::collections::HashMap;

use super::path::RelPath;

/// Handle to a cluster inside an [`AbstractGraph`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClusterId(usize);

impl ClusterId {
    /// Returns the numeric identifier, used for synthetic names in output.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A named grouping of nodes corresponding to one directory.
///
/// Clusters form a forest mirroring the directory tree; the root cluster
/// is the top-level graph body itself and is never nested.
#[derive(Debug, Clone)]
pub struct Cluster {
    label: String,
    nodes: Vec<NodeIndex>,
    children: Vec<ClusterId>,
}

impl Cluster {
    /// The display label (the directory's string form).
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Nodes placed directly in this cluster.
    pub fn nodes(&self) -> &[NodeIndex] {
        &self.nodes
    }

    /// Clusters nested directly inside this one.
    pub fn children(&self) -> &[ClusterId] {
        &self.children
    }
}

/// An immutable graph description ready for rendering.
///
/// Wraps a petgraph [`DiGraph`] whose node weights are display labels,
/// plus a cluster forest rooted at an explicit sentinel cluster. Node
/// identifiers are assigned on first intern and are stable within one
/// build; there is no cross-run stability guarantee.
#[derive(Debug, Clone)]
pub struct AbstractGraph {
    graph: DiGraph<String, ()>,
    clusters: Vec<Cluster>,
}

impl AbstractGraph {
    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    /// Returns the number of edges.
    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    /// Returns true if the graph has no nodes.
    pub fn is_empty(&self) -> bool {
        self.graph.node_count() == 0
    }

    /// Iterates over `(index, label)` pairs in identifier order.
    pub fn nodes(&self) -> impl Iterator<Item = (NodeIndex, &str)> {
        self.graph
            .node_indices()
            .map(|idx| (idx, self.graph[idx].as_str()))
    }

    /// Iterates over directed edges in insertion order.
    pub fn edges(&self) -> impl Iterator<Item = (NodeIndex, NodeIndex)> + '_ {
        self.graph.edge_references().map(|e| (e.source(), e.target()))
    }

    /// Returns the label of a node.
    pub fn node_label(&self, idx: NodeIndex) -> &str {
        &self.graph[idx]
    }

    /// The root sentinel cluster (the top-level graph body).
    pub fn root(&self) -> ClusterId {
        ClusterId(0)
    }

    /// Looks up a cluster by handle.
    pub fn cluster(&self, id: ClusterId) -> &Cluster {
        &self.clusters[id.0]
    }

    /// Returns the number of clusters, including the root sentinel.
    pub fn cluster_count(&self) -> usize {
        self.clusters.len()
    }
}

/// Accumulates nodes, edges and clusters, then freezes them into an
/// [`AbstractGraph`].
///
/// Interning follows the return-existing-index idiom: interning the same
/// path twice yields the same `NodeIndex`. Cluster handles work the same
/// way, with the root sentinel pre-created at construction.
///
/// # Example
///
/// ```rust
/// use modgraph::graph::{GraphBuilder, RelPath};
///
/// let mut builder = GraphBuilder::new();
/// let x = builder.intern(&RelPath::new("a/x.py"));
/// let y = builder.intern(&RelPath::new("a/y.py"));
/// let root = builder.root();
/// builder.place(root, x);
/// builder.place(root, y);
/// builder.add_edge(x, y);
///
/// let graph = builder.finish();
/// assert_eq!(graph.node_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug)]
pub struct GraphBuilder {
    graph: DiGraph<String, ()>,
    ids: HashMap<RelPath, NodeIndex>,
    clusters: Vec<Cluster>,
    cluster_ids: HashMap<RelPath, ClusterId>,
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GraphBuilder {
    /// Creates an empty builder with the root sentinel cluster in place.
    pub fn new() -> Self {
        let root = Cluster {
            label: RelPath::root().to_string(),
            nodes: Vec::new(),
            children: Vec::new(),
        };
        let mut cluster_ids = HashMap::new();
        cluster_ids.insert(RelPath::root(), ClusterId(0));
        Self {
            graph: DiGraph::new(),
            ids: HashMap::new(),
            clusters: vec![root],
            cluster_ids,
        }
    }

    /// Interns `path` as a node labeled with its display form.
    ///
    /// Returns the existing index if the path was interned before.
    pub fn intern(&mut self, path: &RelPath) -> NodeIndex {
        if let Some(&idx) = self.ids.get(path) {
            return idx;
        }
        let idx = self.graph.add_node(path.to_string());
        self.ids.insert(path.clone(), idx);
        idx
    }

    /// Looks up the node index of an already-interned path.
    pub fn lookup(&self, path: &RelPath) -> Option<NodeIndex> {
        self.ids.get(path).copied()
    }

    /// Adds a directed edge between two interned nodes.
    ///
    /// No deduplication happens here; builders that need unique edges
    /// track emitted pairs themselves.
    pub fn add_edge(&mut self, from: NodeIndex, to: NodeIndex) {
        self.graph.add_edge(from, to, ());
    }

    /// The root sentinel cluster.
    pub fn root(&self) -> ClusterId {
        ClusterId(0)
    }

    /// Returns the cluster for `dir`, creating it lazily on first access.
    ///
    /// The root directory always maps to the root sentinel.
    pub fn cluster_for(&mut self, dir: &RelPath) -> ClusterId {
        if let Some(&id) = self.cluster_ids.get(dir) {
            return id;
        }
        let id = ClusterId(self.clusters.len());
        self.clusters.push(Cluster {
            label: dir.to_string(),
            nodes: Vec::new(),
            children: Vec::new(),
        });
        self.cluster_ids.insert(dir.clone(), id);
        id
    }

    /// Places a node inside a cluster for rendering.
    pub fn place(&mut self, cluster: ClusterId, node: NodeIndex) {
        self.clusters[cluster.0].nodes.push(node);
    }

    /// Attaches every non-root cluster under its parent directory's
    /// cluster, mirroring the filesystem hierarchy.
    ///
    /// Intermediate directories that never received a node of their own
    /// still get a cluster, so a deeply nested cluster is always reachable
    /// from the root. Attachment walks the directory set in reverse sorted
    /// order; each non-root cluster ends up nested exactly once.
    pub fn nest_clusters(&mut self) {
        // Close the directory set over ancestors first so attachment
        // never targets a missing parent.
        let mut dirs: Vec<RelPath> = self.cluster_ids.keys().cloned().collect();
        for dir in dirs.clone() {
            let mut ancestor = dir.parent();
            while !ancestor.is_root() && !self.cluster_ids.contains_key(&ancestor) {
                self.cluster_for(&ancestor);
                dirs.push(ancestor.clone());
                ancestor = ancestor.parent();
            }
        }

        dirs.sort();
        for dir in dirs.iter().rev() {
            if dir.is_root() {
                continue;
            }
            let child = self.cluster_ids[dir];
            let parent = self.cluster_ids[&dir.parent()];
            self.clusters[parent.0].children.push(child);
        }
    }

    /// Freezes the builder into an immutable [`AbstractGraph`].
    pub fn finish(self) -> AbstractGraph {
        AbstractGraph {
            graph: self.graph,
            clusters: self.clusters,
        }
    }
}
