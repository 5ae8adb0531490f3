//! Graph construction for import dependency visualization.
//!
//! This module turns a normalized [`ImportGraph`] into rendering-ready
//! [`AbstractGraph`] descriptions at two granularities:
//!
//! - [`build_dir_graph`] aggregates imports to directory level with
//!   per-pair edge deduplication.
//! - [`build_file_graph`] keeps file granularity, with optional directory
//!   clustering and an optional crossing-only filter.
//!
//! # Example
//!
//! ```rust
//! use modgraph::graph::{build_dir_graph, build_file_graph, FileGraphOptions, ImportGraph};
//!
//! let imports = ImportGraph::from_entries([
//!     ("a/x.py", vec!["a/y.py"]),
//!     ("b/z.py", vec!["a/x.py"]),
//! ]);
//!
//! let dirs = build_dir_graph(&imports);
//! assert_eq!(dirs.node_count(), 2);
//!
//! let files = build_file_graph(&imports, FileGraphOptions::default());
//! assert_eq!(files.node_count(), 3);
//! ```

mod abstract_graph;
mod dir_graph;
mod file_graph;
mod import_graph;
mod path;

pub use abstract_graph::{AbstractGraph, Cluster, ClusterId, GraphBuilder};
pub use dir_graph::build_dir_graph;
pub use file_graph::{build_file_graph, FileGraphOptions};
pub use import_graph::ImportGraph;
pub use path::RelPath;
