//! modgraph - import dependency graph visualizer
//!
//! This crate extracts a file-to-file import graph from an external
//! analyzer, aggregates it by directory or by file, and renders the
//! result as SVG diagrams for auditing architectural boundaries.

pub mod analyzer;
pub mod graph;
pub mod render;
