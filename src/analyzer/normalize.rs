//! Path normalization of raw analyzer output.
//!
//! Turns the analyzer's (typically absolute) path strings into paths
//! relative to the project root and applies the exclusion filter, yielding
//! the immutable [`ImportGraph`] both builders consume.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::ruff::RawImportMap;
use crate::graph::{ImportGraph, RelPath};

/// Errors that can occur during path normalization.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// An analyzer path does not resolve to a descendant of the project
    /// root. This indicates a root/analyzer mismatch; no partial recovery
    /// is attempted.
    #[error("analyzer path `{path}` is not under project root `{root}`")]
    OutsideRoot {
        /// The offending path as reported by the analyzer.
        path: PathBuf,
        /// The project root the paths were relativized against.
        root: PathBuf,
    },
}

/// Result type alias for normalization.
pub type NormalizeResult<T> = Result<T, NormalizeError>;

/// Normalizes raw analyzer output against `root`.
///
/// Every path is relativized to `root`; a path outside the root is a fatal
/// [`NormalizeError::OutsideRoot`]. Importer entries whose path is equal to
/// or nested under any `exclude` prefix are dropped wholesale.
///
/// Only the importer side is filtered: a file under an excluded prefix
/// that is imported by non-excluded code stays visible as an edge target,
/// so the graph still shows what the rest of the project depends on.
pub fn normalize(
    raw: &RawImportMap,
    root: &Path,
    exclude: &[RelPath],
) -> NormalizeResult<ImportGraph> {
    let mut edges: BTreeMap<RelPath, Vec<RelPath>> = BTreeMap::new();

    for (importer, imports) in raw.entries() {
        let importer = relativize(Path::new(importer), root)?;
        if exclude.iter().any(|prefix| importer.is_under(prefix)) {
            continue;
        }

        let imports = imports
            .iter()
            .map(|imported| relativize(Path::new(imported), root))
            .collect::<NormalizeResult<Vec<_>>>()?;
        edges.insert(importer, imports);
    }

    let graph = ImportGraph::new(edges);
    debug!(
        importers = graph.importer_count(),
        edges = graph.edge_count(),
        "normalized import graph"
    );
    Ok(graph)
}

fn relativize(path: &Path, root: &Path) -> NormalizeResult<RelPath> {
    path.strip_prefix(root)
        .map(RelPath::from)
        .map_err(|_| NormalizeError::OutsideRoot {
            path: path.to_path_buf(),
            root: root.to_path_buf(),
        })
}
