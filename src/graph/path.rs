//! Root-relative path handling.
//!
//! All paths flowing through the graph builders are relative to a single
//! project root. This module provides the [`RelPath`] newtype that
//! identifies files and directories after normalization.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Component, Path, PathBuf};

/// A path relative to the project root.
///
/// `RelPath` identifies both files and directories in the analyzed project.
/// The project root itself is represented by the empty path, which displays
/// as `"."` and acts as an explicit sentinel: it is its own parent and
/// contains every other path. This avoids relying on filesystem
/// self-parenting as a termination condition when walking up the tree.
///
/// Ordering is the component-wise lexicographic order of [`std::path::Path`],
/// which gives the graph builders a deterministic emission order.
///
/// # Example
///
/// ```rust
/// use modgraph::graph::RelPath;
///
/// let file = RelPath::new("a/b/x.py");
/// assert_eq!(file.parent(), RelPath::new("a/b"));
/// assert!(file.is_under(&RelPath::new("a")));
/// assert!(file.parent().parent().parent().is_root());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RelPath(PathBuf);

impl RelPath {
    /// Creates a relative path from anything path-like.
    ///
    /// `.` components are dropped, so `./b` and `b` are the same path.
    /// Component-wise comparisons like [`RelPath::is_under`] would
    /// otherwise never match a `./`-spelled prefix against a normalized
    /// path.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self(
            path.as_ref()
                .components()
                .filter(|c| !matches!(c, Component::CurDir))
                .collect(),
        )
    }

    /// Returns the root sentinel (the empty path).
    pub fn root() -> Self {
        Self(PathBuf::new())
    }

    /// Returns true if this is the project root sentinel.
    pub fn is_root(&self) -> bool {
        self.0.as_os_str().is_empty()
    }

    /// Returns the containing directory.
    ///
    /// A top-level file's parent is the root sentinel, and the root's
    /// parent is the root itself.
    pub fn parent(&self) -> RelPath {
        match self.0.parent() {
            Some(parent) => Self(parent.to_path_buf()),
            None => Self::root(),
        }
    }

    /// Returns true if this path equals `prefix` or is nested under it.
    ///
    /// Every path is under the root sentinel.
    pub fn is_under(&self, prefix: &RelPath) -> bool {
        self.0.starts_with(&prefix.0)
    }

    /// Borrows the underlying path.
    pub fn as_path(&self) -> &Path {
        &self.0
    }
}

impl From<&Path> for RelPath {
    fn from(path: &Path) -> Self {
        Self::new(path)
    }
}

impl fmt::Display for RelPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_root() {
            write!(f, ".")
        } else {
            write!(f, "{}", self.0.display())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parent_chain() {
        let file = RelPath::new("a/b/x.py");
        assert_eq!(file.parent(), RelPath::new("a/b"));
        assert_eq!(file.parent().parent(), RelPath::new("a"));
        assert!(file.parent().parent().parent().is_root());
    }

    #[test]
    fn test_root_is_own_parent() {
        let root = RelPath::root();
        assert!(root.is_root());
        assert_eq!(root.parent(), root);
    }

    #[test]
    fn test_top_level_file_parent_is_root() {
        assert!(RelPath::new("x.py").parent().is_root());
    }

    #[test]
    fn test_is_under() {
        let file = RelPath::new("a/b/x.py");
        assert!(file.is_under(&RelPath::new("a")));
        assert!(file.is_under(&RelPath::new("a/b")));
        assert!(file.is_under(&RelPath::new("a/b/x.py"))); // equality counts
        assert!(file.is_under(&RelPath::root()));
        assert!(!file.is_under(&RelPath::new("a/c")));
        // prefix match is per-component, not per-character
        assert!(!RelPath::new("ab/x.py").is_under(&RelPath::new("a")));
    }

    #[test]
    fn test_curdir_components_are_dropped() {
        assert_eq!(RelPath::new("./b"), RelPath::new("b"));
        assert_eq!(RelPath::new("a/./b"), RelPath::new("a/b"));
        assert!(RelPath::new(".").is_root());
        assert!(RelPath::new("b/z.py").is_under(&RelPath::new("./b")));
    }

    #[test]
    fn test_ordering_is_componentwise() {
        let mut paths = vec![
            RelPath::new("b/z.py"),
            RelPath::new("a/y.py"),
            RelPath::new("a/x.py"),
        ];
        paths.sort();
        assert_eq!(
            paths,
            vec![
                RelPath::new("a/x.py"),
                RelPath::new("a/y.py"),
                RelPath::new("b/z.py"),
            ]
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(RelPath::new("a/x.py").to_string(), "a/x.py");
        assert_eq!(RelPath::root().to_string(), ".");
    }
}
