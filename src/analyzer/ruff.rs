//! Front-end for the external import analyzer.
//!
//! The raw import edges come from `ruff analyze graph <root>`, which prints
//! a JSON object mapping each source file to the list of files it imports.
//! This module invokes the tool and decodes its output; it makes no attempt
//! to validate that the analysis itself is correct.

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::process::{Command, ExitStatus};
use tracing::debug;

/// Raw import mapping as decoded from the analyzer's JSON output.
///
/// Keys and values are the analyzer's own path strings, typically absolute;
/// the normalizer turns them into root-relative paths.
#[derive(Debug, Clone, Default, Deserialize, PartialEq, Eq)]
#[serde(transparent)]
pub struct RawImportMap(BTreeMap<String, Vec<String>>);

impl RawImportMap {
    /// Iterates over `(importer, imports)` entries.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0
            .iter()
            .map(|(importer, imports)| (importer.as_str(), imports.as_slice()))
    }

    /// Returns the number of importer entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the analyzer reported no importers.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<BTreeMap<String, Vec<String>>> for RawImportMap {
    fn from(map: BTreeMap<String, Vec<String>>) -> Self {
        Self(map)
    }
}

/// Errors that can occur while obtaining the raw import graph.
#[derive(Debug, thiserror::Error)]
pub enum AnalyzerError {
    /// The analyzer binary could not be spawned at all.
    #[error("failed to invoke `ruff analyze graph`: {0}")]
    Invocation(#[from] std::io::Error),

    /// The analyzer ran but exited non-zero.
    #[error("`ruff analyze graph` exited with {status}: {stderr}")]
    Failed {
        /// Exit status reported by the analyzer process.
        status: ExitStatus,
        /// The analyzer's own diagnostic output.
        stderr: String,
    },

    /// The analyzer's stdout was not a path-to-paths JSON mapping.
    #[error("analyzer output is not a file-to-imports JSON mapping: {0}")]
    MalformedOutput(#[from] serde_json::Error),
}

/// Result type alias for analyzer operations.
pub type AnalyzerResult<T> = Result<T, AnalyzerError>;

/// Runs the analyzer over `root` and decodes its output.
///
/// Invoked once per run. A non-zero exit or undecodable output is fatal;
/// the analyzer's stderr is carried in the error for the user.
pub fn run_analyzer(root: &Path) -> AnalyzerResult<RawImportMap> {
    let output = Command::new("ruff")
        .args(["analyze", "graph"])
        .arg(root)
        .output()?;

    if !output.status.success() {
        return Err(AnalyzerError::Failed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    let raw = parse_output(&output.stdout)?;
    debug!(importers = raw.len(), "decoded analyzer output");
    Ok(raw)
}

/// Decodes analyzer stdout into a [`RawImportMap`].
pub fn parse_output(bytes: &[u8]) -> AnalyzerResult<RawImportMap> {
    Ok(serde_json::from_slice(bytes)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_output_valid() {
        let json = br#"{"/p/a/x.py": ["/p/a/y.py", "/p/b/z.py"], "/p/b/z.py": []}"#;
        let raw = parse_output(json).unwrap();
        assert_eq!(raw.len(), 2);

        let entries: Vec<_> = raw.entries().collect();
        assert_eq!(entries[0].0, "/p/a/x.py");
        assert_eq!(entries[0].1, ["/p/a/y.py", "/p/b/z.py"]);
        assert_eq!(entries[1].1.len(), 0);
    }

    #[test]
    fn test_parse_output_empty_mapping() {
        let raw = parse_output(b"{}").unwrap();
        assert!(raw.is_empty());
    }

    #[test]
    fn test_parse_output_invalid_json() {
        let result = parse_output(b"not json");
        assert!(matches!(
            result.unwrap_err(),
            AnalyzerError::MalformedOutput(_)
        ));
    }

    #[test]
    fn test_parse_output_wrong_shape() {
        // Values must be arrays of strings, not scalars.
        let result = parse_output(br#"{"a.py": "b.py"}"#);
        assert!(matches!(
            result.unwrap_err(),
            AnalyzerError::MalformedOutput(_)
        ));
    }

    #[test]
    fn test_malformed_output_display() {
        let json_err = parse_output(b"[1, 2]").unwrap_err();
        assert!(json_err
            .to_string()
            .contains("not a file-to-imports JSON mapping"));
    }
}
