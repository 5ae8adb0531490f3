//! Import graph acquisition.
//!
//! The raw file-to-file import edges come from an external static
//! analyzer, treated as an opaque collaborator: it is invoked once per run
//! and must print a JSON mapping from file path to imported file paths.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use modgraph::analyzer::{normalize, run_analyzer};
//!
//! let root = std::fs::canonicalize("my-project")?;
//! let raw = run_analyzer(&root)?;
//! let imports = normalize(&raw, &root, &[])?;
//! println!("{} importers", imports.importer_count());
//! ```

pub mod normalize;
pub mod ruff;

pub use normalize::{normalize, NormalizeError, NormalizeResult};
pub use ruff::{parse_output, run_analyzer, AnalyzerError, AnalyzerResult, RawImportMap};
