//! SVG rendering via the Graphviz `dot` executable.
//!
//! Writes the DOT description to `<out>.dot`, invokes `dot -Tsvg` to
//! produce `<out>.svg`, and removes the intermediate file unless the
//! caller asked to keep it.

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, ExitStatus};
use tracing::{debug, info};

use super::dot::to_dot;
use crate::graph::AbstractGraph;

/// Options controlling the rendering step.
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderOptions {
    /// Keep the intermediate `.dot` file next to the rendered SVG.
    pub keep_dotfile: bool,
}

/// Errors that can occur while producing the rendered output.
#[derive(Debug, thiserror::Error)]
pub enum RenderError {
    /// Reading or writing a file on disk failed.
    #[error("failed to write render output: {0}")]
    Io(#[from] std::io::Error),

    /// The Graphviz `dot` executable could not be spawned.
    #[error("failed to invoke graphviz `dot` (is graphviz installed?): {0}")]
    Spawn(std::io::Error),

    /// Graphviz ran but reported a failure.
    #[error("graphviz `dot` exited with {status}: {stderr}")]
    DotFailed {
        /// Exit status reported by `dot`.
        status: ExitStatus,
        /// Graphviz's own diagnostic output.
        stderr: String,
    },
}

/// Result type alias for render operations.
pub type RenderResult<T> = Result<T, RenderError>;

/// Renders `graph` as `<out>.svg`, where `out` is an extension-less base
/// path.
///
/// Returns the path of the written SVG. The intermediate `<out>.dot` file
/// is removed on success unless `options.keep_dotfile` is set; a Graphviz
/// failure leaves it in place for inspection.
pub fn render_svg(
    graph: &AbstractGraph,
    out: &Path,
    options: &RenderOptions,
) -> RenderResult<PathBuf> {
    let dot_path = append_extension(out, "dot");
    let svg_path = append_extension(out, "svg");

    write_dot_file(graph, &dot_path)?;

    let output = Command::new("dot")
        .arg("-Tsvg")
        .arg("-o")
        .arg(&svg_path)
        .arg(&dot_path)
        .output()
        .map_err(RenderError::Spawn)?;

    if !output.status.success() {
        return Err(RenderError::DotFailed {
            status: output.status,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    if !options.keep_dotfile {
        fs::remove_file(&dot_path)?;
    }

    info!(out = %svg_path.display(), "rendered graph");
    Ok(svg_path)
}

/// Serializes `graph` and writes the DOT text to `path`.
pub fn write_dot_file(graph: &AbstractGraph, path: &Path) -> RenderResult<()> {
    let dot = to_dot(graph);
    fs::write(path, dot)?;
    debug!(path = %path.display(), "wrote dot file");
    Ok(())
}

/// Appends `ext` to a path without replacing an existing suffix, so the
/// directory graph's `graph.dirs` base becomes `graph.dirs.svg` rather
/// than `graph.svg`.
pub fn append_extension(path: &Path, ext: &str) -> PathBuf {
    let mut name = OsString::from(path.as_os_str());
    name.push(".");
    name.push(ext);
    PathBuf::from(name)
}
