//! Rendering of abstract graphs to SVG.
//!
//! Serialization to DOT text is handled in-process; producing the final
//! vector image is delegated to the external Graphviz `dot` executable.

pub mod dot;
pub mod svg;

pub use dot::{escape_label, to_dot};
pub use svg::{append_extension, render_svg, write_dot_file, RenderError, RenderOptions, RenderResult};
