use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use tracing::info;

use modgraph::analyzer::{normalize, run_analyzer};
use modgraph::graph::{build_dir_graph, build_file_graph, FileGraphOptions, RelPath};
use modgraph::render::{append_extension, render_svg, RenderOptions};

#[derive(Parser)]
#[command(name = "modgraph")]
#[command(version = "0.1.0")]
#[command(about = "Render module import dependencies as SVG graphs", long_about = None)]
struct Cli {
    /// Project root directory to analyze
    root: PathBuf,

    /// Output base path without extension; produces `<out>.svg` and
    /// `<out>.dirs.svg`
    out: PathBuf,

    /// Group file nodes into clusters by directory (default)
    #[arg(long, overrides_with = "no_show_clusters")]
    show_clusters: bool,
    /// Disable directory clustering in the file graph
    #[arg(long, overrides_with = "show_clusters")]
    no_show_clusters: bool,

    /// Only keep imports that cross a directory boundary
    #[arg(long, overrides_with = "no_only_crossing")]
    only_crossing: bool,
    /// Keep same-directory imports as well (default)
    #[arg(long, overrides_with = "only_crossing")]
    no_only_crossing: bool,

    /// Skip importers under this root-relative prefix (repeatable)
    #[arg(long, value_name = "PATH")]
    exclude: Vec<PathBuf>,

    /// Keep the intermediate `.dot` files next to the rendered SVGs
    #[arg(long, overrides_with = "no_keep_dotfile")]
    keep_dotfile: bool,
    /// Remove the intermediate `.dot` files (default)
    #[arg(long, overrides_with = "keep_dotfile")]
    no_keep_dotfile: bool,
}

impl Cli {
    // Paired flags override each other; the lone survivor decides.

    /// Cluster file nodes by directory. Enabled unless switched off.
    fn show_clusters(&self) -> bool {
        self.show_clusters || !self.no_show_clusters
    }

    /// Restrict output to directory-crossing imports. Off by default.
    fn only_crossing(&self) -> bool {
        self.only_crossing && !self.no_only_crossing
    }

    /// Keep intermediate `.dot` files. Off by default.
    fn keep_dotfile(&self) -> bool {
        self.keep_dotfile && !self.no_keep_dotfile
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let show_clusters = cli.show_clusters();
    let only_crossing = cli.only_crossing();
    let render_options = RenderOptions {
        keep_dotfile: cli.keep_dotfile(),
    };

    let root = std::fs::canonicalize(&cli.root)
        .with_context(|| format!("cannot resolve project root `{}`", cli.root.display()))?;

    info!(root = %root.display(), "running import analyzer");
    let raw = run_analyzer(&root)?;

    let exclude: Vec<RelPath> = cli.exclude.iter().map(RelPath::new).collect();
    let import_graph = normalize(&raw, &root, &exclude)?;

    let file_graph = build_file_graph(
        &import_graph,
        FileGraphOptions {
            show_clusters,
            only_crossing,
        },
    );
    let svg = render_svg(&file_graph, &cli.out, &render_options)
        .with_context(|| format!("rendering file graph to `{}`", cli.out.display()))?;
    println!("wrote {}", svg.display());

    let dir_graph = build_dir_graph(&import_graph);
    let dirs_out = dirs_output_base(&cli.out);
    let svg = render_svg(&dir_graph, &dirs_out, &render_options)
        .with_context(|| format!("rendering directory graph to `{}`", dirs_out.display()))?;
    println!("wrote {}", svg.display());

    Ok(())
}

/// The directory graph renders next to the file graph with a `.dirs`
/// infix: `<out>.dirs.svg`.
fn dirs_output_base(out: &Path) -> PathBuf {
    append_extension(out, "dirs")
}
