//! Benchmarks for graph building performance
//!
//! Exercises both builders over synthetic import graphs large enough to
//! resemble a real project tree (hundreds of files across nested
//! directories).

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use modgraph::graph::{build_dir_graph, build_file_graph, FileGraphOptions, ImportGraph, RelPath};
use std::collections::BTreeMap;

/// Create a synthetic import graph with `dirs` directories of `files_per_dir`
/// files each; every file imports a neighbor in its own directory and one
/// file in the next directory over.
fn create_import_graph(dirs: usize, files_per_dir: usize) -> ImportGraph {
    let mut edges = BTreeMap::new();

    for d in 0..dirs {
        for f in 0..files_per_dir {
            let importer = RelPath::new(format!("pkg_{}/sub/mod_{}.py", d, f));
            let local = RelPath::new(format!("pkg_{}/sub/mod_{}.py", d, (f + 1) % files_per_dir));
            let remote = RelPath::new(format!("pkg_{}/sub/mod_0.py", (d + 1) % dirs));
            edges.insert(importer, vec![local, remote]);
        }
    }

    ImportGraph::new(edges)
}

fn bench_dir_graph(c: &mut Criterion) {
    let mut group = c.benchmark_group("dir_graph");

    for size in [10, 50, 100].iter() {
        let import_graph = create_import_graph(*size, 20);

        group.bench_with_input(BenchmarkId::new("dirs", size), &import_graph, |b, g| {
            b.iter(|| black_box(build_dir_graph(g)));
        });
    }

    group.finish();
}

fn bench_file_graph_flat(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_graph_flat");

    for size in [10, 50, 100].iter() {
        let import_graph = create_import_graph(*size, 20);

        group.bench_with_input(BenchmarkId::new("dirs", size), &import_graph, |b, g| {
            b.iter(|| black_box(build_file_graph(g, FileGraphOptions::default())));
        });
    }

    group.finish();
}

fn bench_file_graph_clustered_crossing(c: &mut Criterion) {
    let mut group = c.benchmark_group("file_graph_clustered_crossing");

    let options = FileGraphOptions {
        show_clusters: true,
        only_crossing: true,
    };

    for size in [10, 50, 100].iter() {
        let import_graph = create_import_graph(*size, 20);

        group.bench_with_input(BenchmarkId::new("dirs", size), &import_graph, |b, g| {
            b.iter(|| black_box(build_file_graph(g, options)));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_dir_graph,
    bench_file_graph_flat,
    bench_file_graph_clustered_crossing
);
criterion_main!(benches);
