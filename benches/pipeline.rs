//! Benchmarks for the junction tree pipeline.
//!
//! Run with: `cargo bench --bench pipeline`
//!
//! Inputs are layered lattice DAGs: vertex `(l, i)` feeds `(l + 1, i)` and
//! `(l + 1, i + 1)`, so every interior vertex has two parents to marry.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use junction_tree::{build_junction_tree, DirectedGraph, EliminationPolicy};

/// Lattice DAG with `layers` layers of `width` vertices.
fn lattice(layers: u32, width: u32) -> DirectedGraph<(u32, u32)> {
    let vertices: Vec<_> = (0..layers)
        .flat_map(|l| (0..width).map(move |i| (l, i)))
        .collect();
    let mut edges = Vec::new();
    for l in 0..layers.saturating_sub(1) {
        for i in 0..width {
            edges.push(((l, i), (l + 1, i)));
            if i + 1 < width {
                edges.push(((l, i), (l + 1, i + 1)));
            }
        }
    }
    DirectedGraph::new(vertices, edges).expect("lattice edges reference lattice vertices")
}

/// Benchmark the full DAG → junction tree pipeline.
fn bench_pipeline(c: &mut Criterion) {
    let mut group = c.benchmark_group("pipeline");
    let policy = EliminationPolicy::default();

    for width in [4, 8, 16, 32] {
        let dag = lattice(8, width);

        group.throughput(Throughput::Elements(dag.vertex_count() as u64));
        group.bench_with_input(BenchmarkId::new("width", width), &dag, |b, dag| {
            b.iter(|| build_junction_tree(black_box(dag), &policy).expect("pipeline"))
        });
    }

    group.finish();
}

/// Benchmark triangulation alone, caller order versus breadth-first order.
fn bench_triangulation(c: &mut Criterion) {
    let mut group = c.benchmark_group("triangulation");

    for (name, policy) in [
        ("in_order", EliminationPolicy::in_order()),
        ("bfs", EliminationPolicy::default()),
    ] {
        let moral = lattice(8, 16).moral_graph();
        group.bench_with_input(BenchmarkId::new(name, moral.vertex_count()), &moral, |b, moral| {
            b.iter(|| {
                let mut g = moral.clone();
                g.triangulate(black_box(&policy)).expect("triangulate")
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_pipeline, bench_triangulation);
criterion_main!(benches);
