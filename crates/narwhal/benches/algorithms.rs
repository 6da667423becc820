use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use narwhal::{Graph, GraphOptions, WeightedQuery};
use std::hint::black_box;
use std::time::Duration;

#[derive(Debug, Clone)]
struct GraphSpec {
    directed: bool,
    vertices: usize,
    edges: Vec<(usize, usize, i64)>,
}

impl GraphSpec {
    fn build(&self) -> Graph<usize, i64> {
        let mut g = Graph::new(GraphOptions {
            weighted: true,
            directed: self.directed,
            ..Default::default()
        });
        for v in 0..self.vertices {
            g.add(v);
        }
        for &(from, to, weight) in &self.edges {
            g.connect(&from, &to, Some(weight));
        }
        g
    }
}

/// A spine plus forward chords, so every vertex is reachable from 0.
fn build_spec(vertices: usize, fanout: usize, directed: bool) -> GraphSpec {
    let mut edges = Vec::new();
    for i in 0..vertices.saturating_sub(1) {
        edges.push((i, i + 1, 5));
    }
    for i in 0..vertices {
        for k in 2..=(fanout + 1) {
            let to = i + k * k;
            if to >= vertices {
                break;
            }
            edges.push((i, to, ((i * 31 + k * 17) % 23 + 1) as i64));
        }
    }
    GraphSpec {
        directed,
        vertices,
        edges,
    }
}

fn bench_shortest_paths(c: &mut Criterion) {
    let mut group = c.benchmark_group("shortest_paths");
    group.measurement_time(Duration::from_secs(5));

    for (name, vertices, fanout) in [("v200_f3", 200usize, 3usize), ("v1000_f4", 1000, 4)] {
        let g = build_spec(vertices, fanout, true).build();
        let last = vertices - 1;
        group.bench_with_input(BenchmarkId::new("dijkstra", name), &g, |b, g| {
            b.iter(|| black_box(g.short_path_weighted(WeightedQuery::new(&0).to(&last))))
        });
        group.bench_with_input(BenchmarkId::new("bellman_ford_all", name), &g, |b, g| {
            b.iter(|| black_box(g.bellman_ford_all(&0)))
        });
        group.bench_with_input(BenchmarkId::new("short_paths", name), &g, |b, g| {
            b.iter(|| black_box(g.short_paths(&0)))
        });
    }

    group.finish();
}

fn bench_structure(c: &mut Criterion) {
    let mut group = c.benchmark_group("structure");
    group.measurement_time(Duration::from_secs(5));

    for (name, vertices, fanout) in [("v500_f3", 500usize, 3usize), ("v2000_f4", 2000, 4)] {
        let directed = build_spec(vertices, fanout, true).build();
        group.bench_with_input(BenchmarkId::new("scc", name), &directed, |b, g| {
            b.iter(|| black_box(g.scc().len()))
        });
        group.bench_with_input(BenchmarkId::new("topological_sort", name), &directed, |b, g| {
            b.iter(|| black_box(g.topological_sort().len()))
        });

        let undirected = build_spec(vertices, fanout, false).build();
        group.bench_with_input(BenchmarkId::new("mst_prim", name), &undirected, |b, g| {
            b.iter(|| black_box(g.mst_prim().len()))
        });
        group.bench_with_input(BenchmarkId::new("mst_kruskal", name), &undirected, |b, g| {
            b.iter(|| black_box(g.mst_kruskal().len()))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_shortest_paths, bench_structure);
criterion_main!(benches);
