//! # SCC detector benchmarks
//!
//! Compares Tarjan and Kosaraju on synthetic link graphs:
//! - a ring of small cycles (many non-trivial components)
//! - one long cycle (deep DFS)
//!

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use wiki_scc::domain::graph::Graph;
use wiki_scc::domain::traits::SccDetector;
use wiki_scc::infrastructure::scc_kosaraju::KosarajuSccDetector;
use wiki_scc::infrastructure::scc_tarjan::TarjanSccDetector;

/// Clusters of `cluster` nodes linked in a cycle, each cluster also linking
/// forward to the next one, plus a few long-range links.
/// Deterministic structure for reproducibility.
fn clustered_graph(num_nodes: usize, cluster: usize) -> Graph {
    let mut edges = vec![Vec::new(); num_nodes];
    for (i, outs) in edges.iter_mut().enumerate() {
        let base = i - i % cluster;
        let next_in_cluster = base + (i - base + 1) % cluster;
        if next_in_cluster < num_nodes {
            outs.push(next_in_cluster);
        }
        if i % cluster == 0 && base + cluster < num_nodes {
            outs.push(base + cluster);
        }
        outs.push((i * 7919) % num_nodes); // Prime multiplier for distribution
    }
    Graph::from_adjacency(edges)
}

fn long_cycle(num_nodes: usize) -> Graph {
    Graph::from_adjacency((0..num_nodes).map(|i| vec![(i + 1) % num_nodes]).collect())
}

fn bench_detectors(c: &mut Criterion) {
    let detectors: [&dyn SccDetector; 2] = [&TarjanSccDetector, &KosarajuSccDetector];

    let mut group = c.benchmark_group("scc_clustered");
    for &size in &[10_000usize, 100_000] {
        let graph = clustered_graph(size, 8);
        group.throughput(Throughput::Elements(graph.edge_count() as u64));
        for det in detectors {
            group.bench_with_input(BenchmarkId::new(det.name(), size), &graph, |b, g| {
                b.iter(|| black_box(det.compute_scc(black_box(g))))
            });
        }
    }
    group.finish();

    let mut group = c.benchmark_group("scc_long_cycle");
    for &size in &[100_000usize] {
        let graph = long_cycle(size);
        for det in detectors {
            group.bench_with_input(BenchmarkId::new(det.name(), size), &graph, |b, g| {
                b.iter(|| black_box(det.compute_scc(black_box(g))))
            });
        }
    }
    group.finish();
}

criterion_group!(benches, bench_detectors);
criterion_main!(benches);
