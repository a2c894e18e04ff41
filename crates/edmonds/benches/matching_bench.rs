//! Criterion benches for the matching entry points.
//!
//! - maximum matching on queen graphs (dense, many blossoms) and sparse G(n, p),
//! - perfect-matching search on G(n, p) with a universal vertex pair,
//! - leaf reduction on/off on trees-with-cycles style sparse graphs.
//!
//! Results live under `target/criterion`.

use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};
use edmonds::api::{
    gnp, maximum_matching, maximum_matching_with, perfect_matching, queen, GnpParams, MatchingCfg,
    ReplayToken,
};

fn bench_queen(c: &mut Criterion) {
    let mut group = c.benchmark_group("queen");
    for n in [8usize, 12, 16] {
        let g = queen(n);
        group.bench_with_input(BenchmarkId::new("maximum", n), &g, |b, g| {
            b.iter(|| maximum_matching(g))
        });
    }
    group.finish();
}

fn bench_gnp(c: &mut Criterion) {
    let mut group = c.benchmark_group("gnp");
    for (nodes, avg_degree) in [(1_000usize, 3.0f64), (10_000, 3.0), (10_000, 10.0)] {
        let params = GnpParams {
            nodes,
            edge_probability: avg_degree / nodes as f64,
        };
        let label = format!("{nodes}/d{avg_degree}");
        group.bench_function(BenchmarkId::new("maximum", &label), |b| {
            b.iter_batched(
                || gnp(params, ReplayToken { seed: 42, index: 0 }).unwrap(),
                |g| maximum_matching(&g),
                BatchSize::LargeInput,
            )
        });
        group.bench_function(BenchmarkId::new("maximum_no_leaves", &label), |b| {
            b.iter_batched(
                || gnp(params, ReplayToken { seed: 42, index: 0 }).unwrap(),
                |g| {
                    maximum_matching_with(
                        &g,
                        MatchingCfg {
                            leaf_reduction: false,
                        },
                    )
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn bench_perfect(c: &mut Criterion) {
    let mut group = c.benchmark_group("perfect");
    let params = GnpParams {
        nodes: 2_000,
        edge_probability: 0.01,
    };
    let g = gnp(params, ReplayToken { seed: 7, index: 1 })
        .unwrap()
        .with_universal_vertices(2);
    group.bench_function(BenchmarkId::new("gnp_universal", 2_002), |b| {
        b.iter(|| perfect_matching(&g).map(|e| e.len()))
    });
    group.finish();
}

criterion_group!(benches, bench_queen, bench_gnp, bench_perfect);
criterion_main!(benches);
