use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use u_assign::graph::CompatibilityGraph;
use u_assign::matching::HopcroftKarp;
use u_assign::models::{Job, Worker};

fn pool(size: usize, capabilities: usize, seed: u64) -> (Vec<Worker>, Vec<Job>) {
    let mut rng = SmallRng::seed_from_u64(seed);
    let workers = (0..size)
        .map(|i| {
            let held = rng.random_range(1..=4);
            Worker::new(format!("E{i}"))
                .with_capabilities((0..held).map(|_| format!("c{}", rng.random_range(0..capabilities))))
        })
        .collect();
    let jobs = (0..size)
        .map(|i| Job::new(format!("T{i}"), format!("c{}", rng.random_range(0..capabilities))))
        .collect();
    (workers, jobs)
}

fn bench_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("graph_build");
    for size in [1_000, 10_000] {
        let (workers, jobs) = pool(size, 50, 1);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| CompatibilityGraph::build(black_box(&workers), black_box(&jobs)))
        });
    }
    group.finish();
}

fn bench_solve(c: &mut Criterion) {
    let mut group = c.benchmark_group("hopcroft_karp");
    for size in [1_000, 10_000] {
        let (workers, jobs) = pool(size, 50, 2);
        let graph = CompatibilityGraph::build(&workers, &jobs);
        group.bench_with_input(BenchmarkId::from_parameter(size), &graph, |b, g| {
            b.iter(|| HopcroftKarp::new(black_box(g)).solve())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build, bench_solve);
criterion_main!(benches);
