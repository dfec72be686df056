//! Criterion benchmarks for the recompute cycle
//!
//! Run with: cargo bench -p clt_demo_core

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use clt_demo_core::population::generate_population;
use clt_demo_core::sampling::sampling_distribution;
use clt_demo_core::{DemoConfig, DemoController, UpdateTrigger};
use rand::SeedableRng;
use rand::rngs::SmallRng;

fn bench_full_update(c: &mut Criterion) {
    let mut controller =
        DemoController::with_seed(DemoConfig::default(), 42).expect("default config is valid");

    c.bench_function("update_default_config", |b| {
        b.iter(|| {
            let snapshot = controller
                .update(black_box(UpdateTrigger::MeanChanged))
                .expect("update succeeds");
            black_box(snapshot.generation)
        })
    });
}

fn bench_sampling_distribution(c: &mut Criterion) {
    let mut rng = SmallRng::seed_from_u64(42);
    let population = generate_population(0.0, 1.0, 10_000, &mut rng).expect("valid parameters");

    let mut group = c.benchmark_group("sampling_distribution");
    for sample_size in [10, 100, 1_000] {
        group.bench_with_input(
            BenchmarkId::from_parameter(sample_size),
            &sample_size,
            |b, &n| b.iter(|| sampling_distribution(black_box(&population), n, 1_000, &mut rng)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_full_update, bench_sampling_distribution);
criterion_main!(benches);
