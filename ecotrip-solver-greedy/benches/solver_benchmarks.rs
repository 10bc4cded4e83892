//! Criterion benchmarks for the greedy route solver.
//!
//! Measures ordering time across candidate counts around the target
//! scale (tens of stops). Run with:
//! ```bash
//! cargo bench --package ecotrip-solver-greedy
//! ```

#![allow(missing_docs, reason = "criterion macros generate undocumented items")]
#![expect(
    clippy::expect_used,
    reason = "benchmark setup uses expect on fixed parameters"
)]

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use ecotrip_core::test_support::{SAMPLE_ORIGIN, place_at};
use ecotrip_core::{Place, RouteSolver};
use ecotrip_solver_greedy::GreedySolver;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};

/// Deterministic seed so runs are comparable.
const BENCHMARK_SEED: u64 = 0x5eed;

/// Candidate counts to benchmark, bracketing the target scale.
const PROBLEM_SIZES: &[usize] = &[10, 20, 40];

/// Generate `count` places scattered normally (sigma 8 km) around the
/// fixture origin.
fn generate_scattered_places(count: usize, seed: u64) -> Vec<Place> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let spread = Normal::new(0.0_f64, 8.0).expect("valid distribution parameters");
    (0..count)
        .map(|i| {
            let north = spread.sample(&mut rng);
            let east = spread.sample(&mut rng);
            place_at(&format!("bench-{i}"), "viewpoint", north, east)
        })
        .collect()
}

fn bench_order(c: &mut Criterion) {
    let solver = GreedySolver::new();
    let mut group = c.benchmark_group("greedy_order");
    for &size in PROBLEM_SIZES {
        let places = generate_scattered_places(size, BENCHMARK_SEED);
        group.bench_with_input(BenchmarkId::from_parameter(size), &places, |b, places| {
            b.iter(|| solver.order(SAMPLE_ORIGIN, places));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_order);
criterion_main!(benches);
