//! Criterion benchmarks for the exact and greedy solvers.
//!
//! Runs both on the fixed scenarios and on seeded random instances of
//! growing size.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use interval_cover::exact::{ExactConfig, ExactRunner};
use interval_cover::greedy::{GreedyConfig, GreedyRunner};
use interval_cover::ordering::IntervalOrder;
use interval_cover::scenario::{RandomScenario, Scenario};

fn bench_exact_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("exact_fixed");

    for scenario in Scenario::ALL {
        let problem = scenario.problem();
        for order in [IntervalOrder::LongestFirst, IntervalOrder::Input] {
            let config = ExactConfig::default().with_interval_order(order);
            group.bench_with_input(
                BenchmarkId::new(format!("{order:?}"), scenario.name()),
                &(problem.clone(), config),
                |b, (p, c)| {
                    b.iter(|| {
                        let result = ExactRunner::run(black_box(p), black_box(c));
                        black_box(result)
                    })
                },
            );
        }
    }
    group.finish();
}

fn bench_greedy_fixed(c: &mut Criterion) {
    let mut group = c.benchmark_group("greedy_fixed");

    for scenario in Scenario::ALL {
        let problem = scenario.problem();
        let config = GreedyConfig::default();
        group.bench_with_input(
            BenchmarkId::from_parameter(scenario.name()),
            &(problem, config),
            |b, (p, c)| {
                b.iter(|| {
                    let result = GreedyRunner::run(black_box(p), black_box(c));
                    black_box(result)
                })
            },
        );
    }
    group.finish();
}

fn bench_random(c: &mut Criterion) {
    let mut group = c.benchmark_group("random");
    group.sample_size(10);

    for (points, intervals) in [(20usize, 12usize), (40, 16), (60, 20)] {
        let problem = RandomScenario::large()
            .with_points(points)
            .with_intervals(intervals)
            .with_positions(0, 300)
            .generate()
            .expect("valid preset");
        let label = format!("p{points}_i{intervals}");

        group.bench_with_input(BenchmarkId::new("exact", &label), &problem, |b, p| {
            b.iter(|| black_box(ExactRunner::run(black_box(p), &ExactConfig::default())))
        });
        group.bench_with_input(BenchmarkId::new("greedy", &label), &problem, |b, p| {
            b.iter(|| black_box(GreedyRunner::run(black_box(p), &GreedyConfig::default())))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_exact_fixed, bench_greedy_fixed, bench_random);
criterion_main!(benches);
