//! Propagation and Coverage Benchmarks
//!
//! Run with: cargo bench -p ruranet-core --bench coverage_bench

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::time::Duration;

use ruranet_core::prelude::*;
use ruranet_core::propagation::tr38901::SiteGeometry;
use ruranet_core::propagation::{cost231, mmwave, okumura_hata, tr38901};

fn hata_tx(radius_km: f64) -> TransmitterConfig {
    TransmitterConfig::new(
        Technology::Gsm,
        PropagationModelId::OkumuraHata,
        900.0,
        50.0,
        43.0,
        AreaType::Urban,
        GeoPoint::new(-7.6, 33.57),
        radius_km,
    )
}

// ============================================================================
// Model Formula Benchmarks
// ============================================================================

fn bench_path_loss(c: &mut Criterion) {
    let mut group = c.benchmark_group("path_loss");

    group.bench_function("okumura_hata", |b| {
        b.iter(|| {
            okumura_hata::path_loss(
                black_box(900.0),
                black_box(50.0),
                1.5,
                black_box(5.0),
                AreaType::Urban,
            )
        })
    });

    group.bench_function("cost231", |b| {
        b.iter(|| {
            cost231::path_loss(
                black_box(1800.0),
                black_box(50.0),
                1.5,
                black_box(5.0),
                AreaType::Suburban,
            )
        })
    });

    let geometry = SiteGeometry::default();
    for scenario in Scenario::ALL {
        group.bench_with_input(
            BenchmarkId::new("tr38901_nlos", scenario),
            &scenario,
            |b, &scenario| {
                b.iter(|| {
                    tr38901::path_loss(
                        black_box(3.5e9),
                        black_box(80.0),
                        scenario,
                        LosCondition::Nlos,
                        &geometry,
                    )
                })
            },
        );
    }

    group.bench_function("mmwave", |b| {
        b.iter(|| mmwave::path_loss(black_box(28e9), black_box(100.0), LosCondition::Nlos, 0.1))
    });

    group.finish();
}

// ============================================================================
// Radius Solver Benchmarks
// ============================================================================

fn bench_coverage_radius(c: &mut Criterion) {
    let mut group = c.benchmark_group("coverage_radius");

    let model = ModelSelector::bind(&hata_tx(5.0)).unwrap();
    for tolerance in [0.01, 0.001, 0.0001].iter() {
        let bracket = model.radius_bounds().with_tolerance(*tolerance);
        group.bench_with_input(
            BenchmarkId::new("hata_bisection", tolerance),
            &bracket,
            |b, &bracket| {
                b.iter(|| {
                    ruranet_core::radius::solve(model.as_fn(), black_box(43.0), -100.0, bracket)
                })
            },
        );
    }

    group.finish();
}

// ============================================================================
// Grid Sweep Benchmarks
// ============================================================================

fn bench_grid_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("grid_sweep");
    group.measurement_time(Duration::from_secs(10));

    for radius_km in [1.0, 2.5, 5.0].iter() {
        let tx = hata_tx(*radius_km);
        let model = ModelSelector::bind(&tx).unwrap();
        let sequential = CoverageEvaluator::new(
            model,
            &tx,
            &CoverageConfig {
                parallel: false,
                ..Default::default()
            },
        )
        .unwrap();
        let parallel = CoverageEvaluator::new(
            model,
            &tx,
            &CoverageConfig {
                parallel: true,
                ..Default::default()
            },
        )
        .unwrap();

        group.throughput(Throughput::Elements(sequential.sampler().len() as u64));

        group.bench_with_input(
            BenchmarkId::new("sequential", radius_km),
            &sequential,
            |b, evaluator| b.iter(|| evaluator.evaluate()),
        );

        group.bench_with_input(
            BenchmarkId::new("parallel", radius_km),
            &parallel,
            |b, evaluator| b.iter(|| evaluator.evaluate()),
        );
    }

    group.finish();
}

criterion_group!(benches, bench_path_loss, bench_coverage_radius, bench_grid_sweep);
criterion_main!(benches);
