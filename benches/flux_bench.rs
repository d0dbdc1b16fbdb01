//! Benchmarks for wave speeds, the central-upwind flux and the full driver.
//!
//! Run with: `cargo bench --bench flux_bench`
//!
//! Compares the serial and parallel backends (with `--features parallel`)
//! and wet against partly dry states.

use std::hint::black_box;

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use cu_swe::boundary::BoundarySet;
use cu_swe::flux::{
    central_upwind, compute_central_fluxes, compute_discontinuous_fluxes, compute_local_speeds,
    wave_speed_bounds,
};
use cu_swe::grid::{Domain, Topography};
use cu_swe::state::States;
use cu_swe::types::Extent2D;
use cu_swe::{ExecutionBackend, KernelConfig, compute_fluxes};

/// Dam break on a flat bed; `dry_fraction` of the columns start dry.
fn dam_break(n: usize, dry_fraction: f64) -> (States, Topography, BoundarySet) {
    let domain = Domain::new(n, n, Extent2D::unit_square()).unwrap();
    let topo = Topography::flat(&domain, 0.0);
    let bcs = BoundarySet::walls();
    let mut states = States::new(domain);
    let (rows, cols) = (states.domain.rows(), states.domain.cols());
    let dry_from = cols.end - (n as f64 * dry_fraction) as usize;
    let dam = cols.start + n / 2;
    for j in rows {
        for i in cols.clone() {
            states.q[[0, j, i]] = if i >= dry_from {
                0.0
            } else if i < dam {
                1.0
            } else {
                0.5
            };
        }
    }
    bcs.apply_to_states(&mut states);
    (states, topo, bcs)
}

fn bench_scalar_kernels(c: &mut Criterion) {
    let mut group = c.benchmark_group("flux_scalar");
    let depths: Vec<(f64, f64)> = (0..1000)
        .map(|i| {
            let phase = i as f64 * 0.1;
            (1.0 + 0.5 * phase.sin(), 0.3 * phase.cos())
        })
        .collect();

    group.bench_function("wave_speed_bounds", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for pair in depths.windows(2) {
                let (hm, um) = pair[0];
                let (hp, up) = pair[1];
                let (am, ap) = wave_speed_bounds(
                    black_box(hm),
                    black_box(um),
                    black_box(hp),
                    black_box(up),
                    9.81,
                );
                total += ap - am;
            }
            total
        });
    });

    group.bench_function("central_upwind", |b| {
        b.iter(|| {
            let mut total = 0.0;
            for pair in depths.windows(2) {
                total += central_upwind(
                    black_box(-3.0),
                    black_box(3.5),
                    black_box(pair[0].1),
                    black_box(pair[1].1),
                    black_box(pair[0].0),
                    black_box(pair[1].0),
                );
            }
            total
        });
    });

    group.finish();
}

fn bench_face_fluxes(c: &mut Criterion) {
    let mut group = c.benchmark_group("face_fluxes");

    for n in [64, 256] {
        for &backend in ExecutionBackend::available() {
            let config = KernelConfig::new(9.81).with_backend(backend);
            let (mut states, topo, _) = dam_break(n, 0.0);
            compute_fluxes(&mut states, &topo, &config).unwrap();
            let id = format!("{}_{}", backend, n);

            group.bench_with_input(BenchmarkId::new("local_speeds", &id), &n, |b, _| {
                b.iter(|| compute_local_speeds(&mut states.face, 9.81, backend));
            });

            group.bench_with_input(BenchmarkId::new("fluxes", &id), &n, |b, _| {
                b.iter(|| {
                    compute_discontinuous_fluxes(&mut states.face, 9.81, backend);
                    compute_central_fluxes(&mut states.face, backend);
                });
            });
        }
    }

    group.finish();
}

fn bench_driver(c: &mut Criterion) {
    let mut group = c.benchmark_group("compute_fluxes");

    for dry_fraction in [0.0, 0.25] {
        for &backend in ExecutionBackend::available() {
            let config = KernelConfig::new(9.81)
                .with_backend(backend)
                .with_finite_check(false);
            let (mut states, topo, bcs) = dam_break(256, dry_fraction);
            let id = format!("{}_dry{:.2}", backend, dry_fraction);

            group.bench_function(BenchmarkId::new("dam_break_256", id), |b| {
                b.iter(|| {
                    bcs.apply_to_states(&mut states);
                    compute_fluxes(&mut states, &topo, &config).unwrap();
                });
            });
        }
    }

    group.finish();
}

criterion_group!(benches, bench_scalar_kernels, bench_face_fluxes, bench_driver);
criterion_main!(benches);
