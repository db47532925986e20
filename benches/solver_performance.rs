//! Performance benchmarks for the spectral engine and time steppers
//!
//! # What We're Measuring
//!
//! 1. **Right-hand side evaluation**: one full pseudo-spectral evaluation
//!    (two forward FFTs, two inverse FFTs, dealiasing) at several grid
//!    resolutions. FFT cost is O(N log N), so doubling N should slightly
//!    more than double the time.
//!
//! 2. **Euler vs RK4 trajectories**: the same Burgers problem integrated
//!    with both steppers. RK4 does 4 rhs evaluations per step against
//!    Euler's 1, so a ratio near 4.0 means stepper overhead is negligible
//!    next to the FFT work.
//!
//! # Running Benchmarks
//!
//! ```bash
//! # Run all benchmarks
//! cargo bench --bench solver_performance
//!
//! # Only the rhs scaling group
//! cargo bench --bench solver_performance rhs
//!
//! # Only the stepper comparison
//! cargo bench --bench solver_performance comparison
//! ```

use burgers_rs::models::ViscousBurgers;
use burgers_rs::physics::DynamicalSystem;
use burgers_rs::solver::{ForwardEuler, Rk4, SimulationConfig, TrajectorySimulator};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, SamplingMode};
use nalgebra::DVector;
use std::hint::black_box;

// =================================================================================================
// Setup Helpers
// =================================================================================================

fn make_engine(n: usize) -> ViscousBurgers {
    let grid = DVector::from_fn(n, |j, _| -15.0 + 30.0 * (j as f64) / (n as f64));
    ViscousBurgers::new(n, grid, 0.01, 0.1, 30.0).unwrap()
}

fn gaussian_pulse(engine: &ViscousBurgers) -> DVector<f64> {
    engine.grid().map(|x| (-(x + 2.0) * (x + 2.0)).exp())
}

// =================================================================================================
// Benchmark Functions
// =================================================================================================

/// Scaling of a single rhs evaluation with grid resolution
///
/// Dominated by the four FFT passes, so expect O(N log N) growth.
fn benchmark_rhs_evaluation(c: &mut Criterion) {
    let mut group = c.benchmark_group("Spectral RHS Evaluation");

    for n in [128usize, 256, 512].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(n), n, |b, &n| {
            let engine = make_engine(n);
            let u0 = gaussian_pulse(&engine);
            let forcing = DVector::zeros(1);

            b.iter(|| {
                engine
                    .rhs(black_box(0.0), black_box(&u0), black_box(&forcing))
                    .unwrap()
            });
        });
    }

    group.finish();
}

/// Direct comparison between Euler and RK4 on the same Burgers problem
///
/// 256 grid points, 100 steps of dt = 0.01, sampling every 10th step.
/// The expected time ratio is close to 4.0 (rhs evaluations per step).
fn benchmark_stepper_comparison(c: &mut Criterion) {
    let mut group = c.benchmark_group("Stepper Comparison");
    group.sampling_mode(SamplingMode::Flat);

    let n = 256;
    let config = SimulationConfig::new(0.01, 100, 10);

    {
        let engine = make_engine(n);
        let u0 = gaussian_pulse(&engine);
        let simulator = TrajectorySimulator::new(Box::new(ForwardEuler::new()));

        group.bench_function("Forward Euler 256 points & 100 steps", |b| {
            b.iter(|| {
                simulator
                    .simulate(black_box(&engine), black_box(&u0), black_box(&config))
                    .unwrap()
            });
        });
    }

    {
        let engine = make_engine(n);
        let u0 = gaussian_pulse(&engine);
        let simulator = TrajectorySimulator::new(Box::new(Rk4::new()));

        group.bench_function("Runge-Kutta 4 256 points & 100 steps", |b| {
            b.iter(|| {
                simulator
                    .simulate(black_box(&engine), black_box(&u0), black_box(&config))
                    .unwrap()
            });
        });
    }

    group.finish();
}

// =================================================================================================
// Criterion Configuration
// =================================================================================================

criterion_group!(
    benches,
    benchmark_rhs_evaluation,
    benchmark_stepper_comparison,
);
criterion_main!(benches);
