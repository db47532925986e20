//! Training-data collection
//!
//! Builds the (state, derivative) and (state, next-state) pairs a downstream
//! Koopman-operator learner consumes, on top of the spectral engine and the
//! trajectory simulator.
//!
//! # Acquisition Modes
//!
//! - **Continuous pairs** ([`DataCollector::collect_continuous`]):
//!   `Y[i] = rhs(0, X0[i], 0)`, instantaneous state/derivative pairs
//! - **Discrete pairs** ([`DataCollector::collect_one_step_discrete`]):
//!   one RK4 step of dt per row, state/next-state pairs
//! - **Raw trajectory** ([`DataCollector::collect_trajectory`]):
//!   a single sampled trajectory, no pairing
//!
//! Batches are plain `DMatrix<f64>` with one trajectory per row, shape
//! `[n_traj, N]`, directly consumable by standard linear-algebra routines
//! (SVD for mode analysis, regression for operator fitting) with no extra
//! packaging.
//!
//! # Batch Semantics
//!
//! Rows are processed independently against read-only engine parameters, so
//! with the `parallel` cargo feature the row loop runs under Rayon; output
//! row order always matches input row order exactly. Batch failures are
//! atomic: the first failing row aborts the whole call and no partial
//! result is returned.

use crate::error::SimulationError;
use crate::models::ViscousBurgers;
use crate::physics::{check_state_len, DynamicalSystem};
use crate::solver::{SimulationConfig, TrajectorySimulator};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Collects Koopman training data from a dynamical system
///
/// Holds a shared reference to the system plus the fixed time step used by
/// the discrete and trajectory modes. The collector itself is stateless
/// between calls; every call allocates fresh output buffers.
///
/// # Example
///
/// ```rust
/// use burgers_rs::collect::DataCollector;
/// use burgers_rs::models::ViscousBurgers;
/// use nalgebra::{DMatrix, DVector};
///
/// let n = 64;
/// let grid = DVector::from_fn(n, |j, _| -15.0 + 30.0 * (j as f64) / (n as f64));
/// let engine = ViscousBurgers::new(n, grid, 0.01, 0.1, 30.0).unwrap();
/// let u0 = engine.grid().map(|x| (-(x + 2.0) * (x + 2.0)).exp());
///
/// let mut batch = DMatrix::zeros(3, n);
/// for i in 0..3 {
///     batch.row_mut(i).copy_from(&u0.transpose());
/// }
///
/// let collector = DataCollector::for_engine(&engine).unwrap();
/// let (x, y) = collector.collect_continuous(&batch).unwrap();
/// assert_eq!(x.shape(), (3, 64));
/// assert_eq!(y.shape(), (3, 64));
/// ```
pub struct DataCollector<'a> {
    system: &'a dyn DynamicalSystem,
    dt: f64,
    simulator: TrajectorySimulator,
}

impl<'a> DataCollector<'a> {
    /// Create a collector for `system` using time step `dt` in the discrete
    /// and trajectory modes.
    ///
    /// # Errors
    ///
    /// [`SimulationError::InvalidParameter`] for a non-positive or
    /// non-finite `dt`.
    pub fn new(system: &'a dyn DynamicalSystem, dt: f64) -> Result<Self, SimulationError> {
        if !dt.is_finite() || dt <= 0.0 {
            return Err(SimulationError::invalid(
                "dt",
                format!("time step must be positive and finite, got {}", dt),
            ));
        }
        Ok(Self {
            system,
            dt,
            simulator: TrajectorySimulator::rk4(),
        })
    }

    /// Create a collector for a Burgers engine using the engine's own time
    /// step.
    ///
    /// Equivalent to `DataCollector::new(engine, engine.dt())` without the
    /// caller threading the step through by hand, so the two cannot drift
    /// apart.
    pub fn for_engine(engine: &'a ViscousBurgers) -> Result<Self, SimulationError> {
        Self::new(engine, engine.dt())
    }

    /// Collect continuous-sense training pairs.
    ///
    /// For each row i of the `[n_traj, N]` batch, `Y[i] = rhs(0, X0[i], 0)`.
    /// Returns the untouched batch alongside the stacked derivatives, both
    /// `[n_traj, N]` with matching row order.
    pub fn collect_continuous(
        &self,
        x0: &DMatrix<f64>,
    ) -> Result<(DMatrix<f64>, DMatrix<f64>), SimulationError> {
        debug!(n_traj = x0.nrows(), "collecting continuous pairs");
        let y = self.map_rows(x0, |row, forcing| self.system.rhs(0.0, row, forcing))?;
        Ok((x0.clone(), y))
    }

    /// Collect discrete-sense training pairs.
    ///
    /// For each row, one RK4 step of size dt: `Y[i]` is the state after
    /// `self.dt`. Returns the untouched batch alongside the stacked
    /// next-states, both `[n_traj, N]` with matching row order.
    pub fn collect_one_step_discrete(
        &self,
        x0: &DMatrix<f64>,
    ) -> Result<(DMatrix<f64>, DMatrix<f64>), SimulationError> {
        debug!(n_traj = x0.nrows(), "collecting one-step discrete pairs");
        let config = SimulationConfig::new(self.dt, 1, 1);
        let y = self.map_rows(x0, |row, _forcing| {
            let result = self.simulator.simulate(self.system, row, &config)?;
            Ok(result.final_state)
        })?;
        Ok((x0.clone(), y))
    }

    /// Collect one sampled trajectory from a single initial state.
    ///
    /// Returns the `[n_int / n_sample, N]` snapshot matrix only (no
    /// pairing, no timestamps; use
    /// [`TrajectorySimulator::simulate`] directly when the times are
    /// needed).
    pub fn collect_trajectory(
        &self,
        x0: &DVector<f64>,
        n_int: usize,
        n_sample: usize,
    ) -> Result<DMatrix<f64>, SimulationError> {
        let config = SimulationConfig::new(self.dt, n_int, n_sample);
        let result = self.simulator.simulate(self.system, x0, &config)?;
        Ok(result.snapshots)
    }

    /// Apply `f` to every row of the batch and restack the results.
    ///
    /// Rows are independent; under the `parallel` feature the loop runs on
    /// the Rayon pool. Either way the output row order matches the input and
    /// the first row failure aborts the whole batch.
    fn map_rows<F>(&self, x0: &DMatrix<f64>, f: F) -> Result<DMatrix<f64>, SimulationError>
    where
        F: Fn(&DVector<f64>, &DVector<f64>) -> Result<DVector<f64>, SimulationError> + Sync,
    {
        let n = self.system.state_len();
        if x0.ncols() != n {
            return Err(SimulationError::ShapeMismatch {
                expected: n,
                actual: x0.ncols(),
            });
        }

        let n_traj = x0.nrows();
        let forcing = DVector::zeros(self.system.forcing_dim());

        #[cfg(feature = "parallel")]
        let rows: Vec<DVector<f64>> = (0..n_traj)
            .into_par_iter()
            .map(|i| f(&x0.row(i).transpose(), &forcing))
            .collect::<Result<_, _>>()?;

        #[cfg(not(feature = "parallel"))]
        let rows: Vec<DVector<f64>> = (0..n_traj)
            .map(|i| f(&x0.row(i).transpose(), &forcing))
            .collect::<Result<_, _>>()?;

        let mut y = DMatrix::zeros(n_traj, n);
        for (i, row) in rows.iter().enumerate() {
            check_state_len(row, n)?;
            y.row_mut(i).copy_from(&row.transpose());
        }
        Ok(y)
    }
}

impl std::fmt::Debug for DataCollector<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataCollector")
            .field("system", &self.system.name())
            .field("dt", &self.dt)
            .finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// dy/dt = -k * y with a poison value that fails the row on sight.
    struct DecayWithPoison {
        points: usize,
        decay_rate: f64,
        poison: f64,
    }

    impl DynamicalSystem for DecayWithPoison {
        fn state_len(&self) -> usize {
            self.points
        }

        fn rhs(
            &self,
            _t: f64,
            x: &DVector<f64>,
            _u: &DVector<f64>,
        ) -> Result<DVector<f64>, SimulationError> {
            if x.iter().any(|&v| v == self.poison) {
                return Err(SimulationError::NumericalInstability {
                    context: "poisoned row",
                    time: 0.0,
                });
            }
            Ok(x * -self.decay_rate)
        }

        fn name(&self) -> &str {
            "Decay With Poison"
        }
    }

    fn system() -> DecayWithPoison {
        DecayWithPoison {
            points: 4,
            decay_rate: 0.5,
            poison: 99.0,
        }
    }

    fn batch(values: &[f64]) -> DMatrix<f64> {
        DMatrix::from_fn(values.len(), 4, |i, j| values[i] + j as f64 * 0.1)
    }

    #[test]
    fn test_new_rejects_non_positive_dt() {
        let system = system();
        assert!(DataCollector::new(&system, 0.0).is_err());
        assert!(DataCollector::new(&system, -1.0).is_err());
        assert!(DataCollector::new(&system, f64::INFINITY).is_err());
    }

    #[test]
    fn test_for_engine_uses_engine_time_step() {
        let n = 8;
        let dt = 0.025;
        let grid = DVector::from_fn(n, |j, _| 2.0 * std::f64::consts::PI * (j as f64) / (n as f64));
        let engine = ViscousBurgers::with_defaults(n, grid, dt).unwrap();

        let from_engine = DataCollector::for_engine(&engine).unwrap();
        let by_hand = DataCollector::new(&engine, dt).unwrap();

        let x0 = DMatrix::from_element(2, n, 0.5);
        let (_, y_engine) = from_engine.collect_one_step_discrete(&x0).unwrap();
        let (_, y_hand) = by_hand.collect_one_step_discrete(&x0).unwrap();
        assert_eq!(y_engine, y_hand);
    }

    #[test]
    fn test_continuous_shapes_and_row_order() {
        let system = system();
        let collector = DataCollector::new(&system, 0.1).unwrap();
        let x0 = batch(&[1.0, 2.0, 3.0]);

        let (x, y) = collector.collect_continuous(&x0).unwrap();

        assert_eq!(x, x0);
        assert_eq!(y.shape(), (3, 4));
        // Row i of Y must be -k times row i of X0, in the same order.
        for i in 0..3 {
            for j in 0..4 {
                assert!((y[(i, j)] + 0.5 * x0[(i, j)]).abs() < 1e-14);
            }
        }
    }

    #[test]
    fn test_discrete_matches_analytical_one_step() {
        let system = system();
        let dt = 0.01;
        let collector = DataCollector::new(&system, dt).unwrap();
        let x0 = batch(&[1.0, 2.0]);

        let (_, y) = collector.collect_one_step_discrete(&x0).unwrap();

        // One RK4 step of dy/dt = -k*y is exp(-k*dt) to machine-level error.
        let factor = (-0.5 * dt).exp();
        for i in 0..2 {
            for j in 0..4 {
                assert!((y[(i, j)] - factor * x0[(i, j)]).abs() < 1e-12);
            }
        }
    }

    #[test]
    fn test_trajectory_returns_snapshots_only() {
        let system = system();
        let collector = DataCollector::new(&system, 0.1).unwrap();
        let x0 = DVector::from_element(4, 1.0);

        let snapshots = collector.collect_trajectory(&x0, 10, 5).unwrap();
        assert_eq!(snapshots.shape(), (2, 4));
    }

    #[test]
    fn test_batch_rejects_wrong_column_count() {
        let system = system();
        let collector = DataCollector::new(&system, 0.1).unwrap();
        let x0 = DMatrix::zeros(2, 3);

        assert!(matches!(
            collector.collect_continuous(&x0),
            Err(SimulationError::ShapeMismatch {
                expected: 4,
                actual: 3
            })
        ));
    }

    #[test]
    fn test_batch_failure_is_atomic() {
        let system = system();
        let collector = DataCollector::new(&system, 0.1).unwrap();

        // Second row carries the poison value: the whole batch must fail,
        // no partial result.
        let mut x0 = batch(&[1.0, 2.0, 3.0]);
        x0[(1, 0)] = 99.0;

        assert!(matches!(
            collector.collect_continuous(&x0),
            Err(SimulationError::NumericalInstability { .. })
        ));
        assert!(collector.collect_one_step_discrete(&x0).is_err());
    }

    #[test]
    fn test_empty_batch_yields_empty_pairs() {
        let system = system();
        let collector = DataCollector::new(&system, 0.1).unwrap();
        let x0 = DMatrix::zeros(0, 4);

        let (x, y) = collector.collect_continuous(&x0).unwrap();
        assert_eq!(x.nrows(), 0);
        assert_eq!(y.nrows(), 0);
        assert_eq!(y.ncols(), 4);
    }
}
