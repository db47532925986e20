//! Trajectory simulation
//!
//! Drives repeated stepper calls over a [`DynamicalSystem`], sampling the
//! state at a fixed stride. This is the single integration loop the whole
//! crate runs on; the data collectors in [`collect`](crate::collect) reuse
//! it for both one-step and long-trajectory acquisition.

use crate::error::SimulationError;
use crate::physics::{check_state_len, DynamicalSystem};
use crate::solver::{validate_state, Rk4, SimulationConfig, SimulationResult, TimeStepper};
use nalgebra::{DMatrix, DVector};
use tracing::debug;

/// Fixed-step trajectory simulator
///
/// Owns a [`TimeStepper`] and applies it `n_int` times with the system's
/// forcing held at the zero vector, emitting a copy of the state every
/// `n_sample` steps. Each `simulate` call allocates fresh output buffers;
/// nothing is shared or reused across calls.
///
/// # Example
///
/// ```rust
/// use burgers_rs::models::ViscousBurgers;
/// use burgers_rs::solver::{SimulationConfig, TrajectorySimulator};
/// use nalgebra::DVector;
///
/// let n = 64;
/// let grid = DVector::from_fn(n, |j, _| -15.0 + 30.0 * (j as f64) / (n as f64));
/// let engine = ViscousBurgers::new(n, grid, 0.01, 0.1, 30.0).unwrap();
/// let u0 = engine.grid().map(|x| (-(x + 2.0) * (x + 2.0)).exp());
///
/// let simulator = TrajectorySimulator::rk4();
/// let config = SimulationConfig::new(engine.dt(), 300, 100);
/// let result = simulator.simulate(&engine, &u0, &config).unwrap();
///
/// assert_eq!(result.snapshots.nrows(), 3);
/// assert_eq!(result.times.len(), 3);
/// ```
pub struct TrajectorySimulator {
    stepper: Box<dyn TimeStepper>,
}

impl TrajectorySimulator {
    /// Create a simulator driving the given stepper
    pub fn new(stepper: Box<dyn TimeStepper>) -> Self {
        Self { stepper }
    }

    /// Create a simulator driving the default [`Rk4`] stepper
    pub fn rk4() -> Self {
        Self::new(Box::new(Rk4::new()))
    }

    /// Name of the underlying stepper
    pub fn stepper_name(&self) -> &str {
        self.stepper.name()
    }

    /// Integrate `n_int` steps from `x0`, sampling every `n_sample` steps.
    ///
    /// Emits `n_int / n_sample` states in ascending time order with constant
    /// timestamp spacing `n_sample * dt`; a trailing partial stride is
    /// silently discarded (the stride boundary is strict, not "closest").
    ///
    /// # Errors
    ///
    /// * [`SimulationError::InvalidParameter`] when the configuration is
    ///   rejected by [`SimulationConfig::validate`]
    /// * [`SimulationError::ShapeMismatch`] when `x0` does not have the
    ///   system's state length
    /// * [`SimulationError::NumericalInstability`] when any step produces
    ///   non-finite values; propagated unmasked, never clamped or retried
    pub fn simulate(
        &self,
        system: &dyn DynamicalSystem,
        x0: &DVector<f64>,
        config: &SimulationConfig,
    ) -> Result<SimulationResult, SimulationError> {
        // ====== Validation ======

        config.validate()?;
        check_state_len(x0, system.state_len())?;

        debug!(
            system = system.name(),
            stepper = self.stepper.name(),
            n_int = config.n_int,
            n_sample = config.n_sample,
            dt = config.dt,
            "starting trajectory simulation"
        );

        // ====== Setup ======

        let n_samples = config.n_samples();
        let mut snapshots = DMatrix::zeros(n_samples, system.state_len());
        let mut times = Vec::with_capacity(n_samples);

        // No external forcing in this scope; the zero vector is passed to
        // every stage unchanged.
        let forcing = DVector::zeros(system.forcing_dim());

        let mut x = x0.clone();
        let mut emitted = 0;

        // ====== Time integration ======

        for step in 0..config.n_int {
            // Timestamps are computed from the step index rather than
            // accumulated with `t += dt`, so rounding error does not grow
            // with the step count.
            let t = (step as f64 + 1.0) * config.dt;

            x = self.stepper.step(system, t, &x, &forcing, config.dt)?;
            validate_state(&x, t)?;

            if (step + 1) % config.n_sample == 0 {
                snapshots.row_mut(emitted).copy_from(&x.transpose());
                times.push(t);
                emitted += 1;
            }
        }

        debug!(samples = emitted, "trajectory simulation finished");

        Ok(SimulationResult::new(snapshots, times, x))
    }
}

impl Default for TrajectorySimulator {
    fn default() -> Self {
        Self::rk4()
    }
}

impl std::fmt::Debug for TrajectorySimulator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TrajectorySimulator")
            .field("stepper", &self.stepper.name())
            .finish()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
