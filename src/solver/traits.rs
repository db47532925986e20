//! Numerical stepper traits and types
//!
//! # Design Philosophy
//!
//! The solver layer splits into three pieces:
//! - `TimeStepper` trait: one explicit time step (the numerical method)
//! - `SimulationConfig`: HOW to integrate (dt, step count, sampling stride)
//! - `SimulationResult`: the sampled trajectory plus timestamps
//!
//! # Stability Guarantee
//!
//! - `TimeStepper` trait: stable interface, new methods get new impls
//! - `SimulationConfig` / `SimulationResult`: fields won't be removed

use crate::error::SimulationError;
use crate::physics::DynamicalSystem;
use nalgebra::{DMatrix, DVector};

// =================================================================================================
// Time Stepper Trait
// =================================================================================================

/// Trait for explicit fixed-step time integrators
///
/// A stepper advances a [`DynamicalSystem`] by one step of size `dt`. It has
/// no internal state and no failure conditions of its own: instability from
/// an unsuitable `dt` surfaces numerically (NaN/Inf) through the system's
/// `rhs` or the simulator's per-step check, never as a raised condition
/// inside the stepper.
pub trait TimeStepper: Send + Sync {
    /// Advance `x` from time `t` by one step of size `dt`.
    ///
    /// The forcing `u` is held fixed across all internal stages
    /// (zero-order hold).
    fn step(
        &self,
        system: &dyn DynamicalSystem,
        t: f64,
        x: &DVector<f64>,
        u: &DVector<f64>,
        dt: f64,
    ) -> Result<DVector<f64>, SimulationError>;

    /// Name of the method (used for display and logging)
    fn name(&self) -> &str;

    /// Formal order of accuracy of the method
    fn order(&self) -> usize;
}

// =================================================================================================
// Simulation configuration
// =================================================================================================

/// Configuration for a trajectory simulation
///
/// # Examples
///
/// ```rust
/// use burgers_rs::solver::SimulationConfig;
///
/// // 3000 steps of dt = 0.01, keeping every 100th state
/// let config = SimulationConfig::new(0.01, 3000, 100);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.n_samples(), 30);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct SimulationConfig {
    /// Fixed time step (> 0), constant within one `simulate` call
    pub dt: f64,

    /// Total number of integration steps (≥ 1)
    pub n_int: usize,

    /// Sampling stride: a state is emitted every `n_sample` steps (≥ 1)
    pub n_sample: usize,
}

impl SimulationConfig {
    /// Create a new configuration
    pub fn new(dt: f64, n_int: usize, n_sample: usize) -> Self {
        Self {
            dt,
            n_int,
            n_sample,
        }
    }

    /// Number of states the simulation will emit.
    ///
    /// A trailing partial stride that does not reach a multiple of
    /// `n_sample` is discarded, so this is `n_int / n_sample` (floor).
    pub fn n_samples(&self) -> usize {
        self.n_int / self.n_sample
    }

    /// Validate that the parameters are numerically meaningful
    pub fn validate(&self) -> Result<(), SimulationError> {
        if !self.dt.is_finite() || self.dt <= 0.0 {
            return Err(SimulationError::invalid(
                "dt",
                format!("time step must be positive and finite, got {}", self.dt),
            ));
        }
        if self.n_int == 0 {
            return Err(SimulationError::invalid(
                "n_int",
                "number of integration steps must be at least 1",
            ));
        }
        if self.n_sample == 0 {
            return Err(SimulationError::invalid(
                "n_sample",
                "sampling stride must be at least 1",
            ));
        }
        Ok(())
    }
}

// =================================================================================================
// Simulation result
// =================================================================================================

/// Result of a trajectory simulation
///
/// Snapshots are stored row-major: row i is the state sampled at
/// `times[i]`, shape `[n_int / n_sample, N]`. The rows are in ascending
/// time order with constant spacing `n_sample * dt`. The struct owns its
/// buffers; nothing is shared with the engine or previous calls.
#[derive(Clone, Debug, PartialEq)]
pub struct SimulationResult {
    /// Sampled states, one row per emitted sample
    pub snapshots: DMatrix<f64>,

    /// Timestamps matching `snapshots` rows, strictly ascending
    pub times: Vec<f64>,

    /// State after the final integration step (which may fall inside a
    /// discarded partial stride and therefore not appear in `snapshots`)
    pub final_state: DVector<f64>,
}

impl SimulationResult {
    /// Build a result from its parts
    pub fn new(snapshots: DMatrix<f64>, times: Vec<f64>, final_state: DVector<f64>) -> Self {
        Self {
            snapshots,
            times,
            final_state,
        }
    }

    /// Number of emitted samples
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// True when no sample was emitted (`n_int < n_sample`)
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }
}

// =================================================================================================
// Tests
// =================================================================================================
