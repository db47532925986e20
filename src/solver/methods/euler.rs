//! Forward Euler stepper
//!
//! # Mathematical Background
//!
//! The forward (explicit) Euler method is the simplest time integrator:
//!
//! ```text
//! x_next = x + dt · f(t, x, u)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: first-order accurate (global error ~ O(dt))
//! - **Cost**: 1 right-hand-side evaluation per step
//! - **Use**: baselines and convergence-order comparisons against
//!   [`Rk4`](crate::solver::Rk4); production trajectory generation uses RK4

use crate::error::SimulationError;
use crate::physics::DynamicalSystem;
use crate::solver::TimeStepper;
use nalgebra::DVector;

/// Forward Euler stepper
///
/// # Example
///
/// ```rust
/// use burgers_rs::solver::{ForwardEuler, TimeStepper};
///
/// let stepper = ForwardEuler::new();
/// assert_eq!(stepper.order(), 1);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ForwardEuler;

impl ForwardEuler {
    /// Create a new forward Euler stepper
    pub fn new() -> Self {
        Self
    }

    /// One Euler step with an arbitrary right-hand-side function
    pub fn step_with<F>(
        &self,
        t: f64,
        x: &DVector<f64>,
        u: &DVector<f64>,
        dt: f64,
        mut rhs: F,
    ) -> Result<DVector<f64>, SimulationError>
    where
        F: FnMut(f64, &DVector<f64>, &DVector<f64>) -> Result<DVector<f64>, SimulationError>,
    {
        let slope = rhs(t, x, u)?;
        Ok(x + slope * dt)
    }
}

impl TimeStepper for ForwardEuler {
    fn step(
        &self,
        system: &dyn DynamicalSystem,
        t: f64,
        x: &DVector<f64>,
        u: &DVector<f64>,
        dt: f64,
    ) -> Result<DVector<f64>, SimulationError> {
        self.step_with(t, x, u, dt, |t, x, u| system.rhs(t, x, u))
    }

    fn name(&self) -> &str {
        "Forward Euler"
    }

    fn order(&self) -> usize {
        1
    }
}

// =================================================================================================
// Tests
// =================================================================================================
