//! Classical fourth-order Runge-Kutta stepper
//!
//! # Mathematical Background
//!
//! The classical fourth-order Runge-Kutta method (RK4) advances
//!
//! ```text
//! dx/dt = f(t, x, u)
//! ```
//!
//! using a weighted average of four slope estimates:
//!
//! ```text
//! k₁ = f(t,        x,             u)
//! k₂ = f(t + dt/2, x + dt/2 · k₁, u)
//! k₃ = f(t + dt/2, x + dt/2 · k₂, u)
//! k₄ = f(t + dt,   x + dt   · k₃, u)
//!
//! x_next = x + dt/6 · (k₁ + 2k₂ + 2k₃ + k₄)
//! ```
//!
//! The forcing `u` is held fixed across all four stages (zero-order hold).
//!
//! # Characteristics
//!
//! - **Order**: fourth-order accurate (global error ~ O(dt⁴))
//! - **Cost**: 4 right-hand-side evaluations per step
//! - **Stability**: explicit; for dx/dt = λx stable while
//!   |1 + z + z²/2 + z³/6 + z⁴/24| ≤ 1 with z = λ·dt
//!
//! No adaptivity and no internal failure conditions: an unsuitable dt shows
//! up as NaN/Inf in the state, which the simulator's per-step validation
//! turns into a [`NumericalInstability`](crate::error::SimulationError)
//! error.

use crate::error::SimulationError;
use crate::physics::DynamicalSystem;
use crate::solver::TimeStepper;
use nalgebra::DVector;

// =================================================================================================
// RK4 stepper
// =================================================================================================

/// Classical fourth-order Runge-Kutta stepper
///
/// # Example
///
/// ```rust
/// use burgers_rs::solver::{Rk4, TimeStepper};
/// use nalgebra::DVector;
///
/// let stepper = Rk4::new();
/// let x = DVector::from_element(3, 1.0);
/// let u = DVector::zeros(1);
///
/// // dx/dt = -x, one step of dt = 0.1
/// let next = stepper
///     .step_with(0.0, &x, &u, 0.1, |_t, x, _u| Ok(-x))
///     .unwrap();
///
/// // RK4 matches exp(-0.1) to ~1e-8 in a single step
/// assert!((next[0] - (-0.1f64).exp()).abs() < 1e-7);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Rk4;

impl Rk4 {
    /// Create a new RK4 stepper
    pub fn new() -> Self {
        Self
    }

    /// One RK4 step with an arbitrary right-hand-side function.
    ///
    /// This is the generic entry point: anything callable as
    /// `f(t, x, u) -> Result<dxdt>` can be integrated, which the tests use
    /// to step reduced systems (e.g. a viscous-only mode equation) without
    /// building a full [`DynamicalSystem`].
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
        let half = dt / 2.0;

        // Stage 1: slope at the beginning of the interval
        let k1 = rhs(t, x, u)?;

        // Stage 2: slope at the midpoint using an Euler prediction with k₁
        let k2 = rhs(t + half, &(x + &k1 * half), u)?;

        // Stage 3: slope at the midpoint using an Euler prediction with k₂
        let k3 = rhs(t + half, &(x + &k2 * half), u)?;

        // Stage 4: slope at the end using an Euler prediction with k₃
        let k4 = rhs(t + dt, &(x + &k3 * dt), u)?;

        // Simpson's-rule weights: endpoints 1/6, midpoints 2/6
        Ok(x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0))
    }
}

impl TimeStepper for Rk4 {
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
        "Runge-Kutta 4"
    }

    fn order(&self) -> usize {
        4
    }
}

// =================================================================================================
// Tests
// =================================================================================================
