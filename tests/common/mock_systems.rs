//! Mock dynamical systems for testing
//!
//! These systems have known analytical solutions, making them
//! ideal for validating time-stepper accuracy.

use burgers_rs::error::SimulationError;
use burgers_rs::physics::DynamicalSystem;
use nalgebra::DVector;

// =================================================================================================
// Exponential Decay: dy/dt = -k*y
// =================================================================================================

/// Exponential decay system: dy/dt = -k*y
///
/// Analytical solution: y(t) = y0 * exp(-k*t)
///
/// Useful for testing stepper accuracy since we know the exact solution.
pub struct ExponentialDecay {
    pub points: usize,
    pub decay_rate: f64, // k in dy/dt = -k*y
}

impl ExponentialDecay {
    pub fn new(points: usize, decay_rate: f64) -> Self {
        Self { points, decay_rate }
    }

    /// Compute analytical solution at time t
    pub fn analytical_solution(&self, t: f64, y0: f64) -> f64 {
        y0 * (-self.decay_rate * t).exp()
    }

    /// Uniform initial state y0 = 1
    pub fn initial_state(&self) -> DVector<f64> {
        DVector::from_element(self.points, 1.0)
    }
}

impl DynamicalSystem for ExponentialDecay {
    fn state_len(&self) -> usize {
        self.points
    }

    fn rhs(
        &self,
        _t: f64,
        x: &DVector<f64>,
        _u: &DVector<f64>,
    ) -> Result<DVector<f64>, SimulationError> {
        Ok(x * -self.decay_rate)
    }

    fn name(&self) -> &str {
        "Exponential Decay"
    }
}

// =================================================================================================
// Constant Growth: dy/dt = c
// =================================================================================================

/// Constant growth system: dy/dt = c
///
/// Analytical solution: y(t) = y0 + c*t
///
/// Every consistent stepper integrates this exactly, so it exposes
/// bookkeeping bugs (step counts, sampling) rather than accuracy limits.
pub struct ConstantGrowth {
    pub points: usize,
    pub rate: f64,
}

impl ConstantGrowth {
    pub fn new(points: usize, rate: f64) -> Self {
        Self { points, rate }
    }

    pub fn initial_state(&self) -> DVector<f64> {
        DVector::zeros(self.points)
    }
}

impl DynamicalSystem for ConstantGrowth {
    fn state_len(&self) -> usize {
        self.points
    }

    fn rhs(
        &self,
        _t: f64,
        x: &DVector<f64>,
        _u: &DVector<f64>,
    ) -> Result<DVector<f64>, SimulationError> {
        Ok(DVector::from_element(x.len(), self.rate))
    }

    fn name(&self) -> &str {
        "Constant Growth"
    }
}
