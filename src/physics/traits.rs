//! Dynamical system trait
//!
//! This module defines the core API for continuous-time dynamical systems:
//! - `DynamicalSystem`: trait implemented by every model the solvers can step
//!
//! A system provides the right-hand side f of dx/dt = f(t, x, u). It does
//! NOT integrate it; that is the solver's job.

use crate::error::SimulationError;
use nalgebra::DVector;

/// Trait for continuous-time dynamical systems
///
/// # Responsibility
/// Computes the right-hand side of the governing equations at a given state.
/// Does NOT integrate them (that's the solver's job).
///
/// The system provides the "physics" (equations), the solver provides
/// the "numerics" (method to integrate them).
///
/// # Forcing
///
/// Every right-hand side takes an explicit forcing vector `u`, even though
/// this crate only ever passes the zero vector. Keeping the parameter in the
/// signature preserves interface symmetry for a future nonzero-forcing
/// extension; implementations are free to ignore it. If nonzero forcing is
/// needed later, extend the trait explicitly rather than repurposing the
/// parameter silently.
pub trait DynamicalSystem: Send + Sync {
    /// Length of the state vector
    ///
    /// Used by the solvers and collectors to allocate output buffers and to
    /// validate inputs.
    fn state_len(&self) -> usize;

    /// Length of the forcing vector expected by [`rhs`](Self::rhs)
    ///
    /// Defaults to 1 (a scalar placeholder held at zero).
    fn forcing_dim(&self) -> usize {
        1
    }

    /// Right-hand side f(t, x, u) of dx/dt = f(t, x, u)
    ///
    /// # Arguments
    /// * `t` - Current time (autonomous systems may ignore it)
    /// * `x` - Current state, length [`state_len`](Self::state_len)
    /// * `u` - Forcing input, zero-order held across integrator stages
    ///
    /// # Errors
    ///
    /// * [`SimulationError::ShapeMismatch`] when `x` does not have the
    ///   system's state length
    /// * [`SimulationError::NumericalInstability`] when the evaluation
    ///   produces non-finite values
    fn rhs(
        &self,
        t: f64,
        x: &DVector<f64>,
        u: &DVector<f64>,
    ) -> Result<DVector<f64>, SimulationError>;

    /// Name of the system (used for display and logging)
    fn name(&self) -> &str;

    /// Description of the system (optional)
    fn description(&self) -> Option<&str> {
        None
    }
}

/// Check a state vector against an expected length.
///
/// Shared by the engine, the simulator and the collectors so that every
/// shape failure carries the same error variant.
pub(crate) fn check_state_len(x: &DVector<f64>, expected: usize) -> Result<(), SimulationError> {
    if x.len() != expected {
        return Err(SimulationError::ShapeMismatch {
            expected,
            actual: x.len(),
        });
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
