//! Numerical time integration
//!
//! This module provides the steppers and the trajectory simulator that
//! integrate a [`DynamicalSystem`](crate::physics::DynamicalSystem) forward
//! in time.
//!
//! # Core Concepts
//!
//! The solver architecture separates concerns into three layers:
//!
//! 1. **System** ([`DynamicalSystem`](crate::physics::DynamicalSystem)) -
//!    WHAT to integrate: the right-hand side f(t, x, u)
//!
//! 2. **Configuration** ([`SimulationConfig`]) - HOW to integrate:
//!    time step, number of steps, sampling stride
//!
//! 3. **Stepper** ([`TimeStepper`] trait) - the numerical method:
//!    one explicit step, independent of the physics
//!
//! This separation allows:
//! - The same stepper for different systems (spectral Burgers, test mocks)
//! - Different steppers for the same system (Euler vs RK4 comparison)
//! - Easy benchmarking and convergence-order measurement
//!
//! # Module Organization
//!
//! - **`traits`**: `TimeStepper` trait, `SimulationConfig`,
//!   `SimulationResult`
//! - **`methods`**: concrete steppers ([`ForwardEuler`], [`Rk4`])
//! - **`simulator`**: the sampling integration loop
//!   ([`TrajectorySimulator`])
//!
//! # Quick Start Example
//!
//! ```rust
//! use burgers_rs::models::ViscousBurgers;
//! use burgers_rs::solver::{SimulationConfig, TrajectorySimulator};
//! use nalgebra::DVector;
//!
//! // 1. The system (WHAT to integrate)
//! let n = 64;
//! let grid = DVector::from_fn(n, |j, _| -15.0 + 30.0 * (j as f64) / (n as f64));
//! let engine = ViscousBurgers::new(n, grid, 0.01, 0.1, 30.0).unwrap();
//!
//! // 2. The configuration (HOW to integrate)
//! let config = SimulationConfig::new(engine.dt(), 200, 50);
//!
//! // 3. Integrate and sample
//! let u0 = engine.grid().map(|x| (-(x + 2.0) * (x + 2.0)).exp());
//! let simulator = TrajectorySimulator::rk4();
//! let result = simulator.simulate(&engine, &u0, &config).unwrap();
//!
//! assert_eq!(result.snapshots.shape(), (4, 64));
//! ```
//!
//! # Error Handling
//!
//! Every entry point returns `Result<_, SimulationError>`. Instability from
//! an unsuitable dt is a legitimate terminal outcome of explicit fixed-step
//! integration: it surfaces as
//! [`NumericalInstability`](crate::error::SimulationError::NumericalInstability)
//! and is never clamped, masked or retried.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod methods;
mod simulator;
mod traits;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{SimulationConfig, SimulationResult, TimeStepper};

pub use methods::{ForwardEuler, Rk4};
pub use simulator::TrajectorySimulator;

// =================================================================================================
// Helper Functions
// =================================================================================================

use crate::error::SimulationError;
use nalgebra::DVector;

/// Validate an integrated state for numerical issues.
///
/// Checks that the state contains neither NaN (0/0, Inf - Inf, ...) nor
/// infinite (overflow) values. Run by the simulator after every step so
/// that instability is reported at the step where it first appears.
pub(crate) fn validate_state(x: &DVector<f64>, t: f64) -> Result<(), SimulationError> {
    if x.iter().any(|v| !v.is_finite()) {
        return Err(SimulationError::NumericalInstability {
            context: "integrated state",
            time: t,
        });
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================
