//! Numerical methods for time integration
//!
//! This module contains the concrete implementations of the
//! [`TimeStepper`](crate::solver::TimeStepper) trait.
//!
//! # Architecture
//!
//! The separation between the abstract stepper interface (`solver::traits`)
//! and the concrete methods here follows the Open-Closed Principle:
//! - **Open** for extension: add new methods without modifying existing code
//! - **Closed** for modification: the `TimeStepper` trait is stable
//!
//! # Available Methods
//!
//! Explicit fixed-step methods for non-stiff ordinary differential
//! equations:
//!
//! - **[`ForwardEuler`]**: forward Euler method
//!   - Order: first-order O(dt)
//!   - Cost: 1 function evaluation per step
//!   - Use: baselines and convergence comparisons
//!
//! - **[`Rk4`]**: classical fourth-order Runge-Kutta
//!   - Order: fourth-order O(dt⁴)
//!   - Cost: 4 function evaluations per step
//!   - Use: **trajectory generation**, the method every data-collection
//!     mode drives
//!
//! Implicit and adaptive-step methods are deliberately out of scope: the
//! data-collection contract relies on a fixed dt so that sampled states are
//! equispaced in time.

// =================================================================================================
// Module Declarations
// =================================================================================================

mod euler;
mod rk4;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use euler::ForwardEuler;
pub use rk4::Rk4;
