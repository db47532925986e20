//! Dynamical system implementations
//!
//! All models implement the [`DynamicalSystem`](crate::physics::DynamicalSystem)
//! trait. The stepper calls `rhs` at each stage: models are responsible for
//! the physics (spectral differentiation, dealiasing), the solver for the
//! time integration.
//!
//! # Available Models
//!
//! ## [`ViscousBurgers`]: periodic 1D viscous Burgers equation
//!
//! Pseudo-spectral right-hand side for `u_t = -u·u_x + ν·u_xx`: Fourier
//! differentiation with 2/3-rule dealiasing of the quadratic nonlinearity.
//! This is the trajectory generator behind the data-collection modes in
//! [`collect`](crate::collect), producing the (state, derivative) and
//! (state, next-state) pairs a Koopman-operator learner consumes.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod burgers;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use burgers::ViscousBurgers;
