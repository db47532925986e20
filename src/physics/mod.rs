//! Dynamical systems
//!
//! This module provides the trait implemented by every physical system the
//! numerical solvers can integrate.
//!
//! # Core Concepts
//!
//! - **Dynamical system**: provides the right-hand side f of dx/dt = f(t, x, u)
//! - **State**: a plain `nalgebra::DVector<f64>` sampled on the system's grid
//! - **Forcing**: an explicit (currently zero) input vector kept for
//!   interface symmetry
//!
//! # Architecture
//!
//! Systems are **separate from numerical solvers**:
//! - The system provides the **equations** (physics)
//! - The solver provides the **method** to integrate them (numerics)
//!
//! This separation allows:
//! - Same system with different steppers (forward Euler, RK4, ...)
//! - Same stepper with different systems (spectral Burgers, test mocks, ...)
//!
//! # Example
//!
//! ```rust
//! use burgers_rs::physics::DynamicalSystem;
//! use burgers_rs::error::SimulationError;
//! use nalgebra::DVector;
//!
//! /// dy/dt = -k * y
//! struct Decay {
//!     points: usize,
//!     rate: f64,
//! }
//!
//! impl DynamicalSystem for Decay {
//!     fn state_len(&self) -> usize {
//!         self.points
//!     }
//!
//!     fn rhs(
//!         &self,
//!         _t: f64,
//!         x: &DVector<f64>,
//!         _u: &DVector<f64>,
//!     ) -> Result<DVector<f64>, SimulationError> {
//!         Ok(x * -self.rate)
//!     }
//!
//!     fn name(&self) -> &str {
//!         "Decay"
//!     }
//! }
//!
//! let system = Decay { points: 8, rate: 0.5 };
//! let x = DVector::from_element(8, 1.0);
//! let u = DVector::zeros(1);
//! let dxdt = system.rhs(0.0, &x, &u).unwrap();
//! assert_eq!(dxdt[0], -0.5);
//! ```

// module declaration
pub mod traits;

// re-export commonly used types for convenience
pub use traits::DynamicalSystem;

pub(crate) use traits::check_state_len;
