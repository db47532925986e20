//! burgers-rs: Pseudo-Spectral Burgers Simulation Framework
//!
//! A framework for integrating the 1-D viscous Burgers equation on a
//! periodic domain and harvesting Koopman training data from it. Built
//! with Rust for performance and safety.
//!
//! The governing equation is
//!
//! ```text
//! u_t + u u_x = nu u_xx
//! ```
//!
//! discretized pseudo-spectrally: derivatives are exact in Fourier space,
//! the quadratic advection term is formed in physical space with 2/3-rule
//! dealiasing, and time is advanced with classic fourth-order Runge-Kutta.
//!
//! # Architecture
//!
//! burgers-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Dynamical systems define equations (what to solve)
//!    - Time steppers provide methods (how to solve)
//!
//! 2. **Extensibility and Type Safety**
//!    - Trait-based design for easy extension
//!    - Structured errors for every failure mode
//!    - Plain `nalgebra` vectors and matrices at the API surface
//!
//! # Quick Start
//!
//! ```rust
//! use burgers_rs::models::ViscousBurgers;
//! use burgers_rs::solver::{SimulationConfig, TrajectorySimulator};
//! use nalgebra::DVector;
//!
//! # fn main() -> Result<(), burgers_rs::error::SimulationError> {
//! // 1. Configure the spectral engine on a 64-point periodic grid
//! let n = 64;
//! let grid = DVector::from_fn(n, |j, _| -15.0 + 30.0 * (j as f64) / (n as f64));
//! let engine = ViscousBurgers::new(n, grid, 0.01, 0.1, 30.0)?;
//!
//! // 2. Gaussian pulse initial condition
//! let u0 = engine.grid().map(|x| (-(x + 2.0) * (x + 2.0)).exp());
//!
//! // 3. Integrate 400 steps, sampling every 100th
//! let config = SimulationConfig::new(0.01, 400, 100);
//! let simulator = TrajectorySimulator::rk4();
//! let result = simulator.simulate(&engine, &u0, &config)?;
//!
//! // 4. Access results
//! assert_eq!(result.snapshots.shape(), (4, 64));
//! assert_eq!(result.times.len(), 4);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: The [`physics::DynamicalSystem`] trait (equations)
//! - [`models`]: Concrete systems, currently [`models::ViscousBurgers`]
//! - [`solver`]: Time steppers and the trajectory simulator (methods)
//! - [`collect`]: Training-data acquisition on top of the above
//! - [`error`]: The [`error::SimulationError`] type

// Core modules
pub mod physics;

pub mod collect;
pub mod error;
pub mod models;
pub mod solver;

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //!
    //! use burgers_rs::prelude::*;
    //! ```
    pub use crate::collect::DataCollector;
    pub use crate::error::SimulationError;
    pub use crate::models::ViscousBurgers;
    pub use crate::physics::DynamicalSystem;
    pub use crate::solver::{ForwardEuler,
                            Rk4,
                            SimulationConfig,
                            SimulationResult,
                            TimeStepper,
                            TrajectorySimulator};
}
