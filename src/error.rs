//! Error types for the numerical core
//!
//! The crate is a fail-fast numerical kernel: every failure surfaces
//! immediately as a [`SimulationError`], nothing is retried or clamped.
//! Batch operations abort on the first failing row and return no partial
//! result.

use thiserror::Error;

/// Errors produced by the spectral engine, the time steppers and the
/// data collectors.
#[derive(Debug, Error)]
pub enum SimulationError {
    /// A state vector (or a batch row) does not have the engine's grid size.
    #[error("state vector has length {actual}, expected {expected}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// A construction or configuration parameter is out of range
    /// (non-positive dt, zero step count, zero sampling stride, ...).
    #[error("invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    /// A transform or integration step produced NaN or infinite values.
    ///
    /// This is a legitimate terminal outcome of explicit fixed-step RK4 at
    /// insufficient resolution or excessive dt. It propagates to the caller
    /// unmasked; reduce dt or refine the grid and run again.
    #[error("non-finite values in {context} at t = {time}; reduce dt or refine the grid")]
    NumericalInstability { context: &'static str, time: f64 },
}

impl SimulationError {
    /// Shorthand for an [`InvalidParameter`](SimulationError::InvalidParameter)
    /// with a formatted reason.
    pub(crate) fn invalid(name: &'static str, reason: impl Into<String>) -> Self {
        SimulationError::InvalidParameter {
            name,
            reason: reason.into(),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
