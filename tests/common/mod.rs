//! Common utilities for integration tests

pub mod mock_systems;
pub mod test_helpers;

// Re-export commonly used items
#[allow(unused_imports)]
pub use mock_systems::{ConstantGrowth, ExponentialDecay};
#[allow(unused_imports)]
pub use test_helpers::{assert_vectors_close, relative_error};
