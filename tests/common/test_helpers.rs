//! Helper functions for integration tests

use nalgebra::DVector;

/// Assert that two vectors are close (within tolerance)
pub fn assert_vectors_close(v1: &DVector<f64>, v2: &DVector<f64>, tolerance: f64, message: &str) {
    assert_eq!(v1.len(), v2.len(), "{}: Dimension mismatch", message);

    for (i, (&a, &b)) in v1.iter().zip(v2.iter()).enumerate() {
        let diff = (a - b).abs();
        assert!(
            diff < tolerance,
            "{}: Element {} differs by {} (tolerance {})",
            message,
            i,
            diff,
            tolerance
        );
    }
}

/// Compute relative error: |actual - expected| / |expected|
pub fn relative_error(actual: f64, expected: f64) -> f64 {
    if expected.abs() < 1e-10 {
        (actual - expected).abs()
    } else {
        (actual - expected).abs() / expected.abs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_relative_error() {
        assert!((relative_error(1.0, 1.0) - 0.0).abs() < 1e-10);
        assert!((relative_error(1.1, 1.0) - 0.1).abs() < 1e-10);
        assert!((relative_error(0.9, 1.0) - 0.1).abs() < 1e-10);
    }
}
