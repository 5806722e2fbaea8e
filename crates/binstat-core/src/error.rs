//! Error types for binned statistics
//!
//! Provides a unified error type for all binstat crates.

use thiserror::Error;

/// Core error type for histogram construction and aggregation
#[derive(Error, Debug)]
pub enum Error {
    /// Invalid parameter provided to a function
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Insufficient data for the requested operation
    #[error("Insufficient data for {operation}: expected at least {expected} samples, got {actual}")]
    InsufficientData {
        operation: String,
        expected: usize,
        actual: usize,
    },

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for empty input
    pub fn empty_input(operation: &str) -> Self {
        Self::InsufficientData {
            operation: operation.to_string(),
            expected: 1,
            actual: 0,
        }
    }

    /// Create an error for size mismatch
    pub fn size_mismatch(expected: usize, actual: usize, context: &str) -> Self {
        Self::InvalidInput(format!(
            "Size mismatch in {context}: expected {expected}, got {actual}"
        ))
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::Computation(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for content that landed outside the addressable bins
    pub fn overflow(context: &str) -> Self {
        Self::InvalidInput(format!("{context} has content in its under/overflow bins"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidParameter("n_bins must be positive".to_string());
        assert_eq!(err.to_string(), "Invalid parameter: n_bins must be positive");

        let err = Error::InvalidInput("unsorted low edges".to_string());
        assert_eq!(err.to_string(), "Invalid input: unsorted low edges");

        let err = Error::InsufficientData {
            operation: "mean".to_string(),
            expected: 3,
            actual: 1,
        };
        assert_eq!(err.to_string(), "Insufficient data for mean: expected at least 3 samples, got 1");

        let err = Error::Computation("beta quantile failed".to_string());
        assert_eq!(err.to_string(), "Computation error: beta quantile failed");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input("bool histogram");
        match &err {
            Error::InsufficientData {
                operation,
                expected,
                actual,
            } => {
                assert_eq!(operation, "bool histogram");
                assert_eq!(*expected, 1);
                assert_eq!(*actual, 0);
            }
            other => panic!("Wrong error type: {other:?}"),
        }
        assert!(err.to_string().contains("bool histogram"));

        let err = Error::size_mismatch(4, 3, "bin errors");
        assert_eq!(err.to_string(), "Invalid input: Size mismatch in bin errors: expected 4, got 3");

        let err = Error::non_finite("bin contents");
        assert_eq!(err.to_string(), "Computation error: bin contents contains NaN or infinite values");

        let err = Error::overflow("count histogram");
        assert!(err.to_string().contains("under/overflow"));
    }
}
