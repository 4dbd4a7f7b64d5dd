//! Error types for frequency analysis
//!
//! Provides a unified error type for the survey-stats crates.

use thiserror::Error;

/// Core error type for frequency analysis operations
#[derive(Error, Debug)]
pub enum Error {
    /// Too few categories for the requested test
    #[error("Insufficient categories: expected at least {expected}, got {actual}")]
    InsufficientCategories { expected: usize, actual: usize },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InsufficientCategories {
            expected: 2,
            actual: 1,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient categories: expected at least 2, got 1"
        );

        let err = Error::InvalidInput("observed counts are all zero".to_string());
        assert_eq!(err.to_string(), "Invalid input: observed counts are all zero");

        let err = Error::Computation("degrees of freedom must be positive".to_string());
        assert_eq!(
            err.to_string(),
            "Computation error: degrees of freedom must be positive"
        );
    }
}
