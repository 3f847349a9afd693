//! Error types for the checked parts of the API.
//!
//! The sequence operations themselves are total and never fail. Errors only
//! arise from the discriminated extremum query ([`crate::reductions::extrema`])
//! and from validating externally supplied filter configurations.

#[cfg(not(feature = "std"))]
use alloc::string::String;

use thiserror::Error;

/// Result type alias for checked operations.
pub type Result<T> = core::result::Result<T, DspError>;

/// Errors reported by checked operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DspError {
    /// The operation has no defined result for an empty sequence.
    #[error("Empty input: {operation} requires at least one element")]
    EmptyInput {
        /// Name of the operation that was given an empty sequence.
        operation: &'static str,
    },

    /// Invalid parameter value.
    #[error("Invalid parameter '{name}': {value} (expected {expected})")]
    InvalidParameter {
        /// Name of the parameter.
        name: &'static str,
        /// Provided value as string.
        value: String,
        /// Description of expected value.
        expected: &'static str,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = DspError::EmptyInput {
            operation: "extrema",
        };
        assert_eq!(
            err.to_string(),
            "Empty input: extrema requires at least one element"
        );

        let err = DspError::InvalidParameter {
            name: "width",
            value: "-5".to_string(),
            expected: "width >= 1",
        };
        assert_eq!(
            err.to_string(),
            "Invalid parameter 'width': -5 (expected width >= 1)"
        );
    }
}
