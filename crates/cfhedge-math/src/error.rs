//! Error types for mathematical operations.

use cfhedge_core::ErrorKind;
use thiserror::Error;

/// A specialized Result type for mathematical operations.
pub type MathResult<T> = Result<T, MathError>;

/// Errors that can occur during mathematical operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    /// Interpolation or extrapolation method name not recognized.
    #[error("Unsupported method: {name}")]
    UnsupportedMethod {
        /// The method name as supplied.
        name: String,
    },

    /// Insufficient data points for operation.
    #[error("Insufficient data: need at least {required}, got {actual}")]
    InsufficientData {
        /// Minimum required points.
        required: usize,
        /// Actual number of points.
        actual: usize,
    },

    /// Invalid input parameter.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of the invalid input.
        reason: String,
    },

    /// Division by zero or near-zero value.
    #[error("Division by zero or near-zero value: {value:.2e}")]
    DivisionByZero {
        /// The near-zero value.
        value: f64,
    },
}

impl MathError {
    /// Creates an unsupported method error.
    #[must_use]
    pub fn unsupported_method(name: impl Into<String>) -> Self {
        Self::UnsupportedMethod { name: name.into() }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, actual: usize) -> Self {
        Self::InsufficientData { required, actual }
    }

    /// Returns the caller-facing classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            MathError::UnsupportedMethod { .. } => ErrorKind::UnsupportedMethod,
            MathError::InsufficientData { .. } | MathError::InvalidInput { .. } => {
                ErrorKind::InvalidInput
            }
            MathError::DivisionByZero { .. } => ErrorKind::Numerical,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = MathError::unsupported_method("CUBIC");
        assert_eq!(err.to_string(), "Unsupported method: CUBIC");
        assert_eq!(err.kind(), ErrorKind::UnsupportedMethod);
        assert_eq!(MathError::insufficient_data(2, 1).kind(), ErrorKind::InvalidInput);
    }
}
