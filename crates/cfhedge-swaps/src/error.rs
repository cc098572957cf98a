//! Error types for swap construction and valuation.

use cfhedge_core::types::Date;
use cfhedge_core::{ErrorKind, HedgeError};
use cfhedge_curves::CurveError;
use thiserror::Error;

/// A specialized Result type for swap operations.
pub type SwapResult<T> = Result<T, SwapError>;

/// Error types for swap operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SwapError {
    /// Convention, date or input error from the core types.
    #[error(transparent)]
    Core(#[from] HedgeError),

    /// Curve query failure.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Schedule generation produced no periods.
    #[error("Empty schedule between {effective} and {termination}")]
    EmptySchedule {
        /// Effective date requested.
        effective: Date,
        /// Termination date requested.
        termination: Date,
    },

    /// Every period has settled on or before the valuation date.
    #[error("No periods remain after {as_of} (termination {termination})")]
    NoRemainingPeriods {
        /// Valuation date.
        as_of: Date,
        /// Last schedule date.
        termination: Date,
    },

    /// Period ordering violated.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of the violation.
        reason: String,
    },

    /// Degenerate arithmetic, such as a zero annuity or mark-to-market.
    #[error("Numerical error: {reason}")]
    Numerical {
        /// Description of the failure.
        reason: String,
    },

    /// Invalid swap terms.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of why input is invalid.
        reason: String,
    },
}

impl SwapError {
    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates a numerical error.
    #[must_use]
    pub fn numerical(reason: impl Into<String>) -> Self {
        Self::Numerical {
            reason: reason.into(),
        }
    }

    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Returns the caller-facing classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            SwapError::Core(e) => e.kind(),
            SwapError::Curve(e) => e.kind(),
            SwapError::EmptySchedule { .. } | SwapError::NoRemainingPeriods { .. } => {
                ErrorKind::EmptySchedule
            }
            SwapError::InvalidSchedule { .. } => ErrorKind::InvalidSchedule,
            SwapError::Numerical { .. } => ErrorKind::Numerical,
            SwapError::InvalidInput { .. } => ErrorKind::InvalidInput,
        }
    }
}
