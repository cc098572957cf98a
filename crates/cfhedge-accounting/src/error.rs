//! Error types for hedge accounting.

use cfhedge_core::types::Date;
use cfhedge_core::{ErrorKind, HedgeError};
use cfhedge_curves::CurveError;
use cfhedge_swaps::SwapError;
use thiserror::Error;

use crate::relationship::RelationshipState;

/// A specialized Result type for hedge accounting operations.
pub type AccountingResult<T> = Result<T, AccountingError>;

/// Error types for hedge accounting operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AccountingError {
    /// Convention, date or input error from the core types.
    #[error(transparent)]
    Core(#[from] HedgeError),

    /// Curve lookup or query failure.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Swap construction or valuation failure.
    #[error(transparent)]
    Swap(#[from] SwapError),

    /// A required input was not supplied.
    #[error("Missing input: {what}")]
    MissingInput {
        /// Name of the missing input.
        what: &'static str,
    },

    /// The relationship cannot perform the action in its current state.
    #[error("Cannot {action} a relationship in state {state}")]
    InvalidTransition {
        /// Current state.
        state: RelationshipState,
        /// Attempted action.
        action: &'static str,
    },

    /// A test date cannot be matched to a period of the hedging schedule.
    #[error("Date {date} is outside the hedging schedule {first} to {last}")]
    DateOutsideSchedule {
        /// The unmatched date.
        date: Date,
        /// First period start.
        first: Date,
        /// Last period end.
        last: Date,
    },

    /// Invalid trade, observation or event.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of why input is invalid.
        reason: String,
    },
}

impl AccountingError {
    /// Creates an invalid input error.
    #[must_use]
    pub fn invalid_input(reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            reason: reason.into(),
        }
    }

    /// Creates a missing input error.
    #[must_use]
    pub fn missing(what: &'static str) -> Self {
        Self::MissingInput { what }
    }

    /// Returns the caller-facing classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            AccountingError::Core(e) => e.kind(),
            AccountingError::Curve(e) => e.kind(),
            AccountingError::Swap(e) => e.kind(),
            AccountingError::MissingInput { .. } => ErrorKind::MissingInput,
            AccountingError::InvalidTransition { .. }
            | AccountingError::DateOutsideSchedule { .. }
            | AccountingError::InvalidInput { .. } => ErrorKind::InvalidInput,
        }
    }
}
