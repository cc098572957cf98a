//! Error types for the CFHedge engine.
//!
//! Every crate in the workspace defines its own error enum; all of them
//! classify into the shared [`ErrorKind`] taxonomy so callers can decide
//! whether to abort or retry with corrected input without matching on
//! crate-specific variants.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// A specialized Result type for core operations.
pub type HedgeResult<T> = Result<T, HedgeError>;

/// Caller-facing classification of every failure the engine can surface.
///
/// None of these are fatal to the process and none are retried internally:
/// all operations are deterministic, so retrying without changing the
/// input is pointless.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ErrorKind {
    /// Unrecognized currency, day-count, calendar, or tenor code.
    UnsupportedConvention,
    /// Unrecognized interpolation method.
    UnsupportedMethod,
    /// A schedule generated zero periods.
    EmptySchedule,
    /// Schedule start/end ordering violated.
    InvalidSchedule,
    /// No discount curve for a (currency, frequency, date) key.
    CurveNotFound,
    /// First discount factor is not 1, or the base date does not match
    /// the first pillar.
    InvalidCurveBaseline,
    /// A required scalar input is absent.
    MissingInput,
    /// Any other malformed caller input (unsorted dates, bad values).
    InvalidInput,
    /// Degenerate arithmetic, such as a zero denominator.
    Numerical,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ErrorKind::UnsupportedConvention => "UnsupportedConvention",
            ErrorKind::UnsupportedMethod => "UnsupportedMethod",
            ErrorKind::EmptySchedule => "EmptySchedule",
            ErrorKind::InvalidSchedule => "InvalidSchedule",
            ErrorKind::CurveNotFound => "CurveNotFound",
            ErrorKind::InvalidCurveBaseline => "InvalidCurveBaseline",
            ErrorKind::MissingInput => "MissingInput",
            ErrorKind::InvalidInput => "InvalidInput",
            ErrorKind::Numerical => "Numerical",
        };
        write!(f, "{name}")
    }
}

/// Errors raised by the core types, conventions and lookups.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HedgeError {
    /// Error in date construction or parsing.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Convention code not recognized.
    #[error("Unsupported {category}: {code}")]
    UnsupportedConvention {
        /// What kind of code was being parsed ("currency", "day count", ...).
        category: &'static str,
        /// The offending code as supplied.
        code: String,
    },

    /// Malformed input.
    #[error("Invalid input: {reason}")]
    InvalidInput {
        /// Description of what's invalid.
        reason: String,
    },
}

impl HedgeError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an unsupported convention error.
    #[must_use]
    pub fn unsupported(category: &'static str, code: impl Into<String>) -> Self {
        Self::UnsupportedConvention {
            category,
            code: code.into(),
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
            HedgeError::UnsupportedConvention { .. } => ErrorKind::UnsupportedConvention,
            HedgeError::InvalidDate { .. } | HedgeError::InvalidInput { .. } => {
                ErrorKind::InvalidInput
            }
        }
    }
}
