//! Error types for curve operations.

use cfhedge_core::types::Date;
use cfhedge_core::{ErrorKind, HedgeError};
use cfhedge_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// Convention or date error from the core types.
    #[error(transparent)]
    Core(#[from] HedgeError),

    /// Interpolation failure.
    #[error(transparent)]
    Math(#[from] MathError),

    /// First pillar is not the base date, or its discount factor is not 1.
    #[error("Invalid curve baseline: {reason}")]
    InvalidBaseline {
        /// Description of the mismatch.
        reason: String,
    },

    /// No curve stored under the requested key.
    #[error("Curve not found: {name}")]
    CurveNotFound {
        /// Canonical name of the missing curve.
        name: String,
    },

    /// A curve is already stored under the key and overwrite was not requested.
    #[error("Curve already exists: {name}")]
    CurveExists {
        /// Canonical name of the existing curve.
        name: String,
    },

    /// Query date precedes the curve base date.
    #[error("Date {date} precedes curve base date {base}")]
    DateBeforeBase {
        /// The query date.
        date: Date,
        /// The curve base date.
        base: Date,
    },

    /// Not enough pillars.
    #[error("Insufficient points: need at least {required}, got {got}")]
    InsufficientPoints {
        /// Minimum required points.
        required: usize,
        /// Actual number of points provided.
        got: usize,
    },

    /// Pillar dates are not strictly increasing.
    #[error("Non-monotonic pillar dates at index {index}: {prev} >= {current}")]
    NonMonotonicDates {
        /// Index where the violation occurred.
        index: usize,
        /// Previous pillar date.
        prev: Date,
        /// Offending pillar date.
        current: Date,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why value is invalid.
        reason: String,
    },

    /// Reading or parsing a curve file failed.
    #[error("Cannot load curve from {path}: {reason}")]
    Load {
        /// File or directory involved.
        path: String,
        /// Underlying failure.
        reason: String,
    },
}

impl CurveError {
    /// Creates an invalid baseline error.
    #[must_use]
    pub fn invalid_baseline(reason: impl Into<String>) -> Self {
        Self::InvalidBaseline {
            reason: reason.into(),
        }
    }

    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Creates a load error.
    #[must_use]
    pub fn load(path: impl Into<String>, reason: impl ToString) -> Self {
        Self::Load {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// Returns the caller-facing classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            CurveError::Core(e) => e.kind(),
            CurveError::Math(e) => e.kind(),
            CurveError::InvalidBaseline { .. } => ErrorKind::InvalidCurveBaseline,
            CurveError::CurveNotFound { .. } => ErrorKind::CurveNotFound,
            CurveError::CurveExists { .. }
            | CurveError::DateBeforeBase { .. }
            | CurveError::InsufficientPoints { .. }
            | CurveError::NonMonotonicDates { .. }
            | CurveError::InvalidValue { .. }
            | CurveError::Load { .. } => ErrorKind::InvalidInput,
        }
    }
}
