//! Floating-leg direction flag.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::HedgeError;

/// Whether the floating leg of a swap is paid or received.
///
/// Receiving floating means paying fixed, and vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PayReceive {
    /// The floating leg is paid.
    Pay,
    /// The floating leg is received.
    Receive,
}

impl PayReceive {
    /// The opposite direction.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            PayReceive::Pay => PayReceive::Receive,
            PayReceive::Receive => PayReceive::Pay,
        }
    }
}

impl fmt::Display for PayReceive {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PayReceive::Pay => write!(f, "PAY"),
            PayReceive::Receive => write!(f, "RECEIVE"),
        }
    }
}

impl std::str::FromStr for PayReceive {
    type Err = HedgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "PAY" => Ok(PayReceive::Pay),
            "RECEIVE" => Ok(PayReceive::Receive),
            _ => Err(HedgeError::invalid_input(format!(
                "pay/receive flag must be PAY or RECEIVE, got '{s}'"
            ))),
        }
    }
}
