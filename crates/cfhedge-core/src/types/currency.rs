//! Currency type with ISO 4217 codes.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::calendars::CalendarId;
use crate::error::HedgeError;

/// Currencies the engine has market conventions for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    /// Euro
    EUR,
    /// British Pound Sterling
    GBP,
    /// United States Dollar
    USD,
}

impl Currency {
    /// Returns the ISO 4217 3-letter code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
            Currency::USD => "USD",
        }
    }

    /// Returns the full currency name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Currency::EUR => "Euro",
            Currency::GBP => "British Pound Sterling",
            Currency::USD => "US Dollar",
        }
    }

    /// Holiday calendar used for schedule adjustment in this currency.
    #[must_use]
    pub fn calendar_id(&self) -> CalendarId {
        match self {
            Currency::EUR => CalendarId::Target,
            Currency::GBP => CalendarId::UnitedKingdom,
            Currency::USD => CalendarId::UnitedStates,
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for Currency {
    type Err = HedgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "EUR" => Ok(Currency::EUR),
            "GBP" => Ok(Currency::GBP),
            "USD" => Ok(Currency::USD),
            _ => Err(HedgeError::unsupported("currency", s)),
        }
    }
}
