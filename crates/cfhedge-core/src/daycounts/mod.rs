//! Day count conventions.
//!
//! - [`Act360`]: Actual/360
//! - [`Act365Fixed`]: Actual/365 Fixed
//!
//! Conventions are selected at runtime through [`DayCountConvention`], which
//! parses the trade-level codes (`ACT/360`, `ACT/365`) and carries the
//! spreadsheet `YEARFRAC` basis code each convention corresponds to.

mod act360;
mod act365;

pub use act360::Act360;
pub use act365::Act365Fixed;

use serde::{Deserialize, Serialize};

use crate::error::HedgeError;
use crate::types::Date;

/// Trait for day count conventions.
///
/// Implementations must be thread-safe (`Send + Sync`) so curves and swaps
/// holding them can be shared across a parallel portfolio run.
pub trait DayCount: Send + Sync {
    /// Returns the name of the day count convention.
    fn name(&self) -> &'static str;

    /// Calculates the year fraction between two dates.
    ///
    /// Negative if `end < start`.
    fn year_fraction(&self, start: Date, end: Date) -> f64;

    /// Calculates the day count between two dates.
    fn day_count(&self, start: Date, end: Date) -> i64;
}

/// Enumeration of the supported day count conventions.
///
/// ```rust
/// use cfhedge_core::daycounts::{DayCount, DayCountConvention};
/// use cfhedge_core::types::Date;
///
/// let dc: DayCountConvention = "ACT/360".parse().unwrap();
/// let start = Date::from_ymd(2025, 1, 1).unwrap();
/// let end = Date::from_ymd(2025, 4, 1).unwrap();
/// assert_eq!(dc.year_fraction(start, end), 0.25);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(try_from = "String", into = "String")]
pub enum DayCountConvention {
    /// Actual/360
    #[default]
    Act360,
    /// Actual/365 Fixed
    Act365Fixed,
}

impl DayCountConvention {
    /// Creates a boxed day count implementation.
    #[must_use]
    pub fn to_day_count(&self) -> Box<dyn DayCount> {
        match self {
            DayCountConvention::Act360 => Box::new(Act360),
            DayCountConvention::Act365Fixed => Box::new(Act365Fixed),
        }
    }

    /// Returns the trade-level code of the convention.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            DayCountConvention::Act360 => "ACT/360",
            DayCountConvention::Act365Fixed => "ACT/365",
        }
    }

    /// Returns the year basis (denominator).
    #[must_use]
    pub const fn basis(&self) -> u32 {
        match self {
            DayCountConvention::Act360 => 360,
            DayCountConvention::Act365Fixed => 365,
        }
    }

    /// Spreadsheet `YEARFRAC` basis code: 2 for Act/360, 3 for Act/365.
    #[must_use]
    pub const fn yearfrac_basis(&self) -> u8 {
        match self {
            DayCountConvention::Act360 => 2,
            DayCountConvention::Act365Fixed => 3,
        }
    }

    /// Returns all available conventions.
    #[must_use]
    pub fn all() -> &'static [DayCountConvention] {
        &[DayCountConvention::Act360, DayCountConvention::Act365Fixed]
    }
}

impl DayCount for DayCountConvention {
    fn name(&self) -> &'static str {
        self.code()
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        match self {
            DayCountConvention::Act360 => Act360.year_fraction(start, end),
            DayCountConvention::Act365Fixed => Act365Fixed.year_fraction(start, end),
        }
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for DayCountConvention {
    type Err = HedgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase();

        match normalized.as_str() {
            "ACT/360" | "ACTUAL/360" | "ACT360" => Ok(DayCountConvention::Act360),
            "ACT/365" | "ACT/365F" | "ACT/365 FIXED" | "ACTUAL/365" | "ACT365" => {
                Ok(DayCountConvention::Act365Fixed)
            }
            _ => Err(HedgeError::unsupported("day count", s)),
        }
    }
}

impl TryFrom<String> for DayCountConvention {
    type Error = HedgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<DayCountConvention> for String {
    fn from(dc: DayCountConvention) -> Self {
        dc.code().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_codes() {
        assert_eq!("ACT/360".parse::<DayCountConvention>().unwrap(), DayCountConvention::Act360);
        assert_eq!("act/365".parse::<DayCountConvention>().unwrap(), DayCountConvention::Act365Fixed);
        assert_eq!(
            "ACTUAL/365".parse::<DayCountConvention>().unwrap(),
            DayCountConvention::Act365Fixed
        );
    }

    #[test]
    fn test_unknown_code_is_unsupported() {
        let err = "30/360".parse::<DayCountConvention>().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnsupportedConvention);
    }

    #[test]
    fn test_yearfrac_basis() {
        assert_eq!(DayCountConvention::Act360.yearfrac_basis(), 2);
        assert_eq!(DayCountConvention::Act365Fixed.yearfrac_basis(), 3);
    }

    #[test]
    fn test_boxed_matches_enum() {
        let start = Date::from_ymd(2023, 3, 31).unwrap();
        let end = Date::from_ymd(2023, 9, 29).unwrap();
        for dc in DayCountConvention::all() {
            let boxed = dc.to_day_count();
            assert_eq!(boxed.year_fraction(start, end), dc.year_fraction(start, end));
            assert_eq!(boxed.name(), dc.code());
        }
    }
}
