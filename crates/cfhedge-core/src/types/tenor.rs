//! Tenor codes such as `3M` or `1Y`.

use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Date, Frequency};
use crate::error::{HedgeError, HedgeResult};

/// Unit of a [`Tenor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TenorUnit {
    /// Calendar days
    Days,
    /// Weeks of seven days
    Weeks,
    /// Calendar months
    Months,
    /// Calendar years
    Years,
}

impl TenorUnit {
    fn suffix(self) -> char {
        match self {
            TenorUnit::Days => 'D',
            TenorUnit::Weeks => 'W',
            TenorUnit::Months => 'M',
            TenorUnit::Years => 'Y',
        }
    }
}

/// A period length expressed as a count of units.
///
/// Serializes as its code (`"3M"`).
///
/// ```rust
/// use cfhedge_core::types::{Date, Tenor};
///
/// let tenor: Tenor = "3M".parse().unwrap();
/// let start = Date::from_ymd(2023, 3, 31).unwrap();
/// assert_eq!(tenor.advance(start, 1).unwrap(), Date::from_ymd(2023, 6, 30).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Tenor {
    length: u32,
    unit: TenorUnit,
}

impl Tenor {
    /// Creates a tenor; the length must be positive.
    pub fn new(length: u32, unit: TenorUnit) -> HedgeResult<Self> {
        if length == 0 {
            return Err(HedgeError::unsupported("tenor", format!("0{}", unit.suffix())));
        }
        Ok(Self { length, unit })
    }

    /// Number of units.
    #[must_use]
    pub fn length(&self) -> u32 {
        self.length
    }

    /// The unit.
    #[must_use]
    pub fn unit(&self) -> TenorUnit {
        self.unit
    }

    /// Moves `date` by `multiple` tenors (negative moves backward).
    ///
    /// Month and year tenors are measured from `date` itself, so stepping
    /// from an anchor by `k` tenors never accumulates end-of-month clamping.
    pub fn advance(&self, date: Date, multiple: i32) -> HedgeResult<Date> {
        let n = i32::try_from(self.length)
            .ok()
            .and_then(|length| length.checked_mul(multiple))
            .ok_or_else(|| HedgeError::invalid_date(format!("{date} {multiple:+} x {self}")))?;
        match self.unit {
            TenorUnit::Days => date.checked_add_days(i64::from(n)),
            TenorUnit::Weeks => date.checked_add_days(i64::from(n) * 7),
            TenorUnit::Months => date.add_months(n),
            TenorUnit::Years => date.add_years(n),
        }
    }

    /// Frequency with the same period length, for month and year tenors
    /// that divide a year.
    pub fn frequency(&self) -> HedgeResult<Frequency> {
        let months = match self.unit {
            TenorUnit::Months => self.length,
            TenorUnit::Years => self.length.saturating_mul(12),
            TenorUnit::Days | TenorUnit::Weeks => 0,
        };
        Frequency::from_months(months)
            .ok_or_else(|| HedgeError::unsupported("reset frequency", self.to_string()))
    }
}

impl fmt::Display for Tenor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.length, self.unit.suffix())
    }
}

impl std::str::FromStr for Tenor {
    type Err = HedgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let code = s.trim().to_uppercase();
        let unsupported = || HedgeError::unsupported("tenor", s);

        let unit = match code.chars().last() {
            Some('D') => TenorUnit::Days,
            Some('W') => TenorUnit::Weeks,
            Some('M') => TenorUnit::Months,
            Some('Y') => TenorUnit::Years,
            _ => return Err(unsupported()),
        };
        let length: u32 = code[..code.len() - 1].parse().map_err(|_| unsupported())?;

        Tenor::new(length, unit).map_err(|_| unsupported())
    }
}

impl TryFrom<String> for Tenor {
    type Error = HedgeError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Tenor> for String {
    fn from(tenor: Tenor) -> Self {
        tenor.to_string()
    }
}

impl From<Frequency> for Tenor {
    fn from(frequency: Frequency) -> Self {
        Tenor {
            length: frequency.months_per_period(),
            unit: TenorUnit::Months,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    #[test]
    fn test_parse_and_display() {
        let tenor: Tenor = "3m".parse().unwrap();
        assert_eq!(tenor.length(), 3);
        assert_eq!(tenor.unit(), TenorUnit::Months);
        assert_eq!(tenor.to_string(), "3M");
        assert_eq!("1Y".parse::<Tenor>().unwrap().frequency().unwrap(), Frequency::Annual);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        for code in ["", "M", "3X", "0M", "-3M", "3.5M"] {
            let err = code.parse::<Tenor>().unwrap_err();
            assert_eq!(err.kind(), ErrorKind::UnsupportedConvention, "{code}");
        }
    }

    #[test]
    fn test_advance_from_anchor() {
        let tenor: Tenor = "3M".parse().unwrap();
        let anchor = Date::from_ymd(2025, 8, 31).unwrap();
        assert_eq!(tenor.advance(anchor, -2).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
        assert_eq!(tenor.advance(anchor, -4).unwrap(), Date::from_ymd(2024, 8, 31).unwrap());
        let weekly: Tenor = "2W".parse().unwrap();
        assert_eq!(weekly.advance(anchor, 1).unwrap(), Date::from_ymd(2025, 9, 14).unwrap());
    }

    #[test]
    fn test_advance_overflow_is_an_error() {
        let anchor = Date::from_ymd(2023, 3, 31).unwrap();
        let long = Tenor::new(u32::MAX, TenorUnit::Months).unwrap();
        assert_eq!(long.advance(anchor, 1).unwrap_err().kind(), ErrorKind::InvalidInput);
        let tenor: Tenor = "3M".parse().unwrap();
        assert!(tenor.advance(anchor, i32::MAX).is_err());
        let daily = Tenor::new(1_000_000, TenorUnit::Weeks).unwrap();
        assert!(daily.advance(anchor, 1_000).is_err());
    }

    #[test]
    fn test_frequency_mapping() {
        assert_eq!("6M".parse::<Tenor>().unwrap().frequency().unwrap(), Frequency::SemiAnnual);
        assert!("5M".parse::<Tenor>().unwrap().frequency().is_err());
        assert!("7D".parse::<Tenor>().unwrap().frequency().is_err());
        assert_eq!(Tenor::from(Frequency::Quarterly).to_string(), "3M");
    }

    #[test]
    fn test_serde_as_code() {
        let tenor: Tenor = "6M".parse().unwrap();
        assert_eq!(serde_json::to_string(&tenor).unwrap(), "\"6M\"");
        let back: Tenor = serde_json::from_str("\"6M\"").unwrap();
        assert_eq!(back, tenor);
    }
}
