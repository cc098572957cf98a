//! Curve identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;

use cfhedge_core::types::{Currency, Date, Tenor};
use cfhedge_core::HedgeError;

use crate::error::{CurveError, CurveResult};

const PREFIX: &str = "MarketData.DiscountCurves";

/// Identifies a discount curve snapshot by currency, reset tenor and as-of date.
///
/// The canonical name is `MarketData.DiscountCurves.{CCY}.{TENOR}.{yyyyMMdd}`.
///
/// ```rust
/// use cfhedge_curves::CurveKey;
///
/// let key: CurveKey = "EUR.3M.20230331".parse().unwrap();
/// assert_eq!(key.to_string(), "MarketData.DiscountCurves.EUR.3M.20230331");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CurveKey {
    /// Curve currency.
    pub currency: Currency,
    /// Floating reset tenor the curve projects.
    pub tenor: Tenor,
    /// Snapshot date, equal to the curve base date.
    pub as_of: Date,
}

impl CurveKey {
    /// Creates a key.
    #[must_use]
    pub fn new(currency: Currency, tenor: Tenor, as_of: Date) -> Self {
        Self {
            currency,
            tenor,
            as_of,
        }
    }

    /// Short form without the namespace, used for file names.
    #[must_use]
    pub fn short_name(&self) -> String {
        format!("{}.{}.{}", self.currency, self.tenor, self.as_of.to_compact())
    }
}

impl fmt::Display for CurveKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{PREFIX}.{}", self.short_name())
    }
}

impl std::str::FromStr for CurveKey {
    type Err = CurveError;

    /// Accepts the canonical name or its short form `CCY.TENOR.yyyyMMdd`.
    fn from_str(s: &str) -> CurveResult<Self> {
        let trimmed = s.trim();
        let short = trimmed
            .strip_prefix(PREFIX)
            .and_then(|rest| rest.strip_prefix('.'))
            .unwrap_or(trimmed);

        let parts: Vec<&str> = short.split('.').collect();
        let [ccy, tenor, date] = parts.as_slice() else {
            return Err(HedgeError::invalid_input(format!(
                "curve name must be CCY.TENOR.yyyyMMdd, got '{s}'"
            ))
            .into());
        };

        Ok(Self {
            currency: ccy.parse()?,
            tenor: tenor.parse()?,
            as_of: Date::parse_compact(date)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfhedge_core::ErrorKind;

    #[test]
    fn test_round_trip() {
        let key = CurveKey::new(
            Currency::GBP,
            "6M".parse().unwrap(),
            Date::from_ymd(2024, 12, 31).unwrap(),
        );
        let name = key.to_string();
        assert_eq!(name, "MarketData.DiscountCurves.GBP.6M.20241231");
        assert_eq!(name.parse::<CurveKey>().unwrap(), key);
        assert_eq!(key.short_name().parse::<CurveKey>().unwrap(), key);
    }

    #[test]
    fn test_bad_names() {
        assert_eq!(
            "EUR.3M".parse::<CurveKey>().unwrap_err().kind(),
            ErrorKind::InvalidInput
        );
        assert_eq!(
            "JPY.3M.20230331".parse::<CurveKey>().unwrap_err().kind(),
            ErrorKind::UnsupportedConvention
        );
    }
}
