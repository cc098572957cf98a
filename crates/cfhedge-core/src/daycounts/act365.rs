//! Actual/365 Fixed day count convention.

use super::DayCount;
use crate::types::Date;

/// Actual/365 Fixed.
///
/// Actual days over a fixed 365-day year, regardless of leap years.
/// Standard for GBP SONIA legs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Act365Fixed;

impl DayCount for Act365Fixed {
    fn name(&self) -> &'static str {
        "ACT/365"
    }

    fn year_fraction(&self, start: Date, end: Date) -> f64 {
        start.days_between(&end) as f64 / 365.0
    }

    fn day_count(&self, start: Date, end: Date) -> i64 {
        start.days_between(&end)
    }
}
