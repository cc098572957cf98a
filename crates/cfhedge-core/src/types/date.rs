//! Date type for financial calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

use crate::error::{HedgeError, HedgeResult};

/// A calendar date for financial calculations.
///
/// This is a newtype wrapper around `chrono::NaiveDate` providing
/// financial-specific operations and ensuring type safety.
///
/// # Example
///
/// ```rust
/// use cfhedge_core::types::Date;
///
/// let date = Date::from_ymd(2023, 3, 31).unwrap();
/// let next = date.add_months(3).unwrap();
/// assert_eq!(next, Date::from_ymd(2023, 6, 30).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `HedgeError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> HedgeResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| HedgeError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Creates a date from an ISO 8601 string (YYYY-MM-DD).
    ///
    /// # Errors
    ///
    /// Returns `HedgeError::InvalidDate` if the string is not a valid date.
    pub fn parse(s: &str) -> HedgeResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map(Date)
            .map_err(|_| HedgeError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Parses the compact `yyyyMMdd` form used in curve identifiers.
    pub fn parse_compact(s: &str) -> HedgeResult<Self> {
        NaiveDate::parse_from_str(s.trim(), "%Y%m%d")
            .map(Date)
            .map_err(|_| HedgeError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Formats the date as `yyyyMMdd`.
    #[must_use]
    pub fn to_compact(&self) -> String {
        self.0.format("%Y%m%d").to_string()
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of days, failing instead of overflowing the date range.
    ///
    /// # Errors
    ///
    /// Returns `HedgeError::InvalidDate` if the result is out of range.
    pub fn checked_add_days(&self, days: i64) -> HedgeResult<Self> {
        let shifted = if days >= 0 {
            self.0.checked_add_days(chrono::Days::new(days.unsigned_abs()))
        } else {
            self.0.checked_sub_days(chrono::Days::new(days.unsigned_abs()))
        };
        shifted
            .map(Date)
            .ok_or_else(|| HedgeError::invalid_date(format!("{self} {days:+} days")))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `HedgeError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> HedgeResult<Self> {
        let total_months = (self.year() * 12 + self.month() as i32 - 1)
            .checked_add(months)
            .ok_or_else(|| HedgeError::invalid_date(format!("{self} {months:+} months")))?;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let new_day = self.day().min(days_in_month(new_year, new_month));

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Adds a number of years to the date.
    ///
    /// # Errors
    ///
    /// Returns `HedgeError::InvalidDate` if the result is invalid.
    pub fn add_years(&self, years: i32) -> HedgeResult<Self> {
        let months = years
            .checked_mul(12)
            .ok_or_else(|| HedgeError::invalid_date(format!("{self} {years:+} years")))?;
        self.add_months(months)
    }

    /// Calculates the number of calendar days between two dates.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl std::str::FromStr for Date {
    type Err = HedgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Date::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    /// Adds days to a date.
    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    /// Subtracts days from a date.
    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2023, 3, 31).unwrap();
        assert_eq!(date.year(), 2023);
        assert_eq!(date.month(), 3);
        assert_eq!(date.day(), 31);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_add_months_clamps_day() {
        let date = Date::from_ymd(2023, 3, 31).unwrap();
        assert_eq!(date.add_months(3).unwrap(), Date::from_ymd(2023, 6, 30).unwrap());
        assert_eq!(date.add_months(-1).unwrap(), Date::from_ymd(2023, 2, 28).unwrap());
        assert_eq!(date.add_months(-3).unwrap(), Date::from_ymd(2022, 12, 31).unwrap());
    }

    #[test]
    fn test_add_years_leap_day() {
        let date = Date::from_ymd(2024, 2, 29).unwrap();
        assert_eq!(date.add_years(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
    }

    #[test]
    fn test_out_of_range_arithmetic_is_an_error() {
        let date = Date::from_ymd(2023, 3, 31).unwrap();
        assert!(date.add_months(i32::MAX).is_err());
        assert!(date.add_years(i32::MIN).is_err());
        assert!(date.checked_add_days(i64::MAX).is_err());
        assert_eq!(date.checked_add_days(-31).unwrap(), Date::from_ymd(2023, 2, 28).unwrap());
    }

    #[test]
    fn test_compact_round_trip() {
        let date = Date::parse_compact("20230331").unwrap();
        assert_eq!(date, Date::from_ymd(2023, 3, 31).unwrap());
        assert_eq!(date.to_compact(), "20230331");
        assert!(Date::parse_compact("2023-03-31").is_err());
    }

    #[test]
    fn test_date_arithmetic_operators() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = d1 + 10;
        assert_eq!(d2.day(), 11);
        assert_eq!((d2 - 5).day(), 6);
        assert_eq!(d2 - d1, 10);
    }

    #[test]
    fn test_display_and_serde() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.to_string(), "2025-06-15");
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let parsed: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(date, parsed);
    }
}
