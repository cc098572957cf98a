//! TARGET calendar for Eurozone payments.

use super::holidays::easter_offset;
use super::Calendar;
use crate::types::Date;

/// TARGET holiday calendar.
///
/// ## Holidays
///
/// - New Year's Day (January 1)
/// - Good Friday and Easter Monday (from 2000)
/// - Labour Day (May 1, from 2000)
/// - Christmas Day (December 25)
/// - Boxing Day (December 26, from 2000)
/// - December 31 in 1998, 1999 and 2001
///
/// Holidays falling on a weekend are not moved.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetCalendar;

impl TargetCalendar {
    fn is_target_holiday(date: Date) -> bool {
        let year = date.year();
        let since_2000 = year >= 2000;

        match (date.month(), date.day()) {
            (1, 1) | (12, 25) => return true,
            (5, 1) | (12, 26) if since_2000 => return true,
            (12, 31) if matches!(year, 1998 | 1999 | 2001) => return true,
            _ => {}
        }

        since_2000 && matches!(easter_offset(date), Some(-2 | 1))
    }
}

impl Calendar for TargetCalendar {
    fn name(&self) -> &'static str {
        "TARGET"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !Self::is_target_holiday(date)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_easter_2023() {
        let cal = TargetCalendar;
        assert!(!cal.is_business_day(Date::from_ymd(2023, 4, 7).unwrap())); // Good Friday
        assert!(!cal.is_business_day(Date::from_ymd(2023, 4, 10).unwrap())); // Easter Monday
        assert!(cal.is_business_day(Date::from_ymd(2023, 4, 11).unwrap()));
    }

    #[test]
    fn test_target_fixed_holidays() {
        let cal = TargetCalendar;
        assert!(!cal.is_business_day(Date::from_ymd(2024, 1, 1).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2024, 5, 1).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2024, 12, 25).unwrap()));
        assert!(!cal.is_business_day(Date::from_ymd(2024, 12, 26).unwrap()));
        // Not a TARGET holiday
        assert!(cal.is_business_day(Date::from_ymd(2024, 10, 3).unwrap()));
    }

    #[test]
    fn test_target_no_weekend_substitution() {
        let cal = TargetCalendar;
        // 2022-01-01 is a Saturday; Monday Jan 3 stays open
        assert!(cal.is_business_day(Date::from_ymd(2022, 1, 3).unwrap()));
    }
}
