//! Business day adjustment conventions.

use serde::{Deserialize, Serialize};

use super::Calendar;
use crate::types::Date;

/// Business day adjustment conventions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum BusinessDayConvention {
    /// No adjustment.
    Unadjusted,

    /// Move to the following business day.
    Following,

    /// Move to the following business day, unless it crosses a month boundary,
    /// in which case move to the preceding business day.
    #[default]
    ModifiedFollowing,

    /// Move to the preceding business day.
    Preceding,

    /// Move to the preceding business day, unless it crosses a month boundary,
    /// in which case move to the following business day.
    ModifiedPreceding,
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            BusinessDayConvention::Unadjusted => "Unadjusted",
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
        };
        write!(f, "{name}")
    }
}

/// Adjusts a date according to the given business day convention.
pub fn adjust<C: Calendar + ?Sized>(
    date: Date,
    convention: BusinessDayConvention,
    calendar: &C,
) -> Date {
    if calendar.is_business_day(date) {
        return date;
    }

    match convention {
        BusinessDayConvention::Unadjusted => date,

        BusinessDayConvention::Following => following(date, calendar),

        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = following(date, calendar);
            if adjusted.month() != date.month() {
                preceding(date, calendar)
            } else {
                adjusted
            }
        }

        BusinessDayConvention::Preceding => preceding(date, calendar),

        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = preceding(date, calendar);
            if adjusted.month() != date.month() {
                following(date, calendar)
            } else {
                adjusted
            }
        }
    }
}

fn following<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(1);
    }
    date
}

fn preceding<C: Calendar + ?Sized>(mut date: Date, calendar: &C) -> Date {
    while !calendar.is_business_day(date) {
        date = date.add_days(-1);
    }
    date
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendars::{TargetCalendar, WeekendCalendar};

    #[test]
    fn test_following() {
        let cal = WeekendCalendar;
        let saturday = Date::from_ymd(2025, 1, 4).unwrap();
        let adjusted = adjust(saturday, BusinessDayConvention::Following, &cal);
        assert_eq!(adjusted, Date::from_ymd(2025, 1, 6).unwrap());
    }

    #[test]
    fn test_modified_following_month_end() {
        let cal = WeekendCalendar;
        // Saturday 2023-09-30: following would be October 2, so roll back
        let saturday = Date::from_ymd(2023, 9, 30).unwrap();
        let adjusted = adjust(saturday, BusinessDayConvention::ModifiedFollowing, &cal);
        assert_eq!(adjusted, Date::from_ymd(2023, 9, 29).unwrap());
    }

    #[test]
    fn test_modified_preceding_month_start() {
        let cal = WeekendCalendar;
        // Sunday 2023-10-01: preceding would be September 29, so roll forward
        let sunday = Date::from_ymd(2023, 10, 1).unwrap();
        let adjusted = adjust(sunday, BusinessDayConvention::ModifiedPreceding, &cal);
        assert_eq!(adjusted, Date::from_ymd(2023, 10, 2).unwrap());
    }

    #[test]
    fn test_holiday_roll() {
        let cal = TargetCalendar;
        // Good Friday 2023 rolls past Easter Monday
        let good_friday = Date::from_ymd(2023, 4, 7).unwrap();
        assert_eq!(
            adjust(good_friday, BusinessDayConvention::ModifiedFollowing, &cal),
            Date::from_ymd(2023, 4, 11).unwrap()
        );
        assert_eq!(
            adjust(good_friday, BusinessDayConvention::Unadjusted, &cal),
            good_friday
        );
    }
}
