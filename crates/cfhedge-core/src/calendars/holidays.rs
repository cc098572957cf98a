//! Date rules shared by the holiday calendars.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::types::Date;

/// Calculate Easter Sunday using the anonymous Gregorian algorithm.
#[must_use]
pub fn easter_sunday(year: i32) -> Option<Date> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    NaiveDate::from_ymd_opt(year, month as u32, day as u32).map(Date::from)
}

/// Signed offset in days of `date` from Easter Sunday of its year.
pub(crate) fn easter_offset(date: Date) -> Option<i64> {
    easter_sunday(date.year()).map(|easter| easter.days_between(&date))
}

/// Returns true if date is the nth occurrence of weekday in its month.
pub(crate) fn is_nth_weekday(date: Date, weekday: Weekday, n: u32) -> bool {
    date.weekday() == weekday && (date.day() - 1) / 7 + 1 == n
}

/// Returns true if date is the last occurrence of weekday in its month.
pub(crate) fn is_last_weekday(date: Date, weekday: Weekday) -> bool {
    date.weekday() == weekday && date.add_days(7).month() != date.month()
}

pub(crate) fn weekday_of(date: Date) -> Weekday {
    date.as_naive_date().weekday()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easter_dates() {
        assert_eq!(easter_sunday(2023), Some(Date::from_ymd(2023, 4, 9).unwrap()));
        assert_eq!(easter_sunday(2024), Some(Date::from_ymd(2024, 3, 31).unwrap()));
        assert_eq!(easter_sunday(2025), Some(Date::from_ymd(2025, 4, 20).unwrap()));
    }

    #[test]
    fn test_weekday_rules() {
        // 2025-01-20 is the 3rd Monday of January
        let mlk = Date::from_ymd(2025, 1, 20).unwrap();
        assert!(is_nth_weekday(mlk, Weekday::Mon, 3));
        assert!(!is_nth_weekday(mlk, Weekday::Mon, 2));

        // 2025-05-26 is the last Monday of May
        let memorial = Date::from_ymd(2025, 5, 26).unwrap();
        assert!(is_last_weekday(memorial, Weekday::Mon));
        assert!(!is_last_weekday(Date::from_ymd(2025, 5, 19).unwrap(), Weekday::Mon));
    }
}
