//! US settlement calendar.

use chrono::Weekday;

use super::holidays::{is_last_weekday, is_nth_weekday, weekday_of};
use super::Calendar;
use crate::types::Date;

/// US settlement calendar.
///
/// Federal holidays falling on Saturday are observed on the preceding
/// Friday, those falling on Sunday on the following Monday.
#[derive(Debug, Clone, Copy, Default)]
pub struct UsCalendar;

impl UsCalendar {
    fn is_federal_holiday(date: Date) -> bool {
        let year = date.year();
        let month = date.month();
        let weekday = weekday_of(date);

        let on = |d: Date, m: u32, dd: u32| d.month() == m && d.day() == dd;
        let fixed = |m: u32, d: u32| -> bool {
            on(date, m, d)
                || (weekday == Weekday::Fri && on(date.add_days(1), m, d))
                || (weekday == Weekday::Mon && on(date.add_days(-1), m, d))
        };

        if fixed(1, 1) {
            return true;
        }
        if year >= 2022 && fixed(6, 19) {
            return true;
        }
        if fixed(7, 4) || fixed(11, 11) || fixed(12, 25) {
            return true;
        }

        match month {
            1 if year >= 1983 => is_nth_weekday(date, Weekday::Mon, 3),
            2 => is_nth_weekday(date, Weekday::Mon, 3),
            5 => is_last_weekday(date, Weekday::Mon),
            9 => is_nth_weekday(date, Weekday::Mon, 1),
            10 => is_nth_weekday(date, Weekday::Mon, 2),
            11 => is_nth_weekday(date, Weekday::Thu, 4),
            _ => false,
        }
    }
}

impl Calendar for UsCalendar {
    fn name(&self) -> &'static str {
        "US Settlement"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !Self::is_federal_holiday(date)
    }
}
