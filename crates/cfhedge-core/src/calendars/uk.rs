//! UK (England and Wales) settlement calendar.

use chrono::Weekday;

use super::holidays::{easter_offset, is_last_weekday, is_nth_weekday, weekday_of};
use super::Calendar;
use crate::types::Date;

/// UK bank holiday calendar.
///
/// Holidays falling on a weekend are substituted on the following Monday
/// (or Tuesday for Boxing Day after a weekend Christmas).
#[derive(Debug, Clone, Copy, Default)]
pub struct UkCalendar;

impl UkCalendar {
    fn is_bank_holiday(date: Date) -> bool {
        let year = date.year();
        let (month, day) = (date.month(), date.day());
        let weekday = weekday_of(date);
        let mon_or_tue = matches!(weekday, Weekday::Mon | Weekday::Tue);

        // New Year's Day, possibly moved to Monday
        if month == 1 && (day == 1 || ((day == 2 || day == 3) && weekday == Weekday::Mon)) {
            return true;
        }

        if matches!(easter_offset(date), Some(-2 | 1)) {
            return true;
        }

        // Early May bank holiday; VE Day in 2020
        if month == 5 {
            let early_may = if year == 2020 {
                day == 8
            } else {
                is_nth_weekday(date, Weekday::Mon, 1)
            };
            if early_may {
                return true;
            }
        }

        // Spring bank holiday, moved for the 2002, 2012 and 2022 jubilees
        let spring = match year {
            2002 | 2012 => month == 6 && day == 4,
            2022 => month == 6 && day == 2,
            _ => month == 5 && is_last_weekday(date, Weekday::Mon),
        };
        if spring {
            return true;
        }

        // Summer bank holiday
        if month == 8 && is_last_weekday(date, Weekday::Mon) {
            return true;
        }

        if month == 12
            && (day == 25 || day == 26 || ((day == 27 || day == 28) && mon_or_tue))
        {
            return true;
        }

        matches!(
            (year, month, day),
            (1999, 12, 31)
                | (2002, 6, 3)
                | (2011, 4, 29)
                | (2012, 6, 5)
                | (2022, 6, 3)
                | (2022, 9, 19)
                | (2023, 5, 8)
        )
    }
}

impl Calendar for UkCalendar {
    fn name(&self) -> &'static str {
        "UK Settlement"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !Self::is_bank_holiday(date)
    }
}
