//! 2024 holiday tables for the three currency calendars, and the
//! adjustments swap schedules rely on.

use cfhedge_core::prelude::*;

fn d(s: &str) -> Date {
    Date::parse(s).unwrap()
}

const TARGET_2024: [&str; 6] = [
    "2024-01-01",
    "2024-03-29",
    "2024-04-01",
    "2024-05-01",
    "2024-12-25",
    "2024-12-26",
];

const UK_2024: [&str; 8] = [
    "2024-01-01",
    "2024-03-29",
    "2024-04-01",
    "2024-05-06",
    "2024-05-27",
    "2024-08-26",
    "2024-12-25",
    "2024-12-26",
];

const US_2024: [&str; 11] = [
    "2024-01-01",
    "2024-01-15",
    "2024-02-19",
    "2024-05-27",
    "2024-06-19",
    "2024-07-04",
    "2024-09-02",
    "2024-10-14",
    "2024-11-11",
    "2024-11-28",
    "2024-12-25",
];

fn weekday_holidays_2024(calendar: &dyn Calendar) -> Vec<Date> {
    let mut date = d("2024-01-01");
    let mut holidays = Vec::new();
    while date <= d("2024-12-31") {
        if !date.is_weekend() && calendar.is_holiday(date) {
            holidays.push(date);
        }
        date = date.add_days(1);
    }
    holidays
}

#[test]
fn holiday_tables_match() {
    let cases: [(CalendarId, &[&str]); 3] = [
        (CalendarId::Target, &TARGET_2024),
        (CalendarId::UnitedKingdom, &UK_2024),
        (CalendarId::UnitedStates, &US_2024),
    ];
    for (id, expected) in cases {
        let expected: Vec<Date> = expected.iter().map(|s| d(s)).collect();
        assert_eq!(weekday_holidays_2024(id.calendar()), expected, "{}", id.code());
    }
}

#[test]
fn currencies_select_their_calendars() {
    assert_eq!(Currency::EUR.calendar_id(), CalendarId::Target);
    assert_eq!(Currency::GBP.calendar_id(), CalendarId::UnitedKingdom);
    assert_eq!(Currency::USD.calendar_id(), CalendarId::UnitedStates);
}

#[test]
fn modified_following_across_easter_month_end() {
    // 2024-03-31 is Easter Sunday; the next business day falls in April
    let target = CalendarId::Target.calendar();
    let adjusted = target.adjust(d("2024-03-31"), BusinessDayConvention::ModifiedFollowing);
    assert_eq!(adjusted, d("2024-03-28"));
    assert_eq!(
        target.adjust(d("2024-03-31"), BusinessDayConvention::Following),
        d("2024-04-02")
    );
}

#[test]
fn quarterly_accruals_on_both_bases() {
    let start = d("2023-12-29");
    let end = d("2024-03-28");
    assert_eq!(DayCountConvention::Act360.day_count(start, end), 90);
    assert_eq!(DayCountConvention::Act360.year_fraction(start, end), 90.0 / 360.0);
    assert_eq!(DayCountConvention::Act365Fixed.year_fraction(start, end), 90.0 / 365.0);
}
