//! Business day calendars and conventions.
//!
//! This module provides:
//! - Holiday calendars for the supported currencies (TARGET, UK, US)
//! - Business day adjustment conventions
//! - [`CalendarId`], the runtime selector parsed from calendar codes

use serde::{Deserialize, Serialize};

mod conventions;
mod holidays;
mod target;
mod uk;
mod us;

pub use conventions::{adjust, BusinessDayConvention};
pub use holidays::easter_sunday;
pub use target::TargetCalendar;
pub use uk::UkCalendar;
pub use us::UsCalendar;

use crate::error::HedgeError;
use crate::types::Date;

/// Trait for business day calendars.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &'static str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }

    /// Advances a date by a number of business days.
    fn add_business_days(&self, date: Date, days: i32) -> Date {
        let mut result = date;
        let mut remaining = days.abs();
        let direction: i64 = if days >= 0 { 1 } else { -1 };

        while remaining > 0 {
            result = result.add_days(direction);
            if self.is_business_day(result) {
                remaining -= 1;
            }
        }

        result
    }
}

/// A simple weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &'static str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

static TARGET: TargetCalendar = TargetCalendar;
static UK: UkCalendar = UkCalendar;
static US: UsCalendar = UsCalendar;
static WEEKEND: WeekendCalendar = WeekendCalendar;

/// Runtime identifier for a holiday calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CalendarId {
    /// Eurozone TARGET
    Target,
    /// England and Wales settlement
    UnitedKingdom,
    /// US settlement
    UnitedStates,
    /// Weekends only
    WeekendsOnly,
}

impl CalendarId {
    /// Returns the shared calendar instance.
    #[must_use]
    pub fn calendar(&self) -> &'static dyn Calendar {
        match self {
            CalendarId::Target => &TARGET,
            CalendarId::UnitedKingdom => &UK,
            CalendarId::UnitedStates => &US,
            CalendarId::WeekendsOnly => &WEEKEND,
        }
    }

    /// Returns the calendar code.
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            CalendarId::Target => "TARGET",
            CalendarId::UnitedKingdom => "UK",
            CalendarId::UnitedStates => "US",
            CalendarId::WeekendsOnly => "WEEKEND",
        }
    }
}

impl std::fmt::Display for CalendarId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl std::str::FromStr for CalendarId {
    type Err = HedgeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "TARGET" | "TARGET2" => Ok(CalendarId::Target),
            "UK" | "GB" => Ok(CalendarId::UnitedKingdom),
            "US" | "USA" => Ok(CalendarId::UnitedStates),
            "WEEKEND" | "WEEKENDS" => Ok(CalendarId::WeekendsOnly),
            _ => Err(HedgeError::unsupported("calendar", s)),
        }
    }
}
