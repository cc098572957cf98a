//! Swap schedule generation.
//!
//! A schedule is the ordered list of adjusted period boundaries of a swap.
//! Period `i` runs from `dates[i]` to `dates[i + 1]`, so consecutive periods
//! share a boundary and never overlap.
//!
//! Unadjusted boundaries are stepped from an anchor date in whole multiples
//! of the tenor (termination date for [`DateGenerationRule::Backward`],
//! effective date for [`DateGenerationRule::Forward`]). When the steps do not
//! land on the opposite end, the leftover becomes a short stub at the front
//! (backward) or back (forward). Every boundary is then adjusted with the
//! calendar; no end-of-month rule is applied.

use serde::{Deserialize, Serialize};

use cfhedge_core::calendars::{BusinessDayConvention, Calendar, CalendarId};
use cfhedge_core::types::{Date, Tenor};

use crate::error::{SwapError, SwapResult};

/// Direction in which unadjusted boundaries are generated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DateGenerationRule {
    /// Step back from the termination date; stub at the front.
    #[default]
    Backward,
    /// Step forward from the effective date; stub at the back.
    Forward,
}

/// One accrual period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Period {
    /// Accrual start (adjusted).
    pub start: Date,
    /// Accrual end and payment date (adjusted).
    pub end: Date,
}

/// Adjusted period boundaries of a swap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Schedule {
    dates: Vec<Date>,
}

impl Schedule {
    /// Starts building a schedule between two dates.
    ///
    /// ```rust
    /// use cfhedge_core::calendars::CalendarId;
    /// use cfhedge_core::types::Date;
    /// use cfhedge_swaps::Schedule;
    ///
    /// let schedule = Schedule::builder(
    ///     Date::from_ymd(2023, 3, 31).unwrap(),
    ///     Date::from_ymd(2024, 3, 28).unwrap(),
    ///     "6M".parse().unwrap(),
    /// )
    /// .calendar(CalendarId::Target)
    /// .build()
    /// .unwrap();
    ///
    /// assert_eq!(schedule.len(), 2);
    /// assert_eq!(schedule.start_dates()[1], Date::from_ymd(2023, 9, 28).unwrap());
    /// ```
    #[must_use]
    pub fn builder(effective: Date, termination: Date, tenor: Tenor) -> ScheduleBuilder {
        ScheduleBuilder {
            effective,
            termination,
            tenor,
            calendar: CalendarId::WeekendsOnly,
            convention: BusinessDayConvention::ModifiedFollowing,
            termination_convention: BusinessDayConvention::ModifiedFollowing,
            rule: DateGenerationRule::Backward,
        }
    }

    /// Wraps already adjusted boundaries; they must be strictly increasing.
    pub fn from_dates(dates: Vec<Date>) -> SwapResult<Self> {
        if dates.len() < 2 {
            return Err(SwapError::invalid_schedule(format!(
                "need at least two boundary dates, got {}",
                dates.len()
            )));
        }
        if let Some(i) = dates.windows(2).position(|w| w[1] <= w[0]) {
            return Err(SwapError::invalid_schedule(format!(
                "period {i} ends on {} but starts on {}",
                dates[i + 1],
                dates[i]
            )));
        }
        Ok(Self { dates })
    }

    /// All boundaries, effective date first.
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Period start dates.
    pub fn start_dates(&self) -> &[Date] {
        &self.dates[..self.dates.len() - 1]
    }

    /// Period end dates.
    pub fn end_dates(&self) -> &[Date] {
        &self.dates[1..]
    }

    /// Adjusted effective date.
    pub fn effective_date(&self) -> Date {
        self.dates[0]
    }

    /// Adjusted termination date.
    pub fn termination_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Number of periods.
    pub fn len(&self) -> usize {
        self.dates.len() - 1
    }

    /// Always false for a constructed schedule.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Iterates over the periods in order.
    pub fn periods(&self) -> impl Iterator<Item = Period> + '_ {
        self.dates
            .windows(2)
            .map(|w| Period { start: w[0], end: w[1] })
    }

    /// Periods whose end date is after `as_of`.
    ///
    /// Periods ending on or before `as_of` have settled.
    pub fn periods_after(&self, as_of: Date) -> Vec<Period> {
        self.periods().filter(|p| p.end > as_of).collect()
    }
}

/// Builder for [`Schedule`].
#[derive(Debug, Clone)]
pub struct ScheduleBuilder {
    effective: Date,
    termination: Date,
    tenor: Tenor,
    calendar: CalendarId,
    convention: BusinessDayConvention,
    termination_convention: BusinessDayConvention,
    rule: DateGenerationRule,
}

impl ScheduleBuilder {
    /// Holiday calendar for adjustment (default: weekends only).
    #[must_use]
    pub fn calendar(mut self, calendar: CalendarId) -> Self {
        self.calendar = calendar;
        self
    }

    /// Convention for every boundary except the termination date.
    #[must_use]
    pub fn convention(mut self, convention: BusinessDayConvention) -> Self {
        self.convention = convention;
        self
    }

    /// Convention for the termination date.
    #[must_use]
    pub fn termination_convention(mut self, convention: BusinessDayConvention) -> Self {
        self.termination_convention = convention;
        self
    }

    /// Generation direction (default: backward).
    #[must_use]
    pub fn rule(mut self, rule: DateGenerationRule) -> Self {
        self.rule = rule;
        self
    }

    /// Generates and adjusts the boundaries.
    pub fn build(self) -> SwapResult<Schedule> {
        if self.effective >= self.termination {
            return Err(SwapError::invalid_schedule(format!(
                "effective date {} is not before termination date {}",
                self.effective, self.termination
            )));
        }

        let unadjusted = match self.rule {
            DateGenerationRule::Backward => self.backward()?,
            DateGenerationRule::Forward => self.forward()?,
        };

        let calendar = self.calendar.calendar();
        let last = unadjusted.len() - 1;
        let mut dates: Vec<Date> = Vec::with_capacity(unadjusted.len());
        for (i, date) in unadjusted.into_iter().enumerate() {
            let convention = if i == last {
                self.termination_convention
            } else {
                self.convention
            };
            let adjusted = calendar.adjust(date, convention);
            // Two boundaries can roll onto the same business day.
            if dates.last() != Some(&adjusted) {
                dates.push(adjusted);
            }
        }

        if dates.len() < 2 {
            return Err(SwapError::EmptySchedule {
                effective: self.effective,
                termination: self.termination,
            });
        }

        let schedule = Schedule::from_dates(dates)?;
        log::debug!(
            "generated {} periods from {} to {} ({}, {}, {:?})",
            schedule.len(),
            schedule.effective_date(),
            schedule.termination_date(),
            self.tenor,
            self.calendar,
            self.rule
        );
        Ok(schedule)
    }

    fn backward(&self) -> SwapResult<Vec<Date>> {
        let mut dates = vec![self.termination];
        let mut k = 1;
        loop {
            let date = self.tenor.advance(self.termination, -k)?;
            if date <= self.effective {
                break;
            }
            dates.push(date);
            k += 1;
        }
        dates.push(self.effective);
        dates.reverse();
        Ok(dates)
    }

    fn forward(&self) -> SwapResult<Vec<Date>> {
        let mut dates = vec![self.effective];
        let mut k = 1;
        loop {
            let date = self.tenor.advance(self.effective, k)?;
            if date >= self.termination {
                break;
            }
            dates.push(date);
            k += 1;
        }
        dates.push(self.termination);
        Ok(dates)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cfhedge_core::ErrorKind;
    use proptest::prelude::*;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn quarterly() -> Tenor {
        "3M".parse().unwrap()
    }

    #[test]
    fn test_backward_target_quarterly() {
        let schedule = Schedule::builder(d(2023, 3, 31), d(2025, 3, 31), quarterly())
            .calendar(CalendarId::Target)
            .build()
            .unwrap();

        assert_eq!(
            schedule.dates(),
            &[
                d(2023, 3, 31),
                d(2023, 6, 30),
                d(2023, 9, 29),  // Sat 30th, rolling forward leaves the month
                d(2023, 12, 29), // 31st is Sunday, 1 Jan a holiday
                d(2024, 3, 28),  // Easter Sunday, Good Friday before it
                d(2024, 6, 28),
                d(2024, 9, 30),
                d(2024, 12, 31),
                d(2025, 3, 31),
            ]
        );
        assert_eq!(schedule.len(), 8);
    }

    #[test]
    fn test_backward_front_stub() {
        let schedule = Schedule::builder(d(2023, 5, 15), d(2024, 3, 15), quarterly())
            .build()
            .unwrap();
        assert_eq!(schedule.start_dates()[0], d(2023, 5, 15));
        assert_eq!(schedule.end_dates()[0], d(2023, 6, 15));
        assert_eq!(schedule.len(), 4);
    }

    #[test]
    fn test_forward_back_stub() {
        let schedule = Schedule::builder(d(2023, 5, 15), d(2024, 3, 15), quarterly())
            .rule(DateGenerationRule::Forward)
            .build()
            .unwrap();
        assert_eq!(schedule.end_dates()[0], d(2023, 8, 15));
        assert_eq!(schedule.start_dates()[3], d(2024, 2, 15));
        assert_eq!(schedule.termination_date(), d(2024, 3, 15));
    }

    #[test]
    fn test_unadjusted_keeps_weekend_dates() {
        let schedule = Schedule::builder(d(2023, 3, 31), d(2023, 9, 30), quarterly())
            .convention(BusinessDayConvention::Unadjusted)
            .termination_convention(BusinessDayConvention::Unadjusted)
            .build()
            .unwrap();
        assert_eq!(schedule.termination_date(), d(2023, 9, 30));
    }

    #[test]
    fn test_reversed_dates_rejected() {
        let err = Schedule::builder(d(2024, 1, 1), d(2023, 1, 1), quarterly())
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSchedule);
    }

    #[test]
    fn test_collapsing_boundaries_are_empty() {
        // Saturday to Sunday: both roll to Monday 3 April.
        let err = Schedule::builder(d(2023, 4, 1), d(2023, 4, 2), quarterly())
            .build()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::EmptySchedule);
    }

    #[test]
    fn test_from_dates_validation() {
        assert!(Schedule::from_dates(vec![d(2023, 1, 2)]).is_err());
        let err = Schedule::from_dates(vec![d(2023, 1, 2), d(2023, 1, 2)]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidSchedule);
    }

    #[test]
    fn test_periods_after() {
        let schedule = Schedule::builder(d(2023, 3, 31), d(2024, 3, 28), quarterly())
            .calendar(CalendarId::Target)
            .build()
            .unwrap();
        let remaining = schedule.periods_after(d(2023, 10, 15));
        assert_eq!(remaining.len(), 2);
        assert_eq!(remaining[0].start, d(2023, 9, 28));
        assert_eq!(schedule.periods_after(d(2023, 12, 28)).len(), 1);
        assert_eq!(schedule.periods_after(d(2024, 3, 28)).len(), 0);
    }

    proptest! {
        #[test]
        fn prop_partition(
            start in 0i64..3000,
            length in 40i64..4000,
            months in prop::sample::select(vec![1u32, 3, 6, 12]),
            forward in any::<bool>(),
        ) {
            let effective = d(2020, 1, 1).add_days(start);
            let termination = effective.add_days(length);
            let tenor = Tenor::new(months, cfhedge_core::types::TenorUnit::Months).unwrap();
            let rule = if forward { DateGenerationRule::Forward } else { DateGenerationRule::Backward };
            let calendar = CalendarId::Target.calendar();
            let convention = BusinessDayConvention::ModifiedFollowing;

            let schedule = Schedule::builder(effective, termination, tenor)
                .calendar(CalendarId::Target)
                .rule(rule)
                .build()
                .unwrap();

            let starts = schedule.start_dates();
            let ends = schedule.end_dates();
            prop_assert_eq!(starts.len(), ends.len());
            for i in 0..starts.len() {
                prop_assert!(starts[i] < ends[i]);
                if i + 1 < starts.len() {
                    prop_assert_eq!(starts[i + 1], ends[i]);
                }
            }
            prop_assert_eq!(starts[0], calendar.adjust(effective, convention));
            prop_assert_eq!(ends[ends.len() - 1], calendar.adjust(termination, convention));
        }
    }
}
