//! Dollar-offset effectiveness test.
//!
//! Each test date `d[i]` is compared with the previous one `d[i-1]` (the
//! hedging date for the first test). For each regime, real swap and
//! hypothetical derivative:
//!
//! ```text
//! clean[i]      = FV[i] − FV[0]
//! cash[i]       = ratio[i] × amortisation[k]
//! pre[i]        = clean[i] + cash[i]
//! cumulative[i] = cumulative[i-1] + pre[i]
//! ```
//!
//! `ratio[i] = (d[i] − d[i-1]) / (end[k] − start[j])` where `k` is the first
//! period ending on or after `d[i]` and `j` the last period starting on or
//! before `d[i-1]`. The real regime amortises the cash-flow amortisation
//! column of its table; the hypothetical regime amortises its receive − pay
//! column at the same `k`.
//!
//! Ineffectiveness is the excess of the real swap's cumulative movement over
//! the hypothetical's: `max(0, |cumulative_real| − |cumulative_hypo|)`.

use serde::{Deserialize, Serialize};

use cfhedge_core::lookup::{infimum_index, supremum_index};
use cfhedge_core::types::Date;
use cfhedge_swaps::CashFlowTable;

use crate::error::{AccountingError, AccountingResult};

/// Fair values of both instruments on a test date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FairValueObservation {
    /// Test date.
    pub date: Date,
    /// Fair value of the hedging swap.
    pub swap_fair_value: f64,
    /// Fair value of the hypothetical derivative.
    pub hypo_fair_value: f64,
}

impl FairValueObservation {
    /// Creates an observation.
    #[must_use]
    pub fn new(date: Date, swap_fair_value: f64, hypo_fair_value: f64) -> Self {
        Self {
            date,
            swap_fair_value,
            hypo_fair_value,
        }
    }
}

/// Fair values the clean changes of a segment are measured against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Baseline {
    /// Hedging date.
    pub date: Date,
    /// Hedging swap fair value at the hedging date.
    pub swap_fair_value: f64,
    /// Hypothetical fair value at the hedging date; zero after calibration.
    pub hypo_fair_value: f64,
}

/// Columns of one regime for one test date.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RegimeEntry {
    /// Fair value change since the hedging date.
    pub clean_change: f64,
    /// Amortised cash settlement.
    pub cash_settlement: f64,
    /// `clean_change + cash_settlement`.
    pub pre_settlement_change: f64,
    /// Running sum of `pre_settlement_change` over the segment.
    pub cumulative_pre_settlement: f64,
}

/// Result of the effectiveness test on one date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EffectivenessRecord {
    /// Test date.
    pub date: Date,
    /// Share of the matched period elapsed since the previous test date.
    pub date_ratio: f64,
    /// Index of the matched period in the hedging tables.
    pub period: usize,
    /// Hedging swap columns.
    pub real: RegimeEntry,
    /// Hypothetical derivative columns.
    pub hypo: RegimeEntry,
    /// `max(0, |real cumulative| − |hypo cumulative|)`.
    pub cumulative_ineffectiveness: f64,
    /// Change in cumulative ineffectiveness since the previous test date.
    pub period_ineffectiveness: f64,
}

/// Date ratio and the index `k` of the period it amortises.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DateRatio {
    /// Elapsed share.
    pub ratio: f64,
    /// First period ending on or after the current date.
    pub period: usize,
}

/// Computes the date ratio between two consecutive test dates.
///
/// ```rust
/// use cfhedge_accounting::effectiveness::date_ratio;
/// use cfhedge_core::types::Date;
///
/// let d = |y, m, day| Date::from_ymd(y, m, day).unwrap();
/// let starts = [d(2023, 3, 31), d(2023, 6, 30)];
/// let ends = [d(2023, 6, 30), d(2023, 9, 29)];
///
/// let r = date_ratio(&starts, &ends, d(2023, 3, 31), d(2023, 5, 15)).unwrap();
/// assert_eq!(r.period, 0);
/// assert_eq!(r.ratio, 45.0 / 91.0);
/// ```
pub fn date_ratio(
    starts: &[Date],
    ends: &[Date],
    previous: Date,
    current: Date,
) -> AccountingResult<DateRatio> {
    if starts.is_empty() || starts.len() != ends.len() {
        return Err(AccountingError::invalid_input(format!(
            "schedule columns must be non-empty and of equal length, got {} starts and {} ends",
            starts.len(),
            ends.len()
        )));
    }
    if current <= previous {
        return Err(AccountingError::invalid_input(format!(
            "test date {current} is not after {previous}"
        )));
    }

    let outside = |date: Date| AccountingError::DateOutsideSchedule {
        date,
        first: starts[0],
        last: ends[ends.len() - 1],
    };
    let k = supremum_index(ends, current)?.ok_or_else(|| outside(current))?;
    let j = infimum_index(starts, previous)?.ok_or_else(|| outside(previous))?;

    let span = (ends[k] - starts[j]) as f64;
    Ok(DateRatio {
        ratio: (current - previous) as f64 / span,
        period: k,
    })
}

/// Running state of the test over one segment.
#[derive(Debug, Clone, PartialEq)]
pub struct EffectivenessTest {
    baseline: Baseline,
    starts: Vec<Date>,
    ends: Vec<Date>,
    real_amortisation: Vec<f64>,
    hypo_receive_minus_pay: Vec<f64>,
    previous_date: Date,
    cumulative_real: f64,
    cumulative_hypo: f64,
    cumulative_ineffectiveness: f64,
}

impl EffectivenessTest {
    /// Starts a test from the tables built at the hedging date.
    ///
    /// The real table must carry amortisation columns and both tables must
    /// share their periods.
    pub fn new(
        baseline: Baseline,
        real_table: &CashFlowTable,
        hypo_table: &CashFlowTable,
    ) -> AccountingResult<Self> {
        let real_amortisation = real_table.cash_flow_amortisation().ok_or_else(|| {
            AccountingError::invalid_input("hedging swap table has no amortisation columns")
        })?;
        let starts = real_table.start_dates();
        let ends = real_table.end_dates();
        if hypo_table.start_dates() != starts || hypo_table.end_dates() != ends {
            return Err(AccountingError::invalid_input(
                "hedging swap and hypothetical tables cover different periods",
            ));
        }

        Ok(Self {
            baseline,
            starts,
            ends,
            real_amortisation,
            hypo_receive_minus_pay: hypo_table.receive_minus_pay(),
            previous_date: baseline.date,
            cumulative_real: 0.0,
            cumulative_hypo: 0.0,
            cumulative_ineffectiveness: 0.0,
        })
    }

    /// Baseline of the segment.
    pub fn baseline(&self) -> Baseline {
        self.baseline
    }

    /// Date of the last test, or the hedging date.
    pub fn previous_date(&self) -> Date {
        self.previous_date
    }

    /// Runs the test for the next date.
    pub fn step(&mut self, observation: &FairValueObservation) -> AccountingResult<EffectivenessRecord> {
        if !observation.swap_fair_value.is_finite() || !observation.hypo_fair_value.is_finite() {
            return Err(AccountingError::invalid_input(format!(
                "fair values on {} must be finite",
                observation.date
            )));
        }

        let DateRatio { ratio, period } =
            date_ratio(&self.starts, &self.ends, self.previous_date, observation.date)?;

        let real = Self::regime(
            observation.swap_fair_value - self.baseline.swap_fair_value,
            ratio * self.real_amortisation[period],
            self.cumulative_real,
        );
        let hypo = Self::regime(
            observation.hypo_fair_value - self.baseline.hypo_fair_value,
            ratio * self.hypo_receive_minus_pay[period],
            self.cumulative_hypo,
        );

        let cumulative_ineffectiveness =
            (real.cumulative_pre_settlement.abs() - hypo.cumulative_pre_settlement.abs()).max(0.0);
        let record = EffectivenessRecord {
            date: observation.date,
            date_ratio: ratio,
            period,
            real,
            hypo,
            cumulative_ineffectiveness,
            period_ineffectiveness: cumulative_ineffectiveness - self.cumulative_ineffectiveness,
        };

        self.previous_date = observation.date;
        self.cumulative_real = real.cumulative_pre_settlement;
        self.cumulative_hypo = hypo.cumulative_pre_settlement;
        self.cumulative_ineffectiveness = cumulative_ineffectiveness;

        log::debug!(
            "effectiveness {}: ratio {:.4}, cumulative ineffectiveness {:.2}",
            record.date,
            ratio,
            cumulative_ineffectiveness
        );
        Ok(record)
    }

    fn regime(clean_change: f64, cash_settlement: f64, cumulative: f64) -> RegimeEntry {
        let pre_settlement_change = clean_change + cash_settlement;
        RegimeEntry {
            clean_change,
            cash_settlement,
            pre_settlement_change,
            cumulative_pre_settlement: cumulative + pre_settlement_change,
        }
    }
}
