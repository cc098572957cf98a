//! Vanilla fixed-for-floating interest rate swap.

use serde::{Deserialize, Serialize};

use cfhedge_core::calendars::BusinessDayConvention;
use cfhedge_core::daycounts::DayCountConvention;
use cfhedge_core::types::{Currency, Date, PayReceive, Tenor};
use cfhedge_curves::DiscountCurve;

use crate::error::{SwapError, SwapResult};
use crate::leg::Leg;
use crate::schedule::{DateGenerationRule, Period, Schedule};

/// Fixed-leg direction of a swap.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SwapType {
    /// Pays fixed, receives floating.
    Payer,
    /// Receives fixed, pays floating.
    Receiver,
}

impl SwapType {
    /// Swap type implied by the floating-leg flag.
    ///
    /// Receiving floating means paying fixed.
    #[must_use]
    pub fn from_floating(floating: PayReceive) -> Self {
        match floating {
            PayReceive::Receive => SwapType::Payer,
            PayReceive::Pay => SwapType::Receiver,
        }
    }

    /// Whether the floating leg is received or paid.
    #[must_use]
    pub fn floating(self) -> PayReceive {
        match self {
            SwapType::Payer => PayReceive::Receive,
            SwapType::Receiver => PayReceive::Pay,
        }
    }

    /// The mirrored swap type.
    #[must_use]
    pub fn opposite(self) -> Self {
        match self {
            SwapType::Payer => SwapType::Receiver,
            SwapType::Receiver => SwapType::Payer,
        }
    }

    /// `+1` for a payer, `-1` for a receiver.
    #[must_use]
    pub fn sign(self) -> f64 {
        match self {
            SwapType::Payer => 1.0,
            SwapType::Receiver => -1.0,
        }
    }
}

impl std::fmt::Display for SwapType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SwapType::Payer => write!(f, "Payer"),
            SwapType::Receiver => write!(f, "Receiver"),
        }
    }
}

/// Economic terms of a swap as supplied by the caller.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapTerms {
    /// Trade currency; selects the holiday calendar.
    pub currency: Currency,
    /// First accrual start (unadjusted).
    pub effective_date: Date,
    /// Last accrual end (unadjusted).
    pub termination_date: Date,
    /// Payment frequency of both legs.
    pub payment_tenor: Tenor,
    /// Day count of both legs and of the floating index.
    pub day_count: DayCountConvention,
    /// Notional amount.
    pub notional: f64,
    /// Fixed coupon rate.
    pub fixed_rate: f64,
    /// Whether the floating leg is paid or received.
    pub floating: PayReceive,
}

/// A vanilla fixed-for-floating swap on a single schedule.
///
/// # Pricing
///
/// ```text
/// Fixed leg PV:  Σ N × c × τi × DF(Ti)
/// Float leg PV:  Σ N × Fi × τi × DF(Ti)
/// Fair value:    receive leg PV − pay leg PV
/// Par rate:      Float leg PV / Σ N × τi × DF(Ti)
/// ```
///
/// Every query takes an explicit as-of date. Periods ending on or before it
/// have settled and are excluded; discount factors are taken relative to
/// `DF(as_of)`, which is 1 when valuing at the curve base date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VanillaSwap {
    swap_type: SwapType,
    currency: Currency,
    notional: f64,
    fixed_rate: f64,
    fixed_day_count: DayCountConvention,
    floating_day_count: DayCountConvention,
    schedule: Schedule,
}

impl VanillaSwap {
    /// Builds a swap from its terms.
    ///
    /// The schedule is generated backward from the termination date on the
    /// currency's calendar with modified-following adjustment.
    pub fn new(terms: &SwapTerms) -> SwapResult<Self> {
        let schedule = Schedule::builder(terms.effective_date, terms.termination_date, terms.payment_tenor)
            .calendar(terms.currency.calendar_id())
            .convention(BusinessDayConvention::ModifiedFollowing)
            .termination_convention(BusinessDayConvention::ModifiedFollowing)
            .rule(DateGenerationRule::Backward)
            .build()?;

        let swap = Self::from_schedule(
            SwapType::from_floating(terms.floating),
            schedule,
            terms.notional,
            terms.fixed_rate,
            terms.day_count,
        )?
        .with_currency(terms.currency);

        log::debug!(
            "{} swap: {} periods, notional {}, fixed {}",
            swap.swap_type,
            swap.schedule.len(),
            swap.notional,
            swap.fixed_rate
        );
        Ok(swap)
    }

    /// Builds a swap on an existing schedule, with one day count for both
    /// legs and the floating index.
    pub fn from_schedule(
        swap_type: SwapType,
        schedule: Schedule,
        notional: f64,
        fixed_rate: f64,
        day_count: DayCountConvention,
    ) -> SwapResult<Self> {
        if !notional.is_finite() || notional <= 0.0 {
            return Err(SwapError::invalid_input(format!(
                "notional must be positive, got {notional}"
            )));
        }
        if !fixed_rate.is_finite() {
            return Err(SwapError::invalid_input(format!(
                "fixed rate must be finite, got {fixed_rate}"
            )));
        }

        Ok(Self {
            swap_type,
            currency: Currency::EUR,
            notional,
            fixed_rate,
            fixed_day_count: day_count,
            floating_day_count: day_count,
            schedule,
        })
    }

    /// Sets the trade currency.
    #[must_use]
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Sets a separate day count for the floating index.
    #[must_use]
    pub fn with_floating_day_count(mut self, day_count: DayCountConvention) -> Self {
        self.floating_day_count = day_count;
        self
    }

    /// The same swap with another fixed rate.
    #[must_use]
    pub fn with_fixed_rate(&self, fixed_rate: f64) -> Self {
        Self {
            fixed_rate,
            ..self.clone()
        }
    }

    /// The same swap with another direction.
    #[must_use]
    pub fn with_swap_type(&self, swap_type: SwapType) -> Self {
        Self {
            swap_type,
            ..self.clone()
        }
    }

    /// Payer or receiver.
    pub fn swap_type(&self) -> SwapType {
        self.swap_type
    }

    /// Trade currency.
    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Notional amount.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Fixed coupon rate.
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_rate
    }

    /// Fixed-leg day count.
    pub fn fixed_day_count(&self) -> DayCountConvention {
        self.fixed_day_count
    }

    /// Floating-index day count.
    pub fn floating_day_count(&self) -> DayCountConvention {
        self.floating_day_count
    }

    /// Period schedule shared by both legs.
    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    /// Periods still outstanding at `as_of`.
    pub fn remaining_periods(&self, as_of: Date) -> Vec<Period> {
        self.schedule.periods_after(as_of)
    }

    /// Fixed leg of the periods outstanding at `as_of`.
    pub fn fixed_leg(&self, as_of: Date) -> Leg {
        Leg::fixed(
            &self.remaining_periods(as_of),
            self.notional,
            self.fixed_rate,
            self.fixed_day_count,
        )
    }

    /// Floating leg of the periods outstanding at `as_of`.
    pub fn floating_leg(&self, curve: &DiscountCurve, as_of: Date) -> SwapResult<Leg> {
        Leg::floating(
            &self.remaining_periods(as_of),
            self.notional,
            self.floating_day_count,
            curve,
            as_of,
        )
    }

    /// Leg PVs, fair value and par rate as of `as_of`.
    pub fn valuation(&self, curve: &DiscountCurve, as_of: Date) -> SwapResult<SwapValuation> {
        let fixed = self.fixed_leg(as_of);
        let floating = self.floating_leg(curve, as_of)?;

        let fixed_leg_npv = fixed.npv(curve, as_of)?;
        let floating_leg_npv = floating.npv(curve, as_of)?;
        let df_as_of = curve.discount_factor(as_of)?;

        let mut annuity = 0.0;
        for cf in fixed.cash_flows() {
            annuity += self.notional * cf.accrual * curve.discount_factor(cf.end)? / df_as_of;
        }

        let par_rate = if annuity > 0.0 {
            Some(floating_leg_npv / annuity)
        } else {
            None
        };

        Ok(SwapValuation {
            as_of,
            remaining_periods: fixed.len(),
            fixed_leg_npv,
            floating_leg_npv,
            annuity,
            fair_value: self.swap_type.sign() * (floating_leg_npv - fixed_leg_npv),
            par_rate,
        })
    }

    /// Fair value as of `as_of`: receive leg PV minus pay leg PV.
    ///
    /// Zero once every period has settled.
    pub fn fair_value(&self, curve: &DiscountCurve, as_of: Date) -> SwapResult<f64> {
        Ok(self.valuation(curve, as_of)?.fair_value)
    }

    /// Fixed rate that sets the fair value to zero as of `as_of`.
    pub fn par_rate(&self, curve: &DiscountCurve, as_of: Date) -> SwapResult<f64> {
        self.valuation(curve, as_of)?.par_rate.ok_or_else(|| {
            SwapError::numerical(format!(
                "fixed-leg annuity is zero as of {as_of}; no periods outstanding"
            ))
        })
    }
}

/// Result of valuing a swap as of a date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwapValuation {
    /// Valuation date.
    pub as_of: Date,
    /// Periods not yet settled.
    pub remaining_periods: usize,
    /// Discounted fixed leg.
    pub fixed_leg_npv: f64,
    /// Discounted floating leg.
    pub floating_leg_npv: f64,
    /// `Σ N × τ × DF` over the fixed leg.
    pub annuity: f64,
    /// Receive minus pay.
    pub fair_value: f64,
    /// Par rate, absent when nothing is outstanding.
    pub par_rate: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use cfhedge_core::daycounts::DayCount;
    use cfhedge_core::ErrorKind;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn terms() -> SwapTerms {
        SwapTerms {
            currency: Currency::EUR,
            effective_date: d(2023, 3, 31),
            termination_date: d(2025, 3, 31),
            payment_tenor: "3M".parse().unwrap(),
            day_count: DayCountConvention::Act360,
            notional: 10_000_000.0,
            fixed_rate: 0.03,
            floating: PayReceive::Receive,
        }
    }

    fn flat_curve() -> DiscountCurve {
        let base = d(2023, 3, 31);
        DiscountCurve::new(base, vec![base, d(2030, 3, 31)], vec![1.0, 1.0]).unwrap()
    }

    fn sloped_curve() -> DiscountCurve {
        let base = d(2023, 3, 31);
        DiscountCurve::new(
            base,
            vec![base, d(2024, 3, 31), d(2026, 3, 31), d(2030, 3, 31)],
            vec![1.0, 0.965, 0.91, 0.80],
        )
        .unwrap()
    }

    #[test]
    fn test_swap_type_from_floating() {
        assert_eq!(SwapType::from_floating(PayReceive::Receive), SwapType::Payer);
        assert_eq!(SwapType::from_floating(PayReceive::Pay), SwapType::Receiver);
        assert_eq!(SwapType::Payer.floating(), PayReceive::Receive);
        assert_eq!(SwapType::Payer.opposite(), SwapType::Receiver);
    }

    #[test]
    fn test_flat_curve_payer_loses_fixed_leg() {
        let swap = VanillaSwap::new(&terms()).unwrap();
        let curve = flat_curve();
        let as_of = curve.base_date();
        let fv = swap.fair_value(&curve, as_of).unwrap();

        let days: i64 = swap
            .schedule()
            .periods()
            .map(|p| DayCountConvention::Act360.day_count(p.start, p.end))
            .sum();
        let expected = -10_000_000.0 * 0.03 * days as f64 / 360.0;

        assert!(fv < 0.0);
        assert_relative_eq!(fv, expected, max_relative = 1e-12);
        assert_relative_eq!(fv, -600_000.0, max_relative = 0.02);
    }

    #[test]
    fn test_receiver_is_mirror() {
        let curve = sloped_curve();
        let as_of = curve.base_date();
        let payer = VanillaSwap::new(&terms()).unwrap();
        let receiver = payer.with_swap_type(SwapType::Receiver);
        assert_relative_eq!(
            payer.fair_value(&curve, as_of).unwrap(),
            -receiver.fair_value(&curve, as_of).unwrap(),
            max_relative = 1e-14
        );
    }

    #[test]
    fn test_par_rate_zeroes_fair_value() {
        let curve = sloped_curve();
        let swap = VanillaSwap::new(&terms()).unwrap();
        for as_of in [d(2023, 3, 31), d(2023, 8, 15), d(2024, 12, 2)] {
            let par = swap.par_rate(&curve, as_of).unwrap();
            let fv = swap.with_fixed_rate(par).fair_value(&curve, as_of).unwrap();
            assert_abs_diff_eq!(fv, 0.0, epsilon = 1e-8 * swap.notional());
        }
    }

    #[test]
    fn test_settled_periods_excluded() {
        let curve = sloped_curve();
        let swap = VanillaSwap::new(&terms()).unwrap();
        let valuation = swap.valuation(&curve, d(2024, 6, 28)).unwrap();
        assert_eq!(valuation.remaining_periods, 3);
    }

    #[test]
    fn test_matured_swap_has_zero_value_and_no_par_rate() {
        let curve = sloped_curve();
        let swap = VanillaSwap::new(&terms()).unwrap();
        let after = d(2025, 4, 1);
        assert_eq!(swap.fair_value(&curve, after).unwrap(), 0.0);
        let err = swap.par_rate(&curve, after).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Numerical);
    }

    #[test]
    fn test_invalid_notional() {
        let mut t = terms();
        t.notional = 0.0;
        assert_eq!(VanillaSwap::new(&t).unwrap_err().kind(), ErrorKind::InvalidInput);
    }

    #[test]
    fn test_calendar_follows_currency() {
        let swap = VanillaSwap::new(&terms()).unwrap();
        // Easter 2024 under TARGET
        assert!(swap.schedule().dates().contains(&d(2024, 3, 28)));
        assert_eq!(swap.currency(), Currency::EUR);
    }
}
