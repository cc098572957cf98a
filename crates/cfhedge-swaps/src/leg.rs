//! Fixed and floating swap legs.
//!
//! # Cash flows
//!
//! ```text
//! Fixed:    N × c × τ(start, end)
//! Floating: N × F(max(start, as_of), end) × τ(start, end)
//! ```
//!
//! `F` is the simple forward implied by the curve under the leg's day count,
//! so a floating period that has not started pays exactly
//! `N × (DF(start) / DF(end) − 1)`. A period already in progress forecasts
//! from the valuation date but still accrues over the full period.

use serde::{Deserialize, Serialize};

use cfhedge_core::daycounts::{DayCount, DayCountConvention};
use cfhedge_core::types::Date;
use cfhedge_curves::{Compounding, DiscountCurve};

use crate::error::SwapResult;
use crate::schedule::Period;

/// Which side of the swap a leg represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LegKind {
    /// Fixed-rate leg.
    Fixed,
    /// Floating-rate leg.
    Floating,
}

/// A single period cash flow.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlow {
    /// Accrual start.
    pub start: Date,
    /// Accrual end and payment date.
    pub end: Date,
    /// Year fraction of the period.
    pub accrual: f64,
    /// Fixed or forecast rate.
    pub rate: f64,
    /// Undiscounted amount.
    pub amount: f64,
}

/// One leg of a swap.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    kind: LegKind,
    notional: f64,
    cash_flows: Vec<CashFlow>,
}

impl Leg {
    /// Builds a fixed leg paying `rate` on every period.
    #[must_use]
    pub fn fixed(periods: &[Period], notional: f64, rate: f64, day_count: DayCountConvention) -> Self {
        let cash_flows = periods
            .iter()
            .map(|p| {
                let accrual = day_count.year_fraction(p.start, p.end);
                CashFlow {
                    start: p.start,
                    end: p.end,
                    accrual,
                    rate,
                    amount: notional * rate * accrual,
                }
            })
            .collect();

        Self {
            kind: LegKind::Fixed,
            notional,
            cash_flows,
        }
    }

    /// Builds a floating leg forecast from `curve` as of `as_of`.
    ///
    /// Every period must end after `as_of`.
    pub fn floating(
        periods: &[Period],
        notional: f64,
        day_count: DayCountConvention,
        curve: &DiscountCurve,
        as_of: Date,
    ) -> SwapResult<Self> {
        let mut cash_flows = Vec::with_capacity(periods.len());
        for p in periods {
            let fixing_start = p.start.max(as_of);
            let rate = curve.forward_rate(fixing_start, p.end, day_count, Compounding::Simple)?;
            let accrual = day_count.year_fraction(p.start, p.end);
            cash_flows.push(CashFlow {
                start: p.start,
                end: p.end,
                accrual,
                rate,
                amount: notional * rate * accrual,
            });
        }

        Ok(Self {
            kind: LegKind::Floating,
            notional,
            cash_flows,
        })
    }

    /// Fixed or floating.
    pub fn kind(&self) -> LegKind {
        self.kind
    }

    /// Notional the leg accrues on.
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Cash flows in period order.
    pub fn cash_flows(&self) -> &[CashFlow] {
        &self.cash_flows
    }

    /// Number of cash flows.
    pub fn len(&self) -> usize {
        self.cash_flows.len()
    }

    /// True when no cash flows remain.
    pub fn is_empty(&self) -> bool {
        self.cash_flows.is_empty()
    }

    /// Undiscounted sum of the cash flows.
    pub fn total(&self) -> f64 {
        self.cash_flows.iter().map(|cf| cf.amount).sum()
    }

    /// Present value as of `as_of`, discounting each flow by `DF(end) / DF(as_of)`.
    pub fn npv(&self, curve: &DiscountCurve, as_of: Date) -> SwapResult<f64> {
        let df_as_of = curve.discount_factor(as_of)?;
        let mut pv = 0.0;
        for cf in &self.cash_flows {
            pv += cf.amount * curve.discount_factor(cf.end)? / df_as_of;
        }
        Ok(pv)
    }
}
