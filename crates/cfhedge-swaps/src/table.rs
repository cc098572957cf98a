//! Per-period cash-flow evaluation table.
//!
//! The table lists the outstanding periods of a swap at a hedging date with
//! its leg cash flows, discounted values and the debt-side variable and fixed
//! amounts. For the hedging instrument it also allocates the mark-to-market
//! across periods:
//!
//! ```text
//! ratio_k              = (receive − pay)_k / MtM
//! premium_and_mtm_k    = ratio_k × (MtM + premium paid)
//! amortisation_k       = premium_and_mtm_k + (receive − pay)_k
//! ```
//!
//! where `MtM = Σ (receive − pay)_k`.

use serde::{Deserialize, Serialize};

use cfhedge_core::daycounts::{DayCount, DayCountConvention};
use cfhedge_core::types::{Date, Frequency};
use cfhedge_curves::{Compounding, DiscountCurve};

use crate::error::{SwapError, SwapResult};
use crate::swap::{SwapType, VanillaSwap};

/// Relative size below which the mark-to-market counts as zero.
const MTM_EPSILON: f64 = 1e-12;

/// Conventions used to populate the display and debt columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableConventions {
    /// Day count of the displayed floating rate.
    pub rate_day_count: DayCountConvention,
    /// Compounding of the displayed floating rate.
    pub rate_compounding: Compounding,
    /// Day count of the variable and fixed debt columns.
    pub accrual_day_count: DayCountConvention,
    /// Whether to fill the amortisation columns.
    pub amortise: bool,
}

impl TableConventions {
    /// Conventions for the real swap: ACT/360 quarterly-compounded display
    /// rate, debt columns on the swap's own day count, amortisation on.
    #[must_use]
    pub fn hedging_instrument(accrual_day_count: DayCountConvention) -> Self {
        Self {
            rate_day_count: DayCountConvention::Act360,
            rate_compounding: Compounding::SimpleThenCompounded(Frequency::Quarterly),
            accrual_day_count,
            amortise: true,
        }
    }

    /// Conventions for the hypothetical derivative: ACT/360 simple display
    /// rate and debt columns, no amortisation.
    #[must_use]
    pub fn hypothetical() -> Self {
        Self {
            rate_day_count: DayCountConvention::Act360,
            rate_compounding: Compounding::Simple,
            accrual_day_count: DayCountConvention::Act360,
            amortise: false,
        }
    }
}

/// Amortisation columns of a row.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Amortisation {
    /// Share of the mark-to-market carried by the period.
    pub ratio: f64,
    /// `ratio × (MtM + premium paid)`.
    pub premium_and_mtm: f64,
    /// `premium_and_mtm + (receive − pay)`.
    pub cash_flow_amortisation: f64,
}

/// One period of the table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CashFlowRow {
    /// Accrual start.
    pub start: Date,
    /// Accrual end and payment date.
    pub end: Date,
    /// Swap notional.
    pub notional: f64,
    /// Displayed forward rate.
    pub floating_rate: f64,
    /// `DF(end) / DF(hedging date)`.
    pub discount_factor: f64,
    /// Amount received.
    pub receive: f64,
    /// Amount paid.
    pub pay: f64,
    /// Discounted amount received.
    pub discounted_receive: f64,
    /// Discounted amount paid.
    pub discounted_pay: f64,
    /// `discounted_receive − discounted_pay`.
    pub receive_minus_pay: f64,
    /// Variable interest on the hedged debt, for periods starting on or after the hedging date.
    pub variable_receive: f64,
    /// Fixed interest on the hedged debt, for periods ending on or after the hedging date.
    pub fixed_pay: f64,
    /// `variable_receive − fixed_pay`.
    pub net_cash_flow: f64,
    /// Filled for the hedging instrument only.
    pub amortisation: Option<Amortisation>,
}

/// The evaluation table of a swap at a hedging date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CashFlowTable {
    hedging_date: Date,
    mtm: f64,
    premium_paid: f64,
    rows: Vec<CashFlowRow>,
}

impl CashFlowTable {
    /// Builds the table of the periods outstanding at `hedging_date`.
    ///
    /// `nominal_value_of_debt` scales the variable and fixed debt columns.
    /// With amortisation enabled, a zero mark-to-market is a numerical error.
    pub fn build(
        swap: &VanillaSwap,
        curve: &DiscountCurve,
        hedging_date: Date,
        nominal_value_of_debt: f64,
        premium_paid: f64,
        conventions: TableConventions,
    ) -> SwapResult<Self> {
        let fixed = swap.fixed_leg(hedging_date);
        let floating = swap.floating_leg(curve, hedging_date)?;
        if fixed.is_empty() {
            return Err(SwapError::NoRemainingPeriods {
                as_of: hedging_date,
                termination: swap.schedule().termination_date(),
            });
        }

        let df_hedging = curve.discount_factor(hedging_date)?;
        let mut rows = Vec::with_capacity(fixed.len());
        for (fixed_cf, floating_cf) in fixed.cash_flows().iter().zip(floating.cash_flows()) {
            let (start, end) = (fixed_cf.start, fixed_cf.end);
            let floating_rate = curve.forward_rate(
                start.max(hedging_date),
                end,
                conventions.rate_day_count,
                conventions.rate_compounding,
            )?;
            let discount_factor = curve.discount_factor(end)? / df_hedging;

            let (receive, pay) = match swap.swap_type() {
                SwapType::Payer => (floating_cf.amount, fixed_cf.amount),
                SwapType::Receiver => (fixed_cf.amount, floating_cf.amount),
            };
            let discounted_receive = receive * discount_factor;
            let discounted_pay = pay * discount_factor;

            let yf = conventions.accrual_day_count.year_fraction(start, end);
            let variable_receive = if start >= hedging_date {
                yf * nominal_value_of_debt * floating_rate
            } else {
                0.0
            };
            let fixed_pay = if end >= hedging_date {
                yf * nominal_value_of_debt * swap.fixed_rate()
            } else {
                0.0
            };

            rows.push(CashFlowRow {
                start,
                end,
                notional: swap.notional(),
                floating_rate,
                discount_factor,
                receive,
                pay,
                discounted_receive,
                discounted_pay,
                receive_minus_pay: discounted_receive - discounted_pay,
                variable_receive,
                fixed_pay,
                net_cash_flow: variable_receive - fixed_pay,
                amortisation: None,
            });
        }

        let mtm: f64 = rows.iter().map(|r| r.receive_minus_pay).sum();

        if conventions.amortise {
            if mtm.abs() <= MTM_EPSILON * swap.notional() {
                return Err(SwapError::numerical(format!(
                    "mark-to-market at {hedging_date} is zero; amortisation ratios are undefined"
                )));
            }
            for row in &mut rows {
                let ratio = row.receive_minus_pay / mtm;
                let premium_and_mtm = ratio * (mtm + premium_paid);
                row.amortisation = Some(Amortisation {
                    ratio,
                    premium_and_mtm,
                    cash_flow_amortisation: premium_and_mtm + row.receive_minus_pay,
                });
            }
        }

        log::debug!(
            "cash-flow table at {hedging_date}: {} rows, MtM {mtm:.2}",
            rows.len()
        );

        Ok(Self {
            hedging_date,
            mtm,
            premium_paid,
            rows,
        })
    }

    /// Date the table was built at.
    pub fn hedging_date(&self) -> Date {
        self.hedging_date
    }

    /// `Σ (receive − pay)`, the fair value at the hedging date.
    pub fn mtm(&self) -> f64 {
        self.mtm
    }

    /// Premium paid on the hedging instrument.
    pub fn premium_paid(&self) -> f64 {
        self.premium_paid
    }

    /// Rows in period order.
    pub fn rows(&self) -> &[CashFlowRow] {
        &self.rows
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Always false for a built table.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Start column.
    pub fn start_dates(&self) -> Vec<Date> {
        self.rows.iter().map(|r| r.start).collect()
    }

    /// End column.
    pub fn end_dates(&self) -> Vec<Date> {
        self.rows.iter().map(|r| r.end).collect()
    }

    /// Receive − pay column.
    pub fn receive_minus_pay(&self) -> Vec<f64> {
        self.rows.iter().map(|r| r.receive_minus_pay).collect()
    }

    /// Cash-flow amortisation column, when the table carries one.
    pub fn cash_flow_amortisation(&self) -> Option<Vec<f64>> {
        self.rows
            .iter()
            .map(|r| r.amortisation.map(|a| a.cash_flow_amortisation))
            .collect()
    }
}
