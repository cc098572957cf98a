//! Hypothetical derivative calibration.
//!
//! The hypothetical derivative mirrors the hedging swap: same schedule,
//! notional and day count, opposite direction, and a fixed rate equal to the
//! hedging swap's par rate at the hedging date. Its fair value at that date
//! is therefore zero, which makes it the benchmark of the dollar-offset test.

use serde::{Deserialize, Serialize};

use cfhedge_core::types::Date;
use cfhedge_curves::DiscountCurve;
use cfhedge_swaps::table::{CashFlowTable, TableConventions};
use cfhedge_swaps::VanillaSwap;

use crate::error::AccountingResult;

/// A swap calibrated to zero fair value at a hedging date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HypotheticalDerivative {
    hedging_date: Date,
    hypo_rate: f64,
    swap: VanillaSwap,
}

impl HypotheticalDerivative {
    /// Calibrates against `hedging_swap` as of `hedging_date`.
    pub fn calibrate(
        hedging_swap: &VanillaSwap,
        curve: &DiscountCurve,
        hedging_date: Date,
    ) -> AccountingResult<Self> {
        let hypo_rate = hedging_swap.par_rate(curve, hedging_date)?;
        let swap = hedging_swap
            .with_swap_type(hedging_swap.swap_type().opposite())
            .with_fixed_rate(hypo_rate);

        log::debug!(
            "hypothetical {} calibrated at {hedging_date}: rate {hypo_rate:.6}",
            swap.swap_type()
        );

        Ok(Self {
            hedging_date,
            hypo_rate,
            swap,
        })
    }

    /// Date the fixed rate was calibrated at.
    pub fn hedging_date(&self) -> Date {
        self.hedging_date
    }

    /// Calibrated fixed rate.
    pub fn hypo_rate(&self) -> f64 {
        self.hypo_rate
    }

    /// The underlying mirrored swap.
    pub fn swap(&self) -> &VanillaSwap {
        &self.swap
    }

    /// Fair value as of `as_of`.
    pub fn fair_value(&self, curve: &DiscountCurve, as_of: Date) -> AccountingResult<f64> {
        Ok(self.swap.fair_value(curve, as_of)?)
    }

    /// Evaluation table at the hedging date; no amortisation columns.
    pub fn table(
        &self,
        curve: &DiscountCurve,
        nominal_value_of_debt: f64,
    ) -> AccountingResult<CashFlowTable> {
        Ok(CashFlowTable::build(
            &self.swap,
            curve,
            self.hedging_date,
            nominal_value_of_debt,
            0.0,
            TableConventions::hypothetical(),
        )?)
    }
}
