//! Per-date summary of a relationship.

use serde::{Deserialize, Serialize};

use cfhedge_core::types::Date;

use crate::ledger::LedgerEntry;

/// One summary row: the period's reserve and income statement movements.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SummaryRow {
    /// Test date.
    pub date: Date,
    /// New cash-flow hedge reserve.
    pub new_cfhr: f64,
    /// Original hedge amortisation.
    pub original_hedge_amortisation: f64,
    /// Ineffectiveness recognised in the period.
    pub ineffectiveness: f64,
}

impl From<&LedgerEntry> for SummaryRow {
    fn from(entry: &LedgerEntry) -> Self {
        Self {
            date: entry.date,
            new_cfhr: entry.entries.new_cfhr,
            original_hedge_amortisation: entry.entries.original_hedge_amortisation,
            ineffectiveness: entry.entries.ineffectiveness,
        }
    }
}

/// Column totals of `rows`.
pub fn totals(rows: &[SummaryRow]) -> (f64, f64, f64) {
    rows.iter().fold((0.0, 0.0, 0.0), |(cfhr, oha, ineff), row| {
        (
            cfhr + row.new_cfhr,
            oha + row.original_hedge_amortisation,
            ineff + row.ineffectiveness,
        )
    })
}
