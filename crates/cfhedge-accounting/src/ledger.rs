//! Cash-flow hedge reserve and income statement roll-forward.

use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};

use cfhedge_core::types::Date;

use crate::effectiveness::EffectivenessRecord;

/// Amounts per account: either a period's entries or running balances.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct LedgerBalances {
    /// New cash-flow hedge reserve (clean fair value change of the swap).
    pub new_cfhr: f64,
    /// Original hedge amortisation (cash settlement of the swap).
    pub original_hedge_amortisation: f64,
    /// Reclassification adjustment from the reserve (cash settlement of the hypothetical).
    pub reclassification: f64,
    /// Hedge ineffectiveness recognised in profit or loss.
    pub ineffectiveness: f64,
    /// Retained earnings: reclassification plus ineffectiveness.
    pub retained_earnings: f64,
}

impl LedgerBalances {
    /// Entries implied by one effectiveness record.
    #[must_use]
    pub fn from_record(record: &EffectivenessRecord) -> Self {
        let reclassification = record.hypo.cash_settlement;
        let ineffectiveness = record.period_ineffectiveness;
        Self {
            new_cfhr: record.real.clean_change,
            original_hedge_amortisation: record.real.cash_settlement,
            reclassification,
            ineffectiveness,
            retained_earnings: reclassification + ineffectiveness,
        }
    }

    /// Reserve side: new reserve plus original hedge amortisation.
    pub fn reserve(&self) -> f64 {
        self.new_cfhr + self.original_hedge_amortisation
    }

    /// Income statement side: reclassification plus ineffectiveness.
    pub fn income_statement(&self) -> f64 {
        self.reclassification + self.ineffectiveness
    }
}

impl Add for LedgerBalances {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            new_cfhr: self.new_cfhr + rhs.new_cfhr,
            original_hedge_amortisation: self.original_hedge_amortisation
                + rhs.original_hedge_amortisation,
            reclassification: self.reclassification + rhs.reclassification,
            ineffectiveness: self.ineffectiveness + rhs.ineffectiveness,
            retained_earnings: self.retained_earnings + rhs.retained_earnings,
        }
    }
}

impl AddAssign for LedgerBalances {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

/// One posted period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Test date.
    pub date: Date,
    /// Amounts posted for the period.
    pub entries: LedgerBalances,
    /// Balances after posting.
    pub closing: LedgerBalances,
}

/// Append-only ledger of one segment.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReserveLedger {
    opening: LedgerBalances,
    entries: Vec<LedgerEntry>,
}

impl ReserveLedger {
    /// Starts a ledger from opening balances.
    #[must_use]
    pub fn new(opening: LedgerBalances) -> Self {
        Self {
            opening,
            entries: Vec::new(),
        }
    }

    /// Posts the entries of `record` and returns the new row.
    pub fn post(&mut self, record: &EffectivenessRecord) -> LedgerEntry {
        let entries = LedgerBalances::from_record(record);
        let entry = LedgerEntry {
            date: record.date,
            entries,
            closing: self.closing() + entries,
        };
        self.entries.push(entry);
        entry
    }

    /// Balances the segment started from.
    pub fn opening(&self) -> LedgerBalances {
        self.opening
    }

    /// Latest balances.
    pub fn closing(&self) -> LedgerBalances {
        self.entries.last().map_or(self.opening, |e| e.closing)
    }

    /// Posted rows in date order.
    pub fn entries(&self) -> &[LedgerEntry] {
        &self.entries
    }
}
