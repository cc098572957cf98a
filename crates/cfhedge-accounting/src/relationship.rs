//! Hedging relationship state machine.
//!
//! ```text
//! Inception ──record──▶ Active ──redesignate──▶ Redesignated ──record──▶ Active
//!     │                   │                           │
//!     └───────────────────┴──────terminate────────────┴──▶ Terminated
//! ```
//!
//! Every transition is explicit. A relationship is split into segments,
//! one per hedging date: designation opens the first, each redesignation
//! opens another whose ledger starts from the previous closing balances.

use serde::{Deserialize, Serialize};
use std::fmt;

use cfhedge_core::types::Date;
use cfhedge_curves::{CurveStore, DiscountCurve};
use cfhedge_swaps::{CashFlowTable, VanillaSwap};

use crate::effectiveness::{Baseline, EffectivenessRecord, EffectivenessTest, FairValueObservation};
use crate::error::{AccountingError, AccountingResult};
use crate::hypo::HypotheticalDerivative;
use crate::ledger::{LedgerBalances, LedgerEntry, ReserveLedger};
use crate::summary::SummaryRow;
use crate::trade::HedgeTrade;

/// Lifecycle state of a relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RelationshipState {
    /// Designated; no period recorded yet.
    Inception,
    /// At least one period recorded in the current segment.
    Active,
    /// A new segment was opened; no period recorded in it yet.
    Redesignated,
    /// No further periods.
    Terminated,
}

impl fmt::Display for RelationshipState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RelationshipState::Inception => "Inception",
            RelationshipState::Active => "Active",
            RelationshipState::Redesignated => "Redesignated",
            RelationshipState::Terminated => "Terminated",
        };
        f.write_str(name)
    }
}

/// The hedging tables, hypothetical derivative and results of one hedging date.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    curve_date: Date,
    hypo: HypotheticalDerivative,
    swap_table: CashFlowTable,
    hypo_table: CashFlowTable,
    test: EffectivenessTest,
    records: Vec<EffectivenessRecord>,
    ledger: ReserveLedger,
}

impl Segment {
    fn open(
        trade: &HedgeTrade,
        swap: &VanillaSwap,
        curve: &DiscountCurve,
        hedging_date: Date,
        premium_paid: f64,
        swap_fair_value: Option<f64>,
        opening: LedgerBalances,
    ) -> AccountingResult<Self> {
        let swap_table = CashFlowTable::build(
            swap,
            curve,
            hedging_date,
            trade.nominal_value_of_debt,
            premium_paid,
            trade.table_conventions(),
        )?;
        let hypo = HypotheticalDerivative::calibrate(swap, curve, hedging_date)?;
        let hypo_table = hypo.table(curve, trade.nominal_value_of_debt)?;

        let baseline = Baseline {
            date: hedging_date,
            swap_fair_value: swap_fair_value.unwrap_or_else(|| swap_table.mtm()),
            hypo_fair_value: 0.0,
        };
        let test = EffectivenessTest::new(baseline, &swap_table, &hypo_table)?;

        Ok(Self {
            curve_date: curve.base_date(),
            hypo,
            swap_table,
            hypo_table,
            test,
            records: Vec::new(),
            ledger: ReserveLedger::new(opening),
        })
    }

    /// Hedging date of the segment.
    pub fn hedging_date(&self) -> Date {
        self.hypo.hedging_date()
    }

    /// Base date of the curve the segment was calibrated on.
    pub fn curve_date(&self) -> Date {
        self.curve_date
    }

    /// Fair values the segment measures clean changes against.
    pub fn baseline(&self) -> Baseline {
        self.test.baseline()
    }

    /// Hypothetical derivative calibrated at the hedging date.
    pub fn hypo(&self) -> &HypotheticalDerivative {
        &self.hypo
    }

    /// Evaluation table of the hedging swap.
    pub fn swap_table(&self) -> &CashFlowTable {
        &self.swap_table
    }

    /// Evaluation table of the hypothetical derivative.
    pub fn hypo_table(&self) -> &CashFlowTable {
        &self.hypo_table
    }

    /// Effectiveness records in date order.
    pub fn records(&self) -> &[EffectivenessRecord] {
        &self.records
    }

    /// Reserve ledger of the segment.
    pub fn ledger(&self) -> &ReserveLedger {
        &self.ledger
    }

    /// Date of the last record, or the hedging date.
    pub fn last_date(&self) -> Date {
        self.test.previous_date()
    }
}

/// A designated cash-flow hedge and its history.
#[derive(Debug, Clone, PartialEq)]
pub struct HedgeRelationship {
    trade: HedgeTrade,
    swap: VanillaSwap,
    state: RelationshipState,
    segments: Vec<Segment>,
    termination_date: Option<Date>,
}

impl HedgeRelationship {
    /// Designates the trade's swap at its inception date.
    ///
    /// `curve` is the curve as of the trade's market data base date.
    pub fn designate(trade: HedgeTrade, curve: &DiscountCurve) -> AccountingResult<Self> {
        trade.validate()?;
        let swap = trade.swap()?;
        let segment = Segment::open(
            &trade,
            &swap,
            curve,
            trade.inception_date,
            trade.premium_paid,
            None,
            LedgerBalances::default(),
        )?;

        log::info!(
            "designated {}: {} periods, hypo rate {:.6}, MtM {:.2}",
            trade.trade_id,
            swap.schedule().len(),
            segment.hypo.hypo_rate(),
            segment.baseline().swap_fair_value
        );

        Ok(Self {
            trade,
            swap,
            state: RelationshipState::Inception,
            segments: vec![segment],
            termination_date: None,
        })
    }

    /// Designates using the curve keyed at the market data base date.
    pub fn designate_from_store(trade: HedgeTrade, store: &CurveStore) -> AccountingResult<Self> {
        let curve = store.get(&trade.curve_key(trade.market_data_base_date))?;
        Self::designate(trade, &curve)
    }

    /// Records the effectiveness test for the next date.
    pub fn record_period(
        &mut self,
        observation: FairValueObservation,
    ) -> AccountingResult<&EffectivenessRecord> {
        self.ensure_open("record a period for")?;
        let segment = self.current_segment_mut();
        let record = segment.test.step(&observation)?;
        segment.ledger.post(&record);
        segment.records.push(record);
        self.state = RelationshipState::Active;

        Ok(&self.current_segment().records[self.current_segment().records.len() - 1])
    }

    /// Values both instruments on `date` with the curve keyed at that date
    /// and records the period.
    pub fn record_from_store(
        &mut self,
        store: &CurveStore,
        date: Date,
    ) -> AccountingResult<&EffectivenessRecord> {
        self.ensure_open("record a period for")?;
        let curve = store.get(&self.trade.curve_key(date))?;
        let observation = FairValueObservation {
            date,
            swap_fair_value: self.swap.fair_value(&curve, date)?,
            hypo_fair_value: self.current_segment().hypo.fair_value(&curve, date)?,
        };
        self.record_period(observation)
    }

    /// Opens a new segment at `date`.
    ///
    /// Allowed from `Active` and `Redesignated`. The hypothetical derivative is recalibrated to the swap's par rate at
    /// `date` and the baseline becomes the swap's fair value there, or
    /// `swap_fair_value` when supplied. The ledger continues from the current
    /// closing balances.
    pub fn redesignate(
        &mut self,
        date: Option<Date>,
        curve: &DiscountCurve,
        swap_fair_value: Option<f64>,
    ) -> AccountingResult<&Segment> {
        match self.state {
            RelationshipState::Active | RelationshipState::Redesignated => {}
            state => {
                return Err(AccountingError::InvalidTransition {
                    state,
                    action: "redesignate",
                })
            }
        }
        let date = date.ok_or(AccountingError::missing("new hedging date"))?;
        let last = self.current_segment().last_date();
        if date <= last {
            return Err(AccountingError::invalid_input(format!(
                "new hedging date {date} is not after {last}"
            )));
        }

        let baseline = match swap_fair_value {
            Some(value) => value,
            None => self.swap.fair_value(curve, date)?,
        };
        let opening = self.closing_balances();
        let segment = Segment::open(
            &self.trade,
            &self.swap,
            curve,
            date,
            0.0,
            Some(baseline),
            opening,
        )?;

        log::info!(
            "redesignated {} at {date}: hypo rate {:.6}, baseline {:.2}",
            self.trade.trade_id,
            segment.hypo.hypo_rate(),
            segment.baseline().swap_fair_value
        );

        self.segments.push(segment);
        self.state = RelationshipState::Redesignated;
        Ok(self.current_segment())
    }

    /// Redesignates with the curve keyed at `date`.
    pub fn redesignate_from_store(
        &mut self,
        store: &CurveStore,
        date: Option<Date>,
        swap_fair_value: Option<f64>,
    ) -> AccountingResult<&Segment> {
        let date = date.ok_or(AccountingError::missing("new hedging date"))?;
        let curve = store.get(&self.trade.curve_key(date))?;
        self.redesignate(Some(date), &curve, swap_fair_value)
    }

    /// Ends the relationship; no further periods can be recorded.
    pub fn terminate(&mut self, date: Date) -> AccountingResult<()> {
        self.ensure_open("terminate")?;
        let last = self.current_segment().last_date();
        if date < last {
            return Err(AccountingError::invalid_input(format!(
                "termination date {date} precedes {last}"
            )));
        }
        self.termination_date = Some(date);
        self.state = RelationshipState::Terminated;
        log::info!("terminated {} at {date}", self.trade.trade_id);
        Ok(())
    }

    /// Current state.
    pub fn state(&self) -> RelationshipState {
        self.state
    }

    /// The designated trade.
    pub fn trade(&self) -> &HedgeTrade {
        &self.trade
    }

    /// The hedging swap.
    pub fn swap(&self) -> &VanillaSwap {
        &self.swap
    }

    /// Segments in order; never empty.
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// The segment new periods are recorded in.
    pub fn current_segment(&self) -> &Segment {
        // designate() always creates the first segment
        &self.segments[self.segments.len() - 1]
    }

    fn current_segment_mut(&mut self) -> &mut Segment {
        let last = self.segments.len() - 1;
        &mut self.segments[last]
    }

    /// Termination date, once terminated.
    pub fn termination_date(&self) -> Option<Date> {
        self.termination_date
    }

    /// All effectiveness records across segments.
    pub fn records(&self) -> impl Iterator<Item = &EffectivenessRecord> {
        self.segments.iter().flat_map(|s| s.records.iter())
    }

    /// All ledger rows across segments.
    pub fn ledger_entries(&self) -> impl Iterator<Item = &LedgerEntry> {
        self.segments.iter().flat_map(|s| s.ledger.entries().iter())
    }

    /// Latest closing balances.
    pub fn closing_balances(&self) -> LedgerBalances {
        self.current_segment().ledger.closing()
    }

    /// Summary rows: date, new reserve, amortisation and ineffectiveness.
    pub fn summary(&self) -> Vec<SummaryRow> {
        self.ledger_entries().map(SummaryRow::from).collect()
    }

    fn ensure_open(&self, action: &'static str) -> AccountingResult<()> {
        if self.state == RelationshipState::Terminated {
            return Err(AccountingError::InvalidTransition {
                state: self.state,
                action,
            });
        }
        Ok(())
    }
}
