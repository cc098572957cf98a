//! Evaluation of many independent relationships.
//!
//! Each relationship replays its own event sequence; relationships share
//! nothing but the read-only curve store, so they are evaluated with
//! `rayon` when the `parallel` feature is enabled and the batch is large
//! enough.

use serde::{Deserialize, Serialize};

use cfhedge_core::types::Date;
use cfhedge_curves::CurveStore;

use crate::effectiveness::{EffectivenessRecord, FairValueObservation};
use crate::error::AccountingResult;
use crate::ledger::LedgerBalances;
use crate::relationship::{HedgeRelationship, RelationshipState};
use crate::summary::SummaryRow;
use crate::trade::HedgeTrade;

/// One caller-supplied step of a relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum HedgeEvent {
    /// Test with fair values supplied by the caller.
    Observe(FairValueObservation),
    /// Test with both instruments valued on the curve keyed at `date`.
    ObserveMarket {
        /// Test date.
        date: Date,
    },
    /// Open a new segment.
    Redesignate {
        /// New hedging date.
        date: Option<Date>,
        /// Swap fair value override for the new baseline.
        #[serde(default)]
        swap_fair_value: Option<f64>,
    },
    /// End the relationship.
    Terminate {
        /// Termination date.
        date: Date,
    },
}

/// A trade and the events to replay against it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipInput {
    /// Hedging instrument.
    pub trade: HedgeTrade,
    /// Events in date order.
    pub events: Vec<HedgeEvent>,
}

/// Outcome of one relationship.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RelationshipReport {
    /// Trade identifier.
    pub trade_id: String,
    /// Final state.
    pub state: RelationshipState,
    /// Hypothetical rate of each segment, keyed by hedging date.
    pub hypo_rates: Vec<(Date, f64)>,
    /// Effectiveness records across segments.
    pub records: Vec<EffectivenessRecord>,
    /// Summary rows across segments.
    pub summary: Vec<SummaryRow>,
    /// Closing balances.
    pub closing: LedgerBalances,
}

impl From<&HedgeRelationship> for RelationshipReport {
    fn from(rel: &HedgeRelationship) -> Self {
        Self {
            trade_id: rel.trade().trade_id.clone(),
            state: rel.state(),
            hypo_rates: rel
                .segments()
                .iter()
                .map(|s| (s.hedging_date(), s.hypo().hypo_rate()))
                .collect(),
            records: rel.records().copied().collect(),
            summary: rel.summary(),
            closing: rel.closing_balances(),
        }
    }
}

/// Configuration for portfolio evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioConfig {
    /// Enable parallel evaluation (requires the `parallel` feature).
    pub parallel: bool,
    /// Minimum number of relationships to evaluate in parallel.
    pub parallel_threshold: usize,
}

impl Default for PortfolioConfig {
    fn default() -> Self {
        Self {
            parallel: true,
            parallel_threshold: 8,
        }
    }
}

impl PortfolioConfig {
    /// Sequential evaluation.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the parallel threshold.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if `count` relationships should be evaluated in parallel.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}

/// Applies one event to a relationship.
pub fn apply_event(
    rel: &mut HedgeRelationship,
    store: &CurveStore,
    event: &HedgeEvent,
) -> AccountingResult<()> {
    match event {
        HedgeEvent::Observe(observation) => {
            rel.record_period(*observation)?;
        }
        HedgeEvent::ObserveMarket { date } => {
            rel.record_from_store(store, *date)?;
        }
        HedgeEvent::Redesignate {
            date,
            swap_fair_value,
        } => {
            rel.redesignate_from_store(store, *date, *swap_fair_value)?;
        }
        HedgeEvent::Terminate { date } => rel.terminate(*date)?,
    }
    Ok(())
}

/// Designates the trade and replays its events.
pub fn evaluate_relationship(
    input: &RelationshipInput,
    store: &CurveStore,
) -> AccountingResult<HedgeRelationship> {
    let span = tracing::info_span!("relationship", trade_id = %input.trade.trade_id);
    let _guard = span.enter();

    let mut rel = HedgeRelationship::designate_from_store(input.trade.clone(), store)?;
    for event in &input.events {
        if let Err(e) = apply_event(&mut rel, store, event) {
            tracing::warn!(error = %e, "event rejected");
            return Err(e);
        }
    }

    tracing::info!(
        state = %rel.state(),
        records = rel.records().count(),
        "relationship evaluated"
    );
    Ok(rel)
}

/// Evaluates every relationship; results are in input order.
#[allow(unused_variables)]
pub fn evaluate_portfolio(
    inputs: &[RelationshipInput],
    store: &CurveStore,
    config: &PortfolioConfig,
) -> Vec<AccountingResult<RelationshipReport>> {
    let run = |input: &RelationshipInput| {
        evaluate_relationship(input, store).map(|rel| RelationshipReport::from(&rel))
    };

    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(inputs.len()) {
            return inputs.par_iter().map(run).collect();
        }
    }

    inputs.iter().map(run).collect()
}
