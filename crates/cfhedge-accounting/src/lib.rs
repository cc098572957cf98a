//! # CFHedge Accounting
//!
//! Cash-flow hedge accounting for interest rate swaps designated against
//! floating-rate debt:
//!
//! - **HedgeTrade**: the hedging instrument's terms, loadable from TOML
//! - **HypotheticalDerivative**: the mirrored swap calibrated to zero fair
//!   value at each hedging date
//! - **EffectivenessTest**: dollar-offset test with date-ratio amortised
//!   cash settlements and cumulative ineffectiveness
//! - **ReserveLedger**: cash-flow hedge reserve and income statement
//!   roll-forward
//! - **HedgeRelationship**: designation, periods, redesignation and
//!   termination as explicit transitions
//! - **Portfolio**: independent relationships evaluated in parallel
//!
//! ## Quick Start
//!
//! ```rust
//! use cfhedge_accounting::prelude::*;
//! use cfhedge_core::types::Date;
//! use cfhedge_curves::DiscountCurve;
//!
//! let trade = HedgeTrade::from_toml_str(r#"
//!     trade_id = "IRS 001"
//!     notional = 10000000.0
//!     currency = "EUR"
//!     inception_date = "2023-03-31"
//!     trade_date = "2023-03-31"
//!     maturity_date = "2025-03-31"
//!     market_data_base_date = "2023-03-31"
//!     day_count = "ACT/360"
//!     nominal_value_of_debt = 10000000.0
//!     floating_frequency = "3M"
//!     floating_pay_receive = "RECEIVE"
//!     fixed_rate = 0.0275
//! "#).unwrap();
//!
//! let base = trade.market_data_base_date;
//! let curve = DiscountCurve::new(
//!     base,
//!     vec![base, base.add_years(5).unwrap()],
//!     vec![1.0, 0.86],
//! )
//! .unwrap();
//!
//! let mut rel = HedgeRelationship::designate(trade, &curve).unwrap();
//! let date = Date::from_ymd(2023, 6, 30).unwrap();
//! let record = rel
//!     .record_period(FairValueObservation::new(date, 12_000.0, -11_500.0))
//!     .unwrap();
//! assert!(record.cumulative_ineffectiveness >= 0.0);
//! assert_eq!(rel.state(), RelationshipState::Active);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::doc_markdown)]

pub mod effectiveness;
pub mod error;
pub mod hypo;
pub mod ledger;
pub mod portfolio;
pub mod relationship;
pub mod summary;
pub mod trade;

#[cfg(test)]
mod test_support;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::effectiveness::{
        date_ratio, Baseline, DateRatio, EffectivenessRecord, EffectivenessTest,
        FairValueObservation, RegimeEntry,
    };
    pub use crate::error::{AccountingError, AccountingResult};
    pub use crate::hypo::HypotheticalDerivative;
    pub use crate::ledger::{LedgerBalances, LedgerEntry, ReserveLedger};
    pub use crate::portfolio::{
        evaluate_portfolio, evaluate_relationship, HedgeEvent, PortfolioConfig,
        RelationshipInput, RelationshipReport,
    };
    pub use crate::relationship::{HedgeRelationship, RelationshipState, Segment};
    pub use crate::summary::SummaryRow;
    pub use crate::trade::HedgeTrade;
}

pub use error::{AccountingError, AccountingResult};
pub use relationship::{HedgeRelationship, RelationshipState};
pub use trade::HedgeTrade;
