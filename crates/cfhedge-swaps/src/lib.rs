//! # CFHedge Swaps
//!
//! Vanilla fixed-for-floating interest rate swaps:
//!
//! - **Schedule**: period boundaries generated backward (or forward) from
//!   the termination date with business-day adjustment
//! - **Legs**: fixed and floating cash flows per period
//! - **VanillaSwap**: fair value and par rate as of an explicit date
//! - **CashFlowTable**: the per-period evaluation table used by hedge
//!   accounting, including the amortisation columns
//!
//! ## Quick Start
//!
//! ```rust
//! use cfhedge_swaps::prelude::*;
//! use cfhedge_core::types::{Currency, Date, PayReceive};
//! use cfhedge_core::daycounts::DayCountConvention;
//! use cfhedge_curves::DiscountCurve;
//!
//! let base = Date::from_ymd(2023, 3, 31).unwrap();
//! let curve = DiscountCurve::new(
//!     base,
//!     vec![base, base.add_years(5).unwrap()],
//!     vec![1.0, 0.88],
//! )
//! .unwrap();
//!
//! let terms = SwapTerms {
//!     currency: Currency::EUR,
//!     effective_date: base,
//!     termination_date: base.add_years(2).unwrap(),
//!     payment_tenor: "3M".parse().unwrap(),
//!     day_count: DayCountConvention::Act360,
//!     notional: 10_000_000.0,
//!     fixed_rate: 0.03,
//!     floating: PayReceive::Receive,
//! };
//! let swap = VanillaSwap::new(&terms).unwrap();
//! let par = swap.par_rate(&curve, base).unwrap();
//! let at_par = swap.with_fixed_rate(par);
//! assert!(at_par.fair_value(&curve, base).unwrap().abs() < 1e-6);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::doc_markdown)]

pub mod error;
pub mod leg;
pub mod schedule;
pub mod swap;
pub mod table;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{SwapError, SwapResult};
    pub use crate::leg::{CashFlow, Leg, LegKind};
    pub use crate::schedule::{DateGenerationRule, Period, Schedule, ScheduleBuilder};
    pub use crate::swap::{SwapTerms, SwapType, SwapValuation, VanillaSwap};
    pub use crate::table::{Amortisation, CashFlowRow, CashFlowTable, TableConventions};
}

pub use error::{SwapError, SwapResult};
pub use schedule::Schedule;
pub use swap::{SwapTerms, SwapType, VanillaSwap};
pub use table::CashFlowTable;
