//! # CFHedge Curves
//!
//! Discount curves for swap valuation:
//!
//! - **Compounding**: simple, periodic, continuous and simple-then-compounded
//!   conventions with compound factors and implied rates
//! - **DiscountCurve**: immutable (date, discount factor) snapshot with
//!   log-linear interpolation on an ACT/360 time axis
//! - **CurveKey / CurveStore**: curves keyed by currency, reset tenor and
//!   as-of date, with baseline validation on insert
//! - **Loader**: CSV curve files and market-data directories
//!
//! ## Quick Start
//!
//! ```rust
//! use cfhedge_curves::prelude::*;
//! use cfhedge_core::types::Date;
//!
//! let base = Date::from_ymd(2023, 3, 31).unwrap();
//! let curve = DiscountCurve::new(
//!     base,
//!     vec![base, base.add_years(1).unwrap()],
//!     vec![1.0, 0.97],
//! )
//! .unwrap();
//!
//! assert_eq!(curve.discount_factor(base).unwrap(), 1.0);
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

pub mod compounding;
pub mod curve;
pub mod error;
pub mod key;
pub mod loader;
pub mod store;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::compounding::Compounding;
    pub use crate::curve::DiscountCurve;
    pub use crate::error::{CurveError, CurveResult};
    pub use crate::key::CurveKey;
    pub use crate::loader::{load_curve_csv, load_market_data_dir, read_curve_csv};
    pub use crate::store::CurveStore;
}

pub use compounding::Compounding;
pub use curve::DiscountCurve;
pub use error::{CurveError, CurveResult};
pub use key::CurveKey;
pub use store::CurveStore;
