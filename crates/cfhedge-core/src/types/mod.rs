//! Domain types for swap valuation and hedge accounting.
//!
//! - [`Date`]: Calendar date for financial calculations
//! - [`Currency`]: Supported ISO currency codes and their calendars
//! - [`Tenor`]: Period lengths such as `3M` or `1Y`
//! - [`Frequency`]: Reset and payment frequency
//! - [`PayReceive`]: Floating-leg direction flag

mod currency;
mod date;
mod frequency;
mod pay_receive;
mod tenor;

pub use currency::Currency;
pub use date::Date;
pub use frequency::Frequency;
pub use pay_receive::PayReceive;
pub use tenor::{Tenor, TenorUnit};
