//! # CFHedge Core
//!
//! Foundational building blocks for the CFHedge hedge accounting engine:
//!
//! - **Types**: `Date`, `Currency`, `Tenor`, `Frequency`, `PayReceive`
//! - **Day Count Conventions**: ACT/360 and ACT/365 Fixed year fractions
//! - **Business Day Calendars**: TARGET, UK and US holiday rules with
//!   business-day adjustment
//! - **Ordered-Date Lookup**: infimum/supremum search over sorted dates
//! - **Errors**: the shared [`ErrorKind`] taxonomy surfaced by every crate
//!
//! ## Example
//!
//! ```rust
//! use cfhedge_core::prelude::*;
//!
//! let ccy: Currency = "EUR".parse().unwrap();
//! let calendar = ccy.calendar_id().calendar();
//! let date = Date::from_ymd(2023, 4, 1).unwrap(); // Saturday
//! let adjusted = calendar.adjust(date, BusinessDayConvention::ModifiedFollowing);
//! assert_eq!(adjusted, Date::from_ymd(2023, 4, 3).unwrap());
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::match_same_arms)]
#![allow(clippy::unreadable_literal)]
#![allow(clippy::return_self_not_must_use)]

pub mod calendars;
pub mod daycounts;
pub mod error;
pub mod lookup;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::calendars::{BusinessDayConvention, Calendar, CalendarId};
    pub use crate::daycounts::{DayCount, DayCountConvention};
    pub use crate::error::{ErrorKind, HedgeError, HedgeResult};
    pub use crate::lookup::{infimum, supremum};
    pub use crate::types::{Currency, Date, Frequency, PayReceive, Tenor, TenorUnit};
}

// Re-export commonly used types at crate root
pub use error::{ErrorKind, HedgeError, HedgeResult};
pub use types::{Currency, Date, Frequency, PayReceive, Tenor};
