//! Compounding conventions for interest rate calculations.
//!
//! # Example
//!
//! ```rust
//! use cfhedge_curves::Compounding;
//! use cfhedge_core::types::Frequency;
//!
//! let quarterly = Compounding::SimpleThenCompounded(Frequency::Quarterly);
//!
//! // Within one period the rate compounds simply
//! assert_eq!(quarterly.compound_factor(0.04, 0.25), Compounding::Simple.compound_factor(0.04, 0.25));
//!
//! let cf = Compounding::Continuous.compound_factor(0.05, 2.0);
//! assert!((Compounding::Continuous.implied_rate(cf, 2.0).unwrap() - 0.05).abs() < 1e-14);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

use cfhedge_core::types::Frequency;

use crate::error::{CurveError, CurveResult};

/// Interest compounding convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Compounding {
    /// `1 + r t`
    Simple,
    /// `(1 + r / f)^(f t)`
    Compounded(Frequency),
    /// `exp(r t)`
    Continuous,
    /// Simple up to one period of the frequency, compounded beyond.
    SimpleThenCompounded(Frequency),
}

impl Compounding {
    /// Growth of one unit invested at `rate` for `t` years.
    #[must_use]
    pub fn compound_factor(&self, rate: f64, t: f64) -> f64 {
        match *self {
            Compounding::Simple => 1.0 + rate * t,
            Compounding::Compounded(freq) => {
                let f = f64::from(freq.periods_per_year());
                (1.0 + rate / f).powf(f * t)
            }
            Compounding::Continuous => (rate * t).exp(),
            Compounding::SimpleThenCompounded(freq) => {
                if t <= 1.0 / f64::from(freq.periods_per_year()) {
                    Compounding::Simple.compound_factor(rate, t)
                } else {
                    Compounding::Compounded(freq).compound_factor(rate, t)
                }
            }
        }
    }

    /// Discount factor for `rate` over `t` years.
    #[must_use]
    pub fn discount_factor(&self, rate: f64, t: f64) -> f64 {
        1.0 / self.compound_factor(rate, t)
    }

    /// Rate that grows one unit into `compound` over `t` years.
    ///
    /// # Errors
    ///
    /// `InvalidValue` if `t` is not positive or `compound` is not positive.
    pub fn implied_rate(&self, compound: f64, t: f64) -> CurveResult<f64> {
        if t <= 0.0 || t.is_nan() {
            return Err(CurveError::invalid_value(format!(
                "implied rate needs a positive time, got {t}"
            )));
        }
        if compound <= 0.0 || !compound.is_finite() {
            return Err(CurveError::invalid_value(format!(
                "implied rate needs a positive compound factor, got {compound}"
            )));
        }

        let rate = match *self {
            Compounding::Simple => (compound - 1.0) / t,
            Compounding::Compounded(freq) => {
                let f = f64::from(freq.periods_per_year());
                (compound.powf(1.0 / (f * t)) - 1.0) * f
            }
            Compounding::Continuous => compound.ln() / t,
            Compounding::SimpleThenCompounded(freq) => {
                let inner = if t <= 1.0 / f64::from(freq.periods_per_year()) {
                    Compounding::Simple
                } else {
                    Compounding::Compounded(freq)
                };
                inner.implied_rate(compound, t)?
            }
        };
        Ok(rate)
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Compounding::Simple => write!(f, "Simple"),
            Compounding::Compounded(freq) => write!(f, "Compounded {freq}"),
            Compounding::Continuous => write!(f, "Continuous"),
            Compounding::SimpleThenCompounded(freq) => write!(f, "Simple then {freq}"),
        }
    }
}
