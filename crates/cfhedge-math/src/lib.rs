//! # CFHedge Math
//!
//! Numerical primitives for curve construction:
//!
//! - **Interpolation**: linear, flat (step) and log-linear ("exponential")
//!   interpolators behind a common [`Interpolator`](interpolation::Interpolator) trait
//! - **Extrapolation**: flat or natural continuation above the last pillar
//!
//! Log-linear interpolation is evaluated over complex numbers so that
//! negative values (e.g. negative rates) interpolate without a domain error;
//! the real part of the result is returned.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::many_single_char_names)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]
#![allow(clippy::cast_precision_loss)]

pub mod error;
pub mod interpolation;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::error::{MathError, MathResult};
    pub use crate::interpolation::{
        interpolate, Extrapolation, FlatInterpolator, InterpolationMethod, Interpolator,
        LinearInterpolator, LogLinearInterpolator,
    };
}

pub use error::{MathError, MathResult};
