//! Interpolation methods for discount curves and worksheet lookups.
//!
//! # Available Methods
//!
//! - [`LinearInterpolator`]: piecewise-linear through the pillars
//! - [`FlatInterpolator`]: step function, each value held until the next pillar
//! - [`LogLinearInterpolator`]: linear in `ln(y)`, the standard for discount factors
//!
//! Every method returns the pillar value exactly at a pillar. Above the last
//! pillar the [`Extrapolation`] policy applies; below the first pillar the
//! first value is returned.

mod flat;
mod linear;
mod log_linear;

pub use flat::FlatInterpolator;
pub use linear::LinearInterpolator;
pub use log_linear::LogLinearInterpolator;

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;

use crate::error::{MathError, MathResult};

/// Trait for interpolation methods.
pub trait Interpolator: Send + Sync {
    /// Returns the interpolated value at x.
    fn interpolate(&self, x: f64) -> MathResult<f64>;

    /// Returns the minimum x value in the data.
    fn min_x(&self) -> f64;

    /// Returns the maximum x value in the data.
    fn max_x(&self) -> f64;

    /// Checks if x is within the interpolation range.
    fn in_range(&self, x: f64) -> bool {
        x >= self.min_x() && x <= self.max_x()
    }
}

/// Behaviour above the last pillar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Extrapolation {
    /// Hold the last value.
    #[default]
    Flat,
    /// Continue the last segment with the method's own formula.
    Natural,
}

impl fmt::Display for Extrapolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Extrapolation::Flat => write!(f, "FLAT"),
            Extrapolation::Natural => write!(f, "NATURAL"),
        }
    }
}

impl std::str::FromStr for Extrapolation {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "FLAT" => Ok(Extrapolation::Flat),
            "NATURAL" | "NONE" => Ok(Extrapolation::Natural),
            _ => Err(MathError::unsupported_method(s)),
        }
    }
}

/// Interpolation scheme selected by name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum InterpolationMethod {
    /// Piecewise linear.
    Linear,
    /// Log-linear, also known as exponential interpolation.
    #[default]
    Exponential,
    /// Step.
    Flat,
}

impl InterpolationMethod {
    /// Builds an interpolator of this kind over the given pillars.
    pub fn build(
        self,
        xs: Vec<f64>,
        ys: Vec<f64>,
        extrapolation: Extrapolation,
    ) -> MathResult<Box<dyn Interpolator>> {
        Ok(match self {
            InterpolationMethod::Linear => {
                Box::new(LinearInterpolator::new(xs, ys)?.with_extrapolation(extrapolation))
            }
            InterpolationMethod::Exponential => {
                Box::new(LogLinearInterpolator::new(xs, ys)?.with_extrapolation(extrapolation))
            }
            InterpolationMethod::Flat => Box::new(FlatInterpolator::new(xs, ys)?),
        })
    }
}

impl fmt::Display for InterpolationMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InterpolationMethod::Linear => write!(f, "LINEAR"),
            InterpolationMethod::Exponential => write!(f, "EXPONENTIAL"),
            InterpolationMethod::Flat => write!(f, "FLAT"),
        }
    }
}

impl std::str::FromStr for InterpolationMethod {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "LINEAR" => Ok(InterpolationMethod::Linear),
            "EXPONENTIAL" | "LOG-LINEAR" | "LOGLINEAR" => Ok(InterpolationMethod::Exponential),
            "FLAT" | "STEP" => Ok(InterpolationMethod::Flat),
            _ => Err(MathError::unsupported_method(s)),
        }
    }
}

/// One-shot interpolation of `xi` over the pillars `(xs, ys)`.
///
/// ```rust
/// use cfhedge_math::interpolation::{interpolate, Extrapolation, InterpolationMethod};
///
/// let xs = [0.0, 1.0];
/// let ys = [1.0, 0.95];
/// let mid = interpolate(&xs, &ys, 0.5, InterpolationMethod::Exponential, Extrapolation::Flat)
///     .unwrap();
/// assert!((mid - 0.95f64.sqrt()).abs() < 1e-12);
/// ```
pub fn interpolate(
    xs: &[f64],
    ys: &[f64],
    xi: f64,
    method: InterpolationMethod,
    extrapolation: Extrapolation,
) -> MathResult<f64> {
    method
        .build(xs.to_vec(), ys.to_vec(), extrapolation)?
        .interpolate(xi)
}

/// Where a query point falls relative to the pillars.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Location {
    /// Exactly on pillar `i`.
    Pillar(usize),
    /// Strictly between pillars `i` and `i + 1`.
    Between(usize),
    /// Before the first pillar.
    Below,
    /// After the last pillar.
    Above,
}

/// Validated pillar set shared by the interpolators.
#[derive(Debug, Clone)]
pub(crate) struct Nodes {
    pub(crate) xs: Vec<f64>,
    pub(crate) ys: Vec<f64>,
}

impl Nodes {
    pub(crate) fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        if xs.len() < 2 {
            return Err(MathError::insufficient_data(2, xs.len()));
        }
        if xs.len() != ys.len() {
            return Err(MathError::invalid_input(format!(
                "xs and ys must have same length: {} vs {}",
                xs.len(),
                ys.len()
            )));
        }
        if let Some(i) = xs.iter().chain(ys.iter()).position(|v| !v.is_finite()) {
            return Err(MathError::invalid_input(format!("value #{i} is not finite")));
        }
        if let Some(i) = xs.windows(2).position(|w| w[1] <= w[0]) {
            return Err(MathError::invalid_input(format!(
                "x values must be strictly increasing: x[{}] = {} after {}",
                i + 1,
                xs[i + 1],
                xs[i]
            )));
        }
        Ok(Self { xs, ys })
    }

    pub(crate) fn last(&self) -> usize {
        self.xs.len() - 1
    }

    pub(crate) fn locate(&self, x: f64) -> MathResult<Location> {
        if x.is_nan() {
            return Err(MathError::invalid_input("query point is NaN"));
        }
        if x < self.xs[0] {
            return Ok(Location::Below);
        }
        if x > self.xs[self.last()] {
            return Ok(Location::Above);
        }
        let search = self
            .xs
            .binary_search_by(|probe| probe.partial_cmp(&x).unwrap_or(Ordering::Equal));
        Ok(match search {
            Ok(i) => Location::Pillar(i),
            Err(i) => Location::Between(i.saturating_sub(1)),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MathError;
    use approx::assert_relative_eq;

    #[test]
    fn test_method_names() {
        assert_eq!("linear".parse::<InterpolationMethod>().unwrap(), InterpolationMethod::Linear);
        assert_eq!(
            "EXPONENTIAL".parse::<InterpolationMethod>().unwrap(),
            InterpolationMethod::Exponential
        );
        assert_eq!("Flat".parse::<InterpolationMethod>().unwrap(), InterpolationMethod::Flat);
        assert!(matches!(
            "CUBIC".parse::<InterpolationMethod>(),
            Err(MathError::UnsupportedMethod { .. })
        ));
        assert!(matches!(
            "SMITH-WILSON".parse::<Extrapolation>(),
            Err(MathError::UnsupportedMethod { .. })
        ));
    }

    #[test]
    fn test_all_methods_hit_pillars_exactly() {
        let xs = [0.0, 0.25, 1.0, 2.0, 5.0];
        let ys = [1.0, 0.99, -0.5, 0.93, 0.8];
        for method in [
            InterpolationMethod::Linear,
            InterpolationMethod::Exponential,
            InterpolationMethod::Flat,
        ] {
            for (x, y) in xs.iter().zip(ys.iter()) {
                let v = interpolate(&xs, &ys, *x, method, Extrapolation::Flat).unwrap();
                assert_eq!(v, *y, "{method} at {x}");
            }
        }
    }

    #[test]
    fn test_flat_extrapolation_above() {
        let xs = [0.0, 1.0, 2.0];
        let ys = [1.0, 2.0, 4.0];
        for method in [InterpolationMethod::Linear, InterpolationMethod::Exponential] {
            let v = interpolate(&xs, &ys, 3.0, method, Extrapolation::Flat).unwrap();
            assert_eq!(v, 4.0);
        }
        let natural = interpolate(&xs, &ys, 3.0, InterpolationMethod::Linear, Extrapolation::Natural)
            .unwrap();
        assert_relative_eq!(natural, 6.0);
        let natural = interpolate(
            &xs,
            &ys,
            3.0,
            InterpolationMethod::Exponential,
            Extrapolation::Natural,
        )
        .unwrap();
        assert_relative_eq!(natural, 8.0, epsilon = 1e-12);
    }

    #[test]
    fn test_below_range_uses_first_point() {
        let xs = [1.0, 2.0];
        let ys = [0.5, 0.7];
        for method in [
            InterpolationMethod::Linear,
            InterpolationMethod::Exponential,
            InterpolationMethod::Flat,
        ] {
            let v = interpolate(&xs, &ys, 0.0, method, Extrapolation::Natural).unwrap();
            assert_eq!(v, 0.5);
        }
    }

    #[test]
    fn test_rejects_bad_nodes() {
        assert!(matches!(
            Nodes::new(vec![0.0], vec![1.0]),
            Err(MathError::InsufficientData { .. })
        ));
        assert!(Nodes::new(vec![0.0, 1.0], vec![1.0]).is_err());
        assert!(Nodes::new(vec![0.0, 0.0], vec![1.0, 1.0]).is_err());
        assert!(Nodes::new(vec![0.0, f64::NAN], vec![1.0, 1.0]).is_err());
    }
}
