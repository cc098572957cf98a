//! Log-linear ("exponential") interpolation.
//!
//! Interpolates `ln(y)` linearly and exponentiates. The logarithm and
//! exponential are taken over complex numbers, so a pair of negative values
//! interpolates to a negative value and a sign change still yields a finite
//! real part. Zero values have no logarithm and are rejected.

use num_complex::Complex64;

use super::{Extrapolation, Interpolator, Location, Nodes};
use crate::error::{MathError, MathResult};

/// Log-linear interpolation between data points.
///
/// ```text
/// y(x) = Re exp( ln y0 + (ln y1 - ln y0) / (x1 - x0) * (x - x0) )
/// ```
///
/// For positive discount factors this yields piecewise-constant
/// continuously-compounded forwards and stays within the bracketing values.
///
/// # Example
///
/// ```rust
/// use cfhedge_math::interpolation::{Interpolator, LogLinearInterpolator};
///
/// let interp = LogLinearInterpolator::new(vec![0.0, 1.0], vec![1.0, 0.95]).unwrap();
/// let df = interp.interpolate(0.5).unwrap();
/// assert!((df - 0.974679434480896).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct LogLinearInterpolator {
    nodes: Nodes,
    log_ys: Vec<Complex64>,
    extrapolation: Extrapolation,
}

impl LogLinearInterpolator {
    /// Creates a new log-linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, lengths differ,
    /// x values are not strictly increasing, or any y value is zero.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        let nodes = Nodes::new(xs, ys)?;

        if let Some(i) = nodes.ys.iter().position(|y| *y == 0.0) {
            return Err(MathError::invalid_input(format!(
                "y[{i}] is zero; log-linear interpolation requires non-zero values"
            )));
        }
        let log_ys = nodes.ys.iter().map(|y| Complex64::new(*y, 0.0).ln()).collect();

        Ok(Self {
            nodes,
            log_ys,
            extrapolation: Extrapolation::Flat,
        })
    }

    /// Sets the behaviour above the last pillar.
    #[must_use]
    pub fn with_extrapolation(mut self, extrapolation: Extrapolation) -> Self {
        self.extrapolation = extrapolation;
        self
    }

    fn segment(&self, i: usize, x: f64) -> f64 {
        let (x0, x1) = (self.nodes.xs[i], self.nodes.xs[i + 1]);
        let (l0, l1) = (self.log_ys[i], self.log_ys[i + 1]);
        let slope = (l1 - l0) / (x1 - x0);
        (slope * (x - x0) + l0).exp().re
    }
}

impl Interpolator for LogLinearInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        let last = self.nodes.last();
        Ok(match self.nodes.locate(x)? {
            Location::Pillar(i) => self.nodes.ys[i],
            Location::Between(i) => self.segment(i, x),
            Location::Below => self.nodes.ys[0],
            Location::Above => match self.extrapolation {
                Extrapolation::Flat => self.nodes.ys[last],
                Extrapolation::Natural => self.segment(last - 1, x),
            },
        })
    }

    fn min_x(&self) -> f64 {
        self.nodes.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.nodes.xs[self.nodes.last()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use proptest::prelude::*;

    #[test]
    fn test_discount_factor_midpoint() {
        let interp = LogLinearInterpolator::new(vec![0.0, 1.0], vec![1.0, 0.95]).unwrap();
        assert_relative_eq!(
            interp.interpolate(0.5).unwrap(),
            (0.5 * 0.95f64.ln()).exp(),
            epsilon = 1e-15
        );
    }

    #[test]
    fn test_negative_values_stay_negative() {
        let interp = LogLinearInterpolator::new(vec![0.0, 2.0], vec![-0.004, -0.001]).unwrap();
        let v = interp.interpolate(1.0).unwrap();
        assert_relative_eq!(v, -0.002, epsilon = 1e-15);
    }

    #[test]
    fn test_sign_change_is_finite() {
        let interp = LogLinearInterpolator::new(vec![0.0, 1.0], vec![-0.01, 0.01]).unwrap();
        let v = interp.interpolate(0.5).unwrap();
        assert!(v.is_finite());
        // |y| is constant along the segment and the phase sweeps from pi to 0
        assert_relative_eq!(v, 0.0, epsilon = 1e-15);
    }

    #[test]
    fn test_rejects_zero() {
        assert!(LogLinearInterpolator::new(vec![0.0, 1.0], vec![1.0, 0.0]).is_err());
    }

    proptest! {
        #[test]
        fn prop_positive_values_stay_bracketed(
            y0 in 0.01f64..2.0,
            y1 in 0.01f64..2.0,
            w in 0.0f64..1.0,
        ) {
            let interp = LogLinearInterpolator::new(vec![0.0, 1.0], vec![y0, y1]).unwrap();
            let v = interp.interpolate(w).unwrap();
            let tol = 1e-12 * y0.max(y1);
            prop_assert!(v >= y0.min(y1) - tol);
            prop_assert!(v <= y0.max(y1) + tol);
        }
    }
}
