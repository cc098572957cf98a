//! Linear interpolation.

use super::{Extrapolation, Interpolator, Location, Nodes};
use crate::error::MathResult;

/// Piecewise-linear interpolation between data points.
///
/// # Example
///
/// ```rust
/// use cfhedge_math::interpolation::{Interpolator, LinearInterpolator};
///
/// let interp = LinearInterpolator::new(vec![0.0, 1.0, 2.0], vec![0.0, 1.0, 4.0]).unwrap();
/// assert_eq!(interp.interpolate(1.5).unwrap(), 2.5);
/// ```
#[derive(Debug, Clone)]
pub struct LinearInterpolator {
    nodes: Nodes,
    extrapolation: Extrapolation,
}

impl LinearInterpolator {
    /// Creates a new linear interpolator.
    ///
    /// # Errors
    ///
    /// Returns an error if there are fewer than 2 points, lengths differ,
    /// or x values are not strictly increasing.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        Ok(Self {
            nodes: Nodes::new(xs, ys)?,
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
        let (y0, y1) = (self.nodes.ys[i], self.nodes.ys[i + 1]);
        y0 + (y1 - y0) * (x - x0) / (x1 - x0)
    }
}

impl Interpolator for LinearInterpolator {
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
