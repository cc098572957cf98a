//! Step interpolation.

use super::{Interpolator, Location, Nodes};
use crate::error::MathResult;

/// Step interpolation: each pillar value is held until the next pillar.
///
/// Above the last pillar the last value is held, which is the same under
/// either extrapolation policy.
#[derive(Debug, Clone)]
pub struct FlatInterpolator {
    nodes: Nodes,
}

impl FlatInterpolator {
    /// Creates a new step interpolator.
    pub fn new(xs: Vec<f64>, ys: Vec<f64>) -> MathResult<Self> {
        Ok(Self {
            nodes: Nodes::new(xs, ys)?,
        })
    }
}

impl Interpolator for FlatInterpolator {
    fn interpolate(&self, x: f64) -> MathResult<f64> {
        Ok(match self.nodes.locate(x)? {
            Location::Pillar(i) | Location::Between(i) => self.nodes.ys[i],
            Location::Below => self.nodes.ys[0],
            Location::Above => self.nodes.ys[self.nodes.last()],
        })
    }

    fn min_x(&self) -> f64 {
        self.nodes.xs[0]
    }

    fn max_x(&self) -> f64 {
        self.nodes.xs[self.nodes.last()]
    }
}
