//! Discount factor curve.

use std::fmt;
use std::sync::Arc;

use cfhedge_core::daycounts::{DayCount, DayCountConvention};
use cfhedge_core::types::Date;
use cfhedge_math::interpolation::{Extrapolation, InterpolationMethod, Interpolator};

use crate::compounding::Compounding;
use crate::error::{CurveError, CurveResult};

/// An immutable discount factor curve.
///
/// Pillars are `(date, discount factor)` pairs. Queries map a date onto the
/// curve's time axis (the year fraction from the base date under the curve
/// day count) and interpolate there. Above the last pillar the interpolation
/// scheme continues its last segment; dates before the base date are
/// rejected.
///
/// The first pillar must be the base date with a discount factor of exactly 1.
///
/// # Example
///
/// ```rust
/// use cfhedge_curves::DiscountCurve;
/// use cfhedge_core::types::Date;
///
/// let d0 = Date::from_ymd(2024, 1, 1).unwrap();
/// let d1 = Date::from_ymd(2025, 1, 1).unwrap();
/// let curve = DiscountCurve::new(d0, vec![d0, d1], vec![1.0, 0.95]).unwrap();
///
/// let mid = Date::from_ymd(2024, 7, 2).unwrap(); // halfway on ACT/360
/// let df = curve.discount_factor(mid).unwrap();
/// assert!((df - (0.5f64 * 0.95f64.ln()).exp()).abs() < 1e-12);
/// ```
#[derive(Clone)]
pub struct DiscountCurve {
    base_date: Date,
    dates: Vec<Date>,
    discount_factors: Vec<f64>,
    day_count: DayCountConvention,
    method: InterpolationMethod,
    interpolator: Arc<dyn Interpolator>,
}

impl DiscountCurve {
    /// Creates a log-linear ACT/360 discount curve.
    pub fn new(base_date: Date, dates: Vec<Date>, discount_factors: Vec<f64>) -> CurveResult<Self> {
        Self::with_conventions(
            base_date,
            dates,
            discount_factors,
            DayCountConvention::Act360,
            InterpolationMethod::Exponential,
        )
    }

    /// Creates a discount curve with an explicit time-axis day count and
    /// interpolation scheme.
    ///
    /// # Errors
    ///
    /// - `InsufficientPoints` for fewer than two pillars or mismatched lengths
    /// - `NonMonotonicDates` if dates are not strictly increasing
    /// - `InvalidBaseline` if the first date is not `base_date` or its
    ///   discount factor is not 1
    /// - `InvalidValue` for non-positive or non-finite discount factors
    pub fn with_conventions(
        base_date: Date,
        dates: Vec<Date>,
        discount_factors: Vec<f64>,
        day_count: DayCountConvention,
        method: InterpolationMethod,
    ) -> CurveResult<Self> {
        if dates.len() != discount_factors.len() {
            return Err(CurveError::invalid_value(format!(
                "{} dates but {} discount factors",
                dates.len(),
                discount_factors.len()
            )));
        }
        if dates.len() < 2 {
            return Err(CurveError::InsufficientPoints {
                required: 2,
                got: dates.len(),
            });
        }
        if let Some(i) = dates.windows(2).position(|w| w[1] <= w[0]) {
            return Err(CurveError::NonMonotonicDates {
                index: i + 1,
                prev: dates[i],
                current: dates[i + 1],
            });
        }
        if dates[0] != base_date {
            return Err(CurveError::invalid_baseline(format!(
                "curve base date {base_date} is not equal to first date {}",
                dates[0]
            )));
        }
        if discount_factors[0] != 1.0 {
            return Err(CurveError::invalid_baseline(format!(
                "first discount factor must be 1, got {}",
                discount_factors[0]
            )));
        }
        if let Some((i, df)) = discount_factors
            .iter()
            .enumerate()
            .find(|(_, df)| !df.is_finite() || **df <= 0.0)
        {
            return Err(CurveError::invalid_value(format!(
                "discount factor at {} must be positive, got {df}",
                dates[i]
            )));
        }

        let times: Vec<f64> = dates
            .iter()
            .map(|d| day_count.year_fraction(base_date, *d))
            .collect();
        let interpolator: Arc<dyn Interpolator> = Arc::from(method.build(
            times,
            discount_factors.clone(),
            Extrapolation::Natural,
        )?);

        log::debug!(
            "built {method} discount curve at {base_date}: {} pillars to {}",
            dates.len(),
            dates[dates.len() - 1]
        );

        Ok(Self {
            base_date,
            dates,
            discount_factors,
            day_count,
            method,
            interpolator,
        })
    }

    /// Builds a curve from `(date, zero rate)` pillars.
    ///
    /// Each rate is converted with `compounding` over the year fraction from
    /// the base date, so the base-date pillar always maps to 1.
    pub fn from_zero_rates(
        base_date: Date,
        dates: Vec<Date>,
        rates: &[f64],
        compounding: Compounding,
        day_count: DayCountConvention,
    ) -> CurveResult<Self> {
        if dates.len() != rates.len() {
            return Err(CurveError::invalid_value(format!(
                "{} dates but {} rates",
                dates.len(),
                rates.len()
            )));
        }
        let dfs = dates
            .iter()
            .zip(rates)
            .map(|(d, r)| compounding.discount_factor(*r, day_count.year_fraction(base_date, *d)))
            .collect();

        Self::with_conventions(
            base_date,
            dates,
            dfs,
            day_count,
            InterpolationMethod::Exponential,
        )
    }

    /// Returns the base (as-of) date.
    #[must_use]
    pub fn base_date(&self) -> Date {
        self.base_date
    }

    /// Returns the pillar dates.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Returns the pillar discount factors.
    #[must_use]
    pub fn discount_factors(&self) -> &[f64] {
        &self.discount_factors
    }

    /// Returns the last pillar date.
    #[must_use]
    pub fn max_date(&self) -> Date {
        self.dates[self.dates.len() - 1]
    }

    /// Returns the time-axis day count.
    #[must_use]
    pub fn day_count(&self) -> DayCountConvention {
        self.day_count
    }

    /// Returns the interpolation scheme.
    #[must_use]
    pub fn interpolation(&self) -> InterpolationMethod {
        self.method
    }

    /// Year fraction from the base date to `date` on the curve time axis.
    pub fn time_from_base(&self, date: Date) -> CurveResult<f64> {
        if date < self.base_date {
            return Err(CurveError::DateBeforeBase {
                date,
                base: self.base_date,
            });
        }
        Ok(self.day_count.year_fraction(self.base_date, date))
    }

    /// Discount factor at `date`. Exact at pillars, 1 at the base date.
    pub fn discount_factor(&self, date: Date) -> CurveResult<f64> {
        let t = self.time_from_base(date)?;
        Ok(self.interpolator.interpolate(t)?)
    }

    /// Forward rate between two dates implied by `df(start) / df(end)`.
    ///
    /// `day_count` measures the accrual between the dates and must match the
    /// convention the rate is applied with.
    pub fn forward_rate(
        &self,
        start: Date,
        end: Date,
        day_count: DayCountConvention,
        compounding: Compounding,
    ) -> CurveResult<f64> {
        if end <= start {
            return Err(CurveError::invalid_value(format!(
                "forward rate needs start < end, got {start} and {end}"
            )));
        }
        let compound = self.discount_factor(start)? / self.discount_factor(end)?;
        compounding.implied_rate(compound, day_count.year_fraction(start, end))
    }

    /// Zero rate from the base date to `date`.
    ///
    /// At the base date itself the one-day rate is returned.
    pub fn zero_rate(&self, date: Date, compounding: Compounding) -> CurveResult<f64> {
        let date = if date == self.base_date {
            date.add_days(1)
        } else {
            date
        };
        let t = self.time_from_base(date)?;
        compounding.implied_rate(1.0 / self.discount_factor(date)?, t)
    }
}

impl fmt::Debug for DiscountCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscountCurve")
            .field("base_date", &self.base_date)
            .field("pillars", &self.dates.len())
            .field("max_date", &self.max_date())
            .field("day_count", &self.day_count)
            .field("method", &self.method)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use cfhedge_core::types::Frequency;
    use cfhedge_core::ErrorKind;

    fn d(y: i32, m: u32, day: u32) -> Date {
        Date::from_ymd(y, m, day).unwrap()
    }

    fn sample_curve() -> DiscountCurve {
        DiscountCurve::new(
            d(2023, 3, 31),
            vec![d(2023, 3, 31), d(2023, 6, 27), d(2023, 9, 25), d(2024, 3, 23)],
            vec![1.0, 0.992546003302532, 0.98372606051833, 0.965793001938513],
        )
        .unwrap()
    }

    #[test]
    fn test_pillars_exact() {
        let curve = sample_curve();
        assert_eq!(curve.discount_factor(d(2023, 3, 31)).unwrap(), 1.0);
        assert_eq!(curve.discount_factor(d(2023, 9, 25)).unwrap(), 0.98372606051833);
    }

    #[test]
    fn test_between_pillars_is_log_linear() {
        let curve = sample_curve();
        let (t0, t1) = (88.0 / 360.0, 178.0 / 360.0);
        let t = 120.0 / 360.0; // 2023-07-29
        let expected = (0.992546003302532f64.ln()
            + (0.98372606051833f64.ln() - 0.992546003302532f64.ln()) * (t - t0) / (t1 - t0))
            .exp();
        assert_relative_eq!(
            curve.discount_factor(d(2023, 7, 29)).unwrap(),
            expected,
            epsilon = 1e-14
        );
    }

    #[test]
    fn test_baseline_validation() {
        let err = DiscountCurve::new(d(2023, 3, 30), vec![d(2023, 3, 31), d(2024, 3, 31)], vec![1.0, 0.97])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCurveBaseline);

        let err = DiscountCurve::new(d(2023, 3, 31), vec![d(2023, 3, 31), d(2024, 3, 31)], vec![0.999, 0.97])
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidCurveBaseline);
    }

    #[test]
    fn test_rejects_bad_pillars() {
        let base = d(2023, 3, 31);
        assert!(matches!(
            DiscountCurve::new(base, vec![base], vec![1.0]),
            Err(CurveError::InsufficientPoints { .. })
        ));
        assert!(matches!(
            DiscountCurve::new(base, vec![base, d(2024, 1, 1), d(2023, 12, 1)], vec![1.0, 0.98, 0.99]),
            Err(CurveError::NonMonotonicDates { index: 2, .. })
        ));
        assert!(DiscountCurve::new(base, vec![base, d(2024, 1, 1)], vec![1.0, -0.5]).is_err());
    }

    #[test]
    fn test_date_before_base_rejected() {
        let curve = sample_curve();
        let err = curve.discount_factor(d(2023, 3, 30)).unwrap_err();
        assert!(matches!(err, CurveError::DateBeforeBase { .. }));
    }

    #[test]
    fn test_forward_rate_simple() {
        let curve = sample_curve();
        let (s, e) = (d(2023, 6, 27), d(2023, 9, 25));
        let fwd = curve
            .forward_rate(s, e, DayCountConvention::Act360, Compounding::Simple)
            .unwrap();
        let expected = (0.992546003302532 / 0.98372606051833 - 1.0) / (90.0 / 360.0);
        assert_relative_eq!(fwd, expected, epsilon = 1e-14);

        // A quarter is within one period, so simple-then-compounded agrees
        let stc = curve
            .forward_rate(
                s,
                e,
                DayCountConvention::Act360,
                Compounding::SimpleThenCompounded(Frequency::Quarterly),
            )
            .unwrap();
        assert_relative_eq!(stc, fwd, epsilon = 1e-14);
    }

    #[test]
    fn test_extrapolates_last_forward() {
        let curve = sample_curve();
        let beyond = curve.discount_factor(d(2025, 3, 23)).unwrap();
        assert!(beyond < 0.965793001938513);
        assert!(beyond > 0.0);
    }

    #[test]
    fn test_zero_rate_round_trip() {
        let base = d(2024, 1, 1);
        let dates = vec![base, d(2025, 1, 1), d(2026, 1, 1)];
        let curve = DiscountCurve::from_zero_rates(
            base,
            dates.clone(),
            &[0.03, 0.03, 0.035],
            Compounding::Continuous,
            DayCountConvention::Act365Fixed,
        )
        .unwrap();
        assert_eq!(curve.discount_factor(base).unwrap(), 1.0);
        assert_relative_eq!(
            curve.zero_rate(dates[2], Compounding::Continuous).unwrap(),
            0.035,
            epsilon = 1e-12
        );
    }
}
