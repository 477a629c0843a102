//! Traits describing the distribution function surface.

use crate::error::StatsResult;

/// Common scalar properties of a probability distribution.
pub trait Distribution {
    /// Mean of the distribution.
    fn mean(&self) -> f64;

    /// Variance of the distribution.
    fn var(&self) -> f64;

    /// Standard deviation of the distribution.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }

    /// Median of the distribution.
    fn median(&self) -> f64;

    /// Mode of the distribution.
    ///
    /// # Errors
    ///
    /// Returns an error when no mode is defined for the current
    /// parameters.
    fn mode(&self) -> StatsResult<f64>;
}

/// Functions of a continuous distribution.
///
/// Every function validates its argument against the distribution's
/// support and returns a domain error for values outside it; out-of-range
/// inputs are never clamped.
pub trait ContinuousDistribution {
    /// Probability density function.
    fn pdf(&self, x: f64) -> StatsResult<f64>;

    /// Natural log of the probability density function.
    fn log_pdf(&self, x: f64) -> StatsResult<f64>;

    /// Cumulative distribution function: P(X ≤ x).
    fn cdf(&self, x: f64) -> StatsResult<f64>;

    /// Survival function: P(X > x) = 1 - CDF(x).
    fn sf(&self, x: f64) -> StatsResult<f64>;

    /// Percent point function (quantile function), the inverse of the CDF.
    fn ppf(&self, p: f64) -> StatsResult<f64>;

    /// Inverse survival function: x such that SF(x) = p.
    fn isf(&self, p: f64) -> StatsResult<f64>;

    /// Hazard function: PDF(x) / SF(x).
    fn hazard(&self, x: f64) -> StatsResult<f64>;
}
