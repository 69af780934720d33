//! Descriptive statistics over a column
//!
//! Location, scale and shape measures backing the simple registry entries.
//! Order-insensitive measures delegate to `statrs`; the quartile family goes
//! through [`quantile`](crate::kernels::quantile) and therefore sees the
//! column in whatever order the caller passes it.
//!
//! Empty and too-short columns yield NaN rather than an error.

use crate::kernels::{absolute_moment, deviation, moment, quantile};
use statrs::statistics::Statistics;
use std::fmt;

/// Number of elements, as a float
pub fn count(column: &[f64]) -> f64 {
    column.len() as f64
}

/// Smallest element (NaN if empty)
pub fn min(column: &[f64]) -> f64 {
    Statistics::min(column.iter())
}

/// Largest element (NaN if empty)
pub fn max(column: &[f64]) -> f64 {
    Statistics::max(column.iter())
}

/// Smallest absolute value (NaN if empty)
pub fn abs_min(column: &[f64]) -> f64 {
    column.iter().abs_min()
}

/// Sum of all elements (zero if empty)
pub fn sum(column: &[f64]) -> f64 {
    column.iter().sum()
}

/// Arithmetic mean (NaN if empty)
///
/// # Examples
///
/// ```rust
/// use pstats_core::descriptive::mean;
///
/// assert_eq!(mean(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]), 3.875);
/// assert!(mean(&[]).is_nan());
/// ```
pub fn mean(column: &[f64]) -> f64 {
    column.iter().mean()
}

/// `max - min`
pub fn range(column: &[f64]) -> f64 {
    max(column) - min(column)
}

/// Sample standard deviation (n - 1 denominator, NaN below two elements)
pub fn std_dev(column: &[f64]) -> f64 {
    column.iter().std_dev()
}

/// Standard error of the mean: `stdev / sqrt(n)`
pub fn std_err(column: &[f64]) -> f64 {
    std_dev(column) / count(column).sqrt()
}

/// Sample variance, computed as the square of [`std_dev`]
pub fn sample_variance(column: &[f64]) -> f64 {
    std_dev(column).powi(2)
}

/// Adjusted Fisher-Pearson skewness (G1)
///
/// NaN for fewer than three elements or zero spread.
pub fn skewness(column: &[f64]) -> f64 {
    let n = count(column);
    if column.len() < 3 {
        return f64::NAN;
    }
    let m2 = deviation(2.0, column);
    let m3 = deviation(3.0, column);
    (n * (n - 1.0)).sqrt() / (n - 2.0) * m3 / m2.powf(1.5)
}

/// Adjusted excess kurtosis (G2)
///
/// NaN for fewer than four elements or zero spread.
pub fn kurtosis(column: &[f64]) -> f64 {
    let n = count(column);
    if column.len() < 4 {
        return f64::NAN;
    }
    let m2 = deviation(2.0, column);
    let m4 = deviation(4.0, column);
    let g2 = m4 / (m2 * m2);
    (n - 1.0) / ((n - 2.0) * (n - 3.0)) * ((n + 1.0) * g2 - 3.0 * (n - 1.0))
}

/// Root mean square, via the second raw moment
pub fn rms(column: &[f64]) -> f64 {
    moment(2.0, column).sqrt()
}

/// 50th percentile
pub fn median(column: &[f64]) -> f64 {
    quantile(50.0, column)
}

/// 25th percentile
pub fn lower_quartile(column: &[f64]) -> f64 {
    quantile(25.0, column)
}

/// 75th percentile
pub fn upper_quartile(column: &[f64]) -> f64 {
    quantile(75.0, column)
}

/// Mean absolute deviation from the mean
pub fn mean_absolute_deviation(column: &[f64]) -> f64 {
    absolute_moment(1.0, column)
}

/// One-line description of a column, used for diagnostics
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub mean: f64,
    pub std_dev: f64,
    pub min: f64,
    pub lower_quartile: f64,
    pub median: f64,
    pub upper_quartile: f64,
    pub max: f64,
}

impl Summary {
    /// Describe `column`; quartiles are taken in the order given
    pub fn of(column: &[f64]) -> Self {
        Self {
            count: column.len(),
            mean: mean(column),
            std_dev: std_dev(column),
            min: min(column),
            lower_quartile: lower_quartile(column),
            median: median(column),
            upper_quartile: upper_quartile(column),
            max: max(column),
        }
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "count={} mean={} std={} min={} 25%={} 50%={} 75%={} max={}",
            self.count,
            self.mean,
            self.std_dev,
            self.min,
            self.lower_quartile,
            self.median,
            self.upper_quartile,
            self.max
        )
    }
}
