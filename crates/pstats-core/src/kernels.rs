//! Interpolation and moment kernels
//!
//! Stateless numeric primitives over a column. The parameterized families
//! here back the templated registry entries (`qN`, `momN`, `devN`, `ndevN`,
//! `absmN`); none of them sorts or mutates its input.
//!
//! Degenerate columns never panic: an empty column gives NaN, and a zero
//! standard deviation propagates as a non-finite result.

use crate::descriptive::{mean, std_dev};

/// Linearly interpolate `column` at a fractional rank.
///
/// Positions at or below zero clamp to the first element, positions at or
/// beyond `len - 1` clamp to the last. The column is assumed to already be
/// in the order the caller wants ranks taken from.
///
/// # Examples
///
/// ```rust
/// use pstats_core::kernels::interpolate;
///
/// let data = [1.0, 2.0, 3.0, 4.0];
/// assert_eq!(interpolate(1.5, &data), 2.5);
/// assert_eq!(interpolate(-3.0, &data), 1.0);
/// assert_eq!(interpolate(10.0, &data), 4.0);
/// ```
pub fn interpolate(position: f64, column: &[f64]) -> f64 {
    let Some((&first, rest)) = column.split_first() else {
        return f64::NAN;
    };
    let Some(&last) = rest.last() else {
        return first;
    };

    if position >= (column.len() - 1) as f64 {
        return last;
    }
    if position <= 0.0 {
        return first;
    }
    if position.is_nan() {
        return f64::NAN;
    }

    let i = position.floor() as usize;
    column[i] + (column[i + 1] - column[i]) * (position - i as f64)
}

/// Percentile `n` (nominally 0..=100, unchecked) of `column`.
///
/// Uses the unit-offset rank `(len + 1) * n / 100 - 1`, so the median of an
/// even-length column falls halfway between the two middle elements.
pub fn quantile(n: f64, column: &[f64]) -> f64 {
    let position = (column.len() + 1) as f64 * (n / 100.0) - 1.0;
    interpolate(position, column)
}

/// Average of `f(x)` over the column
fn mean_of<F>(column: &[f64], f: F) -> f64
where
    F: Fn(f64) -> f64,
{
    column.iter().map(|&x| f(x)).sum::<f64>() / column.len() as f64
}

/// Raw moment of order `p`: `sum(x^p) / n`
pub fn moment(p: f64, column: &[f64]) -> f64 {
    mean_of(column, |x| x.powf(p))
}

/// Central moment of order `p`: `sum((x - mean)^p) / n`
pub fn deviation(p: f64, column: &[f64]) -> f64 {
    let m = mean(column);
    mean_of(column, |x| (x - m).powf(p))
}

/// Standardized moment of order `p` using the sample standard deviation
pub fn normalized_deviation(p: f64, column: &[f64]) -> f64 {
    let m = mean(column);
    let s = std_dev(column);
    mean_of(column, |x| ((x - m) / s).powf(p))
}

/// Absolute central moment of order `p`: `sum(|x - mean|^p) / n`
pub fn absolute_moment(p: f64, column: &[f64]) -> f64 {
    let m = mean(column);
    mean_of(column, |x| (x - m).abs().powf(p))
}
