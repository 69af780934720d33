//! Utility functions for working with columns

use std::cmp::Ordering;

/// Sort a column ascending and return a new vector
///
/// NaN values are placed at the end, mirroring how missing values trail a
/// sorted column.
///
/// # Examples
///
/// ```rust
/// use pstats_core::utils::sorted;
///
/// let data = vec![3.0, 1.0, 5.0, 2.0, 4.0];
/// assert_eq!(sorted(&data), vec![1.0, 2.0, 3.0, 4.0, 5.0]);
/// ```
pub fn sorted(column: &[f64]) -> Vec<f64> {
    let mut sorted = column.to_vec();
    sorted.sort_by(|a, b| match (a.is_nan(), b.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => a.total_cmp(b),
    });
    sorted
}
