//! Property tests for the interpolation kernels

use approx::assert_relative_eq;
use pstats_core::descriptive::{rms, sample_variance, std_dev};
use pstats_core::utils::sorted;
use pstats_core::{interpolate, moment, quantile};
use proptest::prelude::*;

fn column() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(-1.0e6..1.0e6f64, 1..64)
}

proptest! {
    #[test]
    fn integer_positions_are_exact(data in column()) {
        for (i, &x) in data.iter().enumerate() {
            prop_assert_eq!(interpolate(i as f64, &data), x);
        }
    }

    #[test]
    fn negative_positions_clamp_to_first(data in column(), offset in 0.0..1.0e3f64) {
        prop_assert_eq!(interpolate(-offset, &data), data[0]);
    }

    #[test]
    fn positions_past_the_end_clamp_to_last(data in column(), offset in 0.0..1.0e3f64) {
        let last = data[data.len() - 1];
        let position = (data.len() - 1) as f64 + offset;
        prop_assert_eq!(interpolate(position, &data), last);
    }

    #[test]
    fn interpolation_stays_between_neighbours(data in column(), t in 0.0..1.0f64) {
        let data = sorted(&data);
        let position = t * (data.len() - 1) as f64;
        let value = interpolate(position, &data);
        prop_assert!(value >= data[0] - 1e-6);
        prop_assert!(value <= data[data.len() - 1] + 1e-6);
    }

    #[test]
    fn quantile_is_monotone_on_sorted_columns(data in column(), a in 0.0..100.0f64, b in 0.0..100.0f64) {
        let data = sorted(&data);
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(quantile(lo, &data) <= quantile(hi, &data) + 1e-6);
    }

    #[test]
    fn rms_agrees_with_second_moment(data in column()) {
        prop_assert_eq!(rms(&data), moment(2.0, &data).sqrt());
    }

    #[test]
    fn sample_variance_is_squared_stdev(data in prop::collection::vec(-1.0e3..1.0e3f64, 2..64)) {
        let s = std_dev(&data);
        prop_assert!((sample_variance(&data) - s * s).abs() <= 1e-9 * (1.0 + s * s));
    }
}

#[test]
fn median_of_even_column_uses_unit_offset() {
    let data = [1.0, 2.0, 3.0, 4.0];
    assert_relative_eq!(quantile(50.0, &data), 2.5);
}

#[test]
fn rms_of_small_column() {
    assert_relative_eq!(rms(&[1.0, 2.0, 3.0, 4.0]), 2.738_612_8, epsilon = 1e-7);
}
