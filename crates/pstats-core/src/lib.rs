//! Numeric kernels for column summary statistics
//!
//! This crate is the leaf of the pstats workspace. It knows nothing about
//! statistic names or parameters; every function takes a column (`&[f64]`)
//! and returns a single `f64`.
//!
//! # Overview
//!
//! - [`kernels`]: the interpolated order statistic and the parameterized
//!   moment families (raw, central, standardized, absolute)
//! - [`descriptive`]: the fixed descriptive measures (mean, stdev, skew, ...)
//! - [`utils`]: NaN-aware sorting
//!
//! # Example
//!
//! ```rust
//! use pstats_core::{descriptive, kernels, utils::sorted};
//!
//! let column = sorted(&[3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0]);
//! let p75 = kernels::quantile(75.0, &column);
//! let rms = descriptive::rms(&column);
//! assert!(p75 > descriptive::median(&column));
//! assert!(rms > descriptive::mean(&column));
//! ```

pub mod descriptive;
pub mod error;
pub mod kernels;
pub mod utils;

pub use error::{Error, Result};
pub use kernels::{absolute_moment, deviation, interpolate, moment, normalized_deviation, quantile};
