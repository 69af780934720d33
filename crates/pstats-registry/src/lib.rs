//! Statistic registry and resolver
//!
//! Maps statistic names to computations over a column. A fixed set of
//! built-ins is always present; templated families (`qN`, `momN`, `devN`,
//! `ndevN`, `absmN`) are instantiated on demand from requests whose name
//! ends in a number, e.g. `q75` or `dev3.5`.
//!
//! # Example
//!
//! ```rust
//! use pstats_registry::Registry;
//!
//! let mut registry = Registry::new();
//! let plan = registry.plan(&["min", "q75", "mom2"]).unwrap();
//!
//! let rows = plan.evaluate(&[vec![4.0, 3.0, 2.0, 1.0]], true);
//! assert_eq!(rows[0][0], 1.0);
//! assert_eq!(rows[0][1], 3.75);
//! assert_eq!(rows[0][2], 7.5);
//! ```

pub mod plan;
pub mod registry;
pub mod request;
pub mod statistic;

pub use plan::{Plan, PlannedStatistic};
pub use registry::Registry;
pub use request::StatisticRequest;
pub use statistic::{Bound, SimpleFn, Statistic, TemplatedFn, BUILTINS};
