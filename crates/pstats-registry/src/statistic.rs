//! Statistic shapes and the built-in table

use pstats_core::{descriptive, kernels};

/// A statistic of one column
pub type SimpleFn = fn(&[f64]) -> f64;

/// A statistic family taking one numeric parameter and a column
pub type TemplatedFn = fn(f64, &[f64]) -> f64;

/// A registry entry: either directly invocable or waiting for a parameter
#[derive(Debug, Clone, Copy)]
pub enum Statistic {
    Simple(SimpleFn),
    Templated(TemplatedFn),
}

impl Statistic {
    pub fn is_templated(&self) -> bool {
        matches!(self, Statistic::Templated(_))
    }
}

/// Built-in statistics, in listing order.
///
/// Templated keys end in `N`; the numeric suffix of a request takes its
/// place when the entry is bound.
pub const BUILTINS: &[(&str, Statistic)] = &[
    ("min", Statistic::Simple(descriptive::min)),
    ("absmin", Statistic::Simple(descriptive::abs_min)),
    ("n", Statistic::Simple(descriptive::count)),
    ("max", Statistic::Simple(descriptive::max)),
    ("mean", Statistic::Simple(descriptive::mean)),
    ("sum", Statistic::Simple(descriptive::sum)),
    ("median", Statistic::Simple(descriptive::median)),
    ("range", Statistic::Simple(descriptive::range)),
    ("stdev", Statistic::Simple(descriptive::std_dev)),
    ("stderr", Statistic::Simple(descriptive::std_err)),
    ("skew", Statistic::Simple(descriptive::skewness)),
    ("kurt", Statistic::Simple(descriptive::kurtosis)),
    ("rms", Statistic::Simple(descriptive::rms)),
    ("svar", Statistic::Simple(descriptive::sample_variance)),
    ("plq", Statistic::Simple(descriptive::lower_quartile)),
    ("puq", Statistic::Simple(descriptive::upper_quartile)),
    ("absdev", Statistic::Simple(descriptive::mean_absolute_deviation)),
    ("qN", Statistic::Templated(kernels::quantile)),
    ("momN", Statistic::Templated(kernels::moment)),
    ("devN", Statistic::Templated(kernels::deviation)),
    ("ndevN", Statistic::Templated(kernels::normalized_deviation)),
    ("absmN", Statistic::Templated(kernels::absolute_moment)),
];

/// A statistic with every parameter fixed, ready to run on a column
#[derive(Debug, Clone, Copy)]
pub enum Bound {
    Simple(SimpleFn),
    Parameterized { func: TemplatedFn, parameter: f64 },
}

impl Bound {
    pub fn evaluate(&self, column: &[f64]) -> f64 {
        match *self {
            Bound::Simple(func) => func(column),
            Bound::Parameterized { func, parameter } => func(parameter, column),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_builtin_names_are_unique() {
        let names: HashSet<_> = BUILTINS.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), BUILTINS.len());
    }

    #[test]
    fn test_templated_keys_end_in_n() {
        for (name, stat) in BUILTINS {
            assert_eq!(stat.is_templated(), name.ends_with('N'), "{name}");
        }
    }

    #[test]
    fn test_bound_evaluate() {
        let column = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(Bound::Simple(descriptive::max).evaluate(&column), 4.0);

        let q = Bound::Parameterized {
            func: kernels::quantile,
            parameter: 50.0,
        };
        assert_eq!(q.evaluate(&column), 2.5);
    }
}
