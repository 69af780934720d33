//! Read-only evaluation plan produced by the validation pass

use crate::statistic::Bound;
use pstats_core::utils::sorted;
use std::borrow::Cow;
use tracing::debug;

/// One requested statistic with its parameter bound
#[derive(Debug, Clone)]
pub struct PlannedStatistic {
    pub name: String,
    pub statistic: Bound,
}

/// Statistics to compute for every column, in request order
#[derive(Debug, Clone, Default)]
pub struct Plan {
    entries: Vec<PlannedStatistic>,
}

impl Plan {
    pub(crate) fn new(entries: Vec<PlannedStatistic>) -> Self {
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Requested names, in request order
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|entry| entry.name.as_str())
    }

    /// Compute every planned statistic for one column.
    ///
    /// With `sort` set, all statistics see the same ascending copy of the
    /// column; otherwise they see the rows in their original order.
    pub fn evaluate_column(&self, column: &[f64], sort: bool) -> Vec<f64> {
        let column: Cow<'_, [f64]> = if sort {
            Cow::Owned(sorted(column))
        } else {
            Cow::Borrowed(column)
        };
        self.entries
            .iter()
            .map(|entry| entry.statistic.evaluate(&column))
            .collect()
    }

    /// Compute the plan for each column, one output row per column
    #[cfg(not(feature = "parallel"))]
    pub fn evaluate(&self, columns: &[Vec<f64>], sort: bool) -> Vec<Vec<f64>> {
        debug!(columns = columns.len(), statistics = self.len(), "evaluating plan");
        columns
            .iter()
            .map(|column| self.evaluate_column(column, sort))
            .collect()
    }

    /// Compute the plan for each column, one output row per column
    #[cfg(feature = "parallel")]
    pub fn evaluate(&self, columns: &[Vec<f64>], sort: bool) -> Vec<Vec<f64>> {
        use rayon::prelude::*;

        debug!(columns = columns.len(), statistics = self.len(), "evaluating plan in parallel");
        columns
            .par_iter()
            .map(|column| self.evaluate_column(column, sort))
            .collect()
    }
}
