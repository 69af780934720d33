//! Name to statistic mapping with on-demand parameter binding
//!
//! The registry is two-phase: an immutable table of built-ins and a cache
//! of requests already bound to a template. [`Registry::plan`] drives the
//! validation pass and flattens the result into a read-only [`Plan`].

use crate::plan::{Plan, PlannedStatistic};
use crate::request::{has_template_shape, StatisticRequest};
use crate::statistic::{Bound, Statistic, BUILTINS};
use pstats_core::{Error, Result};
use std::collections::HashMap;
use tracing::debug;

/// Registry of built-in statistics plus the requests bound so far
#[derive(Debug, Clone)]
pub struct Registry {
    builtins: HashMap<&'static str, Statistic>,
    resolved: HashMap<String, Bound>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create a registry holding only the built-in statistics
    pub fn new() -> Self {
        Self {
            builtins: BUILTINS.iter().copied().collect(),
            resolved: HashMap::new(),
        }
    }

    /// Built-in keys in listing order, templated keys included
    pub fn keys(&self) -> impl Iterator<Item = &'static str> + '_ {
        BUILTINS.iter().map(|(name, _)| *name)
    }

    /// Look up an entry without resolving anything
    pub fn get(&self, name: &str) -> Option<Statistic> {
        self.builtins.get(name).copied()
    }

    /// Number of requests bound to a template so far
    pub fn resolved_len(&self) -> usize {
        self.resolved.len()
    }

    /// Turn a requested name into a directly invocable statistic.
    ///
    /// Simple built-ins and previously bound names are returned as they are.
    /// Otherwise the name must be a template prefix followed by a numeric
    /// parameter, and the binding is cached under the requested name.
    pub fn resolve(&mut self, name: &str) -> Result<Bound> {
        match self.builtins.get(name) {
            Some(Statistic::Simple(func)) => return Ok(Bound::Simple(*func)),
            Some(Statistic::Templated(_)) => return Err(Error::unbound(name)),
            None => {}
        }
        if let Some(bound) = self.resolved.get(name) {
            return Ok(*bound);
        }

        let request = StatisticRequest::parse(name)?;
        let func = match self.builtins.get(request.base.as_str()) {
            Some(Statistic::Templated(func)) => *func,
            _ => return Err(Error::unknown(name)),
        };

        debug!(
            name,
            template = %request.base,
            parameter = request.parameter,
            "bound parameterized statistic"
        );
        let bound = Bound::Parameterized {
            func,
            parameter: request.parameter,
        };
        self.resolved.insert(name.to_string(), bound);
        Ok(bound)
    }

    /// Resolve every requested name, in order, before any data is touched.
    ///
    /// The first failure aborts the pass; nothing is evaluated on error.
    pub fn plan<S: AsRef<str>>(&mut self, names: &[S]) -> Result<Plan> {
        let mut entries = Vec::with_capacity(names.len());
        for name in names {
            let name = name.as_ref();
            let statistic = self.resolve(name)?;
            if has_template_shape(name) {
                return Err(Error::unbound(name));
            }
            entries.push(PlannedStatistic {
                name: name.to_string(),
                statistic,
            });
        }
        debug!(
            requested = entries.len(),
            bound = self.resolved.len(),
            "all statistics resolved"
        );
        Ok(Plan::new(entries))
    }
}
