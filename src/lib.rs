//! Column summary statistics for whitespace-delimited numeric tables
//!
//! `pstats` reads a table of numbers, then prints one line per column with
//! the requested statistics. Statistic names are resolved against
//! [`pstats_registry::Registry`] before any input is read, so a typo fails
//! the run without producing partial output.
//!
//! # Example
//!
//! ```rust
//! use pstats::{run, RunConfig};
//! use std::io::Cursor;
//!
//! let config = RunConfig::with_statistics(["min", "max", "mean"]);
//! let mut out = Vec::new();
//! run(&config, Cursor::new("3\n1\n4\n1\n5\n9\n2\n6\n"), &mut out).unwrap();
//!
//! assert_eq!(
//!     String::from_utf8(out).unwrap(),
//!     "       min        max       mean \n         1          9      3.875 \n"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod findgen;
pub mod report;
pub mod table;

pub use config::{RunConfig, Verbosity};
pub use pstats_core::{Error, Result};
pub use table::{read_table, Table};

use pstats_core::descriptive::Summary;
use pstats_core::utils::sorted;
use pstats_registry::Registry;
use std::io::{BufRead, Write};
use tracing::{debug, info};

/// Execute one run: resolve, read, compute and print.
///
/// Statistic names are validated before `input` is read; any error leaves
/// `output` untouched.
pub fn run<R, W>(config: &RunConfig, input: R, mut output: W) -> Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut registry = Registry::new();

    if config.list {
        report::write_listing(&mut output, registry.keys())?;
        return Ok(());
    }

    let plan = registry.plan(&config.statistics[..])?;
    info!(statistics = ?plan.names().collect::<Vec<_>>(), "all statistics loaded");

    let table = read_table(input)?;
    if config.verbosity == Verbosity::Verbose {
        for (index, column) in table.columns().iter().enumerate() {
            debug!(column = index, "{}", Summary::of(&sorted(column)));
        }
    }

    let rows = plan.evaluate(table.columns(), config.sort);

    if config.header {
        report::write_header(&mut output, plan.names())?;
    }
    report::write_rows(&mut output, &rows)?;
    output.flush()?;
    Ok(())
}
