//! Command line definitions for the `pstats` and `findgen` binaries

use crate::config::{RunConfig, Verbosity};
use clap::Parser;

/// Compute summary statistics for each column of whitespace-delimited
/// numbers read from standard input.
///
/// Parameterized statistics take their parameter from the end of the name:
/// `q75` is the 75th percentile, `mom3` the third raw moment.
#[derive(Debug, Parser)]
#[command(name = "pstats", version)]
pub struct Cli {
    /// Log resolution details and a description of each column
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long)]
    pub quiet: bool,

    /// Turn off the output header
    #[arg(long = "no-header", visible_alias = "nh")]
    pub no_header: bool,

    /// Don't sort input data
    #[arg(long = "no-sort")]
    pub no_sort: bool,

    /// List the names of all statistics
    #[arg(long = "stat-list", visible_alias = "stat_list")]
    pub stat_list: bool,

    /// Names of statistics to calculate
    #[arg(value_name = "STAT_NAMES")]
    pub stats: Vec<String>,
}

impl Cli {
    pub fn verbosity(&self) -> Verbosity {
        if self.verbose {
            Verbosity::Verbose
        } else if self.quiet {
            Verbosity::Quiet
        } else {
            Verbosity::Normal
        }
    }
}

impl From<Cli> for RunConfig {
    fn from(cli: Cli) -> Self {
        Self {
            verbosity: cli.verbosity(),
            sort: !cli.no_sort,
            header: !cli.no_header,
            list: cli.stat_list,
            statistics: cli.stats,
        }
    }
}

/// Generate indices from 0 to N-1.
#[derive(Debug, Parser)]
#[command(name = "findgen", version)]
pub struct FindgenCli {
    /// Number of indices to generate
    #[arg(value_name = "N", allow_negative_numbers = true)]
    pub count: i64,

    /// Specify non-zero offset
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub offset: i64,

    /// Generate the indices in descending order
    #[arg(short, long)]
    pub reverse: bool,
}
