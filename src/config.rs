//! Run configuration

use tracing::Level;

/// How much diagnostic output to produce on stderr
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    Quiet,
    #[default]
    Normal,
    Verbose,
}

impl Verbosity {
    /// Log level used when `RUST_LOG` is not set
    pub fn default_level(self) -> Level {
        match self {
            Self::Quiet => Level::ERROR,
            Self::Normal => Level::WARN,
            Self::Verbose => Level::DEBUG,
        }
    }
}

/// Everything a single `pstats` run needs besides its input and output
#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    /// Requested statistic names, in output order
    pub statistics: Vec<String>,
    /// Sort each column ascending before computing statistics
    pub sort: bool,
    /// Print a header line of statistic names
    pub header: bool,
    pub verbosity: Verbosity,
    /// List the registered statistic names instead of computing anything
    pub list: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            statistics: Vec::new(),
            sort: true,
            header: true,
            verbosity: Verbosity::Normal,
            list: false,
        }
    }
}

impl RunConfig {
    /// Default configuration computing the given statistics
    pub fn with_statistics<I, S>(statistics: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            statistics: statistics.into_iter().map(Into::into).collect(),
            ..Self::default()
        }
    }
}
