//! Error types for column summary statistics
//!
//! Provides a unified error type for all pstats crates.

use thiserror::Error;

/// Core error type for statistic resolution and table loading
#[derive(Error, Debug)]
pub enum Error {
    /// Requested name is neither a built-in nor a bindable template instance
    #[error("statistic {name} not available")]
    UnknownStatistic { name: String },

    /// Requested name is a bare template key with no numeric parameter
    #[error("statistic {name} requires substituting N for a numeric value")]
    UnboundTemplate { name: String },

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// IO error (reading the table or writing the report)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

// Helper functions for common error patterns

impl Error {
    /// Create an error for a name that cannot be resolved
    pub fn unknown(name: impl Into<String>) -> Self {
        Self::UnknownStatistic { name: name.into() }
    }

    /// Create an error for a template requested without its parameter
    pub fn unbound(name: impl Into<String>) -> Self {
        Self::UnboundTemplate { name: name.into() }
    }

    /// Create an error for a table token that is not a number
    pub fn bad_token(line: usize, field: usize, token: &str) -> Self {
        Self::InvalidInput(format!(
            "line {line}, field {field}: cannot parse {token:?} as a number"
        ))
    }

    /// Create an error for a row whose width differs from the first row
    pub fn ragged_row(line: usize, expected: usize, actual: usize) -> Self {
        Self::InvalidInput(format!(
            "line {line}: expected {expected} fields, got {actual}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::unknown("foo9");
        assert_eq!(err.to_string(), "statistic foo9 not available");

        let err = Error::unbound("momN");
        assert_eq!(
            err.to_string(),
            "statistic momN requires substituting N for a numeric value"
        );

        let err = Error::bad_token(3, 2, "abc");
        assert_eq!(
            err.to_string(),
            "Invalid input: line 3, field 2: cannot parse \"abc\" as a number"
        );

        let err = Error::ragged_row(4, 3, 2);
        assert_eq!(err.to_string(), "Invalid input: line 4: expected 3 fields, got 2");
    }

    #[test]
    fn test_error_from_io_error() {
        use std::io;

        let io_err = io::Error::new(io::ErrorKind::BrokenPipe, "pipe closed");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => assert!(err.to_string().contains("pipe closed")),
            _ => panic!("Wrong error type"),
        }
    }

    #[test]
    fn test_error_debug_impl() {
        let err = Error::unknown("q");
        let debug_str = format!("{:?}", err);
        assert!(debug_str.contains("UnknownStatistic"));
        assert!(debug_str.contains("q"));
    }
}
