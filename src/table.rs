//! Whitespace-delimited numeric tables

use pstats_core::{Error, Result};
use std::io::BufRead;
use tracing::info;

/// A table held column by column
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    columns: Vec<Vec<f64>>,
}

impl Table {
    pub fn columns(&self) -> &[Vec<f64>] {
        &self.columns
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn rows(&self) -> usize {
        self.columns.first().map_or(0, Vec::len)
    }
}

/// Read a table of numbers separated by runs of whitespace.
///
/// Blank lines are skipped. The first non-blank line fixes the number of
/// columns; every later line must have the same number of fields.
pub fn read_table<R: BufRead>(reader: R) -> Result<Table> {
    let mut columns: Vec<Vec<f64>> = Vec::new();

    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line_number = index + 1;
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.is_empty() {
            continue;
        }

        if columns.is_empty() {
            columns = vec![Vec::new(); fields.len()];
        } else if fields.len() != columns.len() {
            return Err(Error::ragged_row(line_number, columns.len(), fields.len()));
        }

        for (field, (token, column)) in fields.iter().zip(columns.iter_mut()).enumerate() {
            let value = token
                .parse::<f64>()
                .map_err(|_| Error::bad_token(line_number, field + 1, token))?;
            column.push(value);
        }
    }

    if columns.is_empty() {
        return Err(Error::InvalidInput(
            "no columns to parse from input".to_string(),
        ));
    }

    let table = Table { columns };
    info!(columns = table.width(), rows = table.rows(), "read table");
    Ok(table)
}
