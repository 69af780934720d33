//! Index generation for the `findgen` binary

use pstats_core::Result;
use std::io::Write;

/// Indices `offset .. offset + count`, descending when `reverse` is set.
///
/// A non-positive `count` yields nothing.
///
/// # Examples
///
/// ```rust
/// use pstats::findgen::indices;
///
/// assert_eq!(indices(3, 0, false).collect::<Vec<_>>(), vec![0, 1, 2]);
/// assert_eq!(indices(3, 10, true).collect::<Vec<_>>(), vec![12, 11, 10]);
/// ```
pub fn indices(count: i64, offset: i64, reverse: bool) -> Box<dyn Iterator<Item = i64>> {
    let range = offset..offset.saturating_add(count.max(0));
    if reverse {
        Box::new(range.rev())
    } else {
        Box::new(range)
    }
}

/// Write one index per line
pub fn write_indices<W: Write>(out: &mut W, count: i64, offset: i64, reverse: bool) -> Result<()> {
    for index in indices(count, offset, reverse) {
        writeln!(out, "{index}")?;
    }
    Ok(())
}
