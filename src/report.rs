//! Fixed-width text output

use pstats_core::Result;
use std::io::Write;

/// Width of every header and value field
pub const FIELD_WIDTH: usize = 10;

/// Significant digits printed for each value
pub const SIGNIFICANT_DIGITS: usize = 4;

/// Statistic names printed per line by the listing mode
pub const LIST_WRAP: usize = 10;

/// Format `value` like C's `%.{precision}g`.
///
/// Fixed notation is used while the decimal exponent lies in
/// `-4..precision`, scientific notation otherwise; trailing zeros are
/// removed in both.
///
/// # Examples
///
/// ```rust
/// use pstats::report::format_general;
///
/// assert_eq!(format_general(3.875, 4), "3.875");
/// assert_eq!(format_general(2.738612787, 4), "2.739");
/// assert_eq!(format_general(123456.0, 4), "1.235e+05");
/// assert_eq!(format_general(0.00001, 4), "1e-05");
/// assert_eq!(format_general(9.0, 4), "9");
/// ```
pub fn format_general(value: f64, precision: usize) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "inf" } else { "-inf" }.to_string();
    }
    if value == 0.0 {
        return if value.is_sign_negative() { "-0" } else { "0" }.to_string();
    }

    let precision = precision.max(1);
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = scientific
        .split_once('e')
        .unwrap_or((scientific.as_str(), "0"));
    let exponent: i32 = exponent.parse().unwrap_or(0);

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!(
            "{}e{}{:02}",
            trim_fraction(mantissa),
            sign,
            exponent.unsigned_abs()
        )
    } else {
        let decimals = (precision as i32 - 1 - exponent) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

/// Drop trailing zeros after a decimal point, then the point itself
fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Write the header line: each name right-aligned in its field
pub fn write_header<'a, W, I>(out: &mut W, names: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    for name in names {
        write!(out, "{:>width$} ", name, width = FIELD_WIDTH)?;
    }
    writeln!(out)?;
    Ok(())
}

/// Write one line per column of computed values
pub fn write_rows<W: Write>(out: &mut W, rows: &[Vec<f64>]) -> Result<()> {
    for row in rows {
        for &value in row {
            let text = format_general(value, SIGNIFICANT_DIGITS);
            write!(out, "{:>width$} ", text, width = FIELD_WIDTH)?;
        }
        writeln!(out)?;
    }
    Ok(())
}

/// Write statistic names space-separated, wrapping every [`LIST_WRAP`] names
pub fn write_listing<'a, W, I>(out: &mut W, names: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = &'a str>,
{
    for (i, name) in names.into_iter().enumerate() {
        write!(out, "{name} ")?;
        if (i + 1) % LIST_WRAP == 0 {
            writeln!(out)?;
        }
    }
    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_general(1.0, 4), "1");
        assert_eq!(format_general(3.875, 4), "3.875");
        assert_eq!(format_general(-12.5, 4), "-12.5");
        assert_eq!(format_general(1234.0, 4), "1234");
        assert_eq!(format_general(0.0001234, 4), "0.0001234");
        assert_eq!(format_general(0.5, 4), "0.5");
    }

    #[test]
    fn test_format_rounding_moves_exponent() {
        assert_eq!(format_general(9999.6, 4), "1e+04");
        assert_eq!(format_general(0.99996, 4), "1");
    }

    #[test]
    fn test_format_scientific() {
        assert_eq!(format_general(12345.0, 4), "1.234e+04");
        assert_eq!(format_general(0.00001234, 4), "1.234e-05");
        assert_eq!(format_general(-6.02e23, 4), "-6.02e+23");
        assert_eq!(format_general(1e100, 4), "1e+100");
    }

    #[test]
    fn test_format_non_finite() {
        assert_eq!(format_general(f64::NAN, 4), "nan");
        assert_eq!(format_general(f64::INFINITY, 4), "inf");
        assert_eq!(format_general(f64::NEG_INFINITY, 4), "-inf");
        assert_eq!(format_general(0.0, 4), "0");
    }

    #[test]
    fn test_write_header() {
        let mut out = Vec::new();
        write_header(&mut out, ["min", "q75"]).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "       min        q75 \n");
    }

    #[test]
    fn test_write_rows() {
        let mut out = Vec::new();
        write_rows(&mut out, &[vec![1.0, 3.875], vec![f64::NAN, 1e6]]).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "         1      3.875 \n       nan      1e+06 \n"
        );
    }

    #[test]
    fn test_write_listing_wraps() {
        let names: Vec<String> = (0..12).map(|i| format!("s{i}")).collect();
        let mut out = Vec::new();
        write_listing(&mut out, names.iter().map(String::as_str)).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "s0 s1 s2 s3 s4 s5 s6 s7 s8 s9 \ns10 s11 \n"
        );
    }
}
