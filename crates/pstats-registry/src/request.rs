//! Parsing of requested statistic names

use lazy_static::lazy_static;
use pstats_core::{Error, Result};
use regex::Regex;

lazy_static! {
    /// Shortest word prefix followed by a numeric suffix at the end of the name
    static ref PARAMETERIZED: Regex =
        Regex::new(r"(\w+?)(\d+(?:[.]\d*)?)$").expect("parameterized name pattern");

    /// Shape reserved for template keys
    static ref TEMPLATE_KEY: Regex = Regex::new(r"\w+N$").expect("template key pattern");
}

/// Suffix that turns a template prefix into its registry key
pub const TEMPLATE_SUFFIX: char = 'N';

/// A requested name split into template key and bound parameter
#[derive(Debug, Clone, PartialEq)]
pub struct StatisticRequest {
    /// Template key, e.g. `qN` for a request of `q75`
    pub base: String,
    pub parameter: f64,
}

impl StatisticRequest {
    /// Split `name` at its numeric suffix.
    ///
    /// Names without a numeric suffix, or whose suffix is not a valid `f64`,
    /// are unknown statistics.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use pstats_registry::StatisticRequest;
    ///
    /// let request = StatisticRequest::parse("dev3.5").unwrap();
    /// assert_eq!(request.base, "devN");
    /// assert_eq!(request.parameter, 3.5);
    /// ```
    pub fn parse(name: &str) -> Result<Self> {
        let captures = PARAMETERIZED
            .captures(name)
            .ok_or_else(|| Error::unknown(name))?;
        let (prefix, suffix) = (&captures[1], &captures[2]);
        let parameter = suffix.parse::<f64>().map_err(|_| Error::unknown(name))?;

        Ok(Self {
            base: format!("{}{}", prefix, TEMPLATE_SUFFIX),
            parameter,
        })
    }
}

/// Whether `name` has the shape of a template key (ends in `N`)
pub fn has_template_shape(name: &str) -> bool {
    TEMPLATE_KEY.is_match(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_suffix() {
        let request = StatisticRequest::parse("q75").unwrap();
        assert_eq!(request.base, "qN");
        assert_eq!(request.parameter, 75.0);
    }

    #[test]
    fn test_parse_decimal_suffix() {
        let request = StatisticRequest::parse("absm0.5").unwrap();
        assert_eq!(request.base, "absmN");
        assert_eq!(request.parameter, 0.5);

        let request = StatisticRequest::parse("mom2.").unwrap();
        assert_eq!(request.base, "momN");
        assert_eq!(request.parameter, 2.0);
    }

    #[test]
    fn test_parse_takes_longest_suffix() {
        let request = StatisticRequest::parse("mean12").unwrap();
        assert_eq!(request.base, "meanN");
        assert_eq!(request.parameter, 12.0);
    }

    #[test]
    fn test_parse_digits_inside_prefix() {
        let request = StatisticRequest::parse("a1b2").unwrap();
        assert_eq!(request.base, "a1bN");
        assert_eq!(request.parameter, 2.0);
    }

    #[test]
    fn test_parse_rejects_names_without_suffix() {
        assert!(matches!(
            StatisticRequest::parse("median"),
            Err(Error::UnknownStatistic { .. })
        ));
        assert!(StatisticRequest::parse("").is_err());
    }

    #[test]
    fn test_parse_all_digit_name() {
        // digits are word characters, so the prefix absorbs the first one
        let request = StatisticRequest::parse("75").unwrap();
        assert_eq!(request.base, "7N");
        assert_eq!(request.parameter, 5.0);
    }

    #[test]
    fn test_parse_rejects_dangling_decimal_parts() {
        assert!(StatisticRequest::parse("q1.2.3").is_err());
    }

    #[test]
    fn test_template_shape() {
        assert!(has_template_shape("momN"));
        assert!(has_template_shape("fooN"));
        assert!(!has_template_shape("N"));
        assert!(!has_template_shape("mom2"));
        assert!(!has_template_shape("mean"));
    }
}
