//! Expense date validation
//!
//! Dates are entered as `YYYY-MM-DD`. Only that exact shape is accepted:
//! chrono on its own would also take single-digit months and days, or years
//! with a sign, which the data file never contains.

use chrono::NaiveDate;
use std::fmt;

/// The only accepted date format
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parse a date string in strict `YYYY-MM-DD` form
pub fn parse_date(s: &str) -> Result<NaiveDate, DateParseError> {
    if !has_date_shape(s) {
        return Err(DateParseError::BadShape(s.to_string()));
    }

    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| DateParseError::NotACalendarDate(s.to_string()))
}

/// Check whether a string is a valid `YYYY-MM-DD` calendar date
pub fn validate_date(s: &str) -> bool {
    parse_date(s).is_ok()
}

fn has_date_shape(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        })
}

/// Why a date string was rejected
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DateParseError {
    /// Not of the form `YYYY-MM-DD`
    BadShape(String),
    /// Right shape, but no such day (e.g. 2023-02-29)
    NotACalendarDate(String),
}

impl fmt::Display for DateParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::BadShape(s) => write!(f, "'{}' is not in YYYY-MM-DD format", s),
            Self::NotACalendarDate(s) => write!(f, "'{}' is not a real calendar date", s),
        }
    }
}

impl std::error::Error for DateParseError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_dates() {
        assert!(validate_date("2024-01-15"));
        assert!(validate_date("2024-02-29"));
        assert!(validate_date("1999-12-31"));
        assert!(validate_date("0001-01-01"));
    }

    #[test]
    fn test_calendar_validity() {
        assert!(!validate_date("2024-02-30"));
        assert!(!validate_date("2023-02-29"));
        assert!(!validate_date("2024-04-31"));
        assert!(!validate_date("2024-13-01"));
        assert!(!validate_date("2024-00-10"));
        assert!(!validate_date("2024-01-00"));
        assert!(!validate_date("2024-01-32"));
    }

    #[test]
    fn test_shape_is_strict() {
        assert!(!validate_date(""));
        assert!(!validate_date("2024-1-5"));
        assert!(!validate_date("24-01-15"));
        assert!(!validate_date("2024/01/15"));
        assert!(!validate_date(" 2024-01-15"));
        assert!(!validate_date("2024-01-15 "));
        assert!(!validate_date("+024-01-15"));
        assert!(!validate_date("2024-01-1a"));
    }

    #[test]
    fn test_parse_date_value_and_errors() {
        let date = parse_date("2024-02-29").unwrap();
        assert_eq!(date, NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());

        assert_eq!(
            parse_date("2024-1-5"),
            Err(DateParseError::BadShape("2024-1-5".into()))
        );
        assert_eq!(
            parse_date("2023-02-29"),
            Err(DateParseError::NotACalendarDate("2023-02-29".into()))
        );
    }
}
