//! Calendar date identifying a diary entry

use crate::error::{DiaroError, Result};
use chrono::NaiveDate;
use regex::Regex;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

const KEY_FORMAT: &str = "%Y-%m-%d";

fn key_shape() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap())
}

/// A validated `YYYY-MM-DD` date. Ordering follows the calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryKey(NaiveDate);

impl EntryKey {
    /// Parse a strict `YYYY-MM-DD` string.
    ///
    /// Chrono alone accepts unpadded fields (`2024-1-5`), which would give
    /// one date several spellings, so the shape is checked first.
    pub fn parse(input: &str) -> Result<Self> {
        if !key_shape().is_match(input) {
            return Err(DiaroError::Validation(format!(
                "invalid date '{}': expected YYYY-MM-DD",
                input
            )));
        }

        NaiveDate::parse_from_str(input, KEY_FORMAT)
            .map(EntryKey)
            .map_err(|_| {
                DiaroError::Validation(format!("invalid date '{}': no such calendar day", input))
            })
    }

    pub fn date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for EntryKey {
    fn from(date: NaiveDate) -> Self {
        EntryKey(date)
    }
}

impl FromStr for EntryKey {
    type Err = DiaroError;

    fn from_str(s: &str) -> Result<Self> {
        EntryKey::parse(s)
    }
}

impl fmt::Display for EntryKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(KEY_FORMAT))
    }
}

/// Sort keys most recent first.
pub fn sort_descending(keys: &mut [EntryKey]) {
    keys.sort_by(|a, b| b.cmp(a));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_date() {
        let key = EntryKey::parse("2024-01-15").unwrap();
        assert_eq!(key.date(), NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(key.to_string(), "2024-01-15");
    }

    #[test]
    fn test_parse_leap_day() {
        assert!(EntryKey::parse("2024-02-29").is_ok());
        assert!(EntryKey::parse("2023-02-29").is_err());
    }

    #[test]
    fn test_rejects_malformed_input() {
        for input in [
            "not-a-date",
            "",
            "2024-1-15",
            "2024-01-5",
            "24-01-15",
            "15-01-2024",
            "2024/01/15",
            " 2024-01-15",
            "2024-01-15\n",
            "+2024-01-15",
            "2024-13-01",
            "2024-00-10",
        ] {
            let err = EntryKey::parse(input).unwrap_err();
            assert!(
                matches!(err, DiaroError::Validation(_)),
                "expected validation error for {:?}",
                input
            );
        }
    }

    #[test]
    fn test_from_str() {
        let key: EntryKey = "2025-12-31".parse().unwrap();
        assert_eq!(key.to_string(), "2025-12-31");
    }

    #[test]
    fn test_sort_descending() {
        let mut keys = vec![
            EntryKey::parse("2024-01-10").unwrap(),
            EntryKey::parse("2024-03-01").unwrap(),
            EntryKey::parse("2023-12-31").unwrap(),
        ];
        sort_descending(&mut keys);
        let rendered: Vec<String> = keys.iter().map(|k| k.to_string()).collect();
        assert_eq!(rendered, vec!["2024-03-01", "2024-01-10", "2023-12-31"]);
    }
}
