//! Relative date words accepted on the command line

use chrono::{Duration, NaiveDate};

/// A date argument as typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimeReference {
    Today,
    Yesterday,
    Tomorrow,
    /// Anything else, passed through untouched for the facade to validate
    Literal(String),
}

impl TimeReference {
    pub fn parse(input: &str) -> Self {
        match input.trim().to_lowercase().as_str() {
            "today" | "now" => TimeReference::Today,
            "yesterday" => TimeReference::Yesterday,
            "tomorrow" => TimeReference::Tomorrow,
            _ => TimeReference::Literal(input.trim().to_string()),
        }
    }

    /// Resolve to the `YYYY-MM-DD` string handed to the persistence layer
    pub fn resolve(&self, base_date: NaiveDate) -> String {
        let date = match self {
            TimeReference::Today => base_date,
            TimeReference::Yesterday => base_date - Duration::days(1),
            TimeReference::Tomorrow => base_date + Duration::days(1),
            TimeReference::Literal(raw) => return raw.clone(),
        };
        date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
    }

    #[test]
    fn test_parse_relative_words() {
        assert_eq!(TimeReference::parse("today"), TimeReference::Today);
        assert_eq!(TimeReference::parse("NOW"), TimeReference::Today);
        assert_eq!(TimeReference::parse(" Yesterday "), TimeReference::Yesterday);
        assert_eq!(TimeReference::parse("tomorrow"), TimeReference::Tomorrow);
    }

    #[test]
    fn test_resolve_crosses_month_boundary() {
        assert_eq!(TimeReference::Today.resolve(base()), "2024-03-01");
        assert_eq!(TimeReference::Yesterday.resolve(base()), "2024-02-29");
        assert_eq!(TimeReference::Tomorrow.resolve(base()), "2024-03-02");
    }

    #[test]
    fn test_literal_passes_through() {
        let r = TimeReference::parse("2023-07-04");
        assert_eq!(r, TimeReference::Literal("2023-07-04".to_string()));
        assert_eq!(r.resolve(base()), "2023-07-04");
        assert_eq!(TimeReference::parse("garbage").resolve(base()), "garbage");
    }
}
