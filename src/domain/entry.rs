//! Diary entry model

use crate::domain::EntryKey;
use crate::error::{DiaroError, Result};
use chrono::NaiveDateTime;
use std::fmt;

/// Storage backend an entry was read from or matched in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Backend {
    File,
    Relational,
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::File => write!(f, "file"),
            Backend::Relational => write!(f, "database"),
        }
    }
}

/// One dated block of text.
///
/// Timestamps are only tracked by the relational backend, so entries read
/// from files carry `None` for both.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: EntryKey,
    pub content: String,
    pub source: Backend,
    pub created_at: Option<NaiveDateTime>,
    pub updated_at: Option<NaiveDateTime>,
}

impl Entry {
    pub fn from_file(key: EntryKey, content: String) -> Self {
        Entry {
            key,
            content,
            source: Backend::File,
            created_at: None,
            updated_at: None,
        }
    }
}

/// Trim trailing whitespace and reject content that ends up empty.
pub fn normalize_content(content: &str) -> Result<&str> {
    let trimmed = content.trim_end();
    if trimmed.is_empty() {
        return Err(DiaroError::Validation("entry content is empty".to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_trims_trailing_whitespace() {
        assert_eq!(
            normalize_content("Had a good day\n\n  ").unwrap(),
            "Had a good day"
        );
    }

    #[test]
    fn test_normalize_keeps_leading_whitespace_and_inner_lines() {
        assert_eq!(
            normalize_content("  indented\nsecond line\n").unwrap(),
            "  indented\nsecond line"
        );
    }

    #[test]
    fn test_normalize_rejects_blank_content() {
        assert!(matches!(
            normalize_content(" \n\t\n"),
            Err(DiaroError::Validation(_))
        ));
        assert!(normalize_content("").is_err());
    }

    #[test]
    fn test_backend_display() {
        assert_eq!(Backend::File.to_string(), "file");
        assert_eq!(Backend::Relational.to_string(), "database");
    }
}
