//! Error types for diaro

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for diaro
#[derive(Debug, Error)]
pub enum DiaroError {
    #[error("Not a diaro directory: {0}")]
    NotDiaroDirectory(PathBuf),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Entry not found: {0}")]
    NotFound(String),

    #[error("Entry for {0} was not stored in any backend")]
    WriteFailed(String),

    #[error("Relational backend unavailable: {0}")]
    BackendUnavailable(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Query error: {0}")]
    Query(#[from] rusqlite::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("TOML deserialization error: {0}")]
    TomlDeserialize(#[from] toml::de::Error),

    #[error("TOML serialization error: {0}")]
    TomlSerialize(#[from] toml::ser::Error),
}

impl DiaroError {
    /// Get the exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            DiaroError::NotDiaroDirectory(_) => 2,
            DiaroError::Validation(_) => 3,
            DiaroError::NotFound(_) => 4,
            DiaroError::WriteFailed(_) => 5,
            _ => 1,
        }
    }

    /// Get a user-friendly error message with suggestions
    pub fn display_with_suggestions(&self) -> String {
        match self {
            DiaroError::NotDiaroDirectory(path) => {
                format!(
                    "Not a diaro directory: {}\n\n\
                    Suggestions:\n\
                    • Run 'diaro init' in this directory to create a new diary\n\
                    • Navigate to an existing diaro directory\n\
                    • Set DIARO_ROOT environment variable to your diary path",
                    path.display()
                )
            }
            DiaroError::Validation(msg) if msg.contains("date") => {
                format!(
                    "Validation error: {}\n\n\
                    Dates must be written as YYYY-MM-DD (e.g., 2024-01-15).\n\
                    The words today, yesterday and tomorrow are also accepted.\n\n\
                    Examples:\n\
                    diaro write 2024-01-15 -m \"Had a good day\"\n\
                    diaro show yesterday",
                    msg
                )
            }
            DiaroError::NotFound(date) => {
                format!(
                    "No entry found for {}\n\n\
                    Suggestions:\n\
                    • Use 'diaro list' to see stored entries\n\
                    • Use 'diaro search <word>' to find an entry by content",
                    date
                )
            }
            DiaroError::BackendUnavailable(msg) => {
                format!(
                    "Relational backend unavailable: {}\n\n\
                    Entries are still stored as files.\n\
                    Check the [database] path in .diaro/config.toml or DIARO_DATABASE.",
                    msg
                )
            }
            _ => self.to_string(),
        }
    }
}

/// Result type using DiaroError
pub type Result<T> = std::result::Result<T, DiaroError>;
