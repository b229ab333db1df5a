//! Whether the relational backend is part of this session
//!
//! Decided once when the session opens and never re-probed. A failed
//! connection leaves the session in file-only mode until restart.

use crate::error::DiaroError;
use crate::infrastructure::relational_store::RelationalStore;
use std::fmt;
use std::path::Path;

/// Which backends serve the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    /// Files and database
    Dual,
    /// Files only
    FileOnly,
}

impl fmt::Display for BackendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BackendMode::Dual => write!(f, "file + database"),
            BackendMode::FileOnly => write!(f, "file only"),
        }
    }
}

/// Session-wide relational availability flag and the reason behind it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BackendAvailability {
    relational: bool,
    reason: Option<String>,
}

impl BackendAvailability {
    pub fn available() -> Self {
        BackendAvailability {
            relational: true,
            reason: None,
        }
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        BackendAvailability {
            relational: false,
            reason: Some(reason.into()),
        }
    }

    /// Connect to the configured database, if any, and record the outcome.
    pub fn establish(database: Option<&Path>) -> (Self, Option<RelationalStore>) {
        let Some(path) = database else {
            tracing::info!("no database configured, running file-only");
            return (Self::unavailable("no database configured"), None);
        };

        match RelationalStore::connect(path) {
            Ok(store) => {
                tracing::info!(database = %path.display(), "relational backend connected");
                (Self::available(), Some(store))
            }
            Err(e) => {
                let reason = match e {
                    DiaroError::BackendUnavailable(msg) => msg,
                    other => other.to_string(),
                };
                tracing::warn!(%reason, "relational backend unavailable, running file-only");
                (Self::unavailable(reason), None)
            }
        }
    }

    pub fn is_relational(&self) -> bool {
        self.relational
    }

    pub fn mode(&self) -> BackendMode {
        if self.relational {
            BackendMode::Dual
        } else {
            BackendMode::FileOnly
        }
    }

    /// Why the relational backend is not in use
    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }
}
