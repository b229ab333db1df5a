//! Persistence facade: one entry point over the file and relational backends
//!
//! Writes go to the file backend always and to the database when the session
//! has one. The two writes are independent; there is no rollback, and both
//! outcomes are reported. Listings and searches keep the backends apart so a
//! divergence between them stays visible.

use crate::domain::{normalize_content, Entry, EntryKey};
use crate::error::{DiaroError, Result};
use crate::infrastructure::{
    BackendAvailability, BackendMode, Config, EntryStore, FileStore, RelationalStore,
};
use std::path::Path;

/// Per-backend outcome of a write
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteResult {
    pub file_ok: bool,
    /// Always false when the session is file-only
    pub db_ok: bool,
}

impl WriteResult {
    /// True when at least one backend holds the new content
    pub fn stored_anywhere(&self) -> bool {
        self.file_ok || self.db_ok
    }
}

/// Per-backend outcome of a delete
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteResult {
    pub file_deleted: bool,
    pub db_deleted: bool,
}

impl DeleteResult {
    /// False means neither backend had the key
    pub fn removed_any(&self) -> bool {
        self.file_deleted || self.db_deleted
    }
}

/// Keys per backend, each most recent first. Keys present in both backends
/// appear in both lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Listing {
    pub db_keys: Vec<EntryKey>,
    pub file_keys: Vec<EntryKey>,
}

/// Matches per backend, each most recent first
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchResult {
    pub db_matches: Vec<EntryKey>,
    pub file_matches: Vec<EntryKey>,
}

impl SearchResult {
    pub fn is_empty(&self) -> bool {
        self.db_matches.is_empty() && self.file_matches.is_empty()
    }
}

/// A persistence session: open, serve operations, close.
pub struct PersistenceFacade<F = FileStore, R = RelationalStore> {
    file: F,
    relational: Option<R>,
    availability: BackendAvailability,
}

impl PersistenceFacade {
    /// Open the file backend and try the configured database once.
    pub fn open(root: &Path, config: &Config) -> Self {
        let file = FileStore::open(config.entries_path(root), config.write_header);
        let database = config.database_path(root);
        let (availability, relational) = BackendAvailability::establish(database.as_deref());

        PersistenceFacade {
            file,
            relational,
            availability,
        }
    }

    /// Whether the entry directory could be created at open
    pub fn file_backend_ready(&self) -> bool {
        self.file.ready()
    }

    /// End the session, closing the database connection if there is one
    pub fn close(self) -> Result<()> {
        match self.relational {
            Some(db) => db.close(),
            None => Ok(()),
        }
    }
}

impl<F: EntryStore, R: EntryStore> PersistenceFacade<F, R> {
    /// Build a session from already opened stores. `None` means file-only.
    pub fn from_stores(file: F, relational: Option<R>) -> Self {
        let availability = if relational.is_some() {
            BackendAvailability::available()
        } else {
            BackendAvailability::unavailable("no database configured")
        };
        PersistenceFacade {
            file,
            relational,
            availability,
        }
    }

    pub fn availability(&self) -> &BackendAvailability {
        &self.availability
    }

    pub fn mode(&self) -> BackendMode {
        self.availability.mode()
    }

    fn relational(&self) -> Option<&R> {
        if self.availability.is_relational() {
            self.relational.as_ref()
        } else {
            None
        }
    }

    /// Run one backend call, logging and swallowing its failure
    fn attempt<S: EntryStore, T>(
        store: &S,
        operation: &str,
        call: impl FnOnce(&S) -> Result<T>,
    ) -> Option<T> {
        match call(store) {
            Ok(value) => Some(value),
            Err(e) => {
                tracing::warn!(backend = %store.backend(), operation, error = %e, "backend call failed");
                None
            }
        }
    }

    /// Store `content` under `date` in every available backend.
    ///
    /// Fails only on validation; backend faults show up as `false` flags.
    pub fn write(&self, date: &str, content: &str) -> Result<WriteResult> {
        let key = EntryKey::parse(date)?;
        let content = normalize_content(content)?;

        let file_ok = Self::attempt(&self.file, "write", |s| s.write(&key, content)).is_some();
        let db_ok = self
            .relational()
            .and_then(|db| Self::attempt(db, "write", |s| s.write(&key, content)))
            .is_some();

        tracing::info!(%key, file_ok, db_ok, "entry written");
        Ok(WriteResult { file_ok, db_ok })
    }

    /// Look up an entry, preferring the database copy when there is one.
    pub fn entry(&self, date: &str) -> Result<Option<Entry>> {
        let key = EntryKey::parse(date)?;

        if let Some(entry) = self
            .relational()
            .and_then(|db| Self::attempt(db, "read", |s| s.read(&key)))
            .flatten()
        {
            return Ok(Some(entry));
        }

        Ok(Self::attempt(&self.file, "read", |s| s.read(&key)).flatten())
    }

    /// Content of the entry for `date`, if any backend has it
    pub fn read(&self, date: &str) -> Result<Option<String>> {
        Ok(self.entry(date)?.map(|entry| entry.content))
    }

    /// Whether any available backend holds `date`
    pub fn exists(&self, date: &str) -> Result<bool> {
        Ok(self.entry(date)?.is_some())
    }

    /// Remove `date` from every available backend
    pub fn delete(&self, date: &str) -> Result<DeleteResult> {
        let key = EntryKey::parse(date)?;

        let file_deleted = Self::attempt(&self.file, "delete", |s| s.delete(&key)).unwrap_or(false);
        let db_deleted = self
            .relational()
            .and_then(|db| Self::attempt(db, "delete", |s| s.delete(&key)))
            .unwrap_or(false);

        tracing::info!(%key, file_deleted, db_deleted, "entry deleted");
        Ok(DeleteResult {
            file_deleted,
            db_deleted,
        })
    }

    /// Keys held by each backend, without merging
    pub fn list(&self) -> Listing {
        Listing {
            db_keys: self
                .relational()
                .and_then(|db| Self::attempt(db, "list", |s| s.list_keys()))
                .unwrap_or_default(),
            file_keys: Self::attempt(&self.file, "list", |s| s.list_keys()).unwrap_or_default(),
        }
    }

    /// Keys whose content contains `term`, per backend, without merging.
    /// Case handling follows each backend. Terms are single-line: the file
    /// backend matches line by line.
    pub fn search(&self, term: &str) -> Result<SearchResult> {
        let term = term.trim();
        if term.is_empty() {
            return Err(DiaroError::Validation(
                "search term cannot be empty".to_string(),
            ));
        }
        if term.contains(['\n', '\r']) {
            return Err(DiaroError::Validation(
                "search term must fit on one line".to_string(),
            ));
        }

        Ok(SearchResult {
            db_matches: self
                .relational()
                .and_then(|db| Self::attempt(db, "search", |s| s.search(term)))
                .unwrap_or_default(),
            file_matches: Self::attempt(&self.file, "search", |s| s.search(term))
                .unwrap_or_default(),
        })
    }
}
