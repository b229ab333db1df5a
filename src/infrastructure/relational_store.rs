//! Relational backend on an embedded SQLite database
//!
//! # Schema
//!
//! ```sql
//! CREATE TABLE IF NOT EXISTS diary_entries (
//!     id INTEGER PRIMARY KEY AUTOINCREMENT,
//!     date TEXT NOT NULL UNIQUE,
//!     content TEXT NOT NULL,
//!     created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
//!     updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
//! );
//! ```
//!
//! Dates are stored as `YYYY-MM-DD`, so text order is calendar order.
//!
//! # Search and case
//!
//! Search uses SQLite `LIKE`, which folds case for ASCII letters only:
//! `GOOD` matches `good`, but `É` does not match `é`. The file backend folds
//! all of Unicode, so the two backends can disagree on non-ASCII terms.

use crate::domain::{Backend, Entry, EntryKey};
use crate::error::{DiaroError, Result};
use crate::infrastructure::store::EntryStore;
use chrono::NaiveDateTime;
use rusqlite::{params, Connection, OptionalExtension};
use std::path::{Path, PathBuf};

const SCHEMA: &str = "CREATE TABLE IF NOT EXISTS diary_entries (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    date TEXT NOT NULL UNIQUE,
    content TEXT NOT NULL,
    created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP,
    updated_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
)";

const UPSERT: &str = "INSERT INTO diary_entries (date, content) VALUES (?1, ?2)
    ON CONFLICT(date) DO UPDATE SET
        content = excluded.content,
        updated_at = CURRENT_TIMESTAMP";

/// One connection held for the whole session and used serially
pub struct RelationalStore {
    conn: Connection,
    location: PathBuf,
}

impl RelationalStore {
    /// Open the database at `path` and make sure the schema exists.
    ///
    /// Any failure is reported as `BackendUnavailable`.
    pub fn connect(path: &Path) -> Result<Self> {
        let conn = Connection::open(path).map_err(|e| {
            DiaroError::BackendUnavailable(format!("cannot open {}: {}", path.display(), e))
        })?;
        Self::with_connection(conn, path.to_path_buf())
    }

    /// Private in-memory database, gone when the store is dropped
    pub fn in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()
            .map_err(|e| DiaroError::BackendUnavailable(e.to_string()))?;
        Self::with_connection(conn, PathBuf::from(":memory:"))
    }

    fn with_connection(conn: Connection, location: PathBuf) -> Result<Self> {
        let store = RelationalStore { conn, location };
        store.ensure_schema().map_err(|e| {
            DiaroError::BackendUnavailable(format!(
                "schema check failed for {}: {}",
                store.location.display(),
                e
            ))
        })?;
        Ok(store)
    }

    /// Create the entries table if needed. Safe to run on every startup.
    pub fn ensure_schema(&self) -> Result<()> {
        self.conn.execute(SCHEMA, [])?;
        Ok(())
    }

    pub fn location(&self) -> &Path {
        &self.location
    }

    /// Close the connection, reporting any error SQLite raises on shutdown
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| DiaroError::Query(e))
    }

    fn collect_keys(&self, sql: &str, params: impl rusqlite::Params) -> Result<Vec<EntryKey>> {
        let mut stmt = self.conn.prepare(sql)?;
        let dates = stmt
            .query_map(params, |row| row.get::<_, String>(0))?
            .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(dates
            .into_iter()
            .filter_map(|date| match EntryKey::parse(&date) {
                Ok(key) => Some(key),
                Err(_) => {
                    tracing::warn!(%date, "ignoring row with malformed date");
                    None
                }
            })
            .collect())
    }
}

/// Escape `LIKE` wildcards so the term matches literally
fn like_pattern(term: &str) -> String {
    let mut escaped = String::with_capacity(term.len() + 2);
    escaped.push('%');
    for c in term.chars() {
        if matches!(c, '%' | '_' | '\\') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped.push('%');
    escaped
}

impl EntryStore for RelationalStore {
    fn backend(&self) -> Backend {
        Backend::Relational
    }

    fn write(&self, key: &EntryKey, content: &str) -> Result<()> {
        self.conn
            .execute(UPSERT, params![key.to_string(), content.trim_end()])?;
        tracing::debug!(%key, "entry row upserted");
        Ok(())
    }

    fn read(&self, key: &EntryKey) -> Result<Option<Entry>> {
        let row = self
            .conn
            .query_row(
                "SELECT content, created_at, updated_at FROM diary_entries WHERE date = ?1",
                params![key.to_string()],
                |row| {
                    Ok((
                        row.get::<_, String>(0)?,
                        row.get::<_, NaiveDateTime>(1)?,
                        row.get::<_, NaiveDateTime>(2)?,
                    ))
                },
            )
            .optional()?;

        Ok(row.map(|(content, created_at, updated_at)| Entry {
            key: *key,
            content,
            source: Backend::Relational,
            created_at: Some(created_at),
            updated_at: Some(updated_at),
        }))
    }

    fn delete(&self, key: &EntryKey) -> Result<bool> {
        let removed = self.conn.execute(
            "DELETE FROM diary_entries WHERE date = ?1",
            params![key.to_string()],
        )?;
        Ok(removed > 0)
    }

    fn list_keys(&self) -> Result<Vec<EntryKey>> {
        self.collect_keys("SELECT date FROM diary_entries ORDER BY date DESC", [])
    }

    /// ASCII-only case folding, see the module docs
    fn search(&self, term: &str) -> Result<Vec<EntryKey>> {
        self.collect_keys(
            "SELECT date FROM diary_entries
             WHERE content LIKE ?1 ESCAPE '\\'
             ORDER BY date DESC",
            params![like_pattern(term)],
        )
    }
}
