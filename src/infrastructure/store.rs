//! Storage backend abstraction

use crate::domain::{Backend, Entry, EntryKey};
use crate::error::Result;

/// One independent place entries can live.
///
/// Implementations return typed errors and never panic on backend faults;
/// deciding what a failure means for the caller is left to the facade.
pub trait EntryStore {
    /// Which backend this store is
    fn backend(&self) -> Backend;

    /// Insert or fully replace the entry for `key`
    fn write(&self, key: &EntryKey, content: &str) -> Result<()>;

    /// Read the entry for `key`, `None` when absent
    fn read(&self, key: &EntryKey) -> Result<Option<Entry>>;

    /// Remove the entry for `key`. Returns false when there was nothing to remove.
    fn delete(&self, key: &EntryKey) -> Result<bool>;

    /// All stored keys, most recent first
    fn list_keys(&self) -> Result<Vec<EntryKey>>;

    /// Keys whose content contains `term`, most recent first.
    /// Case handling is backend-specific.
    fn search(&self, term: &str) -> Result<Vec<EntryKey>>;
}
