//! Flat-file backend: one text file per entry

use crate::domain::entry_key::sort_descending;
use crate::domain::file_layout::{filename_for_key, key_from_filename, render_file, strip_header};
use crate::domain::{Backend, Entry, EntryKey};
use crate::error::{DiaroError, Result};
use crate::infrastructure::store::EntryStore;
use chrono::Local;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Stores entries as `diary_<date>.txt` files in a single directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
    write_header: bool,
    ready: bool,
}

impl FileStore {
    /// Open the store, creating its directory when missing.
    ///
    /// A directory that cannot be created is logged and remembered in
    /// [`FileStore::ready`]; individual operations then fail with `Io`.
    pub fn open(dir: PathBuf, write_header: bool) -> Self {
        let ready = match fs::create_dir_all(&dir) {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(dir = %dir.display(), error = %e, "cannot create entry directory");
                false
            }
        };
        FileStore {
            dir,
            write_header,
            ready,
        }
    }

    /// Whether the backing directory existed or was created at open
    pub fn ready(&self) -> bool {
        self.ready
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &EntryKey) -> PathBuf {
        self.dir.join(filename_for_key(key))
    }

    /// Body of the entry file for `key`. A store that writes no headers
    /// keeps every line, so a body shaped like a header survives intact.
    fn read_body(&self, key: &EntryKey) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(raw) => {
                let body = if self.write_header {
                    strip_header(&raw, key)
                } else {
                    raw.as_str()
                };
                Ok(Some(body.trim_end().to_string()))
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(DiaroError::Io(e)),
        }
    }
}

impl EntryStore for FileStore {
    fn backend(&self) -> Backend {
        Backend::File
    }

    fn write(&self, key: &EntryKey, content: &str) -> Result<()> {
        let header_time = self.write_header.then(|| Local::now().time());
        let contents = render_file(key, content.trim_end(), header_time);
        fs::write(self.path_for(key), contents)?;
        tracing::debug!(%key, dir = %self.dir.display(), "entry file written");
        Ok(())
    }

    fn read(&self, key: &EntryKey) -> Result<Option<Entry>> {
        Ok(self.read_body(key)?.map(|body| Entry::from_file(*key, body)))
    }

    fn delete(&self, key: &EntryKey) -> Result<bool> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(DiaroError::Io(e)),
        }
    }

    fn list_keys(&self) -> Result<Vec<EntryKey>> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(DiaroError::Io(e)),
        };

        let mut keys = Vec::new();
        for entry in entries {
            let Ok(entry) = entry else {
                continue;
            };
            if !entry.path().is_file() {
                continue;
            }
            let Some(key) = entry.file_name().to_str().and_then(key_from_filename) else {
                continue;
            };
            keys.push(key);
        }

        sort_descending(&mut keys);
        Ok(keys)
    }

    /// Case-insensitive: both the term and each line are lowercased.
    /// The header is not searched.
    fn search(&self, term: &str) -> Result<Vec<EntryKey>> {
        let needle = term.to_lowercase();
        let mut matches = Vec::new();

        for key in self.list_keys()? {
            let body = match self.read_body(&key) {
                Ok(Some(body)) => body,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(%key, error = %e, "skipping unreadable entry file");
                    continue;
                }
            };
            if body.lines().any(|line| line.to_lowercase().contains(&needle)) {
                matches.push(key);
            }
        }

        Ok(matches)
    }
}
