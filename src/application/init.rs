//! Initialize diary use case

use crate::error::Result;
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use std::fs;
use std::path::{Path, PathBuf};

/// Initialize a new diary at the specified path.
///
/// `database` overrides where the relational backend lives; with
/// `with_database` false the diary is file-only.
pub fn init(path: &Path, with_database: bool, database: Option<PathBuf>) -> Result<Config> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }

    let repo = FileSystemRepository::new(path.to_path_buf());
    repo.initialize()?;

    let mut config = Config::new(with_database);
    if with_database && database.is_some() {
        config.database.path = database;
    }
    repo.save_config(&config)?;

    fs::create_dir_all(config.entries_path(path))?;

    tracing::info!(root = %path.display(), "diary initialized");
    Ok(config)
}
