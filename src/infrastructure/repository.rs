//! Diary root discovery and metadata directory
//!
//! A diary root is any directory holding a `.diaro` directory. Commands find
//! it through `DIARO_ROOT` or by walking up from the working directory.

use crate::error::{DiaroError, Result};
use crate::infrastructure::config::{Config, META_DIR};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable pointing at the diary root
pub const ROOT_ENV: &str = "DIARO_ROOT";

/// Where a diary keeps its metadata and configuration
pub trait DiaryRepository {
    fn root(&self) -> &Path;

    fn load_config(&self) -> Result<Config>;

    fn save_config(&self, config: &Config) -> Result<()>;

    /// Create the metadata directory. Fails if the root already holds a diary.
    fn initialize(&self) -> Result<()>;
}

/// Diary rooted in a local directory
#[derive(Debug, Clone)]
pub struct FileSystemRepository {
    pub root: PathBuf,
}

impl FileSystemRepository {
    pub fn new(root: PathBuf) -> Self {
        FileSystemRepository { root }
    }

    /// Find the diary for the current process: `DIARO_ROOT`, else the
    /// nearest enclosing diary of the working directory.
    pub fn discover() -> Result<Self> {
        let cwd = std::env::current_dir()?;
        Self::locate(std::env::var_os(ROOT_ENV), &cwd)
    }

    /// Resolve the diary root from an explicit location, if any, and a
    /// working directory. An empty explicit location counts as unset; a
    /// relative one is taken from `cwd`.
    pub fn locate(explicit: Option<OsString>, cwd: &Path) -> Result<Self> {
        match explicit.filter(|value| !value.is_empty()) {
            Some(value) => {
                let root = cwd.join(value);
                if !has_meta_dir(&root) {
                    return Err(DiaroError::Config(format!(
                        "{} points at '{}', which holds no {} directory. \
                        Run 'diaro init' there or unset {}.",
                        ROOT_ENV,
                        root.display(),
                        META_DIR,
                        ROOT_ENV
                    )));
                }
                Ok(FileSystemRepository::new(root))
            }
            None => Self::discover_from(cwd),
        }
    }

    /// Nearest directory at or above `start` that holds a diary
    pub fn discover_from(start: &Path) -> Result<Self> {
        start
            .ancestors()
            .find(|dir| has_meta_dir(dir))
            .map(|dir| FileSystemRepository::new(dir.to_path_buf()))
            .ok_or_else(|| DiaroError::NotDiaroDirectory(start.to_path_buf()))
    }

    fn meta_dir(&self) -> PathBuf {
        self.root.join(META_DIR)
    }
}

fn has_meta_dir(path: &Path) -> bool {
    path.join(META_DIR).is_dir()
}

impl DiaryRepository for FileSystemRepository {
    fn root(&self) -> &Path {
        &self.root
    }

    fn load_config(&self) -> Result<Config> {
        Config::load_from_dir(&self.root)
    }

    fn save_config(&self, config: &Config) -> Result<()> {
        config.save_to_dir(&self.root)
    }

    fn initialize(&self) -> Result<()> {
        let meta_dir = self.meta_dir();
        if meta_dir.exists() {
            return Err(DiaroError::Config(format!(
                "{} is already initialized as a diary",
                self.root.display()
            )));
        }

        fs::create_dir(&meta_dir)?;
        tracing::debug!(dir = %meta_dir.display(), "metadata directory created");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn diary_in(temp: &TempDir) -> FileSystemRepository {
        let repo = FileSystemRepository::new(temp.path().to_path_buf());
        repo.initialize().unwrap();
        repo
    }

    #[test]
    fn test_initialize_creates_meta_dir() {
        let temp = TempDir::new().unwrap();
        diary_in(&temp);

        assert!(temp.path().join(".diaro").is_dir());
    }

    #[test]
    fn test_initialize_twice_fails() {
        let temp = TempDir::new().unwrap();
        let repo = diary_in(&temp);

        assert!(matches!(repo.initialize(), Err(DiaroError::Config(_))));
    }

    #[test]
    fn test_discover_from_subdirectory() {
        let temp = TempDir::new().unwrap();
        diary_in(&temp);
        let subdir = temp.path().join("sub").join("deep");
        fs::create_dir_all(&subdir).unwrap();

        let repo = FileSystemRepository::discover_from(&subdir).unwrap();
        assert_eq!(repo.root, temp.path());
    }

    #[test]
    fn test_discover_picks_nearest_diary() {
        let temp = TempDir::new().unwrap();
        diary_in(&temp);
        let inner = temp.path().join("inner");
        fs::create_dir_all(inner.join(".diaro")).unwrap();

        let repo = FileSystemRepository::discover_from(&inner.join("notes")).unwrap();
        assert_eq!(repo.root, inner);
    }

    #[test]
    fn test_discover_fails_without_diary() {
        let temp = TempDir::new().unwrap();

        assert!(matches!(
            FileSystemRepository::discover_from(temp.path()),
            Err(DiaroError::NotDiaroDirectory(_))
        ));
    }

    #[test]
    fn test_locate_explicit_root_wins() {
        let elsewhere = TempDir::new().unwrap();
        let cwd = TempDir::new().unwrap();
        diary_in(&elsewhere);
        diary_in(&cwd);

        let repo =
            FileSystemRepository::locate(Some(elsewhere.path().into()), cwd.path()).unwrap();
        assert_eq!(repo.root, elsewhere.path());
    }

    #[test]
    fn test_locate_relative_root_uses_cwd() {
        let cwd = TempDir::new().unwrap();
        fs::create_dir_all(cwd.path().join("journal").join(".diaro")).unwrap();

        let repo = FileSystemRepository::locate(Some("journal".into()), cwd.path()).unwrap();
        assert_eq!(repo.root, cwd.path().join("journal"));
    }

    #[test]
    fn test_locate_explicit_root_without_diary() {
        let cwd = TempDir::new().unwrap();
        diary_in(&cwd);
        let empty = TempDir::new().unwrap();

        assert!(matches!(
            FileSystemRepository::locate(Some(empty.path().into()), cwd.path()),
            Err(DiaroError::Config(_))
        ));
    }

    #[test]
    fn test_locate_empty_root_falls_back_to_walk() {
        let cwd = TempDir::new().unwrap();
        diary_in(&cwd);

        let repo = FileSystemRepository::locate(Some(OsString::new()), cwd.path()).unwrap();
        assert_eq!(repo.root, cwd.path());
    }

    #[test]
    fn test_save_and_load_config() {
        let temp = TempDir::new().unwrap();
        let repo = diary_in(&temp);

        let config = Config::new(false);
        repo.save_config(&config).unwrap();

        assert_eq!(repo.load_config().unwrap(), config);
    }
}
