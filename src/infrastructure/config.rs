//! Configuration management

use crate::error::{DiaroError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Directory holding diaro metadata inside a diary root
pub const META_DIR: &str = ".diaro";
/// Environment variable overriding `[database] path`
pub const DATABASE_ENV: &str = "DIARO_DATABASE";

const CONFIG_FILE: &str = "config.toml";
const DEFAULT_DATABASE_FILE: &str = "diary.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding entry files, relative to the diary root
    #[serde(default = "default_entries_dir")]
    pub entries_dir: PathBuf,

    /// Whether entry files start with a date/time header
    #[serde(default = "default_write_header")]
    pub write_header: bool,

    #[serde(default)]
    pub database: DatabaseSettings,
}

/// Where the relational backend lives. No path means file-only mode.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

fn default_entries_dir() -> PathBuf {
    PathBuf::from("diaries")
}

fn default_write_header() -> bool {
    true
}

impl Default for Config {
    fn default() -> Self {
        Config {
            entries_dir: default_entries_dir(),
            write_header: default_write_header(),
            database: DatabaseSettings::default(),
        }
    }
}

impl Config {
    /// Create a config for a fresh diary. When `with_database` is set the
    /// relational backend lives next to the config file.
    pub fn new(with_database: bool) -> Self {
        let path = with_database.then(|| Path::new(META_DIR).join(DEFAULT_DATABASE_FILE));
        Config {
            database: DatabaseSettings { path },
            ..Config::default()
        }
    }

    /// Load config from .diaro/config.toml in the given directory
    pub fn load_from_dir(path: &Path) -> Result<Self> {
        let config_path = path.join(META_DIR).join(CONFIG_FILE);

        let contents = fs::read_to_string(&config_path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                DiaroError::NotDiaroDirectory(path.to_path_buf())
            } else {
                DiaroError::Io(e)
            }
        })?;

        toml::from_str(&contents)
            .map_err(|e| DiaroError::Config(format!("Failed to parse config.toml: {}", e)))
    }

    /// Save config to .diaro/config.toml in the given directory
    pub fn save_to_dir(&self, path: &Path) -> Result<()> {
        let meta_dir = path.join(META_DIR);

        if !meta_dir.exists() {
            fs::create_dir(&meta_dir)?;
        }

        let contents = toml::to_string_pretty(self)?;
        fs::write(meta_dir.join(CONFIG_FILE), contents)?;

        Ok(())
    }

    /// Absolute directory of the file backend
    pub fn entries_path(&self, root: &Path) -> PathBuf {
        root.join(&self.entries_dir)
    }

    /// Database location, honouring `DIARO_DATABASE`. An empty variable
    /// forces file-only mode.
    pub fn database_path(&self, root: &Path) -> Option<PathBuf> {
        let configured = match std::env::var_os(DATABASE_ENV) {
            Some(value) if value.is_empty() => None,
            Some(value) => Some(PathBuf::from(value)),
            None => self.database.path.clone(),
        };
        configured.map(|p| if p.is_absolute() { p } else { root.join(p) })
    }
}
