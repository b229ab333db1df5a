//! Config management use case

use crate::error::{DiaroError, Result};
use crate::infrastructure::{Config, DiaryRepository, FileSystemRepository};
use std::path::PathBuf;

const VALID_KEYS: &str = "entries_dir, write_header, database";

/// Service for managing diary configuration
pub struct ConfigService {
    repository: FileSystemRepository,
}

impl ConfigService {
    pub fn new(repository: FileSystemRepository) -> Self {
        ConfigService { repository }
    }

    /// Get a single config value
    pub fn get(&self, key: &str) -> Result<String> {
        let config = self.repository.load_config()?;

        match key {
            "entries_dir" => Ok(config.entries_dir.display().to_string()),
            "write_header" => Ok(config.write_header.to_string()),
            "database" => Ok(config
                .database
                .path
                .map(|p| p.display().to_string())
                .unwrap_or_default()),
            _ => Err(DiaroError::Config(format!(
                "Unknown config key: '{}'. Valid keys are: {}",
                key, VALID_KEYS
            ))),
        }
    }

    /// Set a config value. An empty `database` value switches to file-only.
    pub fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut config = self.repository.load_config()?;

        match key {
            "entries_dir" => {
                if value.trim().is_empty() {
                    return Err(DiaroError::Config(
                        "entries_dir cannot be empty".to_string(),
                    ));
                }
                config.entries_dir = PathBuf::from(value);
            }
            "write_header" => {
                config.write_header = value.parse().map_err(|_| {
                    DiaroError::Config(format!(
                        "Invalid value for write_header: '{}'. Use true or false",
                        value
                    ))
                })?;
            }
            "database" => {
                config.database.path = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            _ => {
                return Err(DiaroError::Config(format!(
                    "Unknown config key: '{}'. Valid keys are: {}",
                    key, VALID_KEYS
                )));
            }
        }

        self.repository.save_config(&config)
    }

    /// List all config values
    pub fn list(&self) -> Result<Config> {
        self.repository.load_config()
    }
}
