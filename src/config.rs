//! Persisted application settings: the ExifTool location.
//!
//! Stored as JSON under the per-user data directory. A missing or unreadable
//! file is never fatal; it just means no tool has been selected yet.
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{Error, Result};

pub const APP_DIR_NAME: &str = "ExifCleaner";
pub const CONFIG_FILE_NAME: &str = "config.json";

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub exiftool_path: Option<PathBuf>,
}

impl AppConfig {
    /// `<data dir>/ExifCleaner/config.json`
    pub fn default_path() -> Result<PathBuf> {
        let base = dirs::data_dir().ok_or(Error::NoDataDir)?;
        Ok(base.join(APP_DIR_NAME).join(CONFIG_FILE_NAME))
    }

    /// Loads from the default location, falling back to an empty config.
    pub fn load() -> Self {
        match Self::default_path() {
            Ok(path) => Self::load_from(&path),
            Err(e) => {
                warn!("Config not loaded: {}", e);
                Self::default()
            }
        }
    }

    pub fn load_from(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                debug!("No config at {:?}: {}", path, e);
                return Self::default();
            }
        };
        match serde_json::from_str::<AppConfig>(&content) {
            Ok(config) => {
                debug!("Loaded config from {:?}", path);
                config
            }
            Err(e) => {
                warn!("Ignoring corrupt config {:?}: {}", path, e);
                Self::default()
            }
        }
    }

    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::default_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        let to_config_err = |source| Error::Config {
            path: path.to_path_buf(),
            source,
        };
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(to_config_err)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json).map_err(to_config_err)?;
        debug!("Saved config to {:?}", path);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn missing_file_means_no_tool() {
        let dir = tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join(CONFIG_FILE_NAME));
        assert_eq!(config, AppConfig::default());
        assert!(config.exiftool_path.is_none());
    }

    #[test]
    fn corrupt_file_means_no_tool() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, "{ not json").unwrap();
        assert!(AppConfig::load_from(&path).exiftool_path.is_none());
    }

    #[test]
    fn null_path_is_accepted() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&path, r#"{"exiftool_path": null}"#).unwrap();
        assert!(AppConfig::load_from(&path).exiftool_path.is_none());
    }

    #[test]
    fn save_creates_parent_dirs_and_reloads() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(APP_DIR_NAME).join(CONFIG_FILE_NAME);
        let config = AppConfig {
            exiftool_path: Some(PathBuf::from("C:/tools/exiftool.exe")),
        };
        config.save_to(&path).unwrap();

        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"exiftool_path\""));
        assert_eq!(AppConfig::load_from(&path), config);
    }

    #[test]
    fn save_failure_is_a_config_error() {
        let dir = tempdir().unwrap();
        // A regular file where the parent directory should be.
        let blocker = dir.path().join("blocker");
        fs::write(&blocker, "").unwrap();
        let config = AppConfig::default();
        let err = config
            .save_to(&blocker.join(CONFIG_FILE_NAME))
            .unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
    }
}
