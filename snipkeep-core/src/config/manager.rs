//! Configuration manager for the snippet directory
//!
//! This module provides the `ConfigManager` which locates the snippet
//! directory, the snippet store file inside it, and loads and saves the
//! TOML settings file.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{ConfigError, ConfigResult};

use super::settings::AppSettings;

/// Name of the snippet directory under the home directory
const SNIPPET_DIR: &str = ".snippets";
/// File names inside the snippet directory
const STORE_FILE: &str = "snippets.json";
const CONFIG_FILE: &str = "config.toml";

/// Configuration manager for `Snipkeep`
///
/// Snippets and settings are stored in `~/.snippets/` by default.
#[derive(Debug, Clone)]
pub struct ConfigManager {
    /// Base directory for the store and settings files
    config_dir: PathBuf,
}

impl ConfigManager {
    /// Creates a new `ConfigManager` with the default directory
    ///
    /// The default directory is `~/.snippets/`
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn new() -> ConfigResult<Self> {
        let config_dir = dirs::home_dir()
            .ok_or(ConfigError::HomeDirNotFound)?
            .join(SNIPPET_DIR);
        Ok(Self { config_dir })
    }

    /// Creates a new `ConfigManager` with a custom directory
    ///
    /// This is useful for testing or non-standard configurations.
    #[must_use]
    pub const fn with_config_dir(config_dir: PathBuf) -> Self {
        Self { config_dir }
    }

    /// Uses `dir` when given, the default directory otherwise
    ///
    /// # Errors
    ///
    /// Returns an error if no directory is given and the home directory
    /// cannot be determined.
    pub fn from_override(dir: Option<PathBuf>) -> ConfigResult<Self> {
        dir.map_or_else(Self::new, |dir| Ok(Self::with_config_dir(dir)))
    }

    /// Returns the configuration directory path
    #[must_use]
    pub fn config_dir(&self) -> &Path {
        &self.config_dir
    }

    /// Path of the snippet store file
    #[must_use]
    pub fn store_path(&self) -> PathBuf {
        self.config_dir.join(STORE_FILE)
    }

    /// Path of the settings file
    #[must_use]
    pub fn settings_path(&self) -> PathBuf {
        self.config_dir.join(CONFIG_FILE)
    }

    /// Ensures the configuration directory exists
    ///
    /// Creates the directory and any parent directories if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn ensure_config_dir(&self) -> ConfigResult<()> {
        if !self.config_dir.exists() {
            fs::create_dir_all(&self.config_dir).map_err(|e| {
                ConfigError::Write(format!(
                    "Failed to create snippet directory {}: {}",
                    self.config_dir.display(),
                    e
                ))
            })?;
        }
        Ok(())
    }

    // ========== Settings ==========

    /// Loads application settings
    ///
    /// Returns default settings if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load_settings(&self) -> ConfigResult<AppSettings> {
        let path = self.settings_path();
        if !path.exists() {
            return Ok(AppSettings::default());
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| ConfigError::Parse(format!("Failed to read {}: {}", path.display(), e)))?;

        toml::from_str(&content)
            .map_err(|e| ConfigError::Parse(format!("Failed to parse {}: {}", path.display(), e)))
    }

    /// Saves application settings
    ///
    /// Creates the configuration directory if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_settings(&self, settings: &AppSettings) -> ConfigResult<()> {
        self.ensure_config_dir()?;
        let path = self.settings_path();

        let content = toml::to_string_pretty(settings)
            .map_err(|e| ConfigError::Serialize(format!("Failed to serialize: {e}")))?;

        fs::write(&path, content)
            .map_err(|e| ConfigError::Write(format!("Failed to write {}: {}", path.display(), e)))
    }
}
