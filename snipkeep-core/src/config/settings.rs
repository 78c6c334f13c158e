//! Application settings model
//!
//! This module defines the user settings stored in config.toml.

use serde::{Deserialize, Serialize};

/// Application-wide settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppSettings {
    /// Settings for the list command
    #[serde(default)]
    pub list: ListSettings,
    /// Clipboard settings
    #[serde(default)]
    pub clipboard: ClipboardSettings,
}

/// Output format for snippet listings
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListFormat {
    /// Aligned table
    #[default]
    Table,
    /// Pretty-printed JSON
    Json,
    /// Comma separated values
    Csv,
}

/// Settings for the list command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListSettings {
    /// Default output format
    #[serde(default)]
    pub format: ListFormat,
    /// Characters of the first code line shown in the table preview
    #[serde(default = "default_preview_width")]
    pub preview_width: usize,
}

const fn default_preview_width() -> usize {
    40
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            format: ListFormat::default(),
            preview_width: default_preview_width(),
        }
    }
}

/// Clipboard settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardSettings {
    /// Copy to the system clipboard; when disabled the code is printed instead
    #[serde(default = "default_true")]
    pub enabled: bool,
}

const fn default_true() -> bool {
    true
}

impl Default for ClipboardSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}
