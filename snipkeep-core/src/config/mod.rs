//! Configuration management for `Snipkeep`
//!
//! This module provides the `ConfigManager`, which locates the snippet
//! directory and loads and saves the TOML settings file.

mod manager;
pub mod settings;

pub use manager::ConfigManager;
pub use settings::{AppSettings, ClipboardSettings, ListFormat, ListSettings};
