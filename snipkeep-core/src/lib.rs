//! `Snipkeep` Core Library
//!
//! This crate provides the core functionality for the `Snipkeep` snippet
//! manager: the JSON snippet store, line-range extraction from source files,
//! save option validation, and configuration.

pub mod config;
pub mod error;
pub mod extract;
pub mod models;
pub mod options;
pub mod store;

pub use config::{AppSettings, ConfigManager, ListFormat};
pub use error::{
    ConfigError, ConfigResult, ExtractError, ExtractResult, OptionsError, OptionsResult,
    StoreError, StoreResult,
};
pub use extract::{extract_all, extract_lines, LineRange};
pub use models::Snippet;
pub use options::{LineSelection, SaveOptions};
pub use store::{SnippetFile, SnippetManager, SnippetStore};
