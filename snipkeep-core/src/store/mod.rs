//! Snippet store module
//!
//! This module provides the `SnippetStore` snapshot, the `SnippetFile`
//! handle that persists it, and the `SnippetManager` which combines the two
//! into load-modify-save operations.

mod file;
mod manager;
mod snapshot;

pub use file::SnippetFile;
pub use manager::SnippetManager;
pub use snapshot::SnippetStore;
