//! Snippet manager for store operations
//!
//! This module provides the `SnippetManager` which handles inserting,
//! looking up, deleting and listing snippets with persistence through
//! `SnippetFile`.

use crate::config::ConfigManager;
use crate::error::StoreResult;
use crate::models::Snippet;

use super::{SnippetFile, SnippetStore};

/// Manager for snippet store operations
///
/// Holds the current snapshot together with the file it came from. Every
/// mutation builds a new snapshot, writes it in full, and only then
/// replaces the held snapshot.
#[derive(Debug)]
pub struct SnippetManager {
    /// Current snapshot
    store: SnippetStore,
    /// Backing file
    file: SnippetFile,
}

impl SnippetManager {
    /// Creates a new `SnippetManager` for the given file
    ///
    /// Loads existing snippets from storage.
    ///
    /// # Errors
    ///
    /// Returns an error if loading from storage fails.
    pub fn new(file: SnippetFile) -> StoreResult<Self> {
        let store = file.load()?;
        Ok(Self { store, file })
    }

    /// Opens the store file of the given configuration
    ///
    /// # Errors
    ///
    /// Returns an error if loading from storage fails.
    pub fn open(config_manager: &ConfigManager) -> StoreResult<Self> {
        Self::new(SnippetFile::new(config_manager.store_path()))
    }

    /// Creates a new SnippetManager with empty storage (for testing)
    #[cfg(test)]
    pub const fn new_empty(file: SnippetFile) -> Self {
        Self {
            store: SnippetStore::new(),
            file,
        }
    }

    // ========== Store Operations ==========

    /// Saves `code` under `tag` and persists the store
    ///
    /// The snippet's creation time is the current time.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateTag` if the tag is taken,
    /// `StoreError::EmptyTag` for a blank tag, or an error if persistence
    /// fails. On error the held snapshot is unchanged.
    pub fn insert(&mut self, tag: &str, code: &str) -> StoreResult<&Snippet> {
        self.insert_snippet(Snippet::new(tag, code))
    }

    /// Saves an existing snippet object and persists the store
    ///
    /// # Errors
    ///
    /// See [`SnippetManager::insert`].
    pub fn insert_snippet(&mut self, snippet: Snippet) -> StoreResult<&Snippet> {
        let tag = snippet.tag.clone();
        let next = self.store.inserted(snippet)?;
        self.file.save(&next)?;
        self.store = next;

        tracing::info!(tag = %tag, count = self.store.len(), "Saved snippet");

        let snippets = self.store.snippets();
        Ok(&snippets[snippets.len() - 1])
    }

    /// Deletes the snippet tagged `tag` and persists the store
    ///
    /// # Returns
    ///
    /// The removed snippet
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no snippet has this tag, or an
    /// error if persistence fails. On error the held snapshot is unchanged.
    pub fn delete_by_tag(&mut self, tag: &str) -> StoreResult<Snippet> {
        let (next, removed) = self.store.removed(tag)?;
        self.file.save(&next)?;
        self.store = next;

        tracing::info!(tag = %tag, count = self.store.len(), "Deleted snippet");
        Ok(removed)
    }

    /// Gets a snippet by tag (exact, case-sensitive match)
    #[must_use]
    pub fn find_by_tag(&self, tag: &str) -> Option<&Snippet> {
        self.store.find_by_tag(tag)
    }

    /// Lists all snippets in insertion order
    #[must_use]
    pub fn list_all(&self) -> &[Snippet] {
        self.store.snippets()
    }

    /// Returns the total number of snippets
    #[must_use]
    pub fn snippet_count(&self) -> usize {
        self.store.len()
    }

    /// Current snapshot
    #[must_use]
    pub const fn store(&self) -> &SnippetStore {
        &self.store
    }

    /// Backing file
    #[must_use]
    pub const fn file(&self) -> &SnippetFile {
        &self.file
    }

    // ========== Persistence ==========

    /// Reloads snippets from storage
    ///
    /// # Errors
    ///
    /// Returns an error if loading fails; the held snapshot is kept.
    pub fn reload(&mut self) -> StoreResult<()> {
        self.store = self.file.load()?;
        Ok(())
    }
}
