//! Persistence of the snippet store as a JSON file

use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;

use crate::error::{StoreError, StoreResult};

use super::snapshot::SnippetStore;

/// Handle to the JSON file holding a snippet store
#[derive(Debug, Clone)]
pub struct SnippetFile {
    path: PathBuf,
}

impl SnippetFile {
    /// Creates a handle for the store file at `path`
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the store file
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the store
    ///
    /// Returns an empty store if the file doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::CorruptStore` if the file is not a valid snippet
    /// list, and `StoreError::Io` if it cannot be read.
    pub fn load(&self) -> StoreResult<SnippetStore> {
        let content = match fs::read(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "No snippet store yet");
                return Ok(SnippetStore::new());
            }
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        let store: SnippetStore =
            serde_json::from_slice(&content).map_err(|e| self.corrupt(e.to_string()))?;
        store.validate().map_err(|e| self.corrupt(e.to_string()))?;

        tracing::debug!(
            path = %self.path.display(),
            count = store.len(),
            "Loaded snippet store"
        );
        Ok(store)
    }

    /// Writes the full store, replacing the previous file atomically
    ///
    /// The JSON is written to a temporary file in the same directory and
    /// renamed over the store file, so an interrupted write never leaves a
    /// truncated store behind. Parent directories are created as needed.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the directory or file cannot be written.
    pub fn save(&self, store: &SnippetStore) -> StoreResult<()> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir).map_err(|source| StoreError::Io {
            path: dir.to_path_buf(),
            source,
        })?;

        let content = serde_json::to_string_pretty(store)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        let io_err = |source: std::io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let mut temp = NamedTempFile::new_in(dir).map_err(io_err)?;
        temp.write_all(content.as_bytes()).map_err(io_err)?;
        temp.as_file().sync_all().map_err(io_err)?;

        if let Err(e) = temp.persist(&self.path) {
            if let Err(cleanup) = e.file.close() {
                tracing::warn!("Failed to remove temporary store file: {cleanup}");
            }
            return Err(io_err(e.error));
        }

        tracing::debug!(
            path = %self.path.display(),
            count = store.len(),
            "Saved snippet store"
        );
        Ok(())
    }

    fn corrupt(&self, reason: String) -> StoreError {
        StoreError::CorruptStore {
            path: self.path.clone(),
            reason,
        }
    }
}
