//! Snippet model for saved pieces of code.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A piece of code saved under a unique tag
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snippet {
    /// Unique, case-sensitive tag identifying the snippet
    pub tag: String,
    /// Saved code (may be empty or span several lines)
    pub code: String,
    /// When the snippet was saved
    pub created_at: DateTime<Utc>,
}

impl Snippet {
    /// Creates a new snippet stamped with the current time
    #[must_use]
    pub fn new(tag: impl Into<String>, code: impl Into<String>) -> Self {
        Self::with_created_at(tag, code, Utc::now())
    }

    /// Creates a snippet with an explicit creation time
    #[must_use]
    pub fn with_created_at(
        tag: impl Into<String>,
        code: impl Into<String>,
        created_at: DateTime<Utc>,
    ) -> Self {
        Self {
            tag: tag.into(),
            code: code.into(),
            created_at,
        }
    }

    /// Number of lines in the saved code
    #[must_use]
    pub fn line_count(&self) -> usize {
        self.code.lines().count()
    }

    /// First line of the code, for previews
    #[must_use]
    pub fn first_line(&self) -> &str {
        self.code.lines().next().unwrap_or("")
    }
}
