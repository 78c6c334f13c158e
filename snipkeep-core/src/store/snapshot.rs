//! In-memory snapshot of the snippet store

use serde::{Deserialize, Deserializer, Serialize};

use crate::error::{StoreError, StoreResult};
use crate::models::Snippet;

/// Ordered collection of snippets with unique tags
///
/// A snapshot is never mutated in place: `inserted` and `removed` return a
/// new snapshot, so a caller can persist the result before adopting it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetStore {
    #[serde(default, deserialize_with = "null_as_empty")]
    snippets: Vec<Snippet>,
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Snippet>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Vec<Snippet>>::deserialize(deserializer).map(Option::unwrap_or_default)
}

fn is_blank_tag(tag: &str) -> bool {
    tag.trim().is_empty()
}

impl SnippetStore {
    /// Creates an empty store
    #[must_use]
    pub const fn new() -> Self {
        Self {
            snippets: Vec::new(),
        }
    }

    /// Builds a store from snippets in order
    ///
    /// # Errors
    ///
    /// Returns `StoreError::DuplicateTag` for the first repeated tag and
    /// `StoreError::EmptyTag` for a blank tag.
    pub fn from_snippets(snippets: Vec<Snippet>) -> StoreResult<Self> {
        let store = Self { snippets };
        store.validate()?;
        Ok(store)
    }

    /// Checks the unique, non-empty tag invariant
    ///
    /// # Errors
    ///
    /// See [`SnippetStore::from_snippets`].
    pub fn validate(&self) -> StoreResult<()> {
        for (i, snippet) in self.snippets.iter().enumerate() {
            if is_blank_tag(&snippet.tag) {
                return Err(StoreError::EmptyTag);
            }
            if self.snippets[..i].iter().any(|s| s.tag == snippet.tag) {
                return Err(StoreError::DuplicateTag(snippet.tag.clone()));
            }
        }
        Ok(())
    }

    /// Number of snippets
    pub fn len(&self) -> usize {
        self.snippets.len()
    }

    /// Whether the store holds no snippets
    pub fn is_empty(&self) -> bool {
        self.snippets.is_empty()
    }

    /// All snippets in insertion order
    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    /// Finds the snippet with exactly this tag
    pub fn find_by_tag(&self, tag: &str) -> Option<&Snippet> {
        self.snippets.iter().find(|s| s.tag == tag)
    }

    /// Whether a snippet with exactly this tag exists
    pub fn contains_tag(&self, tag: &str) -> bool {
        self.find_by_tag(tag).is_some()
    }

    /// Returns a new store with `snippet` appended
    ///
    /// # Errors
    ///
    /// Returns `StoreError::EmptyTag` for a blank tag and
    /// `StoreError::DuplicateTag` if the tag is taken.
    pub fn inserted(&self, snippet: Snippet) -> StoreResult<Self> {
        if is_blank_tag(&snippet.tag) {
            return Err(StoreError::EmptyTag);
        }
        if self.contains_tag(&snippet.tag) {
            return Err(StoreError::DuplicateTag(snippet.tag));
        }

        let mut snippets = Vec::with_capacity(self.snippets.len() + 1);
        snippets.extend_from_slice(&self.snippets);
        snippets.push(snippet);
        Ok(Self { snippets })
    }

    /// Returns a new store without the snippet tagged `tag`, along with the
    /// removed snippet
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no snippet has this tag.
    pub fn removed(&self, tag: &str) -> StoreResult<(Self, Snippet)> {
        let index = self
            .snippets
            .iter()
            .position(|s| s.tag == tag)
            .ok_or_else(|| StoreError::NotFound(tag.to_string()))?;

        let mut snippets = self.snippets.clone();
        let removed = snippets.remove(index);
        Ok((Self { snippets }, removed))
    }
}
