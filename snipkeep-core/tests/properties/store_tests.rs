//! Property-based tests for the snippet store
//!
//! Inserted snippets round-trip through the JSON file, keep their insertion
//! order, never share a tag, and deletion removes exactly one snippet.

use proptest::prelude::*;
use snipkeep_core::{SnippetFile, SnippetManager, StoreError};
use std::collections::HashSet;
use tempfile::TempDir;

// Strategy for generating tags
fn arb_tag() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9_-]{0,15}".prop_map(|s| s)
}

// Strategy for generating snippet code, including multi-line and empty code
fn arb_code() -> impl Strategy<Value = String> {
    prop::collection::vec("[ -~]{0,30}", 0..6).prop_map(|lines| lines.join("\n"))
}

// Strategy for generating snippets with unique tags
fn arb_unique_snippets() -> impl Strategy<Value = Vec<(String, String)>> {
    prop::collection::hash_set(arb_tag(), 1..12).prop_flat_map(|tags| {
        let tags: Vec<String> = tags.into_iter().collect();
        let n = tags.len();
        prop::collection::vec(arb_code(), n)
            .prop_map(move |codes| tags.clone().into_iter().zip(codes).collect())
    })
}

fn create_manager() -> (SnippetManager, TempDir) {
    let temp_dir = TempDir::new().unwrap();
    let file = SnippetFile::new(temp_dir.path().join("snippets.json"));
    let manager = SnippetManager::new(file).unwrap();
    (manager, temp_dir)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(50))]

    /// Property: insert then lookup returns identical tag and code, also
    /// after reloading from disk
    #[test]
    fn insert_then_find_round_trips(tag in arb_tag(), code in arb_code()) {
        let (mut manager, _temp) = create_manager();
        manager.insert(&tag, &code).unwrap();

        let found = manager.find_by_tag(&tag).unwrap();
        prop_assert_eq!(&found.tag, &tag);
        prop_assert_eq!(&found.code, &code);

        let reopened = SnippetManager::new(manager.file().clone()).unwrap();
        let found = reopened.find_by_tag(&tag).unwrap();
        prop_assert_eq!(&found.code, &code);
    }

    /// Property: list_all after N inserts returns N snippets in insertion order
    #[test]
    fn list_preserves_insertion_order(snippets in arb_unique_snippets()) {
        let (mut manager, _temp) = create_manager();
        for (tag, code) in &snippets {
            manager.insert(tag, code).unwrap();
        }

        let reopened = SnippetManager::new(manager.file().clone()).unwrap();
        let listed: Vec<(String, String)> = reopened
            .list_all()
            .iter()
            .map(|s| (s.tag.clone(), s.code.clone()))
            .collect();

        prop_assert_eq!(listed, snippets);
    }

    /// Property: re-inserting any existing tag fails and leaves the store as it was
    #[test]
    fn duplicate_insert_fails(snippets in arb_unique_snippets(), pick in any::<prop::sample::Index>()) {
        let (mut manager, _temp) = create_manager();
        for (tag, code) in &snippets {
            manager.insert(tag, code).unwrap();
        }
        let before = manager.store().clone();
        let (tag, _) = &snippets[pick.index(snippets.len())];

        let err = manager.insert(tag, "other").unwrap_err();
        prop_assert!(matches!(err, StoreError::DuplicateTag(_)));
        prop_assert_eq!(manager.store(), &before);

        let reopened = SnippetManager::new(manager.file().clone()).unwrap();
        prop_assert_eq!(reopened.store(), &before);
    }

    /// Property: tags stay unique whatever sequence of inserts is attempted
    #[test]
    fn tags_stay_unique(tags in prop::collection::vec("[a-c]{1,2}", 1..30)) {
        let (mut manager, _temp) = create_manager();
        for tag in &tags {
            let _ = manager.insert(tag, "x");
        }

        let listed: Vec<&str> = manager.list_all().iter().map(|s| s.tag.as_str()).collect();
        let unique: HashSet<&str> = listed.iter().copied().collect();
        prop_assert_eq!(listed.len(), unique.len());

        let distinct_input: HashSet<&str> = tags.iter().map(String::as_str).collect();
        prop_assert_eq!(unique, distinct_input);
    }

    /// Property: deleting an existing tag removes exactly that snippet and
    /// keeps the others in order
    #[test]
    fn delete_preserves_order(snippets in arb_unique_snippets(), pick in any::<prop::sample::Index>()) {
        let (mut manager, _temp) = create_manager();
        for (tag, code) in &snippets {
            manager.insert(tag, code).unwrap();
        }
        let victim = pick.index(snippets.len());

        let removed = manager.delete_by_tag(&snippets[victim].0).unwrap();
        prop_assert_eq!(&removed.tag, &snippets[victim].0);

        let mut expected: Vec<String> = snippets.iter().map(|(t, _)| t.clone()).collect();
        expected.remove(victim);

        let reopened = SnippetManager::new(manager.file().clone()).unwrap();
        let listed: Vec<String> = reopened.list_all().iter().map(|s| s.tag.clone()).collect();
        prop_assert_eq!(listed, expected);
    }

    /// Property: deleting an unknown tag fails and changes nothing
    #[test]
    fn delete_missing_fails(snippets in arb_unique_snippets()) {
        let (mut manager, _temp) = create_manager();
        for (tag, code) in &snippets {
            manager.insert(tag, code).unwrap();
        }
        let before = manager.store().clone();

        // Generated tags start with a letter, so this one is never present
        let err = manager.delete_by_tag("0-missing").unwrap_err();
        prop_assert!(matches!(err, StoreError::NotFound(_)));
        prop_assert_eq!(manager.store(), &before);
    }
}
