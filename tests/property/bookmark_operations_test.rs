//! Property-based tests for Bookmark Manager operations.
//!
//! The stored `bookmarks` array must always mirror an in-memory model of
//! the list, with indices contiguous from 0.

use arkbrowser::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use arkbrowser::services::settings_store::MemorySettingsStore;
use arkbrowser::services::sqlite_store::SqliteSettingsStore;
use arkbrowser::types::bookmark::Bookmark;
use proptest::prelude::*;

/// Strategy for generating valid URL strings.
fn arb_url() -> impl Strategy<Value = String> {
    (
        prop_oneof![Just("https"), Just("http")],
        "[a-z][a-z0-9]{2,10}",
        prop_oneof![Just(".org"), Just(".net"), Just(".io")],
        proptest::option::of("/[a-z0-9]{1,10}"),
    )
        .prop_map(|(scheme, host, tld, path)| {
            format!("{}://{}{}{}", scheme, host, tld, path.unwrap_or_default())
        })
}

fn arb_title() -> impl Strategy<Value = String> {
    "[a-zA-Z][a-zA-Z0-9 ]{0,30}"
}

// **Property 3: Add and remove mirror the model**
//
// *For any* list of bookmarks and *any* removal index sequence, reloading
// from the store SHALL yield exactly the model list.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn add_remove_matches_model(
        items in proptest::collection::vec((arb_title(), arb_url()), 0..8),
        removals in proptest::collection::vec(0usize..10, 0..5),
    ) {
        let mut store = MemorySettingsStore::new();
        let mut mgr = BookmarkManager::load(&store);
        let mut model: Vec<Bookmark> = Vec::new();

        for (title, url) in &items {
            let index = mgr.add_bookmark(&mut store, title, url).unwrap();
            prop_assert_eq!(index, model.len());
            model.push(Bookmark::new(title.as_str(), url.as_str()));
        }

        for index in removals {
            let result = mgr.remove_bookmark(&mut store, index);
            if index < model.len() {
                prop_assert_eq!(result.unwrap(), model.remove(index));
            } else {
                prop_assert!(result.is_err());
            }
        }

        let reloaded = BookmarkManager::load(&store);
        prop_assert_eq!(reloaded.list_bookmarks(), model.as_slice());
    }
}

// **Property 4: SQLite-backed bookmarks keep insertion order**
proptest! {
    #![proptest_config(ProptestConfig::with_cases(16))]

    #[test]
    fn sqlite_bookmarks_keep_order(
        items in proptest::collection::vec((arb_title(), arb_url()), 1..6),
    ) {
        let mut store = SqliteSettingsStore::open_in_memory().unwrap();
        let mut mgr = BookmarkManager::load(&store);
        for (title, url) in &items {
            mgr.add_bookmark(&mut store, title, url).unwrap();
        }
        let urls: Vec<String> = BookmarkManager::load(&store)
            .list_bookmarks()
            .iter()
            .map(|b| b.url.clone())
            .collect();
        let expected: Vec<String> = items.into_iter().map(|(_, url)| url).collect();
        prop_assert_eq!(urls, expected);
    }
}
