//! Bookmark Manager for arkbrowser.
//!
//! Implements `BookmarkManagerTrait`: an ordered list of (title, url) pairs
//! persisted as the `bookmarks` array of a [`SettingsStore`]. Every change
//! starts from the stored array, since another window may have written it
//! since `load`, and rewrites it whole so indices stay contiguous from 0.

use serde_json::Value;

use crate::services::settings_store::{ArrayEntry, SettingsStore};
use crate::types::bookmark::Bookmark;
use crate::types::errors::BookmarkError;
use crate::types::settings::keys;

const TITLE_KEY: &str = "title";
const URL_KEY: &str = "url";

/// Trait defining bookmark list operations.
pub trait BookmarkManagerTrait {
    /// Appends a bookmark and returns its index.
    fn add_bookmark(&mut self, store: &mut dyn SettingsStore, title: &str, url: &str) -> Result<usize, BookmarkError>;
    /// Removes the bookmark at `index`; later entries shift down by one.
    fn remove_bookmark(&mut self, store: &mut dyn SettingsStore, index: usize) -> Result<Bookmark, BookmarkError>;
    fn list_bookmarks(&self) -> &[Bookmark];
}

#[derive(Debug, Clone, Default)]
pub struct BookmarkManager {
    items: Vec<Bookmark>,
}

impl BookmarkManager {
    /// Loads the persisted list. Entries without a string `url` are skipped.
    pub fn load(store: &dyn SettingsStore) -> Self {
        Self {
            items: read_bookmarks(store),
        }
    }

    pub fn get(&self, index: usize) -> Option<&Bookmark> {
        self.items.get(index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn persist(&self, store: &mut dyn SettingsStore) -> Result<(), BookmarkError> {
        let entries: Vec<ArrayEntry> = self.items.iter().map(to_entry).collect();
        store.write_array(keys::BOOKMARKS, &entries)?;
        Ok(())
    }
}

impl BookmarkManagerTrait for BookmarkManager {
    fn add_bookmark(&mut self, store: &mut dyn SettingsStore, title: &str, url: &str) -> Result<usize, BookmarkError> {
        self.items = read_bookmarks(store);
        self.items.push(Bookmark::new(title, url));
        if let Err(e) = self.persist(store) {
            self.items.pop();
            return Err(e);
        }
        log::info!("Bookmarked {}", url);
        Ok(self.items.len() - 1)
    }

    fn remove_bookmark(&mut self, store: &mut dyn SettingsStore, index: usize) -> Result<Bookmark, BookmarkError> {
        self.items = read_bookmarks(store);
        if index >= self.items.len() {
            return Err(BookmarkError::IndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }
        let removed = self.items.remove(index);
        if let Err(e) = self.persist(store) {
            self.items.insert(index, removed);
            return Err(e);
        }
        log::info!("Removed bookmark {}", removed.url);
        Ok(removed)
    }

    fn list_bookmarks(&self) -> &[Bookmark] {
        &self.items
    }
}

fn read_bookmarks(store: &dyn SettingsStore) -> Vec<Bookmark> {
    store
        .read_array(keys::BOOKMARKS)
        .iter()
        .filter_map(|entry| {
            let url = entry.get(URL_KEY)?.as_str()?;
            let title = entry.get(TITLE_KEY).and_then(Value::as_str).unwrap_or(url);
            Some(Bookmark::new(title, url))
        })
        .collect()
}

fn to_entry(bookmark: &Bookmark) -> ArrayEntry {
    let mut entry = ArrayEntry::new();
    entry.insert(TITLE_KEY.to_string(), Value::String(bookmark.title.clone()));
    entry.insert(URL_KEY.to_string(), Value::String(bookmark.url.clone()));
    entry
}
