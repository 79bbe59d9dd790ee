use serde::{Deserialize, Serialize};

/// Represents a saved bookmark.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bookmark {
    pub title: String,
    pub url: String,
}

impl Bookmark {
    pub fn new(title: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            url: url.into(),
        }
    }

    /// `title - url`, as shown in the bookmarks list.
    pub fn label(&self) -> String {
        format!("{} - {}", self.title, self.url)
    }
}
