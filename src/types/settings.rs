use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::platform;

/// Home page used when the store has none.
pub const DEFAULT_HOME_PAGE: &str = "https://www.google.com";

/// Keys recognized in the settings store.
pub mod keys {
    pub const DARK_MODE: &str = "darkMode";
    pub const AD_BLOCKER: &str = "adBlocker";
    pub const CURSOR_LOCK: &str = "cursorLock";
    pub const HOME_PAGE: &str = "homePage";
    pub const DOWNLOAD_DIR: &str = "downloadDir";
    /// Positional array of `{title, url}` entries.
    pub const BOOKMARKS: &str = "bookmarks";
}

/// User preferences persisted across sessions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Preferences {
    pub dark_mode: bool,
    pub ad_blocker: bool,
    pub cursor_lock: bool,
    pub home_page: String,
    pub download_dir: PathBuf,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            ad_blocker: true,
            cursor_lock: true,
            home_page: DEFAULT_HOME_PAGE.to_string(),
            download_dir: platform::get_download_dir(),
        }
    }
}
