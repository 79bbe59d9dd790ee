//! App Core for arkbrowser.
//!
//! Central struct wiring the settings store, the shared profile and the state
//! managers together. Front ends (the wry window or the console walkthrough)
//! drive it and call [`App::pump`] after engine callbacks.

use serde_json::Value;

use crate::engine::ViewFactory;
use crate::managers::bookmark_manager::{BookmarkManager, BookmarkManagerTrait};
use crate::managers::download_tracker::DownloadTracker;
use crate::managers::tab_manager::TabManager;
use crate::platform;
use crate::services::profile::{BrowserProfile, SharedProfile};
use crate::services::settings_store::{load_preferences, save_preferences, JsonSettingsStore, SettingsStore};
use crate::services::sqlite_store::SqliteSettingsStore;
use crate::types::bookmark::Bookmark;
use crate::types::download::{DownloadDecision, DownloadId, DownloadRecord, DownloadRequest};
use crate::types::errors::{AppError, StoreError};
use crate::types::events::{StatusMessage, SHORT_MESSAGE_MS};
use crate::types::permission::{PageFeature, PermissionDecision};
use crate::types::settings::{keys, Preferences};

pub struct App {
    store: Box<dyn SettingsStore>,
    preferences: Preferences,
    profile: SharedProfile,
    tabs: TabManager,
    downloads: DownloadTracker,
    bookmarks: BookmarkManager,
    status: Option<StatusMessage>,
}

impl App {
    /// Reads preferences and bookmarks from `store` and opens the first tab
    /// on the configured home page.
    pub fn new(store: Box<dyn SettingsStore>, factory: Box<dyn ViewFactory>) -> Self {
        let preferences = load_preferences(store.as_ref());
        let profile = BrowserProfile::from_preferences(&preferences).shared();
        let bookmarks = BookmarkManager::load(store.as_ref());
        log::info!(
            "Starting with home page {} (ad blocker {}, {} bookmarks)",
            preferences.home_page,
            if preferences.ad_blocker { "on" } else { "off" },
            bookmarks.len()
        );
        let tabs = TabManager::new(preferences.home_page.clone(), profile.clone(), factory);
        Self {
            store,
            preferences,
            profile,
            tabs,
            downloads: DownloadTracker::new(),
            bookmarks,
            status: None,
        }
    }

    /// Uses the JSON settings file in the platform config directory.
    pub fn with_default_store(factory: Box<dyn ViewFactory>) -> Self {
        let path = platform::settings_path();
        log::debug!("Settings file: {}", path.display());
        Self::new(Box::new(JsonSettingsStore::open(path)), factory)
    }

    /// Uses the SQLite settings database in the platform data directory.
    pub fn with_sqlite_store(factory: Box<dyn ViewFactory>) -> Result<Self, AppError> {
        let path = platform::database_path();
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| StoreError::Io(format!("Failed to create data directory: {}", e)))?;
        }
        log::debug!("Settings database: {}", path.display());
        let store = SqliteSettingsStore::open(&path)?;
        Ok(Self::new(Box::new(store), factory))
    }

    /// Picks the settings backend named by `ARKBROWSER_STORE`.
    pub fn open(factory: Box<dyn ViewFactory>) -> Result<Self, AppError> {
        match std::env::var(platform::STORE_ENV).as_deref() {
            Ok("sqlite") => Self::with_sqlite_store(factory),
            _ => Ok(Self::with_default_store(factory)),
        }
    }

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn profile(&self) -> &SharedProfile {
        &self.profile
    }

    pub fn store(&self) -> &dyn SettingsStore {
        self.store.as_ref()
    }

    pub fn tabs(&self) -> &TabManager {
        &self.tabs
    }

    pub fn tabs_mut(&mut self) -> &mut TabManager {
        &mut self.tabs
    }

    /// Latest user-visible notice, if any.
    pub fn status_message(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn take_status_message(&mut self) -> Option<StatusMessage> {
        self.status.take()
    }

    fn show_status(&mut self, text: impl Into<String>, timeout_ms: u32) {
        self.status = Some(StatusMessage::new(text, timeout_ms));
    }

    // === Preferences ===

    /// Persists the ad-blocker flag, applies it to every tab's next request
    /// and reloads the current page.
    pub fn set_ad_blocker(&mut self, enabled: bool) -> Result<(), AppError> {
        self.store.set_value(keys::AD_BLOCKER, Value::Bool(enabled))?;
        self.preferences.ad_blocker = enabled;
        self.profile.set_ad_blocker_enabled(enabled);
        self.tabs.reload();
        let state = if enabled { "enabled" } else { "disabled" };
        log::info!("Ad blocker {}", state);
        self.show_status(format!("Ad blocker {}", state), SHORT_MESSAGE_MS);
        Ok(())
    }

    /// Saves every preference, then updates the profile and home page and
    /// reloads all tabs.
    pub fn apply_preferences(&mut self, prefs: Preferences) -> Result<(), AppError> {
        save_preferences(self.store.as_mut(), &prefs)?;
        self.profile.set_ad_blocker_enabled(prefs.ad_blocker);
        self.profile.set_cursor_lock_enabled(prefs.cursor_lock);
        self.tabs.set_home_page(prefs.home_page.clone());
        self.preferences = prefs;
        self.tabs.reload_all();
        log::info!("Preferences applied");
        Ok(())
    }

    // === Bookmarks ===

    pub fn bookmarks(&self) -> &[Bookmark] {
        self.bookmarks.list_bookmarks()
    }

    /// Bookmarks the active tab under its tab label. Returns the new index.
    pub fn bookmark_current_tab(&mut self) -> Result<usize, AppError> {
        let session = self.tabs.current_session();
        let url = if session.url().is_empty() {
            session.target_url().to_string()
        } else {
            session.url().to_string()
        };
        let title = session.title().to_string();
        let index = self.bookmarks.add_bookmark(self.store.as_mut(), &title, &url)?;
        Ok(index)
    }

    /// Loads bookmark `index` in the active tab. Returns false if there is none.
    pub fn open_bookmark(&mut self, index: usize) -> bool {
        let Some(url) = self.bookmarks.get(index).map(|b| b.url.clone()) else {
            return false;
        };
        self.tabs.navigate(&url).is_some()
    }

    pub fn remove_bookmark(&mut self, index: usize) -> Result<Bookmark, AppError> {
        Ok(self.bookmarks.remove_bookmark(self.store.as_mut(), index)?)
    }

    // === Engine entry points ===

    /// Accepts a download into the configured download directory.
    pub fn on_download_requested(&mut self, request: &DownloadRequest) -> (DownloadId, DownloadDecision) {
        let dir = self.preferences.download_dir.clone();
        self.downloads.on_download_requested(request, &dir)
    }

    pub fn on_download_progress(&mut self, id: DownloadId, received: u64, total: u64) -> bool {
        self.downloads.on_progress(id, received, total)
    }

    pub fn on_download_finished(&mut self, id: DownloadId) -> bool {
        self.downloads.on_finished(id)
    }

    pub fn on_download_failed(&mut self, id: DownloadId, reason: &str) -> bool {
        self.downloads.on_failed(id, reason)
    }

    pub fn downloads(&self) -> &[DownloadRecord] {
        self.downloads.records()
    }

    pub fn download_tracker(&self) -> &DownloadTracker {
        &self.downloads
    }

    pub fn clear_completed_downloads(&mut self) -> usize {
        self.downloads.clear_completed()
    }

    pub fn decide_permission(&self, feature: PageFeature) -> PermissionDecision {
        let decision = self.profile.decide_permission(feature);
        log::debug!("Permission {:?}: {:?}", feature, decision);
        decision
    }

    /// Applies queued tab events and surfaces the newest download notice.
    /// Returns the number of tab events processed.
    pub fn pump(&mut self) -> usize {
        let processed = self.tabs.pump_events();
        if let Some(latest) = self.downloads.take_notifications().pop() {
            self.status = Some(latest);
        }
        processed
    }
}
