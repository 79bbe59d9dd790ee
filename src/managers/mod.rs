// arkbrowser state managers
// Managers own mutable browser state: tab sessions, the tab strip, downloads and bookmarks.

pub mod bookmark_manager;
pub mod download_tracker;
pub mod tab_manager;
pub mod tab_session;
