use std::path::PathBuf;

use thiserror::Error;

// === StoreError ===

/// Errors raised by a settings store backend.
///
/// Reads never surface these: a missing or unreadable value reads as absent
/// and the caller falls back to its default. Only writes report failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// An I/O error occurred while reading or writing the backing file.
    #[error("Settings I/O error: {0}")]
    Io(String),
    /// Failed to serialize or deserialize settings.
    #[error("Settings serialization error: {0}")]
    Serialization(String),
    /// The SQLite backend rejected a statement.
    #[error("Settings database error: {0}")]
    Database(String),
}

impl From<rusqlite::Error> for StoreError {
    fn from(err: rusqlite::Error) -> Self {
        StoreError::Database(err.to_string())
    }
}

impl From<serde_json::Error> for StoreError {
    fn from(err: serde_json::Error) -> Self {
        StoreError::Serialization(err.to_string())
    }
}

// === BookmarkError ===

/// Errors related to bookmark list operations.
#[derive(Debug, Error)]
pub enum BookmarkError {
    /// No bookmark exists at the given position.
    #[error("No bookmark at index {index} (list has {len})")]
    IndexOutOfRange { index: usize, len: usize },
    /// The bookmark list could not be written back to the store.
    #[error(transparent)]
    Store(#[from] StoreError),
}

// === DownloadError ===

/// Errors related to download tracking.
#[derive(Debug, Error)]
pub enum DownloadError {
    /// The destination directory did not exist and could not be created.
    #[error("Cannot create download directory {}: {reason}", dir.display())]
    DirectoryCreation { dir: PathBuf, reason: String },
}

// === AppError ===

/// Errors raised while assembling or reconfiguring the application.
#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Bookmark(#[from] BookmarkError),
    /// The native window or a web view could not be created.
    #[error("Window error: {0}")]
    Window(String),
}
