use std::path::PathBuf;

use arkbrowser::types::errors::*;

// === StoreError Tests ===

#[test]
fn store_error_display_variants() {
    assert_eq!(
        StoreError::Io("disk full".to_string()).to_string(),
        "Settings I/O error: disk full"
    );
    assert_eq!(
        StoreError::Serialization("bad json".to_string()).to_string(),
        "Settings serialization error: bad json"
    );
    assert_eq!(
        StoreError::Database("locked".to_string()).to_string(),
        "Settings database error: locked"
    );
}

#[test]
fn store_error_from_serde_json() {
    let err = serde_json::from_str::<serde_json::Value>("{not json").unwrap_err();
    let store: StoreError = err.into();
    assert!(matches!(store, StoreError::Serialization(_)));
}

#[test]
fn store_error_from_rusqlite() {
    let store: StoreError = rusqlite::Error::QueryReturnedNoRows.into();
    assert!(matches!(store, StoreError::Database(_)));
}

// === BookmarkError Tests ===

#[test]
fn bookmark_error_index_display() {
    let err = BookmarkError::IndexOutOfRange { index: 4, len: 2 };
    assert_eq!(err.to_string(), "No bookmark at index 4 (list has 2)");
}

#[test]
fn bookmark_error_wraps_store_error_transparently() {
    let err: BookmarkError = StoreError::Io("read-only".to_string()).into();
    assert_eq!(err.to_string(), "Settings I/O error: read-only");
}

// === DownloadError Tests ===

#[test]
fn download_error_directory_display() {
    let err = DownloadError::DirectoryCreation {
        dir: PathBuf::from("/nowhere/downloads"),
        reason: "permission denied".to_string(),
    };
    assert_eq!(
        err.to_string(),
        "Cannot create download directory /nowhere/downloads: permission denied"
    );
}

// === AppError Tests ===

#[test]
fn app_error_conversions() {
    let from_store: AppError = StoreError::Io("x".to_string()).into();
    assert!(matches!(from_store, AppError::Store(_)));

    let from_bookmark: AppError = BookmarkError::IndexOutOfRange { index: 0, len: 0 }.into();
    assert!(matches!(from_bookmark, AppError::Bookmark(_)));

    assert_eq!(AppError::Window("no display".to_string()).to_string(), "Window error: no display");
}

#[test]
fn errors_implement_error_trait() {
    let err: Box<dyn std::error::Error> = Box::new(StoreError::Io("x".to_string()));
    assert!(err.source().is_none());
}
