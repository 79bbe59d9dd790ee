use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Opaque identity of a tracked download.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DownloadId(Uuid);

impl DownloadId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for DownloadId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for DownloadId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Status of a file download.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum DownloadState {
    InProgress,
    Finished,
    Failed(String),
}

/// A download requested by page content, as reported by the engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadRequest {
    pub url: String,
    pub suggested_filename: String,
}

impl DownloadRequest {
    pub fn new(url: impl Into<String>, suggested_filename: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            suggested_filename: suggested_filename.into(),
        }
    }

    /// Derives a filename from the last path segment of the URL.
    pub fn from_url(url: impl Into<String>) -> Self {
        let url = url.into();
        let name = url
            .split(['?', '#'])
            .next()
            .unwrap_or_default()
            .rsplit('/')
            .next()
            .unwrap_or_default()
            .to_string();
        Self {
            url,
            suggested_filename: name,
        }
    }
}

/// Answer handed back to the engine for a download request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DownloadDecision {
    Accept { path: PathBuf },
    Reject { reason: String },
}

/// Tracked state of one file transfer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DownloadRecord {
    pub id: DownloadId,
    pub url: String,
    pub filename: String,
    pub directory: PathBuf,
    pub received: u64,
    pub total: u64,
    pub state: DownloadState,
}

impl DownloadRecord {
    /// Whole-number percentage, defined only once the total size is known.
    pub fn percent(&self) -> Option<u8> {
        if self.total == 0 {
            return None;
        }
        let pct = (u128::from(self.received) * 100 / u128::from(self.total)).min(100);
        Some(pct as u8)
    }

    pub fn path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }

    pub fn is_finished(&self) -> bool {
        self.state == DownloadState::Finished
    }

    /// One-line description for a downloads list.
    pub fn label(&self) -> String {
        match (&self.state, self.percent()) {
            (DownloadState::InProgress, Some(pct)) => {
                format!("Downloading: {} - {}%", self.filename, pct)
            }
            (DownloadState::InProgress, None) => format!("Downloading: {}", self.filename),
            (DownloadState::Finished, _) => format!("Completed: {}", self.filename),
            (DownloadState::Failed(reason), _) => format!("Failed: {} ({})", self.filename, reason),
        }
    }
}
