//! Download Tracker for arkbrowser.
//!
//! Keeps the list of downloads started by page content and follows the
//! engine's lifecycle events for them. Records are never dropped on their
//! own; only [`DownloadTracker::clear_completed`] removes finished ones.

use std::collections::VecDeque;
use std::fs;
use std::path::{Path, PathBuf};

use crate::types::download::{
    DownloadDecision, DownloadId, DownloadRecord, DownloadRequest, DownloadState,
};
use crate::types::errors::DownloadError;
use crate::types::events::{StatusMessage, LONG_MESSAGE_MS, SHORT_MESSAGE_MS};

/// Name used when the engine suggests nothing usable.
pub const FALLBACK_FILENAME: &str = "download";

#[derive(Debug, Default)]
pub struct DownloadTracker {
    records: Vec<DownloadRecord>,
    notifications: VecDeque<StatusMessage>,
}

impl DownloadTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reduces an engine-suggested name to a bare file name so a download
    /// can never escape its directory.
    pub fn sanitize_filename(suggested: &str) -> String {
        Path::new(suggested.trim())
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| FALLBACK_FILENAME.to_string())
    }

    /// Makes sure `dir` exists and returns where `filename` will be saved.
    pub fn prepare_destination(dir: &Path, filename: &str) -> Result<PathBuf, DownloadError> {
        fs::create_dir_all(dir).map_err(|e| DownloadError::DirectoryCreation {
            dir: dir.to_path_buf(),
            reason: e.to_string(),
        })?;
        Ok(dir.join(filename))
    }

    /// Accepts a new download into `dir`, creating the directory if needed.
    ///
    /// If the directory cannot be created the download is recorded as failed
    /// and the engine is told to reject it.
    pub fn on_download_requested(
        &mut self,
        request: &DownloadRequest,
        dir: &Path,
    ) -> (DownloadId, DownloadDecision) {
        let filename = Self::sanitize_filename(&request.suggested_filename);
        let id = DownloadId::new();

        let (state, decision) = match Self::prepare_destination(dir, &filename) {
            Ok(path) => {
                log::info!("Downloading {} to {}", request.url, path.display());
                self.notify(format!("Downloading: {}", filename), SHORT_MESSAGE_MS);
                (DownloadState::InProgress, DownloadDecision::Accept { path })
            }
            Err(e) => {
                log::warn!("Rejecting download of {}: {}", request.url, e);
                self.notify(format!("Download failed: {}", filename), LONG_MESSAGE_MS);
                let reason = e.to_string();
                (
                    DownloadState::Failed(reason.clone()),
                    DownloadDecision::Reject { reason },
                )
            }
        };

        self.records.push(DownloadRecord {
            id,
            url: request.url.clone(),
            filename,
            directory: dir.to_path_buf(),
            received: 0,
            total: 0,
            state,
        });
        (id, decision)
    }

    fn in_progress_mut(&mut self, id: DownloadId) -> Option<&mut DownloadRecord> {
        self.records
            .iter_mut()
            .find(|r| r.id == id && r.state == DownloadState::InProgress)
    }

    /// Updates byte counters of an in-progress download. Returns false for
    /// unknown or no-longer-running downloads.
    pub fn on_progress(&mut self, id: DownloadId, received: u64, total: u64) -> bool {
        match self.in_progress_mut(id) {
            Some(record) => {
                record.received = received;
                record.total = total;
                true
            }
            None => false,
        }
    }

    /// Marks a download finished and queues a completion notice.
    pub fn on_finished(&mut self, id: DownloadId) -> bool {
        let Some(record) = self.in_progress_mut(id) else {
            return false;
        };
        record.state = DownloadState::Finished;
        if record.total > 0 {
            record.received = record.total;
        }
        let filename = record.filename.clone();
        log::info!("Download complete: {}", filename);
        self.notify(format!("Download complete: {}", filename), LONG_MESSAGE_MS);
        true
    }

    pub fn on_failed(&mut self, id: DownloadId, reason: impl Into<String>) -> bool {
        let Some(record) = self.in_progress_mut(id) else {
            return false;
        };
        let reason = reason.into();
        log::warn!("Download of {} failed: {}", record.filename, reason);
        record.state = DownloadState::Failed(reason);
        let filename = record.filename.clone();
        self.notify(format!("Download failed: {}", filename), LONG_MESSAGE_MS);
        true
    }

    /// Removes every finished record; in-progress and failed ones stay.
    /// Returns how many were removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.records.len();
        self.records.retain(|r| !r.is_finished());
        before - self.records.len()
    }

    pub fn records(&self) -> &[DownloadRecord] {
        &self.records
    }

    pub fn get(&self, id: DownloadId) -> Option<&DownloadRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Most recent in-progress download of `url`. Engines that identify
    /// downloads only by URL use this to route their events.
    pub fn find_by_url(&self, url: &str) -> Option<DownloadId> {
        self.records
            .iter()
            .rev()
            .find(|r| r.url == url && r.state == DownloadState::InProgress)
            .map(|r| r.id)
    }

    fn notify(&mut self, text: String, timeout_ms: u32) {
        self.notifications.push_back(StatusMessage::new(text, timeout_ms));
    }

    /// Takes the queued user-visible notices, oldest first.
    pub fn take_notifications(&mut self) -> Vec<StatusMessage> {
        self.notifications.drain(..).collect()
    }
}
