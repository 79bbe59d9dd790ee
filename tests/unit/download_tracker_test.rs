//! Unit tests for the Download Tracker lifecycle.

use arkbrowser::managers::download_tracker::DownloadTracker;
use arkbrowser::types::download::{DownloadDecision, DownloadRequest, DownloadState};
use arkbrowser::types::events::{LONG_MESSAGE_MS, SHORT_MESSAGE_MS};
use tempfile::TempDir;

fn request(name: &str) -> DownloadRequest {
    DownloadRequest::new(format!("https://files.test/{}", name), name)
}

#[test]
fn test_request_creates_directory_and_accepts() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("Downloads");
    let mut tracker = DownloadTracker::new();

    let (id, decision) = tracker.on_download_requested(&request("report.pdf"), &dir);
    assert!(dir.is_dir());
    assert_eq!(decision, DownloadDecision::Accept { path: dir.join("report.pdf") });

    let record = tracker.get(id).unwrap();
    assert_eq!(record.state, DownloadState::InProgress);
    assert_eq!(record.path(), dir.join("report.pdf"));
    assert_eq!(record.label(), "Downloading: report.pdf");

    let notes = tracker.take_notifications();
    assert_eq!(notes.len(), 1);
    assert_eq!(notes[0].text, "Downloading: report.pdf");
    assert_eq!(notes[0].timeout_ms, SHORT_MESSAGE_MS);
    assert!(tracker.take_notifications().is_empty());
}

#[test]
fn test_uncreatable_directory_rejects() {
    let tmp = TempDir::new().unwrap();
    let blocker = tmp.path().join("not-a-dir");
    std::fs::write(&blocker, b"file").unwrap();
    let dir = blocker.join("Downloads");
    let mut tracker = DownloadTracker::new();

    let (id, decision) = tracker.on_download_requested(&request("a.zip"), &dir);
    assert!(matches!(decision, DownloadDecision::Reject { .. }));
    assert!(matches!(tracker.get(id).unwrap().state, DownloadState::Failed(_)));
    assert!(!tracker.on_progress(id, 1, 2));
}

#[test]
fn test_progress_percentage() {
    let tmp = TempDir::new().unwrap();
    let mut tracker = DownloadTracker::new();
    let (id, _) = tracker.on_download_requested(&request("big.iso"), tmp.path());

    assert_eq!(tracker.get(id).unwrap().percent(), None);
    assert!(tracker.on_progress(id, 1, 3));
    assert_eq!(tracker.get(id).unwrap().percent(), Some(33));
    assert!(tracker.on_progress(id, 999, 1000));
    assert_eq!(tracker.get(id).unwrap().percent(), Some(99));
    assert_eq!(tracker.get(id).unwrap().label(), "Downloading: big.iso - 99%");
    assert!(tracker.on_progress(id, 50, 0));
    assert_eq!(tracker.get(id).unwrap().percent(), None);
}

#[test]
fn test_finish_queues_completion_notice() {
    let tmp = TempDir::new().unwrap();
    let mut tracker = DownloadTracker::new();
    let (id, _) = tracker.on_download_requested(&request("a.txt"), tmp.path());
    tracker.take_notifications();

    assert!(tracker.on_finished(id));
    assert!(tracker.get(id).unwrap().is_finished());
    let notes = tracker.take_notifications();
    assert_eq!(notes[0].text, "Download complete: a.txt");
    assert_eq!(notes[0].timeout_ms, LONG_MESSAGE_MS);

    // Already finished.
    assert!(!tracker.on_finished(id));
    assert!(!tracker.on_failed(id, "late"));
}

#[test]
fn test_clear_completed_keeps_running_and_failed() {
    let tmp = TempDir::new().unwrap();
    let mut tracker = DownloadTracker::new();
    let (a, _) = tracker.on_download_requested(&request("a.bin"), tmp.path());
    let (b, _) = tracker.on_download_requested(&request("b.bin"), tmp.path());
    let (c, _) = tracker.on_download_requested(&request("c.bin"), tmp.path());
    let (d, _) = tracker.on_download_requested(&request("d.bin"), tmp.path());
    tracker.on_finished(b);
    tracker.on_finished(c);
    tracker.on_failed(d, "network error");

    assert_eq!(tracker.clear_completed(), 2);
    let ids: Vec<_> = tracker.records().iter().map(|r| r.id).collect();
    assert_eq!(ids, vec![a, d]);
    assert_eq!(tracker.get(d).unwrap().label(), "Failed: d.bin (network error)");
}

#[test]
fn test_find_by_url_returns_running_download() {
    let tmp = TempDir::new().unwrap();
    let mut tracker = DownloadTracker::new();
    let (first, _) = tracker.on_download_requested(&request("a.bin"), tmp.path());
    tracker.on_finished(first);
    let (second, _) = tracker.on_download_requested(&request("a.bin"), tmp.path());

    assert_eq!(tracker.find_by_url("https://files.test/a.bin"), Some(second));
    assert_eq!(tracker.find_by_url("https://files.test/missing"), None);
}

#[test]
fn test_suggested_name_cannot_escape_directory() {
    let tmp = TempDir::new().unwrap();
    let mut tracker = DownloadTracker::new();
    let req = DownloadRequest::new("https://files.test/x", "../../evil.sh");
    let (_, decision) = tracker.on_download_requested(&req, tmp.path());
    assert_eq!(decision, DownloadDecision::Accept { path: tmp.path().join("evil.sh") });
}

#[test]
fn test_request_from_url_uses_last_segment() {
    let req = DownloadRequest::from_url("https://files.test/dir/archive.tar.gz?token=1#frag");
    assert_eq!(req.suggested_filename, "archive.tar.gz");
}
