use serde::{Deserialize, Serialize};

/// Lifecycle notifications the engine emits for one tab.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SessionEvent {
    TitleChanged(String),
    UrlChanged(String),
    LoadStarted,
    LoadProgress(u8),
    LoadFinished { ok: bool },
}

/// How long a status message stays visible, in milliseconds.
pub const SHORT_MESSAGE_MS: u32 = 3000;
pub const LONG_MESSAGE_MS: u32 = 5000;

/// A transient user-visible notification for the status bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub text: String,
    pub timeout_ms: u32,
}

impl StatusMessage {
    pub fn new(text: impl Into<String>, timeout_ms: u32) -> Self {
        Self {
            text: text.into(),
            timeout_ms,
        }
    }
}
