use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Longest title shown on a tab label before it is shortened.
pub const TITLE_DISPLAY_LIMIT: usize = 20;

const ELLIPSIS: &str = "...";

/// Opaque identity of a tab, stable for the lifetime of the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TabId(Uuid);

impl TabId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for TabId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for TabId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Page load lifecycle of one tab.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum LoadState {
    #[default]
    Idle,
    Loading { progress: u8 },
}

impl LoadState {
    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading { .. })
    }

    /// Value for a progress indicator: visible only while loading and below 100.
    pub fn indicator(&self) -> Option<u8> {
        match *self {
            LoadState::Loading { progress } if progress < 100 => Some(progress),
            _ => None,
        }
    }
}

/// Whether the history of the active tab allows going back or forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct NavAvailability {
    pub can_go_back: bool,
    pub can_go_forward: bool,
}

/// What the window chrome shows for the active tab.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ChromeState {
    pub address_bar: String,
    pub progress: Option<u8>,
    pub navigation: NavAvailability,
}

/// Read-only view of a tab for presentation layers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabSnapshot {
    pub id: TabId,
    pub title: String,
    pub url: String,
    pub load_state: LoadState,
    pub active: bool,
}

/// Shortens a page title for a tab label.
///
/// Titles longer than [`TITLE_DISPLAY_LIMIT`] characters keep their first 17
/// characters followed by `...`, so the label is exactly 20 characters.
pub fn display_title(title: &str) -> String {
    if title.chars().count() <= TITLE_DISPLAY_LIMIT {
        return title.to_string();
    }
    let keep = TITLE_DISPLAY_LIMIT - ELLIPSIS.len();
    let mut shortened: String = title.chars().take(keep).collect();
    shortened.push_str(ELLIPSIS);
    shortened
}
