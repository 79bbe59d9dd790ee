//! Back/forward history for a single view.

/// Ordered visited URLs with a cursor on the current entry.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavigationHistory {
    entries: Vec<String>,
    position: Option<usize>,
}

impl NavigationHistory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a new visit and discards forward entries. Navigating to the
    /// current URL keeps a single entry for it. Reloads must not call this.
    pub fn push(&mut self, url: &str) {
        let keep = self.position.map_or(0, |p| p + 1);
        self.entries.truncate(keep);
        if self.current() == Some(url) {
            return;
        }
        self.entries.push(url.to_string());
        self.position = Some(self.entries.len() - 1);
    }

    pub fn current(&self) -> Option<&str> {
        self.position.map(|p| self.entries[p].as_str())
    }

    pub fn can_go_back(&self) -> bool {
        matches!(self.position, Some(p) if p > 0)
    }

    pub fn can_go_forward(&self) -> bool {
        matches!(self.position, Some(p) if p + 1 < self.entries.len())
    }

    /// Moves the cursor back and returns the new current URL.
    pub fn back(&mut self) -> Option<&str> {
        if !self.can_go_back() {
            return None;
        }
        self.position = self.position.map(|p| p - 1);
        self.current()
    }

    pub fn forward(&mut self) -> Option<&str> {
        if !self.can_go_forward() {
            return None;
        }
        self.position = self.position.map(|p| p + 1);
        self.current()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
