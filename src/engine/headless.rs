//! In-process engine without rendering.
//!
//! Loads complete synchronously: each `load` emits the whole
//! started/url/title/progress/finished sequence at once. Used by the console
//! walkthrough and by tests; page titles can be registered up front, other
//! pages are titled with their URL.

use std::collections::HashMap;
use std::sync::Arc;

use crate::engine::history::NavigationHistory;
use crate::engine::{EventSink, NavigableView, ViewFactory};
use crate::services::profile::SharedProfile;
use crate::types::events::SessionEvent;
use crate::types::permission::RequestDecision;

#[derive(Debug, Clone, Default)]
pub struct HeadlessEngine {
    titles: Arc<HashMap<String, String>>,
    views_created: usize,
}

impl HeadlessEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the `<title>` a page reports once loaded.
    pub fn with_page(mut self, url: impl Into<String>, title: impl Into<String>) -> Self {
        Arc::make_mut(&mut self.titles).insert(url.into(), title.into());
        self
    }

    pub fn views_created(&self) -> usize {
        self.views_created
    }
}

impl ViewFactory for HeadlessEngine {
    fn create_view(&mut self, profile: SharedProfile, events: EventSink) -> Box<dyn NavigableView> {
        self.views_created += 1;
        Box::new(HeadlessView {
            profile,
            events,
            titles: Arc::clone(&self.titles),
            history: NavigationHistory::new(),
        })
    }
}

pub struct HeadlessView {
    profile: SharedProfile,
    events: EventSink,
    titles: Arc<HashMap<String, String>>,
    history: NavigationHistory,
}

impl HeadlessView {
    fn title_for(&self, url: &str) -> String {
        self.titles.get(url).cloned().unwrap_or_else(|| url.to_string())
    }

    fn show_current(&self) {
        let Some(url) = self.history.current() else {
            return;
        };
        self.events.emit(SessionEvent::LoadStarted);
        self.events.emit(SessionEvent::UrlChanged(url.to_string()));
        self.events.emit(SessionEvent::TitleChanged(self.title_for(url)));
        self.events.emit(SessionEvent::LoadProgress(100));
        self.events.emit(SessionEvent::LoadFinished { ok: true });
    }
}

impl NavigableView for HeadlessView {
    fn load(&mut self, url: &str) {
        if self.profile.intercept_request(url) == RequestDecision::Block {
            self.events.emit(SessionEvent::LoadStarted);
            self.events.emit(SessionEvent::LoadFinished { ok: false });
            return;
        }
        self.history.push(url);
        self.show_current();
    }

    fn back(&mut self) {
        if self.history.back().is_some() {
            self.show_current();
        }
    }

    fn forward(&mut self) {
        if self.history.forward().is_some() {
            self.show_current();
        }
    }

    fn reload(&mut self) {
        if self.history.current().is_some() {
            self.events.emit(SessionEvent::LoadStarted);
            self.events.emit(SessionEvent::LoadFinished { ok: true });
        }
    }

    fn can_go_back(&self) -> bool {
        self.history.can_go_back()
    }

    fn can_go_forward(&self) -> bool {
        self.history.can_go_forward()
    }

    fn url(&self) -> String {
        self.history.current().unwrap_or_default().to_string()
    }
}
