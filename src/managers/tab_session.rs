//! One browsing context: a navigable view plus the state the UI shows for it.

use crate::engine::{self, EventSink, NavigableView, Subscription, ViewFactory};
use crate::services::profile::SharedProfile;
use crate::types::events::SessionEvent;
use crate::types::tab::{display_title, LoadState, NavAvailability, TabId, TabSnapshot};

/// Label used until the page reports a title.
pub const NEW_TAB_TITLE: &str = "New Tab";

pub struct TabSession {
    id: TabId,
    title: String,
    full_title: String,
    url: String,
    target: String,
    load_state: LoadState,
    view: Box<dyn NavigableView>,
    sink: EventSink,
}

impl TabSession {
    /// Creates a view bound to `profile` and starts loading `initial_url`.
    ///
    /// The returned [`Subscription`] is the only receiver of the view's
    /// events; whoever owns the session is expected to hold it until teardown.
    pub fn create(
        initial_url: &str,
        profile: SharedProfile,
        factory: &mut dyn ViewFactory,
    ) -> (Self, Subscription) {
        let (sink, subscription) = engine::channel();
        let view = factory.create_view(profile, sink.clone());
        let mut session = Self {
            id: TabId::new(),
            title: NEW_TAB_TITLE.to_string(),
            full_title: String::new(),
            url: String::new(),
            target: String::new(),
            load_state: LoadState::Idle,
            view,
            sink,
        };
        session.navigate(initial_url);
        (session, subscription)
    }

    pub fn id(&self) -> TabId {
        self.id
    }

    /// Title as shown on the tab label, at most 20 characters.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Untruncated page title, empty until the page reports one.
    pub fn full_title(&self) -> &str {
        &self.full_title
    }

    /// Last URL the engine reported for this tab.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Last URL this tab was asked to load.
    pub fn target_url(&self) -> &str {
        &self.target
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    /// Replaces the current load target; the view records the history entry.
    pub fn navigate(&mut self, url: &str) {
        log::debug!("Tab {} loading {}", self.id, url);
        self.target = url.to_string();
        self.view.load(url);
    }

    pub fn go_back(&mut self) {
        if self.view.can_go_back() {
            self.view.back();
        }
    }

    pub fn go_forward(&mut self) {
        if self.view.can_go_forward() {
            self.view.forward();
        }
    }

    pub fn reload(&mut self) {
        self.view.reload();
    }

    pub fn can_go_back(&self) -> bool {
        self.view.can_go_back()
    }

    pub fn can_go_forward(&self) -> bool {
        self.view.can_go_forward()
    }

    pub fn navigation_availability(&self) -> NavAvailability {
        NavAvailability {
            can_go_back: self.can_go_back(),
            can_go_forward: self.can_go_forward(),
        }
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.view.set_visible(visible);
    }

    /// A sender engine adapters can push this tab's events into.
    pub fn event_sink(&self) -> EventSink {
        self.sink.clone()
    }

    /// Folds one engine event into the tab's own state.
    pub fn apply(&mut self, event: &SessionEvent) {
        match event {
            SessionEvent::TitleChanged(title) => {
                self.full_title = title.clone();
                self.title = display_title(title);
            }
            SessionEvent::UrlChanged(url) => self.url = url.clone(),
            SessionEvent::LoadStarted => self.load_state = LoadState::Loading { progress: 0 },
            SessionEvent::LoadProgress(progress) => {
                self.load_state = LoadState::Loading {
                    progress: (*progress).min(100),
                }
            }
            SessionEvent::LoadFinished { ok } => {
                if !ok {
                    log::info!("Tab {} failed to load {}", self.id, self.target);
                }
                self.load_state = LoadState::Idle;
            }
        }
    }

    pub fn snapshot(&self, active: bool) -> TabSnapshot {
        TabSnapshot {
            id: self.id,
            title: self.title.clone(),
            url: self.url.clone(),
            load_state: self.load_state,
            active,
        }
    }

    /// Closes the view. The session must not be used afterwards.
    pub fn teardown(mut self) {
        log::debug!("Tearing down tab {}", self.id);
        self.view.close();
    }
}
