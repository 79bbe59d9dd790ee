//! Tab Manager for arkbrowser.
//!
//! Owns the ordered tab sessions, the active-tab pointer, and the address bar
//! and progress indicator shown for the active tab. The manager is created
//! with one tab and never drops to zero: closing the last tab sends it back to
//! the home page instead.

use crate::engine::{EventSink, Subscription, ViewFactory};
use crate::managers::tab_session::TabSession;
use crate::services::navigation_resolver::NavigationResolver;
use crate::services::profile::SharedProfile;
use crate::types::events::SessionEvent;
use crate::types::tab::{ChromeState, NavAvailability, TabId, TabSnapshot};

/// A session together with the manager's subscription to its events.
struct SessionSlot {
    session: TabSession,
    subscription: Subscription,
}

pub struct TabManager {
    slots: Vec<SessionSlot>,
    active: usize,
    home_page: String,
    profile: SharedProfile,
    factory: Box<dyn ViewFactory>,
    resolver: NavigationResolver,
    address_bar: String,
    progress: Option<u8>,
}

impl TabManager {
    /// Creates the manager with a single tab showing `home_page`.
    pub fn new(home_page: impl Into<String>, profile: SharedProfile, factory: Box<dyn ViewFactory>) -> Self {
        let mut manager = Self {
            slots: Vec::new(),
            active: 0,
            home_page: home_page.into(),
            profile,
            factory,
            resolver: NavigationResolver::default(),
            address_bar: String::new(),
            progress: None,
        };
        manager.add_tab(None);
        manager
    }

    pub fn with_resolver(mut self, resolver: NavigationResolver) -> Self {
        self.resolver = resolver;
        self
    }

    fn index_of(&self, id: TabId) -> Option<usize> {
        self.slots.iter().position(|slot| slot.session.id() == id)
    }

    fn current_mut(&mut self) -> &mut TabSession {
        &mut self.slots[self.active].session
    }

    /// Makes `index` the active tab and resyncs the chrome. The previously
    /// active view, if still present, must already be hidden.
    fn focus(&mut self, index: usize) {
        self.active = index;
        self.slots[index].session.set_visible(true);
        self.sync_chrome();
    }

    fn sync_chrome(&mut self) {
        let session = &self.slots[self.active].session;
        self.address_bar = if session.url().is_empty() {
            session.target_url().to_string()
        } else {
            session.url().to_string()
        };
        self.progress = session.load_state().indicator();
    }

    /// Appends a tab loading `url` (the home page when `None`) and activates it.
    pub fn add_tab(&mut self, url: Option<&str>) -> TabId {
        let target = url.map(str::to_string).unwrap_or_else(|| self.home_page.clone());
        let (session, subscription) =
            TabSession::create(&target, self.profile.clone(), self.factory.as_mut());
        let id = session.id();
        log::info!("Opened tab {} at {}", id, target);

        if let Some(slot) = self.slots.get_mut(self.active) {
            slot.session.set_visible(false);
        }
        self.slots.push(SessionSlot { session, subscription });
        self.focus(self.slots.len() - 1);
        id
    }

    /// Closes a tab. Unknown ids are ignored. The last remaining tab is kept
    /// and navigated to the home page instead.
    pub fn close_tab(&mut self, id: TabId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };

        if self.slots.len() == 1 {
            let home = self.home_page.clone();
            log::info!("Last tab closed, returning to {}", home);
            self.slots[0].session.navigate(&home);
            self.sync_chrome();
            return true;
        }

        let SessionSlot { session, subscription } = self.slots.remove(index);
        drop(subscription);
        session.teardown();
        log::info!("Closed tab {}", id);

        if index < self.active {
            self.active -= 1;
        } else if index == self.active {
            self.focus(index.min(self.slots.len() - 1));
        }
        true
    }

    /// Activates a tab. Unknown ids are ignored.
    pub fn activate(&mut self, id: TabId) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if index != self.active {
            self.slots[self.active].session.set_visible(false);
        }
        self.focus(index);
        true
    }

    /// Moves a tab to `new_index` in display order; the active tab stays active.
    pub fn reorder_tab(&mut self, id: TabId, new_index: usize) -> bool {
        let Some(index) = self.index_of(id) else {
            return false;
        };
        if new_index >= self.slots.len() {
            return false;
        }
        let active_id = self.current();
        let slot = self.slots.remove(index);
        self.slots.insert(new_index, slot);
        self.active = self.index_of(active_id).unwrap_or(0);
        true
    }

    pub fn current(&self) -> TabId {
        self.slots[self.active].session.id()
    }

    pub fn current_session(&self) -> &TabSession {
        &self.slots[self.active].session
    }

    pub fn session(&self, id: TabId) -> Option<&TabSession> {
        self.slots.iter().map(|slot| &slot.session).find(|s| s.id() == id)
    }

    /// Sessions in display order.
    pub fn sessions(&self) -> impl Iterator<Item = &TabSession> {
        self.slots.iter().map(|slot| &slot.session)
    }

    pub fn snapshots(&self) -> Vec<TabSnapshot> {
        self.slots
            .iter()
            .enumerate()
            .map(|(i, slot)| slot.session.snapshot(i == self.active))
            .collect()
    }

    pub fn tab_order(&self) -> Vec<TabId> {
        self.sessions().map(TabSession::id).collect()
    }

    pub fn tab_count(&self) -> usize {
        self.slots.len()
    }

    pub fn active_index(&self) -> usize {
        self.active
    }

    pub fn home_page(&self) -> &str {
        &self.home_page
    }

    pub fn set_home_page(&mut self, url: impl Into<String>) {
        self.home_page = url.into();
    }

    pub fn resolver(&self) -> &NavigationResolver {
        &self.resolver
    }

    /// Resolves address-bar input and loads it in the active tab. Blank input
    /// is ignored. Returns the URL that was loaded.
    pub fn navigate(&mut self, raw_input: &str) -> Option<String> {
        if raw_input.trim().is_empty() {
            return None;
        }
        let url = self.resolver.resolve(raw_input);
        self.current_mut().navigate(&url);
        Some(url)
    }

    pub fn navigate_home(&mut self) {
        let home = self.home_page.clone();
        self.current_mut().navigate(&home);
    }

    pub fn go_back(&mut self) {
        self.current_mut().go_back();
    }

    pub fn go_forward(&mut self) {
        self.current_mut().go_forward();
    }

    pub fn reload(&mut self) {
        self.current_mut().reload();
    }

    pub fn reload_all(&mut self) {
        for slot in &mut self.slots {
            slot.session.reload();
        }
    }

    /// Back/forward availability of the active tab, computed on demand.
    pub fn navigation_availability(&self) -> NavAvailability {
        self.current_session().navigation_availability()
    }

    pub fn address_bar(&self) -> &str {
        &self.address_bar
    }

    pub fn progress(&self) -> Option<u8> {
        self.progress
    }

    pub fn chrome(&self) -> ChromeState {
        ChromeState {
            address_bar: self.address_bar.clone(),
            progress: self.progress,
            navigation: self.navigation_availability(),
        }
    }

    pub fn event_sink(&self, id: TabId) -> Option<EventSink> {
        self.session(id).map(TabSession::event_sink)
    }

    /// Applies every queued engine event, tab by tab in display order.
    ///
    /// Each event updates its own tab. Only events from the active tab touch
    /// the address bar and progress indicator. Returns the number of events
    /// processed.
    pub fn pump_events(&mut self) -> usize {
        let mut processed = 0;
        for (index, slot) in self.slots.iter_mut().enumerate() {
            for event in slot.subscription.drain() {
                slot.session.apply(&event);
                processed += 1;
                if index != self.active {
                    continue;
                }
                match &event {
                    SessionEvent::UrlChanged(url) => self.address_bar = url.clone(),
                    SessionEvent::LoadStarted
                    | SessionEvent::LoadProgress(_)
                    | SessionEvent::LoadFinished { .. } => {
                        self.progress = slot.session.load_state().indicator();
                    }
                    SessionEvent::TitleChanged(_) => {}
                }
            }
        }
        processed
    }
}
