//! Seam between the browser core and the embedded rendering engine.
//!
//! An engine supplies one [`NavigableView`] per tab through a [`ViewFactory`].
//! Views report page lifecycle changes by pushing [`SessionEvent`]s into the
//! [`EventSink`] they were created with; the tab manager holds the matching
//! [`Subscription`] and drains it on the UI thread.

pub mod headless;
pub mod history;

use tokio::sync::mpsc::{self, error::TryRecvError};

use crate::services::profile::SharedProfile;
use crate::types::events::SessionEvent;

/// A per-tab renderable surface with its own history.
pub trait NavigableView {
    /// Starts loading `url`, superseding any load in flight.
    fn load(&mut self, url: &str);
    fn back(&mut self);
    fn forward(&mut self);
    fn reload(&mut self);
    fn can_go_back(&self) -> bool;
    fn can_go_forward(&self) -> bool;
    /// URL of the current history entry, empty before the first load.
    fn url(&self) -> String;
    fn set_visible(&mut self, _visible: bool) {}
    /// Releases engine resources. Called once when the tab is torn down.
    fn close(&mut self) {}
}

/// Creates views bound to the shared browsing profile.
pub trait ViewFactory {
    fn create_view(&mut self, profile: SharedProfile, events: EventSink) -> Box<dyn NavigableView>;
}

/// Sending half of a session's event stream. Cheap to clone; engine callbacks
/// keep their own copies.
#[derive(Debug, Clone)]
pub struct EventSink {
    tx: mpsc::UnboundedSender<SessionEvent>,
}

impl EventSink {
    /// Queues an event. Returns false once the session has been torn down,
    /// in which case the event is dropped.
    pub fn emit(&self, event: SessionEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    pub fn is_closed(&self) -> bool {
        self.tx.is_closed()
    }
}

/// Receiving half of a session's event stream.
#[derive(Debug)]
pub struct Subscription {
    rx: mpsc::UnboundedReceiver<SessionEvent>,
}

impl Subscription {
    /// Takes every queued event, in emission order, without blocking.
    pub fn drain(&mut self) -> Vec<SessionEvent> {
        let mut events = Vec::new();
        loop {
            match self.rx.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => break,
            }
        }
        events
    }
}

/// Creates a connected sink/subscription pair.
pub fn channel() -> (EventSink, Subscription) {
    let (tx, rx) = mpsc::unbounded_channel();
    (EventSink { tx }, Subscription { rx })
}
