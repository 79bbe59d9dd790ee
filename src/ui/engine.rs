//! `ViewFactory` backed by wry child web views.

use std::cell::RefCell;
use std::path::PathBuf;
use std::rc::{Rc, Weak};
use std::sync::{Arc, Mutex};

use tao::event_loop::EventLoopProxy;
use tao::window::Window;
use wry::dpi::{LogicalPosition, LogicalSize};
use wry::{NewWindowResponse, PageLoadEvent, Rect, WebView, WebViewBuilder};

use crate::engine::history::NavigationHistory;
use crate::engine::{EventSink, NavigableView, ViewFactory};
use crate::managers::download_tracker::DownloadTracker;
use crate::services::profile::SharedProfile;
use crate::types::events::SessionEvent;
use crate::ui::webview_app::UserEvent;

/// Height of the chrome strip above the page, in logical pixels.
pub const CHROME_HEIGHT: f64 = 96.0;

/// Content views still alive, for relayout on window resize.
pub type ContentViews = Rc<RefCell<Vec<Weak<WebView>>>>;

/// Where downloads go; updated when preferences change.
pub type DownloadDir = Arc<Mutex<PathBuf>>;

/// Bounds of the page area for a window of the given logical size.
pub fn content_bounds(width: f64, height: f64) -> Rect {
    Rect {
        position: LogicalPosition::new(0.0, CHROME_HEIGHT).into(),
        size: LogicalSize::new(width, (height - CHROME_HEIGHT).max(0.0)).into(),
    }
}

pub fn chrome_bounds(width: f64) -> Rect {
    Rect {
        position: LogicalPosition::new(0.0, 0.0).into(),
        size: LogicalSize::new(width, CHROME_HEIGHT).into(),
    }
}

pub fn logical_size(window: &Window) -> (f64, f64) {
    let size = window.inner_size().to_logical::<f64>(window.scale_factor());
    (size.width, size.height)
}

pub struct WryEngine {
    window: Rc<Window>,
    proxy: EventLoopProxy<UserEvent>,
    download_dir: DownloadDir,
    views: ContentViews,
}

impl WryEngine {
    pub fn new(window: Rc<Window>, proxy: EventLoopProxy<UserEvent>, download_dir: DownloadDir) -> Self {
        Self {
            window,
            proxy,
            download_dir,
            views: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn content_views(&self) -> ContentViews {
        Rc::clone(&self.views)
    }

    fn build(&self, profile: SharedProfile, events: EventSink, history: Arc<Mutex<ViewHistory>>) -> wry::Result<WebView> {
        let (width, height) = logical_size(&self.window);

        let nav_profile = profile.clone();
        let nav_events = events.clone();
        let nav_proxy = self.proxy.clone();
        let load_events = events.clone();
        let load_proxy = self.proxy.clone();
        let title_events = events;
        let title_proxy = self.proxy.clone();
        let dl_dir = Arc::clone(&self.download_dir);
        let dl_proxy = self.proxy.clone();
        let done_proxy = self.proxy.clone();
        let nw_proxy = self.proxy.clone();

        WebViewBuilder::new()
            .with_bounds(content_bounds(width, height))
            .with_devtools(cfg!(debug_assertions))
            .with_navigation_handler(move |url: String| {
                if nav_profile.accept_navigation(&url) {
                    return true;
                }
                nav_events.emit(SessionEvent::LoadFinished { ok: false });
                let _ = nav_proxy.send_event(UserEvent::Wake);
                false
            })
            .with_on_page_load_handler(move |event, url| {
                match event {
                    PageLoadEvent::Started => {
                        if let Ok(mut h) = history.lock() {
                            h.record(&url);
                        }
                        load_events.emit(SessionEvent::LoadStarted);
                        load_events.emit(SessionEvent::UrlChanged(url));
                    }
                    PageLoadEvent::Finished => {
                        load_events.emit(SessionEvent::LoadProgress(100));
                        load_events.emit(SessionEvent::LoadFinished { ok: true });
                    }
                }
                let _ = load_proxy.send_event(UserEvent::Wake);
            })
            .with_document_title_changed_handler(move |title| {
                title_events.emit(SessionEvent::TitleChanged(title));
                let _ = title_proxy.send_event(UserEvent::Wake);
            })
            .with_download_started_handler(move |url, path| {
                let suggested = path
                    .file_name()
                    .map(|name| name.to_string_lossy().into_owned())
                    .unwrap_or_default();
                let filename = DownloadTracker::sanitize_filename(&suggested);
                let dir = match dl_dir.lock() {
                    Ok(dir) => dir.clone(),
                    Err(_) => return false,
                };
                let accepted = match DownloadTracker::prepare_destination(&dir, &filename) {
                    Ok(dest) => {
                        *path = dest;
                        true
                    }
                    Err(e) => {
                        log::warn!("{}", e);
                        false
                    }
                };
                let _ = dl_proxy.send_event(UserEvent::DownloadStarted { url, filename });
                accepted
            })
            .with_download_completed_handler(move |url, _path, success| {
                let _ = done_proxy.send_event(UserEvent::DownloadFinished { url, success });
            })
            .with_new_window_req_handler(move |url, _features| {
                let _ = nw_proxy.send_event(UserEvent::OpenTab(url));
                NewWindowResponse::Deny
            })
            .build_as_child(self.window.as_ref())
    }
}

impl ViewFactory for WryEngine {
    fn create_view(&mut self, profile: SharedProfile, events: EventSink) -> Box<dyn NavigableView> {
        let history = Arc::new(Mutex::new(ViewHistory::default()));
        match self.build(profile, events.clone(), Arc::clone(&history)) {
            Ok(webview) => {
                let webview = Rc::new(webview);
                let mut views = self.views.borrow_mut();
                views.retain(|v| v.strong_count() > 0);
                views.push(Rc::downgrade(&webview));
                Box::new(WryView { webview, history })
            }
            Err(e) => {
                log::error!("Failed to create web view: {}", e);
                Box::new(UnavailableView { events })
            }
        }
    }
}

/// History as seen by the page-load handler. Loads started by back, forward
/// or reload move the cursor instead of adding an entry.
#[derive(Debug, Default)]
struct ViewHistory {
    entries: NavigationHistory,
    traversing: Option<String>,
}

impl ViewHistory {
    fn record(&mut self, url: &str) {
        if self.traversing.as_deref() == Some(url) {
            self.traversing = None;
            return;
        }
        self.traversing = None;
        self.entries.push(url);
    }
}

pub struct WryView {
    webview: Rc<WebView>,
    history: Arc<Mutex<ViewHistory>>,
}

impl WryView {
    fn traverse(&mut self, step: impl FnOnce(&mut NavigationHistory) -> Option<String>) {
        let target = match self.history.lock() {
            Ok(mut h) => {
                let target = step(&mut h.entries);
                h.traversing = target.clone();
                target
            }
            Err(_) => None,
        };
        if let Some(url) = target {
            if let Err(e) = self.webview.load_url(&url) {
                log::warn!("Failed to load {}: {}", url, e);
            }
        }
    }
}

impl NavigableView for WryView {
    fn load(&mut self, url: &str) {
        if let Err(e) = self.webview.load_url(url) {
            log::warn!("Failed to load {}: {}", url, e);
        }
    }

    fn back(&mut self) {
        self.traverse(|h| h.back().map(str::to_string));
    }

    fn forward(&mut self) {
        self.traverse(|h| h.forward().map(str::to_string));
    }

    fn reload(&mut self) {
        // The reload fires a page-load start for the current entry; skip recording it.
        if let Ok(mut h) = self.history.lock() {
            h.traversing = h.entries.current().map(str::to_string);
        }
        if let Err(e) = self.webview.reload() {
            log::warn!("Reload failed: {}", e);
        }
    }

    fn can_go_back(&self) -> bool {
        self.history.lock().map(|h| h.entries.can_go_back()).unwrap_or(false)
    }

    fn can_go_forward(&self) -> bool {
        self.history.lock().map(|h| h.entries.can_go_forward()).unwrap_or(false)
    }

    fn url(&self) -> String {
        self.webview.url().unwrap_or_default()
    }

    fn set_visible(&mut self, visible: bool) {
        let _ = self.webview.set_visible(visible);
    }

    fn close(&mut self) {
        let _ = self.webview.set_visible(false);
    }
}

/// Stand-in for a tab whose web view could not be created.
struct UnavailableView {
    events: EventSink,
}

impl NavigableView for UnavailableView {
    fn load(&mut self, _url: &str) {
        self.events.emit(SessionEvent::LoadStarted);
        self.events.emit(SessionEvent::LoadFinished { ok: false });
    }

    fn back(&mut self) {}

    fn forward(&mut self) {}

    fn reload(&mut self) {}

    fn can_go_back(&self) -> bool {
        false
    }

    fn can_go_forward(&self) -> bool {
        false
    }

    fn url(&self) -> String {
        String::new()
    }
}
