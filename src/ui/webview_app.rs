//! Browser window using `wry` + `tao`.
//!
//! Architecture:
//! - The event loop owns the [`App`]; engine callbacks never touch it directly.
//!   They queue session events and wake the loop with [`UserEvent::Wake`].
//! - The chrome web view sends JSON commands via `window.ipc.postMessage()`;
//!   they are forwarded to the loop as [`UserEvent::Command`].
//! - After handling any event the loop pumps the app and re-renders the chrome.

use std::path::PathBuf;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use serde_json::Value;
use tao::event::{Event, WindowEvent};
use tao::event_loop::{ControlFlow, EventLoopBuilder};
use tao::window::WindowBuilder;
use wry::{WebView, WebViewBuilder};

use crate::app::App;
use crate::types::download::DownloadRequest;
use crate::types::errors::AppError;
use crate::types::settings::Preferences;
use crate::types::tab::TabId;
use crate::ui::chrome::{render_script, CHROME_HTML};
use crate::ui::engine::{chrome_bounds, content_bounds, logical_size, ContentViews, WryEngine};

#[derive(Debug)]
pub enum UserEvent {
    /// Session events are queued; pump and redraw.
    Wake,
    /// Raw JSON command from the chrome.
    Command(String),
    /// A page asked for a new window.
    OpenTab(String),
    DownloadStarted { url: String, filename: String },
    DownloadFinished { url: String, success: bool },
}

fn tab_id(msg: &Value) -> Option<TabId> {
    serde_json::from_value(msg.get("id")?.clone()).ok()
}

fn index(msg: &Value) -> Option<usize> {
    usize::try_from(msg.get("index")?.as_u64()?).ok()
}

fn settings_from(msg: &Value, current: &Preferences) -> Preferences {
    let flag = |key: &str, default: bool| msg.get(key).and_then(Value::as_bool).unwrap_or(default);
    let text = |key: &str| msg.get(key).and_then(Value::as_str).filter(|s| !s.trim().is_empty());
    Preferences {
        dark_mode: flag("darkMode", current.dark_mode),
        ad_blocker: flag("adBlocker", current.ad_blocker),
        cursor_lock: flag("cursorLock", current.cursor_lock),
        home_page: text("homePage").map(str::to_string).unwrap_or_else(|| current.home_page.clone()),
        download_dir: text("downloadDir").map(PathBuf::from).unwrap_or_else(|| current.download_dir.clone()),
    }
}

fn handle_command(app: &mut App, download_dir: &Mutex<PathBuf>, message: &str) {
    let Ok(msg) = serde_json::from_str::<Value>(message) else {
        log::debug!("Ignoring malformed IPC message");
        return;
    };
    let Some(cmd) = msg.get("cmd").and_then(Value::as_str) else {
        return;
    };

    let result = match cmd {
        "ready" => Ok(()),
        "new_tab" => {
            app.tabs_mut().add_tab(None);
            Ok(())
        }
        "close_tab" => {
            if let Some(id) = tab_id(&msg) {
                app.tabs_mut().close_tab(id);
            }
            Ok(())
        }
        "activate" => {
            if let Some(id) = tab_id(&msg) {
                app.tabs_mut().activate(id);
            }
            Ok(())
        }
        "navigate" => {
            let input = msg.get("url").and_then(Value::as_str).unwrap_or("");
            app.tabs_mut().navigate(input);
            Ok(())
        }
        "back" => {
            app.tabs_mut().go_back();
            Ok(())
        }
        "forward" => {
            app.tabs_mut().go_forward();
            Ok(())
        }
        "reload" => {
            app.tabs_mut().reload();
            Ok(())
        }
        "home" => {
            app.tabs_mut().navigate_home();
            Ok(())
        }
        "set_ad_blocker" => {
            let enabled = msg.get("enabled").and_then(Value::as_bool).unwrap_or(true);
            app.set_ad_blocker(enabled)
        }
        "bookmark" => app.bookmark_current_tab().map(|_| ()),
        "open_bookmark" => {
            if let Some(i) = index(&msg) {
                app.open_bookmark(i);
            }
            Ok(())
        }
        "remove_bookmark" => match index(&msg) {
            Some(i) => app.remove_bookmark(i).map(|_| ()),
            None => Ok(()),
        },
        "clear_downloads" => {
            app.clear_completed_downloads();
            Ok(())
        }
        "apply_settings" => {
            let prefs = settings_from(&msg, app.preferences());
            let dir = prefs.download_dir.clone();
            let applied = app.apply_preferences(prefs);
            if applied.is_ok() {
                if let Ok(mut shared) = download_dir.lock() {
                    *shared = dir;
                }
            }
            applied
        }
        other => {
            log::debug!("Unknown command {}", other);
            Ok(())
        }
    };

    if let Err(e) = result {
        log::warn!("Command {} failed: {}", cmd, e);
    }
}

fn relayout(window: &tao::window::Window, chrome: &WebView, views: &ContentViews) {
    let (width, height) = logical_size(window);
    let _ = chrome.set_bounds(chrome_bounds(width));
    views.borrow_mut().retain(|view| match view.upgrade() {
        Some(webview) => {
            let _ = webview.set_bounds(content_bounds(width, height));
            true
        }
        None => false,
    });
}

fn redraw(app: &mut App, chrome: &WebView) {
    app.pump();
    let script = render_script(app);
    if !script.is_empty() {
        let _ = chrome.evaluate_script(&script);
    }
    app.take_status_message();
}

/// Opens the browser window and runs the event loop until it is closed.
pub fn run() -> Result<(), AppError> {
    let event_loop = EventLoopBuilder::<UserEvent>::with_user_event().build();
    let proxy = event_loop.create_proxy();

    let window = WindowBuilder::new()
        .with_title("arkbrowser")
        .with_inner_size(tao::dpi::LogicalSize::new(1280.0, 800.0))
        .build(&event_loop)
        .map_err(|e| AppError::Window(e.to_string()))?;
    let window = Rc::new(window);
    let (width, _) = logical_size(&window);

    let ipc_proxy = proxy.clone();
    let chrome = WebViewBuilder::new()
        .with_html(CHROME_HTML)
        .with_bounds(chrome_bounds(width))
        .with_ipc_handler(move |msg: wry::http::Request<String>| {
            let _ = ipc_proxy.send_event(UserEvent::Command(msg.body().clone()));
        })
        .build_as_child(window.as_ref())
        .map_err(|e| AppError::Window(e.to_string()))?;

    let download_dir = Arc::new(Mutex::new(PathBuf::new()));
    let engine = WryEngine::new(Rc::clone(&window), proxy, Arc::clone(&download_dir));
    let views = engine.content_views();
    let mut app = App::open(Box::new(engine))?;
    if let Ok(mut dir) = download_dir.lock() {
        *dir = app.preferences().download_dir.clone();
    }
    redraw(&mut app, &chrome);

    event_loop.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Wait;

        match event {
            Event::WindowEvent {
                event: WindowEvent::CloseRequested,
                ..
            } => {
                log::info!("Window closed");
                *control_flow = ControlFlow::Exit;
            }

            Event::WindowEvent {
                event: WindowEvent::Resized(_),
                ..
            } => relayout(&window, &chrome, &views),

            Event::UserEvent(user_event) => {
                match user_event {
                    UserEvent::Wake => {}
                    UserEvent::Command(message) => handle_command(&mut app, &download_dir, &message),
                    UserEvent::OpenTab(url) => {
                        app.tabs_mut().add_tab(Some(&url));
                    }
                    UserEvent::DownloadStarted { url, filename } => {
                        app.on_download_requested(&DownloadRequest::new(url, filename));
                    }
                    UserEvent::DownloadFinished { url, success } => {
                        if let Some(id) = app.download_tracker().find_by_url(&url) {
                            if success {
                                app.on_download_finished(id);
                            } else {
                                app.on_download_failed(id, "interrupted");
                            }
                        }
                    }
                }
                redraw(&mut app, &chrome);
            }

            _ => {}
        }
    });
}
