//! arkbrowser window layer (feature `gui`).
//!
//! Uses `wry` for page rendering and `tao` for the native window:
//! - Windows: WebView2
//! - Linux: WebKitGTK (child web views need X11)
//! - macOS: WKWebView
//!
//! One chrome web view at the top renders the tab strip, toolbar and status
//! line. Each tab owns a content web view placed below it; only the active
//! one is visible. Commands from the chrome arrive over wry IPC.

pub mod chrome;
pub mod engine;
pub mod webview_app;
