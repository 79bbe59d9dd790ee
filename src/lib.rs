//! arkbrowser: the core of a small tabbed desktop web browser.
//!
//! The library holds everything except the window: tab sessions and the tab
//! strip, request filtering, address-bar resolution, downloads, bookmarks and
//! settings persistence. Rendering engines plug in through [`engine`].

pub mod app;
pub mod database;
pub mod engine;
pub mod managers;
pub mod platform;
pub mod services;
pub mod types;

#[cfg(feature = "gui")]
pub mod ui;
