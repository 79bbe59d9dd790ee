// arkbrowser shared type definitions
// Each submodule defines types used across the application.

pub mod bookmark;
pub mod download;
pub mod errors;
pub mod events;
pub mod permission;
pub mod settings;
pub mod tab;
