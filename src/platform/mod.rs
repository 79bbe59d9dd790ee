// Per-OS locations for settings, the settings database and downloads.
// One submodule per target is compiled in as `imp`.

use std::path::PathBuf;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "linux")]
use linux as imp;

#[cfg(target_os = "macos")]
use macos as imp;

#[cfg(target_os = "windows")]
use windows as imp;

/// File name of the JSON settings store inside [`get_config_dir`].
pub const SETTINGS_FILE: &str = "settings.json";

/// File name of the SQLite settings store inside [`get_data_dir`].
pub const DATABASE_FILE: &str = "arkbrowser.db";

/// Selects the settings backend: `json` (default) or `sqlite`.
pub const STORE_ENV: &str = "ARKBROWSER_STORE";

/// Returns the platform-specific configuration directory.
///
/// - **Linux**: `~/.config/arkbrowser` (or `$XDG_CONFIG_HOME/arkbrowser`)
/// - **macOS**: `~/Library/Application Support/arkbrowser`
/// - **Windows**: `%APPDATA%/arkbrowser`
pub fn get_config_dir() -> PathBuf {
    imp::get_config_dir()
}

/// Returns the platform-specific data directory (SQLite store lives here).
pub fn get_data_dir() -> PathBuf {
    imp::get_data_dir()
}

/// Returns the default directory downloads are saved to.
pub fn get_download_dir() -> PathBuf {
    imp::get_download_dir()
}

/// Path of the JSON settings file.
pub fn settings_path() -> PathBuf {
    get_config_dir().join(SETTINGS_FILE)
}

/// Path of the SQLite settings database.
pub fn database_path() -> PathBuf {
    get_data_dir().join(DATABASE_FILE)
}
