// arkbrowser platform paths for Linux
// Config:    ~/.config/arkbrowser
// Data:      ~/.local/share/arkbrowser
// Downloads: $XDG_DOWNLOAD_DIR or ~/Downloads

use std::env;
use std::path::PathBuf;

fn home_dir() -> PathBuf {
    PathBuf::from(env::var("HOME").unwrap_or_else(|_| String::from("/tmp")))
}

fn xdg_or_home(var: &str, fallback: &[&str]) -> PathBuf {
    match env::var(var) {
        Ok(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => fallback.iter().fold(home_dir(), |path, part| path.join(part)),
    }
}

/// Returns the configuration directory for arkbrowser on Linux.
/// Uses `$XDG_CONFIG_HOME/arkbrowser` if set, otherwise `~/.config/arkbrowser`.
pub fn get_config_dir() -> PathBuf {
    xdg_or_home("XDG_CONFIG_HOME", &[".config"]).join("arkbrowser")
}

/// Returns the data directory for arkbrowser on Linux.
/// Uses `$XDG_DATA_HOME/arkbrowser` if set, otherwise `~/.local/share/arkbrowser`.
pub fn get_data_dir() -> PathBuf {
    xdg_or_home("XDG_DATA_HOME", &[".local", "share"]).join("arkbrowser")
}

/// Returns the user's download directory.
pub fn get_download_dir() -> PathBuf {
    xdg_or_home("XDG_DOWNLOAD_DIR", &["Downloads"])
}
