// arkbrowser Settings Store
// Durable key-value persistence for preferences plus named positional arrays
// (bookmarks). Reads never fail: a missing or corrupt value reads as absent
// and typed getters fall back to the caller's default.

use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::types::errors::StoreError;
use crate::types::settings::{keys, Preferences};

/// One element of a positional array: a small map of named values.
pub type ArrayEntry = serde_json::Map<String, Value>;

/// Trait defining the settings store interface.
pub trait SettingsStore {
    fn value(&self, key: &str) -> Option<Value>;
    fn set_value(&mut self, key: &str, value: Value) -> Result<(), StoreError>;
    /// Returns the entries of array `name` in index order (empty when absent).
    fn read_array(&self, name: &str) -> Vec<ArrayEntry>;
    /// Replaces array `name`; entries are renumbered from 0.
    fn write_array(&mut self, name: &str, entries: &[ArrayEntry]) -> Result<(), StoreError>;
}

/// Typed accessors available on every store.
pub trait SettingsStoreExt: SettingsStore {
    /// Reads a boolean. Strings `"true"`/`"false"` are accepted as well.
    fn get_bool(&self, key: &str, default: bool) -> bool {
        match self.value(key) {
            Some(Value::Bool(b)) => b,
            Some(Value::String(s)) => match s.trim().to_ascii_lowercase().as_str() {
                "true" => true,
                "false" => false,
                _ => default,
            },
            _ => default,
        }
    }

    fn get_string(&self, key: &str, default: &str) -> String {
        match self.value(key) {
            Some(Value::String(s)) if !s.trim().is_empty() => s,
            _ => default.to_string(),
        }
    }

    fn array_len(&self, name: &str) -> usize {
        self.read_array(name).len()
    }
}

impl<S: SettingsStore + ?Sized> SettingsStoreExt for S {}

/// Reads every preference, defaulting each one independently.
pub fn load_preferences(store: &dyn SettingsStore) -> Preferences {
    let defaults = Preferences::default();
    let download_dir = store.get_string(keys::DOWNLOAD_DIR, "");
    Preferences {
        dark_mode: store.get_bool(keys::DARK_MODE, defaults.dark_mode),
        ad_blocker: store.get_bool(keys::AD_BLOCKER, defaults.ad_blocker),
        cursor_lock: store.get_bool(keys::CURSOR_LOCK, defaults.cursor_lock),
        home_page: store.get_string(keys::HOME_PAGE, &defaults.home_page),
        download_dir: if download_dir.is_empty() {
            defaults.download_dir
        } else {
            PathBuf::from(download_dir)
        },
    }
}

/// Writes every preference key.
pub fn save_preferences(store: &mut dyn SettingsStore, prefs: &Preferences) -> Result<(), StoreError> {
    store.set_value(keys::DARK_MODE, Value::Bool(prefs.dark_mode))?;
    store.set_value(keys::AD_BLOCKER, Value::Bool(prefs.ad_blocker))?;
    store.set_value(keys::CURSOR_LOCK, Value::Bool(prefs.cursor_lock))?;
    store.set_value(keys::HOME_PAGE, Value::String(prefs.home_page.clone()))?;
    store.set_value(
        keys::DOWNLOAD_DIR,
        Value::String(prefs.download_dir.to_string_lossy().into_owned()),
    )?;
    Ok(())
}

// === MemorySettingsStore ===

/// Volatile store, used by tests and when no config file is wanted.
#[derive(Debug, Default, Clone)]
pub struct MemorySettingsStore {
    values: HashMap<String, Value>,
    arrays: HashMap<String, Vec<ArrayEntry>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn value(&self, key: &str) -> Option<Value> {
        self.values.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.values.insert(key.to_string(), value);
        Ok(())
    }

    fn read_array(&self, name: &str) -> Vec<ArrayEntry> {
        self.arrays.get(name).cloned().unwrap_or_default()
    }

    fn write_array(&mut self, name: &str, entries: &[ArrayEntry]) -> Result<(), StoreError> {
        self.arrays.insert(name.to_string(), entries.to_vec());
        Ok(())
    }
}

// === JsonSettingsStore ===

#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct StoreDocument {
    #[serde(default)]
    values: BTreeMap<String, Value>,
    #[serde(default)]
    arrays: BTreeMap<String, Vec<ArrayEntry>>,
}

/// Store persisted as a single pretty-printed JSON file.
///
/// Every write rewrites the file, so changes are durable immediately.
#[derive(Debug)]
pub struct JsonSettingsStore {
    path: PathBuf,
    doc: StoreDocument,
}

impl JsonSettingsStore {
    /// Opens the store at `path`.
    ///
    /// A missing file yields an empty store. An unreadable or malformed file
    /// is logged and also yields an empty store, so every key falls back to
    /// its default; the file is overwritten on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let doc = match Self::read_document(&path) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("Ignoring settings file {}: {}", path.display(), e);
                StoreDocument::default()
            }
        };
        Self { path, doc }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_document(path: &Path) -> Result<StoreDocument, StoreError> {
        if !path.exists() {
            return Ok(StoreDocument::default());
        }
        let content = fs::read_to_string(path)
            .map_err(|e| StoreError::Io(format!("Failed to read config file: {}", e)))?;
        let doc = serde_json::from_str(&content)?;
        Ok(doc)
    }

    fn save(&self, doc: &StoreDocument) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                StoreError::Io(format!("Failed to create config directory: {}", e))
            })?;
        }
        let json = serde_json::to_string_pretty(doc)?;
        fs::write(&self.path, json)
            .map_err(|e| StoreError::Io(format!("Failed to write config file: {}", e)))?;
        Ok(())
    }

    /// Applies `change` to a copy of the document and keeps it only once
    /// the file has been written.
    fn commit(&mut self, change: impl FnOnce(&mut StoreDocument)) -> Result<(), StoreError> {
        let mut next = self.doc.clone();
        change(&mut next);
        self.save(&next)?;
        self.doc = next;
        Ok(())
    }
}

impl SettingsStore for JsonSettingsStore {
    fn value(&self, key: &str) -> Option<Value> {
        self.doc.values.get(key).cloned()
    }

    fn set_value(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        self.commit(|doc| {
            doc.values.insert(key.to_string(), value);
        })
    }

    fn read_array(&self, name: &str) -> Vec<ArrayEntry> {
        self.doc.arrays.get(name).cloned().unwrap_or_default()
    }

    fn write_array(&mut self, name: &str, entries: &[ArrayEntry]) -> Result<(), StoreError> {
        self.commit(|doc| {
            doc.arrays.insert(name.to_string(), entries.to_vec());
        })
    }
}
