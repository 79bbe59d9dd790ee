//! SQLite-backed settings store.
//!
//! Values and array entries are stored as JSON text. Rows that fail to parse
//! are logged and read as absent.

use rusqlite::{params, OptionalExtension};
use serde_json::Value;

use crate::database::Database;
use crate::services::settings_store::{ArrayEntry, SettingsStore};
use crate::types::errors::StoreError;

pub struct SqliteSettingsStore {
    db: Database,
}

impl SqliteSettingsStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    pub fn open(path: impl AsRef<std::path::Path>) -> Result<Self, StoreError> {
        Ok(Self::new(Database::open(path)?))
    }

    pub fn open_in_memory() -> Result<Self, StoreError> {
        Ok(Self::new(Database::open_in_memory()?))
    }

    pub fn database(&self) -> &Database {
        &self.db
    }

    fn try_value(&self, key: &str) -> Result<Option<Value>, StoreError> {
        let raw: Option<String> = self
            .db
            .connection()
            .query_row("SELECT value FROM settings WHERE key = ?1", params![key], |row| {
                row.get(0)
            })
            .optional()?;
        match raw {
            Some(text) => Ok(Some(serde_json::from_str(&text)?)),
            None => Ok(None),
        }
    }

    fn try_read_array(&self, name: &str) -> Result<Vec<ArrayEntry>, StoreError> {
        let conn = self.db.connection();
        let mut stmt =
            conn.prepare("SELECT entry FROM settings_arrays WHERE name = ?1 ORDER BY position")?;
        let rows = stmt.query_map(params![name], |row| row.get::<_, String>(0))?;

        let mut entries = Vec::new();
        for row in rows {
            let text = row?;
            match serde_json::from_str::<ArrayEntry>(&text) {
                Ok(entry) => entries.push(entry),
                Err(e) => log::warn!("Skipping corrupt entry in array '{}': {}", name, e),
            }
        }
        Ok(entries)
    }
}

impl SettingsStore for SqliteSettingsStore {
    fn value(&self, key: &str) -> Option<Value> {
        self.try_value(key).unwrap_or_else(|e| {
            log::warn!("Reading setting '{}' failed: {}", key, e);
            None
        })
    }

    fn set_value(&mut self, key: &str, value: Value) -> Result<(), StoreError> {
        let text = serde_json::to_string(&value)?;
        self.db.connection().execute(
            "INSERT OR REPLACE INTO settings (key, value) VALUES (?1, ?2)",
            params![key, text],
        )?;
        Ok(())
    }

    fn read_array(&self, name: &str) -> Vec<ArrayEntry> {
        self.try_read_array(name).unwrap_or_else(|e| {
            log::warn!("Reading array '{}' failed: {}", name, e);
            Vec::new()
        })
    }

    fn write_array(&mut self, name: &str, entries: &[ArrayEntry]) -> Result<(), StoreError> {
        let tx = self.db.connection().unchecked_transaction()?;
        tx.execute("DELETE FROM settings_arrays WHERE name = ?1", params![name])?;
        for (position, entry) in entries.iter().enumerate() {
            let text = serde_json::to_string(entry)?;
            tx.execute(
                "INSERT INTO settings_arrays (name, position, entry) VALUES (?1, ?2, ?3)",
                params![name, position as i64, text],
            )?;
        }
        tx.commit()?;
        Ok(())
    }
}
