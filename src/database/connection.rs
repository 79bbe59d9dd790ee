//! Owned SQLite connection with the settings schema applied.

use std::path::Path;

use rusqlite::Connection;

use super::migrations;

pub struct Database {
    conn: Connection,
}

impl Database {
    /// Opens or creates the database file at `path`.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, rusqlite::Error> {
        Self::prepare(Connection::open(path)?)
    }

    /// Private database that lives until drop. Used by tests and demos.
    pub fn open_in_memory() -> Result<Self, rusqlite::Error> {
        Self::prepare(Connection::open_in_memory()?)
    }

    fn prepare(mut conn: Connection) -> Result<Self, rusqlite::Error> {
        migrations::run_all(&mut conn)?;
        Ok(Self { conn })
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}
