//! Versioned schema for the settings database.
//!
//! Each step in [`STEPS`] is applied once, inside a transaction, and then
//! logged in `schema_version`.

use rusqlite::{params, Connection};

struct Step {
    version: i32,
    description: &'static str,
    sql: &'static str,
}

// Values and array entries are stored as JSON text.
const STEPS: &[Step] = &[Step {
    version: 1,
    description: "Settings values and positional arrays",
    sql: "CREATE TABLE IF NOT EXISTS settings (
              key TEXT PRIMARY KEY,
              value TEXT NOT NULL
          );
          CREATE TABLE IF NOT EXISTS settings_arrays (
              name TEXT NOT NULL,
              position INTEGER NOT NULL,
              entry TEXT NOT NULL,
              PRIMARY KEY (name, position)
          );",
}];

/// Highest version in [`STEPS`].
pub const CURRENT_SCHEMA_VERSION: i32 = 1;

/// Highest applied version, or 0 for a fresh database.
pub fn get_schema_version(conn: &Connection) -> i32 {
    conn.query_row("SELECT COALESCE(MAX(version), 0) FROM schema_version", [], |row| {
        row.get(0)
    })
    .unwrap_or(0)
}

/// Brings the schema up to [`CURRENT_SCHEMA_VERSION`]. Idempotent.
pub fn run_all(conn: &mut Connection) -> Result<(), rusqlite::Error> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS schema_version (
             version INTEGER PRIMARY KEY,
             applied_at INTEGER NOT NULL,
             description TEXT NOT NULL
         );",
    )?;

    let applied = get_schema_version(conn);
    for step in STEPS.iter().filter(|s| s.version > applied) {
        let tx = conn.transaction()?;
        tx.execute_batch(step.sql)?;
        tx.execute(
            "INSERT OR IGNORE INTO schema_version (version, applied_at, description) VALUES (?1, ?2, ?3)",
            params![step.version, unix_now(), step.description],
        )?;
        tx.commit()?;
        log::debug!("Applied schema v{}: {}", step.version, step.description);
    }
    Ok(())
}

fn unix_now() -> i64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_secs() as i64)
        .unwrap_or(0)
}
