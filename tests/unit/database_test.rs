//! Unit tests for the SQLite database layer (connection + migrations).

use arkbrowser::database::migrations::{get_schema_version, CURRENT_SCHEMA_VERSION};
use arkbrowser::database::Database;
use tempfile::TempDir;

fn table_names(db: &Database) -> Vec<String> {
    let mut stmt = db
        .connection()
        .prepare("SELECT name FROM sqlite_master WHERE type='table' ORDER BY name")
        .unwrap();
    stmt.query_map([], |row| row.get(0))
        .unwrap()
        .filter_map(|r| r.ok())
        .collect()
}

#[test]
fn test_open_in_memory_succeeds() {
    assert!(Database::open_in_memory().is_ok());
}

#[test]
fn test_migrations_create_settings_tables() {
    let db = Database::open_in_memory().unwrap();
    let tables = table_names(&db);
    for expected in ["schema_version", "settings", "settings_arrays"] {
        assert!(tables.iter().any(|t| t == expected), "missing table {expected}");
    }
}

#[test]
fn test_schema_version_is_current() {
    let db = Database::open_in_memory().unwrap();
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);
}

#[test]
fn test_reopening_file_keeps_schema_version() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("ark.db");
    drop(Database::open(&path).unwrap());
    let db = Database::open(&path).unwrap();
    assert_eq!(get_schema_version(db.connection()), CURRENT_SCHEMA_VERSION);

    let rows: i64 = db
        .connection()
        .query_row("SELECT COUNT(*) FROM schema_version", [], |row| row.get(0))
        .unwrap();
    assert_eq!(rows, 1);
}
