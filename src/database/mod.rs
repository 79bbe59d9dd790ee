// SQLite storage for the settings store backend.
//
// `Database::open` applies any missing schema steps before handing out the
// connection, so callers never see a partially migrated file.

pub mod connection;
pub mod migrations;

pub use connection::Database;
