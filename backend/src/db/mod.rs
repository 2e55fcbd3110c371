//! SQLite access for the identity hub.
//!
//! The database holds three tables: `staff` (the roster plus the persisted
//! profile fields), `provinces` and `wards`. Connections are opened per
//! request; the server keeps no pool. Query helpers in the service modules
//! take `&Connection` so they can run against a throwaway database in tests.

use rusqlite::Connection;

/// Path of the SQLite database file, relative to the working directory.
pub const DB_PATH: &str = "identity_hub.sqlite";

/// Directory where uploaded asset files are stored, served under `/files`.
pub const UPLOAD_DIR: &str = "uploads";

/// Opens a connection to the application database.
pub fn open() -> Result<Connection, String> {
    Connection::open(DB_PATH).map_err(|e| e.to_string())
}

/// Creates the schema if it does not exist yet. Called once at startup.
pub fn bootstrap(conn: &Connection) -> Result<(), String> {
    conn.execute_batch(
        "CREATE TABLE IF NOT EXISTS staff (
             id              TEXT PRIMARY KEY,
             name            TEXT NOT NULL,
             department_name TEXT NOT NULL,
             phone           TEXT,
             email           TEXT,
             province_code   TEXT,
             ward_code       TEXT,
             cccd_front_url  TEXT,
             cccd_back_url   TEXT,
             signature_url   TEXT,
             updated_at      TEXT
         );
         CREATE TABLE IF NOT EXISTS provinces (
             code TEXT PRIMARY KEY,
             name TEXT NOT NULL
         );
         CREATE TABLE IF NOT EXISTS wards (
             code          TEXT PRIMARY KEY,
             name          TEXT NOT NULL,
             province_code TEXT NOT NULL REFERENCES provinces(code)
         );",
    )
    .map_err(|e| e.to_string())
}

#[cfg(test)]
pub fn open_test_db(dir: &tempfile::TempDir) -> Connection {
    let conn = Connection::open(dir.path().join("test.sqlite")).unwrap();
    bootstrap(&conn).unwrap();
    conn
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bootstrap_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let conn = open_test_db(&dir);
        bootstrap(&conn).unwrap();
        let count: i64 = conn
            .query_row("SELECT COUNT(*) FROM staff", [], |row| row.get(0))
            .unwrap();
        assert_eq!(count, 0);
    }
}
