//! SQLite-backed store: a one-table key/value layout mirroring the browser
//! local storage the registry originally lived in.

use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;

use super::{decode_blob, Store, StoreResult, STORAGE_KEY};
use crate::models::PatientRecord;

const SCHEMA: &str = r#"
CREATE TABLE IF NOT EXISTS storage (
    key   TEXT PRIMARY KEY,
    value TEXT NOT NULL
);
"#;

/// Durable key/value store holding the `patients` blob.
pub struct LocalStore {
    conn: Connection,
}

impl LocalStore {
    /// Open the store at path, creating it if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    /// Create an in-memory store (for testing).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let store = Self { conn };
        store.initialize()?;
        Ok(store)
    }

    fn initialize(&self) -> StoreResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    fn get_raw(&self, key: &str) -> StoreResult<Option<String>> {
        self.conn
            .query_row("SELECT value FROM storage WHERE key = ?", [key], |row| {
                row.get(0)
            })
            .optional()
            .map_err(Into::into)
    }

    fn set_raw(&self, key: &str, value: &str) -> StoreResult<()> {
        self.conn.execute(
            "INSERT OR REPLACE INTO storage (key, value) VALUES (?1, ?2)",
            params![key, value],
        )?;
        Ok(())
    }
}

impl Store for LocalStore {
    fn load(&self) -> StoreResult<Vec<PatientRecord>> {
        let blob = self.get_raw(STORAGE_KEY)?;
        decode_blob(blob.as_deref())
    }

    fn save_all(&self, records: &[PatientRecord]) -> StoreResult<()> {
        let blob = serde_json::to_string(records)?;
        self.set_raw(STORAGE_KEY, &blob)
    }
}
