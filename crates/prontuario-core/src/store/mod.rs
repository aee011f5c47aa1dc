//! Persistence layer: the whole patient collection lives as one JSON blob
//! under a single storage key.
//!
//! Every mutation rewrites the full collection; there is no indexing and no
//! partial update. [`LocalStore`] is the durable SQLite-backed implementation,
//! [`MemoryStore`] the in-process fake used by tests.

mod local;
mod memory;

pub use local::*;
pub use memory::*;

use thiserror::Error;

use crate::models::PatientRecord;

/// Storage key under which the serialized collection is kept.
pub const STORAGE_KEY: &str = "patients";

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("storage unavailable: {0}")]
    Unavailable(#[from] rusqlite::Error),

    #[error("stored data corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence abstraction over the single collection blob.
pub trait Store {
    /// Read the full collection. An absent blob is an empty collection; a
    /// blob that fails to decode surfaces as [`StoreError::Corrupt`].
    fn load(&self) -> StoreResult<Vec<PatientRecord>>;

    /// Serialize and overwrite the full collection in a single write.
    fn save_all(&self, records: &[PatientRecord]) -> StoreResult<()>;
}

/// Decode a raw blob into the collection, treating absence as empty.
pub(crate) fn decode_blob(blob: Option<&str>) -> StoreResult<Vec<PatientRecord>> {
    match blob {
        Some(raw) => Ok(serde_json::from_str(raw)?),
        None => Ok(Vec::new()),
    }
}
