//! In-memory store fake.

use std::cell::RefCell;

use super::{decode_blob, Store, StoreResult};
use crate::models::PatientRecord;

/// In-memory store holding the raw serialized blob, so tests exercise the
/// same decode path as the durable store (including corrupt blobs).
#[derive(Debug, Default)]
pub struct MemoryStore {
    blob: RefCell<Option<String>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-seeded with a raw blob, valid or not.
    pub fn with_blob(blob: impl Into<String>) -> Self {
        Self {
            blob: RefCell::new(Some(blob.into())),
        }
    }

    /// The raw blob as currently persisted.
    pub fn raw_blob(&self) -> Option<String> {
        self.blob.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> StoreResult<Vec<PatientRecord>> {
        decode_blob(self.blob.borrow().as_deref())
    }

    fn save_all(&self, records: &[PatientRecord]) -> StoreResult<()> {
        let blob = serde_json::to_string(records)?;
        *self.blob.borrow_mut() = Some(blob);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_new_store_is_empty() {
        let store = MemoryStore::new();
        assert!(store.load().unwrap().is_empty());
        assert_eq!(store.raw_blob(), None);
    }

    #[test]
    fn test_with_corrupt_blob() {
        let store = MemoryStore::with_blob("oops");
        assert!(matches!(store.load(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_save_all_writes_json_array() {
        let store = MemoryStore::new();
        store.save_all(&[]).unwrap();
        assert_eq!(store.raw_blob().as_deref(), Some("[]"));
    }
}
