//! Record manager: creation and deletion against an injected store.

use chrono::Utc;

use crate::age::age_from_birth_date;
use crate::models::{NewPatient, PatientRecord};
use crate::photo::to_data_uri;
use crate::store::{Store, StoreResult};

/// Registry of patient records over a [`Store`].
///
/// Every operation is a pure function of its inputs plus the store's current
/// snapshot; nothing is cached between calls.
pub struct Registry<'a, S: Store> {
    store: &'a S,
}

impl<'a, S: Store> Registry<'a, S> {
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// Register a new patient and persist it, returning the stored record.
    ///
    /// The ID is the creation timestamp in milliseconds, bumped past any
    /// collision so IDs stay unique within the collection. An attached photo
    /// is fully encoded before the record is appended, so the store never
    /// observes a partially built record.
    pub fn create(&self, fields: NewPatient, photo: Option<&[u8]>) -> StoreResult<PatientRecord> {
        let mut records = self.store.load()?;

        let mut id = Utc::now().timestamp_millis();
        while records.iter().any(|r| r.id == id) {
            id += 1;
        }

        let record = PatientRecord {
            id,
            age: age_from_birth_date(&fields.birth_date),
            name: fields.name,
            mother_name: fields.mother_name,
            birth_date: fields.birth_date,
            entry_time: fields.entry_time,
            exit_time: optional(fields.exit_time),
            exit_date: optional(fields.exit_date),
            address: fields.address,
            complement: optional(fields.complement),
            contacts: fields.contacts,
            category: fields.category,
            notes: optional(fields.notes),
            photo: photo.map(to_data_uri),
        };

        records.push(record.clone());
        self.store.save_all(&records)?;
        Ok(record)
    }

    /// Remove one record by ID. Unknown IDs are a no-op. Returns the number
    /// of records removed.
    pub fn delete_one(&self, id: i64) -> StoreResult<usize> {
        self.delete_many(&[id])
    }

    /// Remove every record whose ID is in `ids`. Idempotent; an empty list
    /// leaves the collection unchanged. Returns the number removed.
    pub fn delete_many(&self, ids: &[i64]) -> StoreResult<usize> {
        let records = self.store.load()?;
        let before = records.len();

        let kept: Vec<PatientRecord> = records
            .into_iter()
            .filter(|r| !ids.contains(&r.id))
            .collect();

        let removed = before - kept.len();
        self.store.save_all(&kept)?;
        Ok(removed)
    }
}

/// Empty form input becomes an explicit "not provided" null.
fn optional(value: String) -> Option<String> {
    if value.is_empty() {
        None
    } else {
        Some(value)
    }
}
