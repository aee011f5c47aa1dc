//! Prontuario Core Library
//!
//! Local-first patient registry for a small clinic front desk.
//!
//! # Architecture
//!
//! ```text
//! Form input ──► Registry ──► Store (single "patients" JSON blob)
//!                   │
//!        photo ─► data URI (encoded before the record is persisted)
//!
//! Store snapshot ──► Exporters ──► pacientes.csv / relatorio_pacientes.pdf
//!                └─► Presentation layer (cards, out of scope here)
//! ```
//!
//! The whole collection is one serialized blob under one storage key; every
//! mutation rewrites it in full. Records are append-only plus deletion: there
//! is no update path, and a record's `age` stays frozen at creation.
//!
//! # Modules
//!
//! - [`models`]: domain types (PatientRecord, NewPatient, CategoryStyle)
//! - [`store`]: persistence abstraction with SQLite and in-memory backends
//! - [`registry`]: record creation and deletion
//! - [`age`]: birth date to whole-years age
//! - [`photo`]: image bytes to embedded data URI
//! - [`export`]: CSV and PDF export

pub mod age;
pub mod export;
pub mod models;
pub mod photo;
pub mod registry;
pub mod store;

// Re-export commonly used types
pub use export::{to_csv, to_pdf, ExportError, CSV_FILENAME, PDF_FILENAME, PDF_TITLE};
pub use models::{CategoryStyle, NewPatient, PatientRecord};
pub use registry::Registry;
pub use store::{LocalStore, MemoryStore, Store, StoreError};
