//! Export of the record collection to downloadable file formats.
//!
//! Both exporters are pure transformations of a record slice, in store order.

mod csv;
mod pdf;

pub use csv::*;
pub use pdf::*;

use thiserror::Error;

/// Export errors.
#[derive(Error, Debug)]
pub enum ExportError {
    #[error("no records to export")]
    EmptySet,

    #[error("PDF generation failed: {0}")]
    Pdf(String),
}

pub type ExportResult<T> = Result<T, ExportError>;
