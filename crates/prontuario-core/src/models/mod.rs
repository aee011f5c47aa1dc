//! Domain models for the patient registry.

mod category;
mod patient;

pub use category::*;
pub use patient::*;
