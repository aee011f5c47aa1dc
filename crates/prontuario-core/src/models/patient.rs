//! Patient record models.

use serde::{Deserialize, Serialize};

/// A registered patient as persisted in the store.
///
/// Field names serialize in camelCase so the stored JSON matches the layout
/// the front desk UI reads back (`motherName`, `birthDate`, ...). The `photo`
/// field is omitted entirely when no image was attached; every other optional
/// field serializes as an explicit `null`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PatientRecord {
    /// Unique ID, derived from the creation timestamp in milliseconds
    pub id: i64,
    /// Patient name, exactly as typed into the form
    pub name: String,
    /// Mother's name, exactly as typed
    pub mother_name: String,
    /// Birth date in `DD/MM/YYYY`, exactly as typed
    pub birth_date: String,
    /// Age in whole years, computed once at creation from `birth_date`
    pub age: Option<i64>,
    /// Entry time in `HH:MM` (24h)
    pub entry_time: String,
    /// Exit time in `HH:MM`, if registered
    pub exit_time: Option<String>,
    /// Exit date in `DD/MM/YYYY`, if registered
    pub exit_date: Option<String>,
    /// Street address
    pub address: String,
    /// Address complement, if provided
    pub complement: Option<String>,
    /// Contact information
    pub contacts: String,
    /// Visit category label (free text, known labels drive card styling)
    pub category: String,
    /// Free-form notes, if provided
    pub notes: Option<String>,
    /// Embedded photo as a base64 data URI
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub photo: Option<String>,
}

/// Raw form fields for a new registration, all exactly as the form supplied
/// them. The registry decides which empty fields collapse to `null`.
#[derive(Debug, Clone, Default)]
pub struct NewPatient {
    pub name: String,
    pub mother_name: String,
    pub birth_date: String,
    pub entry_time: String,
    pub exit_time: String,
    pub exit_date: String,
    pub address: String,
    pub complement: String,
    pub contacts: String,
    pub category: String,
    pub notes: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_camel_case_field_names() {
        let record = PatientRecord {
            id: 1718000000000,
            name: "Ana".into(),
            mother_name: "Maria".into(),
            birth_date: "15/06/1990".into(),
            age: Some(33),
            entry_time: "08:00".into(),
            exit_time: None,
            exit_date: None,
            address: "Rua A, 10".into(),
            complement: None,
            contacts: "1234-5678".into(),
            category: "Consulta Rotineira".into(),
            notes: None,
            photo: None,
        };

        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"motherName\":\"Maria\""));
        assert!(json.contains("\"birthDate\":\"15/06/1990\""));
        assert!(json.contains("\"entryTime\":\"08:00\""));
        assert!(json.contains("\"exitTime\":null"));
        // Absent photo is omitted, not null
        assert!(!json.contains("photo"));
    }

    #[test]
    fn test_round_trip_with_photo() {
        let record = PatientRecord {
            id: 1,
            name: "Ana".into(),
            mother_name: String::new(),
            birth_date: String::new(),
            age: None,
            entry_time: String::new(),
            exit_time: Some("17:30".into()),
            exit_date: Some("01/02/2024".into()),
            address: String::new(),
            complement: Some("Apto 2".into()),
            contacts: String::new(),
            category: String::new(),
            notes: Some("retorno".into()),
            photo: Some("data:image/png;base64,AAAA".into()),
        };

        let json = serde_json::to_string(&record).unwrap();
        let back: PatientRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_deserializes_record_without_photo_field() {
        let json = r#"{
            "id": 2, "name": "Bia", "motherName": "", "birthDate": "",
            "age": null, "entryTime": "", "exitTime": null, "exitDate": null,
            "address": "", "complement": null, "contacts": "",
            "category": "", "notes": null
        }"#;
        let record: PatientRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.photo, None);
    }
}
