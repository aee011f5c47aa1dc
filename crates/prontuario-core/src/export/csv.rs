//! CSV export in the layout the front desk opens in a spreadsheet.

use super::{ExportError, ExportResult};
use crate::models::PatientRecord;

/// Download filename for the CSV export.
pub const CSV_FILENAME: &str = "pacientes.csv";

const HEADER: &str = "Nome,Nome da Mãe,Idade,Data Nascimento,Endereço,Complemento,\
Contatos,Categoria,Entrada,Saída,Data Saída,Observações";

/// Render the collection as CSV text, prefixed with a UTF-8 byte-order marker
/// so spreadsheet tools pick up the encoding. One fully-quoted row per record
/// in store order; missing fields render as empty strings.
pub fn to_csv(records: &[PatientRecord]) -> ExportResult<String> {
    if records.is_empty() {
        return Err(ExportError::EmptySet);
    }

    let mut csv = String::from('\u{FEFF}');
    csv.push_str(HEADER);
    csv.push('\n');

    for record in records {
        let age = record.age.map(|a| a.to_string()).unwrap_or_default();
        let fields = [
            record.name.as_str(),
            record.mother_name.as_str(),
            age.as_str(),
            record.birth_date.as_str(),
            record.address.as_str(),
            record.complement.as_deref().unwrap_or(""),
            record.contacts.as_str(),
            record.category.as_str(),
            record.entry_time.as_str(),
            record.exit_time.as_deref().unwrap_or(""),
            record.exit_date.as_deref().unwrap_or(""),
            record.notes.as_deref().unwrap_or(""),
        ];

        let row: Vec<String> = fields.iter().map(|f| quoted(f)).collect();
        csv.push_str(&row.join(","));
        csv.push('\n');
    }

    Ok(csv)
}

/// Double-quote a field, doubling embedded quotes.
fn quoted(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record() -> PatientRecord {
        PatientRecord {
            id: 1,
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
        }
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(matches!(to_csv(&[]), Err(ExportError::EmptySet)));
    }

    #[test]
    fn test_single_record_layout() {
        let csv = to_csv(&[make_record()]).unwrap();

        assert!(csv.starts_with('\u{FEFF}'));
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("Observações"));
        assert_eq!(
            lines[1],
            "\"Ana\",\"Maria\",\"33\",\"15/06/1990\",\"Rua A, 10\",\"\",\
\"1234-5678\",\"Consulta Rotineira\",\"08:00\",\"\",\"\",\"\""
        );
    }

    #[test]
    fn test_missing_fields_render_empty() {
        let mut record = make_record();
        record.age = None;
        record.notes = None;

        let csv = to_csv(&[record]).unwrap();
        let row = csv.lines().nth(1).unwrap();
        assert!(row.ends_with("\"08:00\",\"\",\"\",\"\""));
        assert!(row.contains("\"Ana\",\"Maria\",\"\","));
    }

    #[test]
    fn test_embedded_quotes_are_doubled() {
        let mut record = make_record();
        record.notes = Some("disse \"volto amanhã\"".into());

        let csv = to_csv(&[record]).unwrap();
        assert!(csv.contains("\"disse \"\"volto amanhã\"\"\""));
    }

    #[test]
    fn test_rows_follow_store_order() {
        let mut first = make_record();
        first.name = "Primeiro".into();
        let mut second = make_record();
        second.id = 2;
        second.name = "Segundo".into();

        let csv = to_csv(&[first, second]).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert!(lines[1].starts_with("\"Primeiro\""));
        assert!(lines[2].starts_with("\"Segundo\""));
    }
}
