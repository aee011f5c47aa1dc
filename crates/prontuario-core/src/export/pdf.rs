//! PDF report export: a landscape table of the registered patients.

use printpdf::path::PaintMode;
use printpdf::{
    BuiltinFont, Color, IndirectFontRef, Mm, PdfDocument, PdfLayerReference, Rect, Rgb,
};

use super::{ExportError, ExportResult};
use crate::models::PatientRecord;

/// Download filename for the PDF report.
pub const PDF_FILENAME: &str = "relatorio_pacientes.pdf";

/// Report title, centered on the first page.
pub const PDF_TITLE: &str = "Relatório de Pacientes";

// Landscape A4
const PAGE_W: f32 = 297.0;
const PAGE_H: f32 = 210.0;
const MARGIN: f32 = 10.0;

const HEADER_ROW_H: f32 = 8.0;
const ROW_H: f32 = 7.0;
const BODY_FONT_SIZE: f32 = 8.0;
const TITLE_FONT_SIZE: f32 = 18.0;

const COLUMNS: [(&str, f32); 8] = [
    ("Nome", 45.0),
    ("Mãe", 45.0),
    ("Idade", 18.0),
    ("Endereço", 60.0),
    ("Contatos", 40.0),
    ("Categoria", 35.0),
    ("Entrada", 17.0),
    ("Saída", 17.0),
];

/// Render the collection as a tabular PDF report in store order.
///
/// The age column reads "`N` anos" or "N/A"; address and complement are
/// concatenated. Refuses an empty collection rather than producing a
/// header-only document.
pub fn to_pdf(records: &[PatientRecord]) -> ExportResult<Vec<u8>> {
    if records.is_empty() {
        return Err(ExportError::EmptySet);
    }

    let (doc, page, layer) = PdfDocument::new(PDF_TITLE, Mm(PAGE_W), Mm(PAGE_H), "Tabela");
    let font = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| ExportError::Pdf(e.to_string()))?;

    let mut current = doc.get_page(page).get_layer(layer);

    // Centered title (approximate Helvetica metrics)
    let title_w = text_width_mm(PDF_TITLE, TITLE_FONT_SIZE);
    current.set_fill_color(black());
    current.use_text(
        PDF_TITLE,
        TITLE_FONT_SIZE,
        Mm((PAGE_W - title_w) / 2.0),
        Mm(PAGE_H - 15.0),
        &bold,
    );

    let mut y = PAGE_H - 25.0;
    draw_header_row(&current, &bold, y);
    y -= HEADER_ROW_H;

    for (i, record) in records.iter().enumerate() {
        if y - ROW_H < MARGIN {
            let (next_page, next_layer) = doc.add_page(Mm(PAGE_W), Mm(PAGE_H), "Tabela");
            current = doc.get_page(next_page).get_layer(next_layer);
            y = PAGE_H - MARGIN;
            draw_header_row(&current, &bold, y);
            y -= HEADER_ROW_H;
        }

        if i % 2 == 1 {
            current.set_fill_color(Color::Rgb(Rgb::new(0.96, 0.96, 0.96, None)));
            current.add_rect(
                Rect::new(Mm(MARGIN), Mm(y - ROW_H), Mm(PAGE_W - MARGIN), Mm(y))
                    .with_mode(PaintMode::Fill),
            );
        }

        current.set_fill_color(black());
        let cells = row_cells(record);
        let mut x = MARGIN;
        for ((_, width), cell) in COLUMNS.iter().zip(cells.iter()) {
            current.use_text(
                fit_to_column(cell, *width),
                BODY_FONT_SIZE,
                Mm(x + 1.0),
                Mm(y - ROW_H + 2.0),
                &font,
            );
            x += width;
        }
        y -= ROW_H;
    }

    doc.save_to_bytes().map_err(|e| ExportError::Pdf(e.to_string()))
}

fn draw_header_row(layer: &PdfLayerReference, bold: &IndirectFontRef, y: f32) {
    // Blue band, white bold labels
    layer.set_fill_color(Color::Rgb(Rgb::new(0.161, 0.502, 0.725, None)));
    layer.add_rect(
        Rect::new(Mm(MARGIN), Mm(y - HEADER_ROW_H), Mm(PAGE_W - MARGIN), Mm(y))
            .with_mode(PaintMode::Fill),
    );

    layer.set_fill_color(Color::Rgb(Rgb::new(1.0, 1.0, 1.0, None)));
    let mut x = MARGIN;
    for (label, width) in COLUMNS {
        layer.use_text(label, BODY_FONT_SIZE, Mm(x + 1.0), Mm(y - HEADER_ROW_H + 2.5), bold);
        x += width;
    }
}

fn row_cells(record: &PatientRecord) -> [String; 8] {
    let age = match record.age {
        Some(a) => format!("{} anos", a),
        None => "N/A".to_string(),
    };
    let address = match record.complement.as_deref() {
        Some(c) => format!("{} - {}", record.address, c),
        None => record.address.clone(),
    };

    [
        record.name.clone(),
        record.mother_name.clone(),
        age,
        address,
        record.contacts.clone(),
        record.category.clone(),
        record.entry_time.clone(),
        record.exit_time.clone().unwrap_or_default(),
    ]
}

/// Approximate rendered width of a string in mm (Helvetica averages roughly
/// half an em per glyph).
fn text_width_mm(text: &str, font_size_pt: f32) -> f32 {
    let avg_glyph_pt = font_size_pt * 0.5;
    text.chars().count() as f32 * avg_glyph_pt * 0.3528
}

/// Truncate cell text that would overflow its column, marking the cut.
fn fit_to_column(text: &str, column_w: f32) -> String {
    let glyph_w = BODY_FONT_SIZE * 0.5 * 0.3528;
    let max_chars = (((column_w - 2.0) / glyph_w) as usize).max(1);

    if text.chars().count() <= max_chars {
        text.to_string()
    } else {
        let mut out: String = text.chars().take(max_chars - 1).collect();
        out.push('…');
        out
    }
}

fn black() -> Color {
    Color::Rgb(Rgb::new(0.0, 0.0, 0.0, None))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(name: &str, age: Option<i64>) -> PatientRecord {
        PatientRecord {
            id: 1,
            name: name.into(),
            mother_name: "Maria".into(),
            birth_date: "15/06/1990".into(),
            age,
            entry_time: "08:00".into(),
            exit_time: Some("17:00".into()),
            exit_date: None,
            address: "Rua A, 10".into(),
            complement: Some("Fundos".into()),
            contacts: "1234-5678".into(),
            category: "Cirurgia".into(),
            notes: None,
            photo: None,
        }
    }

    #[test]
    fn test_empty_set_is_rejected() {
        assert!(matches!(to_pdf(&[]), Err(ExportError::EmptySet)));
    }

    #[test]
    fn test_output_is_a_pdf_document() {
        let bytes = to_pdf(&[make_record("Ana", Some(33))]).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
        assert!(bytes.len() > 500);
    }

    #[test]
    fn test_many_records_paginate() {
        let records: Vec<PatientRecord> = (0..80)
            .map(|i| {
                let mut r = make_record("Paciente", Some(30));
                r.id = i;
                r
            })
            .collect();

        let bytes = to_pdf(&records).unwrap();
        assert!(bytes.starts_with(b"%PDF"));
    }

    #[test]
    fn test_age_cell_formatting() {
        let cells = row_cells(&make_record("Ana", Some(33)));
        assert_eq!(cells[2], "33 anos");

        let cells = row_cells(&make_record("Bia", None));
        assert_eq!(cells[2], "N/A");
    }

    #[test]
    fn test_address_concatenates_complement() {
        let cells = row_cells(&make_record("Ana", Some(33)));
        assert_eq!(cells[3], "Rua A, 10 - Fundos");

        let mut record = make_record("Ana", Some(33));
        record.complement = None;
        assert_eq!(row_cells(&record)[3], "Rua A, 10");
    }

    #[test]
    fn test_fit_to_column_truncates() {
        let long = "um endereço realmente muito comprido para caber na coluna";
        let fitted = fit_to_column(long, 18.0);
        assert!(fitted.chars().count() < long.chars().count());
        assert!(fitted.ends_with('…'));

        assert_eq!(fit_to_column("curto", 18.0), "curto");
    }
}
