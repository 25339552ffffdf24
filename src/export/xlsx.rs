//! Template-based workbook writer.
//!
//! The delivery partner supplies a pre-formatted XLSX template (header and
//! legend in rows 1..=11, styling, merged regions, data validation). Export
//! injects values into a fixed grid of cells on the first sheet and leaves
//! everything else exactly as the template had it; the workbook is then
//! serialized back to bytes. Any failure surfaces as a single
//! [`ExportError`]; no partial file is produced.

use std::io::Cursor;
use std::path::Path;

use crate::error::{ExportError, ExportResult};

use super::row::{ExportRow, ExportValue};
use super::schema::{ExportColumn, DATA_START_ROW, DELIVERY_COLUMNS};

/// Read the template workbook bytes from disk.
pub fn load_template(path: impl AsRef<Path>) -> ExportResult<Vec<u8>> {
    Ok(std::fs::read(path)?)
}

/// Write export rows into the delivery template and return the workbook bytes.
///
/// Rows are written in order starting at [`DATA_START_ROW`], one template row
/// per export row, into the columns of [`DELIVERY_COLUMNS`].
pub fn write_delivery_workbook(template: &[u8], rows: &[ExportRow]) -> ExportResult<Vec<u8>> {
    write_into_template(template, rows, &DELIVERY_COLUMNS)
}

/// Write export rows into a template workbook using an explicit column schema.
///
/// Only the addressed cells are touched:
///
/// - text fields become string cells (phones keep the apostrophe prefix)
/// - amount and weight become numeric cells
/// - absent optionals and cleared flags leave the template cell at its
///   default state rather than writing an empty string
pub fn write_into_template(
    template: &[u8],
    rows: &[ExportRow],
    columns: &[ExportColumn],
) -> ExportResult<Vec<u8>> {
    let mut book = umya_spreadsheet::reader::xlsx::read_reader(Cursor::new(template), true)?;
    let sheet = book
        .get_sheet_mut(&0)
        .ok_or_else(|| ExportError::Generation {
            message: "template workbook has no sheets".to_owned(),
        })?;

    for (i, row) in rows.iter().enumerate() {
        let row_number = DATA_START_ROW + i as u32;
        for column in columns {
            let coordinate = format!("{}{}", column.letter, row_number);
            match row.value_for(column.field) {
                ExportValue::Empty => {}
                ExportValue::Text(s) => {
                    sheet.get_cell_mut(coordinate.as_str()).set_value_string(s);
                }
                ExportValue::Integer(n) => {
                    sheet
                        .get_cell_mut(coordinate.as_str())
                        .set_value_number(n as f64);
                }
                ExportValue::Float(f) => {
                    sheet.get_cell_mut(coordinate.as_str()).set_value_number(f);
                }
            }
        }
    }

    let mut out = Cursor::new(Vec::new());
    umya_spreadsheet::writer::xlsx::write_writer(&book, &mut out)?;
    Ok(out.into_inner())
}
