//! Delivery CSV serializer.
//!
//! The destination system's intake is byte-sensitive; the rules here must be
//! reproduced exactly:
//!
//! - UTF-8 byte-order-mark prefix (so spreadsheet applications render
//!   Arabic/French text correctly)
//! - `;` field delimiter, CRLF record delimiter
//! - header row first, using the schema's destination labels in schema order
//! - a field is quoted iff it contains the delimiter, a quote, or a newline;
//!   internal quotes are doubled
//! - flags serialize as `OUI` or the empty string, phones carry a leading
//!   apostrophe

use crate::error::{ExportError, ExportResult};

use super::row::{ExportRow, ExportValue};
use super::schema::{ExportColumn, DELIVERY_COLUMNS};

/// UTF-8 byte-order-mark prepended to every CSV payload.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Serialize export rows against the fixed delivery schema.
///
/// Output is deterministic: the same rows always produce byte-identical
/// payloads.
pub fn write_delivery_csv(rows: &[ExportRow]) -> ExportResult<Vec<u8>> {
    write_csv(rows, &DELIVERY_COLUMNS)
}

/// Serialize export rows against an explicit column schema.
pub fn write_csv(rows: &[ExportRow], columns: &[ExportColumn]) -> ExportResult<Vec<u8>> {
    let mut wtr = csv::WriterBuilder::new()
        .delimiter(b';')
        .terminator(csv::Terminator::CRLF)
        .quote_style(csv::QuoteStyle::Necessary)
        .from_writer(UTF8_BOM.to_vec());

    wtr.write_record(columns.iter().map(|c| c.header))?;
    for row in rows {
        let record: Vec<String> = columns
            .iter()
            .map(|c| field_string(row.value_for(c.field)))
            .collect();
        wtr.write_record(&record)?;
    }

    wtr.into_inner().map_err(|e| ExportError::Generation {
        message: e.to_string(),
    })
}

fn field_string(value: ExportValue) -> String {
    match value {
        ExportValue::Empty => String::new(),
        ExportValue::Text(s) => s,
        ExportValue::Integer(n) => n.to_string(),
        ExportValue::Float(f) => f.to_string(),
    }
}
