//! Header mapper: raw rows + user mapping -> normalized records.

use crate::types::{CellValue, FieldMapping, FieldValue, NormalizedRecord, RawTable};

/// Apply a [`FieldMapping`] to a parsed [`RawTable`].
///
/// Rules (per the delivery-partner intake contract):
///
/// - Only mapped columns are carried over; unknown extra columns are ignored.
/// - Text values are trimmed. Empty or absent values are omitted from the
///   record entirely (never stored as an empty string), so that downstream
///   defaults can apply.
/// - A record with zero populated fields is discarded. This guards against
///   trailing blank lines in the source file.
/// - A mapped header that the file does not contain is never populated; the
///   mapper raises no error for it. Flagging missing required fields is
///   downstream validation's job.
pub fn map_rows(table: &RawTable, mapping: &FieldMapping) -> Vec<NormalizedRecord> {
    let by_header = mapping.inverted();

    // Project mapped headers onto their column indices once, up front.
    let projection: Vec<(usize, &str)> = table
        .headers
        .iter()
        .enumerate()
        .filter_map(|(col, header)| {
            by_header.get(header.as_str()).map(|&field| (col, field))
        })
        .collect();

    let mut records: Vec<NormalizedRecord> = Vec::new();
    for row in &table.rows {
        let mut record = NormalizedRecord::new();
        for &(col, field) in &projection {
            match row.get(col).unwrap_or(&CellValue::Empty) {
                CellValue::Empty => {}
                CellValue::Text(s) => {
                    let trimmed = s.trim();
                    if !trimmed.is_empty() {
                        record.insert(field, FieldValue::Text(trimmed.to_owned()));
                    }
                }
                CellValue::Number(n) => record.insert(field, FieldValue::Number(*n)),
            }
        }
        if !record.is_empty() {
            records.push(record);
        }
    }
    records
}
