//! CSV parsing implementation.

use std::path::Path;

use crate::error::{ImportError, ImportResult};
use crate::types::{CellValue, RawTable};

/// Parse a CSV file into a [`RawTable`].
///
/// Rules:
///
/// - The first line is the header row; blank header cells are skipped.
/// - Empty fields become [`CellValue::Empty`]; everything else stays text.
/// - Records shorter than the header row read as trailing [`CellValue::Empty`]
///   cells, the same tolerance the workbook parser applies; extra trailing
///   fields are ignored.
/// - A file with headers but zero data rows is an error
///   ([`ImportError::EmptyFile`]), as is a file with no usable header row
///   ([`ImportError::NoHeaders`]).
pub fn parse_csv_from_path(path: impl AsRef<Path>) -> ImportResult<RawTable> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;
    parse_csv_from_reader(&mut rdr)
}

/// Parse CSV data from an existing CSV reader.
///
/// With a strict reader, records whose field count differs from the header
/// row surface as [`ImportError::CsvSyntax`]; build the reader with
/// `flexible(true)` to get the padding behavior of [`parse_csv_from_path`].
pub fn parse_csv_from_reader<R: std::io::Read>(rdr: &mut csv::Reader<R>) -> ImportResult<RawTable> {
    let header_record = rdr.headers()?.clone();

    // Keep the first occurrence of each distinct, non-blank header together
    // with its source column index.
    let mut headers: Vec<String> = Vec::new();
    let mut col_idxs: Vec<usize> = Vec::new();
    for (idx, cell) in header_record.iter().enumerate() {
        let name = cell.trim();
        if name.is_empty() || headers.iter().any(|h| h == name) {
            continue;
        }
        headers.push(name.to_owned());
        col_idxs.push(idx);
    }
    if headers.is_empty() {
        return Err(ImportError::NoHeaders);
    }

    let mut rows: Vec<Vec<CellValue>> = Vec::new();
    for result in rdr.records() {
        let record = result?;
        let row: Vec<CellValue> = col_idxs
            .iter()
            .map(|&idx| match record.get(idx) {
                None | Some("") => CellValue::Empty,
                Some(raw) => CellValue::Text(raw.to_owned()),
            })
            .collect();
        rows.push(row);
    }
    if rows.is_empty() {
        return Err(ImportError::EmptyFile);
    }

    Ok(RawTable::new(headers, rows))
}
