//! Workbook (XLSX/XLS) parsing implementation.

use std::io::{Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, Data, Range, Reader as _, Xlsx};

use crate::error::{ImportError, ImportResult};
use crate::types::{CellValue, RawTable};

/// Parse a workbook file (`.xlsx`, `.xls`, `.xlsm`) into a [`RawTable`].
///
/// Behavior:
/// - Reads the first sheet only.
/// - Row 1 is the header row; rows 2..N are data.
/// - Numeric cells stay numeric; a row shorter than the header count yields
///   [`CellValue::Empty`] for the missing trailing columns.
pub fn parse_workbook_from_path(path: impl AsRef<Path>) -> ImportResult<RawTable> {
    let mut workbook = open_workbook_auto(path)?;
    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::NoHeaders)?;
    let range = workbook.worksheet_range(&first)?;
    table_from_range(&range)
}

/// Parse XLSX data from an in-memory or streaming reader.
pub fn parse_workbook_from_reader<R: Read + Seek>(reader: R) -> ImportResult<RawTable> {
    let mut workbook = Xlsx::new(reader).map_err(calamine::Error::Xlsx)?;
    let first = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or(ImportError::NoHeaders)?;
    let range = workbook
        .worksheet_range(&first)
        .map_err(calamine::Error::Xlsx)?;
    table_from_range(&range)
}

fn table_from_range(range: &Range<Data>) -> ImportResult<RawTable> {
    let mut sheet_rows = range.rows();
    let header_row = sheet_rows.next().ok_or(ImportError::NoHeaders)?;

    // First occurrence of each distinct, non-blank header cell, with its
    // source column index.
    let mut headers: Vec<String> = Vec::new();
    let mut col_idxs: Vec<usize> = Vec::new();
    for (idx, cell) in header_row.iter().enumerate() {
        let name = cell_to_header_string(cell);
        let name = name.trim();
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
    for row in sheet_rows {
        let out_row: Vec<CellValue> = col_idxs
            .iter()
            .map(|&idx| convert_cell(row.get(idx).unwrap_or(&Data::Empty)))
            .collect();
        rows.push(out_row);
    }
    if rows.is_empty() {
        return Err(ImportError::EmptyFile);
    }

    Ok(RawTable::new(headers, rows))
}

fn cell_to_header_string(c: &Data) -> String {
    match c {
        Data::String(s) => s.clone(),
        Data::Int(i) => i.to_string(),
        Data::Float(f) => {
            if f.fract() == 0.0 {
                (*f as i64).to_string()
            } else {
                f.to_string()
            }
        }
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn convert_cell(c: &Data) -> CellValue {
    match c {
        Data::Empty => CellValue::Empty,
        Data::String(s) if s.is_empty() => CellValue::Empty,
        Data::String(s) => CellValue::Text(s.clone()),
        Data::Int(i) => CellValue::Number(*i as f64),
        Data::Float(f) => CellValue::Number(*f),
        Data::DateTime(dt) => CellValue::Number(dt.as_f64()),
        other => CellValue::Text(other.to_string()),
    }
}
