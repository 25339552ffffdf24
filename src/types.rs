//! Core data model types for the import pipeline.
//!
//! Parsing produces a [`RawTable`] (discovered headers plus raw rows); the
//! header mapper turns raw rows into [`NormalizedRecord`]s using a
//! caller-supplied [`FieldMapping`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// A single raw cell value as read from the source file.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum CellValue {
    /// Absent or blank cell.
    #[default]
    Empty,
    /// Text cell.
    Text(String),
    /// Numeric cell (workbook sources preserve numbers as numbers).
    Number(f64),
}

impl CellValue {
    /// Returns `true` for [`CellValue::Empty`].
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty)
    }
}

/// The structural result of parsing one source file: the ordered header set
/// and the raw data rows.
///
/// Rows are index-aligned with `headers`. A row may be shorter than the
/// header count; missing trailing cells read as [`CellValue::Empty`].
#[derive(Debug, Clone, PartialEq)]
pub struct RawTable {
    /// Ordered, distinct header strings from the file's first row.
    pub headers: Vec<String>,
    /// Raw data rows in source order.
    pub rows: Vec<Vec<CellValue>>,
}

impl RawTable {
    /// Create a table from headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<CellValue>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the index of a header by name, if present.
    pub fn header_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Cell at `(row, col)`, treating short rows as trailing-empty.
    pub fn value(&self, row: usize, col: usize) -> &CellValue {
        const EMPTY: &CellValue = &CellValue::Empty;
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .unwrap_or(EMPTY)
    }
}

/// A user-declared mapping from logical field name to source column header.
///
/// Assignments are kept in declaration order. A logical field that the user
/// left unmapped is simply absent. The mapping arrives from the UI boundary
/// as plain data, hence the serde derives.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldMapping {
    assignments: Vec<(String, String)>,
}

impl FieldMapping {
    /// Create an empty mapping.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an assignment of `field` to source column `header` (builder style).
    pub fn assign(mut self, field: impl Into<String>, header: impl Into<String>) -> Self {
        self.assignments.push((field.into(), header.into()));
        self
    }

    /// Number of assignments.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Returns `true` if no field is mapped.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Iterate `(logical field, source header)` pairs in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.assignments
            .iter()
            .map(|(f, h)| (f.as_str(), h.as_str()))
    }

    /// Invert to a source-header -> logical-field lookup.
    ///
    /// A header may map to at most one field. If two fields claim the same
    /// header, the first declared assignment wins and the rest are ignored.
    pub fn inverted(&self) -> BTreeMap<&str, &str> {
        let mut by_header: BTreeMap<&str, &str> = BTreeMap::new();
        for (field, header) in self.iter() {
            by_header.entry(header).or_insert(field);
        }
        by_header
    }
}

/// A cleaned value inside a [`NormalizedRecord`].
///
/// There is no empty variant: empty/absent source values are omitted from the
/// record entirely so that downstream defaults can apply.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum FieldValue {
    /// Trimmed text.
    Text(String),
    /// Number carried through from a workbook cell.
    Number(f64),
}

/// A mapped, cleaned record keyed by logical field name.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct NormalizedRecord {
    fields: BTreeMap<String, FieldValue>,
}

impl NormalizedRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a field value.
    pub fn insert(&mut self, field: impl Into<String>, value: FieldValue) {
        self.fields.insert(field.into(), value);
    }

    /// Look up a field value.
    pub fn get(&self, field: &str) -> Option<&FieldValue> {
        self.fields.get(field)
    }

    /// Number of populated fields.
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Returns `true` if no field is populated.
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Iterate `(field, value)` pairs in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Iterate populated field names.
    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.keys().map(String::as_str)
    }
}
