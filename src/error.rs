use thiserror::Error;

/// Convenience result type for import (parse + map) operations.
pub type ImportResult<T> = Result<T, ImportError>;

/// Error type returned by the import side of the pipeline.
///
/// This is a single error enum shared across CSV and workbook parsing plus the
/// header mapper. All variants are terminal for the current operation; no
/// partial table is ever returned.
#[derive(Debug, Error)]
pub enum ImportError {
    /// Underlying I/O error (e.g. file not found, permission denied).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed delimited text. The wrapped error carries the csv crate's
    /// line/byte position diagnostic.
    #[error("csv syntax error: {0}")]
    CsvSyntax(#[from] csv::Error),

    /// Workbook (XLSX/XLS) read error.
    #[error("workbook error: {0}")]
    Workbook(#[from] calamine::Error),

    /// The file parsed but contains no data rows after the header row.
    #[error("no data rows found after the header row")]
    EmptyFile,

    /// The file has no header row (first row absent or entirely blank).
    #[error("no header row found")]
    NoHeaders,

    /// The source format could not be inferred from the file extension.
    #[error("cannot infer source format from '{path}' (expected .csv, .xlsx, .xls or .xlsm)")]
    UnsupportedFormat { path: String },
}

/// Convenience result type for export operations.
pub type ExportResult<T> = Result<T, ExportError>;

/// Error type returned by the export serializers.
///
/// An export either fully succeeds or produces nothing downloadable; there is
/// no partial output to recover.
#[derive(Debug, Error)]
pub enum ExportError {
    /// Underlying I/O error (e.g. template file not found).
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error.
    #[error("csv error: {0}")]
    Csv(#[from] csv::Error),

    /// Template workbook load/save error.
    #[error("template workbook error: {0}")]
    Template(#[from] umya_spreadsheet::XlsxError),

    /// Cell injection or other generation failure.
    #[error("export generation failed: {message}")]
    Generation { message: String },
}
