//! Unified import entrypoints.
//!
//! [`parse_from_path`] turns a source file into a [`crate::types::RawTable`];
//! [`import_from_path`] composes parsing with the header mapper to produce
//! [`crate::types::NormalizedRecord`]s in one call.
//!
//! - If [`ImportOptions::format`] is `None`, the source format is inferred
//!   from the file extension.
//! - If an [`super::observability::ImportObserver`] is provided,
//!   success/failure/alerts are reported to it.

use std::fmt;
use std::path::Path;
use std::sync::Arc;

use crate::error::{ImportError, ImportResult};
use crate::types::{FieldMapping, NormalizedRecord, RawTable};

use super::observability::{
    ImportContext, ImportObserver, ImportSeverity, ImportStats, MappingStats,
};
use super::{csv, excel, mapper};

/// Supported source formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    /// Delimited text (`.csv`).
    Csv,
    /// Binary workbook (`.xlsx`, `.xls`, `.xlsm`).
    Workbook,
}

impl SourceFormat {
    /// Parse a source format from a file extension (case-insensitive).
    ///
    /// Detection is by filename extension only; content is never sniffed.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "csv" => Some(Self::Csv),
            "xlsx" | "xls" | "xlsm" => Some(Self::Workbook),
            _ => None,
        }
    }
}

/// Options controlling unified import behavior.
///
/// Use [`Default`] for common cases.
#[derive(Clone)]
pub struct ImportOptions {
    /// If `None`, auto-detect the format from the file extension.
    pub format: Option<SourceFormat>,
    /// Optional observer for logging/alerts.
    pub observer: Option<Arc<dyn ImportObserver>>,
    /// Severity threshold at which `on_alert` is invoked.
    pub alert_at_or_above: ImportSeverity,
}

impl Default for ImportOptions {
    fn default() -> Self {
        Self {
            format: None,
            observer: None,
            alert_at_or_above: ImportSeverity::Critical,
        }
    }
}

impl fmt::Debug for ImportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ImportOptions")
            .field("format", &self.format)
            .field("observer_set", &self.observer.is_some())
            .field("alert_at_or_above", &self.alert_at_or_above)
            .finish()
    }
}

/// Parse a source file into a [`RawTable`] (no mapping applied).
///
/// The parser is purely structural; it performs no business validation.
pub fn parse_from_path(path: impl AsRef<Path>, options: &ImportOptions) -> ImportResult<RawTable> {
    let path = path.as_ref();
    let fmt = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = ImportContext {
        path: path.to_path_buf(),
        format: fmt,
    };

    let result = parse_stage(path, fmt);

    if let Some(obs) = options.observer.as_ref() {
        match &result {
            Ok(table) => obs.on_success(
                &ctx,
                ImportStats {
                    rows: table.row_count(),
                    headers: table.headers.len(),
                    mapping: None,
                },
            ),
            Err(e) => report_failure(obs.as_ref(), options, &ctx, e),
        }
    }

    result
}

/// Parse a source file and apply `mapping`, yielding normalized records.
///
/// Row order follows the source file. Rows that end up with zero mapped,
/// non-empty fields are dropped. The observer (if any) sees the combined
/// outcome: parse stats plus how many records the mapper kept and dropped.
pub fn import_from_path(
    path: impl AsRef<Path>,
    mapping: &FieldMapping,
    options: &ImportOptions,
) -> ImportResult<Vec<NormalizedRecord>> {
    let path = path.as_ref();
    let fmt = match options.format {
        Some(f) => f,
        None => infer_format_from_path(path)?,
    };

    let ctx = ImportContext {
        path: path.to_path_buf(),
        format: fmt,
    };

    match parse_stage(path, fmt) {
        Ok(table) => {
            let records = mapper::map_rows(&table, mapping);
            if let Some(obs) = options.observer.as_ref() {
                obs.on_success(
                    &ctx,
                    ImportStats {
                        rows: table.row_count(),
                        headers: table.headers.len(),
                        mapping: Some(MappingStats {
                            records: records.len(),
                            dropped_rows: table.row_count() - records.len(),
                        }),
                    },
                );
            }
            Ok(records)
        }
        Err(e) => {
            if let Some(obs) = options.observer.as_ref() {
                report_failure(obs.as_ref(), options, &ctx, &e);
            }
            Err(e)
        }
    }
}

fn parse_stage(path: &Path, fmt: SourceFormat) -> ImportResult<RawTable> {
    match fmt {
        SourceFormat::Csv => csv::parse_csv_from_path(path),
        SourceFormat::Workbook => excel::parse_workbook_from_path(path),
    }
}

fn report_failure(
    obs: &dyn ImportObserver,
    options: &ImportOptions,
    ctx: &ImportContext,
    e: &ImportError,
) {
    let sev = severity_for_error(e);
    obs.on_failure(ctx, sev, e);
    if sev >= options.alert_at_or_above {
        obs.on_alert(ctx, sev, e);
    }
}

fn severity_for_error(e: &ImportError) -> ImportSeverity {
    match e {
        ImportError::Io(_) => ImportSeverity::Critical,
        ImportError::CsvSyntax(err) => match err.kind() {
            ::csv::ErrorKind::Io(_) => ImportSeverity::Critical,
            _ => ImportSeverity::Error,
        },
        ImportError::Workbook(err) => {
            if matches!(err, calamine::Error::Io(_)) {
                ImportSeverity::Critical
            } else {
                ImportSeverity::Error
            }
        }
        ImportError::EmptyFile | ImportError::NoHeaders | ImportError::UnsupportedFormat { .. } => {
            ImportSeverity::Error
        }
    }
}

fn infer_format_from_path(path: &Path) -> ImportResult<SourceFormat> {
    path.extension()
        .and_then(|s| s.to_str())
        .and_then(SourceFormat::from_extension)
        .ok_or_else(|| ImportError::UnsupportedFormat {
            path: path.display().to_string(),
        })
}
