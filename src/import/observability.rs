//! Import outcome reporting.
//!
//! The UI surfaces every import outcome as a toast (success with row counts,
//! failure with the error's short description) and the back office keeps an
//! append-only import log. Both sit behind [`ImportObserver`] so the pipeline
//! itself stays side-effect free: the unified entrypoints report to whatever
//! observer the caller configured, or to nothing.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use crate::error::ImportError;

use super::unified::SourceFormat;

/// How bad an import failure is, for alert thresholds.
///
/// `Error` covers bad input the user can recover from by re-picking the file
/// or re-mapping headers; `Critical` covers I/O and other infrastructure
/// failures that retrying the same file will not fix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ImportSeverity {
    /// The file was reached but could not be imported.
    Error,
    /// The file could not be read at all.
    Critical,
}

/// Context about an import attempt.
#[derive(Debug, Clone)]
pub struct ImportContext {
    /// The input path used for the import.
    pub path: PathBuf,
    /// Source format used for parsing.
    pub format: SourceFormat,
}

/// Outcome of the header-mapping stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MappingStats {
    /// Normalized records produced.
    pub records: usize,
    /// Raw rows that ended up with zero mapped, non-empty fields.
    pub dropped_rows: usize,
}

/// Stats reported on successful import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportStats {
    /// Raw data rows parsed from the file.
    pub rows: usize,
    /// Headers discovered in the file.
    pub headers: usize,
    /// Mapping outcome, when the operation ran the header mapper
    /// (parse-only calls report `None`).
    pub mapping: Option<MappingStats>,
}

/// Observer interface for import outcomes.
pub trait ImportObserver: Send + Sync {
    /// Called when an import succeeds.
    fn on_success(&self, _ctx: &ImportContext, _stats: ImportStats) {}

    /// Called when an import fails.
    fn on_failure(&self, _ctx: &ImportContext, _severity: ImportSeverity, _error: &ImportError) {}

    /// Called when an import failure meets the alert threshold.
    ///
    /// Default behavior forwards to [`Self::on_failure`].
    fn on_alert(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        self.on_failure(ctx, severity, error)
    }
}

/// Logs import outcomes to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ImportObserver for StdErrObserver {
    fn on_success(&self, ctx: &ImportContext, stats: ImportStats) {
        match stats.mapping {
            Some(m) => eprintln!(
                "[import] ok {:?} {}: {} rows, {} headers -> {} records ({} dropped)",
                ctx.format,
                ctx.path.display(),
                stats.rows,
                stats.headers,
                m.records,
                m.dropped_rows
            ),
            None => eprintln!(
                "[import] ok {:?} {}: {} rows, {} headers",
                ctx.format,
                ctx.path.display(),
                stats.rows,
                stats.headers
            ),
        }
    }

    fn on_failure(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        eprintln!(
            "[import] {severity:?} {:?} {}: {error}",
            ctx.format,
            ctx.path.display()
        );
    }

    fn on_alert(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        eprintln!(
            "[import][alert] {severity:?} {:?} {}: {error}",
            ctx.format,
            ctx.path.display()
        );
    }
}

/// Appends import outcomes to a local log file, one timestamped line each.
#[derive(Debug)]
pub struct FileObserver {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileObserver {
    /// Create a file observer that appends events to `path`.
    ///
    /// Writes are best-effort; failures to open/write the log file are
    /// ignored rather than allowed to fail the import itself.
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            lock: Mutex::new(()),
        }
    }

    fn append_line(&self, level: &str, message: &str) {
        let ts = chrono::Local::now().format("%Y-%m-%d %H:%M:%S");
        let _guard = self.lock.lock().ok();
        if let Ok(mut f) = OpenOptions::new().create(true).append(true).open(&self.path) {
            let _ = writeln!(f, "{ts} {level} {message}");
        }
    }
}

impl ImportObserver for FileObserver {
    fn on_success(&self, ctx: &ImportContext, stats: ImportStats) {
        let mapping = match stats.mapping {
            Some(m) => format!(" records={} dropped={}", m.records, m.dropped_rows),
            None => String::new(),
        };
        self.append_line(
            "INFO",
            &format!(
                "import ok format={:?} path={} rows={} headers={}{mapping}",
                ctx.format,
                ctx.path.display(),
                stats.rows,
                stats.headers
            ),
        );
    }

    fn on_failure(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        self.append_line(
            "ERROR",
            &format!(
                "import failed severity={severity:?} format={:?} path={}: {error}",
                ctx.format,
                ctx.path.display()
            ),
        );
    }

    fn on_alert(&self, ctx: &ImportContext, severity: ImportSeverity, error: &ImportError) {
        self.append_line(
            "ALERT",
            &format!(
                "import failed severity={severity:?} format={:?} path={}: {error}",
                ctx.format,
                ctx.path.display()
            ),
        );
    }
}
