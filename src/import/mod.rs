//! Import entrypoints and implementations.
//!
//! Most callers should use [`import_from_path`] (from [`unified`]) which:
//!
//! - auto-detects the source format by file extension (or you can override it
//!   via [`ImportOptions`])
//! - parses the file into a [`crate::types::RawTable`]
//! - applies the caller's [`crate::types::FieldMapping`] to produce
//!   [`crate::types::NormalizedRecord`]s
//! - optionally reports success/failure/alerts to an [`ImportObserver`]
//!
//! Format-specific parsers are also available under:
//! - [`csv`]
//! - [`excel`]

pub mod csv;
pub mod excel;
pub mod mapper;
pub mod observability;
pub mod unified;

pub use mapper::map_rows;
pub use observability::{
    FileObserver, ImportContext, ImportObserver, ImportSeverity, ImportStats, MappingStats,
    StdErrObserver,
};
pub use unified::{import_from_path, parse_from_path, ImportOptions, SourceFormat};
