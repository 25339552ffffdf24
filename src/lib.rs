//! `tabular-pipeline` is the import/export core of an order back office:
//! ingestion of heterogeneous spreadsheet files (CSV or XLSX) into a
//! normalized row model through a user-defined column mapping, and generation
//! of the two bit-exact payloads a delivery partner's intake system requires
//! (a delimiter/encoding-sensitive CSV and a cell-addressed XLSX built from
//! the partner's binary template).
//!
//! Data flow:
//!
//! ```text
//! file -> parser -> RawTable -> (FieldMapping) -> NormalizedRecords
//! orders -> ExportRows -> { delivery CSV | template workbook } -> DownloadFile
//! ```
//!
//! ## Quick example: import a file through a column mapping
//!
//! ```no_run
//! use tabular_pipeline::import::{import_from_path, ImportOptions};
//! use tabular_pipeline::types::FieldMapping;
//!
//! # fn main() -> Result<(), tabular_pipeline::ImportError> {
//! let mapping = FieldMapping::new()
//!     .assign("bookTitle", "Title")
//!     .assign("bookAuthor", "Author");
//!
//! // Auto-detects by extension (.csv/.xlsx/.xls).
//! let records = import_from_path("catalog.xlsx", &mapping, &ImportOptions::default())?;
//! println!("records={}", records.len());
//! # Ok(())
//! # }
//! ```
//!
//! ## Mapping semantics
//!
//! Only mapped columns survive; text is trimmed; empty values are omitted
//! rather than stored as empty strings; fully-empty rows are dropped:
//!
//! ```rust
//! use tabular_pipeline::import::map_rows;
//! use tabular_pipeline::types::{CellValue, FieldMapping, FieldValue, RawTable};
//!
//! let table = RawTable::new(
//!     vec!["Title".into(), "Author".into(), "Price".into()],
//!     vec![vec![
//!         CellValue::Text("Dune".into()),
//!         CellValue::Text("Herbert".into()),
//!         CellValue::Number(1200.0),
//!     ]],
//! );
//! let mapping = FieldMapping::new()
//!     .assign("bookTitle", "Title")
//!     .assign("bookAuthor", "Author");
//!
//! let records = map_rows(&table, &mapping);
//! assert_eq!(records.len(), 1);
//! assert_eq!(
//!     records[0].get("bookTitle"),
//!     Some(&FieldValue::Text("Dune".into()))
//! );
//! // Price was not mapped, so it is dropped.
//! assert_eq!(records[0].len(), 2);
//! ```
//!
//! ## Quick example: delivery CSV export
//!
//! ```rust
//! use tabular_pipeline::export::{csv::write_delivery_csv, DeliveryFlags, ExportRow};
//!
//! let row = ExportRow {
//!     reference: "CMD-001".into(),
//!     customer_name: "Amina B.".into(),
//!     phone: "0555123456".into(),
//!     wilaya_code: "16".into(),
//!     wilaya_name: "Alger".into(),
//!     commune: "Hydra".into(),
//!     address: "12 rue des Oliviers".into(),
//!     product: "livres".into(),
//!     amount: 1200,
//!     flags: DeliveryFlags {
//!         fragile: true,
//!         ..Default::default()
//!     },
//!     ..Default::default()
//! };
//!
//! let bytes = write_delivery_csv(&[row]).unwrap();
//! // UTF-8 BOM so spreadsheet applications render non-ASCII text correctly.
//! assert!(bytes.starts_with(&[0xEF, 0xBB, 0xBF]));
//! ```
//!
//! ## Modules
//!
//! - [`import`]: parsers (CSV/workbook), header mapper, unified entrypoints
//! - [`export`]: delivery CSV serializer, template workbook writer, download
//!   packaging
//! - [`types`]: raw table + mapping + normalized record model
//! - [`reference`]: injected administrative-regions name lookup
//! - [`error`]: error types for both pipeline sides

pub mod error;
pub mod export;
pub mod import;
pub mod reference;
pub mod types;

pub use error::{ExportError, ExportResult, ImportError, ImportResult};
