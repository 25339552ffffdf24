//! Export serializers and download packaging.
//!
//! Both serializers consume the same [`ExportRow`] sequence and the same
//! fixed [`schema::DELIVERY_COLUMNS`] schema:
//!
//! - [`csv::write_delivery_csv`]: byte-exact delimited payload (BOM, `;`,
//!   CRLF, `OUI` flags, apostrophe-prefixed phones)
//! - [`xlsx::write_delivery_workbook`]: cell injection into the partner's
//!   binary template, everything else preserved
//!
//! Actually delivering the bytes to the host environment (triggering a
//! browser download, writing to disk) is the caller's concern; the testable
//! surface here is the payload.

pub mod csv;
pub mod row;
pub mod schema;
pub mod xlsx;

use chrono::NaiveDate;

use crate::error::ExportResult;

pub use row::{DeliveryFlags, ExportRow, ExportValue, FLAG_SET};
pub use schema::{ExportColumn, ExportField, DATA_START_ROW, DELIVERY_COLUMNS};

/// MIME type of the CSV export payload.
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

/// MIME type of the workbook export payload.
pub const XLSX_MIME: &str =
    "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet";

/// A fully-assembled export payload, ready to hand to the host environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DownloadFile {
    /// Suggested filename.
    pub filename: String,
    /// Payload MIME type.
    pub mime: &'static str,
    /// Payload bytes.
    pub bytes: Vec<u8>,
}

/// Filename for a CSV export dated `date` (`orders_export_<ISO-date>.csv`).
pub fn csv_filename(date: NaiveDate) -> String {
    format!("orders_export_{}.csv", date.format("%Y-%m-%d"))
}

/// Filename for a workbook export dated `date`
/// (`orders_excel_export_<ISO-date>.xlsx`).
pub fn xlsx_filename(date: NaiveDate) -> String {
    format!("orders_excel_export_{}.xlsx", date.format("%Y-%m-%d"))
}

/// Serialize rows to the delivery CSV and package them for download.
pub fn csv_download(rows: &[ExportRow], date: NaiveDate) -> ExportResult<DownloadFile> {
    Ok(DownloadFile {
        filename: csv_filename(date),
        mime: CSV_MIME,
        bytes: csv::write_delivery_csv(rows)?,
    })
}

/// Write rows into the delivery template and package the workbook for
/// download.
pub fn xlsx_download(
    rows: &[ExportRow],
    template: &[u8],
    date: NaiveDate,
) -> ExportResult<DownloadFile> {
    Ok(DownloadFile {
        filename: xlsx_filename(date),
        mime: XLSX_MIME,
        bytes: xlsx::write_delivery_workbook(template, rows)?,
    })
}
