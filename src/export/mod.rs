//! Export serialization for the Timesheet Reporting Engine.
//!
//! This module renders an aggregated [`Table`](crate::models::Table) into
//! one of three interchange formats: semicolon-delimited text, an XLSX
//! spreadsheet, or a paginated PDF document. Failures from the underlying
//! format writers are caught here and surfaced as [`EngineError`] values so
//! callers can show a message instead of crashing.

mod delimited;
mod document;
mod spreadsheet;

pub use delimited::{DELIMITER, UTF8_BOM, write_delimited};
pub use document::write_document;
pub use spreadsheet::{MAX_COLUMN_WIDTH, write_spreadsheet};

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};
use crate::models::Table;
use crate::reporting::ReportMode;

/// The interchange formats a report can be exported to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Semicolon-delimited UTF-8 text with a BOM.
    DelimitedText,
    /// A single-sheet XLSX workbook.
    Spreadsheet,
    /// A paginated landscape PDF document.
    Document,
}

impl ExportFormat {
    /// Returns the short name used in error messages and logs.
    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::DelimitedText => "delimited_text",
            ExportFormat::Spreadsheet => "spreadsheet",
            ExportFormat::Document => "document",
        }
    }

    /// Returns the file extension for this format, without the dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::DelimitedText => "csv",
            ExportFormat::Spreadsheet => "xlsx",
            ExportFormat::Document => "pdf",
        }
    }

    /// Returns the MIME content type for this format.
    pub fn content_type(&self) -> &'static str {
        match self {
            ExportFormat::DelimitedText => "text/csv; charset=utf-8",
            ExportFormat::Spreadsheet => {
                "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
            }
            ExportFormat::Document => "application/pdf",
        }
    }
}

/// A labeled total printed below the table in the document export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabeledTotal {
    /// The label shown before the value.
    pub label: String,
    /// The already-formatted value.
    pub value: String,
}

/// Presentation options shared by the export formats.
#[derive(Debug, Clone, PartialEq)]
pub struct ExportOptions {
    /// The report title; also used as the spreadsheet sheet name.
    pub title: String,
    /// The timestamp printed in the document header.
    pub generated_at: DateTime<Utc>,
    /// Labeled totals appended below the document table.
    pub totals: Vec<LabeledTotal>,
}

impl ExportOptions {
    /// Creates options with the given title and generation timestamp.
    pub fn new(title: impl Into<String>, generated_at: DateTime<Utc>) -> Self {
        Self {
            title: title.into(),
            generated_at,
            totals: Vec::new(),
        }
    }

    /// Attaches labeled totals for the document export.
    pub fn with_totals(mut self, totals: Vec<LabeledTotal>) -> Self {
        self.totals = totals;
        self
    }
}

/// Serializes a table into the requested format.
///
/// Empty tables produce header-only payloads for
/// [`ExportFormat::DelimitedText`] and [`ExportFormat::Spreadsheet`], and an
/// [`EngineError::NoExportData`] error for [`ExportFormat::Document`].
///
/// # Example
///
/// ```
/// use chrono::Utc;
/// use timesheet_engine::export::{ExportFormat, ExportOptions, serialize};
/// use timesheet_engine::models::Table;
///
/// let table = Table::new(vec!["Task".to_string(), "Total Hours".to_string()]);
/// let options = ExportOptions::new("Hours by Task", Utc::now());
/// let payload = serialize(&table, ExportFormat::DelimitedText, &options).unwrap();
/// assert!(payload.starts_with(&[0xEF, 0xBB, 0xBF]));
/// ```
pub fn serialize(
    table: &Table,
    format: ExportFormat,
    options: &ExportOptions,
) -> EngineResult<Vec<u8>> {
    match format {
        ExportFormat::DelimitedText => write_delimited(table),
        ExportFormat::Spreadsheet => write_spreadsheet(table, &options.title),
        ExportFormat::Document => write_document(table, options),
    }
}

/// Builds the conventional date-stamped filename for an export.
///
/// The name embeds the report mode and the export date; this is a
/// presentational convention, not a contract.
///
/// # Example
///
/// ```
/// use chrono::NaiveDate;
/// use timesheet_engine::export::{ExportFormat, suggested_filename};
/// use timesheet_engine::reporting::ReportMode;
///
/// let date = NaiveDate::from_ymd_opt(2026, 2, 23).unwrap();
/// assert_eq!(
///     suggested_filename(ReportMode::ByTask, ExportFormat::DelimitedText, date),
///     "hours_by_task_2026-02-23.csv"
/// );
/// ```
pub fn suggested_filename(mode: ReportMode, format: ExportFormat, date: NaiveDate) -> String {
    format!(
        "hours_{}_{}.{}",
        mode.slug(),
        date.format("%Y-%m-%d"),
        format.extension()
    )
}

pub(crate) fn export_failed(format: ExportFormat, err: impl std::fmt::Display) -> EngineError {
    EngineError::ExportFailed {
        format: format.label().to_string(),
        message: err.to_string(),
    }
}
