//! Error types for the Timesheet Reporting Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while building or exporting reports.

use thiserror::Error;

/// The main error type for the Timesheet Reporting Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use timesheet_engine::error::EngineError;
///
/// let error = EngineError::NoExportData {
///     format: "document".to_string(),
/// };
/// assert_eq!(error.to_string(), "No data to export as document");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// The paginated document export was asked to render an empty table.
    ///
    /// The delimited-text and spreadsheet exports produce header-only
    /// payloads for empty tables instead of raising this error.
    #[error("No data to export as {format}")]
    NoExportData {
        /// The export format that was requested.
        format: String,
    },

    /// The underlying format writer failed while serializing a table.
    #[error("Failed to export as {format}: {message}")]
    ExportFailed {
        /// The export format that was being written.
        format: String,
        /// A description of the writer failure.
        message: String,
    },

    /// A row with the wrong number of cells was appended to a table.
    #[error("Row has {actual} cells but the table has {expected} columns")]
    ColumnCountMismatch {
        /// The number of columns the table declares.
        expected: usize,
        /// The number of cells in the rejected row.
        actual: usize,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_export_data_displays_format() {
        let error = EngineError::NoExportData {
            format: "document".to_string(),
        };
        assert_eq!(error.to_string(), "No data to export as document");
    }

    #[test]
    fn test_export_failed_displays_format_and_message() {
        let error = EngineError::ExportFailed {
            format: "spreadsheet".to_string(),
            message: "sheet name too long".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to export as spreadsheet: sheet name too long"
        );
    }

    #[test]
    fn test_column_count_mismatch_displays_counts() {
        let error = EngineError::ColumnCountMismatch {
            expected: 4,
            actual: 3,
        };
        assert_eq!(
            error.to_string(),
            "Row has 3 cells but the table has 4 columns"
        );
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<EngineError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_no_export_data() -> EngineResult<()> {
            Err(EngineError::NoExportData {
                format: "document".to_string(),
            })
        }

        fn propagates_error() -> EngineResult<()> {
            returns_no_export_data()?;
            Ok(())
        }

        assert!(propagates_error().is_err());
    }
}
