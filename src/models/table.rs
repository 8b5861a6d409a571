//! The tabular report structure handed to the export serializers.
//!
//! The engine's aggregation output is a [`Table`]: an ordered list of column
//! names plus rows of scalar [`Cell`] values. This replaces the ad-hoc keyed
//! row objects of earlier report code with a single, stable contract that
//! every serializer can rely on.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// A single scalar value in a report table.
///
/// The cell kind drives presentation: numeric cells are right-aligned in the
/// paginated document and written as numbers to the spreadsheet, text cells
/// are left-aligned and written as strings.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::Cell;
/// use rust_decimal::Decimal;
///
/// let cell = Cell::Number(Decimal::new(45, 1));
/// assert_eq!(cell.to_string(), "4.5");
/// assert!(cell.is_numeric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    /// A decimal value, such as an hour total.
    Number(Decimal),
    /// A non-negative integer value, such as an entry count.
    Count(u64),
    /// A text value, such as a display name or a formatted date.
    Text(String),
}

impl Cell {
    /// Returns true for cells that hold a numeric value.
    pub fn is_numeric(&self) -> bool {
        matches!(self, Cell::Number(_) | Cell::Count(_))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            // Trailing zeros are dropped so 4.50 renders as 4.5, matching
            // the on-screen summary the reports mirror.
            Cell::Number(value) => write!(f, "{}", value.normalize()),
            Cell::Count(value) => write!(f, "{}", value),
            Cell::Text(value) => write!(f, "{}", value),
        }
    }
}

/// An aggregated report: ordered column names plus uniform rows of cells.
///
/// A table always knows its column set, even when it has no rows, so an
/// empty report still serializes with a proper header.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{Cell, Table};
/// use rust_decimal::Decimal;
///
/// let mut table = Table::new(vec!["Task".to_string(), "Total Hours".to_string()]);
/// table
///     .push_row(vec![
///         Cell::Text("Sorting".to_string()),
///         Cell::Number(Decimal::new(65, 1)),
///     ])
///     .unwrap();
/// assert_eq!(table.row_count(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Table {
    /// Creates an empty table with the given column names.
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row to the table.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ColumnCountMismatch`] if the row does not have
    /// exactly one cell per column.
    pub fn push_row(&mut self, row: Vec<Cell>) -> EngineResult<()> {
        if row.len() != self.columns.len() {
            return Err(EngineError::ColumnCountMismatch {
                expected: self.columns.len(),
                actual: row.len(),
            });
        }
        self.rows.push(row);
        Ok(())
    }

    /// Returns the ordered column names.
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Returns the rows in insertion order.
    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Returns the number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Sums the numeric cells of the named column.
    ///
    /// Returns `None` if no column with that name exists. Text cells in the
    /// column are ignored.
    ///
    /// # Example
    ///
    /// ```
    /// use timesheet_engine::models::{Cell, Table};
    /// use rust_decimal::Decimal;
    ///
    /// let mut table = Table::new(vec!["Task".to_string(), "Total Hours".to_string()]);
    /// table
    ///     .push_row(vec![
    ///         Cell::Text("Sorting".to_string()),
    ///         Cell::Number(Decimal::new(50, 1)),
    ///     ])
    ///     .unwrap();
    /// table
    ///     .push_row(vec![
    ///         Cell::Text("Loading".to_string()),
    ///         Cell::Number(Decimal::new(15, 1)),
    ///     ])
    ///     .unwrap();
    /// assert_eq!(table.column_sum("Total Hours"), Some(Decimal::new(65, 1)));
    /// ```
    pub fn column_sum(&self, column: &str) -> Option<Decimal> {
        let index = self.columns.iter().position(|name| name == column)?;
        let mut sum = Decimal::ZERO;
        for row in &self.rows {
            match &row[index] {
                Cell::Number(value) => sum += value,
                Cell::Count(value) => sum += Decimal::from(*value),
                Cell::Text(_) => {}
            }
        }
        Some(sum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_column_table() -> Table {
        Table::new(vec!["Task".to_string(), "Total Hours".to_string()])
    }

    #[test]
    fn test_push_row_accepts_matching_arity() {
        let mut table = two_column_table();
        let result = table.push_row(vec![
            Cell::Text("Sorting".to_string()),
            Cell::Number(Decimal::new(30, 1)),
        ]);
        assert!(result.is_ok());
        assert_eq!(table.row_count(), 1);
    }

    #[test]
    fn test_push_row_rejects_wrong_arity() {
        let mut table = two_column_table();
        let result = table.push_row(vec![Cell::Text("Sorting".to_string())]);
        assert!(matches!(
            result,
            Err(EngineError::ColumnCountMismatch {
                expected: 2,
                actual: 1
            })
        ));
        assert!(table.is_empty());
    }

    #[test]
    fn test_empty_table_keeps_columns() {
        let table = two_column_table();
        assert!(table.is_empty());
        assert_eq!(table.columns(), &["Task", "Total Hours"]);
    }

    #[test]
    fn test_column_sum() {
        let mut table = two_column_table();
        table
            .push_row(vec![
                Cell::Text("Sorting".to_string()),
                Cell::Number(Decimal::new(50, 1)),
            ])
            .unwrap();
        table
            .push_row(vec![
                Cell::Text("Loading".to_string()),
                Cell::Number(Decimal::new(15, 1)),
            ])
            .unwrap();

        assert_eq!(table.column_sum("Total Hours"), Some(Decimal::new(65, 1)));
        assert_eq!(table.column_sum("Task"), Some(Decimal::ZERO));
        assert_eq!(table.column_sum("Missing"), None);
    }

    #[test]
    fn test_column_sum_includes_counts() {
        let mut table = Table::new(vec!["Date".to_string(), "Entries".to_string()]);
        table
            .push_row(vec![Cell::Text("2026-02-23".to_string()), Cell::Count(3)])
            .unwrap();
        table
            .push_row(vec![Cell::Text("2026-02-24".to_string()), Cell::Count(2)])
            .unwrap();

        assert_eq!(table.column_sum("Entries"), Some(Decimal::from(5)));
    }

    #[test]
    fn test_cell_display() {
        assert_eq!(Cell::Text("Sorting".to_string()).to_string(), "Sorting");
        assert_eq!(Cell::Number(Decimal::new(450, 2)).to_string(), "4.5");
        assert_eq!(Cell::Count(12).to_string(), "12");
    }

    #[test]
    fn test_cell_is_numeric() {
        assert!(Cell::Number(Decimal::ONE).is_numeric());
        assert!(Cell::Count(1).is_numeric());
        assert!(!Cell::Text("x".to_string()).is_numeric());
    }

    #[test]
    fn test_table_serializes_columns_and_rows() {
        let mut table = two_column_table();
        table
            .push_row(vec![
                Cell::Text("Sorting".to_string()),
                Cell::Number(Decimal::new(30, 1)),
            ])
            .unwrap();

        let json = serde_json::to_value(&table).unwrap();
        assert_eq!(json["columns"][0], "Task");
        // Decimal cells serialize as strings, counts as integers.
        assert_eq!(json["rows"][0][1], "3.0");
    }
}
