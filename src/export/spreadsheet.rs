//! Spreadsheet (XLSX) serialization.
//!
//! Produces a single-sheet workbook with a bold header row and column widths
//! sized to the content, so the file is readable without manual resizing.

use rust_decimal::prelude::ToPrimitive;
use rust_xlsxwriter::{Format, Workbook};

use crate::error::EngineResult;
use crate::models::{Cell, Table};

use super::{ExportFormat, export_failed};

/// The cap applied to computed column widths, in characters.
pub const MAX_COLUMN_WIDTH: usize = 50;

/// Serializes a table as a single-sheet XLSX workbook.
///
/// The sheet is named after the report. Each column is sized to the maximum
/// of its header length and its longest stringified value, plus padding,
/// capped at [`MAX_COLUMN_WIDTH`] characters. An empty table produces a
/// header-only sheet.
pub fn write_spreadsheet(table: &Table, sheet_name: &str) -> EngineResult<Vec<u8>> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet
        .set_name(sheet_name)
        .map_err(|err| export_failed(ExportFormat::Spreadsheet, err))?;

    let header_format = Format::new().set_bold();
    for (col, name) in table.columns().iter().enumerate() {
        worksheet
            .write_string_with_format(0, col as u16, name, &header_format)
            .map_err(|err| export_failed(ExportFormat::Spreadsheet, err))?;
    }

    for (row_index, row) in table.rows().iter().enumerate() {
        let row_number = (row_index + 1) as u32;
        for (col, cell) in row.iter().enumerate() {
            let col = col as u16;
            match cell {
                Cell::Number(value) => worksheet.write_number(
                    row_number,
                    col,
                    value.to_f64().unwrap_or_default(),
                ),
                Cell::Count(value) => worksheet.write_number(row_number, col, *value as f64),
                Cell::Text(value) => worksheet.write_string(row_number, col, value),
            }
            .map_err(|err| export_failed(ExportFormat::Spreadsheet, err))?;
        }
    }

    for (col, width) in column_widths(table).into_iter().enumerate() {
        worksheet
            .set_column_width(col as u16, width as f64)
            .map_err(|err| export_failed(ExportFormat::Spreadsheet, err))?;
    }

    workbook
        .save_to_buffer()
        .map_err(|err| export_failed(ExportFormat::Spreadsheet, err))
}

/// Computes per-column widths: max(header, longest value) + 2, capped at 50.
fn column_widths(table: &Table) -> Vec<usize> {
    table
        .columns()
        .iter()
        .enumerate()
        .map(|(index, header)| {
            let longest_value = table
                .rows()
                .iter()
                .map(|row| row[index].to_string().chars().count())
                .max()
                .unwrap_or(0);
            (header.chars().count().max(longest_value) + 2).min(MAX_COLUMN_WIDTH)
        })
        .collect()
}
