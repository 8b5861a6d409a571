//! Delimited-text serialization.
//!
//! Fields are separated by semicolons throughout (earlier report code mixed
//! comma and semicolon exporters; this implementation standardizes on the
//! semicolon). A UTF-8 byte-order marker is prepended so locale-sensitive
//! spreadsheet tools decode the payload correctly.

use csv::WriterBuilder;

use crate::error::EngineResult;
use crate::models::Table;

use super::{ExportFormat, export_failed};

/// The field delimiter used by the delimited-text export.
pub const DELIMITER: u8 = b';';

/// The UTF-8 byte-order marker prepended to every payload.
pub const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];

/// Serializes a table as semicolon-delimited text.
///
/// The payload starts with a UTF-8 BOM, followed by the header row and one
/// line per table row. Fields containing the delimiter, a double quote, or a
/// line break are wrapped in double quotes with internal quotes doubled. An
/// empty table produces a header-only payload.
pub fn write_delimited(table: &Table) -> EngineResult<Vec<u8>> {
    let fail = |err: csv::Error| export_failed(ExportFormat::DelimitedText, err);

    let mut writer = WriterBuilder::new()
        .delimiter(DELIMITER)
        .from_writer(Vec::new());

    writer.write_record(table.columns()).map_err(fail)?;
    for row in table.rows() {
        let fields: Vec<String> = row.iter().map(|cell| cell.to_string()).collect();
        writer.write_record(&fields).map_err(fail)?;
    }

    let body = writer
        .into_inner()
        .map_err(|err| export_failed(ExportFormat::DelimitedText, err))?;

    let mut payload = Vec::with_capacity(UTF8_BOM.len() + body.len());
    payload.extend_from_slice(UTF8_BOM);
    payload.extend_from_slice(&body);
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Cell;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn number(value: &str) -> Cell {
        Cell::Number(Decimal::from_str(value).unwrap())
    }

    fn payload_text(payload: &[u8]) -> &str {
        assert_eq!(&payload[..3], UTF8_BOM, "payload must start with the BOM");
        std::str::from_utf8(&payload[3..]).unwrap()
    }

    #[test]
    fn test_header_and_rows_use_semicolons() {
        let mut table = Table::new(vec!["Task".to_string(), "Total Hours".to_string()]);
        table
            .push_row(vec![Cell::Text("Sorting".to_string()), number("5")])
            .unwrap();
        table
            .push_row(vec![Cell::Text("Loading".to_string()), number("1.5")])
            .unwrap();

        let payload = write_delimited(&table).unwrap();

        assert_eq!(
            payload_text(&payload),
            "Task;Total Hours\nSorting;5\nLoading;1.5\n"
        );
    }

    #[test]
    fn test_empty_table_produces_header_only_payload() {
        let table = Table::new(vec!["Task".to_string(), "Total Hours".to_string()]);

        let payload = write_delimited(&table).unwrap();

        assert_eq!(payload_text(&payload), "Task;Total Hours\n");
    }

    #[test]
    fn test_fields_containing_delimiter_are_quoted() {
        let mut table = Table::new(vec!["Task".to_string(), "Total Hours".to_string()]);
        table
            .push_row(vec![Cell::Text("Sorting; ferrous".to_string()), number("2")])
            .unwrap();

        let payload = write_delimited(&table).unwrap();

        assert_eq!(
            payload_text(&payload),
            "Task;Total Hours\n\"Sorting; ferrous\";2\n"
        );
    }

    #[test]
    fn test_internal_quotes_are_doubled() {
        let mut table = Table::new(vec!["Task".to_string()]);
        table
            .push_row(vec![Cell::Text("the \"big\" press".to_string())])
            .unwrap();

        let payload = write_delimited(&table).unwrap();

        assert_eq!(payload_text(&payload), "Task\n\"the \"\"big\"\" press\"\n");
    }

    #[test]
    fn test_line_breaks_are_quoted() {
        let mut table = Table::new(vec!["Task".to_string()]);
        table
            .push_row(vec![Cell::Text("line one\nline two".to_string())])
            .unwrap();

        let payload = write_delimited(&table).unwrap();

        assert_eq!(payload_text(&payload), "Task\n\"line one\nline two\"\n");
    }

    #[test]
    fn test_round_trip_recovers_rows() {
        let mut table = Table::new(vec!["Task".to_string(), "Total Hours".to_string()]);
        table
            .push_row(vec![Cell::Text("Sorting".to_string()), number("5")])
            .unwrap();
        table
            .push_row(vec![Cell::Text("Loading".to_string()), number("1.5")])
            .unwrap();

        let payload = write_delimited(&table).unwrap();

        let mut reader = csv::ReaderBuilder::new()
            .delimiter(DELIMITER)
            .from_reader(&payload[3..]);
        let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
        assert_eq!(headers, vec!["Task", "Total Hours"]);

        let rows: Vec<Vec<String>> = reader
            .records()
            .map(|record| record.unwrap().iter().map(String::from).collect())
            .collect();
        assert_eq!(
            rows,
            vec![
                vec!["Sorting".to_string(), "5".to_string()],
                vec!["Loading".to_string(), "1.5".to_string()],
            ]
        );
    }
}
