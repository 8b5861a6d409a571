//! Aggregation by calendar day.
//!
//! Produces one row per distinct date appearing in the record set, sorted
//! ascending by date. This is the one mode with a mandated sort order,
//! because chronological reports are read top to bottom.

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Cell, Table, TimeRecord};

use super::date_bucket::{bucket_by_day, day_label};
use super::{COL_TOTAL_HOURS, round_total};

/// Column header for the formatted calendar day.
pub const COL_DATE: &str = "Date";
/// Column header for the number of contributing records.
pub const COL_ENTRIES: &str = "Entries";

/// Aggregates records into one row per distinct calendar day, ascending.
///
/// Columns are `Date` (ISO-formatted), `Total Hours`, and `Entries` (the
/// number of contributing records).
///
/// Sums accumulate in full precision; each emitted total is rounded to two
/// decimals exactly once, when it is placed into the table.
pub fn aggregate_by_period(records: &[TimeRecord]) -> EngineResult<Table> {
    let mut table = Table::new(vec![
        COL_DATE.to_string(),
        COL_TOTAL_HOURS.to_string(),
        COL_ENTRIES.to_string(),
    ]);

    for (date, day_records) in bucket_by_day(records) {
        let total: Decimal = day_records.iter().map(|record| record.hours).sum();
        table.push_row(vec![
            Cell::Text(day_label(date)),
            Cell::Number(round_total(total)),
            Cell::Count(day_records.len() as u64),
        ])?;
    }

    Ok(table)
}
