//! Aggregation by task.
//!
//! Produces one row per distinct task appearing in the record set, with the
//! task name and the hour total. This mode does not break down by employee.

use std::collections::BTreeMap;

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Cell, Table, TimeRecord};

use super::{COL_TOTAL_HOURS, round_total};

/// Column header for the task display name.
pub const COL_TASK: &str = "Task";

/// Aggregates records into one row per distinct task.
///
/// Columns are `Task` and `Total Hours`. Rows are ordered ascending by task
/// name, with the task id as a tiebreak, so output is reproducible.
///
/// Sums accumulate in full precision; each emitted total is rounded to two
/// decimals exactly once, when it is placed into the table.
pub fn aggregate_by_task(records: &[TimeRecord]) -> EngineResult<Table> {
    let mut table = Table::new(vec![COL_TASK.to_string(), COL_TOTAL_HOURS.to_string()]);

    let mut buckets: BTreeMap<(String, String), Decimal> = BTreeMap::new();
    for record in records {
        let key = (record.task.name.clone(), record.task.id.clone());
        *buckets.entry(key).or_insert(Decimal::ZERO) += record.hours;
    }

    for ((name, _id), total) in buckets {
        table.push_row(vec![Cell::Text(name), Cell::Number(round_total(total))])?;
    }

    Ok(table)
}
