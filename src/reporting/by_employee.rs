//! Aggregation by employee.
//!
//! Produces one row per distinct employee appearing in the record set, with
//! one numeric column per catalog task and a total column.

use std::collections::{BTreeMap, HashMap};

use rust_decimal::Decimal;

use crate::error::EngineResult;
use crate::models::{Cell, Table, TaskRef, TimeRecord};

use super::{COL_TOTAL_HOURS, round_total};

/// Column header for the employee display name.
pub const COL_EMPLOYEE: &str = "Employee";

#[derive(Default)]
struct EmployeeBucket {
    hours_by_task: HashMap<String, Decimal>,
    total: Decimal,
}

/// Aggregates records into one row per distinct employee.
///
/// Columns are `Employee`, one column per task in `task_catalog` (in catalog
/// order, zero-filled for tasks the employee logged no hours against), and
/// `Total Hours`. Hours logged against a task that is not in the catalog
/// still count toward the row total.
///
/// Rows are ordered ascending by display name, with the employee id as a
/// tiebreak, so output is reproducible.
///
/// Sums accumulate in full precision; each emitted value is rounded to two
/// decimals exactly once, when it is placed into the table.
pub fn aggregate_by_employee(
    records: &[TimeRecord],
    task_catalog: &[TaskRef],
) -> EngineResult<Table> {
    let mut columns = Vec::with_capacity(task_catalog.len() + 2);
    columns.push(COL_EMPLOYEE.to_string());
    columns.extend(task_catalog.iter().map(|task| task.name.clone()));
    columns.push(COL_TOTAL_HOURS.to_string());
    let mut table = Table::new(columns);

    // Keyed by (name, id) so iteration yields the documented row order.
    let mut buckets: BTreeMap<(String, String), EmployeeBucket> = BTreeMap::new();
    for record in records {
        let key = (record.employee.name.clone(), record.employee.id.clone());
        let bucket = buckets.entry(key).or_default();
        *bucket
            .hours_by_task
            .entry(record.task.id.clone())
            .or_insert(Decimal::ZERO) += record.hours;
        bucket.total += record.hours;
    }

    for ((name, _id), bucket) in buckets {
        let mut row = Vec::with_capacity(task_catalog.len() + 2);
        row.push(Cell::Text(name));
        for task in task_catalog {
            let hours = bucket
                .hours_by_task
                .get(&task.id)
                .copied()
                .unwrap_or(Decimal::ZERO);
            row.push(Cell::Number(round_total(hours)));
        }
        row.push(Cell::Number(round_total(bucket.total)));
        table.push_row(row)?;
    }

    Ok(table)
}
