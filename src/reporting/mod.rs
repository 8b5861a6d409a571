//! Report building for the Timesheet Reporting Engine.
//!
//! This module contains the reporting pipeline: role-based access
//! restriction, user-chosen criteria filtering, shared date bucketing, and
//! the three aggregation modes (by employee, by task, by calendar day).

mod access;
mod by_employee;
mod by_period;
mod by_task;
mod criteria;
mod date_bucket;

pub use access::restrict;
pub use by_employee::{COL_EMPLOYEE, aggregate_by_employee};
pub use by_period::{COL_DATE, COL_ENTRIES, aggregate_by_period};
pub use by_task::{COL_TASK, aggregate_by_task};
pub use criteria::{Criteria, apply_criteria};
pub use date_bucket::{bucket_by_day, day_label};

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::EngineResult;
use crate::models::{Requester, Table, TaskRef, TimeRecord};

/// Column header for hour totals, shared by all aggregation modes.
pub const COL_TOTAL_HOURS: &str = "Total Hours";

/// The grouping dimension for a report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportMode {
    /// One row per employee, with a per-task breakdown.
    ByEmployee,
    /// One row per task.
    ByTask,
    /// One row per calendar day, ascending.
    ByPeriod,
}

impl ReportMode {
    /// Returns the human-readable report title for this mode.
    pub fn label(&self) -> &'static str {
        match self {
            ReportMode::ByEmployee => "Hours by Employee",
            ReportMode::ByTask => "Hours by Task",
            ReportMode::ByPeriod => "Hours by Day",
        }
    }

    /// Returns the short name used in file names and logs.
    pub fn slug(&self) -> &'static str {
        match self {
            ReportMode::ByEmployee => "by_employee",
            ReportMode::ByTask => "by_task",
            ReportMode::ByPeriod => "by_period",
        }
    }
}

/// Rounds an accumulated total to two decimal places for output.
///
/// Intermediate sums are never rounded; this runs exactly once per value,
/// at the point the value is placed into the output table. Midpoints round
/// away from zero, so 1.005 becomes 1.01.
pub fn round_total(total: Decimal) -> Decimal {
    total.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Aggregates an already-filtered record set along the requested dimension.
///
/// `task_catalog` supplies the column set for [`ReportMode::ByEmployee`]; the
/// other modes ignore it. An empty record set yields a zero-row table that
/// still carries its full column set.
pub fn aggregate(
    records: &[TimeRecord],
    mode: ReportMode,
    task_catalog: &[TaskRef],
) -> EngineResult<Table> {
    match mode {
        ReportMode::ByEmployee => aggregate_by_employee(records, task_catalog),
        ReportMode::ByTask => aggregate_by_task(records),
        ReportMode::ByPeriod => aggregate_by_period(records),
    }
}

/// Runs the full reporting pipeline: restrict, filter, aggregate.
///
/// The access restriction runs first and cannot be widened by any criteria;
/// the criteria filter then narrows the visible set; the aggregation turns
/// the survivors into a table.
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{Requester, Role};
/// use timesheet_engine::reporting::{Criteria, ReportMode, build_report};
///
/// let requester = Requester {
///     id: "emp_001".to_string(),
///     role: Role::Admin,
/// };
/// let table = build_report(
///     vec![],
///     &requester,
///     &Criteria::default(),
///     ReportMode::ByTask,
///     &[],
/// )
/// .unwrap();
/// assert!(table.is_empty());
/// ```
pub fn build_report(
    records: Vec<TimeRecord>,
    requester: &Requester,
    criteria: &Criteria,
    mode: ReportMode,
    task_catalog: &[TaskRef],
) -> EngineResult<Table> {
    let visible = restrict(records, requester);
    let filtered = apply_criteria(visible, criteria);
    aggregate(&filtered, mode, task_catalog)
}
