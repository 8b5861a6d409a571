//! Time entry and enriched time record models.
//!
//! A [`TimeEntry`] is the raw fact a worker logs: employee, task, date, hours.
//! The record store joins each entry with its employee and task attributes
//! into a [`TimeRecord`], which is what the reporting pipeline consumes.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::employee::Role;

/// A raw time entry as stored by the record store.
///
/// Owned by the employee who logged it; mutable only by that employee or by
/// a supervisor/administrator; deleted only by an explicit operation, never
/// implicitly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeEntry {
    /// Unique identifier for the entry.
    pub id: Uuid,
    /// The employee who logged the hours.
    pub employee_id: String,
    /// The task the hours were logged against.
    pub task_id: String,
    /// The number of hours logged.
    ///
    /// The entry UI offers half-hour increments between 0.5 and 8.0, but the
    /// engine accepts any non-negative decimal and aggregates it safely.
    pub hours: Decimal,
    /// The calendar day the hours were worked (no time component).
    pub date: NaiveDate,
    /// When the entry was created.
    pub created_at: DateTime<Utc>,
}

/// The employee attributes carried on an enriched time record.
///
/// `department_id` and `work_center_id` are the resolved department chain;
/// the record store resolves the chain so the criteria filter can match both
/// dimensions without further lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRef {
    /// The employee's id.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's role.
    pub role: Role,
    /// The department the employee belongs to.
    pub department_id: String,
    /// The work center the employee's department belongs to.
    pub work_center_id: String,
}

/// The task attributes carried on an enriched time record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskRef {
    /// The task's id.
    pub id: String,
    /// The task's display name.
    pub name: String,
    /// Whether the task is customer-service work.
    #[serde(default)]
    pub is_customer_service: bool,
    /// The customer the task is performed for, if any.
    #[serde(default)]
    pub customer_id: Option<String>,
}

/// A time entry enriched with its employee and task attributes.
///
/// This is the record shape the reporting pipeline consumes. Reference
/// integrity (every record pointing at a concrete employee and task) is the
/// record store's responsibility and is not re-verified here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeRecord {
    /// Unique identifier for the underlying entry.
    pub id: Uuid,
    /// The employee who logged the hours.
    pub employee: EmployeeRef,
    /// The task the hours were logged against.
    pub task: TaskRef,
    /// The number of hours logged.
    pub hours: Decimal,
    /// The calendar day the hours were worked.
    pub date: NaiveDate,
    /// When the underlying entry was created.
    pub created_at: DateTime<Utc>,
}
