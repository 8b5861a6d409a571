//! User-chosen dimension filters.
//!
//! Criteria narrow an already access-restricted record set. Every populated
//! dimension is a conjunctive predicate; an unset dimension imposes no
//! restriction. Unknown identifiers simply match nothing.

use std::collections::HashSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::TimeRecord;

/// Optional filter predicates across the five supported dimensions.
///
/// Work-center and department selections are independent predicates: the
/// filter does not intersect them through the department chain, so a
/// department set that does not belong to the selected work centers yields
/// an empty result. Keeping the two selections consistent is the caller's
/// job (the UI narrows the offered department list before building criteria).
///
/// # Example
///
/// ```
/// use timesheet_engine::reporting::Criteria;
///
/// let criteria = Criteria::default();
/// assert!(criteria.is_unrestricted());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Criteria {
    /// Inclusive lower bound on the record date.
    #[serde(default)]
    pub date_from: Option<NaiveDate>,
    /// Inclusive upper bound on the record date.
    #[serde(default)]
    pub date_to: Option<NaiveDate>,
    /// Employee ids to keep; empty means all employees pass.
    #[serde(default)]
    pub employee_ids: HashSet<String>,
    /// Task ids to keep; empty means all tasks pass.
    #[serde(default)]
    pub task_ids: HashSet<String>,
    /// Work-center ids to keep; empty means all work centers pass.
    #[serde(default)]
    pub work_center_ids: HashSet<String>,
    /// Department ids to keep; empty means all departments pass.
    #[serde(default)]
    pub department_ids: HashSet<String>,
}

impl Criteria {
    /// Returns true if no dimension is populated.
    pub fn is_unrestricted(&self) -> bool {
        self.date_from.is_none()
            && self.date_to.is_none()
            && self.employee_ids.is_empty()
            && self.task_ids.is_empty()
            && self.work_center_ids.is_empty()
            && self.department_ids.is_empty()
    }

    /// Returns true if the record passes every populated dimension.
    pub fn matches(&self, record: &TimeRecord) -> bool {
        if let Some(from) = self.date_from {
            if record.date < from {
                return false;
            }
        }
        if let Some(to) = self.date_to {
            if record.date > to {
                return false;
            }
        }
        set_allows(&self.employee_ids, &record.employee.id)
            && set_allows(&self.task_ids, &record.task.id)
            && set_allows(&self.work_center_ids, &record.employee.work_center_id)
            && set_allows(&self.department_ids, &record.employee.department_id)
    }
}

// An empty set means "all values pass", never "no values pass".
fn set_allows(ids: &HashSet<String>, id: &str) -> bool {
    ids.is_empty() || ids.contains(id)
}

/// Applies the criteria to a record set, keeping matching records in order.
pub fn apply_criteria(records: Vec<TimeRecord>, criteria: &Criteria) -> Vec<TimeRecord> {
    if criteria.is_unrestricted() {
        return records;
    }
    records
        .into_iter()
        .filter(|record| criteria.matches(record))
        .collect()
}
