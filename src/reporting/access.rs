//! Role-based access restriction.
//!
//! Per-role visibility is decided here, once, at the data-access boundary,
//! instead of being re-implemented in each view of the surrounding system.

use crate::models::{Requester, Role, TimeRecord};

/// Restricts a record set to what the requester is allowed to see.
///
/// This is the system's sole hard security boundary and runs before any
/// user-supplied criteria; no filter parameter can widen the result.
///
/// - `employee` requesters keep only their own records.
/// - `responsible` and `admin` requesters see the full set.
/// - An unrecognized role sees nothing (fail closed).
///
/// # Example
///
/// ```
/// use timesheet_engine::models::{Requester, Role};
/// use timesheet_engine::reporting::restrict;
///
/// let requester = Requester {
///     id: "emp_001".to_string(),
///     role: Role::Unknown,
/// };
/// assert!(restrict(vec![], &requester).is_empty());
/// ```
pub fn restrict(records: Vec<TimeRecord>, requester: &Requester) -> Vec<TimeRecord> {
    match requester.role {
        Role::Responsible | Role::Admin => records,
        Role::Employee => records
            .into_iter()
            .filter(|record| record.employee.id == requester.id)
            .collect(),
        Role::Unknown => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EmployeeRef, TaskRef};
    use chrono::{DateTime, NaiveDate, Utc};
    use rust_decimal::Decimal;
    use uuid::Uuid;

    fn record_for(employee_id: &str) -> TimeRecord {
        TimeRecord {
            id: Uuid::new_v4(),
            employee: EmployeeRef {
                id: employee_id.to_string(),
                name: format!("Employee {employee_id}"),
                role: Role::Employee,
                department_id: "dep_01".to_string(),
                work_center_id: "wc_01".to_string(),
            },
            task: TaskRef {
                id: "task_01".to_string(),
                name: "Sorting".to_string(),
                is_customer_service: false,
                customer_id: None,
            },
            hours: Decimal::new(40, 1),
            date: NaiveDate::from_ymd_opt(2026, 2, 23).unwrap(),
            created_at: DateTime::<Utc>::from_timestamp(1_772_000_000, 0).unwrap(),
        }
    }

    fn requester(id: &str, role: Role) -> Requester {
        Requester {
            id: id.to_string(),
            role,
        }
    }

    #[test]
    fn test_employee_sees_only_own_records() {
        let records = vec![record_for("emp_001"), record_for("emp_002"), record_for("emp_001")];

        let visible = restrict(records, &requester("emp_001", Role::Employee));

        assert_eq!(visible.len(), 2);
        assert!(visible.iter().all(|r| r.employee.id == "emp_001"));
    }

    #[test]
    fn test_employee_with_no_records_sees_nothing() {
        let records = vec![record_for("emp_002"), record_for("emp_003")];

        let visible = restrict(records, &requester("emp_001", Role::Employee));

        assert!(visible.is_empty());
    }

    #[test]
    fn test_responsible_sees_everything() {
        let records = vec![record_for("emp_001"), record_for("emp_002")];

        let visible = restrict(records.clone(), &requester("emp_099", Role::Responsible));

        assert_eq!(visible, records);
    }

    #[test]
    fn test_admin_sees_everything() {
        let records = vec![record_for("emp_001"), record_for("emp_002")];

        let visible = restrict(records.clone(), &requester("emp_099", Role::Admin));

        assert_eq!(visible, records);
    }

    #[test]
    fn test_unknown_role_fails_closed() {
        let records = vec![record_for("emp_001"), record_for("emp_002")];

        let visible = restrict(records, &requester("emp_001", Role::Unknown));

        assert!(visible.is_empty());
    }
}
