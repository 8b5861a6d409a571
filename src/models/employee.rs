//! Employee model and related types.
//!
//! This module defines the Employee struct, the Role enumeration, and the
//! Requester descriptor used to enforce role-based visibility.

use serde::{Deserialize, Serialize};

/// Represents the role assigned to an employee.
///
/// Roles are a fixed three-value enumeration assigned externally; the engine
/// never changes them. Any unrecognized value deserializes to [`Role::Unknown`],
/// which is treated as the most restrictive role (no visibility).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    /// A worker who logs hours and may only see their own records.
    Employee,
    /// A supervisor with full visibility over all records.
    Responsible,
    /// An administrator with full visibility over all records.
    Admin,
    /// Any unrecognized role value. Grants no visibility.
    #[serde(other)]
    Unknown,
}

impl Role {
    /// Returns true if this role may see records belonging to other employees.
    ///
    /// # Examples
    ///
    /// ```
    /// use timesheet_engine::models::Role;
    ///
    /// assert!(Role::Responsible.can_view_all());
    /// assert!(Role::Admin.can_view_all());
    /// assert!(!Role::Employee.can_view_all());
    /// assert!(!Role::Unknown.can_view_all());
    /// ```
    pub fn can_view_all(&self) -> bool {
        matches!(self, Role::Responsible | Role::Admin)
    }
}

/// Identifies who is asking for a report.
///
/// The requester descriptor is the input to the access filter; it is supplied
/// by the session layer, which owns authentication.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Requester {
    /// The id of the requesting employee.
    pub id: String,
    /// The role of the requesting employee.
    pub role: Role,
}

/// Represents an employee in the organizational reference data.
///
/// Employees are soft-deleted: the `active` flag is cleared instead of the
/// row being removed, so historical time records keep resolving.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The role assigned to the employee.
    pub role: Role,
    /// The department the employee belongs to.
    pub department_id: String,
    /// Whether the employee is active (soft-delete flag).
    #[serde(default = "default_active")]
    pub active: bool,
}

pub(crate) fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_employee(role: Role) -> Employee {
        Employee {
            id: "emp_001".to_string(),
            name: "Ana Morales".to_string(),
            role,
            department_id: "dep_01".to_string(),
            active: true,
        }
    }

    #[test]
    fn test_deserialize_employee() {
        let json = r#"{
            "id": "emp_001",
            "name": "Ana Morales",
            "role": "employee",
            "department_id": "dep_01"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.id, "emp_001");
        assert_eq!(employee.role, Role::Employee);
        assert!(employee.active);
    }

    #[test]
    fn test_deserialize_inactive_employee() {
        let json = r#"{
            "id": "emp_002",
            "name": "Pedro Serrano",
            "role": "responsible",
            "department_id": "dep_01",
            "active": false
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.role, Role::Responsible);
        assert!(!employee.active);
    }

    #[test]
    fn test_unrecognized_role_deserializes_to_unknown() {
        let role: Role = serde_json::from_str("\"superuser\"").unwrap();
        assert_eq!(role, Role::Unknown);
    }

    #[test]
    fn test_role_serialization() {
        assert_eq!(serde_json::to_string(&Role::Employee).unwrap(), "\"employee\"");
        assert_eq!(
            serde_json::to_string(&Role::Responsible).unwrap(),
            "\"responsible\""
        );
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"admin\"");
    }

    #[test]
    fn test_can_view_all() {
        assert!(!Role::Employee.can_view_all());
        assert!(Role::Responsible.can_view_all());
        assert!(Role::Admin.can_view_all());
        assert!(!Role::Unknown.can_view_all());
    }

    #[test]
    fn test_requester_round_trip() {
        let requester = Requester {
            id: "emp_007".to_string(),
            role: Role::Admin,
        };

        let json = serde_json::to_string(&requester).unwrap();
        let deserialized: Requester = serde_json::from_str(&json).unwrap();
        assert_eq!(requester, deserialized);
    }

    #[test]
    fn test_employee_serialization_round_trip() {
        let employee = create_test_employee(Role::Employee);
        let json = serde_json::to_string(&employee).unwrap();
        let deserialized: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, deserialized);
    }
}
