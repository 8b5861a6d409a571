//! Organizational reference data models.
//!
//! Tasks, departments, work centers, and customers are maintained by
//! administrators outside the engine. All of them are soft-deleted via an
//! `active` flag so that historical time records keep resolving.

use serde::{Deserialize, Serialize};

use super::employee::default_active;

/// Represents a task hours can be logged against.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier for the task.
    pub id: String,
    /// The task's display name.
    pub name: String,
    /// Whether this task is customer-service work.
    #[serde(default)]
    pub is_customer_service: bool,
    /// The customer this task is performed for, if any.
    #[serde(default)]
    pub customer_id: Option<String>,
    /// Whether the task is active (soft-delete flag).
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Represents a department. Departments are grouped under work centers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Department {
    /// Unique identifier for the department.
    pub id: String,
    /// The department's display name.
    pub name: String,
    /// Short code used on printed reports.
    pub code: String,
    /// The work center this department belongs to.
    pub work_center_id: String,
    /// Whether the department is active (soft-delete flag).
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Represents a work center, the top level of the organizational hierarchy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkCenter {
    /// Unique identifier for the work center.
    pub id: String,
    /// The work center's display name.
    pub name: String,
    /// Short code used on printed reports.
    pub code: String,
    /// Whether the work center is active (soft-delete flag).
    #[serde(default = "default_active")]
    pub active: bool,
}

/// Represents a customer that customer-service tasks are performed for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    /// Unique identifier for the customer.
    pub id: String,
    /// The customer's display name.
    pub name: String,
    /// Short code used on printed reports.
    pub code: String,
    /// Whether the customer is active (soft-delete flag).
    #[serde(default = "default_active")]
    pub active: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_task_with_defaults() {
        let json = r#"{"id": "task_01", "name": "Loading"}"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.name, "Loading");
        assert!(!task.is_customer_service);
        assert_eq!(task.customer_id, None);
        assert!(task.active);
    }

    #[test]
    fn test_deserialize_customer_service_task() {
        let json = r#"{
            "id": "task_02",
            "name": "On-site repair",
            "is_customer_service": true,
            "customer_id": "cus_09"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert!(task.is_customer_service);
        assert_eq!(task.customer_id.as_deref(), Some("cus_09"));
    }

    #[test]
    fn test_department_round_trip() {
        let department = Department {
            id: "dep_01".to_string(),
            name: "Sorting".to_string(),
            code: "SRT".to_string(),
            work_center_id: "wc_01".to_string(),
            active: true,
        };

        let json = serde_json::to_string(&department).unwrap();
        let deserialized: Department = serde_json::from_str(&json).unwrap();
        assert_eq!(department, deserialized);
    }

    #[test]
    fn test_inactive_work_center() {
        let json = r#"{
            "id": "wc_02",
            "name": "North plant",
            "code": "NP",
            "active": false
        }"#;

        let work_center: WorkCenter = serde_json::from_str(json).unwrap();
        assert!(!work_center.active);
    }

    #[test]
    fn test_customer_defaults_to_active() {
        let json = r#"{"id": "cus_01", "name": "Acme Recycling", "code": "ACM"}"#;

        let customer: Customer = serde_json::from_str(json).unwrap();
        assert!(customer.active);
    }
}
