//! The record store adapter seam.
//!
//! The engine itself performs no I/O; it consumes enriched
//! [`TimeRecord`](crate::models::TimeRecord)s produced by a record store.
//! This module defines the trait that store implementations satisfy, plus an
//! in-memory implementation used by tests and embedding hosts.

use std::collections::HashMap;

use crate::error::EngineResult;
use crate::models::{
    Customer, Department, Employee, EmployeeRef, Task, TaskRef, TimeEntry, TimeRecord, WorkCenter,
};

/// A queryable source of enriched time records.
///
/// Implementations join each raw time entry with its employee and task
/// attributes, resolving the employee's department chain up to the work
/// center. Reference integrity is the implementation's responsibility; the
/// engine does not re-verify it.
///
/// # Caching contract
///
/// Implementations that cache query results must invalidate any cached
/// result that could include a changed record whenever a time entry is
/// created, updated, or deleted, or whenever the active flag of a referenced
/// employee, task, department, or work center changes; the next report must
/// observe current data. Concurrent editors follow last-write-wins semantics
/// with no conflict detection — entries are additive, low-value edits, and
/// the engine makes that trade deliberately.
pub trait RecordStore {
    /// Returns every enriched time record currently in the store.
    fn fetch_records(&self) -> EngineResult<Vec<TimeRecord>>;
}

/// An in-memory record store.
///
/// Holds the organizational reference data and raw entries directly and
/// performs the enrichment join on every fetch. Entries whose employee or
/// task reference cannot be resolved are omitted, mirroring the inner join
/// the production store performs.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    employees: Vec<Employee>,
    tasks: Vec<Task>,
    departments: Vec<Department>,
    work_centers: Vec<WorkCenter>,
    customers: Vec<Customer>,
    entries: Vec<TimeEntry>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the organizational reference data.
    pub fn with_reference_data(
        mut self,
        employees: Vec<Employee>,
        tasks: Vec<Task>,
        departments: Vec<Department>,
        work_centers: Vec<WorkCenter>,
        customers: Vec<Customer>,
    ) -> Self {
        self.employees = employees;
        self.tasks = tasks;
        self.departments = departments;
        self.work_centers = work_centers;
        self.customers = customers;
        self
    }

    /// Adds a raw time entry.
    pub fn add_entry(&mut self, entry: TimeEntry) {
        self.entries.push(entry);
    }

    /// Returns the active tasks, the set offered for new entries and used as
    /// the task catalog of per-employee reports.
    pub fn active_tasks(&self) -> Vec<TaskRef> {
        self.tasks
            .iter()
            .filter(|task| task.active)
            .map(|task| TaskRef {
                id: task.id.clone(),
                name: task.name.clone(),
                is_customer_service: task.is_customer_service,
                customer_id: task.customer_id.clone(),
            })
            .collect()
    }

    /// Returns the active employees, the set offered in filter selectors.
    pub fn active_employees(&self) -> Vec<&Employee> {
        self.employees.iter().filter(|e| e.active).collect()
    }

    /// Returns the active departments belonging to the given work center,
    /// the narrowed list the UI offers once a work center is selected.
    pub fn departments_of(&self, work_center_id: &str) -> Vec<&Department> {
        self.departments
            .iter()
            .filter(|d| d.active && d.work_center_id == work_center_id)
            .collect()
    }
}

impl RecordStore for MemoryStore {
    fn fetch_records(&self) -> EngineResult<Vec<TimeRecord>> {
        let employees: HashMap<&str, &Employee> = self
            .employees
            .iter()
            .map(|e| (e.id.as_str(), e))
            .collect();
        let tasks: HashMap<&str, &Task> =
            self.tasks.iter().map(|t| (t.id.as_str(), t)).collect();
        let departments: HashMap<&str, &Department> = self
            .departments
            .iter()
            .map(|d| (d.id.as_str(), d))
            .collect();

        let mut records = Vec::with_capacity(self.entries.len());
        for entry in &self.entries {
            let (Some(employee), Some(task)) = (
                employees.get(entry.employee_id.as_str()),
                tasks.get(entry.task_id.as_str()),
            ) else {
                continue;
            };
            let work_center_id = departments
                .get(employee.department_id.as_str())
                .map(|d| d.work_center_id.clone())
                .unwrap_or_default();

            records.push(TimeRecord {
                id: entry.id,
                employee: EmployeeRef {
                    id: employee.id.clone(),
                    name: employee.name.clone(),
                    role: employee.role,
                    department_id: employee.department_id.clone(),
                    work_center_id,
                },
                task: TaskRef {
                    id: task.id.clone(),
                    name: task.name.clone(),
                    is_customer_service: task.is_customer_service,
                    customer_id: task.customer_id.clone(),
                },
                hours: entry.hours,
                date: entry.date,
                created_at: entry.created_at,
            });
        }
        Ok(records)
    }
}
