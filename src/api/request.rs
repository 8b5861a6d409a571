//! Request types for the Timesheet Reporting Engine API.
//!
//! This module defines the JSON request structures for the `/report` and
//! `/export` endpoints.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::export::{ExportFormat, LabeledTotal};
use crate::models::{EmployeeRef, Requester, Role, TaskRef, TimeRecord};
use crate::reporting::{Criteria, ReportMode};

/// Request body for the `/report` endpoint.
///
/// Carries everything the pipeline needs: who is asking, the chosen
/// criteria and mode, the record collection supplied by the record store,
/// and the task catalog that drives the per-employee column set.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRequest {
    /// Who is asking for the report.
    pub requester: RequesterRequest,
    /// The user-chosen dimension filters.
    #[serde(default)]
    pub criteria: Criteria,
    /// The grouping dimension.
    pub mode: ReportMode,
    /// The record collection to report over.
    pub records: Vec<TimeRecordRequest>,
    /// The task catalog; drives the column set of per-employee reports.
    #[serde(default)]
    pub task_catalog: Vec<TaskRefRequest>,
}

/// Request body for the `/export` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// The report to build before serializing.
    #[serde(flatten)]
    pub report: ReportRequest,
    /// The interchange format to serialize into.
    pub format: ExportFormat,
    /// Overrides the report title; defaults to the mode's label.
    #[serde(default)]
    pub title: Option<String>,
    /// Labeled totals appended below the table in the document export.
    #[serde(default)]
    pub totals: Vec<LabeledTotal>,
}

/// Requester information in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequesterRequest {
    /// The id of the requesting employee.
    pub id: String,
    /// The role of the requesting employee.
    pub role: Role,
}

/// A time record in a report request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimeRecordRequest {
    /// The entry id; generated when omitted.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    /// The employee attributes of the record.
    pub employee: EmployeeRefRequest,
    /// The task attributes of the record.
    pub task: TaskRefRequest,
    /// The number of hours logged.
    pub hours: Decimal,
    /// The calendar day the hours were worked.
    pub date: NaiveDate,
    /// When the entry was created; defaults to the time of the request.
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

/// Employee attributes in a report request record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRefRequest {
    /// The employee's id.
    pub id: String,
    /// The employee's display name.
    pub name: String,
    /// The employee's role.
    #[serde(default = "default_record_role")]
    pub role: Role,
    /// The department the employee belongs to.
    #[serde(default)]
    pub department_id: String,
    /// The work center the employee's department belongs to.
    #[serde(default)]
    pub work_center_id: String,
}

/// Task attributes in a report request record or task catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TaskRefRequest {
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

fn default_record_role() -> Role {
    Role::Employee
}

impl From<RequesterRequest> for Requester {
    fn from(req: RequesterRequest) -> Self {
        Requester {
            id: req.id,
            role: req.role,
        }
    }
}

impl From<TimeRecordRequest> for TimeRecord {
    fn from(req: TimeRecordRequest) -> Self {
        TimeRecord {
            id: req.id,
            employee: req.employee.into(),
            task: req.task.into(),
            hours: req.hours,
            date: req.date,
            created_at: req.created_at,
        }
    }
}

impl From<EmployeeRefRequest> for EmployeeRef {
    fn from(req: EmployeeRefRequest) -> Self {
        EmployeeRef {
            id: req.id,
            name: req.name,
            role: req.role,
            department_id: req.department_id,
            work_center_id: req.work_center_id,
        }
    }
}

impl From<TaskRefRequest> for TaskRef {
    fn from(req: TaskRefRequest) -> Self {
        TaskRef {
            id: req.id,
            name: req.name,
            is_customer_service: req.is_customer_service,
            customer_id: req.customer_id,
        }
    }
}
