//! HTTP API module for the Timesheet Reporting Engine.
//!
//! This module provides the REST API endpoints for building and exporting
//! hour reports.

mod handlers;
mod request;
mod response;

pub use handlers::create_router;
pub use request::{
    EmployeeRefRequest, ExportRequest, ReportRequest, RequesterRequest, TaskRefRequest,
    TimeRecordRequest,
};
pub use response::ApiError;
