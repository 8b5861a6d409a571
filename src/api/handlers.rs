//! HTTP request handlers for the Timesheet Reporting Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::rejection::JsonRejection,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::post,
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::export::{ExportOptions, serialize, suggested_filename};
use crate::models::{Requester, TaskRef, TimeRecord};
use crate::reporting::build_report;

use super::request::{ExportRequest, ReportRequest};
use super::response::{ApiError, ApiErrorResponse};

/// Creates the API router with all endpoints.
pub fn create_router() -> Router {
    Router::new()
        .route("/report", post(report_handler))
        .route("/export", post(export_handler))
}

/// Handler for the POST /report endpoint.
///
/// Accepts a report request and returns the aggregated table as JSON.
async fn report_handler(
    payload: Result<Json<ReportRequest>, JsonRejection>,
) -> impl IntoResponse {
    // Generate correlation ID for request tracking
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing report request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let requester: Requester = request.requester.into();
    let mode = request.mode;
    let records: Vec<TimeRecord> = request.records.into_iter().map(Into::into).collect();
    let task_catalog: Vec<TaskRef> =
        request.task_catalog.into_iter().map(Into::into).collect();

    let start_time = Instant::now();
    match build_report(records, &requester, &request.criteria, mode, &task_catalog) {
        Ok(table) => {
            let duration = start_time.elapsed();
            info!(
                correlation_id = %correlation_id,
                requester_id = %requester.id,
                mode = mode.slug(),
                rows = table.row_count(),
                duration_us = duration.as_micros(),
                "Report built successfully"
            );
            (StatusCode::OK, Json(table)).into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report building failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Handler for the POST /export endpoint.
///
/// Builds the requested report and returns it serialized into the requested
/// format, with a date-stamped attachment filename.
async fn export_handler(
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let requester: Requester = request.report.requester.into();
    let mode = request.report.mode;
    let format = request.format;
    let records: Vec<TimeRecord> =
        request.report.records.into_iter().map(Into::into).collect();
    let task_catalog: Vec<TaskRef> = request
        .report
        .task_catalog
        .into_iter()
        .map(Into::into)
        .collect();

    let table = match build_report(
        records,
        &requester,
        &request.report.criteria,
        mode,
        &task_catalog,
    ) {
        Ok(table) => table,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Report building failed"
            );
            let api_error: ApiErrorResponse = err.into();
            return api_error.into_response();
        }
    };

    let now = Utc::now();
    let title = request
        .title
        .unwrap_or_else(|| mode.label().to_string());
    let options = ExportOptions::new(title, now).with_totals(request.totals);

    let start_time = Instant::now();
    match serialize(&table, format, &options) {
        Ok(payload) => {
            let duration = start_time.elapsed();
            let filename = suggested_filename(mode, format, now.date_naive());
            info!(
                correlation_id = %correlation_id,
                requester_id = %requester.id,
                mode = mode.slug(),
                format = format.label(),
                rows = table.row_count(),
                bytes = payload.len(),
                duration_us = duration.as_micros(),
                "Export completed successfully"
            );
            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, format.content_type().to_string()),
                    (
                        header::CONTENT_DISPOSITION,
                        format!("attachment; filename=\"{filename}\""),
                    ),
                ],
                payload,
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                format = format.label(),
                error = %err,
                "Export failed"
            );
            let api_error: ApiErrorResponse = err.into();
            api_error.into_response()
        }
    }
}

/// Maps a JSON extraction rejection to a structured error response.
fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> axum::response::Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            // Get the body text which contains the detailed error from serde
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
