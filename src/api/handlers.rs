//! HTTP request handlers for the attendance engine API.
//!
//! This module contains the handler functions for all engine endpoints.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{MonthlyTotals, aggregate, compute_fee};
use crate::editor::validate;
use crate::models::{AttendanceRecord, AttendanceStatus, PunchAction, RemarkEntry};
use crate::punch::{allowed_actions, transition};

use super::request::{
    AggregateRequest, PayrollRequest, PunchPreflightRequest, ValidateRecordRequest,
};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/punch/preflight", post(preflight_handler))
        .route("/aggregate", post(aggregate_handler))
        .route("/payroll", post(payroll_handler))
        .route("/records/validate", post(validate_handler))
        .with_state(state)
}

/// Response body for the `/punch/preflight` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PunchPreflightResponse {
    /// The status the preflight was evaluated against.
    pub current: AttendanceStatus,
    /// The requested action.
    pub action: PunchAction,
    /// The status the punch is expected to produce, pending backend
    /// confirmation.
    pub predicted: AttendanceStatus,
    /// Wire code of the predicted status.
    pub predicted_code: i64,
    /// The backend path the punch should be sent to.
    pub endpoint: String,
    /// The actions legal from the current status.
    pub allowed_actions: Vec<PunchAction>,
}

/// Response body for the `/aggregate` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AggregateResponse {
    /// Break-adjusted total work time, two decimals.
    pub total_work_time: Decimal,
    /// The remarks column rendered as text.
    pub remarks: String,
    /// The structured remark entries behind the rendered text.
    pub remark_entries: Vec<RemarkEntry>,
}

/// Handler for POST /punch/preflight.
///
/// Runs the state machine filter for a cached status and requested action
/// and reports the predicted status. Nothing is persisted; the caller still
/// has to send the punch to the backend and take its answer as final.
async fn preflight_handler(
    State(_state): State<AppState>,
    payload: Result<Json<PunchPreflightRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let current = match AttendanceStatus::from_code(request.status_code) {
        Ok(status) => status,
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                status_code = request.status_code,
                "Rejected punch preflight with unknown status code"
            );
            return ApiErrorResponse::from(err).into_response();
        }
    };

    match transition(current, request.action) {
        Ok(predicted) => {
            info!(
                correlation_id = %correlation_id,
                current = %current,
                action = %request.action,
                predicted = %predicted,
                "Punch preflight accepted"
            );
            let body = PunchPreflightResponse {
                current,
                action: request.action,
                predicted,
                predicted_code: predicted.code(),
                endpoint: format!("/attendance/{}", request.action.endpoint_path()),
                allowed_actions: allowed_actions(current),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            info!(
                correlation_id = %correlation_id,
                current = %current,
                action = %request.action,
                "Punch preflight rejected"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /aggregate.
///
/// Aggregates one day's segments and breaks into the break-adjusted total
/// and the remarks entries.
async fn aggregate_handler(
    State(state): State<AppState>,
    payload: Result<Json<AggregateRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let segments: Vec<_> = request.segments.into_iter().map(Into::into).collect();
    let breaks: Vec<_> = request.breaks.into_iter().map(Into::into).collect();

    let day = aggregate(&segments, &breaks, state.config().config());
    info!(
        correlation_id = %correlation_id,
        segments = segments.len(),
        total_work_time = %day.total_work_time,
        "Aggregated day"
    );

    let body = AggregateResponse {
        total_work_time: day.total_work_time,
        remarks: day.remarks_text(),
        remark_entries: day.remarks,
    };
    (StatusCode::OK, Json(body)).into_response()
}

/// Handler for POST /payroll.
///
/// Computes the monthly totals and projected fee for one employee-month of
/// records.
async fn payroll_handler(
    State(_state): State<AppState>,
    payload: Result<Json<PayrollRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let records: Vec<AttendanceRecord> = request.records.into_iter().map(Into::into).collect();
    let totals: MonthlyTotals = compute_fee(&records);

    if totals.warnings.is_empty() {
        info!(
            correlation_id = %correlation_id,
            records = records.len(),
            total_fee = totals.total_fee,
            "Computed monthly totals"
        );
    } else {
        warn!(
            correlation_id = %correlation_id,
            records = records.len(),
            warnings = totals.warnings.len(),
            "Computed monthly totals with consistency warnings"
        );
    }

    (StatusCode::OK, Json(totals)).into_response()
}

/// Handler for POST /records/validate.
///
/// Validates an edited record before it is submitted for persistence and
/// echoes the record back unchanged on success.
async fn validate_handler(
    State(_state): State<AppState>,
    payload: Result<Json<ValidateRecordRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    let request = match parse_json(correlation_id, payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let record: AttendanceRecord = request.record.into();
    match validate(record) {
        Ok(validated) => {
            info!(
                correlation_id = %correlation_id,
                record_id = validated.id,
                "Edited record passed validation"
            );
            (StatusCode::OK, Json(validated)).into_response()
        }
        Err(err) => {
            info!(
                correlation_id = %correlation_id,
                error = %err,
                "Edited record failed validation"
            );
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Unwraps a JSON payload, mapping axum rejections onto the error envelope.
fn parse_json<T>(
    correlation_id: Uuid,
    payload: Result<Json<T>, JsonRejection>,
) -> Result<T, Response> {
    match payload {
        Ok(Json(request)) => Ok(request),
        Err(rejection) => {
            let error = match rejection {
                JsonRejection::JsonDataError(err) => {
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
            Err((StatusCode::BAD_REQUEST, Json(error)).into_response())
        }
    }
}
