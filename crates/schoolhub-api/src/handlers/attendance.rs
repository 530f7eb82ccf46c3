//! Attendance handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use validator::Validate;

use crate::dto::request::{AttendanceQuery, BulkAttendanceRequest};
use crate::dto::response::{ApiResponse, AttendanceList, BulkAttendanceResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/attendance?class_id=&date=
pub async fn list_attendance(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<AttendanceQuery>, QueryRejection>,
) -> Result<Json<AttendanceList>, ApiError> {
    let Query(query) = query?;
    let attendance = state
        .attendance_service
        .list(auth.context(), query.into())
        .await?;
    Ok(Json(AttendanceList { attendance }))
}

/// POST /api/attendance
pub async fn record_attendance(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<BulkAttendanceRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<BulkAttendanceResponse>>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let outcome = state
        .attendance_service
        .record_bulk(auth.context(), req.records)
        .await?;
    Ok(Json(ApiResponse::ok(BulkAttendanceResponse {
        inserted: outcome.inserted,
        updated: outcome.updated,
    })))
}
