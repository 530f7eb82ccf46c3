//! Result handlers.

use axum::Json;
use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Query, State};
use validator::Validate;

use schoolhub_entity::academic::ResultRecord;

use crate::dto::request::{RecordResultRequest, ResultQuery};
use crate::dto::response::{ApiResponse, ResultList};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/results?class_id=&subject_id=&student_id=
pub async fn list_results(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<ResultQuery>, QueryRejection>,
) -> Result<Json<ResultList>, ApiError> {
    let Query(query) = query?;
    let results = state
        .result_service
        .list(auth.context(), query.into())
        .await?;
    Ok(Json(ResultList { results }))
}

/// POST /api/results
pub async fn record_result(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<RecordResultRequest>, JsonRejection>,
) -> Result<Json<ApiResponse<ResultRecord>>, ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let record = state
        .result_service
        .record(auth.context(), req.into())
        .await?;
    Ok(Json(ApiResponse::ok(record)))
}
