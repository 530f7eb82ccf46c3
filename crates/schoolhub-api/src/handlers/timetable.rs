//! Timetable handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::dto::request::ClassQuery;
use crate::dto::response::TimetableList;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/timetable?class_id=
pub async fn list_timetable(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<ClassQuery>, QueryRejection>,
) -> Result<Json<TimetableList>, ApiError> {
    let Query(query) = query?;
    let timetable = state
        .timetable_service
        .list(auth.context(), query.class_id)
        .await?;
    Ok(Json(TimetableList { timetable }))
}
