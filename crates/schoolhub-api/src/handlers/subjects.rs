//! Subject handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::SubjectList;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/subjects
pub async fn list_subjects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SubjectList>, ApiError> {
    let subjects = state.subject_service.list(auth.context()).await?;
    Ok(Json(SubjectList { subjects }))
}

/// GET /api/teacher/subjects
pub async fn list_taught_subjects(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<SubjectList>, ApiError> {
    let subjects = state.subject_service.list_taught(auth.context()).await?;
    Ok(Json(SubjectList { subjects }))
}
