//! Student handlers.

use axum::Json;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};

use crate::dto::request::ClassQuery;
use crate::dto::response::StudentList;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/students?class_id=
pub async fn list_students(
    State(state): State<AppState>,
    auth: AuthUser,
    query: Result<Query<ClassQuery>, QueryRejection>,
) -> Result<Json<StudentList>, ApiError> {
    let Query(query) = query?;
    let students = state
        .student_service
        .list(auth.context(), query.class_id)
        .await?;
    Ok(Json(StudentList { students }))
}
