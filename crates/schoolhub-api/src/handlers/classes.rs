//! Class handlers.

use axum::Json;
use axum::extract::State;

use crate::dto::response::ClassList;
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/classes
pub async fn list_classes(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ClassList>, ApiError> {
    let classes = state.class_service.list(auth.context()).await?;
    Ok(Json(ClassList { classes }))
}
