//! Announcement handlers.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use validator::Validate;

use schoolhub_entity::announcement::Announcement;

use crate::dto::request::CreateAnnouncementRequest;
use crate::dto::response::{AnnouncementList, ApiResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/announcements
pub async fn list_announcements(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<AnnouncementList>, ApiError> {
    let announcements = state.announcement_service.list(auth.context()).await?;
    Ok(Json(AnnouncementList { announcements }))
}

/// POST /api/announcements
pub async fn create_announcement(
    State(state): State<AppState>,
    auth: AuthUser,
    payload: Result<Json<CreateAnnouncementRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Announcement>>), ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let announcement = state
        .announcement_service
        .publish(auth.context(), req.into())
        .await?;
    Ok((StatusCode::CREATED, Json(ApiResponse::ok(announcement))))
}
