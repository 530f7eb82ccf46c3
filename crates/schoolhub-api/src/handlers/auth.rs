//! Auth handlers: login, logout, me.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum_extra::extract::CookieJar;
use validator::Validate;

use schoolhub_core::error::AppError;

use crate::cookie::{cleared_cookie, session_cookie};
use crate::dto::request::LoginRequest;
use crate::dto::response::{ApiResponse, LoginResponse, MessageResponse, UserResponse};
use crate::error::ApiError;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// POST /api/auth/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<ApiResponse<LoginResponse>>), ApiError> {
    let Json(req) = payload?;
    req.validate()?;

    let outcome = state
        .authenticator
        .login(&req.username, &req.password)
        .await?
        .ok_or_else(|| AppError::authentication("Invalid username or password"))?;

    let max_age = state.tokens.ttl().num_seconds();
    let cookie = session_cookie(&state.config.auth, &outcome.token.token, max_age);

    Ok((
        jar.add(cookie),
        Json(ApiResponse::ok(LoginResponse::from(outcome))),
    ))
}

/// POST /api/auth/logout
///
/// Clears the cookie only. Issued tokens stay valid until they expire.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<ApiResponse<MessageResponse>>) {
    (
        jar.add(cleared_cookie(&state.config.auth)),
        Json(ApiResponse::ok(MessageResponse {
            message: "Logged out successfully".to_string(),
        })),
    )
}

/// GET /api/auth/me
pub async fn me(
    State(state): State<AppState>,
    auth: AuthUser,
) -> Result<Json<ApiResponse<UserResponse>>, ApiError> {
    let identity = state
        .authenticator
        .identity(auth.user_id())
        .await?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(ApiResponse::ok(identity.into())))
}
