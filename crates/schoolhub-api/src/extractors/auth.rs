//! `AuthUser` extractor: reads the token from the `Authorization` header,
//! falling back to the session cookie, and verifies it.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum_extra::TypedHeader;
use axum_extra::extract::CookieJar;
use axum_extra::headers::Authorization;
use axum_extra::headers::authorization::Bearer;

use schoolhub_core::error::AppError;
use schoolhub_service::context::RequestContext;

use crate::error::ApiError;
use crate::state::AppState;

/// Extracted authenticated user context available in handlers.
#[derive(Debug, Clone)]
pub struct AuthUser(pub RequestContext);

impl AuthUser {
    /// Returns the inner `RequestContext`.
    pub fn context(&self) -> &RequestContext {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = RequestContext;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = match bearer_token(parts, state).await {
            Some(token) => token,
            None => CookieJar::from_headers(&parts.headers)
                .get(&state.config.auth.cookie_name)
                .map(|cookie| cookie.value().to_string())
                .filter(|value| !value.is_empty())
                .ok_or_else(|| AppError::authentication("Authentication required"))?,
        };

        let claims = state
            .tokens
            .verify(&token)
            .ok_or_else(|| AppError::authentication("Invalid or expired token"))?;

        Ok(AuthUser(RequestContext::new(claims)))
    }
}

async fn bearer_token(parts: &mut Parts, state: &AppState) -> Option<String> {
    TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
        .await
        .ok()
        .map(|TypedHeader(Authorization(bearer))| bearer.token().to_string())
}
