//! Session cookie carrying the issued token.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::Duration;

use schoolhub_core::config::AuthConfig;

/// Cookie carrying a freshly issued token, valid for `max_age_seconds`.
pub fn session_cookie(config: &AuthConfig, token: &str, max_age_seconds: i64) -> Cookie<'static> {
    Cookie::build((config.cookie_name.clone(), token.to_string()))
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .path("/")
        .max_age(Duration::seconds(max_age_seconds))
        .build()
}

/// Cookie that makes the browser drop the session token.
pub fn cleared_cookie(config: &AuthConfig) -> Cookie<'static> {
    session_cookie(config, "", 0)
}
