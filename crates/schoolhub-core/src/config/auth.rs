//! Authentication configuration.

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Environment name in which a missing signing secret is fatal.
pub const PRODUCTION_ENVIRONMENT: &str = "production";

/// Signing secret used outside production when none is configured.
const DEVELOPMENT_SIGNING_SECRET: &str = "schoolhub-development-signing-secret";

/// Minimum Argon2 memory cost in KiB.
pub const MIN_PASSWORD_MEMORY_KIB: u32 = 19_456;
/// Minimum Argon2 iteration count.
pub const MIN_PASSWORD_ITERATIONS: u32 = 2;

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default)]
    pub jwt_secret: Option<String>,
    /// Token lifetime in days.
    #[serde(default = "default_token_ttl_days")]
    pub token_ttl_days: i64,
    /// Name of the cookie carrying the token, also used for header fallback.
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
    /// Whether the auth cookie carries the `Secure` attribute.
    #[serde(default)]
    pub cookie_secure: bool,
    /// Argon2 memory cost in KiB.
    #[serde(default = "default_password_memory_kib")]
    pub password_memory_kib: u32,
    /// Argon2 iteration count.
    #[serde(default = "default_password_iterations")]
    pub password_iterations: u32,
    /// Argon2 degree of parallelism.
    #[serde(default = "default_password_parallelism")]
    pub password_parallelism: u32,
}

/// The signing secret chosen at startup.
#[derive(Clone)]
pub struct SigningSecret {
    /// Raw secret bytes as configured.
    pub value: String,
    /// `true` when the development fallback was used.
    pub is_fallback: bool,
}

impl std::fmt::Debug for SigningSecret {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SigningSecret")
            .field("is_fallback", &self.is_fallback)
            .finish()
    }
}

impl AuthConfig {
    /// Resolve the token signing secret for the given environment.
    ///
    /// A blank or missing secret is a configuration error in production and
    /// falls back to a fixed development secret everywhere else.
    pub fn signing_secret(&self, environment: &str) -> Result<SigningSecret, AppError> {
        match self.jwt_secret.as_deref().map(str::trim) {
            Some(secret) if !secret.is_empty() => Ok(SigningSecret {
                value: secret.to_string(),
                is_fallback: false,
            }),
            _ if environment.eq_ignore_ascii_case(PRODUCTION_ENVIRONMENT) => {
                Err(AppError::configuration(
                    "auth.jwt_secret must be set in the production environment",
                ))
            }
            _ => Ok(SigningSecret {
                value: DEVELOPMENT_SIGNING_SECRET.to_string(),
                is_fallback: true,
            }),
        }
    }

    /// Token lifetime as a `chrono` duration.
    pub fn token_ttl(&self) -> chrono::Duration {
        chrono::Duration::days(self.token_ttl_days.max(1))
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: None,
            token_ttl_days: default_token_ttl_days(),
            cookie_name: default_cookie_name(),
            cookie_secure: false,
            password_memory_kib: default_password_memory_kib(),
            password_iterations: default_password_iterations(),
            password_parallelism: default_password_parallelism(),
        }
    }
}

fn default_token_ttl_days() -> i64 {
    7
}

fn default_cookie_name() -> String {
    "token".to_string()
}

fn default_password_memory_kib() -> u32 {
    MIN_PASSWORD_MEMORY_KIB
}

fn default_password_iterations() -> u32 {
    MIN_PASSWORD_ITERATIONS
}

fn default_password_parallelism() -> u32 {
    1
}
