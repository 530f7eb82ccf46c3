//! Request context carrying the verified token claims.

use schoolhub_auth::Claims;

/// Context for the current authenticated request.
///
/// Built by the HTTP extractor after token verification and passed into
/// service methods so every operation knows *who* is acting.
#[derive(Debug, Clone)]
pub struct RequestContext {
    /// Verified token claims.
    pub claims: Claims,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(claims: Claims) -> Self {
        Self { claims }
    }

    /// The authenticated user's ID.
    pub fn user_id(&self) -> i64 {
        self.claims.id
    }
}
