//! Login flow: credential lookup, password check, token issuance.

use std::sync::Arc;

use tracing::{info, warn};

use schoolhub_core::result::AppResult;
use schoolhub_entity::user::Identity;

use crate::credential::CredentialStore;
use crate::jwt::{IssuedToken, TokenService};
use crate::password::PasswordHasher;

/// Input hashed once at startup so unknown identifiers cost one verification.
const DUMMY_PASSWORD: &str = "schoolhub-timing-equaliser";

/// Result of a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// The authenticated identity.
    pub identity: Identity,
    /// The issued token.
    pub token: IssuedToken,
}

/// Verifies credentials and issues session tokens.
///
/// Holds no mutable state; a login never writes anything.
#[derive(Clone)]
pub struct Authenticator {
    store: Arc<dyn CredentialStore>,
    hasher: Arc<PasswordHasher>,
    tokens: Arc<TokenService>,
    dummy_hash: String,
}

impl std::fmt::Debug for Authenticator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Authenticator")
            .field("tokens", &self.tokens)
            .finish_non_exhaustive()
    }
}

impl Authenticator {
    /// Creates an authenticator from its collaborators.
    pub fn new(
        store: Arc<dyn CredentialStore>,
        hasher: Arc<PasswordHasher>,
        tokens: Arc<TokenService>,
    ) -> AppResult<Self> {
        let dummy_hash = hasher.hash(DUMMY_PASSWORD)?;
        Ok(Self {
            store,
            hasher,
            tokens,
            dummy_hash,
        })
    }

    /// Performs the login flow:
    ///
    /// 1. Look up the identity by username, then email
    /// 2. Verify the secret (against a dummy hash when the user is unknown)
    /// 3. Issue a token carrying the public claims
    ///
    /// Returns `Ok(None)` for an unknown identifier and for a wrong secret
    /// alike. `Err` is reserved for storage or signing failures.
    pub async fn login(&self, identifier: &str, secret: &str) -> AppResult<Option<LoginOutcome>> {
        let record = self.store.find_by_identifier(identifier).await?;

        let verified = match &record {
            Some(record) => self.hasher.verify(secret, record.password_hash()),
            None => {
                std::hint::black_box(self.hasher.verify(secret, &self.dummy_hash));
                false
            }
        };

        let record = match record {
            Some(record) if verified => record,
            _ => {
                warn!("Login failed");
                return Ok(None);
            }
        };

        let identity = record.into_identity();
        let token = self.tokens.issue(&identity)?;

        info!(
            user_id = identity.id,
            role = %identity.role,
            expires_at = %token.expires_at(),
            "Login succeeded"
        );
        Ok(Some(LoginOutcome { identity, token }))
    }

    /// Look up the current public identity of a token holder.
    pub async fn identity(&self, user_id: i64) -> AppResult<Option<Identity>> {
        self.store.find_by_id(user_id).await
    }

    /// The token service used for issuance.
    pub fn tokens(&self) -> &TokenService {
        &self.tokens
    }
}
