//! User lookup for authentication.
//!
//! The stored password hash is readable only inside this crate; callers
//! outside it get an [`Identity`].

use async_trait::async_trait;

use schoolhub_core::result::AppResult;
use schoolhub_database::repositories::UserRepository;
use schoolhub_entity::user::{Identity, UserAccount};

/// A user's public identity together with the stored secret hash.
#[derive(Clone)]
pub struct CredentialRecord {
    identity: Identity,
    password_hash: String,
}

impl std::fmt::Debug for CredentialRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialRecord")
            .field("identity", &self.identity)
            .finish_non_exhaustive()
    }
}

impl CredentialRecord {
    /// Pair an identity with its stored hash.
    pub fn new(identity: Identity, password_hash: impl Into<String>) -> Self {
        Self {
            identity,
            password_hash: password_hash.into(),
        }
    }

    /// The public identity.
    pub fn identity(&self) -> &Identity {
        &self.identity
    }

    /// Drop the hash, keeping the identity.
    pub fn into_identity(self) -> Identity {
        self.identity
    }

    pub(crate) fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

impl From<UserAccount> for CredentialRecord {
    fn from(account: UserAccount) -> Self {
        let identity = account.identity();
        Self::new(identity, account.password_hash)
    }
}

/// Lookup of user records by login identifier and by id.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Find a user by username, falling back to email. Both are matched
    /// case-insensitively.
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<CredentialRecord>>;

    /// Find a user's public identity by id.
    async fn find_by_id(&self, id: i64) -> AppResult<Option<Identity>>;
}

/// [`CredentialStore`] backed by the `users` table.
#[derive(Debug, Clone)]
pub struct SqlCredentialStore {
    users: UserRepository,
}

impl SqlCredentialStore {
    /// Creates a store over the user repository.
    pub fn new(users: UserRepository) -> Self {
        Self { users }
    }
}

#[async_trait]
impl CredentialStore for SqlCredentialStore {
    async fn find_by_identifier(&self, identifier: &str) -> AppResult<Option<CredentialRecord>> {
        if let Some(account) = self.users.find_by_username(identifier).await? {
            return Ok(Some(account.into()));
        }
        Ok(self
            .users
            .find_by_email(identifier)
            .await?
            .map(CredentialRecord::from))
    }

    async fn find_by_id(&self, id: i64) -> AppResult<Option<Identity>> {
        Ok(self
            .users
            .find_by_id(id)
            .await?
            .map(|account| account.identity()))
    }
}
