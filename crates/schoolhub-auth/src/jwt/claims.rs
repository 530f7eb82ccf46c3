//! JWT claims structure carried by every session token.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use schoolhub_entity::user::Role;

/// JWT claims payload: the public identity plus issue and expiry times.
///
/// `role` is kept as the raw string so a validly signed token with an
/// unrecognised role still decodes and is then denied by the access policy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claims {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email address.
    pub email: String,
    /// Role at the time of issuance.
    pub role: String,
    /// Issued-at timestamp (seconds since epoch).
    pub iat: i64,
    /// Expiration timestamp (seconds since epoch).
    pub exp: i64,
}

impl Claims {
    /// Parse the role claim, `None` when it is not one of the three roles.
    pub fn parsed_role(&self) -> Option<Role> {
        self.role.parse().ok()
    }

    /// Returns the expiration as a `DateTime<Utc>`.
    pub fn expires_at(&self) -> DateTime<Utc> {
        DateTime::from_timestamp(self.exp, 0).unwrap_or_else(Utc::now)
    }
}
