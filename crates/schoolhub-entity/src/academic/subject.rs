//! Subject entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A subject in the catalogue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Subject {
    /// Subject identifier.
    pub id: i64,
    /// Display name.
    pub name: String,
    /// Short unique code, e.g. `MATH`.
    pub code: String,
}
