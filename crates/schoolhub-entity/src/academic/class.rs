//! School class entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A class (form group) students belong to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct SchoolClass {
    /// Class identifier.
    pub id: i64,
    /// Display name, unique across the school.
    pub name: String,
    /// Numeric grade level.
    pub grade_level: i64,
}
