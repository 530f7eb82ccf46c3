//! Teaching assignment entity.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Links a teacher to a subject taught in a class.
///
/// The set of assignments is the only source of a teacher's data scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TeachingAssignment {
    /// Assignment identifier.
    pub id: i64,
    /// Teacher profile.
    pub teacher_id: i64,
    /// Subject taught.
    pub subject_id: i64,
    /// Class taught.
    pub class_id: i64,
}
