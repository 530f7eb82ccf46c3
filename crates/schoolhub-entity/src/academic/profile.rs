//! Role profiles attached to user accounts.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Teacher profile row, one per teacher account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TeacherProfile {
    /// Teacher identifier used by teaching assignments.
    pub id: i64,
    /// Owning user account.
    pub user_id: i64,
    /// Free-text qualification.
    pub qualification: Option<String>,
}

/// Student profile row, one per student account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StudentProfile {
    /// Student identifier.
    pub id: i64,
    /// Owning user account.
    pub user_id: i64,
    /// The single class the student belongs to.
    pub class_id: i64,
    /// Roll number within the class.
    pub roll_number: Option<String>,
}

/// A student joined with their account and class, as listed to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct StudentRecord {
    /// Student identifier.
    pub id: i64,
    /// Owning user account.
    pub user_id: i64,
    /// Class identifier.
    pub class_id: i64,
    /// Class display name.
    pub class_name: String,
    /// Roll number within the class.
    pub roll_number: Option<String>,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Account email.
    pub email: String,
}
