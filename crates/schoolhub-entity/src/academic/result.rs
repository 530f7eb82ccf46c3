//! Exam result entities.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A result joined with student and subject names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct ResultRecord {
    /// Result identifier.
    pub id: i64,
    /// Student the result belongs to.
    pub student_id: i64,
    /// Student given name.
    pub first_name: String,
    /// Student family name.
    pub last_name: String,
    /// The student's class.
    pub class_id: i64,
    /// Subject identifier.
    pub subject_id: i64,
    /// Subject display name.
    pub subject_name: String,
    /// Term label, e.g. `2024-T1`.
    pub term: String,
    /// Numeric score.
    pub score: f64,
    /// Optional letter grade.
    pub grade: Option<String>,
    /// User who last recorded the result.
    pub recorded_by: Option<i64>,
    /// Last modification time.
    pub updated_at: NaiveDateTime,
}

/// Data required to record or overwrite a result.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpsertResult {
    /// Student the result belongs to.
    pub student_id: i64,
    /// Subject identifier.
    pub subject_id: i64,
    /// Term label.
    pub term: String,
    /// Numeric score.
    pub score: f64,
    /// Optional letter grade.
    pub grade: Option<String>,
}
