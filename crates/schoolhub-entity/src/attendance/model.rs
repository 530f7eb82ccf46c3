//! Attendance record models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::status::AttendanceStatus;

/// An attendance row joined with the student's name and class.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct AttendanceRecord {
    /// Record identifier.
    pub id: i64,
    /// Student identifier.
    pub student_id: i64,
    /// Student given name.
    pub first_name: String,
    /// Student family name.
    pub last_name: String,
    /// The student's class.
    pub class_id: i64,
    /// Calendar day.
    pub date: NaiveDate,
    /// Status on that day.
    pub status: AttendanceStatus,
    /// Optional note.
    pub remarks: Option<String>,
    /// User who recorded the entry.
    pub recorded_by: Option<i64>,
}

/// One entry of a bulk attendance submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceEntry {
    /// Student identifier.
    pub student_id: i64,
    /// Calendar day.
    pub date: NaiveDate,
    /// Status on that day.
    pub status: AttendanceStatus,
    /// Optional note.
    #[serde(default)]
    pub remarks: Option<String>,
}

/// Counts produced by a bulk upsert.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BulkOutcome {
    /// Rows newly created.
    pub inserted: u64,
    /// Existing rows overwritten.
    pub updated: u64,
}
