//! Timetable slot model.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// One weekly lesson slot, joined with class and subject names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct TimetableEntry {
    /// Entry identifier.
    pub id: i64,
    /// Class attending.
    pub class_id: i64,
    /// Class display name.
    pub class_name: String,
    /// Subject taught.
    pub subject_id: i64,
    /// Subject display name.
    pub subject_name: String,
    /// Teacher delivering the lesson.
    pub teacher_id: i64,
    /// ISO weekday, Monday = 1.
    pub day_of_week: i64,
    /// Start time, `HH:MM`.
    pub start_time: String,
    /// End time, `HH:MM`.
    pub end_time: String,
}
