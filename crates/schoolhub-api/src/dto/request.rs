//! Request DTOs with validation.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use schoolhub_core::types::ScopeFilter;
use schoolhub_entity::academic::UpsertResult;
use schoolhub_entity::announcement::{AnnouncementTarget, CreateAnnouncement};
use schoolhub_entity::attendance::AttendanceEntry;

/// Login request body. `username` may also hold an email address.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct LoginRequest {
    /// Username or email.
    #[serde(default)]
    #[validate(length(min = 1, message = "Username is required"))]
    pub username: String,
    /// Password.
    #[serde(default)]
    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// `?class_id=` query.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClassQuery {
    /// Optional class filter.
    pub class_id: Option<i64>,
}

/// Query for the results listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ResultQuery {
    /// Optional class filter.
    pub class_id: Option<i64>,
    /// Optional subject filter.
    pub subject_id: Option<i64>,
    /// Optional student filter.
    pub student_id: Option<i64>,
}

impl From<ResultQuery> for ScopeFilter {
    fn from(query: ResultQuery) -> Self {
        Self {
            class_id: query.class_id,
            subject_id: query.subject_id,
            student_id: query.student_id,
            date: None,
        }
    }
}

/// Query for the attendance listing.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AttendanceQuery {
    /// Optional class filter.
    pub class_id: Option<i64>,
    /// Optional day, `YYYY-MM-DD`.
    pub date: Option<NaiveDate>,
}

impl From<AttendanceQuery> for ScopeFilter {
    fn from(query: AttendanceQuery) -> Self {
        Self {
            class_id: query.class_id,
            date: query.date,
            ..Self::default()
        }
    }
}

/// Bulk attendance submission.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct BulkAttendanceRequest {
    /// Entries to insert or overwrite.
    #[validate(length(min = 1, message = "At least one attendance record is required"))]
    pub records: Vec<AttendanceEntry>,
}

/// Announcement creation body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CreateAnnouncementRequest {
    /// Headline.
    #[validate(length(min = 1, max = 200, message = "Title must be 1-200 characters"))]
    pub title: String,
    /// Body text.
    #[validate(length(min = 1, message = "Content is required"))]
    pub content: String,
    /// Audience.
    pub target: AnnouncementTarget,
    /// Class addressed when `target` is `class`.
    #[serde(default)]
    pub class_id: Option<i64>,
}

impl From<CreateAnnouncementRequest> for CreateAnnouncement {
    fn from(req: CreateAnnouncementRequest) -> Self {
        Self {
            title: req.title.trim().to_string(),
            content: req.content.trim().to_string(),
            target: req.target,
            class_id: req.class_id,
        }
    }
}

/// Result upsert body.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RecordResultRequest {
    /// Student identifier.
    pub student_id: i64,
    /// Subject identifier.
    pub subject_id: i64,
    /// Term label.
    #[validate(length(min = 1, max = 32, message = "Term must be 1-32 characters"))]
    pub term: String,
    /// Numeric score, 0-100.
    #[validate(range(min = 0.0, max = 100.0, message = "Score must be between 0 and 100"))]
    pub score: f64,
    /// Optional letter grade.
    #[serde(default)]
    #[validate(length(max = 4, message = "Grade must be at most 4 characters"))]
    pub grade: Option<String>,
}

impl From<RecordResultRequest> for UpsertResult {
    fn from(req: RecordResultRequest) -> Self {
        Self {
            student_id: req.student_id,
            subject_id: req.subject_id,
            term: req.term,
            score: req.score,
            grade: req.grade,
        }
    }
}
