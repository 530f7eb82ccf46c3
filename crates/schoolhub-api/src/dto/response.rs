//! Response DTOs.

use serde::{Deserialize, Serialize};

use schoolhub_auth::LoginOutcome;
use schoolhub_entity::academic::{ResultRecord, SchoolClass, StudentRecord, Subject};
use schoolhub_entity::announcement::Announcement;
use schoolhub_entity::attendance::AttendanceRecord;
use schoolhub_entity::timetable::TimetableEntry;
use schoolhub_entity::user::{Identity, Role};

/// Standard success response wrapper.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiResponse<T: Serialize> {
    /// Whether the request was successful.
    pub success: bool,
    /// Response data.
    pub data: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Creates a successful response.
    pub fn ok(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Public identity of a user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserResponse {
    /// User ID.
    pub id: i64,
    /// Username.
    pub username: String,
    /// Email.
    pub email: String,
    /// Role.
    pub role: Role,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
}

impl From<Identity> for UserResponse {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id,
            username: identity.username,
            email: identity.email,
            role: identity.role,
            first_name: identity.first_name,
            last_name: identity.last_name,
        }
    }
}

/// Login response: the public identity plus the token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    /// Identity fields.
    #[serde(flatten)]
    pub user: UserResponse,
    /// Signed session token.
    pub token: String,
}

impl From<LoginOutcome> for LoginResponse {
    fn from(outcome: LoginOutcome) -> Self {
        Self {
            user: outcome.identity.into(),
            token: outcome.token.token,
        }
    }
}

/// Simple message body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    /// Message text.
    pub message: String,
}

/// Counts of a bulk attendance write.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulkAttendanceResponse {
    /// Newly created records.
    pub inserted: u64,
    /// Overwritten records.
    pub updated: u64,
}

/// `GET /api/classes`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassList {
    /// Visible classes.
    pub classes: Vec<SchoolClass>,
}

/// `GET /api/students`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StudentList {
    /// Visible students.
    pub students: Vec<StudentRecord>,
}

/// `GET /api/subjects`, `GET /api/teacher/subjects`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubjectList {
    /// Visible subjects.
    pub subjects: Vec<Subject>,
}

/// `GET /api/results`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ResultList {
    /// Visible results.
    pub results: Vec<ResultRecord>,
}

/// `GET /api/announcements`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnouncementList {
    /// Visible announcements.
    pub announcements: Vec<Announcement>,
}

/// `GET /api/attendance`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AttendanceList {
    /// Visible attendance records.
    pub attendance: Vec<AttendanceRecord>,
}

/// `GET /api/timetable`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimetableList {
    /// Visible timetable slots.
    pub timetable: Vec<TimetableEntry>,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// `ok` or `degraded`.
    pub status: String,
    /// Crate version.
    pub version: String,
    /// `connected` or `unavailable`.
    pub database: String,
}
