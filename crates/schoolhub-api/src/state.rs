//! Application state shared across all handlers and middleware.

use std::sync::Arc;

use schoolhub_auth::{Authenticator, TokenService};
use schoolhub_core::config::AppConfig;
use schoolhub_database::DatabasePool;
use schoolhub_service::{
    AnnouncementService, AttendanceService, ClassService, ResultService, StudentService,
    SubjectService, TimetableService,
};

/// Application state containing all shared dependencies.
///
/// Passed to every Axum handler via `State<AppState>`. Built once at
/// startup and never mutated; all fields are `Arc`-wrapped for cheap cloning.
#[derive(Debug, Clone)]
pub struct AppState {
    // ── Configuration ────────────────────────────────────────
    /// Application configuration
    pub config: Arc<AppConfig>,

    // ── Infrastructure ───────────────────────────────────────
    /// SQLite connection pool
    pub db: DatabasePool,

    // ── Auth ─────────────────────────────────────────────────
    /// Token issuance and verification
    pub tokens: Arc<TokenService>,
    /// Login flow
    pub authenticator: Arc<Authenticator>,

    // ── Services ─────────────────────────────────────────────
    /// Class listing
    pub class_service: Arc<ClassService>,
    /// Student listing
    pub student_service: Arc<StudentService>,
    /// Subject listing
    pub subject_service: Arc<SubjectService>,
    /// Result reads and writes
    pub result_service: Arc<ResultService>,
    /// Announcement reads and publishing
    pub announcement_service: Arc<AnnouncementService>,
    /// Attendance reads and bulk writes
    pub attendance_service: Arc<AttendanceService>,
    /// Timetable listing
    pub timetable_service: Arc<TimetableService>,
}
