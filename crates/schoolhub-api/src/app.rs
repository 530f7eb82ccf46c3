//! Application builder: wires repositories, auth and services into
//! `AppState`, then the router.

use std::sync::Arc;

use axum::Router;
use tracing::{info, warn};

use schoolhub_auth::{
    AccessPolicy, Authenticator, PasswordHasher, SqlCredentialStore, SqlProfileDirectory,
    TokenService,
};
use schoolhub_core::config::AppConfig;
use schoolhub_core::result::AppResult;
use schoolhub_database::DatabasePool;
use schoolhub_database::repositories::{
    AnnouncementRepository, AttendanceRepository, ClassRepository, ProfileRepository,
    ResultRepository, StudentRepository, SubjectRepository, TimetableRepository, UserRepository,
};
use schoolhub_service::{
    AnnouncementService, AttendanceService, ClassService, ResultService, StudentService,
    SubjectService, TimetableService,
};

use crate::router::build_router;
use crate::state::AppState;

/// Builds the complete Axum application.
pub fn build_app(state: AppState) -> Router {
    build_router(state)
}

/// Constructs every shared component from configuration and a connected pool.
///
/// Fails when no signing secret is configured in production.
pub fn build_state(config: AppConfig, db: DatabasePool) -> AppResult<AppState> {
    // ── Step 1: Repositories ─────────────────────────────────────
    let pool = db.pool().clone();
    let user_repo = UserRepository::new(pool.clone());
    let profile_repo = ProfileRepository::new(pool.clone());
    let class_repo = Arc::new(ClassRepository::new(pool.clone()));
    let student_repo = Arc::new(StudentRepository::new(pool.clone()));
    let subject_repo = Arc::new(SubjectRepository::new(pool.clone()));
    let result_repo = Arc::new(ResultRepository::new(pool.clone()));
    let announcement_repo = Arc::new(AnnouncementRepository::new(pool.clone()));
    let attendance_repo = Arc::new(AttendanceRepository::new(pool.clone()));
    let timetable_repo = Arc::new(TimetableRepository::new(pool));

    // ── Step 2: Auth ─────────────────────────────────────────────
    let secret = config.auth.signing_secret(&config.environment)?;
    if secret.is_fallback {
        warn!(
            environment = %config.environment,
            "auth.jwt_secret not set; using the development signing key"
        );
    }
    let tokens = Arc::new(TokenService::new(&secret, config.auth.token_ttl()));
    let hasher = Arc::new(PasswordHasher::new(&config.auth)?);
    let authenticator = Arc::new(Authenticator::new(
        Arc::new(SqlCredentialStore::new(user_repo)),
        hasher,
        Arc::clone(&tokens),
    )?);
    let policy = Arc::new(AccessPolicy::new(Arc::new(SqlProfileDirectory::new(
        profile_repo,
    ))));

    // ── Step 3: Services ─────────────────────────────────────────
    let state = AppState {
        config: Arc::new(config),
        db,
        tokens,
        authenticator,
        class_service: Arc::new(ClassService::new(Arc::clone(&policy), class_repo)),
        student_service: Arc::new(StudentService::new(Arc::clone(&policy), student_repo)),
        subject_service: Arc::new(SubjectService::new(Arc::clone(&policy), subject_repo)),
        result_service: Arc::new(ResultService::new(Arc::clone(&policy), result_repo)),
        announcement_service: Arc::new(AnnouncementService::new(
            Arc::clone(&policy),
            announcement_repo,
        )),
        attendance_service: Arc::new(AttendanceService::new(
            Arc::clone(&policy),
            attendance_repo,
        )),
        timetable_service: Arc::new(TimetableService::new(policy, timetable_repo)),
    };

    info!("Application state initialized");
    Ok(state)
}
