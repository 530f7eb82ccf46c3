//! Attendance reads and bulk recording.

use std::sync::Arc;

use tracing::info;

use schoolhub_auth::AccessPolicy;
use schoolhub_core::error::AppError;
use schoolhub_core::result::AppResult;
use schoolhub_core::types::ScopeFilter;
use schoolhub_database::repositories::AttendanceRepository;
use schoolhub_entity::attendance::{AttendanceEntry, AttendanceRecord, BulkOutcome};

use crate::context::RequestContext;

/// Largest batch accepted in one submission.
pub const MAX_BATCH: usize = 500;

/// Reads and records attendance.
#[derive(Debug, Clone)]
pub struct AttendanceService {
    policy: Arc<AccessPolicy>,
    attendance_repo: Arc<AttendanceRepository>,
}

impl AttendanceService {
    /// Creates a new attendance service.
    pub fn new(policy: Arc<AccessPolicy>, attendance_repo: Arc<AttendanceRepository>) -> Self {
        Self {
            policy,
            attendance_repo,
        }
    }

    /// Attendance visible to the caller, narrowed by class and date.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        filter: ScopeFilter,
    ) -> AppResult<Vec<AttendanceRecord>> {
        let subject = self.policy.resolve(&ctx.claims).await?;
        self.attendance_repo
            .list(&subject.attendance_scope(filter))
            .await
    }

    /// Upserts a batch of entries atomically.
    pub async fn record_bulk(
        &self,
        ctx: &RequestContext,
        entries: Vec<AttendanceEntry>,
    ) -> AppResult<BulkOutcome> {
        let subject = self.policy.resolve(&ctx.claims).await?;
        let scope = subject.write_scope()?;

        if entries.is_empty() {
            return Err(AppError::validation("records must not be empty"));
        }
        if entries.len() > MAX_BATCH {
            return Err(AppError::validation(format!(
                "at most {MAX_BATCH} records can be submitted at once"
            )));
        }

        let outcome = self
            .attendance_repo
            .bulk_upsert(scope, &entries, ctx.user_id())
            .await?;
        info!(
            user_id = ctx.user_id(),
            inserted = outcome.inserted,
            updated = outcome.updated,
            "Attendance recorded"
        );
        Ok(outcome)
    }
}
