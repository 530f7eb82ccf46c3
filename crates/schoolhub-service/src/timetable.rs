//! Timetable reads.

use std::sync::Arc;

use schoolhub_auth::AccessPolicy;
use schoolhub_core::result::AppResult;
use schoolhub_database::repositories::TimetableRepository;
use schoolhub_entity::timetable::TimetableEntry;

use crate::context::RequestContext;

/// Lists timetable slots within the caller's scope.
#[derive(Debug, Clone)]
pub struct TimetableService {
    policy: Arc<AccessPolicy>,
    timetable_repo: Arc<TimetableRepository>,
}

impl TimetableService {
    /// Creates a new timetable service.
    pub fn new(policy: Arc<AccessPolicy>, timetable_repo: Arc<TimetableRepository>) -> Self {
        Self {
            policy,
            timetable_repo,
        }
    }

    /// Slots for the caller: a principal's chosen class (or all), a teacher's
    /// own lessons, a student's class.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        class_id: Option<i64>,
    ) -> AppResult<Vec<TimetableEntry>> {
        let subject = self.policy.resolve(&ctx.claims).await?;
        self.timetable_repo
            .list(&subject.timetable_scope(class_id))
            .await
    }
}
