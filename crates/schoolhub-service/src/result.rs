//! Exam result reads and writes.

use std::sync::Arc;

use tracing::info;

use schoolhub_auth::AccessPolicy;
use schoolhub_core::error::AppError;
use schoolhub_core::result::AppResult;
use schoolhub_core::types::ScopeFilter;
use schoolhub_database::repositories::ResultRepository;
use schoolhub_entity::academic::{ResultRecord, UpsertResult};

use crate::context::RequestContext;

/// Highest score accepted.
const MAX_SCORE: f64 = 100.0;

/// Reads and records exam results.
#[derive(Debug, Clone)]
pub struct ResultService {
    policy: Arc<AccessPolicy>,
    result_repo: Arc<ResultRepository>,
}

impl ResultService {
    /// Creates a new result service.
    pub fn new(policy: Arc<AccessPolicy>, result_repo: Arc<ResultRepository>) -> Self {
        Self {
            policy,
            result_repo,
        }
    }

    /// Results visible to the caller, narrowed by the filter.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        filter: ScopeFilter,
    ) -> AppResult<Vec<ResultRecord>> {
        let subject = self.policy.resolve(&ctx.claims).await?;
        self.result_repo.list(&subject.result_scope(filter)).await
    }

    /// Records or overwrites one result within the caller's write scope.
    pub async fn record(&self, ctx: &RequestContext, data: UpsertResult) -> AppResult<ResultRecord> {
        let subject = self.policy.resolve(&ctx.claims).await?;
        let scope = subject.write_scope()?;

        if data.term.trim().is_empty() {
            return Err(AppError::validation("term must not be empty"));
        }
        if !data.score.is_finite() || !(0.0..=MAX_SCORE).contains(&data.score) {
            return Err(AppError::validation(format!(
                "score must be between 0 and {MAX_SCORE}"
            )));
        }

        let record = self.result_repo.upsert(scope, &data, ctx.user_id()).await?;
        info!(
            user_id = ctx.user_id(),
            student_id = data.student_id,
            subject_id = data.subject_id,
            term = %data.term,
            "Result recorded"
        );
        Ok(record)
    }
}
