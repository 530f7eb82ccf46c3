//! Announcement reads and publishing.

use std::sync::Arc;

use tracing::info;

use schoolhub_auth::AccessPolicy;
use schoolhub_core::error::AppError;
use schoolhub_core::result::AppResult;
use schoolhub_database::repositories::AnnouncementRepository;
use schoolhub_entity::announcement::{Announcement, CreateAnnouncement};

use crate::context::RequestContext;

/// Reads and publishes announcements.
#[derive(Debug, Clone)]
pub struct AnnouncementService {
    policy: Arc<AccessPolicy>,
    announcement_repo: Arc<AnnouncementRepository>,
}

impl AnnouncementService {
    /// Creates a new announcement service.
    pub fn new(
        policy: Arc<AccessPolicy>,
        announcement_repo: Arc<AnnouncementRepository>,
    ) -> Self {
        Self {
            policy,
            announcement_repo,
        }
    }

    /// Announcements addressed to the caller, newest first.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Announcement>> {
        let subject = self.policy.resolve(&ctx.claims).await?;
        self.announcement_repo
            .list(&subject.announcement_scope())
            .await
    }

    /// Publishes an announcement. Teachers may address only classes they teach.
    pub async fn publish(
        &self,
        ctx: &RequestContext,
        data: CreateAnnouncement,
    ) -> AppResult<Announcement> {
        let subject = self.policy.resolve(&ctx.claims).await?;
        let scope = subject.write_scope()?;
        if data.title.trim().is_empty() || data.content.trim().is_empty() {
            return Err(AppError::validation("Title and content must not be blank"));
        }
        data.check_target()?;

        let announcement = self
            .announcement_repo
            .create(scope, &data, ctx.user_id())
            .await?;
        info!(
            user_id = ctx.user_id(),
            announcement_id = announcement.id,
            target = %announcement.target,
            "Announcement published"
        );
        Ok(announcement)
    }
}
