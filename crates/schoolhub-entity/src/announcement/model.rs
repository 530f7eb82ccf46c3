//! Announcement model.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use schoolhub_core::{AppError, AppResult};

use super::target::AnnouncementTarget;

/// A published announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Announcement {
    /// Announcement identifier.
    pub id: i64,
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Audience.
    pub target: AnnouncementTarget,
    /// Class addressed when `target` is `class`.
    pub class_id: Option<i64>,
    /// Author user id.
    pub created_by: i64,
    /// Author display name.
    pub author_name: String,
    /// Publication time.
    pub created_at: NaiveDateTime,
}

/// Data required to publish an announcement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateAnnouncement {
    /// Headline.
    pub title: String,
    /// Body text.
    pub content: String,
    /// Audience.
    pub target: AnnouncementTarget,
    /// Class addressed when `target` is `class`.
    pub class_id: Option<i64>,
}

impl CreateAnnouncement {
    /// Check that a class id is present exactly when the target is a class.
    pub fn check_target(&self) -> AppResult<()> {
        match (self.target, self.class_id) {
            (AnnouncementTarget::Class, None) => Err(AppError::validation(
                "class_id is required when target is 'class'",
            )),
            (AnnouncementTarget::Class, Some(_)) => Ok(()),
            (_, Some(_)) => Err(AppError::validation(
                "class_id is only allowed when target is 'class'",
            )),
            (_, None) => Ok(()),
        }
    }
}
