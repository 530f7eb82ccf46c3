//! Announcement repository implementation.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use schoolhub_core::error::AppError;
use schoolhub_core::result::AppResult;
use schoolhub_core::types::{AnnouncementScope, WriteScope};
use schoolhub_entity::announcement::{Announcement, AnnouncementTarget, CreateAnnouncement};

use crate::connection::begin_write;
use crate::error::map_sqlx;

const ANNOUNCEMENT_SELECT: &str = "SELECT a.id, a.title, a.content, a.target, a.class_id, \
     a.created_by, (u.first_name || ' ' || u.last_name) AS author_name, a.created_at \
     FROM announcements a \
     JOIN users u ON u.id = a.created_by \
     WHERE 1 = 1";

/// Repository for announcements.
#[derive(Debug, Clone)]
pub struct AnnouncementRepository {
    pool: SqlitePool,
}

impl AnnouncementRepository {
    /// Create a new announcement repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the announcements visible under a scope, newest first.
    pub async fn list(&self, scope: &AnnouncementScope) -> AppResult<Vec<Announcement>> {
        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new(ANNOUNCEMENT_SELECT);

        match scope {
            AnnouncementScope::All => {}
            AnnouncementScope::Teacher { teacher_id } => {
                qb.push(
                    " AND (a.target IN ('all', 'teacher') OR (a.target = 'class' AND a.class_id IN \
                     (SELECT ta.class_id FROM teaching_assignments ta WHERE ta.teacher_id = ",
                )
                .push_bind(*teacher_id)
                .push(")))");
            }
            AnnouncementScope::Student { class_id } => {
                qb.push(" AND (a.target IN ('all', 'student') OR (a.target = 'class' AND a.class_id = ")
                    .push_bind(*class_id)
                    .push("))");
            }
        }
        qb.push(" ORDER BY a.created_at DESC, a.id DESC");

        qb.build_query_as::<Announcement>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx("Failed to list announcements"))
    }

    /// Publish an announcement.
    ///
    /// A teacher may address a class only when they teach it.
    pub async fn create(
        &self,
        scope: WriteScope,
        data: &CreateAnnouncement,
        created_by: i64,
    ) -> AppResult<Announcement> {
        let mut tx = begin_write(&self.pool)
            .await
            .map_err(map_sqlx("Failed to begin announcement transaction"))?;

        if let (WriteScope::TaughtBy { teacher_id }, AnnouncementTarget::Class, Some(class_id)) =
            (scope, data.target, data.class_id)
        {
            let teaches: bool = sqlx::query_scalar(
                "SELECT EXISTS (SELECT 1 FROM teaching_assignments \
                 WHERE teacher_id = ? AND class_id = ?)",
            )
            .bind(teacher_id)
            .bind(class_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx("Failed to check teaching assignment"))?;
            if !teaches {
                return Err(AppError::authorization(
                    "You can only address announcements to classes you teach",
                ));
            }
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO announcements (title, content, target, class_id, created_by) \
             VALUES (?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(&data.title)
        .bind(&data.content)
        .bind(data.target)
        .bind(data.class_id)
        .bind(created_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx("Failed to create announcement"))?;

        let announcement =
            sqlx::query_as::<_, Announcement>(&format!("{ANNOUNCEMENT_SELECT} AND a.id = ?"))
                .bind(id)
                .fetch_one(&mut *tx)
                .await
                .map_err(map_sqlx("Failed to reload announcement"))?;

        tx.commit()
            .await
            .map_err(map_sqlx("Failed to commit announcement transaction"))?;

        debug!(announcement_id = id, target = %data.target, "Announcement created");
        Ok(announcement)
    }
}
