//! Timetable repository implementation.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use schoolhub_core::result::AppResult;
use schoolhub_core::types::TimetableScope;
use schoolhub_entity::timetable::TimetableEntry;

use crate::error::map_sqlx;

const TIMETABLE_SELECT: &str = "SELECT t.id, t.class_id, c.name AS class_name, t.subject_id, \
     sub.name AS subject_name, t.teacher_id, t.day_of_week, t.start_time, t.end_time \
     FROM timetable t \
     JOIN classes c ON c.id = t.class_id \
     JOIN subjects sub ON sub.id = t.subject_id \
     WHERE 1 = 1";

/// Repository for weekly timetable slots.
#[derive(Debug, Clone)]
pub struct TimetableRepository {
    pool: SqlitePool,
}

impl TimetableRepository {
    /// Create a new timetable repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the slots visible under a scope, ordered by day then start time.
    pub async fn list(&self, scope: &TimetableScope) -> AppResult<Vec<TimetableEntry>> {
        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new(TIMETABLE_SELECT);

        match scope {
            TimetableScope::All { class_id } => {
                if let Some(class_id) = class_id {
                    qb.push(" AND t.class_id = ").push_bind(*class_id);
                }
            }
            TimetableScope::Teacher { teacher_id } => {
                qb.push(" AND t.teacher_id = ").push_bind(*teacher_id);
            }
            TimetableScope::Class { class_id } => {
                qb.push(" AND t.class_id = ").push_bind(*class_id);
            }
        }
        qb.push(" ORDER BY t.day_of_week, t.start_time, c.name, t.id");

        qb.build_query_as::<TimetableEntry>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx("Failed to list timetable"))
    }

    /// Add a weekly slot.
    pub async fn create(
        &self,
        class_id: i64,
        subject_id: i64,
        teacher_id: i64,
        day_of_week: i64,
        start_time: &str,
        end_time: &str,
    ) -> AppResult<i64> {
        sqlx::query_scalar(
            "INSERT INTO timetable (class_id, subject_id, teacher_id, day_of_week, start_time, end_time) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING id",
        )
        .bind(class_id)
        .bind(subject_id)
        .bind(teacher_id)
        .bind(day_of_week)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx("Failed to create timetable entry"))
    }
}
