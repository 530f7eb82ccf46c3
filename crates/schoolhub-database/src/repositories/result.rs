//! Result repository implementation.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};
use tracing::debug;

use schoolhub_core::error::AppError;
use schoolhub_core::result::AppResult;
use schoolhub_core::types::{ResultScope, ScopeFilter, WriteScope};
use schoolhub_entity::academic::{ResultRecord, UpsertResult};

use crate::connection::begin_write;
use crate::error::map_sqlx;

const RESULT_SELECT: &str = "SELECT r.id, r.student_id, u.first_name, u.last_name, s.class_id, \
     r.subject_id, sub.name AS subject_name, r.term, r.score, r.grade, r.recorded_by, r.updated_at \
     FROM results r \
     JOIN students s ON s.id = r.student_id \
     JOIN users u ON u.id = s.user_id \
     JOIN subjects sub ON sub.id = r.subject_id \
     WHERE 1 = 1";

/// Repository for exam results.
#[derive(Debug, Clone)]
pub struct ResultRepository {
    pool: SqlitePool,
}

impl ResultRepository {
    /// Create a new result repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the results visible under a scope.
    ///
    /// Ordered by student name, then subject name, then term.
    pub async fn list(&self, scope: &ResultScope) -> AppResult<Vec<ResultRecord>> {
        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new(RESULT_SELECT);

        match scope {
            ResultScope::All { filter } => push_filter(&mut qb, filter),
            ResultScope::TaughtBy { teacher_id, filter } => {
                qb.push(
                    " AND EXISTS (SELECT 1 FROM teaching_assignments ta \
                     WHERE ta.subject_id = r.subject_id AND ta.class_id = s.class_id \
                     AND ta.teacher_id = ",
                )
                .push_bind(*teacher_id)
                .push(")");
                push_filter(&mut qb, filter);
            }
            ResultScope::OwnStudent { student_id } => {
                qb.push(" AND r.student_id = ").push_bind(*student_id);
            }
        }
        qb.push(" ORDER BY u.last_name, u.first_name, sub.name, r.term, r.id");

        qb.build_query_as::<ResultRecord>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx("Failed to list results"))
    }

    /// Record a result, overwriting any existing one for the same
    /// (student, subject, term).
    ///
    /// A teacher may only write for a subject they teach in the student's class.
    pub async fn upsert(
        &self,
        scope: WriteScope,
        data: &UpsertResult,
        recorded_by: i64,
    ) -> AppResult<ResultRecord> {
        let mut tx = begin_write(&self.pool)
            .await
            .map_err(map_sqlx("Failed to begin result transaction"))?;

        let class_id: Option<i64> = sqlx::query_scalar("SELECT class_id FROM students WHERE id = ?")
            .bind(data.student_id)
            .fetch_optional(&mut *tx)
            .await
            .map_err(map_sqlx("Failed to look up student"))?;
        let class_id =
            class_id.ok_or_else(|| AppError::not_found(format!("Student {} not found", data.student_id)))?;

        if let WriteScope::TaughtBy { teacher_id } = scope {
            let assigned: bool = sqlx::query_scalar(
                "SELECT EXISTS (SELECT 1 FROM teaching_assignments \
                 WHERE teacher_id = ? AND subject_id = ? AND class_id = ?)",
            )
            .bind(teacher_id)
            .bind(data.subject_id)
            .bind(class_id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx("Failed to check teaching assignment"))?;
            if !assigned {
                return Err(AppError::authorization(
                    "You are not assigned to this subject for the student's class",
                ));
            }
        }

        let id: i64 = sqlx::query_scalar(
            "INSERT INTO results (student_id, subject_id, term, score, grade, recorded_by) \
             VALUES (?, ?, ?, ?, ?, ?) \
             ON CONFLICT (student_id, subject_id, term) DO UPDATE SET \
             score = excluded.score, grade = excluded.grade, \
             recorded_by = excluded.recorded_by, updated_at = datetime('now') \
             RETURNING id",
        )
        .bind(data.student_id)
        .bind(data.subject_id)
        .bind(&data.term)
        .bind(data.score)
        .bind(&data.grade)
        .bind(recorded_by)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_sqlx("Failed to save result"))?;

        let record = sqlx::query_as::<_, ResultRecord>(&format!("{RESULT_SELECT} AND r.id = ?"))
            .bind(id)
            .fetch_one(&mut *tx)
            .await
            .map_err(map_sqlx("Failed to reload result"))?;

        tx.commit()
            .await
            .map_err(map_sqlx("Failed to commit result transaction"))?;

        debug!(result_id = id, student_id = data.student_id, "Result saved");
        Ok(record)
    }
}

fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &ScopeFilter) {
    if let Some(class_id) = filter.class_id {
        qb.push(" AND s.class_id = ").push_bind(class_id);
    }
    if let Some(subject_id) = filter.subject_id {
        qb.push(" AND r.subject_id = ").push_bind(subject_id);
    }
    if let Some(student_id) = filter.student_id {
        qb.push(" AND r.student_id = ").push_bind(student_id);
    }
}
