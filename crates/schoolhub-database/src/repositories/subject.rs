//! Subject repository implementation.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use schoolhub_core::result::AppResult;
use schoolhub_core::types::SubjectScope;
use schoolhub_entity::academic::Subject;

use crate::error::map_sqlx;

/// Repository for the subject catalogue.
#[derive(Debug, Clone)]
pub struct SubjectRepository {
    pool: SqlitePool,
}

impl SubjectRepository {
    /// Create a new subject repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the subjects visible under a scope, ordered by name.
    pub async fn list(&self, scope: &SubjectScope) -> AppResult<Vec<Subject>> {
        let mut qb: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new("SELECT s.id, s.name, s.code FROM subjects s WHERE 1 = 1");

        if let SubjectScope::TaughtBy { teacher_id } = scope {
            qb.push(
                " AND s.id IN (SELECT ta.subject_id FROM teaching_assignments ta \
                 WHERE ta.teacher_id = ",
            )
            .push_bind(*teacher_id)
            .push(")");
        }
        qb.push(" ORDER BY s.name, s.id");

        qb.build_query_as::<Subject>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx("Failed to list subjects"))
    }

    /// Create a subject.
    pub async fn create(&self, name: &str, code: &str) -> AppResult<Subject> {
        sqlx::query_as::<_, Subject>(
            "INSERT INTO subjects (name, code) VALUES (?, ?) RETURNING id, name, code",
        )
        .bind(name)
        .bind(code)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx("Failed to create subject"))
    }
}
