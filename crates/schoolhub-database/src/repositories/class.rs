//! Class repository implementation.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use schoolhub_core::result::AppResult;
use schoolhub_core::types::ClassScope;
use schoolhub_entity::academic::SchoolClass;

use crate::error::map_sqlx;

/// Repository for classes.
#[derive(Debug, Clone)]
pub struct ClassRepository {
    pool: SqlitePool,
}

impl ClassRepository {
    /// Create a new class repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the classes visible under a scope, ordered by name.
    pub async fn list(&self, scope: &ClassScope) -> AppResult<Vec<SchoolClass>> {
        let mut qb: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new("SELECT c.id, c.name, c.grade_level FROM classes c WHERE 1 = 1");

        match scope {
            ClassScope::All => {}
            ClassScope::TaughtBy { teacher_id } => {
                qb.push(
                    " AND c.id IN (SELECT ta.class_id FROM teaching_assignments ta \
                     WHERE ta.teacher_id = ",
                )
                .push_bind(*teacher_id)
                .push(")");
            }
            ClassScope::Only { class_id } => {
                qb.push(" AND c.id = ").push_bind(*class_id);
            }
        }
        qb.push(" ORDER BY c.name, c.id");

        qb.build_query_as::<SchoolClass>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx("Failed to list classes"))
    }

    /// Create a class.
    pub async fn create(&self, name: &str, grade_level: i64) -> AppResult<SchoolClass> {
        sqlx::query_as::<_, SchoolClass>(
            "INSERT INTO classes (name, grade_level) VALUES (?, ?) RETURNING id, name, grade_level",
        )
        .bind(name)
        .bind(grade_level)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx("Failed to create class"))
    }
}
