//! Student repository implementation.

use sqlx::{QueryBuilder, Sqlite, SqlitePool};

use schoolhub_core::result::AppResult;
use schoolhub_core::types::StudentScope;
use schoolhub_entity::academic::StudentRecord;

use crate::error::map_sqlx;

const STUDENT_SELECT: &str = "SELECT s.id, s.user_id, s.class_id, c.name AS class_name, \
     s.roll_number, u.first_name, u.last_name, u.email \
     FROM students s \
     JOIN users u ON u.id = s.user_id \
     JOIN classes c ON c.id = s.class_id \
     WHERE 1 = 1";

/// Repository for student records.
#[derive(Debug, Clone)]
pub struct StudentRepository {
    pool: SqlitePool,
}

impl StudentRepository {
    /// Create a new student repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the students visible under a scope, ordered by last then first name.
    pub async fn list(&self, scope: &StudentScope) -> AppResult<Vec<StudentRecord>> {
        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new(STUDENT_SELECT);

        match scope {
            StudentScope::All { class_id } => {
                if let Some(class_id) = class_id {
                    qb.push(" AND s.class_id = ").push_bind(*class_id);
                }
            }
            StudentScope::TaughtBy {
                teacher_id,
                class_id,
            } => {
                qb.push(
                    " AND s.class_id IN (SELECT ta.class_id FROM teaching_assignments ta \
                     WHERE ta.teacher_id = ",
                )
                .push_bind(*teacher_id)
                .push(")");
                if let Some(class_id) = class_id {
                    qb.push(" AND s.class_id = ").push_bind(*class_id);
                }
            }
            StudentScope::Only { student_id } => {
                qb.push(" AND s.id = ").push_bind(*student_id);
            }
        }
        qb.push(" ORDER BY u.last_name, u.first_name, s.id");

        qb.build_query_as::<StudentRecord>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx("Failed to list students"))
    }
}
