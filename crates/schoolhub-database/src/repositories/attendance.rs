//! Attendance repository implementation.

use sqlx::{QueryBuilder, Sqlite, SqliteConnection, SqlitePool};
use tracing::debug;

use schoolhub_core::error::AppError;
use schoolhub_core::result::AppResult;
use schoolhub_core::types::{AttendanceScope, ScopeFilter, WriteScope};
use schoolhub_entity::attendance::{AttendanceEntry, AttendanceRecord, BulkOutcome};

use crate::connection::begin_write;
use crate::error::map_sqlx;

const ATTENDANCE_SELECT: &str = "SELECT a.id, a.student_id, u.first_name, u.last_name, \
     s.class_id, a.date, a.status, a.remarks, a.recorded_by \
     FROM attendance a \
     JOIN students s ON s.id = a.student_id \
     JOIN users u ON u.id = s.user_id \
     WHERE 1 = 1";

/// Repository for attendance records.
#[derive(Debug, Clone)]
pub struct AttendanceRepository {
    pool: SqlitePool,
}

impl AttendanceRepository {
    /// Create a new attendance repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// List the attendance records visible under a scope.
    ///
    /// Ordered by date descending, then student name.
    pub async fn list(&self, scope: &AttendanceScope) -> AppResult<Vec<AttendanceRecord>> {
        let mut qb: QueryBuilder<'_, Sqlite> = QueryBuilder::new(ATTENDANCE_SELECT);

        match scope {
            AttendanceScope::All { filter } => push_filter(&mut qb, filter),
            AttendanceScope::TaughtBy { teacher_id, filter } => {
                qb.push(
                    " AND s.class_id IN (SELECT ta.class_id FROM teaching_assignments ta \
                     WHERE ta.teacher_id = ",
                )
                .push_bind(*teacher_id)
                .push(")");
                push_filter(&mut qb, filter);
            }
            AttendanceScope::OwnStudent { student_id, date } => {
                qb.push(" AND a.student_id = ").push_bind(*student_id);
                if let Some(date) = date {
                    qb.push(" AND a.date = ").push_bind(*date);
                }
            }
        }
        qb.push(" ORDER BY a.date DESC, u.last_name, u.first_name, a.id");

        qb.build_query_as::<AttendanceRecord>()
            .fetch_all(&self.pool)
            .await
            .map_err(map_sqlx("Failed to list attendance"))
    }

    /// Insert or overwrite a batch of attendance entries in one transaction.
    ///
    /// Each (student, date) pair is updated when a row exists and inserted
    /// otherwise. Any failure, including a student outside the writer's
    /// scope, rolls back the whole batch.
    pub async fn bulk_upsert(
        &self,
        scope: WriteScope,
        entries: &[AttendanceEntry],
        recorded_by: i64,
    ) -> AppResult<BulkOutcome> {
        let mut tx = begin_write(&self.pool)
            .await
            .map_err(map_sqlx("Failed to begin attendance transaction"))?;

        let mut outcome = BulkOutcome::default();
        for entry in entries {
            ensure_writable(&mut *tx, scope, entry.student_id).await?;

            let existing: Option<i64> =
                sqlx::query_scalar("SELECT id FROM attendance WHERE student_id = ? AND date = ?")
                    .bind(entry.student_id)
                    .bind(entry.date)
                    .fetch_optional(&mut *tx)
                    .await
                    .map_err(map_sqlx("Failed to look up attendance"))?;

            match existing {
                Some(id) => {
                    sqlx::query(
                        "UPDATE attendance SET status = ?, remarks = ?, recorded_by = ? WHERE id = ?",
                    )
                    .bind(entry.status)
                    .bind(&entry.remarks)
                    .bind(recorded_by)
                    .bind(id)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_sqlx("Failed to update attendance"))?;
                    outcome.updated += 1;
                }
                None => {
                    sqlx::query(
                        "INSERT INTO attendance (student_id, date, status, remarks, recorded_by) \
                         VALUES (?, ?, ?, ?, ?)",
                    )
                    .bind(entry.student_id)
                    .bind(entry.date)
                    .bind(entry.status)
                    .bind(&entry.remarks)
                    .bind(recorded_by)
                    .execute(&mut *tx)
                    .await
                    .map_err(map_sqlx("Failed to insert attendance"))?;
                    outcome.inserted += 1;
                }
            }
        }

        tx.commit()
            .await
            .map_err(map_sqlx("Failed to commit attendance transaction"))?;

        debug!(
            inserted = outcome.inserted,
            updated = outcome.updated,
            "Attendance batch committed"
        );
        Ok(outcome)
    }
}

/// Reject a student the writer may not record attendance for.
async fn ensure_writable(
    conn: &mut SqliteConnection,
    scope: WriteScope,
    student_id: i64,
) -> AppResult<()> {
    let class_id: Option<i64> = sqlx::query_scalar("SELECT class_id FROM students WHERE id = ?")
        .bind(student_id)
        .fetch_optional(&mut *conn)
        .await
        .map_err(map_sqlx("Failed to look up student"))?;
    let class_id =
        class_id.ok_or_else(|| AppError::not_found(format!("Student {student_id} not found")))?;

    if let WriteScope::TaughtBy { teacher_id } = scope {
        let teaches: bool = sqlx::query_scalar(
            "SELECT EXISTS (SELECT 1 FROM teaching_assignments WHERE teacher_id = ? AND class_id = ?)",
        )
        .bind(teacher_id)
        .bind(class_id)
        .fetch_one(&mut *conn)
        .await
        .map_err(map_sqlx("Failed to check teaching assignment"))?;
        if !teaches {
            return Err(AppError::authorization(format!(
                "Student {student_id} is not in a class you teach"
            )));
        }
    }
    Ok(())
}

fn push_filter(qb: &mut QueryBuilder<'_, Sqlite>, filter: &ScopeFilter) {
    if let Some(class_id) = filter.class_id {
        qb.push(" AND s.class_id = ").push_bind(class_id);
    }
    if let Some(student_id) = filter.student_id {
        qb.push(" AND a.student_id = ").push_bind(student_id);
    }
    if let Some(date) = filter.date {
        qb.push(" AND a.date = ").push_bind(date);
    }
}
