//! Teacher and student profile repository.

use sqlx::SqlitePool;

use schoolhub_core::result::AppResult;
use schoolhub_entity::academic::{StudentProfile, TeacherProfile, TeachingAssignment};

use crate::error::map_sqlx;

/// Repository for role profiles and the teaching assignments hanging off them.
#[derive(Debug, Clone)]
pub struct ProfileRepository {
    pool: SqlitePool,
}

impl ProfileRepository {
    /// Create a new profile repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Find the teacher profile owned by a user account.
    pub async fn find_teacher_by_user(&self, user_id: i64) -> AppResult<Option<TeacherProfile>> {
        sqlx::query_as::<_, TeacherProfile>(
            "SELECT id, user_id, qualification FROM teachers WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx("Failed to find teacher profile"))
    }

    /// Find the student profile owned by a user account.
    pub async fn find_student_by_user(&self, user_id: i64) -> AppResult<Option<StudentProfile>> {
        sqlx::query_as::<_, StudentProfile>(
            "SELECT id, user_id, class_id, roll_number FROM students WHERE user_id = ?",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(map_sqlx("Failed to find student profile"))
    }

    /// Attach a teacher profile to a user account.
    pub async fn create_teacher(
        &self,
        user_id: i64,
        qualification: Option<&str>,
    ) -> AppResult<TeacherProfile> {
        sqlx::query_as::<_, TeacherProfile>(
            "INSERT INTO teachers (user_id, qualification) VALUES (?, ?) \
             RETURNING id, user_id, qualification",
        )
        .bind(user_id)
        .bind(qualification)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx("Failed to create teacher profile"))
    }

    /// Attach a student profile to a user account and enrol it in a class.
    pub async fn create_student(
        &self,
        user_id: i64,
        class_id: i64,
        roll_number: Option<&str>,
    ) -> AppResult<StudentProfile> {
        sqlx::query_as::<_, StudentProfile>(
            "INSERT INTO students (user_id, class_id, roll_number) VALUES (?, ?, ?) \
             RETURNING id, user_id, class_id, roll_number",
        )
        .bind(user_id)
        .bind(class_id)
        .bind(roll_number)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx("Failed to create student profile"))
    }

    /// Assign a teacher to a subject in a class.
    pub async fn assign(
        &self,
        teacher_id: i64,
        subject_id: i64,
        class_id: i64,
    ) -> AppResult<TeachingAssignment> {
        sqlx::query_as::<_, TeachingAssignment>(
            "INSERT INTO teaching_assignments (teacher_id, subject_id, class_id) VALUES (?, ?, ?) \
             RETURNING id, teacher_id, subject_id, class_id",
        )
        .bind(teacher_id)
        .bind(subject_id)
        .bind(class_id)
        .fetch_one(&self.pool)
        .await
        .map_err(map_sqlx("Failed to create teaching assignment"))
    }
}
