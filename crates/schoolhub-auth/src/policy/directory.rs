//! Profile lookup used to resolve a subject.

use async_trait::async_trait;

use schoolhub_core::result::AppResult;
use schoolhub_database::repositories::ProfileRepository;

/// Where a student sits: their student id and the class they belong to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StudentPlacement {
    /// Student profile id.
    pub student_id: i64,
    /// Enrolled class.
    pub class_id: i64,
}

/// Maps user accounts to their role profiles.
#[async_trait]
pub trait ProfileDirectory: Send + Sync {
    /// Teacher profile id owned by a user.
    async fn teacher_id(&self, user_id: i64) -> AppResult<Option<i64>>;

    /// Student placement owned by a user.
    async fn student_placement(&self, user_id: i64) -> AppResult<Option<StudentPlacement>>;
}

/// [`ProfileDirectory`] backed by the `teachers` and `students` tables.
#[derive(Debug, Clone)]
pub struct SqlProfileDirectory {
    profiles: ProfileRepository,
}

impl SqlProfileDirectory {
    /// Creates a directory over the profile repository.
    pub fn new(profiles: ProfileRepository) -> Self {
        Self { profiles }
    }
}

#[async_trait]
impl ProfileDirectory for SqlProfileDirectory {
    async fn teacher_id(&self, user_id: i64) -> AppResult<Option<i64>> {
        Ok(self
            .profiles
            .find_teacher_by_user(user_id)
            .await?
            .map(|t| t.id))
    }

    async fn student_placement(&self, user_id: i64) -> AppResult<Option<StudentPlacement>> {
        Ok(self
            .profiles
            .find_student_by_user(user_id)
            .await?
            .map(|s| StudentPlacement {
                student_id: s.id,
                class_id: s.class_id,
            }))
    }
}
