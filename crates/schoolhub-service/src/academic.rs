//! Class, student and subject listings.

use std::sync::Arc;

use tracing::debug;

use schoolhub_auth::AccessPolicy;
use schoolhub_core::result::AppResult;
use schoolhub_database::repositories::{ClassRepository, StudentRepository, SubjectRepository};
use schoolhub_entity::academic::{SchoolClass, StudentRecord, Subject};

use crate::context::RequestContext;

/// Lists classes within the caller's scope.
#[derive(Debug, Clone)]
pub struct ClassService {
    policy: Arc<AccessPolicy>,
    class_repo: Arc<ClassRepository>,
}

impl ClassService {
    /// Creates a new class service.
    pub fn new(policy: Arc<AccessPolicy>, class_repo: Arc<ClassRepository>) -> Self {
        Self { policy, class_repo }
    }

    /// Classes visible to the caller, by name.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<SchoolClass>> {
        let subject = self.policy.resolve(&ctx.claims).await?;
        let scope = subject.class_scope();
        debug!(user_id = ctx.user_id(), ?scope, "Listing classes");
        self.class_repo.list(&scope).await
    }
}

/// Lists students within the caller's scope.
#[derive(Debug, Clone)]
pub struct StudentService {
    policy: Arc<AccessPolicy>,
    student_repo: Arc<StudentRepository>,
}

impl StudentService {
    /// Creates a new student service.
    pub fn new(policy: Arc<AccessPolicy>, student_repo: Arc<StudentRepository>) -> Self {
        Self {
            policy,
            student_repo,
        }
    }

    /// Students visible to the caller, optionally narrowed to a class.
    ///
    /// A class outside the caller's scope yields an empty list.
    pub async fn list(
        &self,
        ctx: &RequestContext,
        class_id: Option<i64>,
    ) -> AppResult<Vec<StudentRecord>> {
        let subject = self.policy.resolve(&ctx.claims).await?;
        let scope = subject.student_scope(class_id);
        debug!(user_id = ctx.user_id(), ?scope, "Listing students");
        self.student_repo.list(&scope).await
    }
}

/// Lists subjects within the caller's scope.
#[derive(Debug, Clone)]
pub struct SubjectService {
    policy: Arc<AccessPolicy>,
    subject_repo: Arc<SubjectRepository>,
}

impl SubjectService {
    /// Creates a new subject service.
    pub fn new(policy: Arc<AccessPolicy>, subject_repo: Arc<SubjectRepository>) -> Self {
        Self {
            policy,
            subject_repo,
        }
    }

    /// The catalogue for principals, assigned subjects for teachers.
    pub async fn list(&self, ctx: &RequestContext) -> AppResult<Vec<Subject>> {
        let subject = self.policy.resolve(&ctx.claims).await?;
        let scope = subject.subject_scope()?;
        self.subject_repo.list(&scope).await
    }

    /// The teacher-facing listing of subjects the caller teaches.
    pub async fn list_taught(&self, ctx: &RequestContext) -> AppResult<Vec<Subject>> {
        let subject = self.policy.resolve(&ctx.claims).await?;
        let scope = subject.taught_subject_scope()?;
        self.subject_repo.list(&scope).await
    }
}
