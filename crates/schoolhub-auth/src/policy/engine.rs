//! Subject resolution from verified claims.

use std::sync::Arc;

use tracing::debug;

use schoolhub_core::error::AppError;
use schoolhub_core::result::AppResult;
use schoolhub_entity::user::Role;

use crate::jwt::Claims;

use super::directory::ProfileDirectory;
use super::subject::Subject;

/// Turns verified claims into a [`Subject`] whose methods compute scopes.
#[derive(Clone)]
pub struct AccessPolicy {
    directory: Arc<dyn ProfileDirectory>,
}

impl std::fmt::Debug for AccessPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AccessPolicy").finish_non_exhaustive()
    }
}

impl AccessPolicy {
    /// Creates a policy over a profile directory.
    pub fn new(directory: Arc<dyn ProfileDirectory>) -> Self {
        Self { directory }
    }

    /// Resolve the caller's profile.
    ///
    /// An unrecognised role is denied before any lookup. A teacher or student
    /// without a profile row is `NotFound`.
    pub async fn resolve(&self, claims: &Claims) -> AppResult<Subject> {
        let role = claims.parsed_role().ok_or_else(|| {
            debug!(user_id = claims.id, role = %claims.role, "Unrecognised role denied");
            AppError::authorization("Access denied")
        })?;

        let subject = match role {
            Role::Principal => Subject::Principal { user_id: claims.id },
            Role::Teacher => {
                let teacher_id = self
                    .directory
                    .teacher_id(claims.id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Teacher profile not found"))?;
                Subject::Teacher {
                    user_id: claims.id,
                    teacher_id,
                }
            }
            Role::Student => {
                let placement = self
                    .directory
                    .student_placement(claims.id)
                    .await?
                    .ok_or_else(|| AppError::not_found("Student profile not found"))?;
                Subject::Student {
                    user_id: claims.id,
                    student_id: placement.student_id,
                    class_id: placement.class_id,
                }
            }
        };

        debug!(user_id = subject.user_id(), ?subject, "Subject resolved");
        Ok(subject)
    }
}
