//! The resolved caller and its per-resource scopes.

use schoolhub_core::error::AppError;
use schoolhub_core::result::AppResult;
use schoolhub_core::types::{
    AnnouncementScope, AttendanceScope, ClassScope, ResultScope, ScopeFilter, StudentScope,
    SubjectScope, TimetableScope, WriteScope,
};

/// A caller whose role profile has been resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    /// Unrestricted reader and writer.
    Principal { user_id: i64 },
    /// Scoped by teaching assignments.
    Teacher { user_id: i64, teacher_id: i64 },
    /// Scoped to one student record and its class.
    Student {
        user_id: i64,
        student_id: i64,
        class_id: i64,
    },
}

impl Subject {
    /// The caller's user id.
    pub fn user_id(&self) -> i64 {
        match self {
            Self::Principal { user_id }
            | Self::Teacher { user_id, .. }
            | Self::Student { user_id, .. } => *user_id,
        }
    }

    /// Classes the caller may list.
    pub fn class_scope(&self) -> ClassScope {
        match *self {
            Self::Principal { .. } => ClassScope::All,
            Self::Teacher { teacher_id, .. } => ClassScope::TaughtBy { teacher_id },
            Self::Student { class_id, .. } => ClassScope::Only { class_id },
        }
    }

    /// Students the caller may list. A student's class filter is ignored.
    pub fn student_scope(&self, class_id: Option<i64>) -> StudentScope {
        match *self {
            Self::Principal { .. } => StudentScope::All { class_id },
            Self::Teacher { teacher_id, .. } => StudentScope::TaughtBy {
                teacher_id,
                class_id,
            },
            Self::Student { student_id, .. } => StudentScope::Only { student_id },
        }
    }

    /// Subjects the caller may list. Students have no subject listing.
    pub fn subject_scope(&self) -> AppResult<SubjectScope> {
        match *self {
            Self::Principal { .. } => Ok(SubjectScope::All),
            Self::Teacher { teacher_id, .. } => Ok(SubjectScope::TaughtBy { teacher_id }),
            Self::Student { .. } => Err(AppError::authorization(
                "Students cannot list the subject catalogue",
            )),
        }
    }

    /// Subjects of the teacher-facing listing, which only teachers may call.
    pub fn taught_subject_scope(&self) -> AppResult<SubjectScope> {
        match *self {
            Self::Teacher { teacher_id, .. } => Ok(SubjectScope::TaughtBy { teacher_id }),
            _ => Err(AppError::authorization("Teacher access required")),
        }
    }

    /// Results the caller may read. Students always see only their own.
    pub fn result_scope(&self, filter: ScopeFilter) -> ResultScope {
        match *self {
            Self::Principal { .. } => ResultScope::All { filter },
            Self::Teacher { teacher_id, .. } => ResultScope::TaughtBy { teacher_id, filter },
            Self::Student { student_id, .. } => ResultScope::OwnStudent { student_id },
        }
    }

    /// Announcements the caller may read.
    pub fn announcement_scope(&self) -> AnnouncementScope {
        match *self {
            Self::Principal { .. } => AnnouncementScope::All,
            Self::Teacher { teacher_id, .. } => AnnouncementScope::Teacher { teacher_id },
            Self::Student { class_id, .. } => AnnouncementScope::Student { class_id },
        }
    }

    /// Attendance the caller may read.
    pub fn attendance_scope(&self, filter: ScopeFilter) -> AttendanceScope {
        match *self {
            Self::Principal { .. } => AttendanceScope::All { filter },
            Self::Teacher { teacher_id, .. } => AttendanceScope::TaughtBy { teacher_id, filter },
            Self::Student { student_id, .. } => AttendanceScope::OwnStudent {
                student_id,
                date: filter.date,
            },
        }
    }

    /// Timetable entries the caller may read. Only principals may filter by class.
    pub fn timetable_scope(&self, class_id: Option<i64>) -> TimetableScope {
        match *self {
            Self::Principal { .. } => TimetableScope::All { class_id },
            Self::Teacher { teacher_id, .. } => TimetableScope::Teacher { teacher_id },
            Self::Student { class_id, .. } => TimetableScope::Class { class_id },
        }
    }

    /// Rows the caller may write: attendance, results and announcements.
    pub fn write_scope(&self) -> AppResult<WriteScope> {
        match *self {
            Self::Principal { .. } => Ok(WriteScope::Any),
            Self::Teacher { teacher_id, .. } => Ok(WriteScope::TaughtBy { teacher_id }),
            Self::Student { .. } => Err(AppError::authorization(
                "Only teachers and principals can perform this action",
            )),
        }
    }
}
