//! Row-scoping predicates.
//!
//! The access policy decides *which* rows an identity may touch and encodes
//! the decision as one of these values; repositories translate them into SQL.
//! A principal's unrestricted view is the explicit `All` variant, never the
//! absence of a scope.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional caller-supplied narrowing applied inside the permitted scope.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScopeFilter {
    /// Restrict to a class.
    #[serde(default)]
    pub class_id: Option<i64>,
    /// Restrict to a subject.
    #[serde(default)]
    pub subject_id: Option<i64>,
    /// Restrict to a student.
    #[serde(default)]
    pub student_id: Option<i64>,
    /// Restrict to a calendar date.
    #[serde(default)]
    pub date: Option<NaiveDate>,
}

/// Which classes are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClassScope {
    /// Every class.
    All,
    /// Classes in which the teacher holds at least one teaching assignment.
    TaughtBy { teacher_id: i64 },
    /// A single class (a student's own).
    Only { class_id: i64 },
}

/// Which student records are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StudentScope {
    /// Every student, optionally narrowed to a class.
    All { class_id: Option<i64> },
    /// Students of classes the teacher is assigned to, optionally narrowed.
    TaughtBy {
        teacher_id: i64,
        class_id: Option<i64>,
    },
    /// Exactly one student record.
    Only { student_id: i64 },
}

/// Which subjects are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubjectScope {
    /// The full subject catalogue.
    All,
    /// Subjects the teacher holds an assignment for.
    TaughtBy { teacher_id: i64 },
}

/// Which results are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResultScope {
    /// Every result, narrowed by the filter.
    All { filter: ScopeFilter },
    /// Results whose subject and student class match one of the teacher's
    /// assignments, narrowed by the filter.
    TaughtBy {
        teacher_id: i64,
        filter: ScopeFilter,
    },
    /// One student's own results.
    OwnStudent { student_id: i64 },
}

/// Which announcements are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnnouncementScope {
    /// Every announcement.
    All,
    /// Targeted at everyone, at teachers, or at a class the teacher teaches.
    Teacher { teacher_id: i64 },
    /// Targeted at everyone, at students, or at the student's own class.
    Student { class_id: i64 },
}

/// Which attendance records are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttendanceScope {
    /// Every record, narrowed by the filter.
    All { filter: ScopeFilter },
    /// Records of students in classes the teacher is assigned to.
    TaughtBy {
        teacher_id: i64,
        filter: ScopeFilter,
    },
    /// One student's own records, optionally on a single date.
    OwnStudent {
        student_id: i64,
        date: Option<NaiveDate>,
    },
}

/// Which timetable entries are visible.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TimetableScope {
    /// Every entry, optionally narrowed to a class.
    All { class_id: Option<i64> },
    /// Entries the teacher delivers.
    Teacher { teacher_id: i64 },
    /// Entries of one class.
    Class { class_id: i64 },
}

/// Which rows a write may touch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteScope {
    /// Any row.
    Any,
    /// Only rows reachable through the teacher's assignments.
    TaughtBy { teacher_id: i64 },
}
