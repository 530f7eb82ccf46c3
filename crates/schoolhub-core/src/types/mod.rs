//! Core type definitions used across the SchoolHub workspace.

pub mod scope;

pub use scope::{
    AnnouncementScope, AttendanceScope, ClassScope, ResultScope, ScopeFilter, StudentScope,
    SubjectScope, TimetableScope, WriteScope,
};
