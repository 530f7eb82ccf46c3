//! Classes, subjects, staff and student profiles, assignments and results.

pub mod assignment;
pub mod class;
pub mod profile;
pub mod result;
pub mod subject;

pub use assignment::TeachingAssignment;
pub use class::SchoolClass;
pub use profile::{StudentProfile, StudentRecord, TeacherProfile};
pub use result::{ResultRecord, UpsertResult};
pub use subject::Subject;
