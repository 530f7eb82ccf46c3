//! Repository implementations for all SchoolHub entities.
//!
//! Read methods take a scope predicate computed by the access policy and
//! render it into SQL; they never decide visibility themselves.

pub mod announcement;
pub mod attendance;
pub mod class;
pub mod profile;
pub mod result;
pub mod student;
pub mod subject;
pub mod timetable;
pub mod user;

pub use announcement::AnnouncementRepository;
pub use attendance::AttendanceRepository;
pub use class::ClassRepository;
pub use profile::ProfileRepository;
pub use result::ResultRepository;
pub use student::StudentRepository;
pub use subject::SubjectRepository;
pub use timetable::TimetableRepository;
pub use user::UserRepository;
