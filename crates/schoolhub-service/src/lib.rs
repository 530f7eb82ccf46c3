//! # schoolhub-service
//!
//! Resource services for SchoolHub. Every operation follows the same shape:
//! resolve the caller through the access policy, compute the scope for the
//! resource, and hand it to the repository.
//!
//! Services follow constructor injection; dependencies are provided at
//! construction time via `Arc` references.

pub mod academic;
pub mod announcement;
pub mod attendance;
pub mod context;
pub mod result;
pub mod timetable;

pub use academic::{ClassService, StudentService, SubjectService};
pub use announcement::AnnouncementService;
pub use attendance::AttendanceService;
pub use context::RequestContext;
pub use result::ResultService;
pub use timetable::TimetableService;
