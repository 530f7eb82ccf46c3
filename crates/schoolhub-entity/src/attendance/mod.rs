//! Attendance entities.

pub mod model;
pub mod status;

pub use model::{AttendanceEntry, AttendanceRecord, BulkOutcome};
pub use status::AttendanceStatus;
