//! HTTP handlers, one module per resource.

pub mod announcements;
pub mod attendance;
pub mod auth;
pub mod classes;
pub mod health;
pub mod results;
pub mod students;
pub mod subjects;
pub mod timetable;
