//! Timetable entities.

pub mod model;

pub use model::TimetableEntry;
