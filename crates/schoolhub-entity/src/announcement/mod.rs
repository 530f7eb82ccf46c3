//! Announcement entities.

pub mod model;
pub mod target;

pub use model::{Announcement, CreateAnnouncement};
pub use target::AnnouncementTarget;
