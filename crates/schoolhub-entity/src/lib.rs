//! # schoolhub-entity
//!
//! Domain entity models for SchoolHub. Every struct in this crate represents
//! a database table row or a domain value object. Row types derive
//! `sqlx::FromRow` so untyped rows never leave the repository layer.

pub mod academic;
pub mod announcement;
pub mod attendance;
pub mod timetable;
pub mod user;
