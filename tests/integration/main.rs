//! HTTP-level integration tests over an in-memory database.

mod helpers;

mod attendance_test;
mod auth_test;
mod scope_test;
