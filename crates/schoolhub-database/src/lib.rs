//! # schoolhub-database
//!
//! SQLite connection management, embedded migrations and the repositories
//! that turn scope predicates into parameterized SQL.

pub mod connection;
pub mod error;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
