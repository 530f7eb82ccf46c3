//! # schoolhub-core
//!
//! Core crate for SchoolHub. Contains configuration schemas, the scope
//! predicates produced by the access policy, and the unified error system.
//!
//! This crate has **no** internal dependencies on other SchoolHub crates.

pub mod config;
pub mod error;
pub mod result;
pub mod types;

pub use error::AppError;
pub use result::AppResult;
