//! Role-scoped access policy.
//!
//! Resolution happens in two steps: [`AccessPolicy::resolve`] turns verified
//! claims into a [`Subject`] (the only step with I/O), then the pure
//! per-resource methods on [`Subject`] compute the scope predicate.

pub mod directory;
pub mod engine;
pub mod subject;

pub use directory::{ProfileDirectory, SqlProfileDirectory, StudentPlacement};
pub use engine::AccessPolicy;
pub use subject::Subject;
