//! User domain entities.

pub mod model;
pub mod role;

pub use model::{CreateUser, Identity, UserAccount};
pub use role::Role;
