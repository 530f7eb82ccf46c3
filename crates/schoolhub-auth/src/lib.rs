//! # schoolhub-auth
//!
//! Authentication and role-scoped authorization for SchoolHub.
//!
//! ## Modules
//!
//! - `password`: Argon2id password hashing and verification
//! - `jwt`: signed, time-bounded token issuance and verification
//! - `credential`: user lookup that keeps password hashes inside this crate
//! - `authenticator`: the login flow
//! - `policy`: subject resolution and per-resource scope computation

pub mod authenticator;
pub mod credential;
pub mod jwt;
pub mod password;
pub mod policy;

pub use authenticator::{Authenticator, LoginOutcome};
pub use credential::{CredentialRecord, CredentialStore, SqlCredentialStore};
pub use jwt::{Claims, TokenService};
pub use password::PasswordHasher;
pub use policy::{AccessPolicy, ProfileDirectory, SqlProfileDirectory, Subject};
