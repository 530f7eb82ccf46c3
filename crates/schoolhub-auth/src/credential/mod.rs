//! Credential store adapter.

pub mod store;

pub use store::{CredentialRecord, CredentialStore, SqlCredentialStore};
