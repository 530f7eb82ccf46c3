//! # schoolhub-api
//!
//! HTTP API layer for SchoolHub built on Axum.
//!
//! Provides the REST endpoints, the token extractor (bearer header, then
//! cookie), request logging and CORS middleware, DTOs, and the mapping from
//! `AppError` to status codes.

pub mod app;
pub mod cookie;
pub mod dto;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod middleware;
pub mod router;
pub mod state;

pub use app::{build_app, build_state};
pub use error::ApiError;
pub use state::AppState;
