//! Route definitions for the SchoolHub HTTP API.
//!
//! All routes are organized by resource and mounted under `/api`.

use axum::{
    Router, middleware as axum_middleware,
    routing::{get, post},
};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::middleware;
use crate::state::AppState;

/// Build the complete Axum router with all routes and middleware.
pub fn build_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .merge(auth_routes())
        .merge(academic_routes())
        .merge(record_routes())
        .merge(health_routes());

    let cors = middleware::cors::build_cors_layer(&state.config.server.cors);

    Router::new()
        .nest("/api", api_routes)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(axum_middleware::from_fn(middleware::logging::request_logging))
        .with_state(state)
}

/// Auth endpoints: login, logout, me
fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/auth/login", post(handlers::auth::login))
        .route("/auth/logout", post(handlers::auth::logout))
        .route("/auth/me", get(handlers::auth::me))
}

/// Classes, students, subjects, timetable
fn academic_routes() -> Router<AppState> {
    Router::new()
        .route("/classes", get(handlers::classes::list_classes))
        .route("/students", get(handlers::students::list_students))
        .route("/subjects", get(handlers::subjects::list_subjects))
        .route(
            "/teacher/subjects",
            get(handlers::subjects::list_taught_subjects),
        )
        .route("/timetable", get(handlers::timetable::list_timetable))
}

/// Results, attendance, announcements
fn record_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/results",
            get(handlers::results::list_results).post(handlers::results::record_result),
        )
        .route(
            "/attendance",
            get(handlers::attendance::list_attendance)
                .post(handlers::attendance::record_attendance),
        )
        .route(
            "/announcements",
            get(handlers::announcements::list_announcements)
                .post(handlers::announcements::create_announcement),
        )
}

/// Liveness
fn health_routes() -> Router<AppState> {
    Router::new().route("/health", get(handlers::health::health))
}
