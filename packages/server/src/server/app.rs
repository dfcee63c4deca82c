//! Application setup and server configuration.

use std::time::Duration;

use axum::{extract::Extension, routing::get, Router};
use sqlx::PgPool;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

use crate::server::routes::{get_job_handler, list_jobs_handler, root_handler};

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub db_pool: PgPool,
    /// Port the server was configured with, echoed by `GET /`.
    pub port: u16,
}

/// Build the Axum application router
pub fn build_app(pool: PgPool, port: u16, request_timeout: Duration) -> Router {
    let app_state = AppState {
        db_pool: pool,
        port,
    };

    Router::new()
        .route("/", get(root_handler))
        .route("/jobs", get(list_jobs_handler))
        .route("/jobs/:id", get(get_job_handler))
        // Middleware layers (applied in reverse order - last added runs first)
        .layer(Extension(app_state))
        .layer(TimeoutLayer::new(request_timeout))
        .layer(TraceLayer::new_for_http())
}
