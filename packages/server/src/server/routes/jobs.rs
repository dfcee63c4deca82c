//! Read-only job posting endpoints.
//!
//! Storage errors are logged and answered with a fixed 500 body; nothing about
//! the cause reaches the client.

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;

use crate::domains::jobs::JobPosting;
use crate::server::app::AppState;

#[derive(Serialize)]
struct ErrorBody {
    error: &'static str,
}

fn error_response(status: StatusCode, error: &'static str) -> Response {
    (status, Json(ErrorBody { error })).into_response()
}

fn not_found() -> Response {
    error_response(StatusCode::NOT_FOUND, "Job not found")
}

fn internal_error() -> Response {
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Internal Server Error")
}

/// `GET /jobs` - every stored posting, unpaginated
pub async fn list_jobs_handler(Extension(state): Extension<AppState>) -> Response {
    match JobPosting::find_all(&state.db_pool).await {
        Ok(postings) => Json(postings).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Failed to list job postings");
            internal_error()
        }
    }
}

/// `GET /jobs/:id` - one posting by upstream id
///
/// The path token is cast to a number the way the lookup column would cast
/// it (`" 42"`, `"42.0"` and `"4.2e1"` all mean 42). A token that can't be
/// cast is a failed lookup, not a missing record.
pub async fn get_job_handler(
    Extension(state): Extension<AppState>,
    Path(job_id): Path<String>,
) -> Response {
    let Some(external_id) = cast_job_id(&job_id) else {
        tracing::error!(job_id = %job_id, "Job id is not a number");
        return internal_error();
    };

    match JobPosting::find_by_external_id(external_id, &state.db_pool).await {
        Ok(Some(posting)) => Json(posting).into_response(),
        Ok(None) => not_found(),
        Err(e) => {
            tracing::error!(job_id = external_id, error = %e, "Failed to load job posting");
            internal_error()
        }
    }
}

/// Numeric cast of a path token: integers, or finite whole decimals in range.
pub fn cast_job_id(token: &str) -> Option<i64> {
    let token = token.trim();
    if let Ok(id) = token.parse::<i64>() {
        return Some(id);
    }

    let value = token.parse::<f64>().ok()?;
    let in_range = value >= i64::MIN as f64 && value < i64::MAX as f64;
    (value.is_finite() && value.fract() == 0.0 && in_range).then_some(value as i64)
}
