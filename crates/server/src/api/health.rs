//! Health check endpoint.

use super::AppState;
use crate::response::HealthResponse;
use axum::{Json, extract::State};
use time::OffsetDateTime;

/// Tag for OpenAPI documentation.
pub const MISC_TAG: &str = "Miscellaneous";

/// Health check endpoint.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    method(get, head),
    path = "/health",
    tag = MISC_TAG,
    operation_id = "Health Check",
    summary = "Service health check",
    description = "Returns the health status of the service together with the current time and \
                   the number of seconds the process has been running.\n\n\
                   **Use cases:**\n\
                   - Kubernetes liveness/readiness probes\n\
                   - Load balancer health checks\n\
                   - Monitoring systems\n\n\
                   Supports both GET and HEAD methods for compatibility with various health \
                   check systems.",
    responses(
        (status = 200, description = "Service is healthy", body = HealthResponse, content_type = "application/json")
    )
)]
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_owned(),
        timestamp: OffsetDateTime::now_utc(),
        uptime: state.started.elapsed().as_secs_f64(),
    })
}
