//! Project description endpoint.

use super::AppState;
use crate::response::ProjectInfo;
use axum::{Json, extract::State};

/// Tag for OpenAPI documentation.
pub const SHOWCASE_TAG: &str = "Showcase API";

/// Returns the static project description document.
///
/// The document is assembled once at startup; this handler only hands out a
/// copy, so it has no failure path.
#[tracing::instrument(skip(state))]
#[utoipa::path(
    get,
    path = "/project-info",
    tag = SHOWCASE_TAG,
    operation_id = "Get Project Info",
    summary = "Project description document",
    description = "Returns the showcased project's name, description, technologies, \
                   architecture summary, feature list and repository URL. The frontend fetches \
                   this once per page load to render the technology and feature cards.",
    responses(
        (status = 200, description = "The project description", body = ProjectInfo, content_type = "application/json")
    )
)]
pub async fn project_info(State(state): State<AppState>) -> Json<ProjectInfo> {
    Json((*state.project).clone())
}
