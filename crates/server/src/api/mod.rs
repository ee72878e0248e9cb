//! API module providing HTTP endpoints for the showcase server.
//!
//! This module is organized into submodules:
//! - `project` - Project description endpoint (/api/project-info)
//! - `health` - Health check endpoint (/api/health)
//! - `openapi` - OpenAPI/Utoipa configuration
//!
//! Everything outside `/api` and `/api-docs` is handled by the static asset
//! service, which falls back to the HTML entry point so client-side routes
//! resolve to the single-page app.

pub mod health;
pub mod openapi;
pub mod project;

// Re-export commonly used items
pub use health::MISC_TAG;
pub use project::SHOWCASE_TAG;

use crate::config::AppConfig;
use crate::response::ProjectInfo;
use axum::Router;
use color_eyre::eyre::bail;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;
use tower_http::services::{ServeDir, ServeFile};
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_redoc::{Redoc, Servable};

/// Shared state for the API endpoints.
///
/// Holds the startup instant for uptime reporting and the immutable project
/// document. Cloning is cheap; the document itself is behind an `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub started: Instant,
    pub project: Arc<ProjectInfo>,
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            started: Instant::now(),
            project: Arc::new(ProjectInfo::showcase()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the API router for the `/api` prefix.
fn api_router(state: AppState) -> OpenApiRouter {
    OpenApiRouter::new()
        .routes(routes!(health::health))
        .routes(routes!(project::project_info))
        .with_state(state)
}

/// Builds the full application router: API routes, Redoc documentation and
/// the static asset service with its single-page-app fallback.
pub fn router(state: AppState, public_dir: &Path) -> Router {
    let assets =
        ServeDir::new(public_dir).fallback(ServeFile::new(public_dir.join("index.html")));

    let (router, api) = OpenApiRouter::with_openapi(openapi::ApiDoc::openapi())
        .nest("/api", api_router(state))
        .split_for_parts();

    router
        .merge(Redoc::with_url("/api-docs", api))
        .fallback_service(assets)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Starts the web server with all configured routes.
///
/// Fails fatally on an unusable public directory or an unbindable port;
/// there are no recoverable startup errors.
#[tracing::instrument(skip(state, config))]
pub async fn start_webserver(state: AppState, config: &AppConfig) -> color_eyre::Result<()> {
    let index = config.public_dir.join("index.html");
    if !index.is_file() {
        bail!("missing HTML entry point at {}", index.display());
    }

    let app = router(state, &config.public_dir);

    let addr = format!("0.0.0.0:{}", config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "showcase server listening");
    axum::serve(listener, app)
        .await
        .map_err(|e| color_eyre::Report::msg(format!("Failed to start server: {e}")))?;

    Ok(())
}
