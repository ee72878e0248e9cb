//! OpenAPI/Utoipa configuration.

use crate::api::{health::MISC_TAG, project::SHOWCASE_TAG};
use utoipa::OpenApi;

/// OpenAPI documentation configuration.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "GitOps Project Showcase API",
        version = "1.0.0",
        description = "API backing the GitOps-with-monitoring showcase site."
    ),
    tags(
        (name = MISC_TAG, description = "Miscellaneous endpoints"),
        (name = SHOWCASE_TAG, description = "Project showcase endpoints")
    )
)]
pub struct ApiDoc;
