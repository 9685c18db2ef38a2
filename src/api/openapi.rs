//! OpenAPI documentation and schema generation
//!
//! Defines the OpenAPI document for the ytdlp-server REST API using utoipa
//! for compile-time document generation.

use utoipa::OpenApi;

/// OpenAPI documentation for the ytdlp-server REST API
///
/// Served as JSON from `/api/openapi.json`.
#[derive(OpenApi)]
#[openapi(
    info(
        title = "ytdlp-server REST API",
        version = "0.1.0",
        description = "Fetch media metadata and download media with yt-dlp",
        license(
            name = "MIT OR Apache-2.0"
        )
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    paths(
        // Media
        crate::api::routes::fetch_info,
        crate::api::routes::download,

        // System
        crate::api::routes::health_check,
        crate::api::routes::openapi_spec,
    ),
    components(
        schemas(
            crate::types::DownloadMode,
        )
    ),
    tags(
        (name = "media", description = "Metadata fetch and downloads"),
        (name = "system", description = "Health check and API documentation")
    )
)]
pub struct ApiDoc;
