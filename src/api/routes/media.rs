//! Media handlers: metadata fetch and downloads.

use super::{DownloadQuery, FetchInfoQuery};
use crate::api::AppState;
use crate::error::Result;
use crate::types::DownloadMode;
use axum::{
    extract::{Query, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

/// Relay raw tool output as a JSON response
fn json_bytes(body: Vec<u8>) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        body,
    )
        .into_response()
}

/// GET /api/fetchInfo - Dump media metadata
#[utoipa::path(
    get,
    path = "/api/fetchInfo",
    tag = "media",
    params(FetchInfoQuery),
    responses(
        (status = 200, description = "Metadata JSON exactly as printed by yt-dlp", content_type = "application/json"),
        (status = 400, description = "Missing URL", body = String, content_type = "text/plain"),
        (status = 500, description = "yt-dlp failed", body = String, content_type = "text/plain")
    )
)]
pub async fn fetch_info(
    State(state): State<AppState>,
    Query(query): Query<FetchInfoQuery>,
) -> Result<Response> {
    let url = query.url.as_deref().unwrap_or_default();
    let body = state.downloader.fetch_info(url).await?;
    Ok(json_bytes(body))
}

/// GET /api/download - Download media into a directory
///
/// Video downloads are retried until the configured minimum height is
/// reached, so this request can take a long time to answer.
#[utoipa::path(
    get,
    path = "/api/download",
    tag = "media",
    params(DownloadQuery),
    responses(
        (status = 200, description = "Output of the last yt-dlp run", content_type = "application/json"),
        (status = 400, description = "Missing URL or download path", body = String, content_type = "text/plain"),
        (status = 500, description = "Retries exhausted below the target resolution", body = String, content_type = "text/plain")
    )
)]
pub async fn download(
    State(state): State<AppState>,
    Query(query): Query<DownloadQuery>,
) -> Result<Response> {
    let mode = DownloadMode::from_query(query.mode.as_deref());
    let body = state
        .downloader
        .download(
            query.url.as_deref().unwrap_or_default(),
            query.path.as_deref().unwrap_or_default(),
            mode,
        )
        .await?;
    Ok(json_bytes(body))
}
