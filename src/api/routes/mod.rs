//! Route handlers for the REST API
//!
//! Handlers are organized by domain:
//! - [`media`] - Metadata fetch and downloads
//! - [`system`] - Health and OpenAPI

use serde::{Deserialize, Serialize};
use utoipa::IntoParams;

mod media;
mod system;

pub use media::*;
pub use system::*;

// ============================================================================
// Query Types
// ============================================================================

/// Query parameters for GET /api/fetchInfo
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct FetchInfoQuery {
    /// Media page URL
    pub url: Option<String>,
}

/// Query parameters for GET /api/download
#[derive(Debug, Default, Deserialize, Serialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DownloadQuery {
    /// Media page URL
    pub url: Option<String>,
    /// Destination directory passed to yt-dlp
    pub path: Option<String>,
    /// `audio` for audio-only extraction; any other value downloads video
    pub mode: Option<String>,
}
