//! Metadata fetching.

use super::MediaDownloader;
use crate::error::{Error, Result};
use crate::tool::args;
use crate::types::parse_media_url;

impl MediaDownloader {
    /// Dump the media metadata as reported by the tool
    ///
    /// Runs the tool exactly once and returns its standard output unchanged.
    /// Interpreting it as JSON is left to the caller.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidArgument` if `url` is empty or invalid
    /// - `Error::FetchFailed` if the tool could not be started or exited non-zero
    pub async fn fetch_info(&self, url: &str) -> Result<Vec<u8>> {
        let url = parse_media_url(url)?;

        tracing::info!(url = %url, "Fetching media info");

        let output = self
            .tool
            .run(&args::info_args(&url))
            .await
            .map_err(|e| Error::FetchFailed(e.to_string()))?;

        if let Some(reason) = output.failure() {
            let stderr = output.stderr_text();
            let message = if stderr.is_empty() {
                reason
            } else {
                format!("{}: {}", reason, stderr)
            };
            tracing::error!(url = %url, error = %message, "Metadata dump failed");
            return Err(Error::FetchFailed(message));
        }

        Ok(output.stdout)
    }
}
