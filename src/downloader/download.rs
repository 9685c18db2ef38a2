//! Download orchestration.
//!
//! Audio downloads run the tool once. Video downloads are re-run until the
//! reported height reaches `download.min_video_height` or the retry budget
//! is spent. The destination and arguments never change between attempts;
//! resuming or skipping already-fetched data is left to the tool.

use super::MediaDownloader;
use crate::error::{Error, Result};
use crate::retry::{self, RetryState};
use crate::tool::{args, parser};
use crate::types::{AttemptResult, DownloadMode, DownloadRequest};

impl MediaDownloader {
    /// Validate raw parameters and run the download
    ///
    /// Returns the raw output of the last tool invocation.
    ///
    /// # Errors
    ///
    /// - `Error::InvalidArgument` if `url` or `destination_path` is empty or invalid;
    ///   no process is spawned in that case
    /// - `Error::SubprocessInvocation` if the tool could not be started in audio mode
    /// - `Error::DownloadFailed` if a video download ends below the resolution
    ///   gate with a failing last attempt
    pub async fn download(
        &self,
        url: &str,
        destination_path: &str,
        mode: DownloadMode,
    ) -> Result<Vec<u8>> {
        let request = DownloadRequest::new(url, destination_path, mode)?;
        self.download_request(&request).await
    }

    /// Run an already validated download request
    pub async fn download_request(&self, request: &DownloadRequest) -> Result<Vec<u8>> {
        tracing::info!(
            url = %request.url,
            path = %request.destination_path.display(),
            mode = %request.mode,
            "Starting download"
        );

        if request.mode.is_gated() {
            self.download_video(request).await
        } else {
            self.download_audio(request).await
        }
    }

    async fn download_audio(&self, request: &DownloadRequest) -> Result<Vec<u8>> {
        let args = args::audio_args(&request.url, &request.destination_path);

        tracing::info!(attempt = 1, max_attempts = 1, "Attempt 1/1 (audio)");

        // Only a failure to spawn aborts; a failing exit still returns its output
        let output = self.tool.run(&args).await?;

        if let Some(reason) = output.failure() {
            tracing::warn!(
                error = %reason,
                output = %String::from_utf8_lossy(&output.combined()),
                "yt-dlp reported an error during audio download"
            );
        }

        Ok(output.combined())
    }

    async fn download_video(&self, request: &DownloadRequest) -> Result<Vec<u8>> {
        let args = args::video_args(&request.url, &request.destination_path, &self.config.tool);
        let retry_config = &self.config.download.retry;
        let min_height = self.config.download.min_video_height;
        let max_attempts = retry_config.max_attempts.max(1);

        let args = args.as_slice();
        let state: RetryState<AttemptResult> = retry::retry_until(
            retry_config,
            move |attempt| self.video_attempt(args, attempt, max_attempts),
            |result| result.height() >= min_height,
        )
        .await;

        let last = state.last_result;

        if state.satisfied {
            tracing::info!(
                attempts = state.attempt_number,
                height = last.height(),
                "Got desired resolution, stopping retries"
            );
        }

        // A failing last attempt is tolerated only when its output met the gate
        if !last.succeeded() && last.height() < min_height {
            let last_height = last.height();
            let reason = last.error.unwrap_or_default();
            tracing::error!(
                attempts = state.attempt_number,
                height = last_height,
                min_height = min_height,
                error = %reason,
                "Video download failed below target resolution"
            );
            return Err(Error::DownloadFailed {
                attempts: state.attempt_number,
                last_height,
                reason,
            });
        }

        if !state.satisfied {
            tracing::warn!(
                attempts = state.attempt_number,
                height = last.height(),
                min_height = min_height,
                "Returning best-effort output below target resolution"
            );
        }

        Ok(last.raw_output)
    }

    /// One video attempt. Never fails: every problem is folded into the result.
    async fn video_attempt(
        &self,
        args: &[String],
        attempt: u32,
        max_attempts: u32,
    ) -> AttemptResult {
        tracing::info!(
            attempt = attempt,
            max_attempts = max_attempts,
            "Attempt {}/{}",
            attempt,
            max_attempts
        );

        let output = match self.tool.run(args).await {
            Ok(output) => output,
            Err(e) => {
                tracing::warn!(attempt = attempt, error = %e, "yt-dlp could not be invoked");
                return AttemptResult {
                    raw_output: Vec::new(),
                    parsed_height: None,
                    error: Some(e.to_string()),
                };
            }
        };

        let error = output.failure();
        if let Some(ref reason) = error {
            tracing::warn!(
                attempt = attempt,
                error = %reason,
                output = %String::from_utf8_lossy(&output.combined()),
                "yt-dlp reported an error"
            );
        }

        // Unparsable output means "resolution unknown", never a handler failure
        let parsed_height = match parser::parse_dimensions(&output.stdout) {
            Ok(dimensions) => {
                let height = dimensions.height.unwrap_or(0);
                tracing::info!(
                    attempt = attempt,
                    height = height,
                    "Downloaded resolution: {}p",
                    height
                );
                Some(height)
            }
            Err(e) => {
                tracing::warn!(attempt = attempt, error = %e, "Failed to parse yt-dlp JSON");
                None
            }
        };

        AttemptResult {
            raw_output: output.combined(),
            parsed_height,
            error,
        }
    }
}
