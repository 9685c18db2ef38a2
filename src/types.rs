//! Core request and result types

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::PathBuf;
use utoipa::ToSchema;

/// What the tool should extract from the media URL
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum DownloadMode {
    /// Audio-only extraction, single attempt, no quality gate
    Audio,
    /// Best video merged with best audio, gated on resolution (default)
    #[default]
    Video,
}

impl DownloadMode {
    /// Interpret the `mode` query parameter
    ///
    /// Only `audio` selects audio mode. Anything else, including a missing
    /// value, means video.
    pub fn from_query(value: Option<&str>) -> Self {
        match value {
            Some("audio") => DownloadMode::Audio,
            _ => DownloadMode::Video,
        }
    }

    /// Whether this mode applies the resolution gate
    pub fn is_gated(&self) -> bool {
        matches!(self, DownloadMode::Video)
    }
}

impl fmt::Display for DownloadMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DownloadMode::Audio => write!(f, "audio"),
            DownloadMode::Video => write!(f, "video"),
        }
    }
}

/// A validated download request
///
/// Built once per HTTP request and dropped with the response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DownloadRequest {
    /// Media URL handed to the tool
    pub url: String,
    /// Directory the tool writes into (`-P`)
    pub destination_path: PathBuf,
    /// Audio or video flow
    pub mode: DownloadMode,
}

impl DownloadRequest {
    /// Validate raw request parameters
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidArgument` when the URL is empty or starts with `-`,
    /// or when the destination path is empty.
    pub fn new(url: &str, destination_path: &str, mode: DownloadMode) -> Result<Self> {
        let url = parse_media_url(url)?;

        if destination_path.trim().is_empty() {
            return Err(Error::missing("path", "Missing download path"));
        }

        Ok(Self {
            url,
            destination_path: PathBuf::from(destination_path),
            mode,
        })
    }
}

/// Check that a media URL is present and cannot be read as an option
///
/// Any non-empty value is accepted, since yt-dlp also takes bare video IDs
/// and extractor-prefixed inputs. A leading `-` is rejected so values such
/// as `--exec` never reach the tool as options.
pub fn parse_media_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(Error::missing("url", "Missing URL"));
    }

    if trimmed.starts_with('-') {
        return Err(Error::InvalidArgument {
            param: "url",
            message: format!("Invalid URL: {} looks like a command-line option", trimmed),
        });
    }

    Ok(trimmed.to_string())
}

/// Result of a single tool invocation during a download
#[derive(Clone, Debug, Default)]
pub struct AttemptResult {
    /// Combined output of the tool (stdout followed by stderr)
    pub raw_output: Vec<u8>,
    /// Height parsed from structured output, `None` when unknown
    pub parsed_height: Option<u32>,
    /// Failure reported by the tool or by the invocation, `None` on success
    pub error: Option<String>,
}

impl AttemptResult {
    /// Whether the tool ran and exited successfully
    pub fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    /// Parsed height, with unknown treated as 0
    pub fn height(&self) -> u32 {
        self.parsed_height.unwrap_or(0)
    }
}

/// Dimensions reported in the tool's structured output
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct MediaDimensions {
    /// Width in pixels
    #[serde(default)]
    pub width: Option<u32>,
    /// Height in pixels
    #[serde(default)]
    pub height: Option<u32>,
}

#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_from_query() {
        assert_eq!(DownloadMode::from_query(Some("audio")), DownloadMode::Audio);
        assert_eq!(DownloadMode::from_query(Some("video")), DownloadMode::Video);
        assert_eq!(DownloadMode::from_query(Some("Audio")), DownloadMode::Video);
        assert_eq!(DownloadMode::from_query(Some("")), DownloadMode::Video);
        assert_eq!(DownloadMode::from_query(None), DownloadMode::Video);
    }

    #[test]
    fn test_only_video_is_gated() {
        assert!(DownloadMode::Video.is_gated());
        assert!(!DownloadMode::Audio.is_gated());
    }

    #[test]
    fn test_request_requires_url() {
        let err = DownloadRequest::new("", "/tmp/out", DownloadMode::Video).unwrap_err();
        match err {
            Error::InvalidArgument { param, message } => {
                assert_eq!(param, "url");
                assert_eq!(message, "Missing URL");
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_request_requires_path() {
        let err = DownloadRequest::new("https://example.com/v", "  ", DownloadMode::Audio)
            .unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { param: "path", .. }));
    }

    #[test]
    fn test_request_rejects_option_like_url() {
        let err = DownloadRequest::new("--exec=rm", "/tmp/out", DownloadMode::Video).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument { param: "url", .. }));
    }

    #[test]
    fn test_request_accepts_bare_identifiers() {
        let request = DownloadRequest::new("X", "/tmp/out", DownloadMode::Audio).unwrap();
        assert_eq!(request.url, "X");

        assert_eq!(parse_media_url("dQw4w9WgXcQ").unwrap(), "dQw4w9WgXcQ");
        assert_eq!(parse_media_url("ytsearch:rust").unwrap(), "ytsearch:rust");
    }

    #[test]
    fn test_request_accepts_valid_input() {
        let request =
            DownloadRequest::new(" https://example.com/watch?v=1 ", "/tmp/out", DownloadMode::Audio)
                .unwrap();
        assert_eq!(request.url, "https://example.com/watch?v=1");
        assert_eq!(request.destination_path, PathBuf::from("/tmp/out"));
        assert_eq!(request.mode, DownloadMode::Audio);
    }

    #[test]
    fn test_attempt_result_unknown_height_is_zero() {
        let result = AttemptResult::default();
        assert_eq!(result.height(), 0);
        assert!(result.succeeded());

        let failed = AttemptResult {
            error: Some("exit status: 1".into()),
            parsed_height: Some(720),
            ..Default::default()
        };
        assert_eq!(failed.height(), 720);
        assert!(!failed.succeeded());
    }

    #[test]
    fn test_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&DownloadMode::Audio).unwrap(), "\"audio\"");
        assert_eq!(DownloadMode::Video.to_string(), "video");
    }
}
