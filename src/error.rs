//! Error types for ytdlp-server
//!
//! This module provides error handling for the library, including:
//! - Domain-specific error variants (invalid arguments, tool failures, retries exhausted)
//! - HTTP status code mapping for API integration
//! - Machine-readable error codes for logs and clients

use thiserror::Error;

/// Result type alias for ytdlp-server operations
pub type Result<T> = std::result::Result<T, Error>;

/// Message returned when the retry loop ends below the resolution gate
pub const DOWNLOAD_FAILED_MESSAGE: &str = "Failed to get high quality video after retries";

/// Main error type for ytdlp-server
///
/// Each variant carries enough context to be logged on its own. The `Display`
/// text is what HTTP clients receive in the plain-text error body.
#[derive(Debug, Error)]
pub enum Error {
    /// A required request parameter is missing or malformed
    #[error("{message}")]
    InvalidArgument {
        /// Name of the offending parameter (e.g. "url", "path")
        param: &'static str,
        /// Human-readable error message
        message: String,
    },

    /// The external tool could not be started or died before reporting an exit status
    #[error("failed to execute media tool: {0}")]
    SubprocessInvocation(String),

    /// Structured tool output could not be decoded
    #[error("failed to parse tool output: {0}")]
    Parse(String),

    /// Video retries were exhausted without reaching the resolution gate
    #[error("Failed to get high quality video after retries")]
    DownloadFailed {
        /// Number of attempts performed
        attempts: u32,
        /// Height reported by the last attempt (0 when unknown)
        last_height: u32,
        /// Failure reported by the last attempt
        reason: String,
    },

    /// Metadata dump failed
    #[error("Failed to run yt-dlp: {0}")]
    FetchFailed(String),

    /// Configuration error with context about which setting is invalid
    #[error("configuration error: {message}")]
    Config {
        /// Human-readable error message describing the configuration issue
        message: String,
        /// The configuration key that caused the error (e.g., "download.retry.max_attempts")
        key: Option<String>,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// API server error
    #[error("API server error: {0}")]
    ApiServerError(String),

    /// Other error
    #[error("{0}")]
    Other(String),
}

impl Error {
    /// Shorthand for a missing or empty request parameter
    pub fn missing(param: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidArgument {
            param,
            message: message.into(),
        }
    }
}

/// Convert errors to HTTP status codes for API responses
///
/// This trait maps domain errors to appropriate HTTP status codes.
pub trait ToHttpStatus {
    /// Get the HTTP status code for this error
    fn status_code(&self) -> u16;

    /// Get the machine-readable error code
    fn error_code(&self) -> &str;
}

impl ToHttpStatus for Error {
    fn status_code(&self) -> u16 {
        match self {
            // 400 Bad Request - Client error (invalid input)
            Error::InvalidArgument { .. } => 400,
            Error::Config { .. } => 400,

            // 500 Internal Server Error - tool and server-side failures
            Error::SubprocessInvocation(_) => 500,
            Error::Parse(_) => 500,
            Error::DownloadFailed { .. } => 500,
            Error::FetchFailed(_) => 500,
            Error::Io(_) => 500,
            Error::Serialization(_) => 500,
            Error::ApiServerError(_) => 500,
            Error::Other(_) => 500,
        }
    }

    fn error_code(&self) -> &str {
        match self {
            Error::InvalidArgument { .. } => "invalid_argument",
            Error::SubprocessInvocation(_) => "subprocess_invocation_error",
            Error::Parse(_) => "parse_error",
            Error::DownloadFailed { .. } => "download_failed",
            Error::FetchFailed(_) => "fetch_failed",
            Error::Config { .. } => "config_error",
            Error::Io(_) => "io_error",
            Error::Serialization(_) => "serialization_error",
            Error::ApiServerError(_) => "api_server_error",
            Error::Other(_) => "internal_error",
        }
    }
}
