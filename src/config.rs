//! Configuration types for ytdlp-server

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::{net::SocketAddr, path::Path, path::PathBuf, time::Duration};

/// External tool settings (binary location and mode-specific arguments)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ToolConfig {
    /// Path to the yt-dlp executable (auto-detected if None)
    #[serde(default)]
    pub binary_path: Option<PathBuf>,

    /// Executable name searched on PATH (default: "yt-dlp")
    #[serde(default = "default_binary_name")]
    pub binary_name: String,

    /// Whether to search PATH for the binary if no explicit path is set (default: true)
    #[serde(default = "default_true")]
    pub search_path: bool,

    /// Format selector passed with `-f` in video mode (default: "bv*+ba/b")
    #[serde(default = "default_video_format")]
    pub video_format: String,

    /// Container used when merging video and audio streams (default: "mp4")
    #[serde(default = "default_merge_output_format")]
    pub merge_output_format: String,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            binary_path: None,
            binary_name: default_binary_name(),
            search_path: true,
            video_format: default_video_format(),
            merge_output_format: default_merge_output_format(),
        }
    }
}

/// Download behavior configuration (quality gate and retry policy)
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DownloadConfig {
    /// Minimum acceptable video height in pixels (default: 1080)
    ///
    /// Video downloads reporting a lower height are retried until the
    /// retry budget is exhausted.
    #[serde(default = "default_min_video_height")]
    pub min_video_height: u32,

    /// Retry policy for video downloads
    #[serde(default)]
    pub retry: RetryConfig,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            min_video_height: default_min_video_height(),
            retry: RetryConfig::default(),
        }
    }
}

/// Retry configuration for video downloads
///
/// The defaults describe a fixed two-second backoff over ten attempts.
/// A multiplier above 1.0 turns it into exponential backoff capped at `max_delay`.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one (default: 10)
    #[serde(default = "default_max_attempts")]
    pub max_attempts: u32,

    /// Delay before the second attempt (default: 2 seconds)
    #[serde(default = "default_initial_delay", with = "duration_serde")]
    pub initial_delay: Duration,

    /// Maximum delay between attempts (default: 2 seconds)
    #[serde(default = "default_max_delay", with = "duration_serde")]
    pub max_delay: Duration,

    /// Multiplier applied to the delay after each attempt (default: 1.0)
    #[serde(default = "default_backoff_multiplier")]
    pub backoff_multiplier: f64,

    /// Add random jitter to delays (default: false)
    #[serde(default)]
    pub jitter: bool,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            initial_delay: default_initial_delay(),
            max_delay: default_max_delay(),
            backoff_multiplier: default_backoff_multiplier(),
            jitter: false,
        }
    }
}

/// API and external server integration
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ServerIntegrationConfig {
    /// REST API settings
    #[serde(default)]
    pub api: ApiConfig,
}

/// REST API configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Address to bind to (default: 127.0.0.1:8080)
    #[serde(default = "default_bind_address")]
    pub bind_address: SocketAddr,

    /// Enable CORS for browser access (default: true)
    #[serde(default = "default_true")]
    pub cors_enabled: bool,

    /// Allowed CORS origins (default: ["*"])
    #[serde(default = "default_cors_origins")]
    pub cors_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
            cors_enabled: true,
            cors_origins: default_cors_origins(),
        }
    }
}

/// Main configuration for ytdlp-server
///
/// Every field has a default, so `{}` is a complete configuration and
/// `Config::default()` matches it.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Config {
    /// External tool settings
    #[serde(default)]
    pub tool: ToolConfig,

    /// Quality gate and retry policy
    #[serde(default)]
    pub download: DownloadConfig,

    /// API server settings
    #[serde(default)]
    pub server: ServerIntegrationConfig,
}

impl Config {
    /// Load configuration from a JSON file and validate it
    pub fn from_file(path: &Path) -> Result<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| Error::Config {
            message: format!("failed to read {}: {}", path.display(), e),
            key: None,
        })?;

        let config: Config = serde_json::from_str(&raw).map_err(|e| Error::Config {
            message: format!("failed to parse {}: {}", path.display(), e),
            key: None,
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde defaults cannot express
    pub fn validate(&self) -> Result<()> {
        if self.download.retry.max_attempts == 0 {
            return Err(config_error(
                "download.retry.max_attempts",
                "max_attempts must be at least 1",
            ));
        }
        let multiplier = self.download.retry.backoff_multiplier;
        if !(1.0..=MAX_BACKOFF_MULTIPLIER).contains(&multiplier) {
            return Err(config_error(
                "download.retry.backoff_multiplier",
                &format!("backoff_multiplier must be between 1.0 and {MAX_BACKOFF_MULTIPLIER}"),
            ));
        }
        if self.download.retry.initial_delay > self.download.retry.max_delay {
            return Err(config_error(
                "download.retry.initial_delay",
                "initial_delay must not exceed max_delay",
            ));
        }
        if self.download.min_video_height == 0 {
            return Err(config_error(
                "download.min_video_height",
                "min_video_height must be greater than 0",
            ));
        }
        if self.tool.binary_name.trim().is_empty() {
            return Err(config_error("tool.binary_name", "binary_name must not be empty"));
        }
        if self.tool.video_format.trim().is_empty() {
            return Err(config_error("tool.video_format", "video_format must not be empty"));
        }
        if self.tool.merge_output_format.trim().is_empty() {
            return Err(config_error(
                "tool.merge_output_format",
                "merge_output_format must not be empty",
            ));
        }
        Ok(())
    }
}

/// Upper bound accepted for `download.retry.backoff_multiplier`
pub const MAX_BACKOFF_MULTIPLIER: f64 = 100.0;

fn config_error(key: &str, message: &str) -> Error {
    Error::Config {
        message: message.to_string(),
        key: Some(key.to_string()),
    }
}

// Default value functions
fn default_binary_name() -> String {
    "yt-dlp".into()
}

fn default_true() -> bool {
    true
}

fn default_video_format() -> String {
    "bv*+ba/b".into()
}

fn default_merge_output_format() -> String {
    "mp4".into()
}

fn default_min_video_height() -> u32 {
    1080
}

fn default_max_attempts() -> u32 {
    10
}

fn default_initial_delay() -> Duration {
    Duration::from_secs(2)
}

fn default_max_delay() -> Duration {
    Duration::from_secs(2)
}

fn default_backoff_multiplier() -> f64 {
    1.0
}

fn default_bind_address() -> SocketAddr {
    SocketAddr::from(([127, 0, 0, 1], 8080))
}

fn default_cors_origins() -> Vec<String> {
    vec!["*".into()]
}

// Duration serialization helper
mod duration_serde {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}
