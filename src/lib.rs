//! # ytdlp-server
//!
//! HTTP front end for yt-dlp.
//!
//! Two operations are exposed:
//! - **Metadata fetch** - runs `yt-dlp --dump-json` once and relays its output
//! - **Download** - audio-only extraction in a single run, or video+audio with
//!   a retry loop that re-runs the tool until the reported height reaches the
//!   configured minimum (1080p by default)
//!
//! Every call is stateless. The subprocess sits behind the [`MediaTool`]
//! trait so the retry logic can run against scripted output in tests.
//!
//! ## Quick Start
//!
//! ```no_run
//! use ytdlp_server::{Config, DownloadMode, MediaDownloader};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let downloader = MediaDownloader::new(Config::default())?;
//!
//!     let info = downloader.fetch_info("https://example.com/watch?v=abc").await?;
//!     println!("{}", String::from_utf8_lossy(&info));
//!
//!     let output = downloader
//!         .download("https://example.com/watch?v=abc", "/tmp/media", DownloadMode::Video)
//!         .await?;
//!     println!("{}", String::from_utf8_lossy(&output));
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::unwrap_used)]
#![warn(clippy::expect_used)]

/// REST API module
pub mod api;
/// Configuration types
pub mod config;
/// Request handling core
pub mod downloader;
/// Error types
pub mod error;
/// Evaluate-then-retry loop
pub mod retry;
/// External media tool abstraction
pub mod tool;
/// Core types
pub mod types;

// Re-export commonly used types
pub use config::Config;
pub use downloader::MediaDownloader;
pub use error::{Error, Result, ToHttpStatus};
pub use tool::{CliMediaTool, MediaTool, ToolOutput, UnavailableMediaTool};
pub use types::{DownloadMode, DownloadRequest};
