//! External media tool (yt-dlp) invocation
//!
//! The orchestration code never spawns processes directly. It talks to a
//! [`MediaTool`], which keeps the retry logic testable without real
//! subprocesses and lets the server start even when yt-dlp is missing.
//!
//! ## Architecture
//!
//! - [`MediaTool`]: run an argument list, return captured output
//! - [`CliMediaTool`]: spawns the real executable
//! - [`UnavailableMediaTool`]: stand-in when no executable was found
//! - [`args`]: argument lists for each mode
//! - [`parser`]: decoding of the tool's structured output
//!
//! ## Usage
//!
//! ```no_run
//! use ytdlp_server::tool::{CliMediaTool, MediaTool, args};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let tool = CliMediaTool::from_path("yt-dlp").expect("yt-dlp not found");
//!     let output = tool.run(&args::info_args("https://example.com/watch?v=1")).await?;
//!     println!("{}", String::from_utf8_lossy(&output.stdout));
//!     Ok(())
//! }
//! ```

pub mod args;
mod cli;
pub mod parser;
mod traits;
mod unavailable;

pub use cli::CliMediaTool;
pub use traits::{MediaTool, ToolOutput};
pub use unavailable::UnavailableMediaTool;

use crate::config::ToolConfig;
use std::sync::Arc;

/// Pick the tool implementation described by the configuration
///
/// An explicit `binary_path` wins. Otherwise PATH is searched for
/// `binary_name` when `search_path` is set. If nothing is found the
/// returned tool fails every invocation.
pub fn select_tool(config: &ToolConfig) -> Arc<dyn MediaTool> {
    let tool: Arc<dyn MediaTool> = if let Some(ref binary_path) = config.binary_path {
        Arc::new(CliMediaTool::new(binary_path.clone()))
    } else if config.search_path {
        CliMediaTool::from_path(&config.binary_name)
            .map(|t| Arc::new(t) as Arc<dyn MediaTool>)
            .unwrap_or_else(|| Arc::new(UnavailableMediaTool::new(&config.binary_name)))
    } else {
        Arc::new(UnavailableMediaTool::new(&config.binary_name))
    };

    tracing::info!(
        media_tool = tool.name(),
        available = tool.is_available(),
        "Media tool initialized"
    );

    tool
}
