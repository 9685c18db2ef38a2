//! Request handling core split into focused submodules.
//!
//! The `MediaDownloader` struct and its methods are organized by operation:
//! - [`download`] - Download orchestration with the resolution-gated retry loop
//! - [`info`] - Metadata fetching

mod download;
mod info;

// unwrap/expect are acceptable in tests for concise failure-on-error assertions
#[allow(clippy::unwrap_used, clippy::expect_used)]
#[cfg(test)]
pub(crate) mod test_helpers;

use crate::config::Config;
use crate::error::Result;
use crate::tool::{self, MediaTool};
use std::sync::Arc;

/// Stateless request handler shared by all API routes (cloneable - all fields are Arc-wrapped)
///
/// Nothing is remembered between calls. Concurrent requests share only the
/// read-only configuration and the tool handle.
#[derive(Clone)]
pub struct MediaDownloader {
    /// Configuration (wrapped in Arc for sharing across tasks)
    pub(crate) config: Arc<Config>,
    /// External tool used for every invocation (trait object for pluggable implementations)
    pub(crate) tool: Arc<dyn MediaTool>,
}

impl MediaDownloader {
    /// Create a downloader using the tool described by `config.tool`
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let tool = tool::select_tool(&config.tool);
        Ok(Self {
            config: Arc::new(config),
            tool,
        })
    }

    /// Create a downloader with an injected tool implementation
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if the configuration is invalid.
    pub fn with_tool(config: Config, tool: Arc<dyn MediaTool>) -> Result<Self> {
        config.validate()?;
        tracing::info!(media_tool = tool.name(), "Media tool injected");
        Ok(Self {
            config: Arc::new(config),
            tool,
        })
    }

    /// Active configuration
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Name of the tool implementation in use
    pub fn tool_name(&self) -> &'static str {
        self.tool.name()
    }

    /// Whether the tool can be invoked at all
    pub fn tool_available(&self) -> bool {
        self.tool.is_available()
    }

    /// Spawn the REST API server in a background task
    ///
    /// The server binds to `config.server.api.bind_address` and serves
    /// until the task is aborted or the process exits.
    pub fn spawn_api_server(self: &Arc<Self>) -> tokio::task::JoinHandle<Result<()>> {
        let downloader = self.clone();
        let config = self.config.clone();

        tokio::spawn(async move { crate::api::start_api_server(downloader, config).await })
    }
}
