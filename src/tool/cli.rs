//! CLI-based media tool using the external yt-dlp binary

use super::traits::{MediaTool, ToolOutput};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;

/// Media tool that executes an external binary
///
/// Standard input is closed and both output streams are captured in full.
/// The child is not killed if the awaiting future is dropped, so a
/// disconnected client does not abort a download in progress.
///
/// # Examples
///
/// ```no_run
/// use ytdlp_server::tool::{CliMediaTool, MediaTool};
/// use std::path::PathBuf;
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// // Create with explicit path
/// let tool = CliMediaTool::new(PathBuf::from("/usr/local/bin/yt-dlp"));
///
/// // Or auto-discover from PATH
/// let tool = CliMediaTool::from_path("yt-dlp")
///     .expect("yt-dlp not found in PATH");
///
/// let output = tool.run(&["--dump-json".into(), "https://example.com/v".into()]).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct CliMediaTool {
    binary_path: PathBuf,
}

impl CliMediaTool {
    /// Create a new CLI tool with an explicit binary path
    pub fn new(binary_path: PathBuf) -> Self {
        Self { binary_path }
    }

    /// Attempt to find `binary_name` in PATH
    ///
    /// Returns `None` if the binary is not found.
    pub fn from_path(binary_name: &str) -> Option<Self> {
        which::which(binary_name).ok().map(Self::new)
    }

    /// Path of the executable this tool runs
    pub fn binary_path(&self) -> &Path {
        &self.binary_path
    }
}

#[async_trait]
impl MediaTool for CliMediaTool {
    async fn run(&self, args: &[String]) -> crate::Result<ToolOutput> {
        tracing::debug!(
            binary = %self.binary_path.display(),
            args = ?args,
            "Spawning media tool"
        );

        let output = Command::new(&self.binary_path)
            .args(args)
            .stdin(Stdio::null())
            .output()
            .await
            .map_err(|e| {
                crate::Error::SubprocessInvocation(format!(
                    "failed to execute {}: {}",
                    self.binary_path.display(),
                    e
                ))
            })?;

        Ok(ToolOutput {
            stdout: output.stdout,
            stderr: output.stderr,
            exit_code: output.status.code(),
            success: output.status.success(),
        })
    }

    fn name(&self) -> &'static str {
        "cli"
    }
}
