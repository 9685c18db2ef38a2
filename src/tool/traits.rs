//! Traits and types for media tool invocation

use async_trait::async_trait;

/// Captured result of one tool invocation that ran to completion
#[must_use]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolOutput {
    /// Bytes written to standard output
    pub stdout: Vec<u8>,
    /// Bytes written to standard error
    pub stderr: Vec<u8>,
    /// Exit code, `None` when the process was terminated by a signal
    pub exit_code: Option<i32>,
    /// Whether the process exited successfully
    pub success: bool,
}

impl ToolOutput {
    /// Output of a process that exited with status 0
    pub fn succeeded(stdout: impl Into<Vec<u8>>) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: Vec::new(),
            exit_code: Some(0),
            success: true,
        }
    }

    /// Output of a process that exited with a non-zero status
    pub fn failed(
        exit_code: i32,
        stdout: impl Into<Vec<u8>>,
        stderr: impl Into<Vec<u8>>,
    ) -> Self {
        Self {
            stdout: stdout.into(),
            stderr: stderr.into(),
            exit_code: Some(exit_code),
            success: false,
        }
    }

    /// Standard output followed by standard error
    pub fn combined(&self) -> Vec<u8> {
        let mut combined = Vec::with_capacity(self.stdout.len() + self.stderr.len());
        combined.extend_from_slice(&self.stdout);
        combined.extend_from_slice(&self.stderr);
        combined
    }

    /// Description of the exit failure, `None` on success
    pub fn failure(&self) -> Option<String> {
        if self.success {
            return None;
        }
        Some(match self.exit_code {
            Some(code) => format!("exit status: {}", code),
            None => "terminated by signal".to_string(),
        })
    }

    /// Standard error as trimmed text
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim().to_string()
    }
}

/// Capability to run the external media tool
///
/// Implementations spawn one process per call and own it exclusively until
/// it exits. No timeout is applied.
///
/// # Examples
///
/// ```no_run
/// use ytdlp_server::tool::{CliMediaTool, MediaTool};
///
/// # #[tokio::main]
/// # async fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let tool = CliMediaTool::from_path("yt-dlp").expect("yt-dlp not found");
/// let output = tool.run(&["--version".to_string()]).await?;
/// assert!(output.success);
/// # Ok(())
/// # }
/// ```
#[async_trait]
pub trait MediaTool: Send + Sync {
    /// Run the tool with `args` and wait for it to exit
    ///
    /// A non-zero exit is not an error here: it is reported through
    /// [`ToolOutput::success`] so callers can still inspect the output.
    ///
    /// # Errors
    ///
    /// Returns `Error::SubprocessInvocation` when the process could not be
    /// started or waited on.
    async fn run(&self, args: &[String]) -> crate::Result<ToolOutput>;

    /// Whether invocations can succeed at all
    fn is_available(&self) -> bool {
        true
    }

    /// Human-readable name for logging
    fn name(&self) -> &'static str;
}
