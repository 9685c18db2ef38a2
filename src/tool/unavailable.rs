//! Stand-in media tool used when no executable could be located

use super::traits::{MediaTool, ToolOutput};
use async_trait::async_trait;

/// Media tool that fails every invocation
///
/// Lets the API server start without yt-dlp installed. Each request then
/// reports `Error::SubprocessInvocation` instead of the process refusing
/// to boot.
///
/// # Examples
///
/// ```
/// use ytdlp_server::tool::{MediaTool, UnavailableMediaTool};
///
/// # #[tokio::main]
/// # async fn main() {
/// let tool = UnavailableMediaTool::new("yt-dlp");
/// assert!(tool.run(&[]).await.is_err());
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct UnavailableMediaTool {
    binary_name: String,
}

impl UnavailableMediaTool {
    /// Create a stand-in for the named binary
    pub fn new(binary_name: impl Into<String>) -> Self {
        Self {
            binary_name: binary_name.into(),
        }
    }
}

#[async_trait]
impl MediaTool for UnavailableMediaTool {
    async fn run(&self, _args: &[String]) -> crate::Result<ToolOutput> {
        Err(crate::Error::SubprocessInvocation(format!(
            "{} executable not found. Configure tool.binary_path or ensure {} is in PATH.",
            self.binary_name, self.binary_name
        )))
    }

    fn is_available(&self) -> bool {
        false
    }

    fn name(&self) -> &'static str {
        "unavailable"
    }
}
