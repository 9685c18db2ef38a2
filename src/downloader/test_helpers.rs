//! Shared test helpers: a scripted in-memory media tool and downloader builders.

use crate::config::{Config, RetryConfig};
use crate::downloader::MediaDownloader;
use crate::tool::{MediaTool, ToolOutput};
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// One scripted tool response
#[derive(Clone, Debug)]
pub(crate) enum Step {
    /// The process ran and produced this output
    Output(ToolOutput),
    /// The process could not be started
    SpawnError(String),
}

/// Media tool that replays scripted responses and records every call
///
/// Steps are consumed in order; the last step repeats once the script
/// runs out.
pub(crate) struct ScriptedTool {
    steps: Mutex<VecDeque<Step>>,
    last: Mutex<Option<Step>>,
    calls: Mutex<Vec<Vec<String>>>,
}

impl ScriptedTool {
    pub(crate) fn new(steps: Vec<Step>) -> Arc<Self> {
        Arc::new(Self {
            steps: Mutex::new(steps.into()),
            last: Mutex::new(None),
            calls: Mutex::new(Vec::new()),
        })
    }

    pub(crate) fn repeating(step: Step) -> Arc<Self> {
        Self::new(vec![step])
    }

    pub(crate) fn calls(&self) -> Vec<Vec<String>> {
        self.calls.lock().unwrap().clone()
    }

    pub(crate) fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }
}

#[async_trait]
impl MediaTool for ScriptedTool {
    async fn run(&self, args: &[String]) -> crate::Result<ToolOutput> {
        self.calls.lock().unwrap().push(args.to_vec());

        let step = {
            let mut steps = self.steps.lock().unwrap();
            let mut last = self.last.lock().unwrap();
            if let Some(next) = steps.pop_front() {
                *last = Some(next.clone());
                next
            } else {
                last.clone().expect("ScriptedTool needs at least one step")
            }
        };

        match step {
            Step::Output(output) => Ok(output),
            Step::SpawnError(msg) => Err(crate::Error::SubprocessInvocation(msg)),
        }
    }

    fn name(&self) -> &'static str {
        "scripted"
    }
}

/// yt-dlp style `--print-json` line for a video of the given height
pub(crate) fn video_json(height: u32) -> String {
    format!(
        r#"{{"id":"abc123","title":"Test video","ext":"mp4","width":{},"height":{}}}"#,
        height * 16 / 9,
        height
    )
}

/// Successful exit printing a video JSON line
pub(crate) fn ok_height(height: u32) -> Step {
    Step::Output(ToolOutput::succeeded(video_json(height)))
}

/// Failing exit that still printed a video JSON line
pub(crate) fn failed_height(height: u32) -> Step {
    Step::Output(ToolOutput::failed(
        1,
        video_json(height),
        "ERROR: unable to merge formats",
    ))
}

/// Configuration with the default retry budget and fixed two-second backoff
pub(crate) fn test_config() -> Config {
    let mut config = Config::default();
    config.download.retry = RetryConfig {
        max_attempts: 10,
        initial_delay: Duration::from_secs(2),
        max_delay: Duration::from_secs(2),
        backoff_multiplier: 1.0,
        jitter: false,
    };
    config
}

/// Downloader wired to the given scripted tool
pub(crate) fn create_test_downloader(tool: Arc<ScriptedTool>) -> MediaDownloader {
    MediaDownloader::with_tool(test_config(), tool).unwrap()
}

/// Assert that paused tokio time advanced by `secs` seconds (within timer granularity)
pub(crate) fn assert_elapsed(start: tokio::time::Instant, secs: u64) {
    let elapsed = start.elapsed();
    let expected = Duration::from_secs(secs);
    assert!(
        elapsed >= expected && elapsed < expected + Duration::from_millis(50),
        "expected ~{:?} elapsed, got {:?}",
        expected,
        elapsed
    );
}
