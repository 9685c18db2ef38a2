//! Argument lists for each tool invocation mode

use crate::config::ToolConfig;
use std::path::Path;

/// Audio-only extraction into `destination`
pub fn audio_args(url: &str, destination: &Path) -> Vec<String> {
    vec![
        "-x".to_string(),
        "-P".to_string(),
        destination.to_string_lossy().into_owned(),
        url.to_string(),
    ]
}

/// Best video plus best audio merged into one container, with JSON printed on stdout
pub fn video_args(url: &str, destination: &Path, tool: &ToolConfig) -> Vec<String> {
    vec![
        "-f".to_string(),
        tool.video_format.clone(),
        "--merge-output-format".to_string(),
        tool.merge_output_format.clone(),
        "-P".to_string(),
        destination.to_string_lossy().into_owned(),
        "--print-json".to_string(),
        "--no-warnings".to_string(),
        "--no-progress".to_string(),
        url.to_string(),
    ]
}

/// Metadata dump without downloading
pub fn info_args(url: &str) -> Vec<String> {
    vec!["--dump-json".to_string(), url.to_string()]
}
