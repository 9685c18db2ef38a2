//! Decoding of the tool's structured (JSON) output

use crate::error::{Error, Result};
use crate::types::MediaDimensions;

/// Parse the dimensions reported on the tool's standard output
///
/// yt-dlp prints one JSON object per downloaded item. The output is read
/// as a stream of documents and the dimensions of the last one are
/// returned.
///
/// # Errors
///
/// Returns `Error::Parse` when the stream holds no document or any
/// document is malformed.
pub fn parse_dimensions(stdout: &[u8]) -> Result<MediaDimensions> {
    let stream = serde_json::Deserializer::from_slice(stdout).into_iter::<MediaDimensions>();

    let mut last = None;
    for document in stream {
        last = Some(document.map_err(|e| Error::Parse(e.to_string()))?);
    }

    last.ok_or_else(|| Error::Parse("no JSON document in tool output".to_string()))
}
