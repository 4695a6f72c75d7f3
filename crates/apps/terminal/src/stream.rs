//! Incremental parsing of the token-streaming chat response format.
//!
//! The endpoint delivers `data: `-prefixed JSON segments. Network reads do not
//! align with segment boundaries, so both the delimiter and a segment can
//! straddle two reads; the parser accumulates raw text, emits every complete
//! segment, and holds the trailing remainder back for the next read.

use serde::Deserialize;

/// Field delimiter prefixing each streamed segment.
pub const SEGMENT_DELIMITER: &str = "data: ";
/// Sentinel segment marking the end of the reply.
pub const DONE_SENTINEL: &str = "[DONE]";

/// One parsed unit of the streamed reply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StreamEvent {
    /// An incremental text fragment to append to the in-progress reply line.
    Token(String),
    /// The terminal sentinel; consumption stops here.
    Done,
}

#[derive(Debug, Deserialize)]
struct StreamPayload {
    #[serde(default)]
    choices: Vec<StreamChoice>,
}

#[derive(Debug, Deserialize)]
struct StreamChoice {
    #[serde(default)]
    delta: StreamDelta,
}

#[derive(Debug, Default, Deserialize)]
struct StreamDelta {
    #[serde(default)]
    content: Option<String>,
}

/// Splits delimiter-framed segments out of arbitrarily chunked reads.
///
/// Malformed complete segments are skipped silently: a segment that fails to
/// parse is indistinguishable from stream framing noise, and the next segment
/// resynchronizes on its own delimiter.
#[derive(Debug, Default)]
pub struct ChatStreamParser {
    buffer: String,
}

impl ChatStreamParser {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds one read's worth of text and returns the events it completed.
    ///
    /// Events stop at [`StreamEvent::Done`]; anything after the sentinel is
    /// discarded.
    pub fn push(&mut self, chunk: &str) -> Vec<StreamEvent> {
        self.buffer.push_str(chunk);

        let mut segments: Vec<String> = self
            .buffer
            .split(SEGMENT_DELIMITER)
            .map(str::to_string)
            .collect();
        // The final piece is either an incomplete segment or a partial
        // delimiter; keep it for the next read.
        self.buffer = segments.pop().unwrap_or_default();

        let mut events = Vec::new();
        for segment in segments {
            if segment.trim() == DONE_SENTINEL {
                events.push(StreamEvent::Done);
                break;
            }
            if let Some(token) = content_fragment(&segment) {
                events.push(StreamEvent::Token(token));
            }
        }
        events
    }
}

fn content_fragment(segment: &str) -> Option<String> {
    let payload: StreamPayload = serde_json::from_str(segment).ok()?;
    payload
        .choices
        .into_iter()
        .next()?
        .delta
        .content
        .filter(|token| !token.is_empty())
}

/// Streaming UTF-8 decoder that holds back an incomplete trailing sequence.
///
/// Byte reads can cut a multi-byte scalar in half; the cut bytes are carried
/// into the next read instead of being replaced with U+FFFD.
#[derive(Debug, Default)]
pub struct Utf8ChunkDecoder {
    pending: Vec<u8>,
}

impl Utf8ChunkDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn decode(&mut self, bytes: &[u8]) -> String {
        let mut data = std::mem::take(&mut self.pending);
        data.extend_from_slice(bytes);

        match std::str::from_utf8(&data) {
            Ok(text) => text.to_string(),
            Err(err) if err.error_len().is_none() => {
                let valid_up_to = err.valid_up_to();
                let text = String::from_utf8_lossy(&data[..valid_up_to]).into_owned();
                self.pending = data[valid_up_to..].to_vec();
                text
            }
            // Invalid bytes mid-stream: decode lossily and resynchronize.
            Err(_) => String::from_utf8_lossy(&data).into_owned(),
        }
    }
}
