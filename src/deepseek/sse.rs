//! Incremental SSE (`text/event-stream`) decoding.
//!
//! The API streams completions as `data: {json}` lines terminated by a
//! `data: [DONE]` sentinel. Chunks from the transport can split a line (or a
//! multi-byte character) anywhere, so the decoder buffers raw bytes and only
//! emits complete lines.

use serde::de::DeserializeOwned;

const DATA_PREFIX: &str = "data: ";
const DONE_SENTINEL: &str = "[DONE]";

/// Cap on buffered bytes; a stream that never produces a newline is broken.
const MAX_BUFFER_BYTES: usize = 1024 * 1024;

/// Buffering decoder that turns transport chunks into SSE data events.
#[derive(Debug, Default)]
pub struct SseDecoder {
    buffer: Vec<u8>,
}

impl SseDecoder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one transport chunk, returning every complete `data:` event it
    /// finished. Partial trailing lines stay buffered for the next push.
    pub fn push(&mut self, chunk: &[u8]) -> Vec<SseEvent> {
        self.buffer.extend_from_slice(chunk);

        if self.buffer.len() > MAX_BUFFER_BYTES {
            tracing::warn!(
                buffered = self.buffer.len(),
                "SSE buffer over limit, dropping oldest half"
            );
            let keep_from = self.buffer.len() / 2;
            self.buffer.drain(..keep_from);
        }

        let mut events = Vec::new();
        while let Some(pos) = self.buffer.iter().position(|&b| b == b'\n') {
            let line: Vec<u8> = self.buffer.drain(..=pos).collect();
            let line = String::from_utf8_lossy(&line);
            let line = line.trim_end_matches(['\n', '\r']).trim();

            if line.is_empty() {
                continue;
            }
            // Lines without the data marker (comments, event:, id:) are not
            // part of the completion stream.
            if let Some(data) = line.strip_prefix(DATA_PREFIX) {
                events.push(SseEvent { data: data.to_string() });
            }
        }

        events
    }

    /// True if a partial line is still buffered.
    pub fn has_partial(&self) -> bool {
        !self.buffer.is_empty()
    }
}

/// A complete `data:` event, marker stripped.
#[derive(Debug, Clone)]
pub struct SseEvent {
    pub data: String,
}

impl SseEvent {
    /// The end-of-stream sentinel line.
    pub fn is_done(&self) -> bool {
        self.data == DONE_SENTINEL
    }

    /// Decode the payload as JSON.
    pub fn decode<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_str(&self.data)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::deepseek::StreamChunk;

    #[test]
    fn single_event() {
        let mut decoder = SseDecoder::new();
        let events = decoder.push(b"data: {\"x\":1}\n\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "{\"x\":1}");
        assert!(!decoder.has_partial());
    }

    #[test]
    fn done_sentinel() {
        let mut decoder = SseDecoder::new();
        let events = decoder.push(b"data: [DONE]\n");
        assert_eq!(events.len(), 1);
        assert!(events[0].is_done());
    }

    #[test]
    fn line_split_across_chunks() {
        let mut decoder = SseDecoder::new();
        assert!(decoder.push(b"data: {\"par").is_empty());
        assert!(decoder.has_partial());

        let events = decoder.push(b"t\":2}\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "{\"part\":2}");
    }

    #[test]
    fn multibyte_char_split_across_chunks() {
        let mut decoder = SseDecoder::new();
        let line = "data: {\"text\":\"caf\u{e9}\"}\n".as_bytes();
        // Split inside the two-byte é sequence.
        let split = line.len() - 4;
        assert!(decoder.push(&line[..split]).is_empty());
        let events = decoder.push(&line[split..]);
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "{\"text\":\"caf\u{e9}\"}");
    }

    #[test]
    fn several_events_one_chunk() {
        let mut decoder = SseDecoder::new();
        let events = decoder.push(b"data: one\ndata: two\n\ndata: three\n");
        let payloads: Vec<&str> = events.iter().map(|e| e.data.as_str()).collect();
        assert_eq!(payloads, ["one", "two", "three"]);
    }

    #[test]
    fn crlf_line_endings() {
        let mut decoder = SseDecoder::new();
        let events = decoder.push(b"data: alpha\r\ndata: [DONE]\r\n");
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].data, "alpha");
        assert!(events[1].is_done());
    }

    #[test]
    fn non_data_lines_skipped() {
        let mut decoder = SseDecoder::new();
        let events = decoder.push(b": keepalive\nevent: ping\ndata: ok\n");
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].data, "ok");
    }

    #[test]
    fn decode_into_stream_chunk() {
        let mut decoder = SseDecoder::new();
        let events =
            decoder.push(b"data: {\"id\":\"c\",\"choices\":[{\"delta\":{\"content\":\"hi\"},\"finish_reason\":null}]}\n");
        let chunk: StreamChunk = events[0].decode().unwrap();
        assert_eq!(chunk.choices[0].delta.content.as_deref(), Some("hi"));
    }

    #[test]
    fn decode_error_on_malformed_payload() {
        let mut decoder = SseDecoder::new();
        let events = decoder.push(b"data: {not json}\n");
        let parsed: Result<StreamChunk, _> = events[0].decode();
        assert!(parsed.is_err());
    }
}
