use std::collections::VecDeque;

use bytes::Bytes;
use futures::{Stream, StreamExt};
use tracing::debug;

use super::{EventStream, StreamEvent};
use crate::error::{OpenRagError, Result};

/// Byte buffer for line-based parsing of the event wire protocol
///
/// Uses VecDeque so drained lines never reallocate the tail.
pub struct LineBuffer {
    buffer: VecDeque<u8>,
}

impl LineBuffer {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            buffer: VecDeque::with_capacity(capacity),
        }
    }

    /// Add bytes to the buffer
    pub fn extend(&mut self, bytes: &[u8]) {
        self.buffer.extend(bytes);
    }

    /// Extract the next complete line, trimmed of surrounding whitespace
    ///
    /// Returns None until a full `\n`-terminated line is buffered.
    pub fn next_line(&mut self) -> Option<Result<String>> {
        let newline_pos = self.buffer.iter().position(|&b| b == b'\n')?;
        let line_bytes: Vec<u8> = self.buffer.drain(..=newline_pos).collect();

        match std::str::from_utf8(&line_bytes) {
            Ok(line) => Some(Ok(line.trim().to_string())),
            Err(e) => Some(Err(OpenRagError::Decode(format!(
                "invalid UTF-8 in stream: {e}"
            )))),
        }
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }
}

/// Decode a streaming response body into a sequence of [`StreamEvent`]s
///
/// The wire protocol is line-oriented: each event is a block of `data:`
/// lines holding JSON, terminated by a blank line. The sequence ends when
/// the byte stream closes or a terminal event (`done` / `error`) is
/// decoded; nothing is pulled from the transport after that. A partial
/// block left in the buffer at end of stream is discarded as a truncated
/// tail, while malformed JSON inside a complete block is fatal.
pub fn decode_event_stream<S>(byte_stream: S) -> EventStream
where
    S: Stream<Item = reqwest::Result<Bytes>> + Send + 'static,
{
    Box::pin(async_stream::stream! {
        let mut chunks = Box::pin(byte_stream);
        let mut buffer = LineBuffer::with_capacity(8192);
        let mut data_lines: Vec<String> = Vec::new();

        while let Some(chunk_result) = chunks.next().await {
            let bytes = match chunk_result {
                Ok(bytes) => bytes,
                Err(e) => {
                    yield Err(OpenRagError::Http(e));
                    return;
                }
            };

            buffer.extend(&bytes);

            while let Some(line_result) = buffer.next_line() {
                let line = match line_result {
                    Ok(line) => line,
                    Err(e) => {
                        yield Err(e);
                        return;
                    }
                };

                if !line.is_empty() {
                    if let Some(data) = line.strip_prefix("data:") {
                        data_lines.push(data.trim_start().to_string());
                    }
                    // other SSE fields (event:, id:, comments) are ignored
                    continue;
                }

                // Blank line: the accumulated block is one complete event
                if data_lines.is_empty() {
                    continue;
                }
                let payload = data_lines.join("\n");
                data_lines.clear();

                match serde_json::from_str::<StreamEvent>(&payload) {
                    Ok(StreamEvent::Unknown) => {
                        debug!("skipping unrecognized stream event");
                    }
                    Ok(StreamEvent::Error { code, message }) => {
                        yield Err(OpenRagError::Remote { code, message });
                        return;
                    }
                    Ok(event) => {
                        let done = event.is_terminal();
                        yield Ok(event);
                        if done {
                            return;
                        }
                    }
                    Err(e) => {
                        yield Err(OpenRagError::Decode(format!(
                            "malformed event payload: {e}"
                        )));
                        return;
                    }
                }
            }
        }

        if !data_lines.is_empty() || !buffer.is_empty() {
            // Truncated tail: the connection cut out mid-block
            debug!("discarding truncated trailing event block");
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::stream;

    fn byte_stream(chunks: Vec<&'static str>) -> impl Stream<Item = reqwest::Result<Bytes>> {
        stream::iter(chunks.into_iter().map(|c| Ok(Bytes::from(c))))
    }

    async fn collect(chunks: Vec<&'static str>) -> Vec<Result<StreamEvent>> {
        decode_event_stream(byte_stream(chunks)).collect().await
    }

    #[test]
    fn test_line_buffer_basic() {
        let mut buffer = LineBuffer::with_capacity(64);

        buffer.extend(b"line1\nline2\n");

        assert_eq!(buffer.next_line().unwrap().unwrap(), "line1");
        assert_eq!(buffer.next_line().unwrap().unwrap(), "line2");
        assert!(buffer.next_line().is_none());
    }

    #[test]
    fn test_line_buffer_partial_line() {
        let mut buffer = LineBuffer::with_capacity(64);

        buffer.extend(b"partial");
        assert!(buffer.next_line().is_none());

        buffer.extend(b" line\n");
        assert_eq!(buffer.next_line().unwrap().unwrap(), "partial line");
    }

    #[test]
    fn test_line_buffer_crlf() {
        let mut buffer = LineBuffer::with_capacity(64);

        buffer.extend(b"data: {}\r\n");
        assert_eq!(buffer.next_line().unwrap().unwrap(), "data: {}");
    }

    #[tokio::test]
    async fn test_decode_single_event() {
        let events = collect(vec![
            "data: {\"type\":\"content\",\"delta\":\"Hi\"}\n\n",
        ])
        .await;

        assert_eq!(events.len(), 1);
        match events[0].as_ref().unwrap() {
            StreamEvent::Content { delta } => assert_eq!(delta, "Hi"),
            other => panic!("expected Content, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_decode_event_split_across_chunks() {
        let events = collect(vec![
            "data: {\"type\":\"cont",
            "ent\",\"delta\":\"Hel",
            "lo\"}\n",
            "\n",
        ])
        .await;

        assert_eq!(events.len(), 1);
        match events[0].as_ref().unwrap() {
            StreamEvent::Content { delta } => assert_eq!(delta, "Hello"),
            other => panic!("expected Content, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_decode_multiline_data_block() {
        // Two data lines in one block join into a single JSON document
        let events = collect(vec![
            "data: {\"type\":\"content\",\ndata: \"delta\":\"x\"}\n\n",
        ])
        .await;

        assert_eq!(events.len(), 1);
        assert!(events[0].is_ok());
    }

    #[tokio::test]
    async fn test_decode_stops_after_done() {
        let events = collect(vec![
            "data: {\"type\":\"content\",\"delta\":\"a\"}\n\n",
            "data: {\"type\":\"done\",\"chat_id\":\"c1\"}\n\n",
            "data: {\"type\":\"content\",\"delta\":\"never\"}\n\n",
        ])
        .await;

        assert_eq!(events.len(), 2);
        match events[1].as_ref().unwrap() {
            StreamEvent::Done { chat_id, .. } => {
                assert_eq!(chat_id.as_deref(), Some("c1"));
            }
            other => panic!("expected Done, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_decode_unknown_type_skipped() {
        let events = collect(vec![
            "data: {\"type\":\"heartbeat\"}\n\n",
            "data: {\"type\":\"content\",\"delta\":\"kept\"}\n\n",
        ])
        .await;

        assert_eq!(events.len(), 1);
        match events[0].as_ref().unwrap() {
            StreamEvent::Content { delta } => assert_eq!(delta, "kept"),
            other => panic!("expected Content, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_decode_truncated_tail_dropped() {
        let events = collect(vec![
            "data: {\"type\":\"content\",\"delta\":\"ok\"}\n\n",
            "data: {\"type\":\"content\",\"delta\":\"trunc",
        ])
        .await;

        assert_eq!(events.len(), 1);
        assert!(events[0].is_ok());
    }

    #[tokio::test]
    async fn test_decode_malformed_json_is_fatal() {
        let events = collect(vec![
            "data: {\"type\":\"content\",\"delta\":\"ok\"}\n\n",
            "data: {not json}\n\n",
            "data: {\"type\":\"content\",\"delta\":\"after\"}\n\n",
        ])
        .await;

        assert_eq!(events.len(), 2);
        assert!(events[0].is_ok());
        assert!(matches!(
            events[1].as_ref().unwrap_err(),
            OpenRagError::Decode(_)
        ));
    }

    #[tokio::test]
    async fn test_decode_error_event_is_remote() {
        let events = collect(vec![
            "data: {\"type\":\"error\",\"code\":\"rate_limited\",\"message\":\"slow down\"}\n\n",
        ])
        .await;

        assert_eq!(events.len(), 1);
        match events[0].as_ref().unwrap_err() {
            OpenRagError::Remote { code, message } => {
                assert_eq!(code, "rate_limited");
                assert_eq!(message, "slow down");
            }
            other => panic!("expected Remote, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_decode_non_data_fields_ignored() {
        let events = collect(vec![
            ": keep-alive\nevent: message\ndata: {\"type\":\"content\",\"delta\":\"x\"}\n\n",
        ])
        .await;

        assert_eq!(events.len(), 1);
        assert!(events[0].is_ok());
    }
}
