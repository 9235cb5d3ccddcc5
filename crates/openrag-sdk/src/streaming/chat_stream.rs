use futures::StreamExt;
use tracing::debug;

use super::{EventStream, StreamEvent};
use crate::error::{OpenRagError, Result};
use crate::types::{ChatResponse, Source, TokenUsage};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum StreamStatus {
    /// Events may still arrive
    Open,
    /// Terminal event observed or transport exhausted; aggregate is frozen
    Complete,
    /// Closed by the caller before exhaustion; aggregate is frozen as-is
    Closed,
    /// Terminated by a transport, decode, or remote error
    Failed,
}

/// Handle over one streaming chat exchange
///
/// Owns the decoded event sequence and folds every event into an
/// aggregate (concatenated text, collected sources, conversation id)
/// as it passes through. The raw event iterator, the text-only
/// projection, and the final aggregate are three views over a single
/// cursor; the `&mut self` receivers guarantee only one of them can
/// drive the underlying connection at a time.
///
/// Dropping the handle closes the connection, so abandoning iteration
/// early never leaks the transport. [`ChatStream::close`] does the same
/// explicitly and is idempotent.
pub struct ChatStream {
    events: Option<EventStream>,
    text: String,
    sources: Vec<Source>,
    chat_id: Option<String>,
    usage: Option<TokenUsage>,
    status: StreamStatus,
}

impl ChatStream {
    /// Wrap an already-decoded event sequence
    pub fn new(events: EventStream) -> Self {
        Self {
            events: Some(events),
            text: String::new(),
            sources: Vec::new(),
            chat_id: None,
            usage: None,
            status: StreamStatus::Open,
        }
    }

    /// Pull the next event, folding it into the aggregate first
    ///
    /// Returns None once the stream is exhausted or closed. After a
    /// terminal event or an error, the underlying connection is released
    /// and no further events are pulled from the transport.
    pub async fn next_event(&mut self) -> Option<Result<StreamEvent>> {
        let events = self.events.as_mut()?;

        match events.next().await {
            Some(Ok(event)) => {
                self.apply(&event);
                if event.is_terminal() {
                    self.status = StreamStatus::Complete;
                    self.events = None;
                }
                Some(Ok(event))
            }
            Some(Err(e)) => {
                self.status = StreamStatus::Failed;
                self.events = None;
                Some(Err(e))
            }
            None => {
                // Byte stream ended without a done event; freeze what we have
                if self.status == StreamStatus::Open {
                    self.status = StreamStatus::Complete;
                }
                self.events = None;
                None
            }
        }
    }

    /// Text-only projection of the event sequence
    ///
    /// Yields the delta of each content event and skips everything else.
    /// Derived from [`ChatStream::next_event`], so sources and the
    /// conversation id are still aggregated while only text is surfaced.
    pub async fn next_text(&mut self) -> Option<Result<String>> {
        loop {
            match self.next_event().await? {
                Ok(StreamEvent::Content { delta }) => return Some(Ok(delta)),
                Ok(_) => continue,
                Err(e) => return Some(Err(e)),
            }
        }
    }

    /// Drain the remaining events and return the final aggregate
    ///
    /// Idempotent: once the stream has completed, further calls return
    /// the same frozen snapshot without touching the transport. After a
    /// failure no aggregate is exposed.
    pub async fn final_response(&mut self) -> Result<ChatResponse> {
        while self.status == StreamStatus::Open {
            match self.next_event().await {
                Some(Ok(_)) => {}
                Some(Err(e)) => return Err(e),
                None => break,
            }
        }
        self.snapshot()
    }

    /// Release the underlying connection
    ///
    /// Idempotent; safe to call at any point. A stream closed before
    /// exhaustion keeps the aggregate accumulated so far, frozen.
    pub fn close(&mut self) {
        if self.events.take().is_some() {
            debug!("chat stream closed before exhaustion");
        }
        if self.status == StreamStatus::Open {
            self.status = StreamStatus::Closed;
        }
    }

    fn apply(&mut self, event: &StreamEvent) {
        match event {
            StreamEvent::Content { delta } => self.text.push_str(delta),
            StreamEvent::Sources { sources } => self.sources.extend(sources.iter().cloned()),
            StreamEvent::Done { chat_id, usage } => {
                if self.chat_id.is_none() {
                    self.chat_id = chat_id.clone();
                }
                self.usage = usage.clone();
            }
            StreamEvent::Error { .. } | StreamEvent::Unknown => {}
        }
    }

    fn snapshot(&self) -> Result<ChatResponse> {
        if self.status == StreamStatus::Failed {
            return Err(OpenRagError::StreamClosed);
        }
        Ok(ChatResponse {
            response: self.text.clone(),
            chat_id: self.chat_id.clone(),
            sources: self.sources.clone(),
            usage: self.usage.clone(),
        })
    }

    /// Response text accumulated so far (point-in-time view)
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Sources received so far, in arrival order (point-in-time view)
    pub fn sources(&self) -> &[Source] {
        &self.sources
    }

    /// Conversation id, set once the done event arrives
    pub fn chat_id(&self) -> Option<&str> {
        self.chat_id.as_deref()
    }

    /// Token usage reported by the done event, when present
    pub fn usage(&self) -> Option<&TokenUsage> {
        self.usage.as_ref()
    }

    /// Whether the stream has terminated (completed, closed, or failed)
    pub fn is_closed(&self) -> bool {
        self.status != StreamStatus::Open
    }
}

impl Drop for ChatStream {
    fn drop(&mut self) {
        self.close();
    }
}
