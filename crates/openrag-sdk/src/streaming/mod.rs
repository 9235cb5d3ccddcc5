// Streaming chat support: wire event model, SSE decoding, aggregation

pub mod chat_stream;
pub mod decoder;

pub use chat_stream::ChatStream;
pub use decoder::{decode_event_stream, LineBuffer};

use std::pin::Pin;

use futures::Stream;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{Source, TokenUsage};

/// A decoded event from the streaming chat wire protocol
///
/// The server tags every event payload with a `type` discriminator.
/// Unrecognized tags decode to [`StreamEvent::Unknown`] so newer servers
/// can add event kinds without breaking older clients.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StreamEvent {
    /// A fragment of assistant response text
    Content { delta: String },

    /// Source documents retrieved for this exchange
    Sources { sources: Vec<Source> },

    /// Terminal event: the stream completed normally
    Done {
        #[serde(default)]
        chat_id: Option<String>,

        #[serde(default, skip_serializing_if = "Option::is_none")]
        usage: Option<TokenUsage>,
    },

    /// Terminal event: the server aborted the stream
    Error { code: String, message: String },

    /// Event kind this client does not understand; skipped during decoding
    #[serde(other)]
    Unknown,
}

impl StreamEvent {
    /// Whether this event ends the stream
    pub fn is_terminal(&self) -> bool {
        matches!(self, StreamEvent::Done { .. } | StreamEvent::Error { .. })
    }
}

/// Lazy, single-pass sequence of decoded stream events
pub type EventStream = Pin<Box<dyn Stream<Item = Result<StreamEvent>> + Send>>;
