use serde::Serialize;

use crate::client::OpenRagClient;
use crate::error::Result;
use crate::streaming::{decode_event_stream, ChatStream};
use crate::types::chat::ConversationListResponse;
use crate::types::{ChatResponse, Conversation, ConversationDetail, SearchFilters};

/// Parameters for a chat exchange
#[derive(Debug, Clone)]
pub struct ChatRequest {
    pub message: String,
    pub chat_id: Option<String>,
    pub filters: Option<SearchFilters>,
    pub limit: u32,
    pub score_threshold: f64,
    pub filter_id: Option<String>,
}

impl ChatRequest {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            chat_id: None,
            filters: None,
            limit: 10,
            score_threshold: 0.0,
            filter_id: None,
        }
    }

    /// Continue an existing conversation
    pub fn with_chat_id(mut self, chat_id: impl Into<String>) -> Self {
        self.chat_id = Some(chat_id.into());
        self
    }

    /// Restrict retrieval to matching documents
    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    /// Maximum number of retrieved sources
    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Minimum relevance score for retrieved sources
    pub fn with_score_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = threshold;
        self
    }

    /// Apply a saved knowledge filter
    pub fn with_filter_id(mut self, filter_id: impl Into<String>) -> Self {
        self.filter_id = Some(filter_id.into());
        self
    }

    fn to_body(&self, stream: bool) -> ChatBody<'_> {
        ChatBody {
            message: &self.message,
            stream,
            chat_id: self.chat_id.as_deref(),
            filters: self.filters.as_ref(),
            limit: self.limit,
            score_threshold: self.score_threshold,
            filter_id: self.filter_id.as_deref(),
        }
    }
}

#[derive(Serialize)]
struct ChatBody<'a> {
    message: &'a str,
    stream: bool,

    #[serde(skip_serializing_if = "Option::is_none")]
    chat_id: Option<&'a str>,

    #[serde(skip_serializing_if = "Option::is_none")]
    filters: Option<&'a SearchFilters>,

    limit: u32,
    score_threshold: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    filter_id: Option<&'a str>,
}

/// Client for chat operations
pub struct ChatClient<'a> {
    client: &'a OpenRagClient,
}

impl<'a> ChatClient<'a> {
    pub(crate) fn new(client: &'a OpenRagClient) -> Self {
        Self { client }
    }

    /// Send a message and wait for the complete response
    pub async fn create(&self, request: ChatRequest) -> Result<ChatResponse> {
        self.client
            .post_json("/api/v1/chat", &request.to_body(false))
            .await
    }

    /// Send a message and stream the response as it is generated
    ///
    /// The returned [`ChatStream`] owns the connection; dropping it
    /// aborts the request if the stream was not consumed to the end.
    pub async fn stream(&self, request: ChatRequest) -> Result<ChatStream> {
        let response = self
            .client
            .post_stream("/api/v1/chat", &request.to_body(true))
            .await?;
        Ok(ChatStream::new(decode_event_stream(response.bytes_stream())))
    }

    /// List conversations for the authenticated user
    pub async fn list(&self) -> Result<Vec<Conversation>> {
        let response: ConversationListResponse = self.client.get_json("/api/v1/chat").await?;
        Ok(response.conversations)
    }

    /// Fetch one conversation with its full message history
    pub async fn get(&self, chat_id: &str) -> Result<ConversationDetail> {
        self.client
            .get_json(&format!("/api/v1/chat/{chat_id}"))
            .await
    }

    /// Delete a conversation
    pub async fn delete(&self, chat_id: &str) -> Result<()> {
        let _: serde_json::Value = self.client.delete(&format!("/api/v1/chat/{chat_id}")).await?;
        Ok(())
    }
}
