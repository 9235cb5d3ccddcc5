use serde::{Deserialize, Serialize};

/// A source document cited in chat or search results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub filename: String,
    pub text: String,
    pub score: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
}

/// Token accounting reported by the server alongside completed responses
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenUsage {
    pub input_tokens: u32,
    pub output_tokens: u32,
    pub total_tokens: u32,
}

/// Response from a non-streaming chat request
///
/// Carries the same logical fields the streaming path accumulates,
/// flattened into a single document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatResponse {
    pub response: String,

    #[serde(default)]
    pub chat_id: Option<String>,

    #[serde(default)]
    pub sources: Vec<Source>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

/// A single message within a conversation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,

    #[serde(default)]
    pub timestamp: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<TokenUsage>,
}

/// A conversation summary as returned by the listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Conversation {
    pub chat_id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub last_activity: Option<String>,

    #[serde(default)]
    pub message_count: u32,
}

/// A conversation with its full message history
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConversationDetail {
    pub chat_id: String,

    #[serde(default)]
    pub title: String,

    #[serde(default)]
    pub created_at: Option<String>,

    #[serde(default)]
    pub last_activity: Option<String>,

    #[serde(default)]
    pub messages: Vec<Message>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ConversationListResponse {
    #[serde(default)]
    pub conversations: Vec<Conversation>,
}
