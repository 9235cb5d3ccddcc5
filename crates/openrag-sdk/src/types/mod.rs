pub mod chat;
pub mod documents;
pub mod search;
pub mod settings;

pub use chat::{ChatResponse, Conversation, ConversationDetail, Message, Source, TokenUsage};
pub use documents::{DeleteDocumentResponse, IngestResponse};
pub use search::{SearchFilters, SearchResponse, SearchResult};
pub use settings::{AgentSettings, KnowledgeSettings, SettingsResponse};
