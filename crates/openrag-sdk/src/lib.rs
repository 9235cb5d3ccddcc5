//! Rust client for the OpenRAG API.
//!
//! ```no_run
//! use openrag_sdk::{ChatRequest, OpenRagClient};
//!
//! # async fn run() -> openrag_sdk::Result<()> {
//! // Uses OPENRAG_API_KEY and OPENRAG_URL
//! let client = OpenRagClient::from_env()?;
//!
//! // Non-streaming chat
//! let response = client.chat().create(ChatRequest::new("What is RAG?")).await?;
//! println!("{}", response.response);
//!
//! // Streaming chat
//! let mut stream = client.chat().stream(ChatRequest::new("Explain RAG")).await?;
//! while let Some(delta) = stream.next_text().await {
//!     print!("{}", delta?);
//! }
//! println!("\nsources: {}", stream.sources().len());
//! # Ok(())
//! # }
//! ```

pub mod chat;
pub mod client;
pub mod config;
pub mod documents;
pub mod error;
pub mod search;
pub mod settings;
pub mod streaming;
pub mod types;

pub use chat::{ChatClient, ChatRequest};
pub use client::OpenRagClient;
pub use config::OpenRagConfig;
pub use documents::DocumentsClient;
pub use error::{OpenRagError, Result};
pub use search::{SearchClient, SearchRequest};
pub use settings::SettingsClient;
pub use streaming::{ChatStream, StreamEvent};
pub use types::{
    AgentSettings, ChatResponse, Conversation, ConversationDetail, DeleteDocumentResponse,
    IngestResponse, KnowledgeSettings, Message, SearchFilters, SearchResponse, SearchResult,
    SettingsResponse, Source, TokenUsage,
};
