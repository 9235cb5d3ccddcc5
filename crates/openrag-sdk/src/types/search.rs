use serde::{Deserialize, Serialize};

/// A single semantic search hit
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResult {
    pub filename: String,
    pub text: String,
    pub score: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub mimetype: Option<String>,
}

/// Response from a search request
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// Scope filters applied to search and retrieval-augmented chat
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data_sources: Option<Vec<String>>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_types: Option<Vec<String>>,
}

impl SearchFilters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn data_sources(mut self, sources: Vec<String>) -> Self {
        self.data_sources = Some(sources);
        self
    }

    pub fn document_types(mut self, types: Vec<String>) -> Self {
        self.document_types = Some(types);
        self
    }
}
