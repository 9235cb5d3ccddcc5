use serde::Serialize;

use crate::client::OpenRagClient;
use crate::error::Result;
use crate::types::{SearchFilters, SearchResponse};

/// Parameters for a semantic search
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    pub query: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub filters: Option<SearchFilters>,

    pub limit: u32,
    pub score_threshold: f64,
}

impl SearchRequest {
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            filters: None,
            limit: 10,
            score_threshold: 0.0,
        }
    }

    pub fn with_filters(mut self, filters: SearchFilters) -> Self {
        self.filters = Some(filters);
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    pub fn with_score_threshold(mut self, threshold: f64) -> Self {
        self.score_threshold = threshold;
        self
    }
}

/// Client for semantic search
pub struct SearchClient<'a> {
    client: &'a OpenRagClient,
}

impl<'a> SearchClient<'a> {
    pub(crate) fn new(client: &'a OpenRagClient) -> Self {
        Self { client }
    }

    /// Search the knowledge base
    pub async fn query(&self, request: SearchRequest) -> Result<SearchResponse> {
        self.client.post_json("/api/v1/search", &request).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_search_request_defaults() {
        let request = SearchRequest::new("document processing");
        let body = serde_json::to_value(&request).unwrap();

        assert_eq!(body["query"], "document processing");
        assert_eq!(body["limit"], 10);
        assert_eq!(body["score_threshold"], 0.0);
        assert!(body.get("filters").is_none());
    }
}
