use reqwest::header::{HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use crate::chat::ChatClient;
use crate::config::OpenRagConfig;
use crate::documents::DocumentsClient;
use crate::error::{OpenRagError, Result};
use crate::search::SearchClient;
use crate::settings::SettingsClient;

/// Async client for the OpenRAG API
///
/// Holds one connection pool; resource clients borrow it.
pub struct OpenRagClient {
    http_client: reqwest::Client,
    base_url: String,
}

impl OpenRagClient {
    /// Create a client from explicit configuration
    pub fn new(config: OpenRagConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            "X-API-Key",
            HeaderValue::from_str(&config.api_key)
                .map_err(|_| OpenRagError::Config("API key contains invalid characters".into()))?,
        );

        let http_client = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http_client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Create a client from `OPENRAG_API_KEY` / `OPENRAG_URL`
    pub fn from_env() -> Result<Self> {
        Self::new(OpenRagConfig::from_env()?)
    }

    /// Chat operations (streaming and non-streaming)
    pub fn chat(&self) -> ChatClient<'_> {
        ChatClient::new(self)
    }

    /// Document ingestion and deletion
    pub fn documents(&self) -> DocumentsClient<'_> {
        DocumentsClient::new(self)
    }

    /// Semantic search over the knowledge base
    pub fn search(&self) -> SearchClient<'_> {
        SearchClient::new(self)
    }

    /// Server configuration (read-only)
    pub fn settings(&self) -> SettingsClient<'_> {
        SettingsClient::new(self)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub(crate) async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "GET");
        let response = self.http_client.get(self.url(path)).send().await?;
        Ok(Self::check_status(response).await?.json().await?)
    }

    pub(crate) async fn post_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "POST");
        let response = self.http_client.post(self.url(path)).json(body).send().await?;
        Ok(Self::check_status(response).await?.json().await?)
    }

    pub(crate) async fn delete_json<B: Serialize, T: DeserializeOwned>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<T> {
        debug!(path, "DELETE");
        let response = self
            .http_client
            .delete(self.url(path))
            .json(body)
            .send()
            .await?;
        Ok(Self::check_status(response).await?.json().await?)
    }

    pub(crate) async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        debug!(path, "DELETE");
        let response = self.http_client.delete(self.url(path)).send().await?;
        Ok(Self::check_status(response).await?.json().await?)
    }

    pub(crate) async fn post_multipart<T: DeserializeOwned>(
        &self,
        path: &str,
        form: reqwest::multipart::Form,
    ) -> Result<T> {
        debug!(path, "POST multipart");
        let response = self
            .http_client
            .post(self.url(path))
            .multipart(form)
            .send()
            .await?;
        Ok(Self::check_status(response).await?.json().await?)
    }

    /// POST returning the raw response with its body unconsumed,
    /// for streaming endpoints
    pub(crate) async fn post_stream<B: Serialize>(
        &self,
        path: &str,
        body: &B,
    ) -> Result<reqwest::Response> {
        debug!(path, "POST (streaming)");
        let response = self.http_client.post(self.url(path)).json(body).send().await?;
        Self::check_status(response).await
    }

    /// Pass a successful response through; map anything else to a typed error
    async fn check_status(response: reqwest::Response) -> Result<reqwest::Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = extract_error_message(&body);
        debug!(status = status.as_u16(), message = %message, "request failed");
        Err(OpenRagError::from_status(status.as_u16(), message))
    }
}

/// Pull a human-readable message out of an error payload
///
/// The server answers with `{"error": ...}`, `{"error": ..., "message":
/// ...}`, or FastAPI's `{"detail": {...}}` wrapping of the same shape.
fn extract_error_message(body: &str) -> String {
    let Ok(value) = serde_json::from_str::<Value>(body) else {
        return body.to_string();
    };

    let detail = value.get("detail").unwrap_or(&value);
    detail
        .get("message")
        .or_else(|| detail.get("error"))
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| body.to_string())
}
