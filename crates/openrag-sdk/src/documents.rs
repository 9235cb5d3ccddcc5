use std::path::Path;

use reqwest::multipart;
use serde_json::json;
use tracing::debug;

use crate::client::OpenRagClient;
use crate::error::{OpenRagError, Result};
use crate::types::{DeleteDocumentResponse, IngestResponse};

/// Client for document operations
///
/// Ingestion is a single multipart upload: bytes plus a filename in, an
/// ingest record out. Chunking and indexing happen server-side.
pub struct DocumentsClient<'a> {
    client: &'a OpenRagClient,
}

impl<'a> DocumentsClient<'a> {
    pub(crate) fn new(client: &'a OpenRagClient) -> Self {
        Self { client }
    }

    /// Ingest a file from disk into the knowledge base
    pub async fn ingest_file(&self, path: impl AsRef<Path>) -> Result<IngestResponse> {
        let path = path.as_ref();
        let filename = path
            .file_name()
            .and_then(|name| name.to_str())
            .ok_or_else(|| {
                OpenRagError::Config(format!("invalid file path: {}", path.display()))
            })?
            .to_string();

        let bytes = tokio::fs::read(path).await?;
        self.ingest_bytes(bytes, filename).await
    }

    /// Ingest in-memory bytes under the given filename
    pub async fn ingest_bytes(
        &self,
        bytes: Vec<u8>,
        filename: impl Into<String>,
    ) -> Result<IngestResponse> {
        let filename = filename.into();
        debug!(filename = %filename, size = bytes.len(), "ingesting document");

        let part = multipart::Part::bytes(bytes).file_name(filename);
        let form = multipart::Form::new().part("file", part);

        self.client
            .post_multipart("/api/v1/documents/ingest", form)
            .await
    }

    /// Delete a document and all of its chunks
    pub async fn delete(&self, filename: &str) -> Result<DeleteDocumentResponse> {
        self.client
            .delete_json("/api/v1/documents", &json!({ "filename": filename }))
            .await
    }
}
