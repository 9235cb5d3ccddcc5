use serde::{Deserialize, Serialize};

/// Response from document ingestion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IngestResponse {
    pub success: bool,

    #[serde(default)]
    pub document_id: Option<String>,

    #[serde(default)]
    pub filename: Option<String>,

    #[serde(default)]
    pub chunks: u32,
}

/// Response from document deletion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    pub success: bool,

    #[serde(default)]
    pub deleted_chunks: u32,
}
