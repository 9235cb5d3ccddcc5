use serde::{Deserialize, Serialize};

/// Agent configuration reported by the settings endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AgentSettings {
    #[serde(default)]
    pub llm_provider: Option<String>,

    #[serde(default)]
    pub llm_model: Option<String>,

    #[serde(default)]
    pub system_prompt: Option<String>,
}

/// Knowledge base configuration reported by the settings endpoint
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct KnowledgeSettings {
    #[serde(default)]
    pub embedding_provider: Option<String>,

    #[serde(default)]
    pub embedding_model: Option<String>,

    #[serde(default)]
    pub chunk_size: Option<u32>,

    #[serde(default)]
    pub chunk_overlap: Option<u32>,

    #[serde(default)]
    pub table_structure: Option<bool>,

    #[serde(default)]
    pub ocr: Option<bool>,

    #[serde(default)]
    pub picture_descriptions: Option<bool>,
}

/// Read-only view of the server configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsResponse {
    #[serde(default)]
    pub agent: AgentSettings,

    #[serde(default)]
    pub knowledge: KnowledgeSettings,
}
