use crate::error::{OpenRagError, Result};

const DEFAULT_BASE_URL: &str = "http://localhost:8000";

/// Client configuration
#[derive(Debug, Clone)]
pub struct OpenRagConfig {
    pub api_key: String,
    pub base_url: String,
}

impl OpenRagConfig {
    /// Configuration with the default base URL
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Read configuration from the environment
    ///
    /// `OPENRAG_API_KEY` is required; `OPENRAG_URL` overrides the default
    /// base URL.
    pub fn from_env() -> Result<Self> {
        let api_key = std::env::var("OPENRAG_API_KEY")
            .map_err(|_| OpenRagError::Config("OPENRAG_API_KEY is not set".into()))?;

        let mut config = Self::new(api_key);
        if let Ok(url) = std::env::var("OPENRAG_URL") {
            config.base_url = url;
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_base_url() {
        let config = OpenRagConfig::new("orag_test");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.api_key, "orag_test");
    }

    #[test]
    fn test_with_base_url() {
        let config = OpenRagConfig::new("orag_test").with_base_url("https://rag.example.com");
        assert_eq!(config.base_url, "https://rag.example.com");
    }
}
