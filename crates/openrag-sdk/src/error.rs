use thiserror::Error;

#[derive(Error, Debug)]
pub enum OpenRagError {
    #[error("Authentication failed: {0}")]
    Authentication(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error ({status}): {message}")]
    Validation { status: u16, message: String },

    #[error("Rate limit exceeded: {0}")]
    RateLimit(String),

    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Remote error ({code}): {message}")]
    Remote { code: String, message: String },

    #[error("Stream is closed")]
    StreamClosed,

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, OpenRagError>;

impl OpenRagError {
    /// Map a non-success HTTP status and its error payload to an error variant
    pub fn from_status(status: u16, message: String) -> Self {
        match status {
            401 => OpenRagError::Authentication(message),
            404 => OpenRagError::NotFound(message),
            400 | 422 => OpenRagError::Validation { status, message },
            429 => OpenRagError::RateLimit(message),
            500..=599 => OpenRagError::Server { status, message },
            _ => OpenRagError::Api { status, message },
        }
    }

    /// Status code carried by the error, when it originated from an HTTP response
    pub fn status(&self) -> Option<u16> {
        match self {
            OpenRagError::Authentication(_) => Some(401),
            OpenRagError::NotFound(_) => Some(404),
            OpenRagError::RateLimit(_) => Some(429),
            OpenRagError::Validation { status, .. }
            | OpenRagError::Server { status, .. }
            | OpenRagError::Api { status, .. } => Some(*status),
            OpenRagError::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
