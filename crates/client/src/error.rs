use thiserror::Error;

pub type Result<T> = std::result::Result<T, ClientError>;

#[derive(Error, Debug)]
pub enum ClientError {
    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Could not get data. [{url}]\nReason: {message}")]
    StatusError {
        url: String,
        status: u16,
        message: String,
    },

    #[error("Failed to parse response from {url}: {source}")]
    DecodeError {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Preference storage error: {0}")]
    StorageError(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    ParseError(#[from] serde_json::Error),
}

impl ClientError {
    /// HTTP status returned by the server, if the request got that far.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::StatusError { status, .. } => Some(*status),
            Self::RequestError(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}
