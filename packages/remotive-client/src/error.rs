use thiserror::Error;

pub type Result<T> = std::result::Result<T, RemotiveError>;

#[derive(Debug, Error)]
pub enum RemotiveError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Remotive API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(#[from] serde_json::Error),
}
