use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("connection failed: {0}")]
    ConnectionFailed(String),
    #[error("remote returned {status}: {body}")]
    Remote { status: u16, body: String },
    #[error("pagination error: {0}")]
    Pagination(String),
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("decode error: {0}")]
    Decode(#[from] serde_json::Error),
}
