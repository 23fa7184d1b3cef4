//! Media hosting port.

use async_trait::async_trait;

/// Hands image payloads to an external media host.
#[async_trait]
pub trait MediaUploader: Send + Sync {
    /// Upload a data URL, remote URL or raw base64 payload and return its durable URL.
    async fn upload(&self, payload: &str) -> Result<String, UploadError>;
}

/// Media upload errors.
#[derive(Debug, thiserror::Error)]
pub enum UploadError {
    #[error("Media host rejected upload: {message}")]
    Rejected { status: Option<u16>, message: String },

    #[error("Media host unreachable: {0}")]
    Transport(String),

    #[error("Unexpected media host response: {0}")]
    InvalidResponse(String),

    #[error("Media host not configured")]
    NotConfigured,
}
