//! Image generation port.

use async_trait::async_trait;

/// Which generator backs the service. Fixed at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    /// Keyword placeholders with simulated latency.
    Mock,
    /// A third-party text-to-image provider.
    Live,
}

impl GenerationMode {
    pub fn as_str(self) -> &'static str {
        match self {
            GenerationMode::Mock => "mock",
            GenerationMode::Live => "live",
        }
    }
}

impl std::fmt::Display for GenerationMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Turns a prompt into base64-encoded image bytes.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    /// Generate one image. The prompt has already been validated.
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError>;

    fn mode(&self) -> GenerationMode;
}

/// Image generation errors.
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// The provider answered with an error (rate limit, bad key, content policy).
    #[error("{message}")]
    Provider { status: Option<u16>, message: String },

    #[error("Image provider unreachable: {0}")]
    Transport(String),

    #[error("Unexpected image provider response: {0}")]
    InvalidResponse(String),
}

impl GenerationError {
    pub fn status(&self) -> Option<u16> {
        match self {
            GenerationError::Provider { status, .. } => *status,
            GenerationError::Transport(_) | GenerationError::InvalidResponse(_) => None,
        }
    }
}
