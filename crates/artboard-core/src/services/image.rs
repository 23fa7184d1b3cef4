use std::sync::Arc;

use crate::error::DomainError;
use crate::ports::{GenerationMode, ImageGenerator};

/// Validates prompts and delegates to the configured generator.
#[derive(Clone)]
pub struct ImageService {
    generator: Arc<dyn ImageGenerator>,
}

impl ImageService {
    pub fn new(generator: Arc<dyn ImageGenerator>) -> Self {
        Self { generator }
    }

    pub fn mode(&self) -> GenerationMode {
        self.generator.mode()
    }

    /// Generate base64 image bytes for `prompt`.
    pub async fn generate(&self, prompt: &str) -> Result<String, DomainError> {
        if prompt.trim().is_empty() {
            return Err(DomainError::Validation("Prompt is required".to_string()));
        }

        let mode = self.mode();
        tracing::info!(%mode, prompt_len = prompt.len(), "Generating image");

        match self.generator.generate(prompt).await {
            Ok(image) => {
                tracing::info!(%mode, bytes = image.len(), "Image generated");
                Ok(image)
            }
            Err(e) => {
                tracing::error!(%mode, status = ?e.status(), error = %e, "Image generation failed");
                Err(e.into())
            }
        }
    }
}
