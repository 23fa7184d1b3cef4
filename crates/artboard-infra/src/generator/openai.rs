//! OpenAI images API client.

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

use artboard_core::ports::{GenerationError, GenerationMode, ImageGenerator};

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Provider configuration.
#[derive(Debug)]
pub struct OpenAiConfig {
    pub api_key: SecretString,
    pub base_url: String,
    /// Requested resolution, e.g. `1024x1024`.
    pub size: String,
}

impl OpenAiConfig {
    pub fn new(api_key: SecretString) -> Self {
        Self {
            api_key,
            base_url: DEFAULT_BASE_URL.to_string(),
            size: "1024x1024".to_string(),
        }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

#[derive(Debug, Serialize)]
struct ImagesRequest<'a> {
    prompt: &'a str,
    n: u8,
    size: &'a str,
    response_format: &'static str,
}

#[derive(Debug, Deserialize)]
struct ImagesResponse {
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    b64_json: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorBody {
    error: ProviderErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ProviderErrorDetail {
    message: String,
}

/// Live generator: one image per prompt, returned as base64.
pub struct OpenAiImageGenerator {
    client: reqwest::Client,
    config: OpenAiConfig,
}

impl OpenAiImageGenerator {
    pub fn new(config: OpenAiConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/images/generations", self.config.base_url.trim_end_matches('/'))
    }
}

/// Build a generation error from a non-success provider response.
fn provider_error(status: u16, body: &str) -> GenerationError {
    let message = serde_json::from_str::<ProviderErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| {
            if body.trim().is_empty() {
                format!("Image provider returned status {status}")
            } else {
                body.trim().to_string()
            }
        });
    GenerationError::Provider {
        status: Some(status),
        message,
    }
}

fn first_image(response: ImagesResponse) -> Result<String, GenerationError> {
    response
        .data
        .into_iter()
        .next()
        .and_then(|image| image.b64_json)
        .ok_or_else(|| {
            GenerationError::InvalidResponse("no b64_json image in response".to_string())
        })
}

#[async_trait]
impl ImageGenerator for OpenAiImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let request = ImagesRequest {
            prompt,
            n: 1,
            size: &self.config.size,
            response_format: "b64_json",
        };

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&request)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(provider_error(status.as_u16(), &body));
        }

        let body: ImagesResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;
        first_image(body)
    }

    fn mode(&self) -> GenerationMode {
        GenerationMode::Live
    }
}
