//! HTTP client for the gallery API.

use anyhow::{Context, Result, anyhow};
use reqwest::Response;
use serde::de::DeserializeOwned;

use artboard_shared::dto::{
    CreatePostRequest, GenerateImageRequest, GenerateImageResponse, PostResponse,
};
use artboard_shared::{ApiResponse, ErrorResponse};

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Base64 image bytes for `prompt`.
    pub async fn generate(&self, prompt: &str) -> Result<String> {
        let body = GenerateImageRequest {
            prompt: Some(prompt.to_string()),
        };
        let resp = self
            .http
            .post(self.url("/api/generateImage"))
            .json(&body)
            .send()
            .await
            .context("could not reach the gallery server")?;

        let generated: GenerateImageResponse = decode(resp).await?;
        Ok(generated.photo)
    }

    pub async fn list_posts(&self) -> Result<ApiResponse<Vec<PostResponse>>> {
        let resp = self
            .http
            .get(self.url("/api/post"))
            .send()
            .await
            .context("could not reach the gallery server")?;
        decode(resp).await
    }

    pub async fn create_post(&self, post: &CreatePostRequest) -> Result<ApiResponse<PostResponse>> {
        let resp = self
            .http
            .post(self.url("/api/post"))
            .json(post)
            .send()
            .await
            .context("could not reach the gallery server")?;
        decode(resp).await
    }
}

/// Decode a success body, or surface the server's error message.
async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    let status = resp.status();
    let text = resp.text().await.context("failed to read response body")?;

    if !status.is_success() {
        return Err(match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(err) => anyhow!("{} ({})", err.message, err.status),
            Err(_) => anyhow!("server returned {}", status),
        });
    }

    serde_json::from_str(&text).with_context(|| format!("unexpected response: {text}"))
}
