//! Cloudinary signed uploads.

use std::collections::BTreeMap;

use async_trait::async_trait;
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;
use sha2::{Digest, Sha256};

use artboard_core::ports::{MediaUploader, UploadError};

const DEFAULT_BASE_URL: &str = "https://api.cloudinary.com/v1_1";

/// Cloudinary account credentials.
#[derive(Debug)]
pub struct CloudinaryConfig {
    pub cloud_name: String,
    pub api_key: String,
    pub api_secret: SecretString,
    pub base_url: String,
}

impl CloudinaryConfig {
    pub fn new(cloud_name: String, api_key: String, api_secret: SecretString) -> Self {
        Self {
            cloud_name,
            api_key,
            api_secret,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct UploadResponse {
    secure_url: String,
}

#[derive(Debug, Deserialize)]
struct ErrorBody {
    error: ErrorDetail,
}

#[derive(Debug, Deserialize)]
struct ErrorDetail {
    message: String,
}

/// Uploads image payloads to Cloudinary and returns the `secure_url`.
pub struct CloudinaryUploader {
    client: reqwest::Client,
    config: CloudinaryConfig,
}

impl CloudinaryUploader {
    pub fn new(config: CloudinaryConfig) -> Self {
        Self {
            client: reqwest::Client::new(),
            config,
        }
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/{}/image/upload",
            self.config.base_url.trim_end_matches('/'),
            self.config.cloud_name
        )
    }
}

/// Data URLs and remote URLs pass through; bare base64 is wrapped as a PNG data URL.
fn normalize_payload(payload: &str) -> String {
    let payload = payload.trim();
    if ["data:", "http://", "https://"]
        .iter()
        .any(|prefix| payload.starts_with(prefix))
    {
        payload.to_string()
    } else {
        format!("data:image/png;base64,{payload}")
    }
}

/// SHA-256 request signature: sorted `key=value` pairs joined by `&`, then the secret.
fn sign(params: &BTreeMap<&str, String>, secret: &str) -> String {
    let to_sign = params
        .iter()
        .map(|(k, v)| format!("{k}={v}"))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(to_sign.as_bytes());
    hasher.update(secret.as_bytes());
    format!("{:x}", hasher.finalize())
}

fn rejection(status: u16, body: &str) -> UploadError {
    let message = serde_json::from_str::<ErrorBody>(body)
        .map(|b| b.error.message)
        .unwrap_or_else(|_| format!("media host returned status {status}"));
    UploadError::Rejected {
        status: Some(status),
        message,
    }
}

#[async_trait]
impl MediaUploader for CloudinaryUploader {
    async fn upload(&self, payload: &str) -> Result<String, UploadError> {
        let mut signed = BTreeMap::new();
        signed.insert("timestamp", chrono::Utc::now().timestamp().to_string());
        let signature = sign(&signed, self.config.api_secret.expose_secret());

        let mut form = signed;
        form.insert("file", normalize_payload(payload));
        form.insert("api_key", self.config.api_key.clone());
        form.insert("signature", signature);
        form.insert("signature_algorithm", "sha256".to_string());

        let response = self
            .client
            .post(self.endpoint())
            .form(&form)
            .send()
            .await
            .map_err(|e| UploadError::Transport(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(rejection(status.as_u16(), &body));
        }

        let body: UploadResponse = response
            .json()
            .await
            .map_err(|e| UploadError::InvalidResponse(e.to_string()))?;

        tracing::info!(url = %body.secure_url, "Media upload complete");
        Ok(body.secure_url)
    }
}
