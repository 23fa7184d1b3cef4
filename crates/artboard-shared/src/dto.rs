//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

/// Body of `POST /api/generateImage`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateImageRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl GenerateImageRequest {
    /// Returns the prompt when it has visible content.
    pub fn validate(&self) -> Result<&str, &'static str> {
        match self.prompt.as_deref() {
            Some(prompt) if !prompt.trim().is_empty() => Ok(prompt),
            _ => Err("Prompt is required"),
        }
    }
}

/// Response of `POST /api/generateImage`: base64 image bytes without a data-URL prefix.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateImageResponse {
    pub photo: String,
}

/// Body of `POST /api/post`.
///
/// Fields are optional on the wire so a missing field is reported as a
/// validation failure instead of a deserialization error.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePostRequest {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// A create-post body whose fields are all present and non-blank.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidCreatePost {
    pub name: String,
    pub prompt: String,
    pub photo: String,
}

impl CreatePostRequest {
    pub fn validate(self) -> Result<ValidCreatePost, &'static str> {
        fn required(value: Option<String>, message: &'static str) -> Result<String, &'static str> {
            value.filter(|v| !v.trim().is_empty()).ok_or(message)
        }

        Ok(ValidCreatePost {
            name: required(self.name, "name is required")?,
            prompt: required(self.prompt, "prompt is required")?,
            photo: required(self.photo, "photo is required")?,
        })
    }
}

/// A gallery post as exposed over HTTP.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostResponse {
    pub id: String,
    pub name: String,
    pub prompt: String,
    pub photo: String,
    pub created_at: String,
}
