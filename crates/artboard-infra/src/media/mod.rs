//! Media hosting - Cloudinary uploads.

mod cloudinary;

pub use cloudinary::{CloudinaryConfig, CloudinaryUploader};

use async_trait::async_trait;

use artboard_core::ports::{MediaUploader, UploadError};

/// Uploader used when no media host credentials are configured.
/// Every upload fails, which surfaces as a 500 on create-post.
pub struct DisabledUploader;

#[async_trait]
impl MediaUploader for DisabledUploader {
    async fn upload(&self, _payload: &str) -> Result<String, UploadError> {
        tracing::warn!("Upload attempted without media host credentials");
        Err(UploadError::NotConfigured)
    }
}
