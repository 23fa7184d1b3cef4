//! Ports - trait definitions for external dependencies.
//! These are the "interfaces" that infrastructure must implement.

mod generator;
mod media;
mod repository;

pub use generator::{GenerationError, GenerationMode, ImageGenerator};
pub use media::{MediaUploader, UploadError};
pub use repository::PostRepository;
