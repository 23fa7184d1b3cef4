//! # Artboard Infrastructure
//!
//! Concrete implementations of the ports defined in `artboard-core`:
//! the post store, the image generators and the media host.
//!
//! ## Feature Flags
//!
//! - `full` (default) - All features enabled
//! - `minimal` - No database driver; the gallery always runs in demo mode
//! - `postgres` - PostgreSQL post store via SeaORM

pub mod database;
pub mod generator;
pub mod media;

// Re-exports
pub use database::{DatabaseConfig, InMemoryPostRepository};
pub use generator::{MockImageGenerator, OpenAiConfig, OpenAiImageGenerator};
pub use media::{CloudinaryConfig, CloudinaryUploader, DisabledUploader};

#[cfg(feature = "postgres")]
pub use database::PostgresPostRepository;
