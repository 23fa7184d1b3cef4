//! Application state - shared across all handlers.

use std::sync::Arc;

use artboard_core::ports::{ImageGenerator, MediaUploader, PostRepository};
use artboard_core::{GalleryService, ImageService};
use artboard_infra::{
    CloudinaryConfig, CloudinaryUploader, DatabaseConfig, DisabledUploader, MockImageGenerator,
    OpenAiImageGenerator,
};

use crate::config::GenerationConfig;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub images: ImageService,
    pub gallery: GalleryService,
}

impl AppState {
    /// Build the application state from startup configuration.
    pub async fn new(
        generation: GenerationConfig,
        media: Option<CloudinaryConfig>,
        database: Option<&DatabaseConfig>,
    ) -> Self {
        let generator: Arc<dyn ImageGenerator> = match generation {
            GenerationConfig::Mock {
                min_delay,
                max_delay,
            } => Arc::new(MockImageGenerator::new(min_delay, max_delay)),
            GenerationConfig::Live(openai) => Arc::new(OpenAiImageGenerator::new(openai)),
        };

        let uploader: Arc<dyn MediaUploader> = match media {
            Some(config) => Arc::new(CloudinaryUploader::new(config)),
            None => {
                tracing::warn!("Cloudinary credentials incomplete - uploads will fail");
                Arc::new(DisabledUploader)
            }
        };

        let repo = open_store(database).await;

        tracing::info!(
            generation = %generator.mode(),
            store = repo.is_some(),
            "Application state initialized"
        );

        Self::from_parts(generator, repo, uploader)
    }

    /// Assemble state from ready-made port implementations.
    pub fn from_parts(
        generator: Arc<dyn ImageGenerator>,
        repo: Option<Arc<dyn PostRepository>>,
        uploader: Arc<dyn MediaUploader>,
    ) -> Self {
        Self {
            images: ImageService::new(generator),
            gallery: GalleryService::new(repo, uploader),
        }
    }
}

#[cfg(feature = "postgres")]
async fn open_store(database: Option<&DatabaseConfig>) -> Option<Arc<dyn PostRepository>> {
    use artboard_infra::PostgresPostRepository;
    use artboard_infra::database::connect;

    let config = database?;
    match connect(config).await {
        Ok(conn) => Some(Arc::new(PostgresPostRepository::new(
            conn,
            config.query_timeout,
        ))),
        Err(e) => {
            tracing::error!("Failed to set up post store: {}. Running in demo mode.", e);
            None
        }
    }
}

#[cfg(not(feature = "postgres"))]
async fn open_store(database: Option<&DatabaseConfig>) -> Option<Arc<dyn PostRepository>> {
    if database.is_some() {
        tracing::warn!("Built without postgres feature - ignoring DATABASE_URL");
    }
    None
}
