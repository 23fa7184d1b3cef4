use std::sync::Arc;

use crate::domain::{DemoReason, NewPost, Post, StoreOutcome};
use crate::error::DomainError;
use crate::ports::{MediaUploader, PostRepository};

/// Lists and publishes posts, degrading to demo mode when the store is offline.
#[derive(Clone)]
pub struct GalleryService {
    /// `None` when the process was started without a usable database.
    repo: Option<Arc<dyn PostRepository>>,
    uploader: Arc<dyn MediaUploader>,
}

impl GalleryService {
    pub fn new(repo: Option<Arc<dyn PostRepository>>, uploader: Arc<dyn MediaUploader>) -> Self {
        Self { repo, uploader }
    }

    /// Repository if it answers a ping right now.
    async fn live_repo(&self) -> Option<&Arc<dyn PostRepository>> {
        let repo = self.repo.as_ref()?;
        if repo.is_connected().await {
            Some(repo)
        } else {
            None
        }
    }

    pub async fn is_online(&self) -> bool {
        self.live_repo().await.is_some()
    }

    /// Every post; an empty demo listing when the store is unreachable.
    pub async fn list_posts(&self) -> Result<StoreOutcome<Vec<Post>>, DomainError> {
        let Some(repo) = self.live_repo().await else {
            tracing::warn!("Store not connected, returning empty gallery");
            return Ok(StoreOutcome::Demo {
                data: Vec::new(),
                reason: DemoReason::NotConnected,
            });
        };

        match repo.find_all().await {
            Ok(posts) => {
                tracing::debug!(count = posts.len(), "Listed posts");
                Ok(StoreOutcome::Stored(posts))
            }
            Err(e) => match e.demo_reason() {
                Some(reason) => {
                    tracing::warn!(error = %e, "Listing degraded to demo mode");
                    Ok(StoreOutcome::Demo {
                        data: Vec::new(),
                        reason,
                    })
                }
                None => Err(e.into()),
            },
        }
    }

    /// Upload the photo, then persist the post with the hosted URL.
    ///
    /// Nothing is uploaded while the store is offline; the caller gets an
    /// unpersisted stand-in instead.
    pub async fn create_post(&self, new_post: NewPost) -> Result<StoreOutcome<Post>, DomainError> {
        let NewPost { name, prompt, photo } = new_post;
        for (value, field) in [(&name, "name"), (&prompt, "prompt"), (&photo, "photo")] {
            if value.trim().is_empty() {
                return Err(DomainError::Validation(format!("{field} is required")));
            }
        }

        let Some(repo) = self.live_repo().await else {
            tracing::warn!("Store not connected, returning demo post");
            return Ok(StoreOutcome::Demo {
                data: Post::demo_stand_in(name, prompt),
                reason: DemoReason::NotConnected,
            });
        };

        tracing::info!(payload_len = photo.len(), "Uploading photo to media host");
        let url = self.uploader.upload(&photo).await.map_err(|e| {
            tracing::error!(error = %e, "Media upload failed");
            DomainError::from(e)
        })?;

        let post = Post::new(name, prompt, url);
        match repo.insert(post.clone()).await {
            Ok(stored) => {
                tracing::info!(post_id = %stored.id, "Post saved");
                Ok(StoreOutcome::Stored(stored))
            }
            Err(e) => match e.demo_reason() {
                Some(reason) => {
                    tracing::warn!(error = %e, "Post not saved, store degraded");
                    Ok(StoreOutcome::Demo {
                        data: Post::demo_stand_in(post.name, post.prompt),
                        reason,
                    })
                }
                None => Err(e.into()),
            },
        }
    }
}
