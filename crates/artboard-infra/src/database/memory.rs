//! In-memory post repository - used for local runs and tests.

use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use artboard_core::domain::Post;
use artboard_core::error::RepoError;
use artboard_core::ports::PostRepository;

/// Post repository backed by a `Vec` behind an async RwLock.
///
/// Data is lost on process restart. The connectivity switch lets tests
/// take the "database" offline without touching a real server.
pub struct InMemoryPostRepository {
    posts: RwLock<Vec<Post>>,
    online: AtomicBool,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            posts: RwLock::new(Vec::new()),
            online: AtomicBool::new(true),
        }
    }

    pub fn set_online(&self, online: bool) {
        self.online.store(online, Ordering::SeqCst);
    }

    fn ensure_online(&self) -> Result<(), RepoError> {
        if self.online.load(Ordering::SeqCst) {
            Ok(())
        } else {
            Err(RepoError::Unavailable("in-memory store is offline".to_string()))
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn is_connected(&self) -> bool {
        self.online.load(Ordering::SeqCst)
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        self.ensure_online()?;
        Ok(self.posts.read().await.clone())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        self.ensure_online()?;
        let mut posts = self.posts.write().await;
        if posts.iter().any(|p| p.id == post.id) {
            return Err(RepoError::Constraint(format!("post {} already exists", post.id)));
        }
        posts.push(post.clone());
        Ok(post)
    }
}
