use async_trait::async_trait;

use crate::domain::Post;
use crate::error::RepoError;

/// Post persistence. Posts are only ever listed and inserted.
#[async_trait]
pub trait PostRepository: Send + Sync {
    /// Cheap liveness probe, run before every gallery operation.
    async fn is_connected(&self) -> bool;

    /// All posts, in no particular order.
    async fn find_all(&self) -> Result<Vec<Post>, RepoError>;

    /// Persist a new post and return the stored record.
    async fn insert(&self, post: Post) -> Result<Post, RepoError>;
}
