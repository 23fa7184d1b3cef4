//! PostgreSQL post repository.

use std::borrow::Borrow;
use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use sea_orm::{ActiveModelTrait, DbConn, DbErr, EntityTrait, RuntimeErr, SqlErr, sqlx};

use artboard_core::domain::Post;
use artboard_core::error::RepoError;
use artboard_core::ports::PostRepository;

use super::entity::post::{self, Entity as PostEntity};

/// PostgreSQL post repository. Every call is bounded by `query_timeout`.
pub struct PostgresPostRepository {
    pub(crate) db: DbConn,
    query_timeout: Duration,
}

impl PostgresPostRepository {
    pub fn new(db: DbConn, query_timeout: Duration) -> Self {
        Self { db, query_timeout }
    }

    pub(crate) async fn timed<T, F>(&self, query: F) -> Result<T, RepoError>
    where
        F: Future<Output = Result<T, DbErr>> + Send,
    {
        match tokio::time::timeout(self.query_timeout, query).await {
            Ok(result) => result.map_err(classify),
            Err(_) => Err(RepoError::Timeout(self.query_timeout)),
        }
    }
}

/// Map driver errors onto repository categories.
fn classify(err: DbErr) -> RepoError {
    if let Some(SqlErr::UniqueConstraintViolation(detail)) = err.sql_err() {
        return RepoError::Constraint(detail);
    }
    match &err {
        DbErr::Conn(_) | DbErr::ConnectionAcquire(_) => RepoError::Unavailable(err.to_string()),
        DbErr::Query(RuntimeErr::SqlxError(e)) | DbErr::Exec(RuntimeErr::SqlxError(e))
            if is_connection_loss(Borrow::<sqlx::Error>::borrow(e)) =>
        {
            RepoError::Unavailable(err.to_string())
        }
        _ => RepoError::Query(err.to_string()),
    }
}

/// Driver errors meaning the server went away mid-query.
fn is_connection_loss(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Io(_)
            | sqlx::Error::PoolClosed
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::WorkerCrashed
    )
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn is_connected(&self) -> bool {
        match self.timed(self.db.ping()).await {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!(error = %e, "Post store ping failed");
                false
            }
        }
    }

    async fn find_all(&self) -> Result<Vec<Post>, RepoError> {
        let models = self.timed(PostEntity::find().all(&self.db)).await?;
        Ok(models.into_iter().map(Into::into).collect())
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        tracing::debug!(post_id = %post.id, "Inserting post");
        let active: post::ActiveModel = post.into();
        let model = self.timed(active.insert(&self.db)).await?;
        Ok(model.into())
    }
}
