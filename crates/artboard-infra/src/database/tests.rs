#[cfg(test)]
mod tests {
    use std::time::Duration;

    use artboard_core::domain::Post;
    use artboard_core::error::RepoError;
    use artboard_core::ports::PostRepository;
    use sea_orm::{DatabaseBackend, DbErr, MockDatabase, RuntimeErr, sqlx};

    use crate::database::entity::post;
    use crate::database::postgres_repo::PostgresPostRepository;

    fn model(name: &str, photo: &str) -> post::Model {
        post::Model {
            id: uuid::Uuid::new_v4(),
            name: name.to_owned(),
            prompt: "a city at night".to_owned(),
            photo: photo.to_owned(),
            created_at: chrono::Utc::now().into(),
        }
    }

    #[tokio::test]
    async fn test_find_all_posts() {
        let first = model("Ada", "https://img/1");
        let second = model("Grace", "https://img/2");

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![first.clone(), second.clone()]])
            .into_connection();

        let repo = PostgresPostRepository::new(db, Duration::from_secs(5));
        let posts = repo.find_all().await.unwrap();

        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, first.id);
        assert_eq!(posts[1].name, "Grace");
    }

    #[tokio::test]
    async fn test_insert_returns_stored_post() {
        let post = Post::new("Ada".into(), "a city at night".into(), "https://img/1".into());
        let stored = post::Model {
            id: post.id,
            name: post.name.clone(),
            prompt: post.prompt.clone(),
            photo: post.photo.clone(),
            created_at: post.created_at.into(),
        };

        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![stored]])
            .into_connection();

        let repo = PostgresPostRepository::new(db, Duration::from_secs(5));
        let result = repo.insert(post.clone()).await.unwrap();

        assert_eq!(result.id, post.id);
        assert_eq!(result.photo, "https://img/1");
    }

    #[tokio::test]
    async fn test_connection_errors_are_unavailable() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Conn(RuntimeErr::Internal(
                "connection refused".to_owned(),
            ))])
            .into_connection();

        let repo = PostgresPostRepository::new(db, Duration::from_secs(5));
        let err = repo.find_all().await.unwrap_err();

        assert!(matches!(err, RepoError::Unavailable(_)));
        assert!(err.demo_reason().is_some());
    }

    #[tokio::test]
    async fn test_connection_lost_mid_query_is_unavailable() {
        let reset = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "reset by peer");
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![
                DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Io(reset).into())),
                DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::PoolClosed.into())),
            ])
            .into_connection();

        let repo = PostgresPostRepository::new(db, Duration::from_secs(5));
        for _ in 0..2 {
            let err = repo.find_all().await.unwrap_err();
            assert!(matches!(err, RepoError::Unavailable(_)), "{err:?}");
            assert!(err.demo_reason().is_some());
        }
    }

    #[tokio::test]
    async fn test_query_errors_are_not_degradable() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "relation \"posts\" does not exist".to_owned(),
            )])
            .into_connection();

        let repo = PostgresPostRepository::new(db, Duration::from_secs(5));
        let err = repo.find_all().await.unwrap_err();

        assert!(matches!(err, RepoError::Query(_)));
        assert!(err.demo_reason().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_slow_query_times_out() {
        let db = MockDatabase::new(DatabaseBackend::Postgres).into_connection();
        let repo = PostgresPostRepository::new(db, Duration::from_secs(5));

        let err = repo
            .timed(std::future::pending::<Result<(), DbErr>>())
            .await
            .unwrap_err();

        assert!(matches!(err, RepoError::Timeout(d) if d == Duration::from_secs(5)));
    }
}
