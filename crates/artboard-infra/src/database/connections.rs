use std::time::Duration;

#[cfg(feature = "postgres")]
use sea_orm::{ConnectOptions, Database, DbConn, DbErr};

/// Substrings that mark a connection string as a placeholder.
const DEMO_URL_MARKERS: [&str; 2] = ["localhost", "mock"];

/// Configuration for the post store.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
    pub connect_timeout: Duration,
    /// Applied to every query; exceeding it degrades to demo mode.
    pub query_timeout: Duration,
}

impl DatabaseConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            max_connections: 10,
            min_connections: 1,
            connect_timeout: Duration::from_secs(30),
            query_timeout: Duration::from_secs(5),
        }
    }

    /// Why `url` must not be connected to, if it must not.
    ///
    /// A missing URL, or one pointing at localhost or a mock, keeps the
    /// gallery in demo mode instead of attempting a connection.
    pub fn demo_mode_reason(url: Option<&str>) -> Option<&'static str> {
        match url {
            None => Some("DATABASE_URL not set"),
            Some(url) if url.trim().is_empty() => Some("DATABASE_URL is empty"),
            Some(url) if DEMO_URL_MARKERS.iter().any(|m| url.contains(m)) => {
                Some("DATABASE_URL points at a local or mock database")
            }
            Some(_) => None,
        }
    }
}

/// Open a lazily-connected pool.
///
/// Nothing is dialed until the first query, so an unreachable database
/// surfaces per request through `PostRepository::is_connected`.
#[cfg(feature = "postgres")]
pub async fn connect(config: &DatabaseConfig) -> Result<DbConn, DbErr> {
    let opts = ConnectOptions::new(&config.url)
        .max_connections(config.max_connections)
        .min_connections(config.min_connections)
        .connect_timeout(config.connect_timeout)
        .acquire_timeout(config.query_timeout)
        .idle_timeout(Duration::from_secs(300))
        .connect_lazy(true)
        .sqlx_logging(true)
        .to_owned();

    let conn = Database::connect(opts).await?;
    tracing::info!(
        max_connections = config.max_connections,
        "Post store pool created"
    );
    Ok(conn)
}
