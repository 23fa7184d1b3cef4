//! Application configuration loaded from environment variables.

use std::str::FromStr;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;

use artboard_infra::{CloudinaryConfig, DatabaseConfig, OpenAiConfig};

use crate::middleware::cors::CorsConfig;

/// Largest accepted JSON body; inline base64 images are big.
pub const DEFAULT_JSON_LIMIT: usize = 50 * 1024 * 1024;

/// Configuration errors that prevent startup.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} must be set when {1}")]
    Missing(&'static str, &'static str),
}

/// How images are generated. Chosen once at startup.
#[derive(Debug)]
pub enum GenerationConfig {
    Mock {
        min_delay: Duration,
        max_delay: Duration,
    },
    Live(OpenAiConfig),
}

/// Application configuration.
#[derive(Debug)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub generation: GenerationConfig,
    /// `None` when media host credentials are incomplete.
    pub media: Option<CloudinaryConfig>,
    /// `None` keeps the gallery in demo mode.
    pub database: Option<DatabaseConfig>,
    pub cors: CorsConfig,
    pub json_limit: usize,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(var: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let generation = if var("USE_REAL_AI").as_deref() == Some("true") {
            let api_key = var("OPENAI_API_KEY")
                .filter(|k| !k.is_empty())
                .ok_or(ConfigError::Missing("OPENAI_API_KEY", "USE_REAL_AI=true"))?;
            let mut openai = OpenAiConfig::new(SecretString::from(api_key));
            if let Some(base_url) = var("OPENAI_BASE_URL") {
                openai = openai.with_base_url(base_url);
            }
            GenerationConfig::Live(openai)
        } else {
            GenerationConfig::Mock {
                min_delay: Duration::from_millis(parse_or(var("MOCK_DELAY_MIN_MS"), 2000)),
                max_delay: Duration::from_millis(parse_or(var("MOCK_DELAY_MAX_MS"), 4000)),
            }
        };

        let media = match (
            var("CLOUDINARY_CLOUD_NAME"),
            var("CLOUDINARY_API_KEY"),
            var("CLOUDINARY_API_SECRET"),
        ) {
            (Some(cloud), Some(key), Some(secret)) => Some(CloudinaryConfig::new(
                cloud,
                key,
                SecretString::from(secret),
            )),
            _ => None,
        };

        let url = var("DATABASE_URL");
        let database = match DatabaseConfig::demo_mode_reason(url.as_deref()) {
            Some(reason) => {
                tracing::warn!(reason, "Post store disabled, running in demo mode");
                None
            }
            None => url.map(|url| {
                let mut db = DatabaseConfig::new(url);
                db.max_connections = parse_or(var("DB_MAX_CONNECTIONS"), 10);
                db.min_connections = parse_or(var("DB_MIN_CONNECTIONS"), 1);
                db.query_timeout = Duration::from_secs(parse_or(var("DB_QUERY_TIMEOUT_SECS"), 5));
                db
            }),
        };

        let cors = CorsConfig {
            allowed_origins: var("CORS_ALLOWED_ORIGINS")
                .map(|v| split_list(&v))
                .unwrap_or_else(|| CorsConfig::default().allowed_origins),
            allowed_suffixes: var("CORS_ALLOWED_SUFFIXES")
                .map(|v| split_list(&v))
                .unwrap_or_else(|| CorsConfig::default().allowed_suffixes),
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port: var("PORT").and_then(|p| p.parse().ok()).unwrap_or(8080),
            generation,
            media,
            database,
            cors,
            json_limit: DEFAULT_JSON_LIMIT,
        })
    }
}

/// Parsed value, or `default` when unset or out of range for `T`.
fn parse_or<T: FromStr>(value: Option<String>, default: T) -> T {
    value.and_then(|s| s.trim().parse().ok()).unwrap_or(default)
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
