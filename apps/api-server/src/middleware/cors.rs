//! CORS policy: an exact origin list plus `https://*<suffix>` host patterns.

use actix_cors::Cors;
use actix_web::http::header;

/// Origins allowed to call the API with credentials.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    /// Host suffixes such as `.vercel.app`, matched on `https` origins only.
    pub allowed_suffixes: Vec<String>,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "https://localhost:3000".to_string(),
            ],
            allowed_suffixes: vec![".vercel.app".to_string(), ".railway.app".to_string()],
        }
    }
}

impl CorsConfig {
    pub fn allows(&self, origin: &str) -> bool {
        if self.allowed_origins.iter().any(|o| o == origin) {
            return true;
        }
        let Some(host) = origin.strip_prefix("https://") else {
            return false;
        };
        self.allowed_suffixes
            .iter()
            .any(|suffix| host.len() > suffix.len() && host.ends_with(suffix.as_str()))
    }
}

/// Build the actix CORS middleware for `config`.
pub fn cors_policy(config: &CorsConfig) -> Cors {
    let config = config.clone();
    Cors::default()
        .allowed_origin_fn(move |origin, _req_head| {
            origin.to_str().map(|o| config.allows(o)).unwrap_or(false)
        })
        .allowed_methods(vec!["GET", "POST", "OPTIONS"])
        .allowed_headers(vec![header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION])
        .supports_credentials()
        .max_age(3600)
}
