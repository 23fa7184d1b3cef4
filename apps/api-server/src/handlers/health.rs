//! Root and health check endpoints.

use actix_web::{HttpResponse, web};
use serde::Serialize;
use serde_json::json;

use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub version: &'static str,
    pub timestamp: String,
    /// `mock` or `live`.
    pub generation: &'static str,
    /// `connected` or `demo`.
    pub database: &'static str,
}

/// GET /
pub async fn root() -> HttpResponse {
    HttpResponse::Ok().json(json!({ "message": "Hello Users" }))
}

/// Health check endpoint - returns server status.
///
/// GET /api/health
pub async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    let database = if state.gallery.is_online().await {
        "connected"
    } else {
        "demo"
    };

    let response = HealthResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
        timestamp: chrono::Utc::now().to_rfc3339(),
        generation: state.images.mode().as_str(),
        database,
    };

    HttpResponse::Ok().json(response)
}
