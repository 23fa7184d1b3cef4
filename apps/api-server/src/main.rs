//! # Artboard API Server
//!
//! The main entry point for the Actix-web HTTP server.

use actix_web::{App, HttpServer, middleware::NormalizePath, web};
use tracing_actix_web::TracingLogger;

mod config;
mod handlers;
mod middleware;
mod observability;
mod state;
mod telemetry;

use config::AppConfig;
use middleware::cors::cors_policy;
use middleware::error::json_config;
use observability::RequestIdMiddleware;
use state::AppState;
use telemetry::TelemetryConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    telemetry::init_telemetry(&TelemetryConfig::from_env());

    let config = AppConfig::from_env().map_err(|e| {
        tracing::error!("Invalid configuration: {}", e);
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    tracing::info!(
        "Starting Artboard API Server on {}:{}",
        config.host,
        config.port
    );

    let AppConfig {
        host,
        port,
        generation,
        media,
        database,
        cors,
        json_limit,
    } = config;

    let state = AppState::new(generation, media, database.as_ref()).await;

    HttpServer::new(move || {
        App::new()
            .wrap(NormalizePath::trim())
            .wrap(TracingLogger::default())
            .wrap(RequestIdMiddleware)
            .wrap(cors_policy(&cors))
            .app_data(web::Data::new(state.clone()))
            .app_data(json_config(json_limit))
            .configure(handlers::configure_routes)
            .default_service(web::to(handlers::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
