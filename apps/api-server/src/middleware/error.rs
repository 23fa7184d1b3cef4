//! Error handling - every failure renders as `{success:false,status,message}`.

use actix_web::error::JsonPayloadError;
use actix_web::{HttpRequest, HttpResponse, ResponseError, http::StatusCode, web};
use artboard_core::DomainError;
use artboard_core::error::RepoError;
use artboard_shared::ErrorResponse;
use std::fmt;

/// Application-level error type that converts to the uniform error body.
#[derive(Debug)]
pub enum AppError {
    NotFound(String),
    BadRequest(String),
    PayloadTooLarge(String),
    /// Image provider failure; its status is passed through when known.
    Upstream { status: Option<u16>, message: String },
    /// Media host failure. The message is shown to the client.
    Upload(String),
    /// Anything else. Logged, then reported without detail.
    Internal(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::NotFound(msg) => write!(f, "Not found: {}", msg),
            AppError::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            AppError::PayloadTooLarge(msg) => write!(f, "Payload too large: {}", msg),
            AppError::Upstream { message, .. } => write!(f, "Upstream error: {}", message),
            AppError::Upload(msg) => write!(f, "Upload failed: {}", msg),
            AppError::Internal(msg) => write!(f, "Internal error: {}", msg),
        }
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Upstream { status, .. } => status
                .and_then(|s| StatusCode::from_u16(s).ok())
                .filter(|s| s.is_client_error() || s.is_server_error())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR),
            AppError::Upload(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code().as_u16();
        let error = match self {
            AppError::NotFound(msg) => ErrorResponse::not_found(msg.clone()),
            AppError::BadRequest(msg) => ErrorResponse::bad_request(msg.clone()),
            AppError::PayloadTooLarge(msg) | AppError::Upload(msg) => {
                ErrorResponse::new(status, msg.clone())
            }
            AppError::Upstream { message, .. } => ErrorResponse::new(status, message.clone()),
            AppError::Internal(detail) => {
                tracing::error!("Internal error: {}", detail);
                ErrorResponse::internal_error()
            }
        };

        HttpResponse::build(self.status_code()).json(error)
    }
}

impl From<DomainError> for AppError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => AppError::BadRequest(msg),
            DomainError::Upstream { status, message } => AppError::Upstream { status, message },
            DomainError::Upload(e) => AppError::Upload(e.to_string()),
            DomainError::Repository(e) => e.into(),
        }
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        tracing::error!("Post store error: {}", err);
        AppError::Internal(err.to_string())
    }
}

/// JSON extractor config: body size cap, and parse failures in the uniform shape.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default()
        .limit(limit)
        .error_handler(|err, _req: &HttpRequest| {
            let app_err = match &err {
                JsonPayloadError::Overflow { .. }
                | JsonPayloadError::OverflowKnownLength { .. } => {
                    AppError::PayloadTooLarge(err.to_string())
                }
                _ => AppError::BadRequest(err.to_string()),
            };
            app_err.into()
        })
}

/// Result type alias for handlers.
pub type AppResult<T> = Result<T, AppError>;
