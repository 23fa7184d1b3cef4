//! Domain-level error types.

use std::time::Duration;

use thiserror::Error;

use crate::domain::DemoReason;
use crate::ports::{GenerationError, UploadError};

/// Domain errors - what the gallery flows can fail with.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{0}")]
    Validation(String),

    /// The image provider failed; `status` is the provider's HTTP status when known.
    #[error("{message}")]
    Upstream { status: Option<u16>, message: String },

    #[error(transparent)]
    Upload(#[from] UploadError),

    #[error(transparent)]
    Repository(#[from] RepoError),
}

impl From<GenerationError> for DomainError {
    fn from(err: GenerationError) -> Self {
        DomainError::Upstream {
            status: err.status(),
            message: err.to_string(),
        }
    }
}

/// Repository-level errors.
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Database unavailable: {0}")]
    Unavailable(String),

    #[error("Query timed out after {0:?}")]
    Timeout(Duration),

    #[error("Query execution failed: {0}")]
    Query(String),

    #[error("Constraint violation: {0}")]
    Constraint(String),
}

impl RepoError {
    /// Connectivity failures degrade to demo mode; anything else is a hard error.
    pub fn demo_reason(&self) -> Option<DemoReason> {
        match self {
            RepoError::Unavailable(_) => Some(DemoReason::NotConnected),
            RepoError::Timeout(_) => Some(DemoReason::Timeout),
            RepoError::Query(_) | RepoError::Constraint(_) => None,
        }
    }
}
