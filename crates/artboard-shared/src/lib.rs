//! # Artboard Shared
//!
//! Types shared between the API server and its clients.
//! Nothing in here touches the network or the database, so the gallery CLI
//! and the server agree on wire shapes and placeholder images by construction.

pub mod dto;
pub mod gallery;
pub mod placeholder;
pub mod response;

pub use placeholder::Variant;
pub use response::{ApiResponse, ErrorResponse};
