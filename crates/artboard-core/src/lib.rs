//! # Artboard Core
//!
//! The domain layer of the Artboard gallery.
//! Posts, the ports the gallery talks through, and the two services that
//! sit on top of them. No database or HTTP code lives here.

pub mod domain;
pub mod error;
pub mod ports;
pub mod services;

pub use error::DomainError;
pub use services::{GalleryService, ImageService};
