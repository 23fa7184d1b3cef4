//! Services - the gallery flows, expressed over ports.

mod gallery;
mod image;

pub use gallery::GalleryService;
pub use image::ImageService;

#[cfg(test)]
pub(crate) mod fakes;
