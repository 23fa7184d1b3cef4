//! Terminal rendering of the gallery and image payloads.

use std::fmt::Write;
use std::path::Path;

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use artboard_shared::dto::PostResponse;
use artboard_shared::gallery::{EmptyState, search};

/// File extension matching decoded image bytes.
pub fn image_extension(bytes: &[u8]) -> &'static str {
    let head = String::from_utf8_lossy(&bytes[..bytes.len().min(256)]);
    if head.contains("<svg") {
        "svg"
    } else if bytes.starts_with(&[0xFF, 0xD8, 0xFF]) {
        "jpg"
    } else {
        "png"
    }
}

pub fn decode_image(b64: &str) -> Result<Vec<u8>> {
    STANDARD
        .decode(b64.trim())
        .context("server returned an invalid base64 image")
}

/// Turn `--image` into a payload the server accepts: URLs pass through,
/// files become data URLs.
pub fn photo_payload(image: &str) -> Result<String> {
    if image.starts_with("http://") || image.starts_with("https://") || image.starts_with("data:") {
        return Ok(image.to_string());
    }

    let path = Path::new(image);
    let bytes = std::fs::read(path).with_context(|| format!("cannot read {}", path.display()))?;
    let mime = match image_extension(&bytes) {
        "svg" => "image/svg+xml",
        "jpg" => "image/jpeg",
        _ => "image/png",
    };
    Ok(format!("data:{mime};base64,{}", STANDARD.encode(bytes)))
}

/// Gallery listing, filtered by `term` when one is given.
pub fn gallery(posts: &[PostResponse], term: Option<&str>) -> String {
    let shown = match term {
        Some(t) if !t.trim().is_empty() => search(posts, t),
        _ => posts.iter().collect(),
    };

    let mut out = String::new();
    if let Some(t) = term.filter(|t| !t.trim().is_empty()) {
        let _ = writeln!(out, "Showing results for \"{}\"", t.trim());
    }

    if let Some(empty) = EmptyState::for_gallery(shown.len(), term) {
        let _ = writeln!(out, "{}", empty.title());
        let _ = writeln!(out, "{}", empty.subtitle());
        return out;
    }

    for post in shown {
        let _ = writeln!(out, "{}  by {}", post.prompt, post.name);
        let _ = writeln!(out, "    {}", post.photo);
    }
    out
}
