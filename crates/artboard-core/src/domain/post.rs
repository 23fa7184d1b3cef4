use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Photo reference carried by stand-in posts that were never stored.
pub const DEMO_PHOTO: &str = "demo-image.jpg";

/// A published gallery entry. Immutable once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Post {
    pub id: Uuid,
    pub name: String,
    pub prompt: String,
    /// Durable URL on the media host.
    pub photo: String,
    pub created_at: DateTime<Utc>,
}

impl Post {
    /// Create a new post with a fresh id and timestamp.
    pub fn new(name: String, prompt: String, photo: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            name,
            prompt,
            photo,
            created_at: Utc::now(),
        }
    }

    /// Unpersisted record returned while the store is offline.
    pub fn demo_stand_in(name: String, prompt: String) -> Self {
        Self::new(name, prompt, DEMO_PHOTO.to_string())
    }
}

/// Input of the create-post flow. `photo` is the client payload
/// (data URL, remote URL or raw base64), not yet uploaded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPost {
    pub name: String,
    pub prompt: String,
    pub photo: String,
}
