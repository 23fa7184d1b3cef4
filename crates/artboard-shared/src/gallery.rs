//! Client-side gallery view logic: search filtering and empty states.

use crate::dto::PostResponse;

/// Posts whose author or prompt contains `term`, case-insensitively.
/// A blank term keeps everything.
pub fn search<'a>(posts: &'a [PostResponse], term: &str) -> Vec<&'a PostResponse> {
    let term = term.trim().to_lowercase();
    posts
        .iter()
        .filter(|post| {
            term.is_empty()
                || post.name.to_lowercase().contains(&term)
                || post.prompt.to_lowercase().contains(&term)
        })
        .collect()
}

/// What to show when there is nothing to list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EmptyState {
    /// Nobody has posted yet (or the store is offline).
    Welcome,
    /// A search matched nothing.
    NoResults { term: String },
}

impl EmptyState {
    /// Empty state for a rendered gallery, or `None` when there are posts to show.
    pub fn for_gallery(shown: usize, term: Option<&str>) -> Option<Self> {
        if shown > 0 {
            return None;
        }
        match term.map(str::trim) {
            Some(term) if !term.is_empty() => Some(EmptyState::NoResults {
                term: term.to_string(),
            }),
            _ => Some(EmptyState::Welcome),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            EmptyState::Welcome => "Welcome to the Community Gallery!",
            EmptyState::NoResults { .. } => "No Results Found",
        }
    }

    pub fn subtitle(&self) -> String {
        match self {
            EmptyState::Welcome => "No images have been shared yet. Be the first to create and \
                                    share an amazing AI-generated image with the community!"
                .to_string(),
            EmptyState::NoResults { term } => format!(
                "No images found for \"{term}\". Try searching with different keywords like \
                 \"sunset\", \"abstract\", or \"nature\"."
            ),
        }
    }
}
