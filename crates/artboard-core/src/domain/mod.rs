//! Domain entities - the core business objects.

mod outcome;
mod post;

pub use outcome::{DemoReason, StoreOutcome};
pub use post::{DEMO_PHOTO, NewPost, Post};
