//! Image generators - keyword placeholders and a live provider.

mod mock;
mod openai;

pub use mock::MockImageGenerator;
pub use openai::{OpenAiConfig, OpenAiImageGenerator};
