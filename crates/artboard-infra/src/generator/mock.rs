//! Placeholder image generator with simulated provider latency.

use std::time::Duration;

use async_trait::async_trait;

use artboard_core::ports::{GenerationError, GenerationMode, ImageGenerator};
use artboard_shared::Variant;

/// Returns the keyword placeholder for a prompt after a random delay in
/// `[min_delay, max_delay)`.
#[derive(Debug, Clone)]
pub struct MockImageGenerator {
    min_delay: Duration,
    max_delay: Duration,
}

impl Default for MockImageGenerator {
    fn default() -> Self {
        Self::new(Duration::from_secs(2), Duration::from_secs(4))
    }
}

impl MockImageGenerator {
    pub fn new(min_delay: Duration, max_delay: Duration) -> Self {
        Self {
            min_delay,
            max_delay: max_delay.max(min_delay),
        }
    }

    fn sample_delay(&self) -> Duration {
        let min = self.min_delay.as_millis() as u64;
        let max = self.max_delay.as_millis() as u64;
        if max <= min {
            return self.min_delay;
        }
        Duration::from_millis(rand::random_range(min..max))
    }
}

#[async_trait]
impl ImageGenerator for MockImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        let variant = Variant::select(prompt);
        let delay = self.sample_delay();
        tracing::debug!(%variant, delay_ms = delay.as_millis() as u64, "Serving placeholder image");

        // Timer wait, so concurrent requests are not serialized.
        tokio::time::sleep(delay).await;
        Ok(variant.base64())
    }

    fn mode(&self) -> GenerationMode {
        GenerationMode::Mock
    }
}
