//! Pacing port for the polling loop.

use async_trait::async_trait;
use std::time::Duration;

/// Suspends the bootstrap between polling attempts.
#[async_trait]
pub trait Sleeper: Send + Sync {
    /// Waits for `interval` before returning.
    async fn sleep(&self, interval: Duration);
}
