//! Tokio-backed sleeper used by the bootstrap binary.

use crate::replica_set::ports::Sleeper;
use async_trait::async_trait;
use std::time::Duration;

/// Sleeper that suspends on the tokio timer.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioSleeper;

#[async_trait]
impl Sleeper for TokioSleeper {
    async fn sleep(&self, interval: Duration) {
        tokio::time::sleep(interval).await;
    }
}
