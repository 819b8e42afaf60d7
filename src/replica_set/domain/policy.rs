//! Bounded polling policy for writable-primary checks.

use super::ReplicaSetDomainError;
use std::time::Duration;

/// Polling attempts allowed when none are configured.
pub const DEFAULT_POLL_ATTEMPTS: u32 = 60;

/// Pause between polling attempts when none is configured.
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_millis(1000);

/// Number of `hello` attempts and the pause that follows each negative one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PollPolicy {
    max_attempts: u32,
    interval: Duration,
}

impl PollPolicy {
    /// Creates a polling policy.
    ///
    /// # Errors
    ///
    /// Returns [`ReplicaSetDomainError::ZeroPollAttempts`] when
    /// `max_attempts` is zero.
    pub const fn new(max_attempts: u32, interval: Duration) -> Result<Self, ReplicaSetDomainError> {
        if max_attempts == 0 {
            return Err(ReplicaSetDomainError::ZeroPollAttempts);
        }
        Ok(Self {
            max_attempts,
            interval,
        })
    }

    /// Returns the maximum number of polling attempts.
    #[must_use]
    pub const fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Returns the pause after each negative attempt.
    #[must_use]
    pub const fn interval(&self) -> Duration {
        self.interval
    }

    /// Returns the longest time the policy can spend sleeping.
    #[must_use]
    pub fn budget(&self) -> Duration {
        self.interval.saturating_mul(self.max_attempts)
    }
}

impl Default for PollPolicy {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_POLL_ATTEMPTS,
            interval: DEFAULT_POLL_INTERVAL,
        }
    }
}
