//! Retry with exponential backoff for generation-service calls.
//!
//! The combinator is deliberately small: a fixed attempt budget, a backoff
//! floor that doubles per attempt, and bounded random jitter on top. Which
//! failures are worth retrying is decided by [`Error::is_retryable`], not
//! here.
//!
//! # Example
//!
//! ```rust,ignore
//! use vitrine::retry::{with_retry, RetryPolicy};
//!
//! let policy = RetryPolicy::exponential(3);
//! let response = with_retry(&policy, || async {
//!     client.post(&url).json(&request).send().await.map_err(into_transport_error)
//! })
//! .await?;
//! ```

use std::future::Future;
use std::time::Duration;

use rand::Rng;

use crate::error::{Error, Result};

/// Retry policy for calls to the generation service.
///
/// `max_attempts` counts every attempt including the first, so
/// `exponential(3)` makes at most three calls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Total attempt budget, including the first attempt
    pub max_attempts: u32,
    /// Backoff floor before the first retry; doubles for each retry after
    pub backoff_base: Duration,
    /// Upper bound of the random jitter added to every backoff
    pub jitter_max: Duration,
}

impl RetryPolicy {
    /// Exponential backoff with jitter: 500ms floor, 300ms jitter bound.
    #[must_use]
    pub fn exponential(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            backoff_base: Duration::from_millis(500),
            jitter_max: Duration::from_millis(300),
        }
    }

    /// A single attempt, no retries.
    #[must_use]
    pub fn no_retry() -> Self {
        Self::exponential(1)
    }

    /// Override the backoff floor.
    #[must_use]
    pub fn with_backoff_base(mut self, base: Duration) -> Self {
        self.backoff_base = base;
        self
    }

    /// Override the jitter bound.
    #[must_use]
    pub fn with_jitter_max(mut self, jitter: Duration) -> Self {
        self.jitter_max = jitter;
        self
    }

    /// Delay before the retry that follows failed attempt `attempt` (0-based):
    /// `2^attempt * backoff_base + uniform(0, jitter_max)`.
    fn backoff(&self, attempt: u32) -> Duration {
        let floor = self.backoff_base.saturating_mul(2u32.saturating_pow(attempt));
        let jitter_ms = self.jitter_max.as_millis() as u64;
        floor.saturating_add(Duration::from_millis(
            rand::thread_rng().gen_range(0..=jitter_ms),
        ))
    }
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self::exponential(3)
    }
}

/// Run `operation` under `policy`, retrying retryable failures.
///
/// Attempts are strictly sequential; there is never more than one in
/// flight. Once the budget is spent the final error is returned unchanged.
pub async fn with_retry<T, F, Fut>(policy: &RetryPolicy, mut operation: F) -> Result<T>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T>>,
{
    let mut attempt: u32 = 0;
    loop {
        match operation().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt + 1 < policy.max_attempts => {
                let delay = policy.backoff(attempt);
                tracing::debug!(
                    attempt = attempt + 1,
                    ?delay,
                    error = %err,
                    "attempt failed, backing off"
                );
                tokio::time::sleep(delay).await;
                attempt += 1;
            }
            Err(err) => {
                if err.is_retryable() {
                    tracing::warn!(attempts = attempt + 1, error = %err, "giving up");
                }
                return Err(err);
            }
        }
    }
}
