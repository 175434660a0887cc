//! Bounded retry with exponential backoff for transient GitHub failures.

use std::future::Future;
use std::time::Duration;

use tracing::debug;

use crate::github::FetchError;

const DEFAULT_BASE_DELAY: Duration = Duration::from_millis(500);
const MAX_DELAY: Duration = Duration::from_secs(8);

/// How many times a request is tried and how long to wait in between.
///
/// Delays double each attempt (500ms, 1s, 2s with the default base), capped at 8s.
#[derive(Debug, Clone)]
pub struct RetryPolicy {
    /// Attempts including the first one. Never below 1.
    max_attempts: u32,
    base_delay: Duration,
}

impl RetryPolicy {
    /// Policy allowing `retries` extra attempts after the first.
    pub fn new(retries: u32) -> Self {
        RetryPolicy {
            max_attempts: retries.saturating_add(1),
            base_delay: DEFAULT_BASE_DELAY,
        }
    }

    pub fn with_base_delay(mut self, base_delay: Duration) -> Self {
        self.base_delay = base_delay;
        self
    }

    /// Delay before the attempt following `attempt` (1-indexed).
    fn delay_after(&self, attempt: u32) -> Duration {
        let factor = 2u32.saturating_pow(attempt.saturating_sub(1));
        self.base_delay.saturating_mul(factor).min(MAX_DELAY)
    }

    /// Run `op` until it succeeds, fails permanently, or attempts run out.
    pub async fn run<T, F, Fut>(&self, what: &str, mut op: F) -> Result<T, FetchError>
    where
        F: FnMut() -> Fut,
        Fut: Future<Output = Result<T, FetchError>>,
    {
        let mut attempt = 1;
        loop {
            match op().await {
                Ok(value) => return Ok(value),
                Err(err) if err.is_transient() && attempt < self.max_attempts => {
                    let delay = self.delay_after(attempt);
                    debug!(
                        what,
                        attempt,
                        delay_ms = delay.as_millis() as u64,
                        error = %err,
                        "transient failure, retrying"
                    );
                    tokio::time::sleep(delay).await;
                    attempt += 1;
                }
                Err(err) => return Err(err),
            }
        }
    }
}
