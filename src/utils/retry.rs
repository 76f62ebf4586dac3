//! Retry utilities with exponential backoff for provider calls.

use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

use crate::sources::SourceError;

/// Configuration for retry behavior
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RetryConfig {
    /// Maximum number of attempts, including the first one
    pub max_attempts: u32,
    /// Delay before the first retry
    pub initial_delay: Duration,
    /// Upper bound for any single delay
    pub max_delay: Duration,
    /// Multiplier for exponential backoff
    pub backoff_multiplier: f64,
}

impl Default for RetryConfig {
    fn default() -> Self {
        Self {
            max_attempts: 4,
            initial_delay: Duration::from_secs(1),
            max_delay: Duration::from_secs(30),
            backoff_multiplier: 2.0,
        }
    }
}

impl RetryConfig {
    /// Retry policy allowing `retries` extra attempts after the first
    pub fn with_retries(retries: u32) -> Self {
        Self {
            max_attempts: retries.saturating_add(1),
            ..Default::default()
        }
    }

    /// Set the delay before the first retry
    pub fn initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    /// Delay before retry number `retry` (1-based)
    pub fn delay_for(&self, retry: u32) -> Duration {
        let factor = self.backoff_multiplier.powi(retry.saturating_sub(1) as i32);
        let secs = self.initial_delay.as_secs_f64() * factor;
        Duration::from_secs_f64(secs.min(self.max_delay.as_secs_f64()))
    }
}

/// Execute an async operation, retrying transient [`SourceError`]s
///
/// Permanent errors are returned immediately; transient ones are retried
/// until `config.max_attempts` is reached, after which the last error is
/// returned.
pub async fn with_retry<T, F, Fut>(config: RetryConfig, mut operation: F) -> Result<T, SourceError>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, SourceError>>,
{
    let mut attempts = 0;

    loop {
        attempts += 1;

        match operation().await {
            Ok(result) => {
                if attempts > 1 {
                    tracing::info!("Operation succeeded on attempt {}", attempts);
                }
                return Ok(result);
            }
            Err(error) if error.is_transient() && attempts < config.max_attempts => {
                let delay = config.delay_for(attempts);
                tracing::warn!(
                    "Transient error on attempt {}/{}: {}, retrying in {:?}",
                    attempts,
                    config.max_attempts,
                    error,
                    delay
                );
                sleep(delay).await;
            }
            Err(error) => {
                if attempts > 1 {
                    tracing::warn!("Operation failed after {} attempts: {}", attempts, error);
                }
                return Err(error);
            }
        }
    }
}
