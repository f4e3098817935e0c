//! Retry strategies for platform calls.
//!
//! Only transient failures are retried; the caller decides what counts as
//! transient through the predicate passed to [`RetryStrategy::execute_if`].

use std::time::Duration;

use crate::config::retry as retry_config;

/// Trait for defining retry strategies.
///
/// Implementations define how many attempts to make and how long to wait
/// between each attempt.
pub trait RetryStrategy {
    /// Maximum number of attempts, including the first one.
    fn max_attempts(&self) -> u32;

    /// Delay after the given failed attempt (0-indexed).
    fn delay_for_attempt(&self, attempt: u32) -> Option<Duration>;

    /// Execute a function with retry logic.
    ///
    /// Calls `f` up to `max_attempts()` times. An error for which `retryable`
    /// returns `false` is returned immediately.
    fn execute_if<T, E, F, P>(&self, mut f: F, retryable: P) -> Result<T, E>
    where
        F: FnMut(u32) -> Result<T, E>,
        P: Fn(&E) -> bool,
    {
        let max = self.max_attempts().max(1);
        let mut attempt = 0;

        loop {
            match f(attempt) {
                Ok(value) => return Ok(value),
                Err(e) => {
                    if attempt + 1 >= max || !retryable(&e) {
                        return Err(e);
                    }
                    if let Some(delay) = self.delay_for_attempt(attempt) {
                        tracing::debug!("Attempt {} failed, retrying in {:?}", attempt + 1, delay);
                        std::thread::sleep(delay);
                    }
                    attempt += 1;
                }
            }
        }
    }
}

/// Exponential backoff retry strategy.
///
/// Waits `base * 2^attempt`, capped at `max_delay`.
#[derive(Debug, Clone)]
pub struct ExponentialBackoff {
    max_attempts: u32,
    base: Duration,
    max_delay: Duration,
}

impl ExponentialBackoff {
    /// Backoff with `retries` extra attempts and the configured delays.
    pub fn new(retries: u32) -> Self {
        Self::with_delays(
            retries,
            Duration::from_millis(retry_config::BASE_DELAY_MS),
            Duration::from_millis(retry_config::MAX_DELAY_MS),
        )
    }

    pub fn with_delays(retries: u32, base: Duration, max_delay: Duration) -> Self {
        Self {
            max_attempts: retries.saturating_add(1),
            base,
            max_delay,
        }
    }
}

impl RetryStrategy for ExponentialBackoff {
    fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    fn delay_for_attempt(&self, attempt: u32) -> Option<Duration> {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        Some(self.base.saturating_mul(factor).min(self.max_delay))
    }
}

/// No retry strategy - attempt once and return the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoRetry;

impl NoRetry {
    /// Create a no-retry strategy.
    pub fn new() -> Self {
        Self
    }
}

impl RetryStrategy for NoRetry {
    fn max_attempts(&self) -> u32 {
        1
    }

    fn delay_for_attempt(&self, _attempt: u32) -> Option<Duration> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn always<E>(_: &E) -> bool {
        true
    }

    #[test]
    fn test_exponential_backoff_delays() {
        let strategy = ExponentialBackoff::new(5);

        assert_eq!(strategy.max_attempts(), 6);
        assert_eq!(
            strategy.delay_for_attempt(0),
            Some(Duration::from_millis(500))
        );
        assert_eq!(
            strategy.delay_for_attempt(1),
            Some(Duration::from_millis(1000))
        );
        assert_eq!(
            strategy.delay_for_attempt(3),
            Some(Duration::from_millis(4000))
        );
        assert_eq!(
            strategy.delay_for_attempt(4),
            Some(Duration::from_millis(8000))
        );
        assert_eq!(
            strategy.delay_for_attempt(40),
            Some(Duration::from_millis(8000))
        );
    }

    #[test]
    fn test_no_retry() {
        let strategy = NoRetry::new();

        assert_eq!(strategy.max_attempts(), 1);
        assert_eq!(strategy.delay_for_attempt(0), None);
    }

    #[test]
    fn test_execute_success_after_retry() {
        let strategy =
            ExponentialBackoff::with_delays(2, Duration::from_millis(1), Duration::from_millis(1));
        let mut attempts = 0;
        let result: Result<i32, &str> = strategy.execute_if(
            |_| {
                attempts += 1;
                if attempts < 3 { Err("not yet") } else { Ok(42) }
            },
            always,
        );
        assert_eq!(result, Ok(42));
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_execute_all_failures() {
        let strategy =
            ExponentialBackoff::with_delays(2, Duration::from_millis(1), Duration::from_millis(1));
        let mut attempts = 0;
        let result: Result<i32, &str> = strategy.execute_if(
            |_| {
                attempts += 1;
                Err("always fails")
            },
            always,
        );
        assert_eq!(result, Err("always fails"));
        assert_eq!(attempts, 3);
    }

    #[test]
    fn test_permanent_error_is_not_retried() {
        let strategy =
            ExponentialBackoff::with_delays(4, Duration::from_millis(1), Duration::from_millis(1));
        let mut attempts = 0;
        let result: Result<i32, u16> = strategy.execute_if(
            |_| {
                attempts += 1;
                Err(404)
            },
            |status| *status >= 500,
        );
        assert_eq!(result, Err(404));
        assert_eq!(attempts, 1);
    }

    #[test]
    fn test_no_retry_execute() {
        let strategy = NoRetry::new();
        let mut attempts = 0;
        let result: Result<i32, &str> = strategy.execute_if(
            |_| {
                attempts += 1;
                Err("failed")
            },
            always,
        );
        assert_eq!(result, Err("failed"));
        assert_eq!(attempts, 1);
    }
}
