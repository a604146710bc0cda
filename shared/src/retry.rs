//! Capped exponential backoff for initial page loads.

use std::future::Future;

use tracing::warn;

use crate::error::ApiError;

/// Backoff parameters. Mutations never go through here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RetryPolicy {
    /// Attempts after the first one.
    pub retries: u32,
    /// Delay before the first retry.
    pub base_delay_ms: u64,
    /// Upper bound for any single delay.
    pub max_delay_ms: u64,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            retries: 3,
            base_delay_ms: 1_000,
            max_delay_ms: 30_000,
        }
    }
}

impl RetryPolicy {
    /// Never retry.
    pub const fn none() -> Self {
        Self {
            retries: 0,
            base_delay_ms: 0,
            max_delay_ms: 0,
        }
    }

    /// `min(base * 2^attempt, cap)` for the zero-based retry `attempt`.
    pub fn delay_for(&self, attempt: u32) -> u64 {
        let factor = 1u64.checked_shl(attempt).unwrap_or(u64::MAX);
        self.base_delay_ms.saturating_mul(factor).min(self.max_delay_ms)
    }
}

/// Run `op` until it succeeds, fails with a non-retryable error, or the
/// policy's retries are spent. `sleep` is awaited between attempts so callers
/// choose the timer (browser timeout in the app, a no-op in tests).
pub async fn retry_with_backoff<T, Op, Fut, Sleep, SleepFut>(
    policy: RetryPolicy,
    mut op: Op,
    mut sleep: Sleep,
) -> Result<T, ApiError>
where
    Op: FnMut() -> Fut,
    Fut: Future<Output = Result<T, ApiError>>,
    Sleep: FnMut(u64) -> SleepFut,
    SleepFut: Future<Output = ()>,
{
    let mut attempt = 0;
    loop {
        match op().await {
            Ok(value) => return Ok(value),
            Err(err) if err.is_retryable() && attempt < policy.retries => {
                let delay = policy.delay_for(attempt);
                warn!(attempt = attempt + 1, delay_ms = delay, error = %err, "retrying request");
                sleep(delay).await;
                attempt += 1;
            },
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::{Cell, RefCell};

    use super::*;

    #[test]
    fn delays_double_up_to_the_cap() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(0), 1_000);
        assert_eq!(policy.delay_for(1), 2_000);
        assert_eq!(policy.delay_for(4), 16_000);
        assert_eq!(policy.delay_for(5), 30_000);
        assert_eq!(policy.delay_for(80), 30_000);
    }

    #[tokio::test]
    async fn transient_failures_are_retried_until_success() {
        let calls = Cell::new(0u32);
        let slept = RefCell::new(Vec::new());
        let result = retry_with_backoff(
            RetryPolicy::default(),
            || {
                calls.set(calls.get() + 1);
                let attempt = calls.get();
                async move {
                    if attempt < 3 {
                        Err(ApiError::Network("reset".to_string()))
                    } else {
                        Ok(attempt)
                    }
                }
            },
            |ms| {
                slept.borrow_mut().push(ms);
                async {}
            },
        )
        .await;

        assert_eq!(result, Ok(3));
        assert_eq!(slept.into_inner(), vec![1_000, 2_000]);
    }

    #[tokio::test]
    async fn server_errors_with_a_message_are_still_retried() {
        let calls = Cell::new(0u32);
        let result = retry_with_backoff(
            RetryPolicy::default(),
            || {
                calls.set(calls.get() + 1);
                let attempt = calls.get();
                async move {
                    if attempt == 1 {
                        Err(ApiError::from_status(503, Some("Server error".to_string())))
                    } else {
                        Ok("articles")
                    }
                }
            },
            |_| async {},
        )
        .await;

        assert_eq!(result, Ok("articles"));
        assert_eq!(calls.get(), 2);
    }

    #[tokio::test]
    async fn gives_up_after_policy_retries() {
        let calls = Cell::new(0u32);
        let result: Result<(), _> = retry_with_backoff(
            RetryPolicy::default(),
            || {
                calls.set(calls.get() + 1);
                async { Err(ApiError::http(503)) }
            },
            |_| async {},
        )
        .await;

        assert_eq!(result, Err(ApiError::http(503)));
        assert_eq!(calls.get(), 4);
    }

    #[tokio::test]
    async fn business_errors_fail_fast() {
        let calls = Cell::new(0u32);
        let result: Result<(), _> = retry_with_backoff(
            RetryPolicy::default(),
            || {
                calls.set(calls.get() + 1);
                async { Err(ApiError::Business("Failed to fetch articles".to_string())) }
            },
            |_| async {},
        )
        .await;

        assert!(matches!(result, Err(ApiError::Business(_))));
        assert_eq!(calls.get(), 1);
    }
}
