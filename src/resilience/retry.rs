//! Bounded fixed-delay retry.
//!
//! # Responsibilities
//! - Re-execute an upstream call while it keeps failing with a retryable error
//! - Enforce the attempt cap (1 initial attempt + N retries)
//! - Wait a constant delay between attempts (no backoff multiplier)
//!
//! # Design Decisions
//! - Pure higher-order control flow: the caller supplies the operation and
//!   the retryable-error predicate, nothing here knows about HTTP
//! - The final failure propagates unchanged once attempts are exhausted

use std::future::Future;
use std::time::Duration;

/// Attempt cap and inter-attempt delay for one class of upstream calls.
#[derive(Debug, Clone, Copy)]
pub struct RetryPolicy {
    /// Total attempts, including the initial one. Must be at least 1.
    pub max_attempts: u32,
    /// Constant wait between attempts.
    pub delay: Duration,
}

impl RetryPolicy {
    pub fn new(max_attempts: u32, delay: Duration) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
            delay,
        }
    }
}

/// Run `op` until it succeeds, fails with a non-retryable error, or exhausts
/// the policy's attempt cap.
pub async fn with_retry<T, E, F, Fut, P>(
    policy: &RetryPolicy,
    retryable: P,
    operation: &str,
    mut op: F,
) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    P: Fn(&E) -> bool,
    E: std::fmt::Display,
{
    let mut attempt = 0u32;
    loop {
        attempt += 1;
        match op().await {
            Ok(value) => {
                if attempt > 1 {
                    tracing::info!(operation, attempt, "upstream call succeeded after retry");
                }
                return Ok(value);
            }
            Err(err) if retryable(&err) && attempt < policy.max_attempts => {
                tracing::warn!(
                    operation,
                    attempt,
                    max_attempts = policy.max_attempts,
                    delay_ms = policy.delay.as_millis() as u64,
                    "upstream rate limited, waiting before retry"
                );
                tokio::time::sleep(policy.delay).await;
            }
            Err(err) => {
                tracing::error!(operation, attempt, error = %err, "upstream call failed");
                return Err(err);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};

    const FAST: RetryPolicy = RetryPolicy {
        max_attempts: 5,
        delay: Duration::from_millis(1),
    };

    fn always(_: &String) -> bool {
        true
    }

    #[tokio::test]
    async fn first_attempt_success_does_not_retry() {
        let calls = AtomicU32::new(0);
        let result: Result<u32, String> = with_retry(&FAST, always, "test", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Ok(7) }
        })
        .await;

        assert_eq!(result.unwrap(), 7);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn retries_until_success() {
        let calls = AtomicU32::new(0);
        let result: Result<&str, String> = with_retry(&FAST, always, "test", || {
            let n = calls.fetch_add(1, Ordering::SeqCst);
            async move {
                if n < 4 {
                    Err("throttled".to_string())
                } else {
                    Ok("payload")
                }
            }
        })
        .await;

        assert_eq!(result.unwrap(), "payload");
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn exhaustion_propagates_final_error() {
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = with_retry(&FAST, always, "test", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("throttled".to_string()) }
        })
        .await;

        assert_eq!(result.unwrap_err(), "throttled");
        assert_eq!(calls.load(Ordering::SeqCst), 5);
    }

    #[tokio::test]
    async fn non_retryable_error_fails_immediately() {
        let calls = AtomicU32::new(0);
        let result: Result<(), String> = with_retry(&FAST, |_| false, "test", || {
            calls.fetch_add(1, Ordering::SeqCst);
            async { Err("fatal".to_string()) }
        })
        .await;

        assert_eq!(result.unwrap_err(), "fatal");
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn attempt_cap_has_a_floor_of_one() {
        let policy = RetryPolicy::new(0, Duration::from_millis(1));
        assert_eq!(policy.max_attempts, 1);
    }
}
