//! Evaluate-then-retry loop with configurable backoff
//!
//! Unlike error-driven retry, every attempt here produces a value and the
//! caller decides whether that value is good enough. The loop stops at the
//! first satisfying value or when the attempt budget is spent, and always
//! hands back the most recent value.
//!
//! # Example
//!
//! ```no_run
//! use ytdlp_server::config::RetryConfig;
//! use ytdlp_server::retry::retry_until;
//!
//! # async fn example() {
//! let config = RetryConfig::default();
//! let state = retry_until(&config, |attempt| async move { attempt * 2 }, |value| *value >= 6).await;
//! assert!(state.satisfied);
//! assert_eq!(state.attempt_number, 3);
//! # }
//! ```

use crate::config::RetryConfig;
use rand::Rng;
use std::future::Future;
use std::time::Duration;

/// Outcome of a retry loop
///
/// Only the last attempt's value is retained.
#[derive(Debug, Clone)]
pub struct RetryState<T> {
    /// Number of the last attempt performed (1-based, never above `max_attempts`)
    pub attempt_number: u32,
    /// Value produced by the last attempt
    pub last_result: T,
    /// Whether the last value satisfied the predicate
    pub satisfied: bool,
}

/// Run `operation` until `is_satisfied` accepts its value or attempts run out
///
/// `operation` receives the 1-based attempt number. Attempts are strictly
/// sequential. Between attempts the loop sleeps for the configured delay;
/// no sleep happens after the final attempt.
///
/// # Arguments
///
/// * `config` - Attempt budget, delays, backoff multiplier and jitter
/// * `operation` - Async closure producing one value per attempt
/// * `is_satisfied` - Predicate deciding whether to stop
pub async fn retry_until<F, Fut, T, P>(
    config: &RetryConfig,
    mut operation: F,
    mut is_satisfied: P,
) -> RetryState<T>
where
    F: FnMut(u32) -> Fut,
    Fut: Future<Output = T>,
    P: FnMut(&T) -> bool,
{
    let max_attempts = config.max_attempts.max(1);
    let mut delay = config.initial_delay.min(config.max_delay);
    let mut attempt = 1;

    loop {
        let result = operation(attempt).await;

        if is_satisfied(&result) {
            if attempt > 1 {
                tracing::info!(attempts = attempt, "Target reached after retry");
            }
            return RetryState {
                attempt_number: attempt,
                last_result: result,
                satisfied: true,
            };
        }

        if attempt >= max_attempts {
            tracing::warn!(
                attempts = attempt,
                "Target not reached, all attempts exhausted"
            );
            return RetryState {
                attempt_number: attempt,
                last_result: result,
                satisfied: false,
            };
        }

        let jittered_delay = if config.jitter {
            add_jitter(delay)
        } else {
            delay
        };

        tracing::info!(
            attempt = attempt,
            max_attempts = max_attempts,
            delay_ms = delay_millis(jittered_delay),
            "Target not reached, retrying"
        );

        tokio::time::sleep(jittered_delay).await;

        // Out-of-range products saturate at the cap
        delay = Duration::try_from_secs_f64(delay.as_secs_f64() * config.backoff_multiplier)
            .unwrap_or(config.max_delay)
            .min(config.max_delay);
        attempt += 1;
    }
}

/// Whole milliseconds in `delay`, saturating at `u64::MAX`
fn delay_millis(delay: Duration) -> u64 {
    u64::try_from(delay.as_millis()).unwrap_or(u64::MAX)
}

/// Add random jitter to a delay to prevent thundering herd
///
/// Jitter is uniformly distributed between 0% and 100% of the delay.
/// This means the actual delay will be between `delay` and `2 * delay`.
/// Delays too large to scale are returned unchanged.
fn add_jitter(delay: Duration) -> Duration {
    let mut rng = rand::thread_rng();
    let jitter_factor: f64 = rng.gen_range(0.0..=1.0);
    let jittered_secs = delay.as_secs_f64() * (1.0 + jitter_factor);
    Duration::try_from_secs_f64(jittered_secs).unwrap_or(delay)
}
