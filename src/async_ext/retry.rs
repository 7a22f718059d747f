//! Async retry utilities with runtime-neutral design.
//!
//! The retry loop accepts a sleep function as a parameter; the dispatcher
//! passes `tokio::time::sleep`, tests can pass a no-op.

use core::future::Future;
use core::time::Duration;

use crate::traits::TransientError;

/// Defines a retry policy for async operations.
///
/// Implementations determine when and how long to wait between retry attempts.
pub trait RetryPolicy: Clone {
    /// Returns the delay before the next retry attempt, or `None` to stop retrying.
    ///
    /// # Arguments
    ///
    /// * `attempt` - The number of retries already made (0-indexed)
    fn next_delay(&mut self, attempt: u32) -> Option<Duration>;
}

/// Upper bound on a server-provided retry-after hint.
///
/// A `Retry-After` longer than this is clamped; the policy's own delay is
/// never clamped.
pub const MAX_RETRY_AFTER: Duration = Duration::from_secs(60);

/// Policy that never retries: one attempt, then report the failure.
///
/// This is the dispatcher's default.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoRetry;

impl RetryPolicy for NoRetry {
    #[inline]
    fn next_delay(&mut self, _attempt: u32) -> Option<Duration> {
        None
    }
}

/// Exponential backoff retry policy.
///
/// Each retry waits exponentially longer than the previous one, up to a maximum
/// delay.
///
/// # Example
///
/// ```rust
/// use purchase_rail::async_ext::ExponentialBackoff;
/// use core::time::Duration;
///
/// let policy = ExponentialBackoff {
///     initial_delay: Duration::from_millis(100),
///     max_delay: Duration::from_secs(10),
///     max_attempts: 5,
///     multiplier: 2.0,
/// };
///
/// // Delays: 100ms, 200ms, 400ms, 800ms, 1600ms (capped at 10s)
/// ```
#[derive(Clone, Debug)]
pub struct ExponentialBackoff {
    /// Initial delay before first retry.
    pub initial_delay: Duration,
    /// Maximum delay between retries.
    pub max_delay: Duration,
    /// Maximum number of retry attempts.
    pub max_attempts: u32,
    /// Multiplier applied to delay after each attempt.
    pub multiplier: f64,
}

impl Default for ExponentialBackoff {
    fn default() -> Self {
        Self {
            initial_delay: Duration::from_millis(100),
            max_delay: Duration::from_secs(30),
            max_attempts: 3,
            multiplier: 2.0,
        }
    }
}

impl ExponentialBackoff {
    /// Creates a new exponential backoff policy with default settings.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn with_initial_delay(mut self, delay: Duration) -> Self {
        self.initial_delay = delay;
        self
    }

    #[inline]
    pub fn with_max_delay(mut self, delay: Duration) -> Self {
        self.max_delay = delay;
        self
    }

    #[inline]
    pub fn with_max_attempts(mut self, attempts: u32) -> Self {
        self.max_attempts = attempts;
        self
    }

    #[inline]
    pub fn with_multiplier(mut self, multiplier: f64) -> Self {
        self.multiplier = multiplier;
        self
    }
}

impl RetryPolicy for ExponentialBackoff {
    fn next_delay(&mut self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_attempts {
            return None;
        }
        // Past `u64::MAX` seconds (or on NaN) the conversion fails; that is above any cap.
        let delay = Duration::try_from_secs_f64(
            self.initial_delay.as_secs_f64() * self.multiplier.powi(attempt as i32),
        )
        .map_or(self.max_delay, |delay| delay.min(self.max_delay));
        Some(delay)
    }
}

/// Fixed delay retry policy.
///
/// Waits the same duration between each retry attempt.
#[derive(Clone, Debug)]
pub struct FixedDelay {
    /// Delay between retry attempts.
    pub delay: Duration,
    /// Maximum number of retry attempts.
    pub max_attempts: u32,
}

impl FixedDelay {
    #[inline]
    pub fn new(delay: Duration, max_attempts: u32) -> Self {
        Self { delay, max_attempts }
    }
}

impl RetryPolicy for FixedDelay {
    fn next_delay(&mut self, attempt: u32) -> Option<Duration> {
        if attempt >= self.max_attempts {
            None
        } else {
            Some(self.delay)
        }
    }
}

/// Result of a retry loop together with how it got there.
#[derive(Debug)]
pub struct RetryOutcome<T, E> {
    /// The final result; on failure, the error of the last attempt.
    pub result: Result<T, E>,
    /// Total number of attempts made, at least 1.
    pub attempts: u32,
    /// Total time spent waiting (not including operation time).
    pub total_wait_time: Duration,
}

/// Retries an async operation according to a policy when transient errors occur.
///
/// Permanent errors end the loop immediately. A `retry_after_hint` from the
/// error, clamped to [`MAX_RETRY_AFTER`], lengthens the policy's delay but
/// never shortens it.
///
/// # Arguments
///
/// * `operation` - A closure that returns the future to retry
/// * `policy` - The retry policy to use
/// * `sleep_fn` - A function that returns a sleep future for the given duration
pub async fn retry_with_policy<F, Fut, T, E, P, S, SFut>(
    mut operation: F,
    mut policy: P,
    sleep_fn: S,
) -> RetryOutcome<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: TransientError,
    P: RetryPolicy,
    S: Fn(Duration) -> SFut,
    SFut: Future<Output = ()>,
{
    let mut attempt = 0u32;
    let mut total_wait_time = Duration::ZERO;

    loop {
        let error = match operation().await {
            Ok(value) => {
                return RetryOutcome { result: Ok(value), attempts: attempt + 1, total_wait_time }
            }
            Err(e) => e,
        };

        let delay = if error.is_transient() { policy.next_delay(attempt) } else { None };
        match delay {
            Some(delay) => {
                let delay = error
                    .retry_after_hint()
                    .map_or(delay, |hint| hint.min(MAX_RETRY_AFTER).max(delay));
                tracing::warn!(attempt = attempt + 1, ?delay, "transient failure, retrying");
                total_wait_time += delay;
                sleep_fn(delay).await;
                attempt += 1;
            }
            None => {
                return RetryOutcome { result: Err(error), attempts: attempt + 1, total_wait_time }
            }
        }
    }
}
