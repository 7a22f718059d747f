//! Async helpers used at the dispatch boundary.
//!
//! The pipeline only suspends at the outbound call, so everything here wraps
//! that one future: retry policies and the runtime-neutral retry loop.

mod retry;

pub use retry::{
    retry_with_policy, ExponentialBackoff, FixedDelay, NoRetry, RetryOutcome, RetryPolicy,
    MAX_RETRY_AFTER,
};
