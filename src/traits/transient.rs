//! Transient error classification for dispatch retries.
//!
//! Only the dispatcher consults this trait, and only when a retry policy was
//! configured; validation failures are always permanent.
//!
//! # Examples
//!
//! ```
//! use purchase_rail::traits::TransientError;
//! use purchase_rail::types::TransportError;
//!
//! assert!(TransportError::network("connection reset").is_transient());
//! assert!(TransportError::status(503).is_transient());
//! assert!(TransportError::status(400).is_permanent());
//! ```

use core::time::Duration;

use crate::types::{DispatchError, PipelineError, TransportError, ValidationError};

/// Classification of errors as transient or permanent.
///
/// Transient errors are temporary failures that may succeed if retried,
/// such as network timeouts, rate limiting, or temporary service unavailability.
pub trait TransientError {
    /// Returns `true` if this error is transient and may succeed on retry.
    ///
    /// # Guidelines
    ///
    /// Return `true` for:
    /// - Network timeouts
    /// - Rate limiting (HTTP 429)
    /// - Server-side failures (HTTP 5xx)
    /// - Connection reset/refused
    ///
    /// Return `false` for:
    /// - Missing inputs
    /// - Client errors (other HTTP 4xx)
    /// - Payload encoding failures
    fn is_transient(&self) -> bool;

    /// Returns `true` if this error is permanent and should not be retried.
    ///
    /// Default implementation returns `!self.is_transient()`.
    #[inline]
    fn is_permanent(&self) -> bool {
        !self.is_transient()
    }

    /// Optional hint for how long to wait before retrying.
    ///
    /// Set from a `Retry-After` header when the endpoint sends one.
    #[inline]
    fn retry_after_hint(&self) -> Option<Duration> {
        None
    }
}

impl TransientError for TransportError {
    fn is_transient(&self) -> bool {
        match self {
            Self::Status { status, .. } => *status == 429 || (500..600).contains(status),
            Self::Network(_) | Self::Timeout(_) => true,
            Self::Encode(_) => false,
        }
    }

    fn retry_after_hint(&self) -> Option<Duration> {
        match self {
            Self::Status { retry_after, .. } => *retry_after,
            _ => None,
        }
    }
}

impl TransientError for DispatchError {
    #[inline]
    fn is_transient(&self) -> bool {
        self.transport_error().is_transient()
    }

    #[inline]
    fn retry_after_hint(&self) -> Option<Duration> {
        self.transport_error().retry_after_hint()
    }
}

impl TransientError for ValidationError {
    #[inline]
    fn is_transient(&self) -> bool {
        false
    }
}

impl TransientError for PipelineError {
    fn is_transient(&self) -> bool {
        match self {
            Self::Validation(error) => error.is_transient(),
            Self::Dispatch(error) => error.is_transient(),
        }
    }

    fn retry_after_hint(&self) -> Option<Duration> {
        match self {
            Self::Validation(_) => None,
            Self::Dispatch(error) => error.retry_after_hint(),
        }
    }
}
