//! The pipeline's failure channel.
//!
//! There are exactly three error kinds: a missing customer, missing products,
//! and a failed dispatch. Each renders as a plain `{ "message": ... }` record
//! so callers see one homogeneous shape regardless of which stage failed.
//!
//! # Examples
//!
//! ```
//! use purchase_rail::types::{DispatchError, PipelineError, TransportError, ValidationError};
//!
//! let missing: PipelineError = ValidationError::MissingCustomer.into();
//! assert_eq!(missing.message(), "User is missing");
//!
//! let failed: PipelineError = DispatchError::new(TransportError::network("network down")).into();
//! assert_eq!(failed.message(), "Failed to send email: network down");
//! ```
use core::fmt;
use core::time::Duration;

use serde::ser::{Serialize, SerializeStruct, Serializer};

/// Presence check failure raised by the input guard.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValidationError {
    MissingCustomer,
    MissingProducts,
}

impl ValidationError {
    /// The fixed message for this failure.
    #[inline]
    pub const fn message(&self) -> &'static str {
        match self {
            Self::MissingCustomer => "User is missing",
            Self::MissingProducts => "Products are missing",
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl std::error::Error for ValidationError {}

impl Serialize for ValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_message(serializer, "ValidationError", self.message())
    }
}

/// Failure detail reported by a notification transport.
///
/// The `Display` output is the detail appended after `"Failed to send email: "`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TransportError {
    /// The endpoint answered with a non-2xx status.
    Status { status: u16, retry_after: Option<Duration> },
    /// The request never got an answer (connection refused, reset, DNS, ...).
    Network(String),
    /// No answer within the configured limit.
    Timeout(Duration),
    /// The payload could not be encoded.
    Encode(String),
}

impl TransportError {
    /// Creates a network failure with the given detail.
    #[inline]
    pub fn network(detail: impl Into<String>) -> Self {
        Self::Network(detail.into())
    }

    /// Creates a status failure without a retry hint.
    #[inline]
    pub const fn status(status: u16) -> Self {
        Self::Status { status, retry_after: None }
    }
}

impl fmt::Display for TransportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status { status, .. } => write!(f, "endpoint responded with status {status}"),
            Self::Network(detail) => f.write_str(detail),
            Self::Timeout(limit) => write!(f, "request timed out after {limit:?}"),
            Self::Encode(detail) => write!(f, "could not encode payload: {detail}"),
        }
    }
}

impl std::error::Error for TransportError {}

/// Failure of the single outbound notification call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DispatchError {
    source: TransportError,
}

impl DispatchError {
    #[inline]
    pub const fn new(source: TransportError) -> Self {
        Self { source }
    }

    /// `"Failed to send email: {detail}"`.
    #[inline]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// The underlying transport failure.
    #[inline]
    pub const fn transport_error(&self) -> &TransportError {
        &self.source
    }
}

impl From<TransportError> for DispatchError {
    #[inline]
    fn from(source: TransportError) -> Self {
        Self::new(source)
    }
}

impl fmt::Display for DispatchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Failed to send email: {}", self.source)
    }
}

impl std::error::Error for DispatchError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        Some(&self.source)
    }
}

impl Serialize for DispatchError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_message(serializer, "DispatchError", &self.message())
    }
}

/// The single failure type of a pipeline run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PipelineError {
    Validation(ValidationError),
    Dispatch(DispatchError),
}

impl PipelineError {
    #[inline]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Returns `true` when the run failed before any network attempt.
    #[inline]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<ValidationError> for PipelineError {
    #[inline]
    fn from(error: ValidationError) -> Self {
        Self::Validation(error)
    }
}

impl From<DispatchError> for PipelineError {
    #[inline]
    fn from(error: DispatchError) -> Self {
        Self::Dispatch(error)
    }
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Validation(error) => fmt::Display::fmt(error, f),
            Self::Dispatch(error) => fmt::Display::fmt(error, f),
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Validation(error) => Some(error),
            Self::Dispatch(error) => Some(error),
        }
    }
}

impl Serialize for PipelineError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serialize_message(serializer, "PipelineError", &self.message())
    }
}

fn serialize_message<S: Serializer>(
    serializer: S,
    name: &'static str,
    message: &str,
) -> Result<S::Ok, S::Error> {
    let mut state = serializer.serialize_struct(name, 1)?;
    state.serialize_field("message", message)?;
    state.end()
}
