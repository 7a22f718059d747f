//! Convenience re-exports for common usage patterns.
//!
//! ```
//! use purchase_rail::prelude::*;
//!
//! let payload = prepare_notification(None, Some(vec![Product::new("mug", 3.0)]));
//! assert_eq!(payload.unwrap_err(), ValidationError::MissingCustomer);
//! ```

pub use crate::aggregate::SaleTotals;
pub use crate::classify::{build_payload, Outcome};
pub use crate::config::DispatchConfig;
pub use crate::dispatch::Dispatcher;
#[cfg(feature = "http")]
pub use crate::dispatch::HttpTransport;
pub use crate::pipeline::{notify_purchase, prepare_notification};
pub use crate::traits::TransientError;
pub use crate::types::{
    Acknowledgement, Customer, Delivery, DispatchError, NotificationPayload, PipelineError,
    Product, TransportError, ValidationError,
};
pub use crate::validation::{guard_inputs, Purchase};
