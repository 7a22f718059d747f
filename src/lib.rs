//! Railway-oriented purchase notifications.
//!
//! Given an optional customer and an optional product list, the pipeline
//! checks that both are present, totals the purchase, decides whether it earns
//! a coupon, and posts one thank-you notification. Every failure travels the
//! same channel, [`PipelineError`], as data.
//!
//! ```text
//! guard_inputs ──► SaleTotals::from_products ──► build_payload ──► Dispatcher::dispatch
//!      │                                                                  │
//!      └──────────── ValidationError ─────► PipelineError ◄── DispatchError
//! ```
//!
//! # Examples
//!
//! ## Preparing a payload (pure)
//!
//! ```
//! use purchase_rail::prelude::*;
//!
//! let customer = Customer::new("c-1", "John", "Doe", 42, "john@example.com");
//! let products = vec![Product::new("mug", 60.0), Product::new("lamp", 50.0).with_discount(10.0)];
//!
//! let payload = prepare_notification(Some(customer), Some(products)).unwrap();
//! assert_eq!(payload.coupon(), Some("20OFF"));
//! ```
//!
//! ## Sending it
//!
//! ```no_run
//! use purchase_rail::prelude::*;
//!
//! # #[cfg(feature = "http")]
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let dispatcher = Dispatcher::new(HttpTransport::new(&DispatchConfig::default())?);
//! let customer = Customer::new("c-1", "John", "Doe", 42, "john@example.com");
//!
//! match notify_purchase(Some(customer), Some(vec![Product::new("mug", 30.0)]), &dispatcher).await {
//!     Ok(delivery) => println!("sent: {}", delivery.payload.message()),
//!     Err(error) => eprintln!("{}", error.message()),
//! }
//! # Ok(())
//! # }
//! # #[cfg(not(feature = "http"))]
//! # fn main() {}
//! ```

/// Sale totals and the aggregation fold
pub mod aggregate;
/// Async retry helpers for the dispatch boundary
pub mod async_ext;
/// Outcome classification and payload construction
pub mod classify;
/// HTTP transport configuration
pub mod config;
/// The dispatcher and its transports
pub mod dispatch;
/// The nested implementation the pipeline is checked against
pub mod legacy;
/// Composition of all stages
pub mod pipeline;
/// Convenience re-exports for quick starts
pub mod prelude;
/// Core traits for error classification
pub mod traits;
/// Tower layer mapping transport failures into dispatch errors
pub mod tower;
/// Domain records and error types
pub mod types;
/// Presence checks and the accumulating `Validation` type
pub mod validation;

pub use aggregate::SaleTotals;
pub use pipeline::{notify_purchase, prepare_notification};
pub use types::{
    Customer, Delivery, DispatchError, NotificationPayload, PipelineError, Product,
    TransportError, ValidationError,
};
pub use validation::Validation;
