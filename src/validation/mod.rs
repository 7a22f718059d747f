//! Presence checks for the pipeline inputs.
//!
//! The guard ([`guard_inputs`]) is fail-fast: it reports the first missing
//! input only. [`audit_inputs`] runs both checks and accumulates every failure
//! into a [`Validation`], for callers that want the full picture in one pass.
//!
//! # Examples
//!
//! ```
//! use purchase_rail::types::ValidationError;
//! use purchase_rail::validation::{audit_inputs, guard_inputs};
//!
//! assert_eq!(guard_inputs(None, None).unwrap_err(), ValidationError::MissingCustomer);
//! assert_eq!(audit_inputs(None, None).iter_errors().count(), 2);
//! ```
pub mod core;
pub mod guard;

pub use self::core::*;
pub use self::guard::*;
