//! Domain records that flow through the purchase notification pipeline.
//!
//! Everything here is created per invocation and never shared across
//! invocations.
//!
//! # Examples
//!
//! ```
//! use purchase_rail::types::{Customer, Product};
//!
//! let customer = Customer::new("c-1", "John", "Doe", 42, "john@example.com");
//! let products = vec![Product::new("mug", 60.0), Product::new("lamp", 50.0).with_discount(10.0)];
//!
//! assert_eq!(customer.first_name, "John");
//! assert_eq!(products[1].effective_discount(), 10.0);
//! ```
pub mod customer;
pub mod delivery;
pub mod error;
pub mod payload;
pub mod product;

pub use customer::*;
pub use delivery::*;
pub use error::*;
pub use payload::*;
pub use product::*;
