//! Core traits shared by the dispatch stages.
//!
//! - [`TransientError`]: classifies failures that may succeed when retried
pub mod transient;

pub use transient::TransientError;
