//! Common error handling utilities for the GST compliance engine
//!
//! Every crate in the workspace reports failures through [`ComplianceError`]
//! and the [`Result`] alias defined here. Errors carry a stable code from
//! [`codes`] so that log consumers can group failures without parsing
//! messages, and [`log_error`] emits them through `tracing` together with an
//! optional [`ErrorContext`].
//!
//! # Example
//!
//! ```rust
//! use error_common::{ComplianceError, ErrorContext, log_error};
//!
//! fn load_overrides(raw: &str) -> error_common::Result<serde_json::Value> {
//!     Ok(serde_json::from_str(raw)?)
//! }
//!
//! if let Err(e) = load_overrides("{not json") {
//!     let context = ErrorContext::new().with_operation("load_overrides");
//!     log_error(&context, &e);
//!     assert_eq!(e.code(), error_common::codes::serialization::INVALID_JSON);
//! }
//! ```

pub mod codes;
pub mod context;
pub mod types;

pub use context::*;
pub use types::*;
