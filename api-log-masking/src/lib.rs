//! Sensitive-info masking for outbound API call logs
//!
//! Every call the compliance add-on makes to a GST or e-invoice API is
//! recorded for audit and debugging. Before such a record is stored, the
//! secrets it carries (API keys, auth tokens, session and encryption keys,
//! passwords, app keys) are overwritten with [`PLACEHOLDER`].
//!
//! Sensitive names are configured per [`Location`]:
//!
//! - **headers**: request headers (`request_headers` on the record)
//! - **output**: the response payload
//! - **data**: request data; an object nested at `data.body` is masked with
//!   the `body` names
//! - **body**: a top-level request body
//!
//! Matching is exact and case-sensitive: `password` masks a `password` key
//! but never `password_reset_link`.
//!
//! # Example
//!
//! ```rust
//! use api_log_masking::{ApiLogRecord, ApiVariant, BaseApi, PLACEHOLDER};
//! use serde_json::json;
//!
//! let mut log = ApiLogRecord::from_json(json!({
//!     "request_headers": {"x-api-key": "secret", "content-type": "application/json"},
//!     "data": {"body": {"password": "hunter2", "username": "test_user"}},
//! }))?;
//!
//! BaseApi.mask_sensitive_info(&mut log);
//!
//! let headers = log.request_headers.as_ref().unwrap();
//! assert_eq!(headers["x-api-key"], json!(PLACEHOLDER));
//! assert_eq!(headers["content-type"], json!("application/json"));
//! assert_eq!(log.nested_body().unwrap()["username"], json!("test_user"));
//! # Ok::<(), error_common::ComplianceError>(())
//! ```
//!
//! API variants that need other names override
//! [`ApiVariant::sensitive_info_overrides`]:
//!
//! ```rust
//! use api_log_masking::{ApiVariant, Location, SensitiveFieldOverrides};
//!
//! struct EwaybillApi;
//!
//! impl ApiVariant for EwaybillApi {
//!     fn sensitive_info_overrides(&self) -> SensitiveFieldOverrides {
//!         SensitiveFieldOverrides::new().set(Location::Headers, ["custom-header", "x-api-key"])
//!     }
//! }
//!
//! let mapping = EwaybillApi.sensitive_field_mapping();
//! assert_eq!(mapping.patterns(Location::Headers), ["custom-header", "x-api-key"]);
//! ```

pub mod config;
pub mod location;
pub mod mapping;
pub mod masker;
pub mod record;
pub mod variant;

pub use crate::config::*;
pub use crate::location::*;
pub use crate::mapping::*;
pub use crate::masker::*;
pub use crate::record::*;
pub use crate::variant::*;
