//! Kernel utilities shared across the bridge slices.
//! Keep this crate lightweight: it owns the configuration boundary (strict schema
//! validation, layered loading) and the seams through which slices talk to a host page.
//!
//! ## Validating component configuration
//! ```rust
//! use serde_json::json;
//! use szn_kernel::config::parse_loader_options;
//!
//! assert!(parse_loader_options(&json!({ "useAsyncLoading": false })).is_ok());
//! assert!(parse_loader_options(&json!({ "urls": { "bogusKey": "x" } })).is_err());
//! ```

pub mod config;
pub mod host;
pub mod signal;

pub use config::{ConfigError, ConfigErrorExt};
pub use host::{HostError, HostErrorExt};
pub use szn_domain as domain;
