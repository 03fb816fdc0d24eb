//! Configuration boundary.
//!
//! Everything a collaborator hands to the bridge passes through here first. The schema
//! is closed: unknown keys, unknown URL keys and values of the wrong kind (a string where
//! a boolean is expected, a number where a URL is expected) reject the whole object.

#[cfg(not(target_arch = "wasm32"))]
mod file;

#[cfg(not(target_arch = "wasm32"))]
pub use file::{load_loader_options, load_select_props};

use serde::Deserialize;
use serde::de::Error as _;
use serde_json::Value;
use std::borrow::Cow;
use szn_domain::loader::LoaderOptions;
use szn_domain::props::SelectProps;
use tracing::debug;

/// Configuration rejected at the boundary. Nothing from a rejected configuration is applied.
#[szn_derive::szn_error]
pub enum ConfigError {
    /// A layered source (file, environment) could not be read or merged.
    #[cfg(not(target_arch = "wasm32"))]
    #[error("Config source error{}: {source}", format_context(.context))]
    Source { source: config::ConfigError, context: Option<Cow<'static, str>> },

    /// The configuration does not match the schema.
    #[error("Config schema violation{}: {source}", format_context(.context))]
    Schema { source: serde_json::Error, context: Option<Cow<'static, str>> },

    #[error("Internal config error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

/// Validates a loader configuration object.
///
/// # Errors
/// [`ConfigError::Schema`] when the object violates the schema.
pub fn parse_loader_options(raw: &Value) -> Result<LoaderOptions, ConfigError> {
    require_object(raw).context("Invalid loader options")?;
    LoaderOptions::deserialize(raw)
        .inspect_err(|e| debug!(error = %e, "Loader options rejected"))
        .context("Invalid loader options")
}

/// Validates the full component props, including the nested `loaderOptions`.
///
/// # Errors
/// [`ConfigError::Schema`] when the props or their loader options violate the schema.
pub fn parse_select_props(raw: &Value) -> Result<SelectProps, ConfigError> {
    require_object(raw).context("Invalid select props")?;
    SelectProps::deserialize(raw)
        .inspect_err(|e| debug!(error = %e, "Select props rejected"))
        .context("Invalid select props")
}

/// Parses and validates loader options from JSON text.
///
/// # Errors
/// [`ConfigError::Schema`] for malformed JSON or a schema violation.
pub fn parse_loader_options_json(text: &str) -> Result<LoaderOptions, ConfigError> {
    let raw: Value = serde_json::from_str(text).context("Malformed loader options JSON")?;
    parse_loader_options(&raw)
}

// serde also accepts structs written as sequences; the boundary only takes objects.
fn require_object(raw: &Value) -> Result<(), serde_json::Error> {
    if raw.is_object() {
        Ok(())
    } else {
        Err(serde_json::Error::custom(format!("expected an object, found {raw}")))
    }
}
