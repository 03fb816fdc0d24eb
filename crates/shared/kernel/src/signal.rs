//! Readiness signal payloads.
//!
//! The element's `szn-select:ready` event carries `{ detail: { attributes: {..} } }`.
//! Entries are not validated: strings pass through, `null` marks a removal and any other
//! value is coerced to text the way the page would stringify it.

use serde_json::Value;
use szn_domain::attributes::RequestedAttributes;
use tracing::debug;

/// Extracts the requested attribute set from an event `detail` object.
///
/// Returns `None` when the detail carries no `attributes` object; such a signal is
/// ignored and the current attribute state stays in place.
#[must_use]
pub fn requested_attributes_from_detail(detail: &Value) -> Option<RequestedAttributes> {
    match detail.get("attributes") {
        Some(attributes) => requested_attributes_from_value(attributes),
        None => {
            debug!("Ready signal without attributes ignored");
            None
        },
    }
}

/// Reads an attribute map as exposed by the element (`requestedAttributes`).
#[must_use]
pub fn requested_attributes_from_value(attributes: &Value) -> Option<RequestedAttributes> {
    let Value::Object(entries) = attributes else {
        debug!(kind = kind(attributes), "Requested attributes are not an object");
        return None;
    };

    Some(entries.iter().map(|(name, value)| (name.as_str(), coerce(value))).collect())
}

fn coerce(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text.clone()),
        Value::Bool(_) | Value::Number(_) | Value::Array(_) | Value::Object(_) => {
            Some(value.to_string())
        },
    }
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
