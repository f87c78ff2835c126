//! Typed argument extraction for tool handlers.
//!
//! Arguments cross the host boundary as an untyped JSON map. Each tool
//! declares its required keys; presence is checked before the map is
//! deserialized into the tool's param struct, so a missing key always
//! produces the same `Argument ... not provided` message and the handler is
//! never invoked.

use serde::de::DeserializeOwned;
use serde_json::{Map, Value};

use super::error::ServletError;

/// Check required keys, then deserialize the full map into `T`.
///
/// Absent and `null` both count as missing. Shape errors past the presence
/// check (wrong type, unrecognized enum value) surface as a `ValueError`
/// handler failure.
pub fn parse_args<T: DeserializeOwned>(
    args: &Map<String, Value>,
    required: &[&str],
) -> Result<T, ServletError> {
    let missing: Vec<&str> = required
        .iter()
        .copied()
        .filter(|key| args.get(*key).is_none_or(Value::is_null))
        .collect();
    if !missing.is_empty() {
        return Err(ServletError::missing_argument(&missing));
    }

    serde_json::from_value(Value::Object(args.clone()))
        .map_err(|e| ServletError::failure("ValueError", e.to_string()))
}
