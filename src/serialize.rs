//! [`ValidatedObject`] → JSON serialization.

use crate::error::SerializeError;
use crate::types::ValidatedObject;

/// Serialize a validated object to pretty-printed JSON.
///
/// Fields are emitted in the order the candidate declared them, so the output
/// validates again to an equal object.
pub fn serialize(object: &ValidatedObject) -> Result<String, SerializeError> {
    Ok(serde_json::to_string_pretty(object)?)
}

/// Serialize a list of validated objects as a JSON array.
pub fn serialize_all(objects: &[ValidatedObject]) -> Result<String, SerializeError> {
    Ok(serde_json::to_string_pretty(objects)?)
}
