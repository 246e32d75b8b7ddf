//! Reading candidate documents from text.
//!
//! Performs deserialization only. The result is an untyped
//! [`serde_json::Value`] that still has to go through validation.

use serde_json::Value;

use crate::error::DocumentError;
use crate::primitives::value_type_name;

/// Parse a JSON string into a candidate object.
///
/// The root must be an object; use [`parse_json_value`] for bundles read as
/// arbitrary values or for lists of objects.
pub fn parse_json(input: &str) -> Result<Value, DocumentError> {
    let value = parse_json_value(input)?;
    require_object(value)
}

/// Parse a JSON string into any value.
pub fn parse_json_value(input: &str) -> Result<Value, DocumentError> {
    if input.trim().is_empty() {
        return Err(DocumentError::Empty);
    }
    serde_json::from_str(input).map_err(|e| DocumentError::Syntax {
        message: e.to_string(),
        line: Some(e.line()),
        column: Some(e.column()),
    })
}

/// Parse a YAML string into a candidate object.
///
/// Multi-document streams are rejected: one call reads one object.
#[cfg(feature = "yaml")]
pub fn parse_yaml(input: &str) -> Result<Value, DocumentError> {
    if input.trim().is_empty() {
        return Err(DocumentError::Empty);
    }
    check_multi_document(input)?;
    let value: Value = serde_saphyr::from_str(input).map_err(|e| DocumentError::Syntax {
        message: e.to_string(),
        line: None,
        column: None,
    })?;
    require_object(value)
}

fn require_object(value: Value) -> Result<Value, DocumentError> {
    if value.is_object() {
        Ok(value)
    } else {
        Err(DocumentError::RootNotObject {
            found: value_type_name(&value),
        })
    }
}

/// Only `---` at column 0 counts as a document marker, so block scalars that
/// contain one are not rejected.
#[cfg(feature = "yaml")]
fn check_multi_document(input: &str) -> Result<(), DocumentError> {
    let markers = input
        .lines()
        .filter(|line| line.starts_with("---") && line[3..].trim().is_empty())
        .count();
    if markers > 1 {
        return Err(DocumentError::MultiDocument);
    }
    Ok(())
}
