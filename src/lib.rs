//! Schema validation for [MITRE ATT&CK](https://attack.mitre.org) STIX 2.1 objects.
//!
//! Every ATT&CK object type has a schema composed from a shared STIX base,
//! type-specific fields, and cross-field refinements. Validation reports every
//! violation with a path, a message and a categorical code:
//!
//! ```text
//! parse_json(text) → Value → validate(value) → ValidatedObject | ValidationError
//!                          → safe_validate(value) → SafeParseResult
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! let json = r#"{
//!   "type": "x-mitre-collection",
//!   "id": "x-mitre-collection--1f5f1533-f617-4ca8-9ab4-6a02367fa019",
//!   "spec_version": "2.1",
//!   "created": "2018-01-17T12:56:55.080Z",
//!   "modified": "2018-01-17T12:56:55.080Z",
//!   "created_by_ref": "identity--c78cb6e5-0c4b-4611-8297-d1b8b55e40b5",
//!   "object_marking_refs": ["marking-definition--fa42a846-8d90-4e51-bc29-71d5b4802168"],
//!   "name": "Enterprise ATT&CK",
//!   "description": "ATT&CK for Enterprise",
//!   "x_mitre_attack_spec_version": "3.2.0",
//!   "x_mitre_version": "17.0",
//!   "x_mitre_contents": [
//!     {
//!       "object_ref": "attack-pattern--0042a9f5-f053-4769-b3ef-9ad018dfa298",
//!       "object_modified": "2024-04-16T12:59:54.084Z"
//!     }
//!   ]
//! }"#;
//!
//! let collection = attack_schema::load(json).expect("valid collection");
//! assert_eq!(collection.stix_type(), attack_schema::enums::StixType::Collection);
//! ```
//!
//! # Consumption modes
//!
//! | Entry point | Returns |
//! |-------------|---------|
//! | [`validate`] / [`ObjectSchema::parse`] | `Result<ValidatedObject, ValidationError>` |
//! | [`safe_validate`] / [`ObjectSchema::safe_parse`] | [`SafeParseResult`] |
//! | [`registry::validate_with`] + [`ValidateOptions::fail_fast`] | first issue only |
//!
//! # Feature Flags
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `yaml`  | yes     | YAML input via [`parse::parse_yaml`]. |

pub mod enums;
pub mod error;
pub mod objects;
pub mod parse;
pub mod primitives;
pub mod refine;
pub mod registry;
pub mod schema;
pub mod serialize;
pub mod types;

pub use error::*;
pub use schema::{ErrorMode, ObjectSchema, Shape, ValidateOptions};
pub use types::*;

// Re-export entry-point functions at the crate root for convenience.
pub use parse::parse_json;
pub use registry::{resolve, safe_validate, validate, validate_all, validate_bundle};
pub use serialize::serialize;

/// STIX specification version every object must declare.
pub const STIX_SPEC_VERSION: &str = "2.1";

/// `source_name` of the external reference that carries an ATT&CK ID.
pub const ATTACK_SOURCE_NAME: &str = "mitre-attack";

/// The identity that authors ATT&CK content; `x_mitre_modified_by_ref` must
/// point at it.
pub const ATTACK_IDENTITY_REF: &str = "identity--c78cb6e5-0c4b-4611-8297-d1b8b55e40b5";

/// The ATT&CK copyright statement marking.
pub const ATTACK_MARKING_REF: &str =
    "marking-definition--fa42a846-8d90-4e51-bc29-71d5b4802168";

/// Convenience entry point composing parse → validate.
///
/// # Errors
///
/// Returns [`LoadError::Document`] if `input` is not a JSON object, or
/// [`LoadError::Validation`] carrying every issue found.
pub fn load(input: &str) -> Result<ValidatedObject, LoadError> {
    let value = parse::parse_json(input)?;
    Ok(registry::validate(&value)?)
}
