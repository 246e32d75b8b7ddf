use chrono::{DateTime, SecondsFormat, Utc};
use regex::Regex;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::LazyLock;
use uuid::Uuid;

use crate::enums::*;

// ─── Identifiers ────────────────────────────────────────────────────────────

/// A STIX identifier of the form `<type>--<uuid>`.
///
/// Keeps the original text so that a parsed identifier displays and
/// serializes exactly as it was read.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct StixIdentifier {
    raw: String,
    uuid: Uuid,
}

impl StixIdentifier {
    /// Splits `value` into its type prefix and UUID.
    ///
    /// The UUID part must be the 36-character hyphenated form.
    pub fn parse(value: &str) -> Option<Self> {
        let (prefix, uuid) = value.split_once("--")?;
        if prefix.is_empty() || uuid.len() != 36 {
            return None;
        }
        let uuid = Uuid::try_parse(uuid).ok()?;
        Some(StixIdentifier {
            raw: value.to_string(),
            uuid,
        })
    }

    /// The type prefix, e.g. `x-mitre-collection`.
    pub fn object_type(&self) -> &str {
        match self.raw.split_once("--") {
            Some((prefix, _)) => prefix,
            None => &self.raw,
        }
    }

    pub fn uuid(&self) -> Uuid {
        self.uuid
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }
}

impl fmt::Display for StixIdentifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

impl Serialize for StixIdentifier {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.raw)
    }
}

impl<'de> Deserialize<'de> for StixIdentifier {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        StixIdentifier::parse(&raw).ok_or_else(|| {
            serde::de::Error::custom(format!("invalid STIX identifier: '{}'", raw))
        })
    }
}

// ─── Timestamps ─────────────────────────────────────────────────────────────

static TIMESTAMP_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9]{4}-[0-9]{2}-[0-9]{2}T[0-9]{2}:[0-9]{2}:[0-5][0-9](\.[0-9]+)?Z$").unwrap()
});

/// Outcome of reading a STIX timestamp string.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimestampError {
    /// The text is not shaped like `YYYY-MM-DDTHH:MM:SS[.fff]Z`. Leap seconds
    /// (`:60`) are rejected here.
    Format,
    /// Shaped correctly, but not a real calendar instant.
    Calendar,
}

/// Parses an RFC 3339 UTC timestamp with a `Z` suffix.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, TimestampError> {
    if !TIMESTAMP_RE.is_match(value) {
        return Err(TimestampError::Format);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|dt| dt.with_timezone(&Utc))
        .map_err(|_| TimestampError::Calendar)
}

macro_rules! stix_timestamp {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name(DateTime<Utc>);

        impl $name {
            pub fn parse(value: &str) -> Result<Self, TimestampError> {
                parse_timestamp(value).map($name)
            }

            pub fn as_datetime(&self) -> DateTime<Utc> {
                self.0
            }
        }

        impl From<DateTime<Utc>> for $name {
            fn from(dt: DateTime<Utc>) -> Self {
                $name(dt)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(&self.0.to_rfc3339_opts(SecondsFormat::Millis, true))
            }
        }

        impl Serialize for $name {
            fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
                serializer.collect_str(self)
            }
        }

        impl<'de> Deserialize<'de> for $name {
            fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
                let raw = String::deserialize(deserializer)?;
                $name::parse(&raw).map_err(|_| {
                    serde::de::Error::custom(format!("invalid STIX timestamp: '{}'", raw))
                })
            }
        }
    };
}

stix_timestamp! {
    /// The `created` time of a STIX object.
    StixCreatedTimestamp
}

stix_timestamp! {
    /// The `modified` time of a STIX object, or of an object it references.
    ///
    /// Deliberately a different type from [`StixCreatedTimestamp`]: the two
    /// share a representation but are not interchangeable.
    StixModifiedTimestamp
}

// ─── Nested structures ──────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExternalReference {
    pub source_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// An entry of a collection's `x_mitre_contents`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ObjectVersionReference {
    pub object_ref: StixIdentifier,
    pub object_modified: StixModifiedTimestamp,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct KillChainPhase {
    pub kill_chain_name: KillChainName,
    pub phase_name: String,
}

// ─── Validated objects ──────────────────────────────────────────────────────

/// A candidate object that passed every check of its schema.
///
/// Only obtainable from a successful validation. Field values and their order
/// are exactly those of the candidate.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedObject {
    stix_type: StixType,
    fields: Map<String, Value>,
}

impl ValidatedObject {
    pub(crate) fn new(stix_type: StixType, fields: Map<String, Value>) -> Self {
        ValidatedObject { stix_type, fields }
    }

    pub fn stix_type(&self) -> StixType {
        self.stix_type
    }

    pub fn id(&self) -> &str {
        self.fields
            .get("id")
            .and_then(Value::as_str)
            .unwrap_or_default()
    }

    pub fn get(&self, field: &str) -> Option<&Value> {
        self.fields.get(field)
    }

    pub fn fields(&self) -> &Map<String, Value> {
        &self.fields
    }

    pub fn created(&self) -> Option<StixCreatedTimestamp> {
        self.str_field("created")
            .and_then(|s| StixCreatedTimestamp::parse(s).ok())
    }

    pub fn modified(&self) -> Option<StixModifiedTimestamp> {
        self.str_field("modified")
            .and_then(|s| StixModifiedTimestamp::parse(s).ok())
    }

    /// The `external_id` of the first `mitre-attack` external reference.
    pub fn attack_id(&self) -> Option<&str> {
        self.fields
            .get("external_references")?
            .as_array()?
            .iter()
            .find(|r| {
                r.get("source_name").and_then(Value::as_str) == Some(crate::ATTACK_SOURCE_NAME)
            })?
            .get("external_id")?
            .as_str()
    }

    /// Deserializes the validated fields into a typed view such as
    /// [`Collection`] or [`DataSource`].
    pub fn to_typed<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_value(Value::Object(self.fields.clone()))
    }

    pub fn into_value(self) -> Value {
        Value::Object(self.fields)
    }

    fn str_field(&self, field: &str) -> Option<&str> {
        self.fields.get(field).and_then(Value::as_str)
    }
}

impl Serialize for ValidatedObject {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// A validated `bundle` and its objects, in bundle order.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedBundle {
    pub id: StixIdentifier,
    pub objects: Vec<ValidatedObject>,
}

// ─── Typed views ────────────────────────────────────────────────────────────

/// Typed view of a validated `x-mitre-collection`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Collection {
    pub id: StixIdentifier,
    #[serde(rename = "type")]
    pub stix_type: StixType,
    pub spec_version: String,
    pub created: StixCreatedTimestamp,
    pub modified: StixModifiedTimestamp,
    pub created_by_ref: StixIdentifier,
    pub object_marking_refs: Vec<StixIdentifier>,
    pub name: String,
    pub description: String,
    pub x_mitre_attack_spec_version: String,
    pub x_mitre_version: String,
    pub x_mitre_contents: Vec<ObjectVersionReference>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_references: Option<Vec<ExternalReference>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_mitre_deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_mitre_old_attack_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}

/// Typed view of a validated `x-mitre-data-source`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DataSource {
    pub id: StixIdentifier,
    #[serde(rename = "type")]
    pub stix_type: StixType,
    pub spec_version: String,
    pub created: StixCreatedTimestamp,
    pub modified: StixModifiedTimestamp,
    pub created_by_ref: StixIdentifier,
    pub object_marking_refs: Vec<StixIdentifier>,
    pub name: String,
    pub description: String,
    pub external_references: Vec<ExternalReference>,
    pub x_mitre_attack_spec_version: String,
    pub x_mitre_version: String,
    pub x_mitre_domains: Vec<Domain>,
    pub x_mitre_modified_by_ref: StixIdentifier,
    pub x_mitre_collection_layers: Vec<CollectionLayer>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_mitre_platforms: Option<Vec<Platform>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_mitre_contributors: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_mitre_deprecated: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub x_mitre_old_attack_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub revoked: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub labels: Option<Vec<String>>,
}
