//! Cross-field refinements.
//!
//! A refinement sees the whole candidate object after every declared field
//! passed its own rule. It reports zero or more issues with paths relative to
//! the object; the owning [`Shape`](crate::schema::Shape) prefixes them.
//! Refinements never modify the candidate.

use serde_json::{Map, Value};
use std::fmt;

use crate::enums::{RelationshipType, StixType};
use crate::error::{Issue, IssuePath};
use crate::types::{StixIdentifier, parse_timestamp};

/// A rule over an entire candidate object.
pub trait Refinement: fmt::Debug + Send + Sync {
    /// Short identifier used in logs.
    fn name(&self) -> &'static str;

    fn check(&self, object: &Map<String, Value>) -> Vec<Issue>;
}

// ─── ATT&CK ID ──────────────────────────────────────────────────────────────

/// Format of an ATT&CK ID carried in `external_references[].external_id`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttackIdFormat {
    /// `prefix` followed by exactly `digits` decimal digits, e.g. `DS####`.
    Prefixed { prefix: &'static str, digits: usize },
    /// `T####`, or `T####.###` when `x_mitre_is_subtechnique` is true.
    Technique,
}

impl AttackIdFormat {
    pub const fn prefixed(prefix: &'static str, digits: usize) -> Self {
        AttackIdFormat::Prefixed { prefix, digits }
    }

    /// The format text for `object`, e.g. `DS####` or `T####.###`.
    pub fn describe(&self, object: &Map<String, Value>) -> String {
        match self {
            AttackIdFormat::Prefixed { prefix, digits } => {
                format!("{}{}", prefix, "#".repeat(*digits))
            }
            AttackIdFormat::Technique if is_subtechnique(object) => "T####.###".to_string(),
            AttackIdFormat::Technique => "T####".to_string(),
        }
    }

    pub fn matches(&self, id: &str, object: &Map<String, Value>) -> bool {
        match self {
            AttackIdFormat::Prefixed { prefix, digits } => id
                .strip_prefix(prefix)
                .is_some_and(|rest| is_digits(rest, *digits)),
            AttackIdFormat::Technique => {
                let Some(rest) = id.strip_prefix('T') else {
                    return false;
                };
                if is_subtechnique(object) {
                    rest.split_once('.')
                        .is_some_and(|(parent, sub)| is_digits(parent, 4) && is_digits(sub, 3))
                } else {
                    is_digits(rest, 4)
                }
            }
        }
    }
}

fn is_digits(s: &str, count: usize) -> bool {
    s.len() == count && s.bytes().all(|b| b.is_ascii_digit())
}

fn is_subtechnique(object: &Map<String, Value>) -> bool {
    object
        .get("x_mitre_is_subtechnique")
        .and_then(Value::as_bool)
        .unwrap_or(false)
}

/// The first external reference from `source_name` must carry an ATT&CK ID
/// in the given format.
///
/// Skipped when `external_references` is absent or empty. When no entry comes
/// from `source_name`, the ID counts as missing.
#[derive(Clone, Debug)]
pub struct AttackIdRule {
    pub source_name: &'static str,
    pub format: AttackIdFormat,
}

impl AttackIdRule {
    pub fn new(format: AttackIdFormat) -> Self {
        AttackIdRule {
            source_name: crate::ATTACK_SOURCE_NAME,
            format,
        }
    }
}

impl Refinement for AttackIdRule {
    fn name(&self) -> &'static str {
        "attack_id"
    }

    fn check(&self, object: &Map<String, Value>) -> Vec<Issue> {
        let Some(references) = object.get("external_references").and_then(Value::as_array) else {
            return Vec::new();
        };
        if references.is_empty() {
            return Vec::new();
        }
        let base = IssuePath::root().key("external_references");

        let found = references.iter().enumerate().find(|(_, r)| {
            r.get("source_name").and_then(Value::as_str) == Some(self.source_name)
        });
        let Some((index, reference)) = found else {
            return vec![Issue::custom(base, "ATT&CK ID must be defined.")];
        };

        let path = base.index(index).key("external_id");
        match reference.get("external_id").and_then(Value::as_str) {
            None => vec![Issue::custom(path, "ATT&CK ID must be defined.")],
            Some(id) if !self.format.matches(id, object) => vec![Issue::custom(
                path,
                format!(
                    "The first external_reference must match the ATT&CK ID format {}.",
                    self.format.describe(object)
                ),
            )],
            Some(_) => Vec::new(),
        }
    }
}

// ─── Non-empty list ─────────────────────────────────────────────────────────

/// A present list field must hold at least one entry.
#[derive(Clone, Debug)]
pub struct NonEmptyList {
    pub field: &'static str,
    pub message: &'static str,
}

impl Refinement for NonEmptyList {
    fn name(&self) -> &'static str {
        "non_empty_list"
    }

    fn check(&self, object: &Map<String, Value>) -> Vec<Issue> {
        match object.get(self.field).and_then(Value::as_array) {
            Some(items) if items.is_empty() => {
                vec![Issue::custom(IssuePath::root().key(self.field), self.message)]
            }
            _ => Vec::new(),
        }
    }
}

// ─── Timestamp order ────────────────────────────────────────────────────────

/// `later` must not be before `earlier`. Skipped unless both are present and
/// parse.
#[derive(Clone, Debug)]
pub struct TimestampOrder {
    pub earlier: &'static str,
    pub later: &'static str,
    pub message: &'static str,
}

impl TimestampOrder {
    /// `modified` ≥ `created`.
    pub fn modified_after_created() -> Self {
        TimestampOrder {
            earlier: "created",
            later: "modified",
            message: "The modified timestamp must be greater than or equal to the created timestamp.",
        }
    }
}

impl Refinement for TimestampOrder {
    fn name(&self) -> &'static str {
        "timestamp_order"
    }

    fn check(&self, object: &Map<String, Value>) -> Vec<Issue> {
        let read = |field: &str| {
            object
                .get(field)
                .and_then(Value::as_str)
                .and_then(|s| parse_timestamp(s).ok())
        };
        match (read(self.earlier), read(self.later)) {
            (Some(earlier), Some(later)) if later < earlier => {
                vec![Issue::custom(IssuePath::root().key(self.later), self.message)]
            }
            _ => Vec::new(),
        }
    }
}

// ─── Aliases ────────────────────────────────────────────────────────────────

/// The first entry of an alias list must equal `name`.
#[derive(Clone, Debug)]
pub struct FirstAliasMatchesName {
    pub field: &'static str,
}

impl Refinement for FirstAliasMatchesName {
    fn name(&self) -> &'static str {
        "first_alias_matches_name"
    }

    fn check(&self, object: &Map<String, Value>) -> Vec<Issue> {
        let name = object.get("name").and_then(Value::as_str);
        let first = object
            .get(self.field)
            .and_then(Value::as_array)
            .and_then(|aliases| aliases.first())
            .and_then(Value::as_str);
        match (name, first) {
            (Some(name), Some(first)) if name != first => vec![Issue::custom(
                IssuePath::root().key(self.field).index(0),
                format!(
                    "The first alias must match the object's name ('{}'), got '{}'.",
                    name, first
                ),
            )],
            _ => Vec::new(),
        }
    }
}

// ─── Relationship endpoints ─────────────────────────────────────────────────

/// `source_ref` and `target_ref` must point at object types the
/// `relationship_type` allows.
///
/// `revoked-by` accepts any pair of objects of the same type.
#[derive(Clone, Debug)]
pub struct RelationshipEndpoints;

impl RelationshipEndpoints {
    /// Allowed (source, target) types for every relationship type except
    /// `revoked-by`.
    pub fn allowed(relationship: RelationshipType) -> (&'static [StixType], &'static [StixType]) {
        use StixType::*;
        match relationship {
            RelationshipType::Uses => (
                &[IntrusionSet, Campaign, Malware, Tool],
                &[AttackPattern, Malware, Tool],
            ),
            RelationshipType::Mitigates => (&[CourseOfAction], &[AttackPattern]),
            RelationshipType::SubtechniqueOf => (&[AttackPattern], &[AttackPattern]),
            RelationshipType::Detects => (&[DataComponent], &[AttackPattern]),
            RelationshipType::AttributedTo => (&[Campaign], &[IntrusionSet]),
            RelationshipType::RevokedBy => (StixType::ALL, StixType::ALL),
        }
    }
}

impl Refinement for RelationshipEndpoints {
    fn name(&self) -> &'static str {
        "relationship_endpoints"
    }

    fn check(&self, object: &Map<String, Value>) -> Vec<Issue> {
        let Some(relationship) = object
            .get("relationship_type")
            .and_then(Value::as_str)
            .and_then(RelationshipType::from_name)
        else {
            return Vec::new();
        };
        let endpoint = |field: &str| {
            object
                .get(field)
                .and_then(Value::as_str)
                .and_then(StixIdentifier::parse)
                .and_then(|id| StixType::from_name(id.object_type()))
        };
        let (Some(source), Some(target)) = (endpoint("source_ref"), endpoint("target_ref")) else {
            return Vec::new();
        };

        let mut issues = Vec::new();
        if relationship == RelationshipType::RevokedBy {
            if source != target {
                issues.push(Issue::custom(
                    IssuePath::root().key("target_ref"),
                    format!(
                        "A revoked-by relationship must target an object of the same type as its source ('{}'), got '{}'.",
                        source, target
                    ),
                ));
            }
            return issues;
        }

        let (sources, targets) = RelationshipEndpoints::allowed(relationship);
        if !sources.contains(&source) {
            issues.push(Issue::custom(
                IssuePath::root().key("source_ref"),
                format!(
                    "Invalid source_ref type '{}' for relationship_type '{}'.",
                    source, relationship
                ),
            ));
        }
        if !targets.contains(&target) {
            issues.push(Issue::custom(
                IssuePath::root().key("target_ref"),
                format!(
                    "Invalid target_ref type '{}' for relationship_type '{}'.",
                    target, relationship
                ),
            ));
        }
        issues
    }
}
