//! Base shapes and field rules shared by every object type.

use regex::Regex;
use std::sync::LazyLock;

use crate::enums::*;
use crate::primitives::{FieldRule, TimestampKind};
use crate::refine::TimestampOrder;
use crate::schema::{FieldDescriptor, Shape};

static ATTACK_SPEC_VERSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+\.[0-9]+$").unwrap());

static VERSION_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^[0-9]+\.[0-9]+$").unwrap());

static CITATION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(\(Citation: [^()]+\))+$").unwrap());

static SHORTNAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][a-z0-9]*(-[a-z0-9]+)*$").unwrap());

pub fn attack_spec_version() -> FieldRule {
    FieldRule::Pattern {
        regex: &ATTACK_SPEC_VERSION_RE,
        expected: "MAJOR.MINOR.PATCH",
    }
}

pub fn version() -> FieldRule {
    FieldRule::Pattern {
        regex: &VERSION_RE,
        expected: "MAJOR.MINOR",
    }
}

/// One or more `(Citation: ...)` markers.
pub fn citation() -> FieldRule {
    FieldRule::Pattern {
        regex: &CITATION_RE,
        expected: "(Citation: <source name>)",
    }
}

/// Lower-case, hyphen-separated words, e.g. `privilege-escalation`.
pub fn shortname() -> FieldRule {
    FieldRule::Pattern {
        regex: &SHORTNAME_RE,
        expected: "lower-case words separated by hyphens",
    }
}

pub fn created_by_ref() -> FieldRule {
    FieldRule::identifier(StixType::Identity)
}

pub fn object_marking_refs() -> FieldRule {
    FieldRule::non_empty_list(FieldRule::identifier(StixType::MarkingDefinition))
}

pub fn external_references() -> FieldRule {
    let reference = Shape::new().extend([
        FieldDescriptor::required("source_name", FieldRule::non_empty_string()),
        FieldDescriptor::optional("description", FieldRule::string()),
        FieldDescriptor::optional("url", FieldRule::non_empty_string()),
        FieldDescriptor::optional("external_id", FieldRule::non_empty_string()),
    ]);
    FieldRule::non_empty_list(FieldRule::object(reference))
}

pub fn kill_chain_phases() -> FieldRule {
    let phase = Shape::new()
        .extend([
            FieldDescriptor::required("kill_chain_name", FieldRule::Enum(KillChainName::NAMES)),
            FieldDescriptor::required("phase_name", shortname()),
        ])
        .strict();
    FieldRule::non_empty_list(FieldRule::object(phase))
}

pub fn domains() -> FieldRule {
    FieldRule::non_empty_list(FieldRule::Enum(Domain::NAMES))
}

pub fn platforms() -> FieldRule {
    FieldRule::non_empty_list(FieldRule::Enum(Platform::NAMES))
}

pub fn contributors() -> FieldRule {
    FieldRule::non_empty_list(FieldRule::non_empty_string())
}

pub fn aliases() -> FieldRule {
    FieldRule::non_empty_list(FieldRule::non_empty_string())
}

/// Must be the ATT&CK identity itself.
pub fn modified_by_ref() -> FieldRule {
    FieldRule::Literal(crate::ATTACK_IDENTITY_REF)
}

/// Common STIX 2.1 domain object fields.
///
/// `id`, `type`, `spec_version`, `created` and `modified` are required; the
/// rest are optional until a concrete schema says otherwise.
pub fn stix_domain_object(stix_type: StixType) -> Shape {
    Shape::new()
        .extend([
            FieldDescriptor::required("id", FieldRule::identifier(stix_type)),
            FieldDescriptor::required("type", FieldRule::Literal(stix_type.as_str())),
            FieldDescriptor::required("spec_version", FieldRule::Literal(crate::STIX_SPEC_VERSION)),
            FieldDescriptor::required("created", FieldRule::Timestamp(TimestampKind::Created)),
            FieldDescriptor::required("modified", FieldRule::Timestamp(TimestampKind::Modified)),
            FieldDescriptor::optional("created_by_ref", created_by_ref()),
            FieldDescriptor::optional("labels", FieldRule::list(FieldRule::non_empty_string())),
            FieldDescriptor::optional("revoked", FieldRule::Boolean),
            FieldDescriptor::optional("external_references", external_references()),
            FieldDescriptor::optional("object_marking_refs", object_marking_refs()),
        ])
        .refine(TimestampOrder::modified_after_created())
}

/// [`stix_domain_object`] plus the fields every ATT&CK object carries.
pub fn attack_base_object(stix_type: StixType) -> Shape {
    stix_domain_object(stix_type).extend([
        FieldDescriptor::required("name", FieldRule::non_empty_string()),
        FieldDescriptor::optional("description", FieldRule::string()),
        FieldDescriptor::required("x_mitre_attack_spec_version", attack_spec_version()),
        FieldDescriptor::required("x_mitre_version", version()),
        FieldDescriptor::optional("x_mitre_deprecated", FieldRule::Boolean),
        FieldDescriptor::optional("x_mitre_old_attack_id", FieldRule::non_empty_string()),
    ])
}
