//! `malware` and `tool`: ATT&CK software, `S####`.
//!
//! Both types share one shape; malware additionally requires `is_family`.

use std::sync::LazyLock;

use super::common;
use crate::enums::StixType;
use crate::primitives::FieldRule;
use crate::refine::{AttackIdFormat, AttackIdRule, FirstAliasMatchesName};
use crate::schema::{FieldDescriptor, ObjectSchema, Shape};

pub const ATTACK_ID_FORMAT: AttackIdFormat = AttackIdFormat::prefixed("S", 4);

const REQUIRED: &[&str] = &[
    "id",
    "type",
    "spec_version",
    "created",
    "modified",
    "created_by_ref",
    "object_marking_refs",
    "external_references",
    "name",
    "x_mitre_attack_spec_version",
    "x_mitre_version",
    "x_mitre_domains",
    "x_mitre_modified_by_ref",
];

fn software(stix_type: StixType) -> Shape {
    common::attack_base_object(stix_type)
        .extend([
            FieldDescriptor::required("created_by_ref", common::created_by_ref()),
            FieldDescriptor::required("object_marking_refs", common::object_marking_refs()),
            FieldDescriptor::required("external_references", common::external_references()),
            FieldDescriptor::optional("x_mitre_aliases", common::aliases()),
            FieldDescriptor::required("x_mitre_domains", common::domains()),
            FieldDescriptor::required("x_mitre_modified_by_ref", common::modified_by_ref()),
            FieldDescriptor::optional("x_mitre_platforms", common::platforms()),
            FieldDescriptor::optional("x_mitre_contributors", common::contributors()),
        ])
        .require(REQUIRED)
}

pub static MALWARE: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let shape = software(StixType::Malware)
        .extend([FieldDescriptor::required("is_family", FieldRule::Boolean)])
        .strict()
        .refine(AttackIdRule::new(ATTACK_ID_FORMAT))
        .refine(FirstAliasMatchesName {
            field: "x_mitre_aliases",
        });
    ObjectSchema::new(StixType::Malware, shape)
});

pub static TOOL: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let shape = software(StixType::Tool)
        .strict()
        .refine(AttackIdRule::new(ATTACK_ID_FORMAT))
        .refine(FirstAliasMatchesName {
            field: "x_mitre_aliases",
        });
    ObjectSchema::new(StixType::Tool, shape)
});
