//! `intrusion-set`: ATT&CK groups, `G####`.

use std::sync::LazyLock;

use super::common;
use crate::enums::StixType;
use crate::primitives::{FieldRule, TimestampKind};
use crate::refine::{AttackIdFormat, AttackIdRule, FirstAliasMatchesName};
use crate::schema::{FieldDescriptor, ObjectSchema};

pub const ATTACK_ID_FORMAT: AttackIdFormat = AttackIdFormat::prefixed("G", 4);

pub static GROUP: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let shape = common::attack_base_object(StixType::IntrusionSet)
        .extend([
            FieldDescriptor::required("created_by_ref", common::created_by_ref()),
            FieldDescriptor::required("object_marking_refs", common::object_marking_refs()),
            FieldDescriptor::required("external_references", common::external_references()),
            FieldDescriptor::optional("aliases", common::aliases()),
            FieldDescriptor::required("x_mitre_domains", common::domains()),
            FieldDescriptor::required("x_mitre_modified_by_ref", common::modified_by_ref()),
            FieldDescriptor::optional("x_mitre_contributors", common::contributors()),
            FieldDescriptor::optional("first_seen", FieldRule::Timestamp(TimestampKind::Other)),
            FieldDescriptor::optional("last_seen", FieldRule::Timestamp(TimestampKind::Other)),
        ])
        .require(&[
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
        ])
        .strict()
        .refine(AttackIdRule::new(ATTACK_ID_FORMAT))
        .refine(FirstAliasMatchesName { field: "aliases" });
    ObjectSchema::new(StixType::IntrusionSet, shape)
});
