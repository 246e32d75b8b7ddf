//! `campaign`: a grouping of intrusion activity over time, `C####`.

use std::sync::LazyLock;

use super::common;
use crate::enums::StixType;
use crate::primitives::{FieldRule, TimestampKind};
use crate::refine::{AttackIdFormat, AttackIdRule, FirstAliasMatchesName, TimestampOrder};
use crate::schema::{FieldDescriptor, ObjectSchema};

pub const ATTACK_ID_FORMAT: AttackIdFormat = AttackIdFormat::prefixed("C", 4);

pub static CAMPAIGN: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let shape = common::attack_base_object(StixType::Campaign)
        .extend([
            FieldDescriptor::required("created_by_ref", common::created_by_ref()),
            FieldDescriptor::required("object_marking_refs", common::object_marking_refs()),
            FieldDescriptor::required("external_references", common::external_references()),
            FieldDescriptor::required("description", FieldRule::string()),
            FieldDescriptor::required("aliases", common::aliases()),
            FieldDescriptor::required("first_seen", FieldRule::Timestamp(TimestampKind::Other)),
            FieldDescriptor::required("last_seen", FieldRule::Timestamp(TimestampKind::Other)),
            FieldDescriptor::required("x_mitre_first_seen_citation", common::citation()),
            FieldDescriptor::required("x_mitre_last_seen_citation", common::citation()),
            FieldDescriptor::required("x_mitre_domains", common::domains()),
            FieldDescriptor::required("x_mitre_modified_by_ref", common::modified_by_ref()),
            FieldDescriptor::optional("x_mitre_contributors", common::contributors()),
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
            "description",
            "aliases",
            "first_seen",
            "last_seen",
            "x_mitre_first_seen_citation",
            "x_mitre_last_seen_citation",
            "x_mitre_attack_spec_version",
            "x_mitre_version",
            "x_mitre_domains",
            "x_mitre_modified_by_ref",
        ])
        .strict()
        .refine(AttackIdRule::new(ATTACK_ID_FORMAT))
        .refine(FirstAliasMatchesName { field: "aliases" })
        .refine(TimestampOrder {
            earlier: "first_seen",
            later: "last_seen",
            message: "last_seen must be greater than or equal to first_seen.",
        });
    ObjectSchema::new(StixType::Campaign, shape)
});
