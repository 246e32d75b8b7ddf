//! `x-mitre-tactic`: the adversary's tactical goal, `TA####`.

use std::sync::LazyLock;

use super::common;
use crate::enums::StixType;
use crate::primitives::FieldRule;
use crate::refine::{AttackIdFormat, AttackIdRule};
use crate::schema::{FieldDescriptor, ObjectSchema};

pub const ATTACK_ID_FORMAT: AttackIdFormat = AttackIdFormat::prefixed("TA", 4);

pub static TACTIC: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let shape = common::attack_base_object(StixType::Tactic)
        .extend([
            FieldDescriptor::required("created_by_ref", common::created_by_ref()),
            FieldDescriptor::required("object_marking_refs", common::object_marking_refs()),
            FieldDescriptor::required("external_references", common::external_references()),
            FieldDescriptor::required("description", FieldRule::string()),
            FieldDescriptor::required("x_mitre_shortname", common::shortname()),
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
            "x_mitre_attack_spec_version",
            "x_mitre_version",
            "x_mitre_shortname",
            "x_mitre_domains",
            "x_mitre_modified_by_ref",
        ])
        .strict()
        .refine(AttackIdRule::new(ATTACK_ID_FORMAT));
    ObjectSchema::new(StixType::Tactic, shape)
});
