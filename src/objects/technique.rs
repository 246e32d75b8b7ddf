//! `attack-pattern`: techniques (`T####`) and sub-techniques (`T####.###`).

use std::sync::LazyLock;

use super::common;
use crate::enums::StixType;
use crate::primitives::FieldRule;
use crate::refine::{AttackIdFormat, AttackIdRule};
use crate::schema::{FieldDescriptor, ObjectSchema};

fn strings() -> FieldRule {
    FieldRule::non_empty_list(FieldRule::non_empty_string())
}

pub static TECHNIQUE: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let shape = common::attack_base_object(StixType::AttackPattern)
        .extend([
            FieldDescriptor::required("created_by_ref", common::created_by_ref()),
            FieldDescriptor::required("object_marking_refs", common::object_marking_refs()),
            FieldDescriptor::required("external_references", common::external_references()),
            FieldDescriptor::optional("kill_chain_phases", common::kill_chain_phases()),
            FieldDescriptor::required("x_mitre_is_subtechnique", FieldRule::Boolean),
            FieldDescriptor::required("x_mitre_domains", common::domains()),
            FieldDescriptor::required("x_mitre_modified_by_ref", common::modified_by_ref()),
            FieldDescriptor::optional("x_mitre_platforms", common::platforms()),
            FieldDescriptor::optional("x_mitre_detection", FieldRule::string()),
            FieldDescriptor::optional("x_mitre_data_sources", strings()),
            FieldDescriptor::optional("x_mitre_defense_bypassed", strings()),
            FieldDescriptor::optional("x_mitre_permissions_required", strings()),
            FieldDescriptor::optional("x_mitre_effective_permissions", strings()),
            FieldDescriptor::optional("x_mitre_system_requirements", strings()),
            FieldDescriptor::optional("x_mitre_remote_support", FieldRule::Boolean),
            FieldDescriptor::optional("x_mitre_network_requirements", FieldRule::Boolean),
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
            "x_mitre_attack_spec_version",
            "x_mitre_version",
            "x_mitre_is_subtechnique",
            "x_mitre_domains",
            "x_mitre_modified_by_ref",
        ])
        .strict()
        .refine(AttackIdRule::new(AttackIdFormat::Technique));
    ObjectSchema::new(StixType::AttackPattern, shape)
});
