//! `marking-definition`: statement markings. Immutable in STIX, so there is
//! no `modified`.

use std::sync::LazyLock;

use super::common;
use crate::enums::StixType;
use crate::primitives::FieldRule;
use crate::schema::{FieldDescriptor, ObjectSchema, Shape};

pub static MARKING_DEFINITION: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let statement = Shape::new()
        .extend([FieldDescriptor::required(
            "statement",
            FieldRule::non_empty_string(),
        )])
        .strict();
    let shape = common::stix_domain_object(StixType::MarkingDefinition)
        .omit(&["modified", "labels", "revoked"])
        .extend([
            FieldDescriptor::optional("name", FieldRule::non_empty_string()),
            FieldDescriptor::required("definition_type", FieldRule::Literal("statement")),
            FieldDescriptor::required("definition", FieldRule::object(statement)),
            FieldDescriptor::optional("x_mitre_attack_spec_version", common::attack_spec_version()),
            FieldDescriptor::optional("x_mitre_domains", common::domains()),
        ])
        .require(&[
            "id",
            "type",
            "spec_version",
            "created",
            "created_by_ref",
            "definition_type",
            "definition",
        ])
        .strict();
    ObjectSchema::new(StixType::MarkingDefinition, shape)
});
