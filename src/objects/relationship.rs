//! `relationship`: a typed edge between two objects.

use std::sync::LazyLock;

use super::common;
use crate::enums::{RelationshipType, StixType};
use crate::primitives::FieldRule;
use crate::refine::RelationshipEndpoints;
use crate::schema::{FieldDescriptor, ObjectSchema};

pub static RELATIONSHIP: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let shape = common::stix_domain_object(StixType::Relationship)
        .extend([
            FieldDescriptor::required("created_by_ref", common::created_by_ref()),
            FieldDescriptor::required("object_marking_refs", common::object_marking_refs()),
            FieldDescriptor::required(
                "relationship_type",
                FieldRule::Enum(RelationshipType::NAMES),
            ),
            FieldDescriptor::required("source_ref", FieldRule::Identifier(None)),
            FieldDescriptor::required("target_ref", FieldRule::Identifier(None)),
            FieldDescriptor::optional("description", FieldRule::string()),
            FieldDescriptor::required("x_mitre_attack_spec_version", common::attack_spec_version()),
            FieldDescriptor::optional("x_mitre_version", common::version()),
            FieldDescriptor::optional("x_mitre_deprecated", FieldRule::Boolean),
            FieldDescriptor::optional("x_mitre_domains", common::domains()),
            FieldDescriptor::required("x_mitre_modified_by_ref", common::modified_by_ref()),
        ])
        .require(&[
            "id",
            "type",
            "spec_version",
            "created",
            "modified",
            "created_by_ref",
            "object_marking_refs",
            "relationship_type",
            "source_ref",
            "target_ref",
            "x_mitre_attack_spec_version",
            "x_mitre_modified_by_ref",
        ])
        .strict()
        .refine(RelationshipEndpoints);
    ObjectSchema::new(StixType::Relationship, shape)
});
