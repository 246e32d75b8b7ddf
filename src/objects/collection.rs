//! `x-mitre-collection`: a versioned set of other objects, listed by
//! (id, modified) pairs.

use std::sync::LazyLock;

use super::common;
use crate::enums::StixType;
use crate::primitives::{FieldRule, TimestampKind};
use crate::refine::NonEmptyList;
use crate::schema::{FieldDescriptor, ObjectSchema, Shape};

/// Shape of one `x_mitre_contents` entry.
pub fn object_version_reference() -> Shape {
    Shape::new()
        .extend([
            FieldDescriptor::required("object_ref", FieldRule::Identifier(None)),
            FieldDescriptor::required(
                "object_modified",
                FieldRule::Timestamp(TimestampKind::Modified),
            ),
        ])
        .strict()
}

pub fn contents() -> FieldRule {
    FieldRule::non_empty_list_with(
        FieldRule::object(object_version_reference()),
        "At least one STIX object reference is required.",
    )
}

pub static COLLECTION: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let shape = common::attack_base_object(StixType::Collection)
        .extend([
            FieldDescriptor::required("created_by_ref", common::created_by_ref()),
            FieldDescriptor::required("object_marking_refs", common::object_marking_refs()),
            FieldDescriptor::required("description", FieldRule::string()),
            FieldDescriptor::required("x_mitre_contents", contents()),
        ])
        .require(&[
            "created",
            "created_by_ref",
            "description",
            "id",
            "modified",
            "name",
            "object_marking_refs",
            "spec_version",
            "type",
            "x_mitre_attack_spec_version",
            "x_mitre_contents",
            "x_mitre_version",
        ])
        .strict()
        // Shadowed by the field rule's min of 1; still guards schemas that relax it.
        .refine(NonEmptyList {
            field: "x_mitre_contents",
            message: "At least one STIX object reference is required",
        });
    ObjectSchema::new(StixType::Collection, shape)
});
