//! `x-mitre-data-component`: one facet of a data source. Carries no ATT&CK ID.

use std::sync::LazyLock;

use super::common;
use crate::enums::StixType;
use crate::primitives::FieldRule;
use crate::schema::{FieldDescriptor, ObjectSchema};

pub static DATA_COMPONENT: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let shape = common::attack_base_object(StixType::DataComponent)
        .extend([
            FieldDescriptor::required("created_by_ref", common::created_by_ref()),
            FieldDescriptor::required("object_marking_refs", common::object_marking_refs()),
            FieldDescriptor::required("description", FieldRule::string()),
            FieldDescriptor::required(
                "x_mitre_data_source_ref",
                FieldRule::identifier(StixType::DataSource),
            ),
            FieldDescriptor::required("x_mitre_domains", common::domains()),
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
            "name",
            "description",
            "x_mitre_attack_spec_version",
            "x_mitre_version",
            "x_mitre_data_source_ref",
            "x_mitre_domains",
            "x_mitre_modified_by_ref",
        ])
        .strict();
    ObjectSchema::new(StixType::DataComponent, shape)
});
