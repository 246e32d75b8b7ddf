//! `identity`: the organization that authors ATT&CK content.

use std::sync::LazyLock;

use super::common;
use crate::enums::{IdentityClass, StixType};
use crate::primitives::FieldRule;
use crate::schema::{FieldDescriptor, ObjectSchema};

pub static IDENTITY: LazyLock<ObjectSchema> = LazyLock::new(|| {
    let shape = common::attack_base_object(StixType::Identity)
        .extend([
            FieldDescriptor::required("identity_class", FieldRule::Enum(IdentityClass::NAMES)),
            FieldDescriptor::optional("roles", FieldRule::list(FieldRule::non_empty_string())),
            FieldDescriptor::optional("sectors", FieldRule::list(FieldRule::non_empty_string())),
            FieldDescriptor::optional("contact_information", FieldRule::string()),
        ])
        .require(&[
            "id",
            "type",
            "spec_version",
            "created",
            "modified",
            "name",
            "identity_class",
            "x_mitre_attack_spec_version",
        ])
        .optional(&["x_mitre_version"])
        .strict();
    ObjectSchema::new(StixType::Identity, shape)
});
