//! Type-tag dispatch.
//!
//! Maps each [`StixType`] to its schema with an exhaustive `match`, so adding
//! a type tag without a schema fails to compile. Unknown tags in documents are
//! reported as `unknown_type` issues rather than guessed at.

use serde_json::Value;
use std::sync::LazyLock;

use crate::enums::StixType;
use crate::error::*;
use crate::objects::*;
use crate::primitives::{FieldRule, type_mismatch};
use crate::schema::{FieldDescriptor, ObjectSchema, Shape, ValidateOptions};
use crate::types::{StixIdentifier, ValidatedBundle, ValidatedObject};

/// The schema registered for `stix_type`.
pub fn schema_for(stix_type: StixType) -> &'static ObjectSchema {
    match stix_type {
        StixType::AttackPattern => &technique::TECHNIQUE,
        StixType::Campaign => &campaign::CAMPAIGN,
        StixType::CourseOfAction => &mitigation::MITIGATION,
        StixType::Identity => &identity::IDENTITY,
        StixType::IntrusionSet => &group::GROUP,
        StixType::Malware => &software::MALWARE,
        StixType::MarkingDefinition => &marking_definition::MARKING_DEFINITION,
        StixType::Relationship => &relationship::RELATIONSHIP,
        StixType::Tool => &software::TOOL,
        StixType::Collection => &collection::COLLECTION,
        StixType::DataComponent => &data_component::DATA_COMPONENT,
        StixType::DataSource => &data_source::DATA_SOURCE,
        StixType::Tactic => &tactic::TACTIC,
    }
}

/// Looks up the schema for a type tag.
pub fn resolve(type_tag: &str) -> Result<&'static ObjectSchema, UnknownTypeError> {
    let stix_type: StixType = type_tag.parse()?;
    Ok(schema_for(stix_type))
}

/// Reads the `type` tag of a candidate and validates it against its schema.
pub(crate) fn dispatch(value: &Value) -> Result<ValidatedObject, Vec<Issue>> {
    let Some(map) = value.as_object() else {
        return Err(vec![type_mismatch("object", value, &IssuePath::root())]);
    };
    let type_path = IssuePath::root().key("type");
    let tag = match map.get("type") {
        None => {
            return Err(vec![Issue::new(
                IssueCode::MissingField,
                type_path,
                "Required",
            )]);
        }
        Some(Value::String(tag)) => tag,
        Some(other) => return Err(vec![type_mismatch("string", other, &type_path)]),
    };
    let schema = match resolve(tag) {
        Ok(schema) => schema,
        Err(e) => {
            tracing::debug!(type_tag = %tag, "no schema registered for type tag");
            return Err(vec![Issue::new(
                IssueCode::UnknownType,
                type_path,
                format!("Unknown STIX object type '{}'", e.0),
            )]);
        }
    };
    let result = schema.validate(value);
    tracing::debug!(
        stix_type = %schema.stix_type(),
        valid = result.is_ok(),
        "dispatched object"
    );
    result
}

/// Validates a single object of any registered type.
pub fn validate(value: &Value) -> Result<ValidatedObject, ValidationError> {
    validate_with(value, &ValidateOptions::default())
}

pub fn validate_with(
    value: &Value,
    options: &ValidateOptions,
) -> Result<ValidatedObject, ValidationError> {
    dispatch(value).map_err(|issues| ValidationError::new(options.apply(issues)))
}

/// Validates a single object of any registered type without an error type.
pub fn safe_validate(value: &Value) -> SafeParseResult {
    dispatch(value).into()
}

/// Validates each element of a heterogeneous list.
///
/// Issues are prefixed with the element's index and reported in list order.
pub fn validate_all(values: &[Value]) -> Result<Vec<ValidatedObject>, ValidationError> {
    collect_elements(values, &IssuePath::root()).map_err(ValidationError::new)
}

fn collect_elements(
    values: &[Value],
    base: &IssuePath,
) -> Result<Vec<ValidatedObject>, Vec<Issue>> {
    let mut objects = Vec::with_capacity(values.len());
    let mut issues = Vec::new();
    for (i, value) in values.iter().enumerate() {
        let prefix = base.index(i);
        match dispatch(value) {
            Ok(object) => objects.push(object),
            Err(found) => issues.extend(found.into_iter().map(|issue| Issue {
                path: issue.path.prefixed(&prefix),
                ..issue
            })),
        }
    }
    if issues.is_empty() {
        Ok(objects)
    } else {
        Err(issues)
    }
}

static BUNDLE: LazyLock<Shape> = LazyLock::new(|| {
    Shape::new()
        .extend([
            FieldDescriptor::required("type", FieldRule::Literal("bundle")),
            FieldDescriptor::required("id", FieldRule::Identifier(Some("bundle"))),
            FieldDescriptor::optional("spec_version", FieldRule::Literal(crate::STIX_SPEC_VERSION)),
            FieldDescriptor::required("objects", FieldRule::non_empty_list(FieldRule::Any)),
        ])
        .strict()
});

/// Validates a STIX `bundle` envelope and every object inside it.
///
/// Envelope issues come first; object issues follow, prefixed with
/// `objects[i]`. Objects are only dispatched when the envelope is valid.
pub fn validate_bundle(value: &Value) -> Result<ValidatedBundle, ValidationError> {
    let mut issues = Vec::new();
    BUNDLE.check(value, &IssuePath::root(), &mut issues);
    if !issues.is_empty() {
        return Err(ValidationError::new(issues));
    }

    let id = value
        .get("id")
        .and_then(Value::as_str)
        .and_then(StixIdentifier::parse);
    let objects = value.get("objects").and_then(Value::as_array);
    let (Some(id), Some(objects)) = (id, objects) else {
        // Unreachable once the envelope check passed.
        return Err(ValidationError::new(vec![Issue::new(
            IssueCode::InvalidType,
            IssuePath::root(),
            "Malformed bundle envelope",
        )]));
    };

    let result = collect_elements(objects, &IssuePath::root().key("objects"));
    tracing::debug!(
        bundle = %id,
        objects = objects.len(),
        valid = result.is_ok(),
        "validated bundle"
    );
    result
        .map(|objects| ValidatedBundle { id, objects })
        .map_err(ValidationError::new)
}
