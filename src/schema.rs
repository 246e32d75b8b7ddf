//! Composable object schemas.
//!
//! A [`Shape`] is an ordered field-descriptor table plus strictness and an
//! ordered list of refinements. Shapes compose by value: every builder method
//! consumes the shape and returns a new one, so a shared base can be cloned and
//! extended per object type without affecting other types.
//!
//! ```text
//! stix_domain_object(t) → attack_base_object(t) → extend(..) → require(..) → strict() → refine(..)
//! ```
//!
//! An [`ObjectSchema`] binds a finished shape to its STIX type tag and exposes
//! the two consumption modes: [`ObjectSchema::parse`] (all-or-nothing error)
//! and [`ObjectSchema::safe_parse`] (discriminated result).

use serde_json::Value;
use std::sync::Arc;

use crate::enums::StixType;
use crate::error::{Issue, IssueCode, IssuePath, SafeParseResult, ValidationError};
use crate::primitives::{FieldRule, type_mismatch};
use crate::refine::Refinement;
use crate::types::ValidatedObject;

/// One row of a shape's field table.
#[derive(Clone, Debug)]
pub struct FieldDescriptor {
    pub name: &'static str,
    pub rule: FieldRule,
    pub required: bool,
}

impl FieldDescriptor {
    pub fn required(name: &'static str, rule: FieldRule) -> Self {
        FieldDescriptor {
            name,
            rule,
            required: true,
        }
    }

    pub fn optional(name: &'static str, rule: FieldRule) -> Self {
        FieldDescriptor {
            name,
            rule,
            required: false,
        }
    }
}

/// An ordered field table with strictness and refinements.
#[derive(Clone, Debug, Default)]
pub struct Shape {
    fields: Vec<FieldDescriptor>,
    strict: bool,
    refinements: Vec<Arc<dyn Refinement>>,
}

impl Shape {
    pub fn new() -> Self {
        Shape::default()
    }

    /// Merges `fields` into the table.
    ///
    /// A field whose name is already declared replaces the old descriptor in
    /// place, keeping its position; new names are appended in the order given.
    pub fn extend(mut self, fields: impl IntoIterator<Item = FieldDescriptor>) -> Self {
        for field in fields {
            match self.fields.iter_mut().find(|f| f.name == field.name) {
                Some(existing) => *existing = field,
                None => self.fields.push(field),
            }
        }
        self
    }

    /// Marks the named fields required.
    ///
    /// # Panics
    ///
    /// Panics if a name is not declared. Schemas are built once from constant
    /// tables, so this only fires on a programming error.
    pub fn require(self, names: &[&str]) -> Self {
        self.set_required(names, true)
    }

    /// Marks the named fields optional.
    ///
    /// # Panics
    ///
    /// Panics if a name is not declared.
    pub fn optional(self, names: &[&str]) -> Self {
        self.set_required(names, false)
    }

    /// Removes the named fields. Unknown names are ignored.
    pub fn omit(mut self, names: &[&str]) -> Self {
        self.fields.retain(|f| !names.contains(&f.name));
        self
    }

    /// Rejects keys that are not declared.
    pub fn strict(mut self) -> Self {
        self.strict = true;
        self
    }

    /// Appends a refinement. Refinements run in the order they were added.
    pub fn refine(mut self, refinement: impl Refinement + 'static) -> Self {
        self.refinements.push(Arc::new(refinement));
        self
    }

    fn set_required(mut self, names: &[&str], required: bool) -> Self {
        for name in names {
            match self.fields.iter_mut().find(|f| f.name == *name) {
                Some(field) => field.required = required,
                None => panic!("field '{}' is not declared in this shape", name),
            }
        }
        self
    }

    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn is_required(&self, name: &str) -> bool {
        self.field(name).is_some_and(|f| f.required)
    }

    /// Names of required fields, in declaration order.
    pub fn required_fields(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.fields.iter().filter(|f| f.required).map(|f| f.name)
    }

    pub fn is_strict(&self) -> bool {
        self.strict
    }

    pub fn refinements(&self) -> &[Arc<dyn Refinement>] {
        &self.refinements
    }

    /// Checks `value` against this shape, appending every issue found.
    ///
    /// Order: declared fields in table order, then undeclared keys in document
    /// order, then refinements. Refinements only run when nothing before them
    /// failed.
    pub fn check(&self, value: &Value, path: &IssuePath, issues: &mut Vec<Issue>) {
        let Some(map) = value.as_object() else {
            issues.push(type_mismatch("object", value, path));
            return;
        };
        let start = issues.len();

        for field in &self.fields {
            let field_path = path.key(field.name);
            match map.get(field.name) {
                Some(v) => field.rule.check(v, &field_path, issues),
                None if field.required => issues.push(Issue::new(
                    IssueCode::MissingField,
                    field_path,
                    "Required",
                )),
                None => {}
            }
        }

        if self.strict {
            for key in map.keys() {
                if self.field(key).is_none() {
                    issues.push(Issue::new(
                        IssueCode::UnrecognizedKeys,
                        path.key(key),
                        format!("Unrecognized key in object: '{}'", key),
                    ));
                }
            }
        }

        if issues.len() > start {
            return;
        }
        for refinement in &self.refinements {
            let found = refinement.check(map);
            if !found.is_empty() {
                tracing::trace!(
                    refinement = refinement.name(),
                    issues = found.len(),
                    "refinement failed"
                );
            }
            issues.extend(found.into_iter().map(|issue| Issue {
                path: issue.path.prefixed(path),
                ..issue
            }));
        }
    }
}

/// How many issues the throwing consumption mode reports.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ErrorMode {
    /// Report every issue.
    #[default]
    CollectAll,
    /// Report only the first issue found.
    FailFast,
}

/// Options for [`ObjectSchema::parse_with`] and the registry entry points.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValidateOptions {
    pub mode: ErrorMode,
}

impl ValidateOptions {
    pub fn fail_fast() -> Self {
        ValidateOptions {
            mode: ErrorMode::FailFast,
        }
    }

    pub(crate) fn apply(&self, mut issues: Vec<Issue>) -> Vec<Issue> {
        if self.mode == ErrorMode::FailFast {
            issues.truncate(1);
        }
        issues
    }
}

/// A finished shape bound to the STIX type it validates.
#[derive(Clone, Debug)]
pub struct ObjectSchema {
    stix_type: StixType,
    shape: Shape,
}

impl ObjectSchema {
    pub fn new(stix_type: StixType, shape: Shape) -> Self {
        debug_assert!(
            matches!(
                shape.field("type").map(|f| &f.rule),
                Some(FieldRule::Literal(tag)) if *tag == stix_type.as_str()
            ),
            "schema for {} must declare a matching `type` literal",
            stix_type
        );
        ObjectSchema { stix_type, shape }
    }

    pub fn stix_type(&self) -> StixType {
        self.stix_type
    }

    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// All issues for `value`, in report order. Empty means valid.
    pub fn issues(&self, value: &Value) -> Vec<Issue> {
        let mut issues = Vec::new();
        self.shape.check(value, &IssuePath::root(), &mut issues);
        tracing::trace!(
            stix_type = %self.stix_type,
            issues = issues.len(),
            "checked object against schema"
        );
        issues
    }

    /// Validates `value`, returning every issue on failure.
    pub fn parse(&self, value: &Value) -> Result<ValidatedObject, ValidationError> {
        self.parse_with(value, &ValidateOptions::default())
    }

    pub fn parse_with(
        &self,
        value: &Value,
        options: &ValidateOptions,
    ) -> Result<ValidatedObject, ValidationError> {
        self.validate(value)
            .map_err(|issues| ValidationError::new(options.apply(issues)))
    }

    /// Validates `value` without producing an error type.
    pub fn safe_parse(&self, value: &Value) -> SafeParseResult {
        self.validate(value).into()
    }

    pub(crate) fn validate(&self, value: &Value) -> Result<ValidatedObject, Vec<Issue>> {
        let issues = self.issues(value);
        match value {
            Value::Object(map) if issues.is_empty() => {
                Ok(ValidatedObject::new(self.stix_type, map.clone()))
            }
            _ => Err(issues),
        }
    }
}
