//! Field rules: stateless checks over a single field value.
//!
//! A rule never looks at sibling fields; cross-field checks live in
//! [`crate::refine`]. Every failure becomes an [`Issue`] at the path the rule
//! was given, and nested rules (lists, objects) extend that path.

use regex::Regex;
use serde_json::Value;

use crate::enums::StixType;
use crate::error::{Issue, IssueCode, IssuePath};
use crate::schema::Shape;
use crate::types::{StixIdentifier, TimestampError, parse_timestamp};

/// Which STIX timestamp a field carries.
///
/// Both variants share one runtime check; they differ in the typed view a
/// validated value converts to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TimestampKind {
    Created,
    Modified,
    /// A timestamp that is neither `created` nor `modified`, e.g. `first_seen`.
    Other,
}

/// Constraints of a list field.
#[derive(Clone, Debug)]
pub struct ListRule {
    pub item: FieldRule,
    pub min: usize,
    /// Replaces the generic "too small" message.
    pub min_message: Option<&'static str>,
}

/// A declarative, reusable rule for one field value.
#[derive(Clone, Debug)]
pub enum FieldRule {
    /// Accepts any JSON value.
    Any,
    /// Exactly this string.
    Literal(&'static str),
    /// `<prefix>--<uuid>`. With no prefix, any registered STIX type is accepted.
    Identifier(Option<&'static str>),
    Timestamp(TimestampKind),
    String {
        min: usize,
        max: Option<usize>,
    },
    /// A string matching `regex`; `expected` names the format in messages.
    Pattern {
        regex: &'static Regex,
        expected: &'static str,
    },
    /// One of a closed set of strings.
    Enum(&'static [&'static str]),
    Boolean,
    List(Box<ListRule>),
    Object(Box<Shape>),
}

impl FieldRule {
    /// Any non-empty string.
    pub fn non_empty_string() -> Self {
        FieldRule::String { min: 1, max: None }
    }

    pub fn string() -> Self {
        FieldRule::String { min: 0, max: None }
    }

    pub fn identifier(stix_type: StixType) -> Self {
        FieldRule::Identifier(Some(stix_type.as_str()))
    }

    pub fn list(item: FieldRule) -> Self {
        FieldRule::List(Box::new(ListRule {
            item,
            min: 0,
            min_message: None,
        }))
    }

    pub fn non_empty_list(item: FieldRule) -> Self {
        FieldRule::List(Box::new(ListRule {
            item,
            min: 1,
            min_message: None,
        }))
    }

    /// A list of at least one element, reported with `message` when empty.
    pub fn non_empty_list_with(item: FieldRule, message: &'static str) -> Self {
        FieldRule::List(Box::new(ListRule {
            item,
            min: 1,
            min_message: Some(message),
        }))
    }

    pub fn object(shape: Shape) -> Self {
        FieldRule::Object(Box::new(shape))
    }

    /// Checks `value`, appending every issue found.
    pub fn check(&self, value: &Value, path: &IssuePath, issues: &mut Vec<Issue>) {
        match self {
            FieldRule::Any => {}
            FieldRule::Literal(expected) => {
                if value.as_str() != Some(*expected) {
                    issues.push(Issue::new(
                        IssueCode::InvalidLiteral,
                        path.clone(),
                        format!("Invalid literal value, expected \"{}\"", expected),
                    ));
                }
            }
            FieldRule::Identifier(prefix) => check_identifier(*prefix, value, path, issues),
            FieldRule::Timestamp(_) => check_timestamp(value, path, issues),
            FieldRule::String { min, max } => {
                let Some(s) = expect_str(value, path, issues) else {
                    return;
                };
                check_length(s.chars().count(), *min, *max, "String", "character(s)", path, issues);
            }
            FieldRule::Pattern { regex, expected } => {
                let Some(s) = expect_str(value, path, issues) else {
                    return;
                };
                if !regex.is_match(s) {
                    issues.push(Issue::new(
                        IssueCode::InvalidString,
                        path.clone(),
                        format!("Invalid format: expected {}, received '{}'", expected, s),
                    ));
                }
            }
            FieldRule::Enum(allowed) => {
                let Some(s) = expect_str(value, path, issues) else {
                    return;
                };
                if !allowed.contains(&s) {
                    let options = allowed
                        .iter()
                        .map(|a| format!("'{}'", a))
                        .collect::<Vec<_>>()
                        .join(" | ");
                    issues.push(Issue::new(
                        IssueCode::InvalidEnumValue,
                        path.clone(),
                        format!(
                            "Invalid enum value. Expected {}, received '{}'",
                            options, s
                        ),
                    ));
                }
            }
            FieldRule::Boolean => {
                if !value.is_boolean() {
                    issues.push(type_mismatch("boolean", value, path));
                }
            }
            FieldRule::List(rule) => {
                let Some(items) = value.as_array() else {
                    issues.push(type_mismatch("array", value, path));
                    return;
                };
                if items.len() < rule.min {
                    let message = match rule.min_message {
                        Some(m) => m.to_string(),
                        None => format!("Array must contain at least {} element(s)", rule.min),
                    };
                    issues.push(Issue::new(IssueCode::TooSmall, path.clone(), message));
                }
                for (i, item) in items.iter().enumerate() {
                    rule.item.check(item, &path.index(i), issues);
                }
            }
            FieldRule::Object(shape) => shape.check(value, path, issues),
        }
    }
}

/// Name of a JSON value's type as used in type-mismatch messages.
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

pub(crate) fn type_mismatch(expected: &str, value: &Value, path: &IssuePath) -> Issue {
    Issue::new(
        IssueCode::InvalidType,
        path.clone(),
        format!("Expected {}, received {}", expected, value_type_name(value)),
    )
}

fn expect_str<'v>(value: &'v Value, path: &IssuePath, issues: &mut Vec<Issue>) -> Option<&'v str> {
    let s = value.as_str();
    if s.is_none() {
        issues.push(type_mismatch("string", value, path));
    }
    s
}

fn check_length(
    len: usize,
    min: usize,
    max: Option<usize>,
    what: &str,
    unit: &str,
    path: &IssuePath,
    issues: &mut Vec<Issue>,
) {
    if len < min {
        issues.push(Issue::new(
            IssueCode::TooSmall,
            path.clone(),
            format!("{} must contain at least {} {}", what, min, unit),
        ));
    }
    if let Some(max) = max
        && len > max
    {
        issues.push(Issue::new(
            IssueCode::TooBig,
            path.clone(),
            format!("{} must contain at most {} {}", what, max, unit),
        ));
    }
}

fn check_identifier(
    prefix: Option<&str>,
    value: &Value,
    path: &IssuePath,
    issues: &mut Vec<Issue>,
) {
    let Some(s) = expect_str(value, path, issues) else {
        return;
    };
    let expected = prefix.unwrap_or("<type>");
    let invalid = |issues: &mut Vec<Issue>| {
        issues.push(Issue::new(
            IssueCode::InvalidString,
            path.clone(),
            format!(
                "Invalid STIX Identifier: must comply with format '{}--<UUID>'",
                expected
            ),
        ));
    };
    let Some(id) = StixIdentifier::parse(s) else {
        invalid(issues);
        return;
    };
    match prefix {
        Some(p) if id.object_type() != p => invalid(issues),
        Some(_) => {}
        None => {
            if StixType::from_name(id.object_type()).is_none() {
                issues.push(Issue::new(
                    IssueCode::InvalidString,
                    path.clone(),
                    format!(
                        "Invalid STIX Identifier: unknown object type '{}'",
                        id.object_type()
                    ),
                ));
            }
        }
    }
}

fn check_timestamp(value: &Value, path: &IssuePath, issues: &mut Vec<Issue>) {
    let Some(s) = expect_str(value, path, issues) else {
        return;
    };
    match parse_timestamp(s) {
        Ok(_) => {}
        Err(TimestampError::Format) => issues.push(Issue::new(
            IssueCode::InvalidString,
            path.clone(),
            "Invalid datetime: expected RFC 3339 UTC format 'YYYY-MM-DDTHH:mm:ss[.SSS]Z'",
        )),
        Err(TimestampError::Calendar) => issues.push(Issue::new(
            IssueCode::InvalidDate,
            path.clone(),
            format!("Invalid date: '{}' is not a valid calendar date-time", s),
        )),
    }
}
