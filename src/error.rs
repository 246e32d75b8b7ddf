use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use std::fmt;
use thiserror::Error;

use crate::types::ValidatedObject;

/// One step in an [`IssuePath`]: an object key or an array index.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PathSegment {
    Key(String),
    Index(usize),
}

impl From<&str> for PathSegment {
    fn from(key: &str) -> Self {
        PathSegment::Key(key.to_string())
    }
}

impl From<usize> for PathSegment {
    fn from(index: usize) -> Self {
        PathSegment::Index(index)
    }
}

/// Location of an issue inside a candidate document.
///
/// Serializes as a plain array (`["x_mitre_contents", 0, "object_ref"]`) and
/// displays in dotted form (`x_mitre_contents[0].object_ref`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssuePath(Vec<PathSegment>);

impl IssuePath {
    /// The empty path, pointing at the document itself.
    pub fn root() -> Self {
        IssuePath(Vec::new())
    }

    /// Returns a new path extended by an object key.
    pub fn key(&self, key: &str) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Key(key.to_string()));
        IssuePath(segments)
    }

    /// Returns a new path extended by an array index.
    pub fn index(&self, index: usize) -> Self {
        let mut segments = self.0.clone();
        segments.push(PathSegment::Index(index));
        IssuePath(segments)
    }

    /// Returns `prefix` followed by this path.
    pub fn prefixed(&self, prefix: &IssuePath) -> Self {
        let mut segments = prefix.0.clone();
        segments.extend(self.0.iter().cloned());
        IssuePath(segments)
    }

    pub fn segments(&self) -> &[PathSegment] {
        &self.0
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<PathSegment>> FromIterator<S> for IssuePath {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        IssuePath(iter.into_iter().map(Into::into).collect())
    }
}

impl fmt::Display for IssuePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            match segment {
                PathSegment::Key(key) if i == 0 => write!(f, "{}", key)?,
                PathSegment::Key(key) => write!(f, ".{}", key)?,
                PathSegment::Index(index) => write!(f, "[{}]", index)?,
            }
        }
        Ok(())
    }
}

/// Categorical issue code carried by every [`Issue`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueCode {
    InvalidType,
    InvalidLiteral,
    InvalidString,
    InvalidDate,
    InvalidEnumValue,
    TooSmall,
    TooBig,
    MissingField,
    UnrecognizedKeys,
    Custom,
    UnknownType,
}

impl IssueCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            IssueCode::InvalidType => "invalid_type",
            IssueCode::InvalidLiteral => "invalid_literal",
            IssueCode::InvalidString => "invalid_string",
            IssueCode::InvalidDate => "invalid_date",
            IssueCode::InvalidEnumValue => "invalid_enum_value",
            IssueCode::TooSmall => "too_small",
            IssueCode::TooBig => "too_big",
            IssueCode::MissingField => "missing_field",
            IssueCode::UnrecognizedKeys => "unrecognized_keys",
            IssueCode::Custom => "custom",
            IssueCode::UnknownType => "unknown_type",
        }
    }

    /// The failure class this code belongs to. Every code maps to exactly one.
    pub fn kind(&self) -> IssueKind {
        match self {
            IssueCode::InvalidType => IssueKind::TypeMismatch,
            IssueCode::InvalidString | IssueCode::InvalidDate => IssueKind::FormatMismatch,
            IssueCode::InvalidLiteral | IssueCode::InvalidEnumValue => IssueKind::EnumMismatch,
            IssueCode::TooSmall | IssueCode::TooBig => IssueKind::SizeViolation,
            IssueCode::MissingField => IssueKind::MissingRequiredField,
            IssueCode::UnrecognizedKeys => IssueKind::UnknownField,
            IssueCode::Custom => IssueKind::RefinementViolation,
            IssueCode::UnknownType => IssueKind::UnknownType,
        }
    }
}

impl fmt::Display for IssueCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Failure taxonomy. Coarser than [`IssueCode`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum IssueKind {
    TypeMismatch,
    FormatMismatch,
    EnumMismatch,
    SizeViolation,
    UnknownField,
    MissingRequiredField,
    RefinementViolation,
    UnknownType,
}

/// A single validation failure tied to a location in the candidate.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub path: IssuePath,
    pub message: String,
    pub code: IssueCode,
}

impl Issue {
    pub fn new(code: IssueCode, path: IssuePath, message: impl Into<String>) -> Self {
        Issue {
            path,
            message: message.into(),
            code,
        }
    }

    /// A refinement failure (`custom` code).
    pub fn custom(path: IssuePath, message: impl Into<String>) -> Self {
        Issue::new(IssueCode::Custom, path, message)
    }

    pub fn kind(&self) -> IssueKind {
        self.code.kind()
    }
}

impl fmt::Display for Issue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.path.is_root() {
            write!(f, "(root): {} [{}]", self.message, self.code)
        } else {
            write!(f, "{}: {} [{}]", self.path, self.message, self.code)
        }
    }
}

fn render_issues(issues: &[Issue]) -> String {
    issues
        .iter()
        .map(|issue| format!("  {}", issue))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Aggregate failure returned by the throwing ("parse") consumption mode.
///
/// Always carries at least one issue, in the order validation found them.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("validation failed with {} issue(s):\n{}", .issues.len(), render_issues(.issues))]
pub struct ValidationError {
    issues: Vec<Issue>,
}

impl ValidationError {
    pub(crate) fn new(issues: Vec<Issue>) -> Self {
        debug_assert!(!issues.is_empty(), "validation error without issues");
        ValidationError { issues }
    }

    pub fn issues(&self) -> &[Issue] {
        &self.issues
    }

    pub fn into_issues(self) -> Vec<Issue> {
        self.issues
    }

    /// True if any issue message contains `needle`.
    pub fn mentions(&self, needle: &str) -> bool {
        self.issues.iter().any(|issue| issue.message.contains(needle))
    }
}

/// Result of the non-throwing ("safe-parse") consumption mode.
///
/// Serializes as `{ "ok": true, "value": {...} }` or
/// `{ "ok": false, "issues": [...] }`.
#[derive(Clone, Debug, PartialEq)]
pub enum SafeParseResult {
    Success(ValidatedObject),
    Failure(Vec<Issue>),
}

impl SafeParseResult {
    pub fn is_success(&self) -> bool {
        matches!(self, SafeParseResult::Success(_))
    }

    pub fn value(&self) -> Option<&ValidatedObject> {
        match self {
            SafeParseResult::Success(value) => Some(value),
            SafeParseResult::Failure(_) => None,
        }
    }

    /// Issues of a failed validation; empty on success.
    pub fn issues(&self) -> &[Issue] {
        match self {
            SafeParseResult::Success(_) => &[],
            SafeParseResult::Failure(issues) => issues,
        }
    }

    pub fn into_result(self) -> Result<ValidatedObject, ValidationError> {
        match self {
            SafeParseResult::Success(value) => Ok(value),
            SafeParseResult::Failure(issues) => Err(ValidationError::new(issues)),
        }
    }
}

impl From<Result<ValidatedObject, Vec<Issue>>> for SafeParseResult {
    fn from(result: Result<ValidatedObject, Vec<Issue>>) -> Self {
        match result {
            Ok(value) => SafeParseResult::Success(value),
            Err(issues) => SafeParseResult::Failure(issues),
        }
    }
}

impl Serialize for SafeParseResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        match self {
            SafeParseResult::Success(value) => {
                map.serialize_entry("ok", &true)?;
                map.serialize_entry("value", value)?;
            }
            SafeParseResult::Failure(issues) => {
                map.serialize_entry("ok", &false)?;
                map.serialize_entry("issues", issues)?;
            }
        }
        map.end()
    }
}

/// Produced when an input string cannot be read as a document.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum DocumentError {
    #[error("empty input")]
    Empty,
    #[error("syntax error: {message}")]
    Syntax {
        message: String,
        line: Option<usize>,
        column: Option<usize>,
    },
    #[error("document root must be an object, got {found}")]
    RootNotObject { found: &'static str },
    #[error("multi-document YAML is not supported")]
    MultiDocument,
}

/// Produced by registry lookups for a type tag with no registered schema.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("unknown STIX object type '{0}'")]
pub struct UnknownTypeError(pub String);

/// Serialization error.
#[derive(Debug, Error)]
#[error("failed to serialize object: {0}")]
pub struct SerializeError(#[from] serde_json::Error);

/// Combined error type for the [`load`](crate::load) entry point.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LoadError {
    #[error("document error: {0}")]
    Document(#[from] DocumentError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl LoadError {
    /// Validation issues, if the failure happened after the document was read.
    pub fn issues(&self) -> &[Issue] {
        match self {
            LoadError::Document(_) => &[],
            LoadError::Validation(e) => e.issues(),
        }
    }
}
