use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::version::Version;

/// Kind of a validation finding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValidationFailure {
    EmptyCard,
    InvalidFieldVersion,
    InvalidSchema,
    SizeLimitExceeded,
}

impl ValidationFailure {
    /// Fixed human-readable message for this kind.
    pub fn message(self) -> &'static str {
        match self {
            ValidationFailure::EmptyCard => "card body is empty",
            ValidationFailure::InvalidFieldVersion => "field version exceeds card version",
            ValidationFailure::InvalidSchema => "official card schema violated",
            ValidationFailure::SizeLimitExceeded => {
                "card exceeds the allowed card size for framework"
            }
        }
    }
}

impl fmt::Display for ValidationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// One issue recorded by a validation run.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub failure: ValidationFailure,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
}

impl Finding {
    pub fn new(failure: ValidationFailure) -> Self {
        Self {
            failure,
            message: failure.message().to_string(),
            detail: None,
        }
    }

    pub fn with_detail(failure: ValidationFailure, detail: impl Into<String>) -> Self {
        Self {
            detail: Some(detail.into()),
            ..Self::new(failure)
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.detail {
            Some(detail) => write!(f, "{}: {}", self.message, detail),
            None => f.write_str(&self.message),
        }
    }
}

/// A version string that is not `<major>.<minor>`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid version '{input}': expected <major>.<minor>")]
pub struct VersionError {
    pub input: String,
}

/// The schema for a version could not be loaded or compiled.
#[derive(Debug, Error)]
pub enum SchemaError {
    #[error("cannot read schema file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("schema file {} is not valid JSON: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("schema {version} does not compile: {reason}")]
    Compile { version: Version, reason: String },
}

#[derive(Debug, Error)]
pub enum SerializeError {
    #[error("failed to serialize card to JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("failed to serialize card to YAML: {0}")]
    Yaml(String),
}

/// Error kind for parse failures.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ParseErrorKind {
    Syntax,
    TypeMismatch,
    UnexpectedEof,
    Io,
}

/// Produced by `from_json` / `from_yaml` when a card document cannot be read.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub message: String,
    pub line: usize,
    pub column: usize,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.line > 0 {
            write!(f, "{}:{}: {}", self.line, self.column, self.message)
        } else {
            f.write_str(&self.message)
        }
    }
}

impl std::error::Error for ParseError {}

/// Failure of `Card::update_item` / `Card::update_action`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum UpdateError {
    #[error("no component found with id '{0}'")]
    IdNotFound(String),
    #[error("field '{field}' is not declared on {node}")]
    FieldNotFound { node: &'static str, field: String },
    #[error("value does not match the field types of {node}: {reason}")]
    InvalidValueType { node: &'static str, reason: String },
    #[error("update patch must be a JSON object")]
    PatchNotObject,
}

/// A platform catalog that cannot be loaded.
#[derive(Debug, Error)]
pub enum PlatformError {
    #[error("cannot read platform catalog {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid platform catalog: {0}")]
    Syntax(String),
    #[error("platform '{name}': {reason}")]
    InvalidProfile { name: String, reason: String },
}

/// Outcome of `CardValidator::validate` when it does not pass.
#[derive(Debug, Error)]
pub enum ValidationError {
    #[error("card failed validation with {findings} finding(s)")]
    Failed { findings: usize },
    #[error(transparent)]
    Schema(#[from] SchemaError),
    #[error(transparent)]
    Serialize(#[from] SerializeError),
}

/// Any failure of the [`load`](crate::load) entry point.
#[derive(Debug, Error)]
pub enum CardError {
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error("card failed validation with {} finding(s)", .0.len())]
    Invalid(Vec<Finding>),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}
