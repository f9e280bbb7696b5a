use serde_json::Value;
use serde_json::error::Category;

use crate::error::{ParseError, ParseErrorKind};
use crate::types::Card;

/// Parse a JSON card document.
///
/// Performs deserialization and type mapping only; the result is not
/// validated against any platform.
pub fn from_json(input: &str) -> Result<Card, ParseError> {
    if input.trim().is_empty() {
        return Err(empty_input());
    }
    serde_json::from_str(input).map_err(json_error)
}

/// Convert an already-parsed JSON value into a card.
pub fn from_value(value: Value) -> Result<Card, ParseError> {
    if !value.is_object() {
        return Err(ParseError {
            kind: ParseErrorKind::TypeMismatch,
            message: "card root must be a JSON object".to_string(),
            line: 0,
            column: 0,
        });
    }
    serde_json::from_value(value).map_err(json_error)
}

/// Parse a YAML card document (the same shape as the JSON form).
pub fn from_yaml(input: &str) -> Result<Card, ParseError> {
    if input.trim().is_empty() {
        return Err(empty_input());
    }
    let value: Value = serde_saphyr::from_str(input).map_err(|e| ParseError {
        kind: ParseErrorKind::Syntax,
        message: e.to_string(),
        line: 0,
        column: 0,
    })?;
    from_value(value)
}

fn empty_input() -> ParseError {
    ParseError {
        kind: ParseErrorKind::Syntax,
        message: "empty input".to_string(),
        line: 0,
        column: 0,
    }
}

fn json_error(e: serde_json::Error) -> ParseError {
    let kind = match e.classify() {
        Category::Syntax => ParseErrorKind::Syntax,
        Category::Data => ParseErrorKind::TypeMismatch,
        Category::Eof => ParseErrorKind::UnexpectedEof,
        Category::Io => ParseErrorKind::Io,
    };
    ParseError {
        kind,
        message: e.to_string(),
        line: e.line(),
        column: e.column(),
    }
}
