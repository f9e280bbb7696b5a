//! [`Card`] → JSON / YAML serialization.
//!
//! Absent optional fields are omitted and object keys keep declaration
//! order, so the compact JSON form is also what the size check measures.

use serde_json::Value;

use crate::error::SerializeError;
use crate::types::Card;

/// Compact JSON, the form hosts receive.
pub fn to_json(card: &Card) -> Result<String, SerializeError> {
    Ok(serde_json::to_string(card)?)
}

pub fn to_json_pretty(card: &Card) -> Result<String, SerializeError> {
    Ok(serde_json::to_string_pretty(card)?)
}

/// The card as a JSON value, the form checked against the schema.
pub fn to_value(card: &Card) -> Result<Value, SerializeError> {
    Ok(serde_json::to_value(card)?)
}

/// YAML rendering of the card's JSON form, for authoring and review.
pub fn to_yaml(card: &Card) -> Result<String, SerializeError> {
    let value = to_value(card)?;
    serde_saphyr::to_string(&value).map_err(|e| SerializeError::Yaml(e.to_string()))
}
