//! Typed access to untyped YAML nodes.

use serde_yaml::{Mapping, Value};

use crate::errors::{ParseError, ParseResult};
use crate::model::Literal;

/// Short description of a node's kind for error messages.
fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "nothing",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a list",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

/// Look up `key`, treating an explicit `~`/empty value as absent.
pub fn field<'a>(map: &'a Mapping, key: &str) -> Option<&'a Value> {
    map.get(key).filter(|v| !v.is_null())
}

/// Look up a field that must be present.
pub fn required_field<'a>(map: &'a Mapping, key: &str, what: &str) -> ParseResult<&'a Value> {
    field(map, key)
        .ok_or_else(|| ParseError::invalid_document(format!("{what} is missing '{key}'")))
}

pub fn as_mapping<'a>(value: &'a Value, what: &str) -> ParseResult<&'a Mapping> {
    value.as_mapping().ok_or_else(|| {
        ParseError::invalid_document(format!("{what} must be a mapping, found {}", kind_of(value)))
    })
}

/// A list node. A missing (`~`) list is empty.
pub fn as_sequence<'a>(value: &'a Value, what: &str) -> ParseResult<&'a [Value]> {
    match value {
        Value::Null => Ok(&[][..]),
        Value::Sequence(seq) => Ok(seq.as_slice()),
        other => Err(ParseError::invalid_document(format!(
            "{what} must be a list, found {}",
            kind_of(other)
        ))),
    }
}

/// Render a scalar node as a name.
///
/// Numbers and booleans are accepted and rendered in their textual form,
/// so `- 1` and `- true` are valid (if unusual) names.
pub fn scalar_string(value: &Value, what: &str) -> ParseResult<String> {
    match value {
        Value::String(s) => Ok(s.clone()),
        Value::Number(n) => Ok(n.to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        other => Err(ParseError::invalid_document(format!(
            "{what} must be a name, found {}",
            kind_of(other)
        ))),
    }
}

pub fn optional_string(map: &Mapping, key: &str, what: &str) -> ParseResult<Option<String>> {
    field(map, key)
        .map(|v| scalar_string(v, &format!("'{key}' of {what}")))
        .transpose()
}

pub fn optional_bool(map: &Mapping, key: &str, what: &str) -> ParseResult<Option<bool>> {
    match field(map, key) {
        None => Ok(None),
        Some(Value::Bool(b)) => Ok(Some(*b)),
        Some(other) => Err(ParseError::invalid_document(format!(
            "'{key}' of {what} must be a boolean, found {}",
            kind_of(other)
        ))),
    }
}

/// Convert a scalar node into a [`Literal`].
pub fn literal(value: &Value, what: &str) -> ParseResult<Literal> {
    match value {
        Value::Bool(b) => Ok(Literal::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Ok(Literal::Integer(i))
            } else if let Some(u) = n.as_u64() {
                Ok(Literal::Unsigned(u))
            } else if let Some(x) = n.as_f64() {
                Ok(Literal::Float(x))
            } else {
                Ok(Literal::Text(n.to_string()))
            }
        }
        Value::String(s) => Ok(Literal::Text(s.clone())),
        other => Err(ParseError::invalid_document(format!(
            "{what} must be a scalar value, found {}",
            kind_of(other)
        ))),
    }
}

pub fn optional_literal(map: &Mapping, key: &str, what: &str) -> ParseResult<Option<Literal>> {
    field(map, key)
        .map(|v| literal(v, &format!("'{key}' of {what}")))
        .transpose()
}

/// A list of scalar names.
pub fn name_list(value: &Value, what: &str) -> ParseResult<Vec<String>> {
    as_sequence(value, what)?
        .iter()
        .map(|item| scalar_string(item, &format!("entry of {what}")))
        .collect()
}

/// Decompose a single-key mapping into its key and value.
pub fn single_entry<'a>(map: &'a Mapping, what: &str) -> ParseResult<(String, &'a Value)> {
    let mut iter = map.iter();
    match (iter.next(), iter.next()) {
        (Some((key, value)), None) => Ok((scalar_string(key, &format!("name of {what}"))?, value)),
        (None, _) => Err(ParseError::invalid_document(format!("{what} is an empty mapping"))),
        (Some(_), Some(_)) => {
            let keys: Vec<String> = map
                .keys()
                .map(|k| scalar_string(k, what).unwrap_or_else(|_| "?".to_string()))
                .collect();
            Err(ParseError::invalid_document(format!(
                "{what} must have exactly one key, found [{}] (check indentation)",
                keys.join(", ")
            )))
        }
    }
}
