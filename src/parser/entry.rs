//! Polymorphic message entries.

use serde_yaml::{Mapping, Value};

use crate::errors::{ErrorKind, ParseError, ParseResult};
use crate::syntax::{as_mapping, scalar_string, single_entry};

/// A message entry: a bare name, or a name with a field mapping.
#[derive(Debug, Clone, PartialEq)]
pub enum Entry<'a> {
    Bare(String),
    Named {
        name: String,
        /// `None` for an empty body (`- Start:`).
        fields: Option<&'a Mapping>,
    },
}

impl<'a> Entry<'a> {
    /// Classify a node as one of the two entry forms.
    pub fn decode(node: &'a Value, what: &str) -> ParseResult<Self> {
        Self::decode_as(node, what, ErrorKind::InvalidDocument)
    }

    /// Like [`Entry::decode`], reporting a non-mapping body as `body_kind`.
    pub fn decode_as(node: &'a Value, what: &str, body_kind: ErrorKind) -> ParseResult<Self> {
        match node {
            Value::Mapping(map) => {
                let (name, body) = single_entry(map, what)?;
                let fields = match body {
                    Value::Null => None,
                    other => Some(
                        as_mapping(other, &format!("fields of {what} {name}"))
                            .map_err(|e| ParseError { kind: body_kind, ..e })?,
                    ),
                };
                Ok(Entry::Named { name, fields })
            }
            other => Ok(Entry::Bare(scalar_string(other, what)?)),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Entry::Bare(name) | Entry::Named { name, .. } => name,
        }
    }

    /// The field mapping, if this is the named form with a body.
    pub fn fields(&self) -> Option<&'a Mapping> {
        match self {
            Entry::Bare(_) => None,
            Entry::Named { fields, .. } => *fields,
        }
    }

    pub fn into_name(self) -> String {
        match self {
            Entry::Bare(name) | Entry::Named { name, .. } => name,
        }
    }
}
