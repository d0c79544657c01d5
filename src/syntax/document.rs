//! Document root: the list of component declarations.

use serde_yaml::{Mapping, Value};

use super::node::{as_mapping, as_sequence, field, scalar_string, single_entry};
use crate::base::constants::keys;
use crate::errors::{ParseError, ParseResult};

/// How a component is declared.
#[derive(Debug, Clone)]
pub enum ComponentDecl<'a> {
    /// `using: <Other>`, an alias of a previously declared component.
    Using(String),
    /// A full definition (interface, utilization, events, statemachine).
    Definition(&'a Mapping),
}

/// A loaded document.
#[derive(Debug)]
pub struct Document {
    root: Value,
}

impl Document {
    /// Load YAML text.
    pub fn load(text: &str) -> ParseResult<Self> {
        if text.trim().is_empty() {
            return Err(ParseError::invalid_document("document is empty"));
        }
        let root: Value = serde_yaml::from_str(text)?;
        Ok(Self { root })
    }

    /// Component declarations listed under `root_key`, in document order.
    pub fn components(&self, root_key: &str) -> ParseResult<Vec<(String, ComponentDecl<'_>)>> {
        let root = as_mapping(&self.root, "document")?;
        let list = root.get(root_key).ok_or_else(|| {
            ParseError::invalid_document(format!("document is missing '{root_key}'"))
        })?;

        as_sequence(list, &format!("'{root_key}'"))?
            .iter()
            .map(|entry| {
                let map = as_mapping(entry, "component entry")?;
                let (name, body) = single_entry(map, "component entry")?;
                let decl = component_decl(&name, body)?;
                Ok((name, decl))
            })
            .collect()
    }
}

fn component_decl<'a>(name: &str, body: &'a Value) -> ParseResult<ComponentDecl<'a>> {
    let what = format!("component {name}");
    let map = as_mapping(body, &what)?;
    match map.get(keys::USING) {
        Some(target) => {
            let target = scalar_string(target, &format!("'{}' of {what}", keys::USING))?;
            if map.len() > 1 {
                tracing::warn!(
                    component = name,
                    "ignoring fields beside '{}' in aliased component",
                    keys::USING
                );
            }
            Ok(ComponentDecl::Using(target))
        }
        None => {
            if field(map, keys::STATEMACHINE).is_none() {
                return Err(ParseError::invalid_document(format!(
                    "{what} is missing '{}'",
                    keys::STATEMACHINE
                )));
            }
            Ok(ComponentDecl::Definition(map))
        }
    }
}
