//! Transition declarations, before pattern expansion.

use serde_yaml::Value;

use crate::base::constants::keys;
use crate::errors::ParseResult;
use crate::syntax::{as_mapping, as_sequence, optional_string, required_field, scalar_string};

/// A transition as written: `state` is a pattern over the declared states.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionDecl {
    pub state: String,
    pub next: String,
    pub event: String,
    pub action: Option<String>,
}

impl TransitionDecl {
    pub fn new(state: &str, next: &str, event: &str) -> Self {
        Self {
            state: state.to_string(),
            next: next.to_string(),
            event: event.to_string(),
            action: None,
        }
    }

    pub fn with_action(mut self, action: &str) -> Self {
        self.action = Some(action.to_string());
        self
    }

    fn decode(node: &Value, index: usize) -> ParseResult<Self> {
        let what = format!("transition #{}", index + 1);
        let map = as_mapping(node, &what)?;
        let text = |key: &str| -> ParseResult<String> {
            scalar_string(required_field(map, key, &what)?, &format!("'{key}' of {what}"))
        };
        Ok(Self {
            state: text(keys::STATE)?,
            next: text(keys::NEXT)?,
            event: text(keys::EVENT)?,
            action: optional_string(map, keys::ACTION, &what)?,
        })
    }
}

/// Decode a `transitions` list. A missing list has no transitions.
pub fn parse_transitions(node: Option<&Value>) -> ParseResult<Vec<TransitionDecl>> {
    let Some(node) = node else {
        return Ok(Vec::new());
    };
    as_sequence(node, keys::TRANSITIONS)?
        .iter()
        .enumerate()
        .map(|(index, item)| TransitionDecl::decode(item, index))
        .collect()
}
