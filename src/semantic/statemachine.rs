//! State machine resolution.

use indexmap::IndexSet;
use regex::Regex;
use rustc_hash::FxHashSet;
use tracing::{debug, trace, warn};

use crate::errors::{ErrorKind, ParseError, ParseResult};
use crate::model::{StateMachine, Transition};
use crate::parser::TransitionDecl;

/// Compile a state pattern so that it must match a whole state name.
fn state_pattern(pattern: &str) -> ParseResult<Regex> {
    Regex::new(&format!("^(?:{pattern})$")).map_err(|e| {
        ParseError::new(
            ErrorKind::InvalidStatePattern,
            format!("state pattern '{pattern}' is not a valid regular expression: {e}"),
        )
    })
}

/// Collect names into an ordered set, reporting repeats.
pub(crate) fn name_set(names: &[String], what: &str) -> IndexSet<String> {
    let mut set = IndexSet::with_capacity(names.len());
    for name in names {
        if !set.insert(name.clone()) {
            warn!(name = %name, "duplicate {what} declaration ignored");
        }
    }
    set
}

/// Build a state machine, expanding transition state patterns.
///
/// Each transition's `state` is a regular expression matched against the
/// declared states; one concrete transition is produced per matching state,
/// in state declaration order. A resolved `(state, next, event)` that
/// already exists is an error, also when an earlier wildcard produced it.
pub fn build_statemachine(
    states: &[String],
    events: &IndexSet<String>,
    start: &str,
    transitions: &[TransitionDecl],
) -> ParseResult<StateMachine> {
    let states = name_set(states, "state");
    if !states.contains(start) {
        return Err(ParseError::new(
            ErrorKind::UnknownStartState,
            format!("unknown start state: {start}"),
        ));
    }

    let mut resolved: Vec<Transition> = Vec::new();
    let mut edges: FxHashSet<(String, String, String)> = FxHashSet::default();

    for decl in transitions {
        let pattern = state_pattern(&decl.state)?;
        let matching: Vec<&String> = states.iter().filter(|s| pattern.is_match(s)).collect();
        if matching.is_empty() {
            return Err(ParseError::new(
                ErrorKind::NoMatchingState,
                format!("state {} matches no state of the state machine", decl.state),
            ));
        }
        if !states.contains(&decl.next) {
            return Err(ParseError::new(
                ErrorKind::UnknownNextState,
                format!("next state {} not in state machine", decl.next),
            ));
        }
        if !events.contains(&decl.event) {
            return Err(ParseError::new(
                ErrorKind::UnknownEvent,
                format!("event {} not in events", decl.event),
            ));
        }
        if matching.len() > 1 || *matching[0] != decl.state {
            debug!(pattern = %decl.state, matches = matching.len(), "expanded state pattern");
        }

        for state in matching {
            let edge = (state.clone(), decl.next.clone(), decl.event.clone());
            if !edges.insert(edge) {
                return Err(ParseError::new(
                    ErrorKind::DuplicateTransition,
                    format!(
                        "transition ({state} -> {} / {}) already exists",
                        decl.next, decl.event
                    ),
                ));
            }
            trace!(state = %state, next = %decl.next, event = %decl.event, "resolved transition");
            resolved.push(Transition::new(
                state.as_str(),
                decl.next.as_str(),
                decl.event.as_str(),
                decl.action.clone(),
            ));
        }
    }

    Ok(StateMachine {
        states,
        start: start.to_string(),
        transitions: resolved,
    })
}
