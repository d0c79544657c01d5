//! Resolved state machines.

use indexmap::IndexSet;
use serde::Serialize;

/// An edge of a resolved state machine.
///
/// `state` always names one concrete declared state; wildcard patterns are
/// expanded before a transition is stored.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Transition {
    pub state: String,
    pub next: String,
    pub event: String,
    pub action: Option<String>,
}

impl Transition {
    pub fn new(
        state: impl Into<String>,
        next: impl Into<String>,
        event: impl Into<String>,
        action: Option<String>,
    ) -> Self {
        Self {
            state: state.into(),
            next: next.into(),
            event: event.into(),
            action,
        }
    }
}

/// A component's state machine.
///
/// Invariant: `start` and every transition's `state` and `next` are members
/// of `states`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StateMachine {
    /// Declared states, in declaration order.
    pub states: IndexSet<String>,
    pub start: String,
    /// Resolved transitions, in declaration then expansion order.
    pub transitions: Vec<Transition>,
}

impl StateMachine {
    pub fn has_state(&self, state: &str) -> bool {
        self.states.contains(state)
    }

    /// Transitions leaving `state`.
    pub fn transitions_from<'a>(&'a self, state: &'a str) -> impl Iterator<Item = &'a Transition> {
        self.transitions.iter().filter(move |t| t.state == state)
    }
}
