//! Domain constants for declarative service component documents.

/// Separates a publisher component from one of its notifications.
pub const COMPONENT_SEPARATOR: char = '.';

/// Default marker for components that are skipped (comments, templates).
pub const RESERVED_MARKER: char = '_';

/// Default top-level key listing component declarations.
pub const ROOT_KEY: &str = "components";

/// Prefix of the property read accessor.
pub const GET_PREFIX: &str = "Get";

/// Prefix of the property write accessor.
pub const SET_PREFIX: &str = "Set";

/// Field keys recognized in component declarations.
pub mod keys {
    pub const USING: &str = "using";
    pub const INTERFACE: &str = "interface";
    pub const UTILIZATION: &str = "utilization";
    pub const EVENTS: &str = "events";
    pub const STATEMACHINE: &str = "statemachine";

    pub const COMMANDS: &str = "commands";
    pub const NOTIFICATIONS: &str = "notifications";
    pub const PROPERTIES: &str = "properties";

    pub const STATES: &str = "states";
    pub const START: &str = "start";
    pub const TRANSITIONS: &str = "transitions";
    pub const STATE: &str = "state";
    pub const NEXT: &str = "next";
    pub const EVENT: &str = "event";
    pub const ACTION: &str = "action";

    pub const FORWARD: &str = "forward";
    pub const CHANGE: &str = "change";
    pub const PROPERTY: &str = "property";
    pub const TYPE: &str = "type";
    pub const VALUE: &str = "value";
    pub const MIN: &str = "min";
    pub const MAX: &str = "max";
    pub const NOTIFICATION: &str = "notification";
    pub const READONLY: &str = "readonly";
}
