//! Error kind definitions for compiler diagnostics
//!
//! Codes follow a naming convention: E{category}{number}
//! - E01xx: Document errors (YAML syntax, document shape)
//! - E02xx: Entry errors (types, messages, properties)
//! - E03xx: State machine errors
//! - E04xx: Component errors
//! - E05xx: Cross-component reference errors

use std::fmt;

/// The violated invariant behind a [`ParseError`](super::ParseError).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    // =========================================================================
    // E01xx: Document errors
    // =========================================================================
    /// Text is not well-formed YAML
    Syntax,
    /// Well-formed YAML that does not have the expected document shape
    InvalidDocument,

    // =========================================================================
    // E02xx: Entry errors
    // =========================================================================
    /// Type token is malformed or names an unknown primitive
    InvalidTypeDeclaration,
    /// Property entry is not a mapping or lacks its type
    InvalidPropertySpec,
    /// Command declares both `event` and `forward`
    ConflictingMessageRouting,

    // =========================================================================
    // E03xx: State machine errors
    // =========================================================================
    /// Start state is not among the declared states
    UnknownStartState,
    /// Transition state pattern is not a valid regular expression
    InvalidStatePattern,
    /// Transition state pattern matches no declared state
    NoMatchingState,
    /// Transition target is not among the declared states
    UnknownNextState,
    /// Transition event is not among the component's events
    UnknownEvent,
    /// Resolved transition `(state, next, event)` already exists
    DuplicateTransition,

    // =========================================================================
    // E04xx: Component errors
    // =========================================================================
    /// `using` names a component that was not declared before
    UnknownUsedComponent,
    /// Component name declared twice
    DuplicateComponent,

    // =========================================================================
    // E05xx: Cross-component reference errors
    // =========================================================================
    /// Local command or notification name contains the separator
    InvalidLocalName,
    /// Subscribed notification is not of the form `Publisher.Notification`
    MalformedReference,
    /// Subscribed notification names an unknown publisher
    UnknownComponentReference,
    /// Publisher does not expose the subscribed notification
    UnknownNotificationReference,
    /// Property change targets a property the subscriber does not declare
    UnknownPropertyReference,
    /// Property links to a notification its component does not declare
    UnknownPropertyNotificationLink,
}

impl ErrorKind {
    /// Get the diagnostic code (e.g., "E0301")
    pub fn code(&self) -> &'static str {
        match self {
            // Document
            Self::Syntax => "E0101",
            Self::InvalidDocument => "E0102",
            // Entry
            Self::InvalidTypeDeclaration => "E0201",
            Self::InvalidPropertySpec => "E0202",
            Self::ConflictingMessageRouting => "E0203",
            // State machine
            Self::UnknownStartState => "E0301",
            Self::InvalidStatePattern => "E0302",
            Self::NoMatchingState => "E0303",
            Self::UnknownNextState => "E0304",
            Self::UnknownEvent => "E0305",
            Self::DuplicateTransition => "E0306",
            // Component
            Self::UnknownUsedComponent => "E0401",
            Self::DuplicateComponent => "E0402",
            // Cross-reference
            Self::InvalidLocalName => "E0501",
            Self::MalformedReference => "E0502",
            Self::UnknownComponentReference => "E0503",
            Self::UnknownNotificationReference => "E0504",
            Self::UnknownPropertyReference => "E0505",
            Self::UnknownPropertyNotificationLink => "E0506",
        }
    }

    /// Get a short description of the error category
    pub fn category_description(&self) -> &'static str {
        match self {
            Self::Syntax | Self::InvalidDocument => "document error",
            Self::InvalidTypeDeclaration
            | Self::InvalidPropertySpec
            | Self::ConflictingMessageRouting => "entry error",
            Self::UnknownStartState
            | Self::InvalidStatePattern
            | Self::NoMatchingState
            | Self::UnknownNextState
            | Self::UnknownEvent
            | Self::DuplicateTransition => "state machine error",
            Self::UnknownUsedComponent | Self::DuplicateComponent => "component error",
            Self::InvalidLocalName
            | Self::MalformedReference
            | Self::UnknownComponentReference
            | Self::UnknownNotificationReference
            | Self::UnknownPropertyReference
            | Self::UnknownPropertyNotificationLink => "reference error",
        }
    }

    /// Check if this kind is only detectable once the whole document is built
    pub fn is_cross_reference(&self) -> bool {
        self.code().starts_with("E05")
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
