//! The compiler's error type

use thiserror::Error;

use super::kind::ErrorKind;

/// Result type used throughout the compiler.
pub type ParseResult<T> = Result<T, ParseError>;

/// A compilation failure.
///
/// Carries the violated invariant, a message naming the offending
/// declaration and, when known, the component it belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct ParseError {
    /// Categorized error kind
    pub kind: ErrorKind,
    /// Human-readable error message
    pub message: String,
    /// Component being processed when the error was raised
    pub component: Option<String>,
}

impl ParseError {
    /// Create a new error with no component context
    pub fn new(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            component: None,
        }
    }

    /// Create a document shape error
    pub fn invalid_document(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::InvalidDocument, message)
    }

    /// Attach the component being processed.
    ///
    /// An already recorded component is kept, so the innermost context wins.
    pub fn in_component(mut self, component: impl Into<String>) -> Self {
        if self.component.is_none() {
            self.component = Some(component.into());
        }
        self
    }

    /// Check the error kind
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind == kind
    }

    /// Format the error with its category and component for display
    pub fn format(&self) -> String {
        match &self.component {
            Some(component) => format!(
                "{} ({}) in component {}: {}",
                self.kind,
                self.kind.category_description(),
                component,
                self.message
            ),
            None => format!(
                "{} ({}): {}",
                self.kind,
                self.kind.category_description(),
                self.message
            ),
        }
    }
}

impl From<serde_yaml::Error> for ParseError {
    fn from(err: serde_yaml::Error) -> Self {
        let message = match err.location() {
            Some(loc) => format!("line {}, column {}: {err}", loc.line(), loc.column()),
            None => err.to_string(),
        };
        Self::new(ErrorKind::Syntax, message)
    }
}
