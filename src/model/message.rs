//! Messages a component exposes or consumes.

use std::fmt;

use serde::Serialize;

use super::types::TypeDeclaration;
use crate::base::constants::{COMPONENT_SEPARATOR, GET_PREFIX, SET_PREFIX};

/// Anything identified by a (possibly dotted) name.
pub trait Named {
    fn name(&self) -> &str;

    /// The name with every component separator removed.
    ///
    /// `Other.Ready` becomes `OtherReady`, which is usable as an identifier.
    fn normalized_name(&self) -> String {
        self.name()
            .chars()
            .filter(|c| *c != COMPONENT_SEPARATOR)
            .collect()
    }
}

/// A scalar value from the document.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Literal {
    Bool(bool),
    Integer(i64),
    /// Integers above `i64::MAX`, e.g. `uint64` limits.
    Unsigned(u64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Literal::Bool(b) => write!(f, "{b}"),
            Literal::Integer(i) => write!(f, "{i}"),
            Literal::Unsigned(u) => write!(f, "{u}"),
            Literal::Float(x) => write!(f, "{x}"),
            Literal::Text(s) => f.write_str(s),
        }
    }
}

/// A request a component accepts.
///
/// A command either raises a local event or is forwarded, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Command {
    pub name: String,
    pub event: Option<String>,
    pub forward: Option<String>,
}

impl Command {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            event: None,
            forward: None,
        }
    }
}

/// A fact a component can emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub name: String,
}

impl Notification {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A typed value a component exposes through accessors.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Property {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeDeclaration,
    pub value: Option<Literal>,
    pub min: Option<Literal>,
    pub max: Option<Literal>,
    /// Notification emitted when the property changes.
    pub notification: Option<String>,
    pub readonly: bool,
}

impl Property {
    /// Accessor names: `Get<Name>` always, `Set<Name>` unless readonly.
    pub fn accessor_names(&self) -> Vec<String> {
        let normalized = self.normalized_name();
        let mut names = vec![format!("{GET_PREFIX}{normalized}")];
        if !self.readonly {
            names.push(format!("{SET_PREFIX}{normalized}"));
        }
        names
    }
}

/// Assignment applied to a local property when a subscribed notification fires.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropertyChange {
    pub property: String,
    pub value: Literal,
}

/// A peer notification a component consumes, named `Publisher.Notification`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscribedNotification {
    pub name: String,
    pub event: Option<String>,
    pub action: Option<String>,
    pub change: Option<PropertyChange>,
}

impl SubscribedNotification {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            event: None,
            action: None,
            change: None,
        }
    }

    /// Split into `(publisher, notification)`.
    ///
    /// Returns `None` unless the name has exactly two segments.
    pub fn reference(&self) -> Option<(&str, &str)> {
        let mut segments = self.name.split(COMPONENT_SEPARATOR);
        match (segments.next(), segments.next(), segments.next()) {
            (Some(publisher), Some(notification), None) => Some((publisher, notification)),
            _ => None,
        }
    }
}

macro_rules! impl_named {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Named for $ty {
                fn name(&self) -> &str {
                    &self.name
                }
            }

            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(&self.name)
                }
            }
        )*
    };
}

impl_named!(Command, Notification, Property, SubscribedNotification);
