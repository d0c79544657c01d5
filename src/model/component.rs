//! Service components and their interface/utilization.

use indexmap::IndexSet;
use serde::Serialize;

use super::message::{Command, Notification, Property, SubscribedNotification};
use super::statemachine::StateMachine;

/// What a component exposes to its peers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Interface {
    pub commands: Vec<Command>,
    pub notifications: Vec<Notification>,
    pub properties: Vec<Property>,
}

impl Interface {
    pub fn has_notification(&self, name: &str) -> bool {
        self.notifications.iter().any(|n| n.name == name)
    }

    pub fn has_property(&self, name: &str) -> bool {
        self.property(name).is_some()
    }

    pub fn property(&self, name: &str) -> Option<&Property> {
        self.properties.iter().find(|p| p.name == name)
    }
}

/// What a component consumes from its peers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Utilization {
    pub notifications: Vec<SubscribedNotification>,
}

/// A compiled service component.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ServiceComponent {
    pub interface: Interface,
    pub utilization: Utilization,
    pub events: IndexSet<String>,
    pub statemachine: StateMachine,
}
