//! Intermediate representation of compiled service components.
//!
//! ## Key Types
//!
//! - [`Ir`] — Ordered mapping from component name to [`ServiceComponent`]
//! - [`ServiceComponent`] — Interface, utilization, events and state machine
//! - [`Interface`] / [`Utilization`] — What a component exposes and consumes
//! - [`StateMachine`] / [`Transition`] — Resolved (wildcard-free) transitions
//! - [`TypeDeclaration`] / [`PrimitiveType`] — Property value types
//!
//! Everything here is plain data. Values are built by the `semantic` layer
//! and are never mutated once [`crate::parse`] returns.

mod component;
mod ir;
mod message;
mod statemachine;
mod types;

pub use component::{Interface, ServiceComponent, Utilization};
pub use ir::Ir;
pub use message::{
    Command, Literal, Named, Notification, Property, PropertyChange, SubscribedNotification,
};
pub use statemachine::{StateMachine, Transition};
pub use types::{PrimitiveType, TypeDeclaration};
