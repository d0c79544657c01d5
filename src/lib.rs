//! # service-components
//!
//! Parser, semantic validator and IR builder for declarative service
//! components: finite state machines that exchange commands, notifications
//! and property changes with their peers.
//!
//! ## Module Structure (dependency order)
//!
//! ```text
//! compile   → parse(text) driver
//!   ↓
//! semantic  → state machine expansion, component building, cross-references
//!   ↓
//! parser    → type tokens, bare/named message entries, transitions
//!   ↓
//! syntax    → YAML document and node shape checks
//!   ↓
//! model     → IR types (Ir, ServiceComponent, StateMachine, ...)
//!   ↓
//! base      → constants, ParseOptions
//! ```
//!
//! The compiled [`Ir`] is read-only: code emitters iterate it, they never
//! change it.

// ============================================================================
// MODULES (dependency order: base → model → syntax → parser → semantic → compile)
// ============================================================================

/// Foundation: separator, reserved marker, field keys, options
pub mod base;

/// Error type shared by every layer
pub mod errors;

/// IR data types
pub mod model;

/// YAML document loading and node access
pub mod syntax;

/// Message entry, type token and transition parsing
pub mod parser;

/// Component building and cross-component validation
pub mod semantic;

mod compile;

pub use base::ParseOptions;
pub use compile::{parse, parse_with};
pub use errors::{ErrorKind, ParseError, ParseResult};
pub use model::{
    Command, Interface, Ir, Literal, Named, Notification, PrimitiveType, Property,
    PropertyChange, ServiceComponent, StateMachine, SubscribedNotification, Transition,
    TypeDeclaration, Utilization,
};
