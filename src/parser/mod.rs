//! Parser: declarative entries → typed messages.
//!
//! ## Entry forms
//!
//! Every command, notification, property and subscribed notification is
//! written either as a bare name or as a single-key mapping whose value
//! carries the remaining fields:
//!
//! ```yaml
//! commands:
//!   - Stop                       # bare
//!   - Start: {event: Starting}   # named
//! ```
//!
//! [`Entry`] decodes both forms once; the `parse_*` functions dispatch on
//! the variant.

mod entry;
mod messages;
mod transition;
mod types;

pub use entry::Entry;
pub use messages::{
    parse_command, parse_interface, parse_notification, parse_property,
    parse_subscribed_notification, parse_utilization,
};
pub use transition::{TransitionDecl, parse_transitions};
pub use types::resolve_type;
