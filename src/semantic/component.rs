//! Component construction (phase 1).

use tracing::debug;

use super::statemachine::{build_statemachine, name_set};
use crate::base::constants::keys;
use crate::errors::{ErrorKind, ParseError, ParseResult};
use crate::model::{Ir, ServiceComponent};
use crate::parser::{parse_interface, parse_transitions, parse_utilization};
use crate::syntax::{ComponentDecl, as_mapping, field, name_list, required_field, scalar_string};

/// Result of building one declaration.
#[derive(Debug, Clone, PartialEq)]
pub enum BuiltComponent {
    /// A new component.
    Defined(ServiceComponent),
    /// An alias of the named, previously declared component.
    Alias(String),
}

/// Build one component declaration.
///
/// `prior` holds the components declared before this one; a `using`
/// reference must name one of them.
pub fn build_component(
    name: &str,
    decl: &ComponentDecl<'_>,
    prior: &Ir,
) -> ParseResult<BuiltComponent> {
    let map = match decl {
        ComponentDecl::Using(target) => {
            if !prior.contains(target) {
                return Err(ParseError::new(
                    ErrorKind::UnknownUsedComponent,
                    format!("unknown component {target} used in component {name}"),
                ));
            }
            debug!(component = name, target = %target, "aliasing component");
            return Ok(BuiltComponent::Alias(target.clone()));
        }
        ComponentDecl::Definition(map) => *map,
    };

    let interface = parse_interface(field(map, keys::INTERFACE))?;
    let utilization = parse_utilization(field(map, keys::UTILIZATION))?;
    let events = match field(map, keys::EVENTS) {
        Some(node) => name_set(&name_list(node, keys::EVENTS)?, "event"),
        None => Default::default(),
    };

    let sm = as_mapping(
        required_field(map, keys::STATEMACHINE, "component")?,
        keys::STATEMACHINE,
    )?;
    let states = name_list(
        required_field(sm, keys::STATES, keys::STATEMACHINE)?,
        keys::STATES,
    )?;
    let start = scalar_string(
        required_field(sm, keys::START, keys::STATEMACHINE)?,
        keys::START,
    )?;
    let transitions = parse_transitions(field(sm, keys::TRANSITIONS))?;
    let statemachine = build_statemachine(&states, &events, &start, &transitions)?;

    debug!(
        component = name,
        commands = interface.commands.len(),
        notifications = interface.notifications.len(),
        properties = interface.properties.len(),
        subscriptions = utilization.notifications.len(),
        transitions = statemachine.transitions.len(),
        "built component"
    );

    Ok(BuiltComponent::Defined(ServiceComponent {
        interface,
        utilization,
        events,
        statemachine,
    }))
}
