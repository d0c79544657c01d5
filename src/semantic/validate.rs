//! Cross-component reference validation (phase 2).

use crate::base::constants::COMPONENT_SEPARATOR;
use crate::errors::{ErrorKind, ParseError, ParseResult};
use crate::model::{Ir, ServiceComponent};

/// Validate every cross-component reference of a fully built document.
///
/// Aliases are checked through the component they share. The first
/// violation is returned, tagged with the offending component.
pub fn validate_references(ir: &Ir) -> ParseResult<()> {
    for (name, component) in ir.unique_components() {
        validate_component(ir, name, component).map_err(|e| e.in_component(name))?;
    }
    Ok(())
}

fn validate_component(ir: &Ir, name: &str, component: &ServiceComponent) -> ParseResult<()> {
    for sub in &component.utilization.notifications {
        let (publisher, notification) = sub.reference().ok_or_else(|| {
            ParseError::new(
                ErrorKind::MalformedReference,
                format!(
                    "utilized notification {sub} of {name} must have the form \
                     <component>{COMPONENT_SEPARATOR}<notification>"
                ),
            )
        })?;

        let target = ir.get(publisher).ok_or_else(|| {
            ParseError::new(
                ErrorKind::UnknownComponentReference,
                format!("utilized notification {sub} of {name} refers to unknown component {publisher}"),
            )
        })?;

        if !target.interface.has_notification(notification) {
            return Err(ParseError::new(
                ErrorKind::UnknownNotificationReference,
                format!(
                    "utilized notification {sub} of {name} refers to unknown notification \
                     {notification} of {publisher}"
                ),
            ));
        }

        if let Some(change) = &sub.change {
            if !component.interface.has_property(&change.property) {
                return Err(ParseError::new(
                    ErrorKind::UnknownPropertyReference,
                    format!(
                        "utilized notification {sub} of {name} changes unknown property {}",
                        change.property
                    ),
                ));
            }
        }
    }

    for command in &component.interface.commands {
        if command.name.contains(COMPONENT_SEPARATOR) {
            return Err(ParseError::new(
                ErrorKind::InvalidLocalName,
                format!("command {command} of {name} must not contain '{COMPONENT_SEPARATOR}'"),
            ));
        }
    }

    for notification in &component.interface.notifications {
        if notification.name.contains(COMPONENT_SEPARATOR) {
            return Err(ParseError::new(
                ErrorKind::InvalidLocalName,
                format!(
                    "interface notification {notification} of {name} must not contain \
                     '{COMPONENT_SEPARATOR}'"
                ),
            ));
        }
    }

    for property in &component.interface.properties {
        if let Some(link) = &property.notification {
            if !component.interface.has_notification(link) {
                return Err(ParseError::new(
                    ErrorKind::UnknownPropertyNotificationLink,
                    format!("property {property} of {name} refers to unknown notification {link}"),
                ));
            }
        }
    }

    Ok(())
}
