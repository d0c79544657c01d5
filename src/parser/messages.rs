//! Message entry parsing: commands, notifications, properties, subscriptions.

use serde_yaml::{Mapping, Value};

use super::entry::Entry;
use super::types::resolve_type;
use crate::base::constants::keys;
use crate::errors::{ErrorKind, ParseError, ParseResult};
use crate::model::{
    Command, Interface, Notification, Property, PropertyChange, SubscribedNotification,
    Utilization,
};
use crate::syntax::{
    as_mapping, as_sequence, field, literal, optional_bool, optional_literal, optional_string,
    required_field, scalar_string,
};

/// Parse a command: `Name` or `Name: {event | forward}`.
pub fn parse_command(node: &Value) -> ParseResult<Command> {
    let entry = Entry::decode(node, "command")?;
    let Some(fields) = entry.fields() else {
        return Ok(Command::new(entry.into_name()));
    };

    let what = format!("command {}", entry.name());
    let event = optional_string(fields, keys::EVENT, &what)?;
    let forward = optional_string(fields, keys::FORWARD, &what)?;
    if let (Some(event), Some(forward)) = (&event, &forward) {
        return Err(ParseError::new(
            ErrorKind::ConflictingMessageRouting,
            format!(
                "{what} may either raise event {event} or forward to {forward}, not both"
            ),
        ));
    }

    Ok(Command {
        name: entry.into_name(),
        event,
        forward,
    })
}

/// Parse a notification. Fields of the named form are ignored.
pub fn parse_notification(node: &Value) -> ParseResult<Notification> {
    let entry = Entry::decode(node, "notification")?;
    Ok(Notification::new(entry.into_name()))
}

/// Parse a property. Only the named form is accepted and `type` is required.
pub fn parse_property(node: &Value) -> ParseResult<Property> {
    let entry = Entry::decode_as(node, "property", ErrorKind::InvalidPropertySpec)?;
    let what = format!("property {}", entry.name());

    let fields = entry.fields().ok_or_else(|| {
        ParseError::new(
            ErrorKind::InvalidPropertySpec,
            format!("{what} must be a mapping declaring at least its type"),
        )
    })?;
    let token = field(fields, keys::TYPE).ok_or_else(|| {
        ParseError::new(
            ErrorKind::InvalidPropertySpec,
            format!("{what} is missing '{}'", keys::TYPE),
        )
    })?;
    let token = token.as_str().ok_or_else(|| {
        ParseError::new(
            ErrorKind::InvalidTypeDeclaration,
            format!("'{}' of {what} must be a type name such as int32 or byte[4]", keys::TYPE),
        )
    })?;
    let ty = resolve_type(token)?;

    Ok(Property {
        ty,
        value: optional_literal(fields, keys::VALUE, &what)?,
        min: optional_literal(fields, keys::MIN, &what)?,
        max: optional_literal(fields, keys::MAX, &what)?,
        notification: optional_string(fields, keys::NOTIFICATION, &what)?,
        readonly: optional_bool(fields, keys::READONLY, &what)?.unwrap_or(false),
        name: entry.into_name(),
    })
}

fn parse_property_change(fields: &Mapping, what: &str) -> ParseResult<Option<PropertyChange>> {
    let Some(node) = field(fields, keys::CHANGE) else {
        return Ok(None);
    };
    let what = format!("'{}' of {what}", keys::CHANGE);
    let change = as_mapping(node, &what)?;
    let property = scalar_string(required_field(change, keys::PROPERTY, &what)?, &what)?;
    let value = literal(required_field(change, keys::VALUE, &what)?, &what)?;
    Ok(Some(PropertyChange { property, value }))
}

/// Parse a subscribed notification: `Pub.Name` or `Pub.Name: {event, action, change}`.
pub fn parse_subscribed_notification(node: &Value) -> ParseResult<SubscribedNotification> {
    let entry = Entry::decode(node, "subscribed notification")?;
    let Some(fields) = entry.fields() else {
        return Ok(SubscribedNotification::new(entry.into_name()));
    };

    let what = format!("subscribed notification {}", entry.name());
    Ok(SubscribedNotification {
        event: optional_string(fields, keys::EVENT, &what)?,
        action: optional_string(fields, keys::ACTION, &what)?,
        change: parse_property_change(fields, &what)?,
        name: entry.into_name(),
    })
}

fn parse_list<T>(
    map: &Mapping,
    key: &str,
    what: &str,
    parse: impl Fn(&Value) -> ParseResult<T>,
) -> ParseResult<Vec<T>> {
    match field(map, key) {
        None => Ok(Vec::new()),
        Some(list) => as_sequence(list, &format!("'{key}' of {what}"))?
            .iter()
            .map(parse)
            .collect(),
    }
}

/// Parse an `interface` section. A missing or empty section is empty.
pub fn parse_interface(node: Option<&Value>) -> ParseResult<Interface> {
    let Some(node) = node.filter(|n| !n.is_null()) else {
        return Ok(Interface::default());
    };
    let what = keys::INTERFACE;
    let map = as_mapping(node, what)?;
    Ok(Interface {
        commands: parse_list(map, keys::COMMANDS, what, parse_command)?,
        notifications: parse_list(map, keys::NOTIFICATIONS, what, parse_notification)?,
        properties: parse_list(map, keys::PROPERTIES, what, parse_property)?,
    })
}

/// Parse a `utilization` section. A missing or empty section is empty.
pub fn parse_utilization(node: Option<&Value>) -> ParseResult<Utilization> {
    let Some(node) = node.filter(|n| !n.is_null()) else {
        return Ok(Utilization::default());
    };
    let what = keys::UTILIZATION;
    let map = as_mapping(node, what)?;
    Ok(Utilization {
        notifications: parse_list(
            map,
            keys::NOTIFICATIONS,
            what,
            parse_subscribed_notification,
        )?,
    })
}
