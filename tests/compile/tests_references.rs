//! Cross-component reference validation through the full pipeline.

use rstest::rstest;
use service_components::ErrorKind;

use crate::helpers::assertions::{compile_err, compile_ok};
use crate::helpers::fixtures::subscription_document;

#[test]
fn test_forward_subscription_is_accepted() {
    let ir = compile_ok(&subscription_document("Pub.Ready"));
    assert_eq!(ir.len(), 2);
}

#[rstest]
#[case("Pub.Done", ErrorKind::UnknownNotificationReference)]
#[case("Nobody.Ready", ErrorKind::UnknownComponentReference)]
#[case("Ready", ErrorKind::MalformedReference)]
#[case("Pub.Ready.Again", ErrorKind::MalformedReference)]
fn test_bad_subscriptions(#[case] notification: &str, #[case] expected: ErrorKind) {
    compile_err(&subscription_document(notification), expected);
}

#[test]
fn test_declaring_notification_fixes_reference() {
    let missing = subscription_document("Pub.Done");
    compile_err(&missing, ErrorKind::UnknownNotificationReference);

    let fixed = missing.replace("notifications: [Ready]", "notifications: [Ready, Done]");
    compile_ok(&fixed);
}

#[test]
fn test_using_must_refer_backwards() {
    let source = r#"
components:
  - Copy:
      using: Original
  - Original:
      statemachine: {states: [Idle], start: Idle}
"#;
    let message = compile_err(source, ErrorKind::UnknownUsedComponent);
    assert!(message.contains("Original"));
}

#[test]
fn test_dotted_command_name() {
    let source = r#"
components:
  - Door:
      interface:
        commands: [Door.Open]
      statemachine: {states: [Idle], start: Idle}
"#;
    compile_err(source, ErrorKind::InvalidLocalName);
}

#[test]
fn test_dotted_notification_name() {
    let source = r#"
components:
  - Door:
      interface:
        notifications: [Door.Opened]
      statemachine: {states: [Idle], start: Idle}
"#;
    compile_err(source, ErrorKind::InvalidLocalName);
}

#[test]
fn test_change_of_unknown_property() {
    let source = r#"
components:
  - Pub:
      interface:
        notifications: [Ready]
      statemachine: {states: [Idle], start: Idle}
  - Sub:
      utilization:
        notifications:
          - Pub.Ready: {change: {property: Missing, value: 1}}
      statemachine: {states: [Idle], start: Idle}
"#;
    compile_err(source, ErrorKind::UnknownPropertyReference);
}

#[test]
fn test_property_with_unknown_notification_link() {
    let source = r#"
components:
  - Door:
      interface:
        notifications: [Opened]
        properties:
          - Angle: {type: uint16, notification: AngleChanged}
      statemachine: {states: [Idle], start: Idle}
"#;
    compile_err(source, ErrorKind::UnknownPropertyNotificationLink);
}
