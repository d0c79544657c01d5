//! Whole-document compilation tests.

use service_components::{
    ErrorKind, Literal, ParseOptions, PrimitiveType, TypeDeclaration, parse, parse_with,
};

use crate::helpers::assertions::{compile_err, compile_ok};
use crate::helpers::fixtures::COFFEE_MACHINE;

#[test]
fn test_coffee_machine_compiles() {
    let ir = compile_ok(COFFEE_MACHINE);
    let names: Vec<_> = ir.names().collect();
    assert_eq!(names, vec!["Controller", "Grinder", "Heater"]);
}

#[test]
fn test_reserved_component_skipped() {
    let ir = compile_ok(COFFEE_MACHINE);
    assert!(ir.get("_Template").is_none());
}

#[test]
fn test_reserved_marker_can_be_disabled() {
    let options = ParseOptions::new().with_reserved_marker(None);
    let ir = parse_with(COFFEE_MACHINE, &options).unwrap();
    assert!(ir.get("_Template").is_some());
    assert_eq!(ir.len(), 4);
}

#[test]
fn test_custom_root_key() {
    let source = COFFEE_MACHINE.replacen("components:", "services:", 1);
    let options = ParseOptions::new().with_root_key("services");
    assert_eq!(parse_with(&source, &options).unwrap().len(), 3);

    let err = parse(&source).unwrap_err();
    assert!(err.is(ErrorKind::InvalidDocument));
}

#[test]
fn test_interface_is_parsed() {
    let ir = compile_ok(COFFEE_MACHINE);
    let controller = ir.get("Controller").unwrap();
    let interface = &controller.interface;

    let commands: Vec<_> = interface.commands.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(commands, vec!["Brew", "Clean", "Status"]);
    assert_eq!(interface.commands[0].event.as_deref(), Some("BrewRequested"));
    assert_eq!(interface.commands[1].forward.as_deref(), Some("Grinder"));
    assert!(interface.commands[2].event.is_none());

    let cups = interface.property("CupCount").unwrap();
    assert_eq!(cups.ty, TypeDeclaration::scalar(PrimitiveType::Uint32));
    assert_eq!(cups.value, Some(Literal::Integer(0)));
    assert_eq!(cups.max, Some(Literal::Integer(1000)));
    assert_eq!(cups.accessor_names(), vec!["GetCupCount", "SetCupCount"]);

    let serial = interface.property("Serial").unwrap();
    assert_eq!(serial.ty, TypeDeclaration::new(PrimitiveType::Char, 8));
    assert_eq!(serial.ty.to_string(), "char [8]");
    assert_eq!(serial.accessor_names(), vec!["GetSerial"]);
}

#[test]
fn test_utilization_is_parsed() {
    let ir = compile_ok(COFFEE_MACHINE);
    let subs = &ir.get("Controller").unwrap().utilization.notifications;
    assert_eq!(subs.len(), 2);
    assert_eq!(subs[0].action.as_deref(), Some("CountCup"));
    let change = subs[1].change.as_ref().unwrap();
    assert_eq!(change.property, "WaterHot");
    assert_eq!(change.value, Literal::Bool(true));
}

#[test]
fn test_parsing_is_idempotent() {
    let first = compile_ok(COFFEE_MACHINE);
    let second = compile_ok(COFFEE_MACHINE);
    assert_eq!(first, second);
    assert!(first.names().eq(second.names()));
    for ((_, a), (_, b)) in first.iter().zip(second.iter()) {
        assert_eq!(a.statemachine.transitions, b.statemachine.transitions);
    }
}

#[test]
fn test_empty_component_list() {
    assert!(compile_ok("components: []").is_empty());
}

#[test]
fn test_empty_text_is_rejected() {
    compile_err("", ErrorKind::InvalidDocument);
}

#[test]
fn test_malformed_yaml() {
    compile_err("components:\n  - Door: {", ErrorKind::Syntax);
}

#[test]
fn test_duplicate_component() {
    let source = r#"
components:
  - Door:
      statemachine: {states: [Idle], start: Idle}
  - Door:
      statemachine: {states: [Idle], start: Idle}
"#;
    let message = compile_err(source, ErrorKind::DuplicateComponent);
    assert!(message.contains("Door"));
}

#[test]
fn test_errors_name_their_component() {
    let source = r#"
components:
  - Door:
      events: [Open]
      statemachine:
        states: [Closed]
        start: Opened
"#;
    let err = parse(source).unwrap_err();
    assert!(err.is(ErrorKind::UnknownStartState));
    assert_eq!(err.component.as_deref(), Some("Door"));
}

#[test]
fn test_conflicting_command_routing() {
    let source = r#"
components:
  - Door:
      interface:
        commands:
          - Open: {event: Opening, forward: Motor}
      statemachine: {states: [Idle], start: Idle}
"#;
    compile_err(source, ErrorKind::ConflictingMessageRouting);
}

#[test]
fn test_invalid_property_type() {
    let source = r#"
components:
  - Door:
      interface:
        properties:
          - Angle: {type: weird}
      statemachine: {states: [Idle], start: Idle}
"#;
    compile_err(source, ErrorKind::InvalidTypeDeclaration);
}

#[test]
fn test_bare_property_is_rejected() {
    let source = r#"
components:
  - Door:
      interface:
        properties: [Angle]
      statemachine: {states: [Idle], start: Idle}
"#;
    compile_err(source, ErrorKind::InvalidPropertySpec);
}

#[test]
fn test_property_array_type() {
    let source = r#"
components:
  - Door:
      interface:
        properties:
          - Code: {type: 'int32[3]'}
          - Id: {type: int32}
      statemachine: {states: [Idle], start: Idle}
"#;
    let ir = compile_ok(source);
    let interface = &ir.get("Door").unwrap().interface;
    assert_eq!(
        interface.property("Code").unwrap().ty,
        TypeDeclaration::new(PrimitiveType::Int32, 3)
    );
    assert_eq!(
        interface.property("Id").unwrap().ty,
        TypeDeclaration::new(PrimitiveType::Int32, 1)
    );
}

#[test]
fn test_uint64_limits_keep_precision() {
    let source = r#"
components:
  - Meter:
      interface:
        properties:
          - Total: {type: uint64, value: 18446744073709551615, min: 0, max: 18446744073709551615}
      statemachine: {states: [Idle], start: Idle}
"#;
    let ir = compile_ok(source);
    let total = ir.get("Meter").unwrap().interface.property("Total").unwrap();
    assert_eq!(total.value, Some(Literal::Unsigned(u64::MAX)));
    assert_eq!(total.max, Some(Literal::Unsigned(u64::MAX)));
    assert_eq!(total.min, Some(Literal::Integer(0)));
    assert_eq!(total.value.as_ref().unwrap().to_string(), "18446744073709551615");
}

#[test]
fn test_scalar_property_body_is_invalid_spec() {
    let source = r#"
components:
  - Door:
      interface:
        properties:
          - Angle: 5
      statemachine: {states: [Idle], start: Idle}
"#;
    compile_err(source, ErrorKind::InvalidPropertySpec);
}
