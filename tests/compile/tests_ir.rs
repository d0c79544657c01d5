//! Read-only IR queries.

use std::sync::Arc;

use service_components::Named;

use crate::helpers::assertions::compile_ok;
use crate::helpers::fixtures::COFFEE_MACHINE;

#[test]
fn test_alias_shares_identity() {
    let ir = compile_ok(COFFEE_MACHINE);
    let grinder = ir.get("Grinder").unwrap();
    let heater = ir.get("Heater").unwrap();
    assert!(Arc::ptr_eq(grinder, heater));
    assert!(ir.is_alias("Heater"));
    assert!(!ir.is_alias("Grinder"));
    assert_eq!(ir.alias_target("Heater"), Some("Grinder"));
}

#[test]
fn test_alias_of_alias_resolves_to_definition() {
    let source = r#"
components:
  - Base:
      statemachine: {states: [Idle], start: Idle}
  - Middle:
      using: Base
  - Leaf:
      using: Middle
"#;
    let ir = compile_ok(source);
    assert!(Arc::ptr_eq(ir.get("Base").unwrap(), ir.get("Leaf").unwrap()));
    assert_eq!(ir.alias_target("Leaf"), Some("Base"));
}

#[test]
fn test_unique_components_skip_aliases() {
    let ir = compile_ok(COFFEE_MACHINE);
    let unique: Vec<_> = ir.unique_components().map(|(name, _)| name).collect();
    assert_eq!(unique, vec!["Controller", "Grinder"]);
}

#[test]
fn test_subscribers() {
    let ir = compile_ok(COFFEE_MACHINE);
    let subscribers: Vec<_> = ir.subscribers("Heater", "Finished").collect();
    assert_eq!(subscribers, vec!["Controller"]);
    assert_eq!(ir.subscribers("Grinder", "Missing").count(), 0);
}

#[test]
fn test_normalized_subscription_names() {
    let ir = compile_ok(COFFEE_MACHINE);
    let controller = ir.get("Controller").unwrap();
    let names: Vec<_> = controller
        .utilization
        .notifications
        .iter()
        .map(|n| n.normalized_name())
        .collect();
    assert_eq!(names, vec!["GrinderFinished", "HeaterFinished"]);
}

#[test]
fn test_ir_serializes_components_and_aliases() {
    let ir = compile_ok(COFFEE_MACHINE);
    let json = serde_json::to_value(&ir).unwrap();
    let components = json["components"].as_object().unwrap();
    assert_eq!(components.len(), 3);
    assert_eq!(
        json["components"]["Controller"]["interface"]["properties"][1]["type"]["cardinality"],
        8
    );
    assert_eq!(json["aliases"]["Heater"], "Grinder");
}
