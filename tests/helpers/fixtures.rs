//! Common document fixtures for tests.

/// A machine with a publisher, a subscriber declared first and an alias.
pub const COFFEE_MACHINE: &str = r#"
components:
  - _Template:
      events: [Unused]
      statemachine:
        states: [Idle]
        start: Idle

  - Controller:
      interface:
        commands:
          - Brew: {event: BrewRequested}
          - Clean: {forward: Grinder}
          - Status
        notifications: [Brewing, Idle]
        properties:
          - CupCount: {type: uint32, value: 0, min: 0, max: 1000, notification: Brewing}
          - Serial: {type: 'char[8]', readonly: true}
          - WaterHot: {type: bool, value: false}
      utilization:
        notifications:
          - Grinder.Finished: {event: Ground, action: CountCup}
          - Heater.Finished: {event: Heated, change: {property: WaterHot, value: true}}
      events: [BrewRequested, Ground, Heated, Fault, Reset]
      statemachine:
        states: [Standby, Ready, Grinding, Heating, ErrorGrinder, ErrorHeater]
        start: Standby
        transitions:
          - {state: Standby, next: Ready, event: Reset}
          - {state: Ready, next: Grinding, event: BrewRequested, action: StartGrinder}
          - {state: Grinding, next: Heating, event: Ground}
          - {state: Heating, next: Ready, event: Heated}
          - {state: 'Grinding|Heating', next: ErrorGrinder, event: Fault}
          - {state: 'Error.*', next: Standby, event: Reset}

  - Grinder:
      interface:
        notifications: [Finished]
      events: [Start, Done]
      statemachine:
        states: [Idle, Busy]
        start: Idle
        transitions:
          - {state: Idle, next: Busy, event: Start}
          - {state: Busy, next: Idle, event: Done}

  - Heater:
      using: Grinder
"#;

/// Publisher template plus a subscriber naming notification `notification` of `Pub`.
pub fn subscription_document(notification: &str) -> String {
    format!(
        r#"
components:
  - Sub:
      utilization:
        notifications: ["{notification}"]
      statemachine: {{states: [Idle], start: Idle}}
  - Pub:
      interface:
        notifications: [Ready]
      statemachine: {{states: [Idle], start: Idle}}
"#
    )
}

/// One `Machine` component starting in `Idle`; each transition is a flow mapping.
pub fn machine_document(states: &str, events: &str, transitions: &[&str]) -> String {
    let transitions: String = transitions
        .iter()
        .map(|t| format!("          - {t}\n"))
        .collect();
    format!(
        r#"
components:
  - Machine:
      events: {events}
      statemachine:
        states: {states}
        start: Idle
        transitions:
{transitions}"#
    )
}
