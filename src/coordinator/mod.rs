//! Event coordinator — the device's single behavioral state machine.
//!
//! Serializes two event sources — recognized voice commands and decoded
//! peer telemetry — into outbound actions: peer-link sends, actuator
//! bytes, audio cues, and UI-mode transitions. All interaction with the
//! outside world happens through **port traits** defined in [`ports`],
//! keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod mode;
pub mod ports;
pub mod service;
