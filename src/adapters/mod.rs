//! Adapters — concrete implementations of the hexagonal port traits.
//!
//! | Adapter   | Implements      | Connects to                      |
//! |-----------|-----------------|----------------------------------|
//! | `console` | UiPort          | Serial log output                |
//! |           | AudioPort       | Serial log output                |
//! | `device`  | all of the above| Bundles the per-concern adapters |
//! | `espnow`  | RadioPort       | ESP-NOW over WiFi STA            |
//! | `time`    | (uptime source) | ESP32 system timer               |
//! | `uart`    | ActuatorPort    | UART1 to the motor controller    |

pub mod console;
pub mod device;
pub mod espnow;
pub mod time;
pub mod uart;
