//! Pin and peripheral assignments for the Aigis hub board.
//!
//! Single source of truth — every adapter references this module rather
//! than hard-coding pin numbers.

// ---------------------------------------------------------------------------
// Actuator serial link (companion motor controller)
// ---------------------------------------------------------------------------

/// UART1 TX to the motor controller's RX.
pub const ACTUATOR_UART_TX_GPIO: i32 = 42;
/// UART1 RX from the motor controller's TX (unused by the protocol, but
/// the peripheral requires a pin assignment).
pub const ACTUATOR_UART_RX_GPIO: i32 = 13;
/// Baud rate of the actuator link.
pub const ACTUATOR_UART_BAUD: u32 = 115_200;
