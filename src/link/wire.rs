//! Fixed-size frame payloads for the wireless peer link.
//!
//! Every payload has an exact byte length; the link layer accepts a frame
//! only when its length matches the expected size for the sender's role.
//! All multi-byte fields are little-endian. There is no header or CRC —
//! the transport already provides per-frame integrity.
//!
//! ```text
//! ControlCommand        4 B   [ i32 command ]
//! DoorCommand          16 B   [ ASCII, NUL-padded, max 15 chars ]
//! HealthTelemetry      12 B   [ bool, bool, pad pad, f32 hr, i32 spo2 ]
//! DoorRecognitionEvent 32 B   [ ASCII, zero-padded, terminator optional ]
//! ```
//!
//! The telemetry layout mirrors the health sensor firmware's natural
//! 32-bit C struct layout, padding bytes included.

use heapless::String;

/// Exact wire size of a [`ControlCommand`].
pub const CONTROL_COMMAND_LEN: usize = 4;
/// Exact wire size of a [`DoorCommand`].
pub const DOOR_COMMAND_LEN: usize = 16;
/// Exact wire size of a [`HealthTelemetry`] frame.
pub const HEALTH_TELEMETRY_LEN: usize = 12;
/// Exact wire size of a [`DoorRecognitionEvent`] frame.
pub const DOOR_RECOGNITION_LEN: usize = 32;

// ---------------------------------------------------------------------------
// ControlCommand (outbound → Controller)
// ---------------------------------------------------------------------------

/// Smart-home command code sent to the light/socket/fan controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlCommand {
    pub command: i32,
}

impl ControlCommand {
    pub const fn new(command: i32) -> Self {
        Self { command }
    }

    pub fn encode(&self) -> [u8; CONTROL_COMMAND_LEN] {
        self.command.to_le_bytes()
    }

    pub fn decode(bytes: &[u8; CONTROL_COMMAND_LEN]) -> Self {
        Self {
            command: i32::from_le_bytes(*bytes),
        }
    }
}

// ---------------------------------------------------------------------------
// DoorCommand (outbound → DoorNode)
// ---------------------------------------------------------------------------

/// Lock/unlock command for the door node: up to 15 ASCII chars, always
/// NUL-terminated, remaining bytes zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DoorCommand {
    bytes: [u8; DOOR_COMMAND_LEN],
}

impl DoorCommand {
    /// Build a command, truncating the text to 15 bytes. The final byte
    /// is always a NUL terminator.
    pub fn new(text: &str) -> Self {
        let mut bytes = [0u8; DOOR_COMMAND_LEN];
        let src = text.as_bytes();
        let n = src.len().min(DOOR_COMMAND_LEN - 1);
        bytes[..n].copy_from_slice(&src[..n]);
        Self { bytes }
    }

    pub fn encode(&self) -> [u8; DOOR_COMMAND_LEN] {
        self.bytes
    }

    pub fn decode(bytes: &[u8; DOOR_COMMAND_LEN]) -> Self {
        Self { bytes: *bytes }
    }

    /// The command text (up to the first NUL).
    pub fn text(&self) -> &str {
        let end = self
            .bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(DOOR_COMMAND_LEN);
        core::str::from_utf8(&self.bytes[..end]).unwrap_or("")
    }
}

// ---------------------------------------------------------------------------
// HealthTelemetry (inbound ← HealthSensor)
// ---------------------------------------------------------------------------

/// Telemetry frame from the wearable fall / heart-rate sensor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthTelemetry {
    pub fall_detected: bool,
    pub alarm: bool,
    pub heart_rate: f32,
    pub spo2: i32,
}

impl HealthTelemetry {
    pub fn decode(bytes: &[u8; HEALTH_TELEMETRY_LEN]) -> Self {
        Self {
            fall_detected: bytes[0] != 0,
            alarm: bytes[1] != 0,
            // bytes 2-3 are struct padding on the sender
            heart_rate: f32::from_le_bytes([bytes[4], bytes[5], bytes[6], bytes[7]]),
            spo2: i32::from_le_bytes([bytes[8], bytes[9], bytes[10], bytes[11]]),
        }
    }

    /// Peer-side encoding, used to fabricate frames in tests.
    pub fn encode(&self) -> [u8; HEALTH_TELEMETRY_LEN] {
        let mut bytes = [0u8; HEALTH_TELEMETRY_LEN];
        bytes[0] = u8::from(self.fall_detected);
        bytes[1] = u8::from(self.alarm);
        bytes[4..8].copy_from_slice(&self.heart_rate.to_le_bytes());
        bytes[8..12].copy_from_slice(&self.spo2.to_le_bytes());
        bytes
    }
}

// ---------------------------------------------------------------------------
// DoorRecognitionEvent (inbound ← DoorNode)
// ---------------------------------------------------------------------------

/// Person name reported by the door camera. The sender zero-pads the
/// field but may omit the terminator when the name fills all 32 bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DoorRecognitionEvent {
    pub name: String<DOOR_RECOGNITION_LEN>,
}

impl DoorRecognitionEvent {
    pub fn decode(bytes: &[u8; DOOR_RECOGNITION_LEN]) -> Self {
        let end = bytes
            .iter()
            .position(|&b| b == 0)
            .unwrap_or(DOOR_RECOGNITION_LEN);
        // Truncate at the first invalid byte rather than rejecting the
        // frame; garbled tail bytes should not suppress the doorbell.
        let text = match core::str::from_utf8(&bytes[..end]) {
            Ok(s) => s,
            Err(e) => core::str::from_utf8(&bytes[..e.valid_up_to()]).unwrap_or(""),
        };
        let mut name = String::new();
        let _ = name.push_str(text);
        Self { name }
    }

    /// Peer-side encoding, used to fabricate frames in tests.
    pub fn encode_name(name: &str) -> [u8; DOOR_RECOGNITION_LEN] {
        let mut bytes = [0u8; DOOR_RECOGNITION_LEN];
        let src = name.as_bytes();
        let n = src.len().min(DOOR_RECOGNITION_LEN);
        bytes[..n].copy_from_slice(&src[..n]);
        bytes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn control_command_roundtrip() {
        let cmd = ControlCommand::new(7);
        let bytes = cmd.encode();
        assert_eq!(bytes.len(), CONTROL_COMMAND_LEN);
        assert_eq!(ControlCommand::decode(&bytes), cmd);
    }

    #[test]
    fn door_command_lock_roundtrip() {
        // "lock" occupies 4 bytes; the remaining 12 must be zero.
        let cmd = DoorCommand::new("lock");
        let bytes = cmd.encode();
        assert_eq!(&bytes[..4], b"lock");
        assert!(bytes[4..].iter().all(|&b| b == 0));
        assert_eq!(DoorCommand::decode(&bytes).text(), "lock");
    }

    #[test]
    fn door_command_truncates_to_fifteen() {
        let cmd = DoorCommand::new("a-very-long-door-command");
        let bytes = cmd.encode();
        assert_eq!(bytes[DOOR_COMMAND_LEN - 1], 0, "terminator must survive");
        assert_eq!(cmd.text().len(), DOOR_COMMAND_LEN - 1);
        assert_eq!(cmd.text(), "a-very-long-doo");
    }

    #[test]
    fn health_telemetry_roundtrip_with_padding() {
        let t = HealthTelemetry {
            fall_detected: true,
            alarm: false,
            heart_rate: 82.0,
            spo2: 97,
        };
        let bytes = t.encode();
        assert_eq!(bytes.len(), HEALTH_TELEMETRY_LEN);
        assert_eq!(bytes[2], 0);
        assert_eq!(bytes[3], 0);
        assert_eq!(HealthTelemetry::decode(&bytes), t);
    }

    #[test]
    fn health_telemetry_nonzero_bool_bytes_decode_true() {
        let mut bytes = [0u8; HEALTH_TELEMETRY_LEN];
        bytes[0] = 0xFF;
        let t = HealthTelemetry::decode(&bytes);
        assert!(t.fall_detected);
        assert!(!t.alarm);
    }

    #[test]
    fn recognition_decodes_zero_padded_name() {
        let bytes = DoorRecognitionEvent::encode_name("Alice");
        let ev = DoorRecognitionEvent::decode(&bytes);
        assert_eq!(ev.name.as_str(), "Alice");
    }

    #[test]
    fn recognition_without_terminator_uses_all_bytes() {
        let bytes = DoorRecognitionEvent::encode_name("abcdefghijklmnopqrstuvwxyz123456");
        assert!(bytes.iter().all(|&b| b != 0));
        let ev = DoorRecognitionEvent::decode(&bytes);
        assert_eq!(ev.name.len(), DOOR_RECOGNITION_LEN);
    }

    #[test]
    fn recognition_truncates_invalid_utf8_tail() {
        let mut bytes = DoorRecognitionEvent::encode_name("Bob");
        bytes[3] = 0xC3; // lone continuation start, then NUL
        bytes[4] = 0;
        let ev = DoorRecognitionEvent::decode(&bytes);
        assert_eq!(ev.name.as_str(), "Bob");
    }
}
