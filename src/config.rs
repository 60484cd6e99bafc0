//! System configuration parameters
//!
//! All tunable parameters for the Aigis hub. Defaults match the
//! provisioned device; values can be overridden before the coordinator
//! is constructed (e.g. from a future provisioning channel).

use serde::{Deserialize, Serialize};

/// Core system configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Wireless peer link ---
    /// Fixed operating channel shared with all peers.
    pub radio_channel: u8,
    /// Transmit power cap in quarter-dBm. Kept low to avoid brownout
    /// when the hub runs from USB power.
    pub max_tx_power_qdbm: i8,

    // --- UI timing ---
    /// How long the door overlay stays in the foreground before
    /// auto-reverting to the main surface (milliseconds).
    pub door_dwell_ms: u32,
    /// Coordinator loop interval (milliseconds).
    pub control_loop_interval_ms: u32,

    // --- Audio ---
    /// Playback volume for echo cues and clips (0-100).
    pub volume_percent: u8,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Channel 11 matches the health sensor's fixed channel.
            radio_channel: 11,
            max_tx_power_qdbm: 8,

            door_dwell_ms: 3000,
            control_loop_interval_ms: 50, // 20 Hz

            volume_percent: 100,
        }
    }
}
