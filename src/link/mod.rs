//! PeerLink — the wireless peer command/telemetry fabric.
//!
//! Owns the static peer registry and the framed encode/decode rules.
//! Inbound frames are attributed by sender address, validated against the
//! exact payload size for that peer's role, and decoded into a typed
//! [`LinkEvent`]. Outbound sends are fire-and-forget: a failure is
//! reported to the caller, never retried or queued.
//!
//! ```text
//!  radio rx ctx ──▶ decode_frame ──▶ LinkEvent ──▶ events queue ──▶ coordinator
//!  coordinator ──▶ send_control / send_door ──▶ RadioPort ──▶ air
//! ```
//!
//! Decoding is pure and callable from the radio receive context; all
//! state mutation happens later, on the coordinator thread.

pub mod wire;

use log::{debug, info, warn};

use crate::config::SystemConfig;
use crate::error::{FrameError, LinkError};
use crate::peers::{PeerAddr, PeerRegistry, PeerRole};
use wire::{ControlCommand, DoorCommand, DoorRecognitionEvent, HealthTelemetry};

// ---------------------------------------------------------------------------
// Radio port (driven adapter: domain → radio driver)
// ---------------------------------------------------------------------------

/// The narrow slice of the radio driver the link layer needs.
///
/// Sends are best-effort with no delivery guarantee; the driver's send
/// completion callback only logs the outcome and must not feed back into
/// application state.
pub trait RadioPort {
    /// Bring the radio up on a fixed channel with a capped TX power.
    fn bring_up(&mut self, channel: u8, max_tx_power_qdbm: i8) -> Result<(), LinkError>;

    /// Register a peer address for directed sends.
    fn add_peer(&mut self, addr: PeerAddr) -> Result<(), LinkError>;

    /// Transmit one frame to a registered peer. Fire-and-forget.
    fn send(&mut self, addr: PeerAddr, payload: &[u8]) -> Result<(), LinkError>;
}

// ---------------------------------------------------------------------------
// Decoded inbound events
// ---------------------------------------------------------------------------

/// Typed result of decoding an inbound frame, keyed on the sender's role.
#[derive(Debug, Clone, PartialEq)]
pub enum LinkEvent {
    /// Telemetry from the wearable health sensor.
    Health(HealthTelemetry),
    /// The door camera recognised a person.
    PersonDetected(DoorRecognitionEvent),
    /// A frame from the controller. Informational only, never acted on.
    ControllerNotice,
}

/// The exact inbound payload size for a role. `None` for peers the hub
/// never decodes frames from.
pub fn expected_inbound_len(role: PeerRole) -> Option<usize> {
    match role {
        PeerRole::Controller => None,
        PeerRole::HealthSensor => Some(wire::HEALTH_TELEMETRY_LEN),
        PeerRole::DoorNode => Some(wire::DOOR_RECOGNITION_LEN),
    }
}

/// Attribute and decode one inbound frame.
///
/// Pure function: safe to call from the radio receive context. Unknown
/// senders and size mismatches are rejected; the caller logs and drops.
pub fn decode_frame(
    registry: &PeerRegistry,
    src: PeerAddr,
    bytes: &[u8],
) -> Result<LinkEvent, FrameError> {
    let role = registry.lookup(src).ok_or(FrameError::UnknownPeer(src))?;

    let Some(expected) = expected_inbound_len(role) else {
        // Controller frames carry no decodable payload for the hub.
        return Ok(LinkEvent::ControllerNotice);
    };

    if bytes.len() != expected {
        return Err(FrameError::LengthMismatch {
            role,
            got: bytes.len(),
            expected,
        });
    }

    match role {
        PeerRole::HealthSensor => {
            let mut buf = [0u8; wire::HEALTH_TELEMETRY_LEN];
            buf.copy_from_slice(bytes);
            Ok(LinkEvent::Health(HealthTelemetry::decode(&buf)))
        }
        PeerRole::DoorNode => {
            let mut buf = [0u8; wire::DOOR_RECOGNITION_LEN];
            buf.copy_from_slice(bytes);
            Ok(LinkEvent::PersonDetected(DoorRecognitionEvent::decode(&buf)))
        }
        PeerRole::Controller => unreachable!("controller has no inbound payload size"),
    }
}

// ---------------------------------------------------------------------------
// PeerLink
// ---------------------------------------------------------------------------

/// The outbound half of the peer fabric: registry ownership plus framed
/// sends over a [`RadioPort`].
pub struct PeerLink<R: RadioPort> {
    radio: R,
    registry: PeerRegistry,
}

impl<R: RadioPort> PeerLink<R> {
    pub fn new(radio: R) -> Self {
        Self {
            radio,
            registry: PeerRegistry::provisioned(),
        }
    }

    /// Bring up the radio and register the fixed peer set.
    ///
    /// Radio bring-up failure is fatal and propagates to the caller.
    /// A peer already registered by a shared subsystem is not an error.
    pub fn initialize(&mut self, config: &SystemConfig) -> Result<(), LinkError> {
        self.radio
            .bring_up(config.radio_channel, config.max_tx_power_qdbm)?;

        for (addr, role) in self.registry.iter() {
            match self.radio.add_peer(addr) {
                Ok(()) => debug!("peer registered: {role} at {addr}"),
                Err(LinkError::AlreadyRegistered) => {
                    debug!("peer {role} at {addr} already registered, continuing");
                }
                Err(e) => {
                    warn!("failed to register {role} peer {addr}: {e}");
                    return Err(e);
                }
            }
        }

        info!(
            "peer link up: channel {}, {} peers",
            config.radio_channel,
            self.registry.len()
        );
        Ok(())
    }

    /// Encode and transmit a smart-home command to the controller.
    pub fn send_control(&mut self, command: i32) -> Result<(), LinkError> {
        let addr = self.registry.addr_of(PeerRole::Controller);
        let frame = ControlCommand::new(command).encode();
        match self.radio.send(addr, &frame) {
            Ok(()) => {
                info!("control command {command} sent");
                Ok(())
            }
            Err(e) => {
                warn!("control command {command} send failed: {e}");
                Err(e)
            }
        }
    }

    /// Encode (truncating to 15 chars) and transmit a door command.
    pub fn send_door(&mut self, command: &str) -> Result<(), LinkError> {
        let addr = self.registry.addr_of(PeerRole::DoorNode);
        let cmd = DoorCommand::new(command);
        match self.radio.send(addr, &cmd.encode()) {
            Ok(()) => {
                info!("door command '{}' sent", cmd.text());
                Ok(())
            }
            Err(e) => {
                warn!("door command '{}' send failed: {e}", cmd.text());
                Err(e)
            }
        }
    }

    /// Attribute and decode one inbound frame against this link's registry.
    pub fn on_frame_received(&self, src: PeerAddr, bytes: &[u8]) -> Result<LinkEvent, FrameError> {
        decode_frame(&self.registry, src, bytes)
    }

    pub fn registry(&self) -> &PeerRegistry {
        &self.registry
    }

    /// Direct access to the underlying radio (mock inspection in tests,
    /// driver teardown on the device).
    pub fn radio(&self) -> &R {
        &self.radio
    }
}
