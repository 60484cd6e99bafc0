//! Peer identity and the static peer registry.
//!
//! Every satellite the hub talks to over the wireless peer link is
//! provisioned at build time: a 6-byte hardware address and a role.
//! The registry is built once at startup and never mutated afterwards —
//! there is no discovery protocol and no runtime add/remove.

use core::fmt;

// ---------------------------------------------------------------------------
// Peer address
// ---------------------------------------------------------------------------

/// A 6-byte hardware address identifying a peer on the wireless link.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PeerAddr(pub [u8; 6]);

impl PeerAddr {
    pub const fn new(octets: [u8; 6]) -> Self {
        Self(octets)
    }

    pub fn octets(&self) -> &[u8; 6] {
        &self.0
    }
}

impl fmt::Display for PeerAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let o = &self.0;
        write!(
            f,
            "{:02x}:{:02x}:{:02x}:{:02x}:{:02x}:{:02x}",
            o[0], o[1], o[2], o[3], o[4], o[5]
        )
    }
}

// ---------------------------------------------------------------------------
// Peer role
// ---------------------------------------------------------------------------

/// What a peer does, which determines how its frames are decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PeerRole {
    /// Light / socket / fan controller. Outbound commands only; any
    /// inbound frame from it is informational and ignored.
    Controller,
    /// Wearable fall / heart-rate sensor. Inbound telemetry only.
    HealthSensor,
    /// Door camera node. Outbound lock/unlock commands, inbound
    /// person-recognition events.
    DoorNode,
}

impl PeerRole {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Controller => "Controller",
            Self::HealthSensor => "HealthSensor",
            Self::DoorNode => "DoorNode",
        }
    }
}

impl fmt::Display for PeerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ---------------------------------------------------------------------------
// Provisioned addresses
// ---------------------------------------------------------------------------

/// Light/socket/fan controller node.
pub const CONTROLLER_ADDR: PeerAddr = PeerAddr::new([0xE8, 0xDB, 0x84, 0x11, 0xEF, 0x14]);
/// Wearable fall / heart-rate sensor node.
pub const HEALTH_SENSOR_ADDR: PeerAddr = PeerAddr::new([0x94, 0xA9, 0x90, 0x69, 0x13, 0xF4]);
/// Door camera node.
pub const DOOR_NODE_ADDR: PeerAddr = PeerAddr::new([0x3C, 0x61, 0x05, 0x30, 0x78, 0xF0]);

/// The complete provisioned peer set.
pub const PROVISIONED: [(PeerAddr, PeerRole); 3] = [
    (CONTROLLER_ADDR, PeerRole::Controller),
    (HEALTH_SENSOR_ADDR, PeerRole::HealthSensor),
    (DOOR_NODE_ADDR, PeerRole::DoorNode),
];

// ---------------------------------------------------------------------------
// Registry
// ---------------------------------------------------------------------------

/// Fixed address→role mapping, immutable after construction.
#[derive(Debug, Clone, Copy)]
pub struct PeerRegistry {
    entries: [(PeerAddr, PeerRole); 3],
}

impl PeerRegistry {
    /// Build the registry from the build-time provisioned peer set.
    pub const fn provisioned() -> Self {
        Self {
            entries: PROVISIONED,
        }
    }

    /// Look up the role of a sender address. `None` for unknown peers.
    pub fn lookup(&self, addr: PeerAddr) -> Option<PeerRole> {
        self.entries
            .iter()
            .find(|(a, _)| *a == addr)
            .map(|(_, role)| *role)
    }

    /// The provisioned address for a role.
    ///
    /// Every role has exactly one entry in the provisioned set.
    pub fn addr_of(&self, role: PeerRole) -> PeerAddr {
        self.entries
            .iter()
            .find(|(_, r)| *r == role)
            .map(|(a, _)| *a)
            .unwrap_or_else(|| unreachable!("role missing from provisioned set"))
    }

    /// Iterate over all registered peers (for radio peer registration).
    pub fn iter(&self) -> impl Iterator<Item = (PeerAddr, PeerRole)> + '_ {
        self.entries.iter().copied()
    }

    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    pub const fn is_empty(&self) -> bool {
        false
    }
}

impl Default for PeerRegistry {
    fn default() -> Self {
        Self::provisioned()
    }
}
