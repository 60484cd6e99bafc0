//! Unified error types for the Aigis hub firmware.
//!
//! Follows embedded best practice: a single `Error` enum that every subsystem
//! can convert into, keeping the coordinator loop's error handling uniform.
//! All variants are `Copy` so they can be cheaply threaded through the
//! receive path without allocation.
//!
//! Propagation policy: everything on the receive path is recoverable —
//! logged, frame dropped, loop continues. Only transport bring-up failure
//! (`LinkError::RadioUnavailable` during init) escalates out of `main`.

use core::fmt;

use crate::peers::{PeerAddr, PeerRole};

// ---------------------------------------------------------------------------
// Top-level firmware error
// ---------------------------------------------------------------------------

/// Every fallible operation in the firmware funnels into this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// Radio / serial transport failure on init or send.
    Link(LinkError),
    /// An inbound frame could not be attributed or decoded.
    Frame(FrameError),
    /// A requested audio asset or UI surface could not be prepared.
    Resource(ResourceError),
    /// Peripheral initialisation failed.
    Init(&'static str),
    /// Configuration is invalid or could not be loaded.
    Config(&'static str),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Link(e) => write!(f, "link: {e}"),
            Self::Frame(e) => write!(f, "frame: {e}"),
            Self::Resource(e) => write!(f, "resource: {e}"),
            Self::Init(msg) => write!(f, "init: {msg}"),
            Self::Config(msg) => write!(f, "config: {msg}"),
        }
    }
}

impl core::error::Error for Error {}

// ---------------------------------------------------------------------------
// Link errors
// ---------------------------------------------------------------------------

/// Radio / transport failures. Bring-up failure is fatal at startup;
/// send failures are reported to the caller and never retried.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkError {
    /// The radio could not be brought up. Fatal during init.
    RadioUnavailable(&'static str),
    /// The radio's peer table has no free slots.
    PeerTableFull,
    /// The peer is already registered. Tolerated during init, since
    /// shared subsystems may have registered it first.
    AlreadyRegistered,
    /// A fire-and-forget send was rejected by the transport.
    SendFailed,
}

impl fmt::Display for LinkError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RadioUnavailable(msg) => write!(f, "radio unavailable: {msg}"),
            Self::PeerTableFull => write!(f, "peer table full"),
            Self::AlreadyRegistered => write!(f, "peer already registered"),
            Self::SendFailed => write!(f, "send failed"),
        }
    }
}

impl core::error::Error for LinkError {}

impl From<LinkError> for Error {
    fn from(e: LinkError) -> Self {
        Self::Link(e)
    }
}

// ---------------------------------------------------------------------------
// Frame errors
// ---------------------------------------------------------------------------

/// Inbound frame rejection. Always recoverable: the frame is logged and
/// dropped without touching alarm or UI state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// Sender address is not in the peer registry.
    UnknownPeer(PeerAddr),
    /// Frame size disagrees with the expected payload size for the
    /// sender's role.
    LengthMismatch {
        role: PeerRole,
        got: usize,
        expected: usize,
    },
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownPeer(addr) => write!(f, "unknown peer {addr}"),
            Self::LengthMismatch {
                role,
                got,
                expected,
            } => write!(f, "{role} frame length mismatch: {got} != {expected}"),
        }
    }
}

impl core::error::Error for FrameError {}

impl From<FrameError> for Error {
    fn from(e: FrameError) -> Self {
        Self::Frame(e)
    }
}

// ---------------------------------------------------------------------------
// Resource errors
// ---------------------------------------------------------------------------

/// A collaborator could not prepare an asset or surface. The triggering
/// action still proceeds without the missing side effect (e.g. the fall
/// alarm latches even when the siren file is absent from SPIFFS).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceError {
    /// The requested audio asset does not exist.
    AssetMissing(&'static str),
    /// The playback pipeline rejected the clip.
    PlaybackFailed(&'static str),
    /// A UI surface could not be prepared.
    SurfaceUnavailable(&'static str),
}

impl fmt::Display for ResourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AssetMissing(path) => write!(f, "asset missing: {path}"),
            Self::PlaybackFailed(path) => write!(f, "playback failed: {path}"),
            Self::SurfaceUnavailable(name) => write!(f, "surface unavailable: {name}"),
        }
    }
}

impl core::error::Error for ResourceError {}

impl From<ResourceError> for Error {
    fn from(e: ResourceError) -> Self {
        Self::Resource(e)
    }
}

// ---------------------------------------------------------------------------
// Convenience Result alias
// ---------------------------------------------------------------------------

/// Firmware-wide `Result` alias.
pub type Result<T> = core::result::Result<T, Error>;
