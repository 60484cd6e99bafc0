//! Port traits — the hexagonal boundary between the coordinator and the
//! display, audio, serial, and recognition collaborators.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Coordinator (domain)
//! ```
//!
//! The display renderer, the audio decode/playback pipeline, and the
//! speech-recognition engine are external collaborators: the coordinator
//! only requires the narrow operations below, and the adapters decide
//! how to satisfy them. Each collaborator serializes its own internal
//! operations; *which* mutation is requested is serialized by the
//! coordinator itself (single consumer of both event queues).

use crate::assets;
use crate::error::{LinkError, ResourceError};

use super::commands::VoiceCommand;

// ───────────────────────────────────────────────────────────────
// UI surfaces (driven adapter: domain → display renderer)
// ───────────────────────────────────────────────────────────────

/// Full-screen surfaces and the listening overlay.
///
/// Show/hide calls are best-effort: a surface that failed to prepare its
/// assets logs and stays hidden, it never fails the triggering action.
pub trait UiPort {
    /// The default main face.
    fn main_show(&mut self, visible: bool);

    /// Door overlay surface.
    fn door_show(&mut self, visible: bool);
    /// Update the door surface's visual state (locked/unlocked).
    fn door_set_locked(&mut self, locked: bool);
    /// Display the name reported by the door camera.
    fn door_show_person(&mut self, name: &str);

    /// Dance surface. Showing it starts the dance audio loop; hiding
    /// stops it (collaborator-owned effect).
    fn dance_show(&mut self, visible: bool);

    /// Story surface. Showing it starts story playback; hiding stops it.
    fn story_show(&mut self, visible: bool);

    /// Fall-alarm surface (always frontmost while visible).
    fn alarm_show(&mut self, visible: bool);

    /// Listening animation overlay.
    fn listen_anim_start(&mut self);
    fn listen_anim_stop(&mut self);
    /// Prompt / feedback text on the listening overlay.
    fn listen_set_text(&mut self, text: &str);

    /// Live heart-rate / SpO2 readout. Best-effort: the health surface
    /// may not be implemented, so the default is a no-op.
    fn health_update(&mut self, _heart_rate: f32, _spo2: i32) {}
}

// ───────────────────────────────────────────────────────────────
// Audio cues (driven adapter: domain → playback pipeline)
// ───────────────────────────────────────────────────────────────

/// Short recognizer feedback tones.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Wake word detected.
    Wake,
    /// Command recognized.
    Ok,
    /// Recognition timed out.
    End,
}

impl AudioCue {
    /// SPIFFS path of the cue's audio asset.
    pub const fn asset_path(self) -> &'static str {
        match self {
            Self::Wake => assets::ECHO_WAKE,
            Self::Ok => assets::ECHO_OK,
            Self::End => assets::ECHO_END,
        }
    }
}

/// Playback requests. A missing asset is a recoverable
/// [`ResourceError`]: the caller logs it and the action proceeds
/// without the cue.
pub trait AudioPort {
    /// Play a short feedback tone, blocking until it finishes.
    fn play_cue(&mut self, cue: AudioCue) -> Result<(), ResourceError>;

    /// Start playing a clip from SPIFFS (non-blocking).
    fn play_clip(&mut self, path: &'static str) -> Result<(), ResourceError>;

    /// Stop whatever is playing.
    fn stop(&mut self);

    /// Output volume (0-100). Applied once at bring-up; pipelines with
    /// no volume control ignore it, so the default is a no-op.
    fn set_volume(&mut self, _percent: u8) {}
}

// ───────────────────────────────────────────────────────────────
// Actuator link (driven adapter: domain → motor controller serial)
// ───────────────────────────────────────────────────────────────

/// Walk-forward command byte.
pub const ACTUATOR_WALK_FORWARD: u8 = b'F';
/// Halt command byte.
pub const ACTUATOR_HALT: u8 = b'H';
/// Dance command byte.
pub const ACTUATOR_DANCE: u8 = b'D';

/// Single-byte command channel to the companion motor controller.
/// Fire-and-forget: no acknowledgement protocol, no retry.
pub trait ActuatorPort {
    fn write_byte(&mut self, b: u8) -> Result<(), LinkError>;
}

// ───────────────────────────────────────────────────────────────
// Recognizer (driving adapter: recognition engine → domain)
// ───────────────────────────────────────────────────────────────

/// Non-blocking source of recognized voice commands.
///
/// The recognition engine runs in its own task and is single-request:
/// it will not deliver a new command while one is being handled. The
/// coordinator polls between ticks so the door-overlay revert timer
/// keeps running while the recognizer is idle.
pub trait RecognizerPort {
    fn poll_command(&mut self) -> Option<VoiceCommand>;
}
