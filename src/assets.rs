//! SPIFFS asset paths.
//!
//! Single source of truth — the coordinator and adapters reference this
//! module rather than hard-coding paths. The assets themselves live in
//! the SPIFFS partition flashed alongside the firmware.

/// Short echo tone played when the wake word is detected.
pub const ECHO_WAKE: &str = "/spiffs/echo_en_wake.wav";
/// Short echo tone played when a command is recognised.
pub const ECHO_OK: &str = "/spiffs/echo_en_ok.wav";
/// Short echo tone played when recognition times out.
pub const ECHO_END: &str = "/spiffs/echo_en_end.wav";

/// Siren clip looped while the fall alarm is latched.
pub const SIREN: &str = "/spiffs/mp3/siren.mp3";
/// Announcement clip played when the door node reports a person.
pub const DOOR_CHIME: &str = "/spiffs/mp3/Someone_at_door_voice.mp3";
