//! Log-based UI and audio adapters.
//!
//! Implement [`UiPort`] and [`AudioPort`] by writing every request to
//! the serial console. Used on the host target and as a fallback when
//! the display or codec fails to initialize — the coordinator keeps
//! running and its decisions stay observable over the log.

use log::info;

use crate::coordinator::ports::{AudioCue, AudioPort, UiPort};
use crate::error::ResourceError;

/// Adapter that logs every surface request.
pub struct ConsoleUi;

impl ConsoleUi {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleUi {
    fn default() -> Self {
        Self::new()
    }
}

impl UiPort for ConsoleUi {
    fn main_show(&mut self, visible: bool) {
        info!("UI | main {}", if visible { "show" } else { "hide" });
    }

    fn door_show(&mut self, visible: bool) {
        info!("UI | door {}", if visible { "show" } else { "hide" });
    }

    fn door_set_locked(&mut self, locked: bool) {
        info!("UI | door {}", if locked { "locked" } else { "unlocked" });
    }

    fn door_show_person(&mut self, name: &str) {
        info!("UI | door person '{name}'");
    }

    fn dance_show(&mut self, visible: bool) {
        info!("UI | dance {}", if visible { "show" } else { "hide" });
    }

    fn story_show(&mut self, visible: bool) {
        info!("UI | story {}", if visible { "show" } else { "hide" });
    }

    fn alarm_show(&mut self, visible: bool) {
        info!("UI | alarm {}", if visible { "show" } else { "hide" });
    }

    fn listen_anim_start(&mut self) {
        info!("UI | listen anim start");
    }

    fn listen_anim_stop(&mut self) {
        info!("UI | listen anim stop");
    }

    fn listen_set_text(&mut self, text: &str) {
        info!("UI | listen text '{text}'");
    }

    fn health_update(&mut self, heart_rate: f32, spo2: i32) {
        info!("UI | health hr={heart_rate:.0} spo2={spo2}");
    }
}

/// Adapter that logs every playback request and reports success.
pub struct ConsoleAudio;

impl ConsoleAudio {
    pub fn new() -> Self {
        Self
    }
}

impl Default for ConsoleAudio {
    fn default() -> Self {
        Self::new()
    }
}

impl AudioPort for ConsoleAudio {
    fn play_cue(&mut self, cue: AudioCue) -> Result<(), ResourceError> {
        info!("AUDIO | cue {:?} ({})", cue, cue.asset_path());
        Ok(())
    }

    fn play_clip(&mut self, path: &'static str) -> Result<(), ResourceError> {
        info!("AUDIO | clip {path}");
        Ok(())
    }

    fn stop(&mut self) {
        info!("AUDIO | stop");
    }

    fn set_volume(&mut self, percent: u8) {
        info!("AUDIO | volume {percent}%");
    }
}
