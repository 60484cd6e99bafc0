//! Combined I/O bundle handed to the coordinator.
//!
//! The coordinator takes one `&mut (impl UiPort + AudioPort +
//! ActuatorPort)` per event, so the per-concern adapters are bundled
//! into a single value that forwards each trait to its member. Generic
//! over the members: the device build plugs in the real display, codec,
//! and UART adapters, the tests plug in recorders.

use crate::coordinator::ports::{ActuatorPort, AudioCue, AudioPort, UiPort};
use crate::error::{LinkError, ResourceError};

/// Bundles the UI, audio, and actuator adapters into one I/O value.
pub struct DeviceIo<U, A, T> {
    pub ui: U,
    pub audio: A,
    pub actuator: T,
}

impl<U: UiPort, A: AudioPort, T: ActuatorPort> DeviceIo<U, A, T> {
    pub fn new(ui: U, audio: A, actuator: T) -> Self {
        Self { ui, audio, actuator }
    }
}

impl<U: UiPort, A, T> UiPort for DeviceIo<U, A, T> {
    fn main_show(&mut self, visible: bool) {
        self.ui.main_show(visible);
    }

    fn door_show(&mut self, visible: bool) {
        self.ui.door_show(visible);
    }

    fn door_set_locked(&mut self, locked: bool) {
        self.ui.door_set_locked(locked);
    }

    fn door_show_person(&mut self, name: &str) {
        self.ui.door_show_person(name);
    }

    fn dance_show(&mut self, visible: bool) {
        self.ui.dance_show(visible);
    }

    fn story_show(&mut self, visible: bool) {
        self.ui.story_show(visible);
    }

    fn alarm_show(&mut self, visible: bool) {
        self.ui.alarm_show(visible);
    }

    fn listen_anim_start(&mut self) {
        self.ui.listen_anim_start();
    }

    fn listen_anim_stop(&mut self) {
        self.ui.listen_anim_stop();
    }

    fn listen_set_text(&mut self, text: &str) {
        self.ui.listen_set_text(text);
    }

    fn health_update(&mut self, heart_rate: f32, spo2: i32) {
        self.ui.health_update(heart_rate, spo2);
    }
}

impl<U, A: AudioPort, T> AudioPort for DeviceIo<U, A, T> {
    fn play_cue(&mut self, cue: AudioCue) -> Result<(), ResourceError> {
        self.audio.play_cue(cue)
    }

    fn play_clip(&mut self, path: &'static str) -> Result<(), ResourceError> {
        self.audio.play_clip(path)
    }

    fn stop(&mut self) {
        self.audio.stop();
    }

    fn set_volume(&mut self, percent: u8) {
        self.audio.set_volume(percent);
    }
}

impl<U, A, T: ActuatorPort> ActuatorPort for DeviceIo<U, A, T> {
    fn write_byte(&mut self, b: u8) -> Result<(), LinkError> {
        self.actuator.write_byte(b)
    }
}
