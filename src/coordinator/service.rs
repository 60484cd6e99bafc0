//! Coordinator service — the single writer of all shared device state.
//!
//! Owns the peer link, the fall-alarm latch, and the UI mode machine.
//! Voice commands and inbound link events reach it through the event
//! queues, so every mutation of alarm and mode state happens on the
//! main loop, never in a radio or recognizer callback context.

use log::{debug, info, warn};

use crate::alarm::AlarmLatch;
use crate::assets;
use crate::config::SystemConfig;
use crate::error::Result;
use crate::link::{LinkEvent, PeerLink, RadioPort};

use super::commands::{VoiceAction, VoiceCommand};
use super::mode::{ModeMachine, UiMode};
use super::ports::{
    ACTUATOR_DANCE, ACTUATOR_HALT, ACTUATOR_WALK_FORWARD, ActuatorPort, AudioCue, AudioPort,
    UiPort,
};

/// Top-level event dispatcher for the hub.
pub struct Coordinator<R: RadioPort> {
    link: PeerLink<R>,
    alarm: AlarmLatch,
    mode: ModeMachine,
    config: SystemConfig,
}

impl<R: RadioPort> Coordinator<R> {
    pub fn new(radio: R, config: SystemConfig) -> Self {
        Self {
            link: PeerLink::new(radio),
            alarm: AlarmLatch::new(),
            mode: ModeMachine::new(),
            config,
        }
    }

    /// Bring up the radio link and register the provisioned peers.
    /// Failure here is fatal: the hub is useless without its peers.
    pub fn initialize(&mut self) -> Result<()> {
        self.link.initialize(&self.config)?;
        info!(
            "coordinator ready: {} peers, channel {}",
            self.link.registry().len(),
            self.config.radio_channel
        );
        Ok(())
    }

    /// Handle one recognizer event.
    pub fn handle_voice(
        &mut self,
        cmd: VoiceCommand,
        io: &mut (impl UiPort + AudioPort + ActuatorPort),
        now_ms: u64,
    ) {
        match cmd {
            VoiceCommand::Wake => {
                debug!("wake word detected");
                io.listen_anim_start();
                io.listen_set_text("Say command");
                if let Err(e) = io.play_cue(AudioCue::Wake) {
                    warn!("wake cue unavailable: {e}");
                }
                self.mode.set_listening(true);
            }
            VoiceCommand::Timeout => {
                self.mode.set_listening(false);
                if self.mode.persistent_engaged() {
                    // Dance / story playback continues; the end tone
                    // would cut into it, so only the overlay goes away.
                    debug!("recognition timeout suppressed during {:?}", self.mode.current());
                    io.listen_anim_stop();
                    return;
                }
                info!("recognition timeout");
                io.listen_set_text("Timeout");
                if let Err(e) = io.play_cue(AudioCue::End) {
                    warn!("end cue unavailable: {e}");
                }
                io.listen_anim_stop();
            }
            VoiceCommand::Detected(action) => {
                info!("command detected: {}", action.label());
                self.mode.set_listening(false);
                io.listen_set_text(action.label());
                if let Err(e) = io.play_cue(AudioCue::Ok) {
                    warn!("ok cue unavailable: {e}");
                }
                io.listen_anim_stop();
                self.dispatch(action, io, now_ms);
            }
        }
    }

    fn dispatch(
        &mut self,
        action: VoiceAction,
        io: &mut (impl UiPort + AudioPort + ActuatorPort),
        now_ms: u64,
    ) {
        if let Some(code) = action.control_code() {
            if let Err(e) = self.link.send_control(code) {
                warn!("control command {code} not sent: {e}");
            }
            return;
        }

        match action {
            VoiceAction::LockDoor | VoiceAction::UnlockDoor => {
                let locked = matches!(action, VoiceAction::LockDoor);
                let text = if locked { "lock" } else { "unlock" };
                if let Err(e) = self.link.send_door(text) {
                    warn!("door command '{text}' not sent: {e}");
                }
                let revert_at = now_ms + u64::from(self.config.door_dwell_ms);
                self.mode.show_door_overlay(io, locked, revert_at);
            }
            VoiceAction::WalkForward => {
                if let Err(e) = io.write_byte(ACTUATOR_WALK_FORWARD) {
                    warn!("walk command not sent: {e}");
                }
            }
            VoiceAction::Stop => {
                io.listen_set_text("Stopped");
                if let Err(e) = io.write_byte(ACTUATOR_HALT) {
                    warn!("halt command not sent: {e}");
                }
                self.mode.clear_persistent(io);
                self.mode.dismiss_overlay(io);
                if self.alarm.stop(io) {
                    self.mode.alarm_cleared();
                }
                io.main_show(true);
            }
            VoiceAction::Dance => {
                io.listen_set_text("Dancing...");
                if let Err(e) = io.write_byte(ACTUATOR_DANCE) {
                    warn!("dance command not sent: {e}");
                }
                self.mode.engage_dance(io);
            }
            VoiceAction::TellStory => {
                io.listen_set_text("Story Time");
                self.mode.engage_story(io);
            }
            VoiceAction::CheckHealth => {
                // Recognized but intentionally unhandled: live readings
                // already flow in through health telemetry.
                debug!("check-health acknowledged, no action");
            }
            _ => unreachable!("smart-home actions are handled via control_code"),
        }
    }

    /// Handle one decoded inbound frame.
    pub fn handle_link_event(&mut self, event: LinkEvent, io: &mut (impl UiPort + AudioPort)) {
        match event {
            LinkEvent::Health(telemetry) => {
                if self.alarm.process(&telemetry, io) {
                    self.mode.alarm_engaged(io);
                }
                if telemetry.heart_rate > 0.0 || telemetry.spo2 > 0 {
                    io.health_update(telemetry.heart_rate, telemetry.spo2);
                }
            }
            LinkEvent::PersonDetected(event) => {
                info!("door camera recognized '{}'", event.name);
                io.door_show_person(&event.name);
                if let Err(e) = io.play_clip(assets::DOOR_CHIME) {
                    warn!("door chime unavailable: {e}");
                }
            }
            LinkEvent::ControllerNotice => {
                debug!("controller notice received, ignored");
            }
        }
    }

    /// Advance time-based state: expire the door overlay.
    pub fn tick(&mut self, now_ms: u64, ui: &mut impl UiPort) {
        self.mode.tick(now_ms, ui);
    }

    pub fn link(&mut self) -> &mut PeerLink<R> {
        &mut self.link
    }

    pub fn mode(&self) -> UiMode {
        self.mode.current()
    }

    pub fn alarm_active(&self) -> bool {
        self.alarm.is_active()
    }
}
