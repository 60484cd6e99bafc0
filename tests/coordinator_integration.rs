//! Integration tests: Coordinator → PeerLink / AlarmLatch / ModeMachine.
//!
//! Drives the coordinator through the same entry points the main loop
//! uses, with recording mocks behind every port.

use aigis::config::SystemConfig;
use aigis::coordinator::commands::{VoiceAction, VoiceCommand};
use aigis::coordinator::mode::UiMode;
use aigis::coordinator::ports::{
    ACTUATOR_DANCE, ACTUATOR_HALT, ACTUATOR_WALK_FORWARD, ActuatorPort, AudioCue, AudioPort,
    UiPort,
};
use aigis::coordinator::service::Coordinator;
use aigis::error::LinkError;
use aigis::link::wire::{DoorRecognitionEvent, HealthTelemetry, DOOR_COMMAND_LEN};
use aigis::link::{LinkEvent, RadioPort, decode_frame};
use aigis::peers::{self, PeerAddr, PeerRegistry};

// ── Mock implementations ──────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
enum UiCall {
    MainShow(bool),
    DoorShow(bool),
    DoorSetLocked(bool),
    DoorShowPerson(String),
    DanceShow(bool),
    StoryShow(bool),
    AlarmShow(bool),
    AnimStart,
    AnimStop,
    SetText(String),
    HealthUpdate(i32),
}

#[derive(Debug, Clone, PartialEq)]
enum AudioCall {
    Cue(AudioCue),
    Clip(&'static str),
    Stop,
}

#[derive(Default)]
struct MockIo {
    ui: Vec<UiCall>,
    audio: Vec<AudioCall>,
    actuator: Vec<u8>,
}

impl MockIo {
    fn new() -> Self {
        Self::default()
    }
}

impl UiPort for MockIo {
    fn main_show(&mut self, visible: bool) {
        self.ui.push(UiCall::MainShow(visible));
    }
    fn door_show(&mut self, visible: bool) {
        self.ui.push(UiCall::DoorShow(visible));
    }
    fn door_set_locked(&mut self, locked: bool) {
        self.ui.push(UiCall::DoorSetLocked(locked));
    }
    fn door_show_person(&mut self, name: &str) {
        self.ui.push(UiCall::DoorShowPerson(name.to_owned()));
    }
    fn dance_show(&mut self, visible: bool) {
        self.ui.push(UiCall::DanceShow(visible));
    }
    fn story_show(&mut self, visible: bool) {
        self.ui.push(UiCall::StoryShow(visible));
    }
    fn alarm_show(&mut self, visible: bool) {
        self.ui.push(UiCall::AlarmShow(visible));
    }
    fn listen_anim_start(&mut self) {
        self.ui.push(UiCall::AnimStart);
    }
    fn listen_anim_stop(&mut self) {
        self.ui.push(UiCall::AnimStop);
    }
    fn listen_set_text(&mut self, text: &str) {
        self.ui.push(UiCall::SetText(text.to_owned()));
    }
    fn health_update(&mut self, _heart_rate: f32, spo2: i32) {
        self.ui.push(UiCall::HealthUpdate(spo2));
    }
}

impl AudioPort for MockIo {
    fn play_cue(&mut self, cue: AudioCue) -> Result<(), aigis::error::ResourceError> {
        self.audio.push(AudioCall::Cue(cue));
        Ok(())
    }
    fn play_clip(&mut self, path: &'static str) -> Result<(), aigis::error::ResourceError> {
        self.audio.push(AudioCall::Clip(path));
        Ok(())
    }
    fn stop(&mut self) {
        self.audio.push(AudioCall::Stop);
    }
}

impl ActuatorPort for MockIo {
    fn write_byte(&mut self, b: u8) -> Result<(), LinkError> {
        self.actuator.push(b);
        Ok(())
    }
}

#[derive(Default)]
struct MockRadio {
    up: bool,
    peers: Vec<PeerAddr>,
    sent: Vec<(PeerAddr, Vec<u8>)>,
}

impl RadioPort for MockRadio {
    fn bring_up(&mut self, _channel: u8, _max_tx_power_qdbm: i8) -> Result<(), LinkError> {
        self.up = true;
        Ok(())
    }
    fn add_peer(&mut self, addr: PeerAddr) -> Result<(), LinkError> {
        self.peers.push(addr);
        Ok(())
    }
    fn send(&mut self, addr: PeerAddr, payload: &[u8]) -> Result<(), LinkError> {
        self.sent.push((addr, payload.to_vec()));
        Ok(())
    }
}

// ── Helpers ───────────────────────────────────────────────────

fn coordinator() -> Coordinator<MockRadio> {
    let mut c = Coordinator::new(MockRadio::default(), SystemConfig::default());
    c.initialize().expect("mock link bring-up");
    c
}

fn fall_telemetry() -> HealthTelemetry {
    HealthTelemetry {
        fall_detected: true,
        alarm: false,
        heart_rate: 82.0,
        spo2: 97,
    }
}

// ── Inbound frame handling ────────────────────────────────────

#[test]
fn unknown_peer_frame_is_dropped_without_state_change() {
    let registry = PeerRegistry::provisioned();
    let stranger = PeerAddr([0xde, 0xad, 0xbe, 0xef, 0x00, 0x01]);

    let result = decode_frame(&registry, stranger, &[0u8; 12]);
    assert!(result.is_err());

    // Nothing to dispatch, so the coordinator state stays untouched.
    let c = coordinator();
    assert!(!c.alarm_active());
    assert_eq!(c.mode(), UiMode::Idle);
}

#[test]
fn undersized_door_frame_is_rejected_before_any_effect() {
    let registry = PeerRegistry::provisioned();
    let result = decode_frame(&registry, peers::DOOR_NODE_ADDR, &[0u8; 10]);
    assert!(result.is_err());
}

#[test]
fn fall_telemetry_latches_alarm_and_plays_siren_once() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    c.handle_link_event(LinkEvent::Health(fall_telemetry()), &mut io);

    assert!(c.alarm_active());
    assert_eq!(c.mode(), UiMode::AlarmActive);
    assert!(io.ui.contains(&UiCall::AlarmShow(true)));
    assert_eq!(io.audio, vec![AudioCall::Clip(aigis::assets::SIREN)]);

    // Duplicate report while latched: no second siren, no UI churn.
    let before = io.ui.len();
    c.handle_link_event(LinkEvent::Health(fall_telemetry()), &mut io);
    assert_eq!(io.audio.len(), 1);
    // Only the health readout may have been updated.
    assert!(io.ui.len() <= before + 1);
    assert!(c.alarm_active());
}

#[test]
fn health_readout_updates_without_fall() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    let t = HealthTelemetry {
        fall_detected: false,
        alarm: false,
        heart_rate: 71.5,
        spo2: 98,
    };
    c.handle_link_event(LinkEvent::Health(t), &mut io);

    assert!(!c.alarm_active());
    assert_eq!(io.ui, vec![UiCall::HealthUpdate(98)]);
    assert!(io.audio.is_empty());
}

#[test]
fn person_at_door_shows_name_and_plays_chime() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    let bytes = DoorRecognitionEvent::encode_name("Alice");
    let event = DoorRecognitionEvent::decode(&bytes);
    c.handle_link_event(LinkEvent::PersonDetected(event), &mut io);

    assert_eq!(io.ui, vec![UiCall::DoorShowPerson("Alice".into())]);
    assert_eq!(io.audio, vec![AudioCall::Clip(aigis::assets::DOOR_CHIME)]);
}

// ── Voice command handling ────────────────────────────────────

#[test]
fn wake_starts_listening_overlay() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    c.handle_voice(VoiceCommand::Wake, &mut io, 0);

    assert_eq!(
        io.ui,
        vec![UiCall::AnimStart, UiCall::SetText("Say command".into())]
    );
    assert_eq!(io.audio, vec![AudioCall::Cue(AudioCue::Wake)]);
    assert_eq!(c.mode(), UiMode::Listening);
}

#[test]
fn smart_home_command_sends_control_code_to_controller() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    c.handle_voice(
        VoiceCommand::Detected(VoiceAction::FanLevelTwo),
        &mut io,
        0,
    );

    let sent = &c.link().radio().sent;
    assert_eq!(sent.len(), 1);
    let (addr, payload) = &sent[0];
    assert_eq!(*addr, peers::CONTROLLER_ADDR);
    assert_eq!(payload.as_slice(), &6i32.to_le_bytes());
    assert!(io.actuator.is_empty());
}

#[test]
fn lock_door_sends_command_and_shows_overlay_until_dwell() {
    let mut c = coordinator();
    let mut io = MockIo::new();
    let now = 10_000;

    c.handle_voice(VoiceCommand::Detected(VoiceAction::LockDoor), &mut io, now);

    // Exactly one padded frame to the door node.
    let sent = &c.link().radio().sent;
    assert_eq!(sent.len(), 1);
    let (addr, payload) = &sent[0];
    assert_eq!(*addr, peers::DOOR_NODE_ADDR);
    assert_eq!(payload.len(), DOOR_COMMAND_LEN);
    assert_eq!(&payload[..5], b"lock\0");
    assert!(payload[5..].iter().all(|&b| b == 0));

    assert!(io.ui.contains(&UiCall::MainShow(false)));
    assert!(io.ui.contains(&UiCall::DoorShow(true)));
    assert!(io.ui.contains(&UiCall::DoorSetLocked(true)));
    assert_eq!(c.mode(), UiMode::DoorVisible);

    // One tick before the dwell expires: overlay stays.
    io.ui.clear();
    c.tick(now + 2_999, &mut io);
    assert_eq!(c.mode(), UiMode::DoorVisible);
    assert!(io.ui.is_empty());

    // At the deadline: overlay reverts to the main face.
    c.tick(now + 3_000, &mut io);
    assert_eq!(c.mode(), UiMode::Idle);
    assert_eq!(io.ui, vec![UiCall::DoorShow(false), UiCall::MainShow(true)]);
}

#[test]
fn unlock_door_shows_unlocked_overlay() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    c.handle_voice(VoiceCommand::Detected(VoiceAction::UnlockDoor), &mut io, 0);

    let sent = &c.link().radio().sent;
    assert_eq!(&sent[0].1[..7], b"unlock\0");
    assert!(io.ui.contains(&UiCall::DoorSetLocked(false)));
}

#[test]
fn walk_forward_writes_single_actuator_byte() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    c.handle_voice(
        VoiceCommand::Detected(VoiceAction::WalkForward),
        &mut io,
        0,
    );

    assert_eq!(io.actuator, vec![ACTUATOR_WALK_FORWARD]);
    assert!(c.link().radio().sent.is_empty());
}

#[test]
fn dance_engages_persistent_mode_and_commands_actuator() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    c.handle_voice(VoiceCommand::Detected(VoiceAction::Dance), &mut io, 0);

    assert_eq!(io.actuator, vec![ACTUATOR_DANCE]);
    assert!(io.ui.contains(&UiCall::DanceShow(true)));
    assert_eq!(c.mode(), UiMode::DanceActive);
}

#[test]
fn timeout_is_suppressed_while_dance_is_active() {
    let mut c = coordinator();
    let mut io = MockIo::new();
    c.handle_voice(VoiceCommand::Detected(VoiceAction::Dance), &mut io, 0);

    io = MockIo::new();
    c.handle_voice(VoiceCommand::Timeout, &mut io, 1_000);

    // No end tone, no feedback text; only the overlay animation stops.
    assert!(io.audio.is_empty());
    assert_eq!(io.ui, vec![UiCall::AnimStop]);
    assert_eq!(c.mode(), UiMode::DanceActive);
}

#[test]
fn timeout_is_suppressed_while_story_is_active() {
    let mut c = coordinator();
    let mut io = MockIo::new();
    c.handle_voice(VoiceCommand::Detected(VoiceAction::TellStory), &mut io, 0);

    io = MockIo::new();
    c.handle_voice(VoiceCommand::Timeout, &mut io, 1_000);

    assert!(io.audio.is_empty());
    assert_eq!(io.ui, vec![UiCall::AnimStop]);
    assert_eq!(c.mode(), UiMode::StoryActive);
}

#[test]
fn timeout_outside_persistent_mode_plays_end_tone() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    c.handle_voice(VoiceCommand::Wake, &mut io, 0);
    io = MockIo::new();
    c.handle_voice(VoiceCommand::Timeout, &mut io, 1_000);

    assert_eq!(
        io.ui,
        vec![UiCall::SetText("Timeout".into()), UiCall::AnimStop]
    );
    assert_eq!(io.audio, vec![AudioCall::Cue(AudioCue::End)]);
    assert_eq!(c.mode(), UiMode::Idle);
}

#[test]
fn stop_halts_actuator_and_clears_everything() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    c.handle_voice(VoiceCommand::Detected(VoiceAction::Dance), &mut io, 0);
    c.handle_link_event(LinkEvent::Health(fall_telemetry()), &mut io);
    assert!(c.alarm_active());

    io = MockIo::new();
    c.handle_voice(VoiceCommand::Detected(VoiceAction::Stop), &mut io, 2_000);

    assert!(io.actuator.contains(&ACTUATOR_HALT));
    assert!(io.ui.contains(&UiCall::DanceShow(false)));
    assert!(io.ui.contains(&UiCall::StoryShow(false)));
    assert!(io.ui.contains(&UiCall::AlarmShow(false)));
    assert!(io.ui.contains(&UiCall::MainShow(true)));
    assert!(io.audio.contains(&AudioCall::Stop));
    assert!(!c.alarm_active());
    assert_eq!(c.mode(), UiMode::Idle);
}

#[test]
fn stop_during_door_dwell_dismisses_the_overlay() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    c.handle_voice(VoiceCommand::Detected(VoiceAction::LockDoor), &mut io, 0);
    assert_eq!(c.mode(), UiMode::DoorVisible);

    io = MockIo::new();
    c.handle_voice(VoiceCommand::Detected(VoiceAction::Stop), &mut io, 1_000);

    // The door surface comes down before the main surface is restored,
    // and the stale dwell deadline never fires.
    assert!(io.ui.contains(&UiCall::DoorShow(false)));
    assert!(io.ui.contains(&UiCall::MainShow(true)));
    assert_eq!(c.mode(), UiMode::Idle);

    io.ui.clear();
    c.tick(3_000, &mut io);
    assert!(io.ui.is_empty());
    assert_eq!(c.mode(), UiMode::Idle);
}

#[test]
fn stop_with_nothing_active_only_halts_the_actuator() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    c.handle_voice(VoiceCommand::Detected(VoiceAction::Stop), &mut io, 0);

    assert_eq!(io.actuator, vec![ACTUATOR_HALT]);
    // Alarm surface is never touched when the latch is inactive.
    assert!(!io.ui.contains(&UiCall::AlarmShow(false)));
    assert!(!c.alarm_active());
}

#[test]
fn check_health_is_acknowledged_without_effect() {
    let mut c = coordinator();
    let mut io = MockIo::new();

    c.handle_voice(
        VoiceCommand::Detected(VoiceAction::CheckHealth),
        &mut io,
        0,
    );

    assert!(c.link().radio().sent.is_empty());
    assert!(io.actuator.is_empty());
    // Only the recognizer feedback (text + ok tone) happened.
    assert!(io.ui.contains(&UiCall::SetText("Check health".into())));
}

#[test]
fn alarm_outranks_door_overlay() {
    let mut c = coordinator();
    let mut io = MockIo::new();
    let now = 0;

    c.handle_voice(VoiceCommand::Detected(VoiceAction::LockDoor), &mut io, now);
    assert_eq!(c.mode(), UiMode::DoorVisible);

    c.handle_link_event(LinkEvent::Health(fall_telemetry()), &mut io);
    assert_eq!(c.mode(), UiMode::AlarmActive);

    // The dwell deadline passing must not yank the alarm surface away.
    io.ui.clear();
    c.tick(now + 10_000, &mut io);
    assert_eq!(c.mode(), UiMode::AlarmActive);
    assert!(!io.ui.contains(&UiCall::MainShow(true)));
}
