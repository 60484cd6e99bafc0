//! Recognized voice commands.
//!
//! The speech-recognition engine (an external collaborator) resolves an
//! utterance against its grammar table and delivers one of these to the
//! coordinator. Wake and timeout are recognizer lifecycle events; every
//! grammar phrase maps to a [`VoiceAction`].

/// One result from the speech recognizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceCommand {
    /// The wake word was detected; the recognizer is now listening.
    Wake,
    /// Listening ended without a recognized phrase.
    Timeout,
    /// A grammar phrase was recognized.
    Detected(VoiceAction),
}

/// The full voice grammar, one variant per phrase.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceAction {
    // Smart-home commands, forwarded to the controller node.
    LightOn,
    LightOff,
    SocketOn,
    SocketOff,
    FanLevelOne,
    FanLevelTwo,
    FanLevelThree,
    FanOff,

    // Device-local actions.
    CheckHealth,
    LockDoor,
    UnlockDoor,
    WalkForward,
    Stop,
    Dance,
    TellStory,
}

impl VoiceAction {
    /// The controller wire code for smart-home actions; `None` for
    /// device-local actions. Codes are a fixed contract with the
    /// controller node firmware.
    pub const fn control_code(self) -> Option<i32> {
        match self {
            Self::LightOn => Some(1),
            Self::LightOff => Some(2),
            Self::SocketOn => Some(3),
            Self::SocketOff => Some(4),
            Self::FanLevelOne => Some(5),
            Self::FanLevelTwo => Some(6),
            Self::FanLevelThree => Some(7),
            Self::FanOff => Some(8),
            _ => None,
        }
    }

    /// Display string shown on the listening overlay when the phrase is
    /// recognized.
    pub const fn label(self) -> &'static str {
        match self {
            Self::LightOn => "Turn on the light",
            Self::LightOff => "Turn off the light",
            Self::SocketOn => "Turn on the socket",
            Self::SocketOff => "Turn off the socket",
            Self::FanLevelOne => "Fan level one",
            Self::FanLevelTwo => "Fan level two",
            Self::FanLevelThree => "Fan level three",
            Self::FanOff => "Turn off the fan",
            Self::CheckHealth => "Check health",
            Self::LockDoor => "Lock the door",
            Self::UnlockDoor => "Unlock the door",
            Self::WalkForward => "Walk forward",
            Self::Stop => "Stop",
            Self::Dance => "Let's dance",
            Self::TellStory => "Tell a story",
        }
    }
}
