//! Static event queues between the callback contexts and the main loop.
//!
//! The radio receive callback and the recognizer task run outside the
//! main loop, so decoded events cross over through fixed-capacity
//! channels. The main loop is the only consumer; publishing never
//! blocks, and a full queue drops the event with a warning rather than
//! stalling the producing context.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use log::warn;

use crate::coordinator::commands::VoiceCommand;
use crate::coordinator::ports::RecognizerPort;
use crate::link::LinkEvent;

/// Inbound frames decoded by the radio receive callback.
static LINK_EVENTS: Channel<CriticalSectionRawMutex, LinkEvent, 8> = Channel::new();

/// Commands delivered by the speech-recognition task.
static VOICE_COMMANDS: Channel<CriticalSectionRawMutex, VoiceCommand, 4> = Channel::new();

/// Publish a decoded inbound frame. Callable from the receive callback.
pub fn publish_link_event(event: LinkEvent) {
    if LINK_EVENTS.try_send(event).is_err() {
        warn!("link event queue full, frame dropped");
    }
}

/// Drain one link event, if any is pending.
pub fn next_link_event() -> Option<LinkEvent> {
    LINK_EVENTS.try_receive().ok()
}

/// Publish a recognizer result. Callable from the recognition task.
pub fn publish_voice_command(cmd: VoiceCommand) {
    if VOICE_COMMANDS.try_send(cmd).is_err() {
        warn!("voice command queue full, command dropped");
    }
}

/// Drain one voice command, if any is pending.
pub fn next_voice_command() -> Option<VoiceCommand> {
    VOICE_COMMANDS.try_receive().ok()
}

/// [`RecognizerPort`] backed by the static voice-command queue.
pub struct QueueRecognizer;

impl RecognizerPort for QueueRecognizer {
    fn poll_command(&mut self) -> Option<VoiceCommand> {
        next_voice_command()
    }
}
