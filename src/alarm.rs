//! Fall-alarm latch.
//!
//! A boolean latch that only changes on explicit events: a detected fall
//! enters, a stop command exits. Redundant fall reports while latched
//! are suppressed so the siren and the alarm surface are requested
//! exactly once per episode. All mutations happen on the coordinator
//! thread — telemetry reaches this latch through the event queue, never
//! directly from the radio receive context.

use log::{debug, error, info, warn};

use crate::assets;
use crate::coordinator::ports::{AudioPort, UiPort};
use crate::link::wire::HealthTelemetry;

/// Single-writer fall-alarm latch.
pub struct AlarmLatch {
    active: bool,
}

impl AlarmLatch {
    pub fn new() -> Self {
        Self { active: false }
    }

    /// Process one telemetry frame from the health sensor.
    ///
    /// Latches on `fall_detected` when inactive: shows the alarm
    /// surface and requests the siren clip. A missing siren asset is
    /// logged and the alarm still latches. Returns `true` when the
    /// latch transitioned from inactive to active.
    pub fn process(&mut self, telemetry: &HealthTelemetry, io: &mut (impl UiPort + AudioPort)) -> bool {
        if !telemetry.fall_detected {
            return false;
        }

        if self.active {
            debug!("fall report while alarm already active, suppressed");
            return false;
        }

        error!("fall detected, latching alarm");
        self.active = true;
        io.alarm_show(true);
        match io.play_clip(assets::SIREN) {
            Ok(()) => info!("siren playback started"),
            Err(e) => warn!("siren unavailable, alarm latched silently: {e}"),
        }
        true
    }

    /// Clear the latch: stops playback and hides the alarm surface.
    /// No-op when inactive. Returns `true` when the latch was cleared.
    pub fn stop(&mut self, io: &mut (impl UiPort + AudioPort)) -> bool {
        if !self.active {
            return false;
        }
        info!("stopping fall alarm");
        self.active = false;
        io.stop();
        io.alarm_show(false);
        true
    }

    pub fn is_active(&self) -> bool {
        self.active
    }
}

impl Default for AlarmLatch {
    fn default() -> Self {
        Self::new()
    }
}
