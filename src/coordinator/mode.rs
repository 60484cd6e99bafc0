//! UI mode state machine.
//!
//! At most one persistent mode (dance, story, alarm) owns the device at
//! a time; the door overlay is a transient layer with an absolute revert
//! deadline instead of a blocking sleep, so the coordinator loop stays
//! responsive during the dwell. Every transition goes through
//! [`ModeMachine`], which is owned by the coordinator — the single
//! writer — so the alarm surface and the door overlay can never both
//! claim the foreground.
//!
//! ```text
//!  Idle/Main ⇄ DoorVisible      (timed auto-revert)
//!  Idle/Main ⇄ DanceActive      (exits via stop)
//!  Idle/Main ⇄ StoryActive      (exits via stop or another mode)
//!  Idle/Main ⇄ AlarmActive      (driven by the alarm latch)
//! ```

use log::info;

use super::ports::UiPort;

/// The externally observable UI mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Idle,
    Listening,
    DoorVisible,
    DanceActive,
    StoryActive,
    AlarmActive,
}

/// Which persistent surface currently owns the device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Persistent {
    None,
    Dance,
    Story,
}

#[derive(Debug, Clone, Copy)]
struct DoorOverlay {
    locked: bool,
    revert_at_ms: u64,
}

/// Tracks the persistent mode, the door overlay, the listening flag,
/// and the alarm surface. Initial state: main surface, nothing engaged.
pub struct ModeMachine {
    persistent: Persistent,
    overlay: Option<DoorOverlay>,
    listening: bool,
    alarm: bool,
}

impl ModeMachine {
    pub fn new() -> Self {
        Self {
            persistent: Persistent::None,
            overlay: None,
            listening: false,
            alarm: false,
        }
    }

    /// Current mode, by foreground precedence: the alarm surface is
    /// always frontmost, then the door overlay, then persistent modes.
    pub fn current(&self) -> UiMode {
        if self.alarm {
            return UiMode::AlarmActive;
        }
        if self.overlay.is_some() {
            return UiMode::DoorVisible;
        }
        match self.persistent {
            Persistent::Dance => UiMode::DanceActive,
            Persistent::Story => UiMode::StoryActive,
            Persistent::None if self.listening => UiMode::Listening,
            Persistent::None => UiMode::Idle,
        }
    }

    /// Whether a persistent mode suppresses recognition timeouts.
    pub fn persistent_engaged(&self) -> bool {
        self.persistent != Persistent::None
    }

    pub fn set_listening(&mut self, listening: bool) {
        self.listening = listening;
    }

    // ── Door overlay ──────────────────────────────────────────

    /// Hide the main surface and show the door overlay in the given
    /// lock state until `revert_at_ms`.
    pub fn show_door_overlay(&mut self, ui: &mut impl UiPort, locked: bool, revert_at_ms: u64) {
        ui.main_show(false);
        ui.door_show(true);
        ui.door_set_locked(locked);
        self.overlay = Some(DoorOverlay {
            locked,
            revert_at_ms,
        });
    }

    /// Revert an expired door overlay. Called every coordinator tick.
    pub fn tick(&mut self, now_ms: u64, ui: &mut impl UiPort) {
        let Some(overlay) = self.overlay else {
            return;
        };
        if now_ms < overlay.revert_at_ms {
            return;
        }
        ui.door_show(false);
        self.overlay = None;
        // The prior owner takes the foreground back; with no persistent
        // mode engaged that is the main surface.
        if self.persistent == Persistent::None && !self.alarm {
            ui.main_show(true);
        }
        info!(
            "door overlay reverted ({} state)",
            if overlay.locked { "locked" } else { "unlocked" }
        );
    }

    /// Dismiss an active door overlay without waiting for its deadline
    /// (the stop path). No-op when no overlay is up.
    pub fn dismiss_overlay(&mut self, ui: &mut impl UiPort) {
        if self.overlay.take().is_some() {
            ui.door_show(false);
        }
    }

    pub fn door_overlay_active(&self) -> bool {
        self.overlay.is_some()
    }

    // ── Persistent modes ──────────────────────────────────────

    /// Engage dance mode: it owns the device until an explicit stop.
    pub fn engage_dance(&mut self, ui: &mut impl UiPort) {
        ui.main_show(false);
        ui.door_show(false);
        self.overlay = None;
        if self.persistent == Persistent::Story {
            ui.story_show(false);
        }
        ui.dance_show(true);
        self.persistent = Persistent::Dance;
    }

    /// Engage story mode: it owns the device until an explicit stop or
    /// another mode-changing command.
    pub fn engage_story(&mut self, ui: &mut impl UiPort) {
        ui.main_show(false);
        ui.door_show(false);
        self.overlay = None;
        ui.dance_show(false);
        ui.story_show(true);
        self.persistent = Persistent::Story;
    }

    /// Clear any persistent mode (the stop path). Both hide calls are
    /// issued unconditionally; hiding an already hidden surface is a
    /// collaborator no-op.
    pub fn clear_persistent(&mut self, ui: &mut impl UiPort) {
        ui.dance_show(false);
        ui.story_show(false);
        self.persistent = Persistent::None;
    }

    // ── Alarm surface ─────────────────────────────────────────

    /// The alarm latch took the foreground. Cancels a door overlay so
    /// the two surfaces never co-own the screen.
    pub fn alarm_engaged(&mut self, ui: &mut impl UiPort) {
        if self.overlay.take().is_some() {
            ui.door_show(false);
        }
        self.alarm = true;
    }

    /// The alarm latch released the foreground.
    pub fn alarm_cleared(&mut self) {
        self.alarm = false;
    }
}

impl Default for ModeMachine {
    fn default() -> Self {
        Self::new()
    }
}
