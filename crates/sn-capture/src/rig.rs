//! Collaborator traits at the capture boundary, and the per-tick bundle.
//!
//! These are the injected interfaces behind every side effect the sequence
//! performs.  Implementations live outside the core (a renderer's camera, an
//! input system, a game-state manager); tests use small recording fakes.

use sn_core::Vec3;

use crate::CapabilityTable;

// ── Collaborator traits ───────────────────────────────────────────────────────

/// The external viewpoint/camera the capture commandeers.
pub trait ViewpointController: Send {
    fn set_position(&mut self, position: Vec3);
    /// Aim the viewpoint at `point` from wherever it currently sits.
    fn look_at(&mut self, point: Vec3);
}

/// Handle to the captured target's actor: physics suspension and visibility.
pub trait TargetHandle: Send {
    fn set_physics_enabled(&mut self, enabled: bool);
    fn set_visible(&mut self, visible: bool);
}

/// Fire-and-forget named animation triggers.
pub trait AnimationSink: Send {
    fn fire_trigger(&mut self, name: &str);
}

/// The end-of-game notification.  Idempotent from the core's perspective;
/// the sequence calls it exactly once regardless.
pub trait GameOverNotifier: Send {
    fn notify_game_over(&mut self);
}

// ── CaptureRig ────────────────────────────────────────────────────────────────

/// Borrowed collaborator handles, assembled by the driver for each capture
/// call.
///
/// `viewpoint`, `target`, and `animation` are optional: when absent, their
/// side effects are skipped and the state machine advances regardless.  The
/// capability table and the game-over notifier are always present — the
/// table may simply be empty, and the notification is the one effect that
/// must never be dropped.
pub struct CaptureRig<'a> {
    pub viewpoint: Option<&'a mut (dyn ViewpointController + 'static)>,
    pub target: Option<&'a mut (dyn TargetHandle + 'static)>,
    pub animation: Option<&'a mut (dyn AnimationSink + 'static)>,
    pub controls: &'a mut CapabilityTable,
    pub game_over: &'a mut (dyn GameOverNotifier + 'static),
}
