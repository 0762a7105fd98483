//! Per-mode mutable progress.

use sn_core::{Pose, Vec3, WaypointId};

use crate::MovementMode;

/// The mutable side of a movement mode: everything that evolves with
/// simulated time.  Reset whenever the mode changes (or the agent respawns);
/// otherwise advanced monotonically by the engine.
///
/// Each variant matches one family of modes; the engine guarantees the
/// variant always corresponds to the active mode by deriving fresh state via
/// [`ModeState::initial`] on construction and reset.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum ModeState {
    /// Idle — nothing to track.
    Stationary,

    /// Sentinel look.  `waiting == false` means the rotating sub-state.
    Look {
        target_yaw: f32,
        waiting: bool,
        wait_left: f32,
    },

    /// Closed-form curves (linear sweep, ellipse, figure-eight): the
    /// accumulated phase angle / wave input.
    Curve { theta: f32 },

    /// Route following (loop and ping-pong).
    Route {
        index: usize,
        /// Ping-pong only: currently walking the route back-to-front.
        reverse: bool,
        wait_left: f32,
    },

    /// Graph random walk: the current node, held as a weak reference into
    /// externally-owned graph data.
    Graph {
        current: WaypointId,
        wait_left: f32,
    },

    /// Random wander: the current target point inside the wander disk.
    Wander { target: Vec3, wait_left: f32 },
}

impl ModeState {
    /// Fresh progress for `mode`, anchored at the agent's spawn pose.
    pub fn initial(mode: &MovementMode, anchor: &Pose) -> ModeState {
        use MovementMode::*;
        match mode {
            Idle => ModeState::Stationary,
            // Target = current yaw: the first update is an immediate arrival,
            // so the look cycle starts with its wait, not a spin.
            SentinelLook { .. } => ModeState::Look {
                target_yaw: anchor.yaw,
                waiting: false,
                wait_left: 0.0,
            },
            PatrolLinear { .. } | PatrolCircular { .. } | PatrolElliptical { .. }
            | PatrolFigureEight { .. } => ModeState::Curve { theta: 0.0 },
            // Wait timers start full: an agent spawned on its first target
            // holds there for one wait period before advancing.
            PatrolLoop { wait_secs, .. } | PatrolPingPong { wait_secs, .. } => ModeState::Route {
                index: 0,
                reverse: false,
                wait_left: *wait_secs,
            },
            WaypointGraphRandom { start, wait_secs, .. } => ModeState::Graph {
                current: *start,
                wait_left: *wait_secs,
            },
            // Target = spawn position: counts as arrived, so the first real
            // target is picked after one wait period.
            RandomWander { wait_secs, .. } => ModeState::Wander {
                target: anchor.position,
                wait_left: *wait_secs,
            },
        }
    }
}
