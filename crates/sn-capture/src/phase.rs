//! The capture state machine.

use std::fmt;

use sn_core::{Pose, TargetId, Vec3};

use crate::{CaptureConfig, CaptureRig, VisualForm, VisualState};

// ── CapturePhase ──────────────────────────────────────────────────────────────

/// Phases of an active capture, in order.  Transitions are one-way;
/// `Resolved` is terminal.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CapturePhase {
    /// The roar: agent frozen in place facing the target, timer running.
    Alerted,
    /// Closing on the target at rush speed.
    Rushing,
    /// In range; the bite animation plays out.
    Biting,
    /// Game over has been notified.  Nothing further happens.
    Resolved,
}

impl fmt::Display for CapturePhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            CapturePhase::Alerted => "alerted",
            CapturePhase::Rushing => "rushing",
            CapturePhase::Biting => "biting",
            CapturePhase::Resolved => "resolved",
        };
        f.write_str(s)
    }
}

// ── CaptureSequence ───────────────────────────────────────────────────────────

/// One agent's capture in progress: `(phase, elapsed_in_phase)` plus the
/// detection snapshot, advanced by [`advance`](Self::advance) each tick.
///
/// Constructed only via [`begin`](Self::begin), which performs the entry
/// side effects.  One-shot: once resolved the sequence never re-arms; an
/// external reset drops it via [`abort`](Self::abort).
pub struct CaptureSequence {
    config: CaptureConfig,
    phase: CapturePhase,
    elapsed_in_phase: f32,
    target_id: TargetId,
    /// The target's ground position at detection.  The capture disables the
    /// target's controls immediately, so the snapshot stays accurate — and
    /// it keeps the rush well-defined when no target handle is wired.
    target_pos: Vec3,
}

impl CaptureSequence {
    /// Enter the sequence: all detection-time side effects, synchronously.
    ///
    /// Freezing the agent's patrol motion is the caller's side of the
    /// contract (the agent stops calling its motion engine while a sequence
    /// exists).
    pub fn begin(
        config: CaptureConfig,
        target_id: TargetId,
        target_pos: Vec3,
        agent_pose: &mut Pose,
        visual: &mut VisualState,
        rig: &mut CaptureRig<'_>,
    ) -> Self {
        let config = config.sanitized();

        // Take external control away from the target and its viewpoint.
        rig.controls.disable(&config.disable_controls);
        if let Some(target) = rig.target.as_deref_mut() {
            target.set_physics_enabled(false);
        }

        // Commandeer the viewpoint: eye-height above the target, locked onto
        // the agent.
        if let Some(viewpoint) = rig.viewpoint.as_deref_mut() {
            viewpoint.set_position(target_pos + Vec3::UP * config.viewpoint_eye_offset);
            viewpoint.look_at(agent_pose.position + Vec3::UP * config.head_height);
        }

        // Square off: yaw only, position unchanged until the rush.
        agent_pose.face(target_pos);
        visual.form = VisualForm::Alert;

        Self {
            config,
            phase: CapturePhase::Alerted,
            elapsed_in_phase: 0.0,
            target_id,
            target_pos,
        }
    }

    pub fn phase(&self) -> CapturePhase {
        self.phase
    }

    pub fn target(&self) -> TargetId {
        self.target_id
    }

    pub fn is_resolved(&self) -> bool {
        self.phase == CapturePhase::Resolved
    }

    /// Advance the sequence by `dt` simulated seconds.
    ///
    /// Returns the phase newly entered this tick, if any — observers report
    /// on these transitions.
    pub fn advance(
        &mut self,
        dt: f32,
        agent_pose: &mut Pose,
        visual: &mut VisualState,
        rig: &mut CaptureRig<'_>,
    ) -> Option<CapturePhase> {
        if dt <= 0.0 {
            return None;
        }
        self.elapsed_in_phase += dt;

        match self.phase {
            CapturePhase::Alerted => {
                if self.elapsed_in_phase >= self.config.roar_secs {
                    return Some(self.enter(CapturePhase::Rushing));
                }
                None
            }

            CapturePhase::Rushing => {
                // Close on the detection position, never overshooting.
                agent_pose.face(self.target_pos);
                agent_pose.position = agent_pose
                    .position
                    .move_towards(self.target_pos, self.config.rush_speed * dt);

                // Deny the escape view: the viewpoint stays at the target and
                // tracks the agent's head all the way in.
                if let Some(viewpoint) = rig.viewpoint.as_deref_mut() {
                    viewpoint
                        .look_at(agent_pose.position + Vec3::UP * self.config.head_height);
                }

                // Exponential growth toward base * multiplier.
                let target_scale = visual.base_scale * self.config.scale_multiplier;
                visual.scale = target_scale
                    + (visual.scale - target_scale) * (-self.config.scale_smoothing * dt).exp();

                let arrived = agent_pose.position.ground_distance(self.target_pos)
                    <= self.config.rush_arrive_dist;
                if arrived || self.elapsed_in_phase >= self.config.rush_timeout_secs {
                    if let Some(animation) = rig.animation.as_deref_mut() {
                        animation.fire_trigger(&self.config.bite_trigger);
                    }
                    return Some(self.enter(CapturePhase::Biting));
                }
                None
            }

            CapturePhase::Biting => {
                if self.elapsed_in_phase >= self.config.bite_delay_secs {
                    if let Some(target) = rig.target.as_deref_mut() {
                        target.set_visible(false);
                    }
                    rig.game_over.notify_game_over();
                    return Some(self.enter(CapturePhase::Resolved));
                }
                None
            }

            CapturePhase::Resolved => None,
        }
    }

    /// External cancellation (agent disable/respawn): restore everything the
    /// sequence disabled and reset the visuals.  Consumes the sequence — a
    /// fresh detection builds a new one.
    pub fn abort(self, visual: &mut VisualState, rig: &mut CaptureRig<'_>) {
        rig.controls.restore();
        if let Some(target) = rig.target.as_deref_mut() {
            target.set_physics_enabled(true);
            target.set_visible(true);
        }
        visual.reset();
    }

    fn enter(&mut self, phase: CapturePhase) -> CapturePhase {
        self.phase = phase;
        self.elapsed_in_phase = 0.0;
        phase
    }
}
