//! The sentinel agent: lifecycle, pose, and the per-tick update.

use sn_capture::{CaptureConfig, CapturePhase, CaptureRig, CaptureSequence, VisualState};
use sn_core::{AgentId, AgentRng, Pose, TargetId};
use sn_motion::MotionCurveEngine;
use sn_perception::{CandidateProvider, Detection, OcclusionTester, PerceptionSensor};
use sn_world::{RouteSet, WaypointGraph};

use crate::SentinelConfig;

// ── Lifecycle ─────────────────────────────────────────────────────────────────

/// Coarse agent lifecycle.  `Terminated` is absorbing: only an explicit
/// external [`reset`](SentinelAgent::reset) leaves it.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LifecycleState {
    Patrolling,
    Capturing,
    Terminated,
}

/// Something observable that happened during one agent's tick.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum AgentEvent {
    /// A scan succeeded and the capture sequence has begun.
    Detected(TargetId),
    /// The active capture entered a new phase.  `Resolved` coincides with
    /// the agent terminating.
    PhaseChanged(CapturePhase),
}

// ── SentinelAgent ─────────────────────────────────────────────────────────────

/// One sentinel: patrols, perceives, captures.
pub struct SentinelAgent {
    id: AgentId,
    pose: Pose,
    /// Captured once at spawn; anchor for relative movement and the respawn
    /// pose for resets.
    initial_pose: Pose,
    lifecycle: LifecycleState,
    motion: MotionCurveEngine,
    sensor: PerceptionSensor,
    capture_config: CaptureConfig,
    /// The capture in progress (or just resolved).  `None` while patrolling.
    capture: Option<CaptureSequence>,
    visual: VisualState,
}

impl SentinelAgent {
    pub fn new(id: AgentId, spawn: Pose, config: SentinelConfig) -> Self {
        Self {
            id,
            pose: spawn,
            initial_pose: spawn,
            lifecycle: LifecycleState::Patrolling,
            motion: MotionCurveEngine::new(config.movement, spawn)
                .with_turn_rate_deg(config.turn_rate_deg),
            sensor: PerceptionSensor::new(config.perception),
            capture_config: config.capture.sanitized(),
            capture: None,
            visual: VisualState::new(config.base_scale),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn id(&self) -> AgentId {
        self.id
    }

    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    pub fn initial_pose(&self) -> &Pose {
        &self.initial_pose
    }

    pub fn lifecycle(&self) -> LifecycleState {
        self.lifecycle
    }

    pub fn visual(&self) -> &VisualState {
        &self.visual
    }

    pub fn sensor(&self) -> &PerceptionSensor {
        &self.sensor
    }

    /// Phase of the active (or resolved) capture, if any.
    pub fn capture_phase(&self) -> Option<CapturePhase> {
        self.capture.as_ref().map(CaptureSequence::phase)
    }

    pub fn is_terminated(&self) -> bool {
        self.lifecycle == LifecycleState::Terminated
    }

    // ── Split-phase update (used by the sim loop) ─────────────────────────

    /// The read-mostly half of the update: advance patrol movement, then
    /// scan for targets.  Touches nothing outside the agent itself, so the
    /// driver may run it for many agents in parallel.
    ///
    /// Returns a detection for the driver to act on (via
    /// [`begin_capture`](Self::begin_capture)) during its sequential apply
    /// phase.  Non-patrolling agents return `None` without moving.
    pub fn patrol_tick<C, O>(
        &mut self,
        dt: f32,
        routes: &RouteSet,
        graph: &WaypointGraph,
        candidates: &C,
        occlusion: &O,
        carried_weight: f32,
        rng: &mut AgentRng,
    ) -> Option<Detection>
    where
        C: CandidateProvider + ?Sized,
        O: OcclusionTester + ?Sized,
    {
        if self.lifecycle != LifecycleState::Patrolling {
            return None;
        }
        self.motion.advance(&mut self.pose, dt, routes, graph, rng);
        self.sensor.scan(&self.pose, carried_weight, candidates, occlusion)
    }

    /// Act on a detection: freeze patrol and enter the capture sequence
    /// (entry side effects fire synchronously through `rig`).
    ///
    /// No-op unless the agent is patrolling — a stale detection against an
    /// already-capturing agent is dropped.
    pub fn begin_capture(&mut self, detection: Detection, rig: &mut CaptureRig<'_>) {
        if self.lifecycle != LifecycleState::Patrolling {
            return;
        }
        self.lifecycle = LifecycleState::Capturing;
        self.capture = Some(CaptureSequence::begin(
            self.capture_config.clone(),
            detection.target,
            detection.position,
            &mut self.pose,
            &mut self.visual,
            rig,
        ));
    }

    /// The side-effecting half of the update: advance an active capture.
    /// Returns the phase newly entered this tick, if any; entering
    /// `Resolved` also terminates the agent.
    pub fn capture_tick(&mut self, dt: f32, rig: &mut CaptureRig<'_>) -> Option<CapturePhase> {
        if self.lifecycle != LifecycleState::Capturing {
            return None;
        }
        let seq = self.capture.as_mut()?;
        let entered = seq.advance(dt, &mut self.pose, &mut self.visual, rig);
        if seq.is_resolved() {
            self.lifecycle = LifecycleState::Terminated;
        }
        entered
    }

    // ── Combined update (single-agent drivers) ────────────────────────────

    /// One full tick: patrol + scan, or capture, depending on lifecycle.
    pub fn tick<C, O>(
        &mut self,
        dt: f32,
        routes: &RouteSet,
        graph: &WaypointGraph,
        candidates: &C,
        occlusion: &O,
        carried_weight: f32,
        rig: &mut CaptureRig<'_>,
        rng: &mut AgentRng,
    ) -> Option<AgentEvent>
    where
        C: CandidateProvider + ?Sized,
        O: OcclusionTester + ?Sized,
    {
        match self.lifecycle {
            LifecycleState::Terminated => None,
            LifecycleState::Capturing => {
                self.capture_tick(dt, rig).map(AgentEvent::PhaseChanged)
            }
            LifecycleState::Patrolling => {
                let detection =
                    self.patrol_tick(dt, routes, graph, candidates, occlusion, carried_weight, rng)?;
                self.begin_capture(detection, rig);
                Some(AgentEvent::Detected(detection.target))
            }
        }
    }

    // ── External reset ────────────────────────────────────────────────────

    /// Cancel whatever is in progress and return to patrolling at the spawn
    /// pose.  Restores every external control the capture disabled; safe to
    /// call in any lifecycle state.
    pub fn reset(&mut self, rig: &mut CaptureRig<'_>) {
        if let Some(seq) = self.capture.take() {
            seq.abort(&mut self.visual, rig);
        }
        self.visual.reset();
        self.pose = self.initial_pose;
        self.motion.reset();
        self.lifecycle = LifecycleState::Patrolling;
    }
}
