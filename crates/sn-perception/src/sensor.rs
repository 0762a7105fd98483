//! The per-tick detection query.

use sn_core::{Pose, TargetId, Vec3};

use crate::{Candidate, CandidateProvider, OcclusionTester, PerceptionConfig, TargetTag};

/// Fraction of the eye height at which a target is perceived —
/// approximately chest height rather than feet or eyes.
pub const CHEST_HEIGHT_FRACTION: f32 = 0.8;

// ── Detection ─────────────────────────────────────────────────────────────────

/// A successful scan result.  Transient: produced and consumed within one
/// tick, never stored across ticks.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Detection {
    pub target: TargetId,
    /// The target's ground position at the moment of detection.
    pub position: Vec3,
    /// Eye-to-chest distance at the moment of detection, metres.
    pub distance: f32,
}

// ── PerceptionSensor ──────────────────────────────────────────────────────────

/// The vision-cone sensor for one agent.
///
/// Owns its (immutable) configuration and a scratch buffer reused across
/// scans so the per-tick path does not allocate once the buffer has grown to
/// the scene's candidate count.
pub struct PerceptionSensor {
    config: PerceptionConfig,
    scratch: Vec<Candidate>,
}

impl PerceptionSensor {
    /// Build a sensor; the config is sanitized (clamped) on the way in.
    pub fn new(config: PerceptionConfig) -> Self {
        Self { config: config.sanitized(), scratch: Vec::new() }
    }

    pub fn config(&self) -> &PerceptionConfig {
        &self.config
    }

    /// Detection radius after the carried-weight bonus.
    ///
    /// Monotonic and never below the configured base radius: negative weight
    /// readings are treated as zero rather than shrinking the cone.
    #[inline]
    pub fn effective_radius(&self, carried_weight: f32) -> f32 {
        self.config.base_radius + carried_weight.max(0.0) * self.config.weight_sensitivity
    }

    /// Run one detection scan from `pose`.
    ///
    /// Executes the full test sequence — coarse ground-radius query, tag
    /// filter, eye-to-chest distance, cone angle, occlusion — and returns
    /// the first candidate that survives every test, or `None`.  Both the
    /// distance and angle boundaries are strict: a candidate exactly at the
    /// effective radius or exactly on the cone edge is rejected.
    pub fn scan<C, O>(
        &mut self,
        pose: &Pose,
        carried_weight: f32,
        candidates: &C,
        occlusion: &O,
    ) -> Option<Detection>
    where
        C: CandidateProvider + ?Sized,
        O: OcclusionTester + ?Sized,
    {
        let radius = self.effective_radius(carried_weight);
        if radius <= 0.0 {
            return None;
        }

        // Coarse filter: ground positions within the effective radius.
        candidates.candidates_within(pose.position, radius, &mut self.scratch);

        let eye = pose.eye_point(self.config.eye_height);
        let forward = pose.forward();
        let half_angle = self.config.half_angle_rad();
        let chest_rise = Vec3::UP * (CHEST_HEIGHT_FRACTION * self.config.eye_height);

        for c in &self.scratch {
            if c.tag != TargetTag::Intruder {
                continue;
            }

            let perceived = c.position + chest_rise;
            let to_target = perceived - eye;
            let distance = to_target.length();
            if distance >= radius {
                continue;
            }
            if forward.angle_between(to_target) >= half_angle {
                continue;
            }
            if occlusion.segment_blocked(eye, perceived) {
                continue;
            }

            return Some(Detection { target: c.id, position: c.position, distance });
        }
        None
    }
}
