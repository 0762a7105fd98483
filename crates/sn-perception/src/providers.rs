//! Collaborator traits at the perception boundary.
//!
//! The sensor itself owns no world data.  Everything it consults — carried
//! weight, nearby candidates, obstruction geometry — arrives through the
//! traits below, so the core stays independently testable and the same
//! sensor runs against an R-tree index in production or a hand-rolled list
//! in a unit test.
//!
//! # Thread safety
//!
//! All three traits require `Send + Sync`: the simulation's patrol/scan
//! phase may fan out across worker threads, and every agent scans the same
//! shared environment read-only.

use sn_core::{TargetId, Vec3};

// ── Candidates ────────────────────────────────────────────────────────────────

/// Classification of a perception candidate.
///
/// Only [`Intruder`](TargetTag::Intruder) candidates can trigger a capture;
/// everything else is scenery the coarse spatial query may return anyway.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TargetTag {
    /// A capturable target.
    Intruder,
    /// Present in the world but never detected (props, friendly actors).
    Neutral,
}

/// One potential target returned by a [`CandidateProvider`] query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Candidate {
    pub id: TargetId,
    /// Ground position (the provider's coarse filter is a ground-plane test;
    /// the sensor derives the chest point itself).
    pub position: Vec3,
    pub tag: TargetTag,
}

/// Spatial query over potential targets.
///
/// `candidates_within` must clear `out` and then append every candidate whose
/// ground position lies within `radius` of `center`.  Iteration order is the
/// provider's choice but must be consistent between identical queries — the
/// sensor acts on the first surviving candidate.
pub trait CandidateProvider: Send + Sync {
    fn candidates_within(&self, center: Vec3, radius: f32, out: &mut Vec<Candidate>);
}

/// A [`CandidateProvider`] over an empty world.  Scans never detect.
pub struct NoCandidates;

impl CandidateProvider for NoCandidates {
    fn candidates_within(&self, _center: Vec3, _radius: f32, out: &mut Vec<Candidate>) {
        out.clear();
    }
}

// ── Occlusion ─────────────────────────────────────────────────────────────────

/// Line-of-sight test against obstruction geometry.
pub trait OcclusionTester: Send + Sync {
    /// `true` if the straight segment from `from` to `to` is blocked.
    fn segment_blocked(&self, from: Vec3, to: Vec3) -> bool;
}

/// An [`OcclusionTester`] with no geometry: nothing is ever blocked.
pub struct NoObstructions;

impl OcclusionTester for NoObstructions {
    fn segment_blocked(&self, _from: Vec3, _to: Vec3) -> bool {
        false
    }
}

// ── Weight ────────────────────────────────────────────────────────────────────

/// Read-only query for the target's total carried weight.
///
/// The provider is optional at the simulation boundary; absence is treated
/// as zero, and the effective radius is monotonic in the returned value.
pub trait WeightProvider: Send + Sync {
    fn total_carried_weight(&self) -> f32;
}

/// A [`WeightProvider`] that always reports zero (no radius bonus).
pub struct ZeroWeight;

impl WeightProvider for ZeroWeight {
    fn total_carried_weight(&self) -> f32 {
        0.0
    }
}
