//! `sn-perception` — vision-cone target detection.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                      |
//! |---------------|---------------------------------------------------------------|
//! | [`config`]    | `PerceptionConfig` — radius, cone angle, eye height, weight sensitivity |
//! | [`providers`] | `WeightProvider`, `CandidateProvider`, `OcclusionTester` traits + no-op impls |
//! | [`sensor`]    | `PerceptionSensor::scan` — the per-tick detection query       |
//!
//! # Detection model
//!
//! A target is seen when, in order:
//!
//! 1. its ground position lies within the *effective radius*
//!    (`base + carried_weight · sensitivity` — heavier intruders are easier
//!    to notice),
//! 2. it carries a detectable tag,
//! 3. the eye-to-chest segment is shorter than the effective radius,
//! 4. that segment lies strictly inside the half-angle cone around the
//!    agent's forward vector, and
//! 5. no obstruction blocks the segment.
//!
//! Both the radius and the angle comparisons are strict (`<`): a candidate
//! exactly on either boundary is not detected.  At most one detection is
//! acted on per tick — the first surviving candidate in provider order.

pub mod config;
pub mod providers;
pub mod sensor;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::PerceptionConfig;
pub use providers::{
    Candidate, CandidateProvider, NoCandidates, NoObstructions, OcclusionTester, TargetTag,
    WeightProvider, ZeroWeight,
};
pub use sensor::{Detection, PerceptionSensor, CHEST_HEIGHT_FRACTION};
