//! `sn-motion` — deterministic patrol movement.
//!
//! # Crate layout
//!
//! | Module     | Contents                                                  |
//! |------------|-----------------------------------------------------------|
//! | [`mode`]   | `MovementMode` — the nine patrol modes + their parameters |
//! | [`state`]  | `ModeState` — per-mode mutable progress                   |
//! | [`engine`] | `MotionCurveEngine::advance` — the per-tick pose update   |
//!
//! # Design notes
//!
//! The engine is a pure function of `(mode, state, anchor, dt, world, rng)`:
//! it mutates only the pose it is handed and its own `ModeState`.  World data
//! (routes, waypoint graph) is passed in by reference every call and is
//! never owned — an absent or empty lookup makes that tick a silent no-op,
//! which is always safe in a simulation loop.
//!
//! Three kinds of motion coexist:
//!
//! - **closed-form curves** (linear sweep, ellipse, figure-eight) sample the
//!   curve at an advancing phase and place the pose on it directly;
//! - **target-chasing modes** (routes, graph walk, wander) step toward the
//!   current target at constant speed, never overshooting, with a wait timer
//!   that only counts down while arrived;
//! - **rotation-only** (sentinel look) turns in place.
//!
//! All modes smooth the facing with a constant-rate turn toward the current
//! direction of travel; only the look mode snaps to its own angular rate.

pub mod engine;
pub mod mode;
pub mod state;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use engine::{MotionCurveEngine, ARRIVE_EPSILON, DEFAULT_TURN_RATE_DEG, LOOK_EPSILON};
pub use mode::MovementMode;
pub use state::ModeState;
