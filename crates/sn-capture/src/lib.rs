//! `sn-capture` — the pursuit-and-capture sequence.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`config`]   | `CaptureConfig` — phase durations, rush speed, scale growth |
//! | [`controls`] | `CapabilityTable` — name → toggle handles, disable/restore |
//! | [`rig`]      | Collaborator traits (viewpoint, target, animation, game-over) + `CaptureRig` |
//! | [`visual`]   | `VisualState` — patrol/alert form and scale                |
//! | [`phase`]    | `CapturePhase`, `CaptureSequence` — the state machine      |
//!
//! # Design notes
//!
//! The sequence is explicit resumable state — `(phase, elapsed_in_phase)`
//! advanced by `advance(dt)` — because the engine has no threads to block.
//! Suspension points are exactly the phase boundaries; resumption is the
//! next tick re-evaluating elapsed time against the phase's duration.
//!
//! External effects flow through [`CaptureRig`]: a bundle of borrowed
//! collaborator handles assembled by the caller each tick.  A missing
//! viewpoint or target handle skips that cosmetic effect but never stalls a
//! transition — detection and the game-over notification are hard promises,
//! the camera work is not.

pub mod config;
pub mod controls;
pub mod phase;
pub mod rig;
pub mod visual;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use config::CaptureConfig;
pub use controls::{CapabilityTable, ControlToggle};
pub use phase::{CapturePhase, CaptureSequence};
pub use rig::{AnimationSink, CaptureRig, GameOverNotifier, TargetHandle, ViewpointController};
pub use visual::{VisualForm, VisualState};
