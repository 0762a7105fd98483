//! `sn-sim` — the simulation driver.
//!
//! # Crate layout
//!
//! | Module       | Contents                                             |
//! |--------------|------------------------------------------------------|
//! | [`sim`]      | `Sim` — the two-phase tick loop                      |
//! | [`builder`]  | `SimBuilder` — validated construction                |
//! | [`observer`] | `SimObserver` hooks, `NoopObserver`, `NoopGameOver`  |
//! | [`rngs`]     | `AgentRngs` — per-agent RNG storage                  |
//! | [`error`]    | `SimError`, `SimResult`                              |
//!
//! # The two-phase tick
//!
//! 1. **Patrol/scan phase** — every agent advances its movement mode and
//!    runs its perception scan.  This half touches nothing outside the
//!    agent, so with the `parallel` feature it fans out across Rayon
//!    workers (each agent zipped with its own RNG).
//! 2. **Apply phase** (sequential, ascending `AgentId` for determinism) —
//!    detections from phase 1 start capture sequences, and active sequences
//!    advance, with all external side effects (viewpoint, controls,
//!    animation, game-over) flowing through the shared collaborator
//!    handles.
//!
//! Agents never mutate shared state except through the write-once game-over
//! notifier and the read-only weight query, so update order within phase 1
//! is immaterial.

pub mod builder;
pub mod error;
pub mod observer;
pub mod rngs;
pub mod sim;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::SimBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopGameOver, NoopObserver, SimObserver};
pub use rngs::AgentRngs;
pub use sim::Sim;
