//! `sn-agent` — the sentinel agent aggregate.
//!
//! A [`SentinelAgent`] owns one motion engine, one perception sensor, and
//! (while capturing) one capture sequence, and runs the per-tick update that
//! strings them together:
//!
//! 1. while **patrolling** — advance the movement mode, then scan;
//! 2. on a positive scan — enter the capture sequence, which overrides
//!    movement from then on;
//! 3. while **capturing** — advance the sequence until it resolves;
//! 4. **terminated** — do nothing until an external reset.
//!
//! # Crate layout
//!
//! | Module     | Contents                                       |
//! |------------|------------------------------------------------|
//! | [`config`] | `SentinelConfig` — everything fixed at spawn   |
//! | [`agent`]  | `SentinelAgent`, `LifecycleState`, `AgentEvent`|
//!
//! The update is split into `patrol_tick` (no external side effects — safe
//! to fan out across threads) and `capture_tick`/`begin_capture` (the
//! side-effecting half, applied sequentially by the driver).  [`tick`]
//! combines both for single-agent use.
//!
//! [`tick`]: SentinelAgent::tick

pub mod agent;
pub mod config;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use agent::{AgentEvent, LifecycleState, SentinelAgent};
pub use config::SentinelConfig;
