//! `sn-core` — foundational types for the sentinel agent engine.
//!
//! This crate is a dependency of every other `sn-*` crate.  It intentionally
//! has no `sn-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module    | Contents                                              |
//! |-----------|-------------------------------------------------------|
//! | [`ids`]   | `AgentId`, `WaypointId`, `RouteId`, `TargetId`        |
//! | [`vec3`]  | `Vec3` — 3-D position math, move-towards              |
//! | [`angle`] | Yaw wrapping, constant-rate turning, triangle wave    |
//! | [`pose`]  | `Pose` — position + yaw, forward vector, eye point    |
//! | [`time`]  | `Tick`, `SimClock`, `SimConfig`                       |
//! | [`rng`]   | `AgentRng` (per-agent), `SimRng` (global)             |
//! | [`error`] | `SnError`, `SnResult`                                 |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod angle;
pub mod error;
pub mod ids;
pub mod pose;
pub mod rng;
pub mod time;
pub mod vec3;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use error::{SnError, SnResult};
pub use ids::{AgentId, RouteId, TargetId, WaypointId};
pub use pose::Pose;
pub use rng::{AgentRng, SimRng};
pub use time::{SimClock, SimConfig, Tick};
pub use vec3::Vec3;
