//! Engine error type.
//!
//! Sub-crates may define their own error enums and convert them into
//! `SnError` via `From` impls, or keep them separate.  Per-tick behavior
//! never produces errors: missing world data degrades to a silent no-op
//! (a sentinel that does nothing is always a safe default), so the variants
//! here cover construction and loading only.

use thiserror::Error;

use crate::{AgentId, RouteId, WaypointId};

/// The top-level error type for `sn-core` and a common base for sub-crates.
#[derive(Debug, Error)]
pub enum SnError {
    #[error("agent {0} not found")]
    AgentNotFound(AgentId),

    #[error("waypoint {0} not found")]
    WaypointNotFound(WaypointId),

    #[error("route {0} not found")]
    RouteNotFound(RouteId),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Shorthand result type for all `sn-*` crates.
pub type SnResult<T> = Result<T, SnError>;
