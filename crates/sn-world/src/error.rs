//! World-subsystem error type.

use thiserror::Error;

/// Errors produced by `sn-world` loaders and builders.
#[derive(Debug, Error)]
pub enum WorldError {
    #[error("waypoint {0:?} not found in graph")]
    UnknownWaypoint(String),

    #[error("duplicate waypoint name {0:?}")]
    DuplicateWaypoint(String),

    #[error("parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type WorldResult<T> = Result<T, WorldError>;
