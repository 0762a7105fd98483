//! Per-agent configuration, fixed at spawn.

use sn_capture::CaptureConfig;
use sn_motion::MovementMode;
use sn_perception::PerceptionConfig;

/// Everything a sentinel is configured with.  Immutable once the agent is
/// spawned; reconfiguring means spawning a fresh agent.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SentinelConfig {
    pub movement: MovementMode,
    pub perception: PerceptionConfig,
    pub capture: CaptureConfig,

    /// Facing smoothing rate for patrol movement, degrees per second.
    pub turn_rate_deg: f32,

    /// At-rest visual scale (the rush grows from here).
    pub base_scale: f32,
}

impl SentinelConfig {
    /// Bundle the three subsystem configs with conventional defaults for the
    /// rest.
    pub fn new(
        movement: MovementMode,
        perception: PerceptionConfig,
        capture: CaptureConfig,
    ) -> Self {
        Self {
            movement,
            perception,
            capture,
            turn_rate_deg: sn_motion::DEFAULT_TURN_RATE_DEG,
            base_scale: 1.0,
        }
    }
}
