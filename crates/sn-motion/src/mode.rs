//! Movement mode configuration.

use sn_core::{RouteId, Vec3, WaypointId};

/// One of the nine patrol movement modes, with its parameters.
///
/// Fixed at configuration time: changing an agent's mode means resetting its
/// [`ModeState`](crate::ModeState).  All distances are metres, speeds are
/// metres per simulated second, angles are degrees, durations are simulated
/// seconds.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MovementMode {
    /// Stand still, facing wherever spawned.
    Idle,

    /// Rotate in place: turn to a random yaw within `angle_step_deg` of the
    /// spawn yaw, hold for `wait_secs`, repeat.
    SentinelLook {
        angle_step_deg: f32,
        /// Fixed angular rate of the rotation sub-state, degrees per second.
        turn_rate_deg: f32,
        wait_secs: f32,
    },

    /// Sweep back and forth along `direction` out to ±`distance` from the
    /// spawn point, following a triangle wave.
    PatrolLinear {
        direction: Vec3,
        distance: f32,
        speed: f32,
    },

    /// Trace a circle of `radius` around the spawn point.
    /// The degenerate ellipse with equal radii.
    PatrolCircular {
        radius: f32,
        speed: f32,
        /// Direction of travel viewed from above (+Y looking down).
        clockwise: bool,
    },

    /// Trace an ellipse with the given X/Z radii around the spawn point.
    /// Angular rate is `speed / max(radius_x, radius_z)`.
    PatrolElliptical {
        radius_x: f32,
        radius_z: f32,
        speed: f32,
        clockwise: bool,
    },

    /// Trace a Lissajous figure-eight: `x = size·cos θ`, `z = size/2·sin 2θ`,
    /// with θ advancing at `speed / size`.
    PatrolFigureEight { size: f32, speed: f32 },

    /// Walk an external route start-to-end and wrap around (index modulo
    /// route length).
    PatrolLoop {
        route: RouteId,
        speed: f32,
        wait_secs: f32,
    },

    /// Walk an external route back and forth.  The end-of-route bounce
    /// clamps the index to `len-2` (top) / `1` (bottom) rather than
    /// reflecting, so the sequence for `[A,B,C]` is `A,B,C,B,A,B,C,…`.
    PatrolPingPong {
        route: RouteId,
        speed: f32,
        wait_secs: f32,
    },

    /// Random walk over an external waypoint graph: on arrival (plus wait),
    /// move to a uniformly random neighbor of the current node.  A node
    /// with no neighbors is a dead end the agent stays at.
    WaypointGraphRandom {
        start: WaypointId,
        speed: f32,
        wait_secs: f32,
    },

    /// On arrival (plus wait), pick a new target uniformly inside a disk of
    /// `radius` centred on the spawn point.
    RandomWander {
        radius: f32,
        speed: f32,
        wait_secs: f32,
    },
}

impl MovementMode {
    /// Clamp every parameter into its valid range and normalize direction
    /// vectors.  A direction that normalizes to zero stays zero, which makes
    /// the linear patrol a stand-still rather than an error.
    pub fn sanitized(self) -> Self {
        use MovementMode::*;
        match self {
            Idle => Idle,
            SentinelLook { angle_step_deg, turn_rate_deg, wait_secs } => SentinelLook {
                angle_step_deg: angle_step_deg.clamp(0.0, 180.0),
                turn_rate_deg: turn_rate_deg.max(0.0),
                wait_secs: wait_secs.max(0.0),
            },
            PatrolLinear { direction, distance, speed } => PatrolLinear {
                direction: direction.try_normalized().unwrap_or(Vec3::ZERO),
                distance: distance.max(0.0),
                speed: speed.max(0.0),
            },
            PatrolCircular { radius, speed, clockwise } => PatrolCircular {
                radius: radius.max(0.0),
                speed: speed.max(0.0),
                clockwise,
            },
            PatrolElliptical { radius_x, radius_z, speed, clockwise } => PatrolElliptical {
                radius_x: radius_x.max(0.0),
                radius_z: radius_z.max(0.0),
                speed: speed.max(0.0),
                clockwise,
            },
            PatrolFigureEight { size, speed } => PatrolFigureEight {
                size: size.max(0.0),
                speed: speed.max(0.0),
            },
            PatrolLoop { route, speed, wait_secs } => PatrolLoop {
                route,
                speed: speed.max(0.0),
                wait_secs: wait_secs.max(0.0),
            },
            PatrolPingPong { route, speed, wait_secs } => PatrolPingPong {
                route,
                speed: speed.max(0.0),
                wait_secs: wait_secs.max(0.0),
            },
            WaypointGraphRandom { start, speed, wait_secs } => WaypointGraphRandom {
                start,
                speed: speed.max(0.0),
                wait_secs: wait_secs.max(0.0),
            },
            RandomWander { radius, speed, wait_secs } => RandomWander {
                radius: radius.max(0.0),
                speed: speed.max(0.0),
                wait_secs: wait_secs.max(0.0),
            },
        }
    }
}
