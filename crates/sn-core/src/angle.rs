//! Scalar angle and waveform helpers used by the motion engine.
//!
//! Yaw is measured in radians around +Y.  Yaw `0` faces +Z and positive yaw
//! turns toward +X, so `forward = (sin yaw, 0, cos yaw)`.  All public
//! functions accept unwrapped inputs and return values wrapped to `(-π, π]`.

use std::f32::consts::{PI, TAU};

/// Wrap an angle into `(-π, π]`.
pub fn wrap_pi(a: f32) -> f32 {
    let mut a = a % TAU;
    if a <= -PI {
        a += TAU;
    } else if a > PI {
        a -= TAU;
    }
    a
}

/// Signed shortest difference `target - current`, wrapped to `(-π, π]`.
#[inline]
pub fn shortest_arc(current: f32, target: f32) -> f32 {
    wrap_pi(target - current)
}

/// Rotate `current` toward `target` along the shortest arc by at most
/// `max_step` radians, never overshooting.  This is the constant-rate facing
/// smoothing applied by every movement mode.
pub fn turn_towards(current: f32, target: f32, max_step: f32) -> f32 {
    let diff = shortest_arc(current, target);
    if diff.abs() <= max_step {
        wrap_pi(target)
    } else {
        wrap_pi(current + max_step.copysign(diff))
    }
}

/// Triangle (ping-pong) wave: bounces `t` between `0` and `length` with
/// period `2·length`.  Negative `t` mirrors correctly.
///
/// The linear patrol offset is `triangle_wave(time·speed, 2·distance) −
/// distance`, which sweeps `[-distance, +distance]`.
pub fn triangle_wave(t: f32, length: f32) -> f32 {
    if length <= 0.0 {
        return 0.0;
    }
    let cycle = 2.0 * length;
    let m = t.rem_euclid(cycle);
    if m < length { m } else { cycle - m }
}

/// `true` while [`triangle_wave`] is on its rising edge at `t`.
///
/// The linear patrol faces its direction of travel, which is the sign of the
/// wave's derivative.
pub fn triangle_wave_rising(t: f32, length: f32) -> bool {
    if length <= 0.0 {
        return true;
    }
    t.rem_euclid(2.0 * length) < length
}
