//! The motion curve engine: per-tick pose updates for the active mode.

use std::f32::consts::TAU;

use sn_core::{angle, AgentRng, Pose, RouteId, Vec3};
use sn_world::{RouteSet, WaypointGraph};

use crate::{ModeState, MovementMode};

/// Distance within which a chased target counts as reached, metres.
pub const ARRIVE_EPSILON: f32 = 0.05;

/// Angular epsilon ending the look mode's rotating sub-state (≈1°), radians.
pub const LOOK_EPSILON: f32 = 0.017_453_29;

/// Facing smoothing rate applied by every mode except the look mode (which
/// carries its own), degrees per second.
pub const DEFAULT_TURN_RATE_DEG: f32 = 180.0;

// ── MotionCurveEngine ─────────────────────────────────────────────────────────

/// Computes the next pose for one agent's movement mode.
///
/// The engine owns the (sanitized, immutable) mode, the mutable
/// [`ModeState`], and the anchor pose captured at spawn.  World data is
/// passed into [`advance`](Self::advance) by reference each tick; anything
/// missing or empty makes that tick a no-op.
pub struct MotionCurveEngine {
    mode: MovementMode,
    state: ModeState,
    /// Spawn pose: the origin for every relative movement mode.
    anchor: Pose,
    /// Facing smoothing rate, radians per second.
    turn_rate: f32,
}

impl MotionCurveEngine {
    /// Build an engine anchored at the agent's spawn pose.
    pub fn new(mode: MovementMode, anchor: Pose) -> Self {
        let mode = mode.sanitized();
        let state = ModeState::initial(&mode, &anchor);
        Self {
            mode,
            state,
            anchor,
            turn_rate: DEFAULT_TURN_RATE_DEG.to_radians(),
        }
    }

    /// Override the facing smoothing rate.
    pub fn with_turn_rate_deg(mut self, deg: f32) -> Self {
        self.turn_rate = deg.max(0.0).to_radians();
        self
    }

    pub fn mode(&self) -> &MovementMode {
        &self.mode
    }

    pub fn state(&self) -> &ModeState {
        &self.state
    }

    pub fn anchor(&self) -> &Pose {
        &self.anchor
    }

    /// Clear all progress back to the spawn state.
    pub fn reset(&mut self) {
        self.state = ModeState::initial(&self.mode, &self.anchor);
    }

    /// Advance the pose by one tick of `dt` simulated seconds.
    pub fn advance(
        &mut self,
        pose: &mut Pose,
        dt: f32,
        routes: &RouteSet,
        graph: &WaypointGraph,
        rng: &mut AgentRng,
    ) {
        if dt <= 0.0 {
            return;
        }
        match self.mode {
            MovementMode::Idle => {}
            MovementMode::SentinelLook { angle_step_deg, turn_rate_deg, wait_secs } => {
                self.advance_look(pose, dt, angle_step_deg, turn_rate_deg, wait_secs, rng);
            }
            MovementMode::PatrolLinear { direction, distance, speed } => {
                self.advance_linear(pose, dt, direction, distance, speed);
            }
            MovementMode::PatrolCircular { radius, speed, clockwise } => {
                self.advance_ellipse(pose, dt, radius, radius, speed, clockwise);
            }
            MovementMode::PatrolElliptical { radius_x, radius_z, speed, clockwise } => {
                self.advance_ellipse(pose, dt, radius_x, radius_z, speed, clockwise);
            }
            MovementMode::PatrolFigureEight { size, speed } => {
                self.advance_eight(pose, dt, size, speed);
            }
            MovementMode::PatrolLoop { route, speed, wait_secs } => {
                self.advance_route(pose, dt, routes, route, speed, wait_secs, false);
            }
            MovementMode::PatrolPingPong { route, speed, wait_secs } => {
                self.advance_route(pose, dt, routes, route, speed, wait_secs, true);
            }
            MovementMode::WaypointGraphRandom { speed, wait_secs, .. } => {
                self.advance_graph(pose, dt, graph, speed, wait_secs, rng);
            }
            MovementMode::RandomWander { radius, speed, wait_secs } => {
                self.advance_wander(pose, dt, radius, speed, wait_secs, rng);
            }
        }
    }

    // ── Rotation-only ─────────────────────────────────────────────────────

    fn advance_look(
        &mut self,
        pose: &mut Pose,
        dt: f32,
        angle_step_deg: f32,
        turn_rate_deg: f32,
        wait_secs: f32,
        rng: &mut AgentRng,
    ) {
        let anchor_yaw = self.anchor.yaw;
        let ModeState::Look { target_yaw, waiting, wait_left } = &mut self.state else {
            return;
        };

        if *waiting {
            *wait_left -= dt;
            if *wait_left <= 0.0 {
                *target_yaw =
                    angle::wrap_pi(anchor_yaw + rng.gen_signed(angle_step_deg.to_radians()));
                *waiting = false;
            }
        } else {
            pose.turn_towards(*target_yaw, turn_rate_deg.to_radians() * dt);
            if angle::shortest_arc(pose.yaw, *target_yaw).abs() <= LOOK_EPSILON {
                *waiting = true;
                *wait_left = wait_secs;
            }
        }
    }

    // ── Closed-form curves ────────────────────────────────────────────────

    fn advance_linear(
        &mut self,
        pose: &mut Pose,
        dt: f32,
        direction: Vec3,
        distance: f32,
        speed: f32,
    ) {
        let turn_rate = self.turn_rate;
        let anchor_pos = self.anchor.position;
        let ModeState::Curve { theta } = &mut self.state else {
            return;
        };

        *theta += speed * dt;
        if distance <= 0.0 || direction == Vec3::ZERO {
            return;
        }

        // Triangle wave sweeps the offset across [-distance, +distance].
        let offset = angle::triangle_wave(*theta, 2.0 * distance) - distance;
        pose.position = anchor_pos + direction * offset;

        // Face the direction of travel: the sign of the wave's derivative.
        let travel = if angle::triangle_wave_rising(*theta, 2.0 * distance) {
            direction
        } else {
            -direction
        };
        pose.turn_towards(travel.x.atan2(travel.z), turn_rate * dt);
    }

    fn advance_ellipse(
        &mut self,
        pose: &mut Pose,
        dt: f32,
        radius_x: f32,
        radius_z: f32,
        speed: f32,
        clockwise: bool,
    ) {
        let turn_rate = self.turn_rate;
        let anchor_pos = self.anchor.position;
        let ModeState::Curve { theta } = &mut self.state else {
            return;
        };

        // Angular rate is speed over the larger radius, signed by direction.
        let max_r = radius_x.max(radius_z);
        if max_r <= 0.0 || speed <= 0.0 {
            return;
        }
        let rate = speed / max_r * if clockwise { -1.0 } else { 1.0 };
        *theta += rate * dt;

        let offset = |t: f32| Vec3::new(radius_x * t.cos(), 0.0, radius_z * t.sin());
        pose.position = anchor_pos + offset(*theta);

        // Face tangent to the curve: toward the next interpolated point.
        let look = anchor_pos + offset(*theta + rate * dt);
        pose.turn_towards(pose.yaw_to(look), turn_rate * dt);
    }

    fn advance_eight(&mut self, pose: &mut Pose, dt: f32, size: f32, speed: f32) {
        let turn_rate = self.turn_rate;
        let anchor_pos = self.anchor.position;
        let ModeState::Curve { theta } = &mut self.state else {
            return;
        };

        if size <= 0.0 || speed <= 0.0 {
            return;
        }
        let rate = speed / size;
        *theta += rate * dt;

        // Lissajous figure-eight: the z component runs at twice the phase.
        let offset = |t: f32| Vec3::new(size * t.cos(), 0.0, 0.5 * size * (2.0 * t).sin());
        pose.position = anchor_pos + offset(*theta);

        let look = anchor_pos + offset(*theta + rate * dt);
        pose.turn_towards(pose.yaw_to(look), turn_rate * dt);
    }

    // ── Target-chasing modes ──────────────────────────────────────────────

    fn advance_route(
        &mut self,
        pose: &mut Pose,
        dt: f32,
        routes: &RouteSet,
        route_id: RouteId,
        speed: f32,
        wait_secs: f32,
        ping_pong: bool,
    ) {
        let turn_rate = self.turn_rate;
        let Some(route) = routes.get(route_id) else {
            return;
        };
        let len = route.len();
        if len == 0 {
            return;
        }
        let ModeState::Route { index, reverse, wait_left } = &mut self.state else {
            return;
        };

        if *index >= len {
            *index = len - 1;
        }
        let Some(target) = route.point(*index) else {
            return;
        };

        if !arrived(pose, target) {
            *wait_left = wait_secs;
            chase(pose, target, speed, turn_rate, dt);
            return;
        }
        *wait_left -= dt;
        if *wait_left > 0.0 {
            return;
        }
        *wait_left = wait_secs;

        if !ping_pong {
            *index = (*index + 1) % len;
        } else if !*reverse {
            *index += 1;
            if *index >= len {
                // Off the top end: clamp to the second-to-last point.
                *index = len.saturating_sub(2);
                *reverse = true;
            }
        } else if *index == 0 {
            // Off the bottom end: clamp to the second point.
            *index = 1.min(len - 1);
            *reverse = false;
        } else {
            *index -= 1;
        }
    }

    fn advance_graph(
        &mut self,
        pose: &mut Pose,
        dt: f32,
        graph: &WaypointGraph,
        speed: f32,
        wait_secs: f32,
        rng: &mut AgentRng,
    ) {
        let turn_rate = self.turn_rate;
        let ModeState::Graph { current, wait_left } = &mut self.state else {
            return;
        };
        let Some(target) = graph.position(*current) else {
            return;
        };

        if !arrived(pose, target) {
            *wait_left = wait_secs;
            chase(pose, target, speed, turn_rate, dt);
            return;
        }
        *wait_left -= dt;
        if *wait_left > 0.0 {
            return;
        }
        *wait_left = wait_secs;

        // Uniform over the node's neighbors; a dead end keeps the agent here.
        if let Some(&next) = rng.choose(graph.neighbors(*current)) {
            *current = next;
        }
    }

    fn advance_wander(
        &mut self,
        pose: &mut Pose,
        dt: f32,
        radius: f32,
        speed: f32,
        wait_secs: f32,
        rng: &mut AgentRng,
    ) {
        let turn_rate = self.turn_rate;
        let anchor_pos = self.anchor.position;
        let ModeState::Wander { target, wait_left } = &mut self.state else {
            return;
        };

        if !arrived(pose, *target) {
            *wait_left = wait_secs;
            chase(pose, *target, speed, turn_rate, dt);
            return;
        }
        *wait_left -= dt;
        if *wait_left > 0.0 {
            return;
        }
        *wait_left = wait_secs;

        // Uniform over the wander disk: sqrt-of-uniform radius corrects for
        // area growing with r.
        let ang = rng.gen_range(0.0..TAU);
        let r = radius * rng.random::<f32>().sqrt();
        *target = anchor_pos + Vec3::new(ang.cos() * r, 0.0, ang.sin() * r);
    }
}

// ── Shared movement helpers ───────────────────────────────────────────────────

#[inline]
fn arrived(pose: &Pose, target: Vec3) -> bool {
    pose.position.distance(target) <= ARRIVE_EPSILON
}

/// Constant-speed step toward `target` with smoothed facing.  Never
/// overshoots.
fn chase(pose: &mut Pose, target: Vec3, speed: f32, turn_rate: f32, dt: f32) {
    pose.turn_towards(pose.yaw_to(target), turn_rate * dt);
    pose.position = pose.position.move_towards(target, speed * dt);
}
