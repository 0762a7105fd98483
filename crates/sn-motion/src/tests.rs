//! Unit tests for the motion curve engine.

use sn_core::{AgentId, AgentRng, Pose, RouteId, Vec3, WaypointId};
use sn_world::{PatrolRoute, RouteSet, WaypointGraph, WaypointGraphBuilder};

use crate::{ModeState, MotionCurveEngine, MovementMode, ARRIVE_EPSILON};

// ── Helpers ───────────────────────────────────────────────────────────────────

const DT: f32 = 0.1;

fn rng(seed: u64) -> AgentRng {
    AgentRng::new(seed, AgentId(0))
}

fn empty_world() -> (RouteSet, WaypointGraph) {
    (RouteSet::new(), WaypointGraph::empty())
}

/// Route 0: three points 10 m apart in an L shape.
fn l_route() -> (RouteSet, [Vec3; 3]) {
    let a = Vec3::ZERO;
    let b = Vec3::new(10.0, 0.0, 0.0);
    let c = Vec3::new(10.0, 0.0, 10.0);
    let mut routes = RouteSet::new();
    routes.insert(PatrolRoute::new("l", vec![a, b, c]));
    (routes, [a, b, c])
}

/// Advance `ticks` times, recording the route index after every tick.
/// Consecutive duplicates are collapsed so the result reads as a visit order.
fn index_trace(
    engine: &mut MotionCurveEngine,
    pose: &mut Pose,
    routes: &RouteSet,
    ticks: usize,
) -> Vec<usize> {
    let graph = WaypointGraph::empty();
    let mut r = rng(7);
    let mut trace = Vec::new();
    if let ModeState::Route { index, .. } = engine.state() {
        trace.push(*index);
    }
    for _ in 0..ticks {
        engine.advance(pose, DT, routes, &graph, &mut r);
        if let ModeState::Route { index, .. } = engine.state() {
            if trace.last() != Some(index) {
                trace.push(*index);
            }
        }
    }
    trace
}

// ── Idle and degenerate configurations ────────────────────────────────────────

#[cfg(test)]
mod idle {
    use super::*;

    #[test]
    fn idle_never_moves() {
        let spawn = Pose::new(Vec3::new(1.0, 0.0, 2.0), 0.5);
        let mut engine = MotionCurveEngine::new(MovementMode::Idle, spawn);
        let mut pose = spawn;
        let (routes, graph) = empty_world();
        let mut r = rng(1);
        for _ in 0..50 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
        }
        assert_eq!(pose, spawn);
    }

    #[test]
    fn zero_dt_is_a_no_op() {
        let spawn = Pose::new(Vec3::ZERO, 0.0);
        let mode = MovementMode::PatrolCircular { radius: 5.0, speed: 3.0, clockwise: false };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let (routes, graph) = empty_world();
        engine.advance(&mut pose, 0.0, &routes, &graph, &mut rng(1));
        assert_eq!(pose, spawn);
    }

    #[test]
    fn sanitize_clamps_and_normalizes() {
        let mode = MovementMode::PatrolLinear {
            direction: Vec3::new(0.0, 0.0, 10.0),
            distance: -5.0,
            speed: -1.0,
        }
        .sanitized();
        match mode {
            MovementMode::PatrolLinear { direction, distance, speed } => {
                assert!((direction.length() - 1.0).abs() < 1e-6);
                assert_eq!(distance, 0.0);
                assert_eq!(speed, 0.0);
            }
            _ => unreachable!(),
        }
    }

    #[test]
    fn zero_direction_stands_still() {
        let spawn = Pose::new(Vec3::ZERO, 0.0);
        let mode = MovementMode::PatrolLinear {
            direction: Vec3::ZERO,
            distance: 4.0,
            speed: 2.0,
        };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let (routes, graph) = empty_world();
        let mut r = rng(1);
        for _ in 0..50 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
        }
        assert_eq!(pose.position, spawn.position);
    }
}

// ── Sentinel look ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod look {
    use super::*;

    #[test]
    fn rotates_in_place_within_step_bounds() {
        let spawn = Pose::new(Vec3::new(3.0, 0.0, -1.0), 0.3);
        let mode = MovementMode::SentinelLook {
            angle_step_deg: 45.0,
            turn_rate_deg: 90.0,
            wait_secs: 0.2,
        };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let (routes, graph) = empty_world();
        let mut r = rng(9);

        let bound = 45f32.to_radians() + 1e-3;
        let mut yaw_moved = false;
        for _ in 0..300 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
            assert_eq!(pose.position, spawn.position, "look mode must not translate");
            let off = sn_core::angle::shortest_arc(spawn.yaw, pose.yaw).abs();
            assert!(off <= bound, "yaw wandered {off} rad past the step bound");
            if off > 1e-5 {
                yaw_moved = true;
            }
        }
        assert!(yaw_moved, "expected at least one rotation cycle in 30 s");
    }
}

// ── Closed-form curves ────────────────────────────────────────────────────────

#[cfg(test)]
mod curves {
    use super::*;
    use std::f32::consts::TAU;

    #[test]
    fn linear_sweeps_between_extents() {
        let spawn = Pose::new(Vec3::ZERO, 0.0);
        let mode = MovementMode::PatrolLinear {
            direction: Vec3::new(1.0, 0.0, 0.0),
            distance: 4.0,
            speed: 2.0,
        };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let (routes, graph) = empty_world();
        let mut r = rng(1);

        let (mut min_x, mut max_x) = (f32::MAX, f32::MIN);
        for _ in 0..200 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
            assert!(pose.position.x.abs() <= 4.0 + 1e-4);
            assert_eq!(pose.position.z, 0.0);
            min_x = min_x.min(pose.position.x);
            max_x = max_x.max(pose.position.x);
        }
        // 20 s at 2 m/s covers several full sweeps: both extents reached.
        assert!(max_x > 3.9 && min_x < -3.9, "sweep covered [{min_x}, {max_x}]");
    }

    #[test]
    fn linear_faces_direction_of_travel() {
        let spawn = Pose::new(Vec3::ZERO, 0.0);
        let mode = MovementMode::PatrolLinear {
            direction: Vec3::new(1.0, 0.0, 0.0),
            distance: 100.0, // long rising edge
            speed: 1.0,
        };
        let mut engine = MotionCurveEngine::new(mode, spawn).with_turn_rate_deg(720.0);
        let mut pose = spawn;
        let (routes, graph) = empty_world();
        let mut r = rng(1);
        for _ in 0..10 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
        }
        assert!((pose.yaw - std::f32::consts::FRAC_PI_2).abs() < 1e-3);
    }

    #[test]
    fn circle_closes_after_full_revolution() {
        // radius 5, clockwise, speed 3: rate = 0.6 rad/s.  100 ticks of
        // (2π / 0.6 / 100) s advance the phase by exactly 2π.
        let spawn = Pose::new(Vec3::new(2.0, 0.0, 2.0), 0.0);
        let mode = MovementMode::PatrolCircular { radius: 5.0, speed: 3.0, clockwise: true };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let (routes, graph) = empty_world();
        let mut r = rng(1);

        let dt = TAU / 0.6 / 100.0;
        for _ in 0..100 {
            engine.advance(&mut pose, dt, &routes, &graph, &mut r);
        }
        // Back at the θ = 0 point of the circle: anchor + (radius, 0, 0).
        let expected = spawn.position + Vec3::new(5.0, 0.0, 0.0);
        assert!(
            pose.position.distance(expected) < 1e-2,
            "expected {expected}, got {}",
            pose.position
        );
    }

    #[test]
    fn circle_stays_on_radius() {
        let spawn = Pose::new(Vec3::ZERO, 0.0);
        let mode = MovementMode::PatrolCircular { radius: 5.0, speed: 3.0, clockwise: false };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let (routes, graph) = empty_world();
        let mut r = rng(1);
        for _ in 0..100 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
            let d = pose.position.distance(spawn.position);
            assert!((d - 5.0).abs() < 1e-3, "left the circle: {d}");
        }
    }

    #[test]
    fn opposite_windings_mirror() {
        let spawn = Pose::new(Vec3::ZERO, 0.0);
        let (routes, graph) = empty_world();

        let mut cw = MotionCurveEngine::new(
            MovementMode::PatrolCircular { radius: 5.0, speed: 3.0, clockwise: true },
            spawn,
        );
        let mut ccw = MotionCurveEngine::new(
            MovementMode::PatrolCircular { radius: 5.0, speed: 3.0, clockwise: false },
            spawn,
        );
        let mut pose_cw = spawn;
        let mut pose_ccw = spawn;
        let mut r = rng(1);
        for _ in 0..10 {
            cw.advance(&mut pose_cw, DT, &routes, &graph, &mut r);
            ccw.advance(&mut pose_ccw, DT, &routes, &graph, &mut r);
        }
        // Same x, opposite z: the parametrisations are mirror images.
        assert!((pose_cw.position.x - pose_ccw.position.x).abs() < 1e-4);
        assert!((pose_cw.position.z + pose_ccw.position.z).abs() < 1e-4);
    }

    #[test]
    fn ellipse_respects_both_radii() {
        let spawn = Pose::new(Vec3::ZERO, 0.0);
        let mode = MovementMode::PatrolElliptical {
            radius_x: 6.0,
            radius_z: 2.0,
            speed: 3.0,
            clockwise: false,
        };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let (routes, graph) = empty_world();
        let mut r = rng(1);
        for _ in 0..300 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
            assert!(pose.position.x.abs() <= 6.0 + 1e-3);
            assert!(pose.position.z.abs() <= 2.0 + 1e-3);
        }
    }

    #[test]
    fn figure_eight_bounding_box() {
        let spawn = Pose::new(Vec3::ZERO, 0.0);
        let mode = MovementMode::PatrolFigureEight { size: 4.0, speed: 2.0 };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let (routes, graph) = empty_world();
        let mut r = rng(1);
        let mut crossed_centre = false;
        for _ in 0..500 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
            assert!(pose.position.x.abs() <= 4.0 + 1e-3);
            assert!(pose.position.z.abs() <= 2.0 + 1e-3);
            if pose.position.x < 0.0 {
                crossed_centre = true;
            }
        }
        assert!(crossed_centre, "figure-eight never reached its far lobe");
    }

    #[test]
    fn zero_radius_curve_is_a_no_op() {
        let spawn = Pose::new(Vec3::ZERO, 0.0);
        let mode = MovementMode::PatrolCircular { radius: 0.0, speed: 3.0, clockwise: false };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let (routes, graph) = empty_world();
        let mut r = rng(1);
        for _ in 0..20 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
        }
        assert_eq!(pose.position, spawn.position);
    }
}

// ── Route following ───────────────────────────────────────────────────────────

#[cfg(test)]
mod routes {
    use super::*;

    fn fast(mode: MovementMode, spawn: Pose) -> MotionCurveEngine {
        MotionCurveEngine::new(mode, spawn)
    }

    #[test]
    fn loop_visits_indices_in_cyclic_order() {
        let (routes, [a, ..]) = l_route();
        let spawn = Pose::new(a, 0.0);
        let mode = MovementMode::PatrolLoop { route: RouteId(0), speed: 200.0, wait_secs: 0.0 };
        let mut engine = fast(mode, spawn);
        let mut pose = spawn;
        let trace = index_trace(&mut engine, &mut pose, &routes, 16);
        assert_eq!(trace, vec![0, 1, 2, 0, 1, 2, 0, 1, 2]);
    }

    #[test]
    fn ping_pong_bounce_sequence() {
        // The documented bounce: [A,B,C] visits A,B,C,B,A,B,C,…
        let (routes, [a, ..]) = l_route();
        let spawn = Pose::new(a, 0.0);
        let mode =
            MovementMode::PatrolPingPong { route: RouteId(0), speed: 200.0, wait_secs: 0.0 };
        let mut engine = fast(mode, spawn);
        let mut pose = spawn;
        let trace = index_trace(&mut engine, &mut pose, &routes, 22);
        assert_eq!(trace, vec![0, 1, 2, 1, 0, 1, 2, 1, 0, 1, 2, 1]);
    }

    #[test]
    fn ping_pong_two_point_route() {
        // Degenerate clamp: len-2 == 0, so the sequence is a plain shuttle.
        let mut routes = RouteSet::new();
        routes.insert(PatrolRoute::new(
            "pair",
            vec![Vec3::ZERO, Vec3::new(10.0, 0.0, 0.0)],
        ));
        let spawn = Pose::new(Vec3::ZERO, 0.0);
        let mode =
            MovementMode::PatrolPingPong { route: RouteId(0), speed: 200.0, wait_secs: 0.0 };
        let mut engine = fast(mode, spawn);
        let mut pose = spawn;
        let trace = index_trace(&mut engine, &mut pose, &routes, 16);
        assert_eq!(trace, vec![0, 1, 0, 1, 0, 1, 0, 1, 0]);
    }

    #[test]
    fn single_point_route_stays_put() {
        let mut routes = RouteSet::new();
        routes.insert(PatrolRoute::new("dot", vec![Vec3::new(1.0, 0.0, 0.0)]));
        let spawn = Pose::new(Vec3::new(1.0, 0.0, 0.0), 0.0);
        let mode =
            MovementMode::PatrolPingPong { route: RouteId(0), speed: 200.0, wait_secs: 0.0 };
        let mut engine = fast(mode, spawn);
        let mut pose = spawn;
        let trace = index_trace(&mut engine, &mut pose, &routes, 12);
        assert_eq!(trace, vec![0]);
    }

    #[test]
    fn missing_or_empty_route_is_a_no_op() {
        let spawn = Pose::new(Vec3::new(1.0, 0.0, 1.0), 0.2);
        let graph = WaypointGraph::empty();
        let mut r = rng(3);

        // Route id that resolves to nothing.
        let mode = MovementMode::PatrolLoop { route: RouteId(5), speed: 10.0, wait_secs: 0.0 };
        let mut engine = fast(mode, spawn);
        let mut pose = spawn;
        let routes = RouteSet::new();
        for _ in 0..20 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
        }
        assert_eq!(pose, spawn);

        // Route that exists but has no points.
        let mut routes = RouteSet::new();
        routes.insert(PatrolRoute::new("empty", vec![]));
        let mode = MovementMode::PatrolLoop { route: RouteId(0), speed: 10.0, wait_secs: 0.0 };
        let mut engine = fast(mode, spawn);
        let mut pose = spawn;
        for _ in 0..20 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
        }
        assert_eq!(pose, spawn);
    }

    #[test]
    fn wait_timer_counts_only_while_arrived() {
        // 1 s wait at 0.1 s ticks: the index should hold for ~10 arrival
        // ticks before advancing.
        let (routes, [a, ..]) = l_route();
        let spawn = Pose::new(a, 0.0);
        let mode = MovementMode::PatrolLoop { route: RouteId(0), speed: 200.0, wait_secs: 1.0 };
        let mut engine = fast(mode, spawn);
        let mut pose = spawn;
        let graph = WaypointGraph::empty();
        let mut r = rng(3);

        let mut ticks_at_index_0 = 0;
        loop {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
            match engine.state() {
                ModeState::Route { index: 0, .. } => ticks_at_index_0 += 1,
                _ => break,
            }
            assert!(ticks_at_index_0 < 100, "index never advanced");
        }
        assert!(
            (9..=11).contains(&ticks_at_index_0),
            "expected ~10 waiting ticks, got {ticks_at_index_0}"
        );
    }

    #[test]
    fn never_overshoots_waypoint() {
        // Slow approach: every step lands short of or exactly on the target.
        let (routes, [a, b, _]) = l_route();
        let spawn = Pose::new(a, 0.0);
        let mode = MovementMode::PatrolLoop { route: RouteId(0), speed: 3.0, wait_secs: 0.0 };
        let mut engine = fast(mode, spawn);
        let mut pose = spawn;
        let graph = WaypointGraph::empty();
        let mut r = rng(3);
        for _ in 0..40 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
            if let ModeState::Route { index: 1, .. } = engine.state() {
                assert!(pose.position.x <= b.x + 1e-4, "overshot waypoint B");
            }
        }
    }
}

// ── Graph walk ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod graph_walk {
    use super::*;

    fn triangle() -> (WaypointGraph, WaypointId) {
        let mut b = WaypointGraphBuilder::new();
        let wa = b.add_waypoint("a", Vec3::ZERO);
        let wb = b.add_waypoint("b", Vec3::new(8.0, 0.0, 0.0));
        let wc = b.add_waypoint("c", Vec3::new(0.0, 0.0, 8.0));
        b.add_link(wa, wb);
        b.add_link(wb, wc);
        b.add_link(wc, wa);
        (b.build(), wa)
    }

    #[test]
    fn walks_between_linked_nodes() {
        let (graph, start) = triangle();
        let spawn = Pose::new(Vec3::ZERO, 0.0);
        let mode = MovementMode::WaypointGraphRandom {
            start,
            speed: 100.0,
            wait_secs: 0.0,
        };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let routes = RouteSet::new();
        let mut r = rng(11);

        let mut visited = std::collections::HashSet::new();
        for _ in 0..200 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
            if let ModeState::Graph { current, .. } = engine.state() {
                assert!(current.index() < graph.node_count(), "walked off the graph");
                visited.insert(*current);
            }
        }
        assert!(visited.len() >= 2, "random walk never left the start node");
    }

    #[test]
    fn isolated_node_never_changes() {
        let mut b = WaypointGraphBuilder::new();
        let lone = b.add_waypoint("lone", Vec3::new(2.0, 0.0, 2.0));
        let graph = b.build();

        let spawn = Pose::new(Vec3::new(2.0, 0.0, 2.0), 0.0);
        let mode = MovementMode::WaypointGraphRandom {
            start: lone,
            speed: 100.0,
            wait_secs: 0.0,
        };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let routes = RouteSet::new();
        let mut r = rng(5);
        for _ in 0..100 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
            match engine.state() {
                ModeState::Graph { current, .. } => assert_eq!(*current, lone),
                other => panic!("unexpected state {other:?}"),
            }
        }
        assert_eq!(pose.position, spawn.position);
    }

    #[test]
    fn stale_node_reference_is_a_no_op() {
        let (graph, _) = triangle();
        let spawn = Pose::new(Vec3::new(9.0, 0.0, 9.0), 0.0);
        let mode = MovementMode::WaypointGraphRandom {
            start: WaypointId(99),
            speed: 100.0,
            wait_secs: 0.0,
        };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let routes = RouteSet::new();
        let mut r = rng(5);
        for _ in 0..50 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
        }
        assert_eq!(pose, spawn);
    }
}

// ── Random wander ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod wander {
    use super::*;

    #[test]
    fn never_leaves_the_disk_for_any_seed() {
        let anchor = Vec3::new(-3.0, 0.0, 7.0);
        for seed in [1u64, 2, 42, 1234, 99999] {
            let spawn = Pose::new(anchor, 0.0);
            let mode = MovementMode::RandomWander { radius: 3.0, speed: 2.0, wait_secs: 0.1 };
            let mut engine = MotionCurveEngine::new(mode, spawn);
            let mut pose = spawn;
            let (routes, graph) = empty_world();
            let mut r = rng(seed);
            let mut max_dist = 0.0f32;
            for _ in 0..500 {
                engine.advance(&mut pose, DT, &routes, &graph, &mut r);
                max_dist = max_dist.max(pose.position.ground_distance(spawn.position));
                assert!(
                    pose.position.ground_distance(spawn.position) <= 3.0 + 1e-3,
                    "seed {seed}: wandered outside the disk"
                );
            }
            assert!(max_dist > 0.5, "seed {seed}: agent never wandered anywhere");
        }
    }

    #[test]
    fn targets_stay_inside_disk() {
        let spawn = Pose::new(Vec3::ZERO, 0.0);
        let mode = MovementMode::RandomWander { radius: 2.0, speed: 50.0, wait_secs: 0.0 };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let (routes, graph) = empty_world();
        let mut r = rng(8);
        for _ in 0..300 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
            if let ModeState::Wander { target, .. } = engine.state() {
                assert!(target.ground_distance(spawn.position) <= 2.0 + 1e-5);
            }
        }
    }
}

// ── Reset ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod reset {
    use super::*;

    #[test]
    fn reset_restores_initial_state() {
        let (routes, [a, ..]) = l_route();
        let spawn = Pose::new(a, 0.0);
        let mode = MovementMode::PatrolLoop { route: RouteId(0), speed: 200.0, wait_secs: 0.0 };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let graph = WaypointGraph::empty();
        let mut r = rng(2);
        for _ in 0..8 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
        }
        assert_ne!(engine.state(), &ModeState::initial(engine.mode(), engine.anchor()));
        engine.reset();
        assert_eq!(engine.state(), &ModeState::initial(engine.mode(), engine.anchor()));
    }

    #[test]
    fn arrival_epsilon_is_respected() {
        // An agent ARRIVE_EPSILON/2 from its target counts as arrived and
        // does not creep.
        let mut routes = RouteSet::new();
        routes.insert(PatrolRoute::new("dot", vec![Vec3::ZERO]));
        let near = Vec3::new(ARRIVE_EPSILON * 0.5, 0.0, 0.0);
        let spawn = Pose::new(near, 0.0);
        let mode = MovementMode::PatrolLoop { route: RouteId(0), speed: 10.0, wait_secs: 5.0 };
        let mut engine = MotionCurveEngine::new(mode, spawn);
        let mut pose = spawn;
        let graph = WaypointGraph::empty();
        let mut r = rng(2);
        for _ in 0..10 {
            engine.advance(&mut pose, DT, &routes, &graph, &mut r);
        }
        assert_eq!(pose.position, near);
    }
}
