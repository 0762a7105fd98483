//! gallery — night-watch demo for the sentinel agent engine.
//!
//! Three sentinels guard a small museum floor: one shuttles the east wing,
//! one circles the rotunda, one random-walks the corridor waypoint graph.
//! A scripted intruder sneaks in from the entrance, picking up loot as they
//! go — and the heavier the bag, the farther the sentinels can smell it.
//!
//! Runs until a sentinel completes its capture (game over) or the intruder
//! improbably reaches the vault.

use std::io::Cursor;
use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Arc;

use anyhow::{Context, Result};

use sn_agent::{AgentEvent, LifecycleState, SentinelConfig};
use sn_capture::{
    AnimationSink, CapabilityTable, CaptureConfig, GameOverNotifier, TargetHandle,
    ViewpointController,
};
use sn_core::{Pose, SimConfig, SimRng, TargetId, Vec3};
use sn_motion::MovementMode;
use sn_perception::{Candidate, PerceptionConfig, TargetTag, WeightProvider};
use sn_sim::SimBuilder;
use sn_world::{load_graph_reader, load_routes_reader, Aabb, CandidateIndex, ObstructionSet};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED: u64 = 42;
const TICK_SECS: f32 = 0.05; // 20 Hz
const MAX_TICKS: u64 = 6_000; // 5 simulated minutes
const INTRUDER_SPEED: f32 = 1.4; // a cautious walk

// ── Scene data ────────────────────────────────────────────────────────────────

// Corridor waypoints for the random-walk sentinel.
const GRAPH_CSV: &str = "\
name,x,y,z,links
lobby,0,0,10,west-hall;east-hall
west-hall,-8,0,6,vault-door
east-hall,8,0,6,vault-door
vault-door,0,0,-2,
";

// East-wing shuttle for the ping-pong sentinel.
const ROUTES_CSV: &str = "\
route,seq,x,y,z
east-wing,0,4,0,12
east-wing,1,10,0,12
east-wing,2,10,0,4
";

// The intruder's plan: entrance → east hall → vault.
const SNEAK_PATH: [Vec3; 4] = [
    Vec3 { x: 2.0, y: 0.0, z: 16.0 },
    Vec3 { x: 6.0, y: 0.0, z: 9.0 },
    Vec3 { x: 3.0, y: 0.0, z: 3.0 },
    Vec3 { x: 0.0, y: 0.0, z: -2.0 },
];

// ── Scene-side collaborators ──────────────────────────────────────────────────

/// The player camera: just records where the capture put it.
#[derive(Default)]
struct Camera {
    position: Vec3,
    looking_at: Vec3,
}

impl ViewpointController for Camera {
    fn set_position(&mut self, position: Vec3) {
        self.position = position;
    }
    fn look_at(&mut self, point: Vec3) {
        self.looking_at = point;
    }
}

/// The intruder's actor handle.
struct IntruderActor {
    visible: Arc<AtomicBool>,
    physics: Arc<AtomicBool>,
}

impl TargetHandle for IntruderActor {
    fn set_physics_enabled(&mut self, enabled: bool) {
        self.physics.store(enabled, Ordering::SeqCst);
    }
    fn set_visible(&mut self, visible: bool) {
        self.visible.store(visible, Ordering::SeqCst);
    }
}

struct ConsoleAnimations;

impl AnimationSink for ConsoleAnimations {
    fn fire_trigger(&mut self, name: &str) {
        println!("  [anim] trigger fired: {name}");
    }
}

#[derive(Clone)]
struct GameOverFlag(Arc<AtomicBool>);

impl GameOverNotifier for GameOverFlag {
    fn notify_game_over(&mut self) {
        self.0.store(true, Ordering::SeqCst);
    }
}

/// The loot bag: weight readable by every sentinel, bumped by the script.
#[derive(Clone)]
struct LootBag(Arc<AtomicU32>);

impl LootBag {
    fn new() -> Self {
        Self(Arc::new(AtomicU32::new(0f32.to_bits())))
    }
    fn add_kg(&self, kg: f32) {
        let current = f32::from_bits(self.0.load(Ordering::SeqCst));
        self.0.store((current + kg).to_bits(), Ordering::SeqCst);
    }
    fn kg(&self) -> f32 {
        f32::from_bits(self.0.load(Ordering::SeqCst))
    }
}

impl WeightProvider for LootBag {
    fn total_carried_weight(&self) -> f32 {
        self.kg()
    }
}

// ── Sentinel roster ───────────────────────────────────────────────────────────

fn night_watch_perception() -> PerceptionConfig {
    PerceptionConfig {
        base_radius: 5.0,
        half_angle_deg: 55.0,
        eye_height: 1.7,
        weight_sensitivity: 0.4,
    }
}

fn night_watch_capture() -> CaptureConfig {
    CaptureConfig {
        disable_controls: vec!["player-move".to_string(), "camera-look".to_string()],
        ..CaptureConfig::default()
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== gallery — sentinel night watch ===");
    println!("Seed: {SEED}  |  Tick: {TICK_SECS}s  |  Cap: {MAX_TICKS} ticks");
    println!();

    // 1. World data.
    let graph = load_graph_reader(Cursor::new(GRAPH_CSV)).context("corridor graph")?;
    let routes = load_routes_reader(Cursor::new(ROUTES_CSV)).context("patrol routes")?;
    let start_node = graph.find("lobby").context("lobby waypoint missing")?;
    let east_wing = routes.find("east-wing").context("east-wing route missing")?;
    println!(
        "Floor plan: {} waypoints, {} links, {} routes",
        graph.node_count(),
        graph.link_count(),
        routes.len()
    );

    // Display cases block sight lines across the rotunda.
    let mut obstructions = ObstructionSet::new();
    obstructions.add(Aabb::new(Vec3::new(-1.5, 0.0, 6.5), Vec3::new(1.5, 2.2, 7.5)));
    obstructions.add(Aabb::new(Vec3::new(4.5, 0.0, -0.5), Vec3::new(6.5, 2.2, 0.5)));

    // 2. Scene collaborators.
    let intruder_visible = Arc::new(AtomicBool::new(true));
    let intruder_physics = Arc::new(AtomicBool::new(true));
    let game_over = GameOverFlag(Arc::new(AtomicBool::new(false)));
    let loot = LootBag::new();

    let mut controls = CapabilityTable::new();
    let move_enabled = Arc::new(AtomicBool::new(true));
    {
        let flag = Arc::clone(&move_enabled);
        controls.register("player-move", move |on: bool| flag.store(on, Ordering::SeqCst));
    }
    controls.register("camera-look", |_on: bool| {});

    // 3. Build the sim: three sentinels, three patrol styles.
    let config = SimConfig {
        tick_duration_secs: TICK_SECS,
        total_ticks: MAX_TICKS,
        seed: SEED,
        num_threads: None,
    };

    let mut sim = SimBuilder::new(config, CandidateIndex::new(), obstructions)
        .routes(routes)
        .graph(graph)
        .weight(Box::new(loot.clone()))
        .viewpoint(Box::new(Camera::default()))
        .target(Box::new(IntruderActor {
            visible: Arc::clone(&intruder_visible),
            physics: Arc::clone(&intruder_physics),
        }))
        .animation(Box::new(ConsoleAnimations))
        .controls(controls)
        .game_over(Box::new(game_over.clone()))
        // Shuttles the east wing back and forth.
        .spawn(
            Pose::new(Vec3::new(4.0, 0.0, 12.0), 0.0),
            SentinelConfig::new(
                MovementMode::PatrolPingPong { route: east_wing, speed: 1.8, wait_secs: 1.0 },
                night_watch_perception(),
                night_watch_capture(),
            ),
        )
        // Circles the rotunda.
        .spawn(
            Pose::new(Vec3::new(0.0, 0.0, 5.0), 0.0),
            SentinelConfig::new(
                MovementMode::PatrolCircular { radius: 4.0, speed: 1.5, clockwise: true },
                night_watch_perception(),
                night_watch_capture(),
            ),
        )
        // Wanders the corridor graph.
        .spawn(
            Pose::new(Vec3::new(0.0, 0.0, 10.0), 0.0),
            SentinelConfig::new(
                MovementMode::WaypointGraphRandom { start: start_node, speed: 1.2, wait_secs: 2.0 },
                night_watch_perception(),
                night_watch_capture(),
            ),
        )
        .build()?;

    // 4. Drive: the intruder sneaks along their path while movement is
    //    enabled, pocketing loot at each leg.
    let mut intruder_pos = SNEAK_PATH[0];
    let mut leg = 0usize;
    let mut scene_rng = SimRng::new(SEED);

    println!("Intruder enters at {intruder_pos} carrying nothing.");
    println!();

    while sim.clock.current_tick < sim.config.end_tick() {
        if move_enabled.load(Ordering::SeqCst) {
            let goal = SNEAK_PATH[leg.min(SNEAK_PATH.len() - 1)];
            intruder_pos = intruder_pos.move_towards(goal, INTRUDER_SPEED * TICK_SECS);
            if intruder_pos.distance(goal) < 0.1 && leg + 1 < SNEAK_PATH.len() {
                leg += 1;
                loot.add_kg(scene_rng.gen_range(2.0..5.0));
                println!(
                    "[{}] intruder reaches leg {leg}, bag now {:.0} kg",
                    sim.clock.current_tick,
                    loot.kg()
                );
            }
        }

        sim.candidates.rebuild(&[Candidate {
            id: TargetId(0),
            position: intruder_pos,
            tag: TargetTag::Intruder,
        }]);

        let tick = sim.clock.current_tick;
        for (agent, event) in sim.step() {
            match event {
                AgentEvent::Detected(_) => {
                    println!("[{tick}] sentinel {agent} spots the intruder!")
                }
                AgentEvent::PhaseChanged(phase) => {
                    println!("[{tick}] sentinel {agent} → {phase}")
                }
            }
        }

        if game_over.0.load(Ordering::SeqCst) {
            break;
        }
    }

    // 5. Epilogue.
    println!();
    if game_over.0.load(Ordering::SeqCst) {
        let caught_by = sim
            .agents
            .iter()
            .find(|a| a.lifecycle() == LifecycleState::Terminated)
            .map(|a| a.id().to_string())
            .unwrap_or_else(|| "someone".to_string());
        println!(
            "GAME OVER at {} — caught by {caught_by} with {:.0} kg of loot.",
            sim.clock.current_tick,
            loot.kg()
        );
        println!(
            "  intruder visible: {}, physics: {}, movement control: {}",
            intruder_visible.load(Ordering::SeqCst),
            intruder_physics.load(Ordering::SeqCst),
            move_enabled.load(Ordering::SeqCst)
        );
    } else {
        println!(
            "The intruder reached the vault untouched ({:.0} kg richer). The night watch naps on.",
            loot.kg()
        );
    }

    Ok(())
}
