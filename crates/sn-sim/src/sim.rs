//! The `Sim` struct and its tick loop.

use sn_agent::{AgentEvent, SentinelAgent};
use sn_capture::{
    AnimationSink, CapabilityTable, CapturePhase, CaptureRig, GameOverNotifier, TargetHandle,
    ViewpointController,
};
use sn_core::{AgentId, SimClock, SimConfig};
use sn_perception::{CandidateProvider, Detection, OcclusionTester, WeightProvider};
use sn_world::{RouteSet, WaypointGraph};

use crate::{AgentRngs, SimObserver};

/// The main simulation runner.
///
/// `Sim<C, O>` holds all simulation state and drives the two-phase tick
/// loop described in the crate docs.  The candidate provider `C` and
/// occlusion tester `O` are type parameters so scenes pick their spatial
/// backends at compile time (the stock pair is
/// [`sn_world::CandidateIndex`] + [`sn_world::ObstructionSet`]); the capture
/// collaborators are boxed trait objects because only the sequential apply
/// phase touches them.
///
/// Create via [`SimBuilder`][crate::SimBuilder].  External drivers that
/// mutate the environment between ticks (moving targets, rebuilt candidate
/// indices) call [`step`](Self::step) in their own loop; self-contained
/// runs use [`run`](Self::run).
pub struct Sim<C: CandidateProvider, O: OcclusionTester> {
    /// Global configuration (total ticks, seed, tick duration).
    pub config: SimConfig,

    /// Simulation clock — tracks the current tick.
    pub clock: SimClock,

    /// All sentinel agents, indexed by `AgentId`.
    pub agents: Vec<SentinelAgent>,

    /// Per-agent deterministic RNGs, separated for the split-borrow pattern.
    pub rngs: AgentRngs,

    /// Patrol routes consumed by the loop/ping-pong modes.
    pub routes: RouteSet,

    /// Waypoint graph consumed by the random-walk mode.
    pub graph: WaypointGraph,

    /// Spatial query over potential targets.  Rebuild between ticks if the
    /// targets move.
    pub candidates: C,

    /// Line-of-sight geometry.
    pub obstructions: O,

    /// Optional carried-weight query; absent means zero (no radius bonus).
    pub weight: Option<Box<dyn WeightProvider>>,

    // ── Capture collaborators (apply phase only) ──────────────────────────
    pub viewpoint: Option<Box<dyn ViewpointController>>,
    pub target: Option<Box<dyn TargetHandle>>,
    pub animation: Option<Box<dyn AnimationSink>>,
    pub controls: CapabilityTable,
    pub game_over: Box<dyn GameOverNotifier>,
}

impl<C: CandidateProvider, O: OcclusionTester> Sim<C, O> {
    // ── Public API ────────────────────────────────────────────────────────

    /// Run from the current tick to `config.end_tick()`, stopping early once
    /// every agent has terminated.  Observer hooks fire at every boundary.
    pub fn run<Ob: SimObserver>(&mut self, observer: &mut Ob) {
        loop {
            let now = self.clock.current_tick;
            if now >= self.config.end_tick() || self.all_terminated() {
                break;
            }
            observer.on_tick_start(now);
            let events = self.process_tick();
            self.report(observer, &events);
            observer.on_tick_end(now, events.len());
            self.clock.advance();
        }
        observer.on_sim_end(self.clock.current_tick);
    }

    /// Run exactly `n` ticks from the current position (ignores `end_tick`
    /// and termination).  Useful for tests and incremental stepping.
    pub fn run_ticks<Ob: SimObserver>(&mut self, n: u64, observer: &mut Ob) {
        for _ in 0..n {
            let now = self.clock.current_tick;
            observer.on_tick_start(now);
            let events = self.process_tick();
            self.report(observer, &events);
            observer.on_tick_end(now, events.len());
            self.clock.advance();
        }
    }

    /// Advance one tick and return the agent events it produced.  The
    /// external-driver entry point: mutate `candidates` / `weight` between
    /// calls as the scene evolves.
    pub fn step(&mut self) -> Vec<(AgentId, AgentEvent)> {
        let events = self.process_tick();
        self.clock.advance();
        events
    }

    /// `true` once every agent has reached `Terminated`.
    pub fn all_terminated(&self) -> bool {
        !self.agents.is_empty() && self.agents.iter().all(SentinelAgent::is_terminated)
    }

    /// Reset every agent (restoring external controls) — the "respawn all"
    /// entry point.
    pub fn reset_agents(&mut self) {
        let mut rig = CaptureRig {
            viewpoint: self.viewpoint.as_deref_mut(),
            target: self.target.as_deref_mut(),
            animation: self.animation.as_deref_mut(),
            controls: &mut self.controls,
            game_over: self.game_over.as_mut(),
        };
        for agent in &mut self.agents {
            agent.reset(&mut rig);
        }
    }

    // ── Core tick processing ──────────────────────────────────────────────

    fn process_tick(&mut self) -> Vec<(AgentId, AgentEvent)> {
        let dt = self.clock.dt();

        // Weight is a shared read-only query: resolve once per tick.
        let carried = self
            .weight
            .as_deref()
            .map_or(0.0, WeightProvider::total_carried_weight);

        // ── Phase 1: patrol + scan ────────────────────────────────────────
        let detections = self.patrol_phase(dt, carried);

        // ── Phase 2: apply (sequential, ascending AgentId) ────────────────
        //
        // Capture entry and advancement both reach external collaborators,
        // so this phase stays single-threaded regardless of features.
        let mut events: Vec<(AgentId, AgentEvent)> = Vec::new();
        let mut rig = CaptureRig {
            viewpoint: self.viewpoint.as_deref_mut(),
            target: self.target.as_deref_mut(),
            animation: self.animation.as_deref_mut(),
            controls: &mut self.controls,
            game_over: self.game_over.as_mut(),
        };

        for (i, agent) in self.agents.iter_mut().enumerate() {
            let id = AgentId(i as u32);
            if let Some(phase) = agent.capture_tick(dt, &mut rig) {
                events.push((id, AgentEvent::PhaseChanged(phase)));
            } else if let Some(detection) = detections[i] {
                agent.begin_capture(detection, &mut rig);
                events.push((id, AgentEvent::Detected(detection.target)));
            }
        }
        events
    }

    /// Advance movement and scan for every agent; parallel when enabled.
    fn patrol_phase(&mut self, dt: f32, carried: f32) -> Vec<Option<Detection>> {
        // Explicit field borrows so the borrow checker sees disjoint access.
        let routes = &self.routes;
        let graph = &self.graph;
        let candidates = &self.candidates;
        let obstructions = &self.obstructions;
        let agents = &mut self.agents;
        let rngs = &mut self.rngs.inner;

        #[cfg(not(feature = "parallel"))]
        {
            agents
                .iter_mut()
                .zip(rngs.iter_mut())
                .map(|(agent, rng)| {
                    agent.patrol_tick(dt, routes, graph, candidates, obstructions, carried, rng)
                })
                .collect()
        }

        #[cfg(feature = "parallel")]
        {
            use rayon::prelude::*;

            agents
                .par_iter_mut()
                .zip(rngs.par_iter_mut())
                .map(|(agent, rng)| {
                    agent.patrol_tick(dt, routes, graph, candidates, obstructions, carried, rng)
                })
                .collect()
        }
    }

    fn report<Ob: SimObserver>(&self, observer: &mut Ob, events: &[(AgentId, AgentEvent)]) {
        let now = self.clock.current_tick;
        for &(agent, event) in events {
            match event {
                AgentEvent::Detected(target) => observer.on_detection(now, agent, target),
                AgentEvent::PhaseChanged(phase) => {
                    observer.on_capture_phase(now, agent, phase);
                    if phase == CapturePhase::Resolved {
                        observer.on_game_over(now, agent);
                    }
                }
            }
        }
    }
}
